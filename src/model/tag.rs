/// Declares a closed set of lowercase feed tags with an `Unknown` fallback.
///
/// The generated enum normalizes input to lowercase, serializes as its tag
/// string and keeps unrecognized tags verbatim (lowercased) so newer feed
/// values still round-trip.
macro_rules! tag_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $tag:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            /// A tag not known to this version, stored lowercase
            Unknown(String),
        }

        impl $name {
            pub fn from_tag(raw: &str) -> Self {
                let tag = raw.trim().to_lowercase();
                match tag.as_str() {
                    $($tag $(| $alias)* => Self::$variant,)+
                    _ => Self::Unknown(tag),
                }
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $tag,)+
                    Self::Unknown(tag) => tag.as_str(),
                }
            }

            /// The tag with its first letter capitalized, as shown to users
            pub fn display_name(&self) -> String {
                $crate::model::capitalize(self.as_str())
            }
        }

        impl From<String> for $name {
            fn from(raw: String) -> Self {
                Self::from_tag(&raw)
            }
        }

        impl From<$name> for String {
            fn from(tag: $name) -> Self {
                tag.as_str().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
