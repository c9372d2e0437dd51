use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WowError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request to {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("XML parsing error: {0}")]
    XmlParse(String),

    #[error("Missing element: {0}")]
    MissingElement(String),

    #[error("Element <{element}> has no '{attribute}' attribute")]
    MissingAttribute { element: String, attribute: String },

    #[error("Invalid value for {field}: '{value}'")]
    InvalidValue { field: String, value: String },

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("You need to choose a realm!")]
    MissingRealm,

    #[error("No matching realms!")]
    NoMatchingRealms(String),
}

impl WowError {
    /// Errors the driver reports as guidance instead of failing the run.
    pub fn is_user_error(&self) -> bool {
        matches!(self, WowError::MissingRealm | WowError::NoMatchingRealms(_))
    }
}

pub type Result<T> = std::result::Result<T, WowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors() {
        assert!(WowError::MissingRealm.is_user_error());
        assert!(WowError::NoMatchingRealms("Nope".to_string()).is_user_error());
        assert!(!WowError::XmlParse("bad".to_string()).is_user_error());
        assert!(!WowError::HttpStatus {
            url: "http://example.com".to_string(),
            status: 500
        }
        .is_user_error());
    }

    #[test]
    fn test_display_messages() {
        let err = WowError::MissingAttribute {
            element: "character".to_string(),
            attribute: "level".to_string(),
        };
        assert_eq!(err.to_string(), "Element <character> has no 'level' attribute");
        assert_eq!(WowError::MissingRealm.to_string(), "You need to choose a realm!");
    }
}
