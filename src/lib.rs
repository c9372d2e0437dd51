//! wowtool - World of Warcraft armory and realm status lookups
//!
//! Fetches the public character sheet and realm status XML feeds, maps them
//! to [`model::Character`] and [`model::Realm`] records and renders those as
//! text or YAML.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod format;
pub mod model;
pub mod parser;
pub mod tree;

pub use error::{Result, WowError};
