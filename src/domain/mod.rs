//! Domain layer for the Stargazer plugin.
//!
//! Core types that know nothing about Zellij or the wire format of the search
//! service.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Search result model (items, links, metadata)

pub mod error;
pub mod item;

pub use error::{Result, StargazerError};
pub use item::{ItemId, ItemLink, ItemMetadata, ResultItem, KEYWORDS_PLACEHOLDER};
