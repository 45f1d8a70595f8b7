//! Folio page assembly
//!
//! Configuration loading, the mounted home page, and plain-text rendering
//! used by the `folio` binary.

pub mod config;
pub mod page;
pub mod render;

pub use config::{FolioConfig, TimingsConfig, TypewriterOverrides};
pub use page::{HeroLines, HomePage};
