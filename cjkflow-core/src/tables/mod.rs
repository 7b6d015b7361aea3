//! Fixed punctuation, enclosure and metadata tables
//!
//! All tables are compile-time constants; nothing here is mutable or
//! initialized at runtime.

pub mod enclosure;
pub mod metadata;
pub mod punctuation;

pub use enclosure::*;
pub use metadata::*;
pub use punctuation::*;
