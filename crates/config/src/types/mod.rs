//! Core value types for configuration access.
//!
//! Responsibilities:
//! - Define how a configuration source is described (`SourceDescriptor`).
//! - Define where configuration bytes come from (`ConfigSource`).
//! - Define dotted section addressing (`SectionPath`) and key normalization (`CasePolicy`).
//!
//! Does NOT handle:
//! - Locating files on disk (see `loader::resolver`).
//! - Parsing or narrowing documents (see `loader::document`).
//!
//! Invariants:
//! - All types here are immutable once constructed.
//! - A `ConfigSource` is shared between views through `Arc`, never copied into a new source.

mod case;
mod descriptor;
mod section;
mod source;

pub use case::CasePolicy;
pub use descriptor::SourceDescriptor;
pub use section::SectionPath;
pub use source::ConfigSource;
