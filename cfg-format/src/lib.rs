//! Section-oriented configuration file format.
//!
//! An INI dialect with one level of section nesting (`[Section]` /
//! `[[Subsection]]`), ordered entries, and comma-separated list values.
//! Section and entry order is significant and preserved on both read and
//! write.

pub mod document;
pub mod reader;
pub mod writer;

pub use document::{Document, Entry, Section, Value};
pub use reader::{parse, CfgParseError};
pub use writer::write;
