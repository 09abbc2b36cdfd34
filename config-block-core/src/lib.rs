//! Ordered configuration block model.
//!
//! Every converter emits, and every renderer consumes, the same structure:
//! an [`Intermediate`] made of named [`Section`]s, each holding typed, named
//! [`Block`]s whose options live in an explicit ordered sequence
//! ([`BlockOptions`]). Nothing here knows about NetJSON or any target
//! platform.

pub mod block;
pub mod format;
pub mod intermediate;
pub mod name;
pub mod writer;

pub use block::{Block, BlockOptions, OptionValue};
pub use format::{format_json, format_summary, format_text};
pub use intermediate::{Intermediate, IntermediateError, Section};
pub use name::logical_name;
pub use writer::{write, write_file, WriteError};
