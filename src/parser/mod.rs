//! Source document parsers.

pub mod docx;
mod options;

pub use docx::DocxParser;
pub use options::{OutputMode, SynthesisOptions, UnknownStylePolicy};
