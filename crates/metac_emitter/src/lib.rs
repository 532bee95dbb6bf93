//! metac_emitter: Target-language output.
//!
//! Walks a parsed syntax tree and writes the equivalent Java-like source:
//! 1. Translate tokens and keywords to target lexemes
//! 2. Print every node with the target's ordering and terminators
//! 3. Lay out and write output files

mod emitter;
mod output;
mod translator;

pub use emitter::{EmitOptions, EmitOutput, Emitter};
pub use output::{common_source_directory, write_output_files, OutputFile, OutputLayout};
pub use translator::TokenTranslator;
