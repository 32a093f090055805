//! Query pipeline: kind classification, same-file filtering, tree walking
//! and name pattern matching.

mod kinds;
mod pattern;
mod same_file;
mod walker;

pub use kinds::SymbolKind;
pub use pattern::{CompiledPattern, MatchSpan};
pub use same_file::SameFileResolver;
pub use walker::{RawCandidate, collect};
