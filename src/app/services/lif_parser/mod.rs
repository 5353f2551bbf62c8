//! Parser for `.lif` race record files
//!
//! Race timing systems export one loosely structured text file per event,
//! mixing heat sheets and championship finals. This module turns a raw file
//! into the structured pieces the scoring service consumes.
//!
//! ## Architecture
//!
//! The parser is organized into small, synchronous components:
//! - [`tokenizer`] - Permissive file reading and line tokenization
//! - [`segmenter`] - Grouping lines into per-race blocks on the "Final" marker
//! - [`record_parser`] - Individual result row parsing
//! - [`stats`] - Parsing statistics for reporting
//!
//! ## Usage
//!
//! ```rust
//! use waka_tally::app::services::lif_parser::{segmenter, tokenizer};
//!
//! let lines = tokenizer::tokenize_lines("Final Race 12,,\n1,2,L3,T,N,Horouta,,\n");
//! let blocks = segmenter::segment_races(&lines);
//! assert_eq!(blocks.len(), 1);
//! assert_eq!(blocks[0].lines.len(), 1);
//! ```

pub mod record_parser;
pub mod segmenter;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use stats::ParseStats;
