//! Line tokenization for race record files
//!
//! Reading is deliberately forgiving: timing-system exports are not reliably
//! UTF-8 and a missing file must not abort a batch of hundreds of records.

use encoding_rs::WINDOWS_1252;
use std::path::Path;
use tracing::{debug, warn};

/// Read a race record file into trimmed, non-empty lines.
///
/// Bytes are decoded as Windows-1252, which accepts any byte sequence, so
/// decoding never fails on the mixed encodings seen in the wild. A file
/// that cannot be read degrades to an empty sequence and contributes
/// nothing to the standings.
pub fn read_race_file(path: &Path) -> Vec<String> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!("Could not read race file {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let (text, _, _) = WINDOWS_1252.decode(&bytes);
    let lines = tokenize_lines(&text);
    debug!("Tokenized {} lines from {}", lines.len(), path.display());
    lines
}

/// Split raw text into whitespace-trimmed lines, dropping blanks.
///
/// Original line order is preserved.
pub fn tokenize_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
