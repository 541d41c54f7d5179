//! Text layout files: one board row per line
//!
//! Codes are separated by whitespace, commas or semicolons. Square brackets
//! are ignored, so array-literal rows such as `[0, 1, 4, 2],` and a closing
//! `];` read as-is. `#`
//! and `//` start a comment that runs to the end of the line, and lines with
//! no codes are skipped. Only tokenizing happens here; shape and code range
//! are checked when the grid is built, and those errors name zero-based
//! matrix rows, which do not count skipped lines.

use crate::io::error::{BoardError, Result};
use std::path::Path;

/// Split layout text into rows of codes
///
/// # Errors
///
/// Returns [`BoardError::LayoutParse`] for a token that is not an integer in
/// `0..=255`, or [`BoardError::EmptyLayout`] when no row holds any code.
pub fn parse_layout(text: &str) -> Result<Vec<Vec<u8>>> {
    let mut rows = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = strip_comment(raw_line);
        let mut row = Vec::new();

        for token in line
            .split(|c: char| c.is_whitespace() || matches!(c, ',' | '[' | ']' | ';'))
            .filter(|token| !token.is_empty())
        {
            let code = token
                .parse::<u8>()
                .ok()
                .ok_or_else(|| BoardError::LayoutParse {
                    line: index + 1,
                    token: token.to_string(),
                })?;
            row.push(code);
        }

        if !row.is_empty() {
            rows.push(row);
        }
    }

    if rows.is_empty() {
        return Err(BoardError::EmptyLayout);
    }

    Ok(rows)
}

/// Read and parse a layout file
///
/// # Errors
///
/// Returns an error if the file cannot be read or its contents fail
/// [`parse_layout`].
pub fn load_layout(path: &Path) -> Result<Vec<Vec<u8>>> {
    let text = std::fs::read_to_string(path).map_err(|e| BoardError::FileSystem {
        path: path.to_path_buf(),
        operation: "read layout",
        source: e,
    })?;
    parse_layout(&text)
}

fn strip_comment(line: &str) -> &str {
    let cut = [line.find('#'), line.find("//")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    line.get(..cut).unwrap_or(line)
}
