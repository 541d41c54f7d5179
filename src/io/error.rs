//! Error types for board construction, layout parsing and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all board operations
#[derive(Debug)]
pub enum BoardError {
    /// A matrix cell holds a code with no tile kind
    InvalidTileCode {
        /// Zero-based matrix row of the offending cell
        row: usize,
        /// Column of the offending cell
        column: usize,
        /// The unrecognised code
        code: u8,
    },

    /// A matrix row is not as long as the first row
    RaggedRow {
        /// Zero-based matrix row of the offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        found: usize,
    },

    /// The layout has no rows or no columns
    EmptyLayout,

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A layout file token is not a tile code
    LayoutParse {
        /// One-based line number in the layout text
        line: usize,
        /// The token that failed to parse
        token: String,
    },

    /// Failed to save the rendered board to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTileCode { row, column, code } => {
                write!(
                    f,
                    "Invalid tile code {code} at matrix row {row}, column {column} (0-based; expected 0-7)"
                )
            }
            Self::RaggedRow {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Matrix row {row} (0-based) has {found} columns but the layout is {expected} columns wide"
                )
            }
            Self::EmptyLayout => write!(f, "Layout contains no tiles"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::LayoutParse { line, token } => {
                write!(f, "Layout line {line}: '{token}' is not a tile code")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for board results
pub type Result<T> = std::result::Result<T, BoardError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> BoardError {
    BoardError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
