//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use towerfield::BoardError;
    use towerfield::io::error::invalid_parameter;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = BoardError::FileSystem {
            path: "/tmp/level.txt".into(),
            operation: "read layout",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(BoardError::EmptyLayout.source().is_none());
    }

    // Tests invalid code message names position and code
    // Verified by omitting the column from the message
    #[test]
    fn test_invalid_tile_code_message() {
        let message = BoardError::InvalidTileCode {
            row: 3,
            column: 7,
            code: 9,
        }
        .to_string();

        assert!(message.contains("code 9"));
        assert!(message.contains("matrix row 3"));
        assert!(message.contains("0-based"));
        assert!(message.contains("column 7"));
    }

    // Tests ragged row message includes both lengths
    // Verified by omitting the expected width
    #[test]
    fn test_ragged_row_message() {
        let message = BoardError::RaggedRow {
            row: 2,
            expected: 10,
            found: 8,
        }
        .to_string();

        assert!(message.contains("row 2 (0-based)"));
        assert!(message.contains("10"));
        assert!(message.contains('8'));
    }

    // Tests InvalidParameter helper fills every field
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let message = invalid_parameter("tile_size", &0, &"must be positive").to_string();

        assert!(message.contains("tile_size"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be positive"));
    }

    // Tests layout parse message quotes the token and line
    // Verified by dropping the line number
    #[test]
    fn test_layout_parse_message() {
        let message = BoardError::LayoutParse {
            line: 4,
            token: "x".to_string(),
        }
        .to_string();

        assert!(message.contains("line 4"));
        assert!(message.contains("'x'"));
    }
}
