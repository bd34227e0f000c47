use thiserror::Error;

/// Position inside an SVG source, used for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Optional file path
    pub file: Option<String>,
    /// Line number (1-indexed)
    pub line: usize,
    /// Column number (1-indexed, in characters)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            file: None,
            line,
            column,
        }
    }

    /// Resolve a byte offset into `input` to a line/column pair.
    ///
    /// Offsets past the end of the input clamp to the last position.
    pub fn from_offset(input: &str, offset: usize) -> Self {
        let mut end = offset.min(input.len());
        while !input.is_char_boundary(end) {
            end -= 1;
        }
        let before = &input[..end];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
        let column = before[line_start..].chars().count() + 1;
        Self::new(line, column)
    }

    /// Attach a file path to this location.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(file) = &self.file {
            write!(f, "{}:{}:{}", file, self.line, self.column)
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// Errors produced while cleaning, parsing or rewriting SVG markup.
#[derive(Debug, Error)]
pub enum SvgxError {
    /// Malformed markup reported by the XML reader or the tree builder.
    #[error("Parse error at {location}: {message}")]
    Parse {
        /// Error message
        message: String,
        /// Source location
        location: SourceLocation,
    },
    /// Markup that is not valid UTF-8.
    #[error("Encoding error at {location}: {source}")]
    Encoding {
        /// Underlying decode failure
        source: std::str::Utf8Error,
        /// Source location
        location: SourceLocation,
    },
}

impl SvgxError {
    /// Create a parse error located at `offset` bytes into `input`.
    pub fn parse_at(message: impl Into<String>, input: &str, offset: usize) -> Self {
        Self::Parse {
            message: message.into(),
            location: SourceLocation::from_offset(input, offset),
        }
    }

    /// Create an encoding error located at `offset` bytes into `input`.
    pub fn encoding_at(source: std::str::Utf8Error, input: &str, offset: usize) -> Self {
        Self::Encoding {
            source,
            location: SourceLocation::from_offset(input, offset),
        }
    }

    /// Where in the source the error occurred.
    pub fn location(&self) -> &SourceLocation {
        match self {
            SvgxError::Parse { location, .. } | SvgxError::Encoding { location, .. } => location,
        }
    }

    /// Attach the originating file to the error location.
    pub fn in_file(self, file: impl Into<String>) -> Self {
        match self {
            SvgxError::Parse { message, location } => SvgxError::Parse {
                message,
                location: location.with_file(file),
            },
            SvgxError::Encoding { source, location } => SvgxError::Encoding {
                source,
                location: location.with_file(file),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_resolves_to_line_and_column() {
        let input = "<svg>\n  <path d=\"M0 0\">\n</svg>";
        let offset = input.find("<path").unwrap();
        assert_eq!(SourceLocation::from_offset(input, offset), SourceLocation::new(2, 3));
        assert_eq!(SourceLocation::from_offset(input, 0), SourceLocation::new(1, 1));
    }

    #[test]
    fn offset_past_end_clamps() {
        let location = SourceLocation::from_offset("ab\ncd", 99);
        assert_eq!(location, SourceLocation::new(2, 3));
    }

    #[test]
    fn file_is_rendered_in_display() {
        let err = SvgxError::parse_at("unexpected end", "<svg>", 5).in_file("icons/home.svg");
        assert_eq!(
            err.to_string(),
            "Parse error at icons/home.svg:1:6: unexpected end"
        );
    }
}
