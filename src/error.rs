/// Detailed cause of a [`ParseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// An authority is present but its host is empty.
    ///
    /// The error index points to where the host should start.
    EmptyHost,
    /// The port is longer than five characters, non-numeric, or above 65535.
    ///
    /// The error index points to the colon ":" preceding the port.
    InvalidPort,
}

/// An error occurred when splitting a URL into its components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub(crate) index: usize,
    pub(crate) kind: ParseErrorKind,
}

impl ParseError {
    /// Returns the index where the error occurred in the input string.
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the detailed cause of the error.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

impl std::error::Error for ParseError {}
