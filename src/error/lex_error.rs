#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing.
pub enum LexError {
    /// A `$...$` block comment was opened but never closed.
    UnterminatedComment,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedComment => write!(f, "unterminated comment"),
        }
    }
}

impl std::error::Error for LexError {}
