use kiln_core::IdentifierError;
use thiserror::Error;

/// Errors raised while turning a class schema into source text.
#[derive(Debug, Error)]
pub enum AssemblyError {
    #[error("no class schema is bound to the assembler")]
    Unbound,

    #[error(transparent)]
    Schema(#[from] Box<kiln_bean::Error>),

    #[error("invalid property name: {0}")]
    Identifier(#[from] IdentifierError),
}

/// Errors raised by the formatter in strict mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// A closing brace without an opener, or openers left at end of input.
    #[error("unbalanced braces at line {line} (depth {depth})")]
    Unbalanced { line: usize, depth: isize },
}
