//! Error taxonomy for one compilation attempt.
//!
//! Lexical and syntax rejections, and the internal reduction-consistency
//! failure, are terminal: the engine surfaces exactly one of them and no
//! output artifact exists.  Binding problems are different -- they are
//! reported where they occur, suppress the instruction that needed the
//! binding, and the compilation continues; they travel with the accepted
//! result as diagnostics.

use thiserror::Error;

/// A terminal compilation failure.
#[derive(Debug, Error)]
pub enum CompileError {
    /// The scanner could not classify a lexeme.
    #[error("cannot classify lexeme {lexeme:?}")]
    Lexical { lexeme: String },

    /// The action table rejects the lookahead in the current state.
    #[error("input rejected at token {lexeme:?} (symbol {symbol})")]
    Syntax { lexeme: String, symbol: i16 },

    /// A popped stack symbol did not match the production's signature.
    /// This is an internal table/engine inconsistency, not a user error.
    #[error(
        "reduction error in production {production}: expected symbol {expected}, found {found}"
    )]
    Reduction {
        production: i16,
        expected: i16,
        found: i16,
    },

    /// A symbol id with no column in the action table reached the engine.
    /// Internal inconsistency, as above.
    #[error("symbol {symbol} has no column in the action table")]
    MissingColumn { symbol: i16 },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// A non-fatal binding diagnostic.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    #[error("symbol already in table: {0}")]
    NameTaken(String),

    #[error("name does not exist in symbol table: {0}")]
    NameNotFound(String),

    #[error("identifier {0} is used but never declared")]
    Undeclared(String),
}
