use std::{io, num::ParseFloatError};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read mesh: {0}")]
    Io(#[from] io::Error),
    #[error("malformed line {line_number}: `{line}`")]
    Format { line_number: usize, line: String },
    #[error("invalid number on line {line_number}: `{line}`")]
    Number {
        line_number: usize,
        line: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("non-finite number on line {line_number}: `{line}`")]
    NotFinite { line_number: usize, line: String },
    #[error("input ended after line {line_number} without `endsolid`")]
    UnexpectedEof { line_number: usize },
}

impl ParseError {
    /// The raw text of the offending line, if the error came from one.
    pub fn line(&self) -> Option<&str> {
        match self {
            ParseError::Format { line, .. }
            | ParseError::Number { line, .. }
            | ParseError::NotFinite { line, .. } => Some(line),
            ParseError::Io(_) | ParseError::UnexpectedEof { .. } => None,
        }
    }
}
