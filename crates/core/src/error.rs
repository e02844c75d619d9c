use std::{fmt, io};

use thiserror::Error;

/// Errors that can occur while encoding values or converting them to scalars.
#[derive(Debug, Error)]
pub enum Error {
    #[error("unsupported type: {type_name}")]
    UnsupportedType { type_name: &'static str },

    #[error("failed to convert value at {position}")]
    Conversion {
        position: Position,
        #[source]
        source: Box<Error>,
    },

    #[error("failed to write encoded bytes")]
    Encoding(#[from] io::Error),

    #[error("NaN has no scalar representation")]
    NotANumber,

    #[error("{0}")]
    Custom(String),
}

impl Error {
    pub(crate) fn at(position: Position, source: Error) -> Self {
        Self::Conversion {
            position,
            source: Box::new(source),
        }
    }

    /// Returns the innermost error, skipping any positional context.
    #[must_use]
    pub fn root(&self) -> &Error {
        match self {
            Self::Conversion { source, .. } => source.root(),
            other => other,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self::Custom(msg.to_string())
    }
}

/// Where inside a compound value an error occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Position {
    /// The element at this index of a sequence or [`Values`](crate::Values).
    Index(usize),

    /// The entry of a map with this key, rendered for display.
    Key(String),
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "index {index}"),
            Self::Key(key) => write!(f, "key {key}"),
        }
    }
}
