use thiserror::Error;

/// Maximum number of characters of hand or line text kept in an error context.
pub const CONTEXT_LEN: usize = 100;

/// Failure extracting an action from a line that did match an action verb.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("could not parse name in action")]
    MissingActor,
    #[error("expected a currency amount")]
    Currency,
    #[error("invalid amount {value:?}")]
    InvalidAmount { value: String },
}

/// Category tag attached to every [`ParseError`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    NoHandId,
    ActionParse,
    Currency,
    Filesystem,
}

/// Per-hand or per-file failure reported alongside the successfully parsed hands.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no hand ID was found, ignoring hand: {context}")]
    NoHandId { context: String },
    #[error("failed to parse action on line {context:?}")]
    ActionParse {
        context: String,
        #[source]
        cause: LineError,
    },
    #[error("failed to read {source_name}: {message}")]
    Filesystem {
        source_name: String,
        message: String,
    },
}

impl ParseError {
    pub fn no_hand_id(text: &str) -> Self {
        ParseError::NoHandId {
            context: crate::lexical::truncate_with_ellipsis(text, CONTEXT_LEN),
        }
    }

    pub fn action(line: &str, cause: LineError) -> Self {
        ParseError::ActionParse {
            context: crate::lexical::truncate_with_ellipsis(line, CONTEXT_LEN),
            cause,
        }
    }

    pub fn filesystem(source_name: &str, err: &std::io::Error) -> Self {
        ParseError::Filesystem {
            source_name: source_name.to_string(),
            message: err.to_string(),
        }
    }

    /// A missing currency marker is still an action failure, but keeps its own tag.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::NoHandId { .. } => ErrorKind::NoHandId,
            ParseError::ActionParse {
                cause: LineError::Currency,
                ..
            } => ErrorKind::Currency,
            ParseError::ActionParse { .. } => ErrorKind::ActionParse,
            ParseError::Filesystem { .. } => ErrorKind::Filesystem,
        }
    }

    pub fn context(&self) -> &str {
        match self {
            ParseError::NoHandId { context } | ParseError::ActionParse { context, .. } => context,
            ParseError::Filesystem { source_name, .. } => source_name,
        }
    }
}
