use thiserror::Error;

/// Message shown to a user for any rejected input.
pub const USER_ERROR_MESSAGE: &str = "Error when calculating, make sure your inputs are correct.";

/// Why a coordinate or wind string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("missing or empty column segment")]
    InvalidColumn,

    #[error("row segment {segment:?} is not an integer")]
    InvalidRow { segment: String },

    #[error("keypad segment #{index} ({segment:?}) is not an integer")]
    InvalidRefinement { index: usize, segment: String },

    #[error("wind specification is empty")]
    EmptyWind,
}

impl ParseError {
    /// Every parse failure collapses into the same user-facing line; the
    /// variant is only for logs.
    pub fn user_message(&self) -> &'static str {
        USER_ERROR_MESSAGE
    }
}
