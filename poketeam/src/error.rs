use std::fmt::Display;

use thiserror::Error;

/// Error for a team that cannot be turned into a share token.
#[derive(Debug, Error)]
#[error("failed to encode team")]
pub struct EncodingError {
    #[from]
    source: serde_json::Error,
}

/// Error for a share token that does not hold a team.
#[derive(Debug, Error)]
pub enum DecodingError {
    #[error("token is not valid base64")]
    InvalidToken(#[source] base64::DecodeError),
    #[error("token does not hold UTF-8 text")]
    InvalidText(#[source] std::string::FromUtf8Error),
    #[error("token does not hold a team")]
    InvalidTeam(#[source] serde_json::Error),
}

/// Error for an edit that cannot be applied to a team's roster.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum TeamError {
    #[error("team already has {max} Pokémon")]
    RosterFull { max: usize },
    #[error("Pokémon {id} is not on the team")]
    PokemonNotFound { id: String },
}

/// Error for a team that failed validation.
#[derive(Debug, Error)]
pub struct TeamValidationError {
    problems: Vec<String>,
}

impl TeamValidationError {
    /// Creates a new validation error from a list of problems.
    pub fn new<I, S>(problems: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            problems: problems.into_iter().map(|problem| problem.into()).collect(),
        }
    }

    /// All problems, in the order they were found.
    pub fn problems(&self) -> impl Iterator<Item = &str> {
        self.problems.iter().map(|s| s.as_str())
    }
}

impl Display for TeamValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed: {}", self.problems.join("; "))
    }
}

/// Error for a blob store that could not be reached.
///
/// Never escapes the store layer. [`crate::store::TeamStore`] logs it and returns an inert result.
#[derive(Debug, Error)]
#[error("team storage is unavailable: {source:#}")]
pub struct StoreUnavailable {
    #[source]
    source: anyhow::Error,
}

impl StoreUnavailable {
    pub fn new(source: anyhow::Error) -> Self {
        Self { source }
    }
}
