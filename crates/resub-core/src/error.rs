use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No valid search pattern")]
    EmptyPattern,

    #[error("Invalid regex: {0}")]
    InvalidPattern(String),

    #[error("Invalid settings value: {0:?}")]
    InvalidSettingsValue(String),

    #[error("History index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Errors caused by what the user typed, as opposed to collaborator or
    /// caller defects.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            Error::EmptyPattern | Error::InvalidPattern(_) | Error::InvalidSettingsValue(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
