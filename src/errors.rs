use thiserror::Error;

pub const INVALID_APP_NAME_ERROR: &str =
    "Application name must contain only letters, numbers and dashes";

#[derive(Error, Debug, PartialEq)]
pub enum CreateError {
    #[error("{}", INVALID_APP_NAME_ERROR)]
    InvalidAppName,
    #[error("{message}")]
    ProcessFailed { program: String, message: String },
    #[error("{0} is not implemented yet")]
    NotImplemented(String),
    #[error("target directory `{0}` already exists, aborting!")]
    ProjectExists(String),
}
