use thiserror::Error;

/// Error surface shown to the surrounding CRUD layer. Validation problems
/// block the operation before any partial state is created; job and watcher
/// paths never surface `NotFound` at all, they skip silently.
#[derive(Error, Debug)]
pub enum HuddleError {
    #[error("Internal server error")]
    InternalError,
    #[error("Invalid data provided: Error message: `{0}`")]
    BadClientData(String),
    #[error("There was a conflict with the request. Error message: `{0}`")]
    Conflict(String),
    #[error("404 Not found. Error message: `{0}`")]
    NotFound(String),
}
