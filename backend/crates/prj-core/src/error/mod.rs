use crate::ObjectId;

use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Outcome of a project operation that did not succeed.
///
/// The HTTP layer owns the mapping from these kinds to status codes.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A required field is missing or empty
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// The identifier is not a 24-character hex token
    #[error("Invalid id: {value} is not a valid id {location}")]
    InvalidId {
        value: String,
        location: ErrorLocation,
    },

    #[error("Project {id} not found {location}")]
    NotFound {
        id: ObjectId,
        location: ErrorLocation,
    },

    /// The store accepted the write but handed back no record
    #[error("Project not created {location}")]
    NotCreated { location: ErrorLocation },

    /// The store itself failed (I/O, driver, corrupt row)
    #[error("Store error: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
