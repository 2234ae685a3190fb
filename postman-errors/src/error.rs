use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IoError: {0}")]
    IoError(#[from] io::Error),
    #[error("The collection is not a valid Postman collection: {0}")]
    InvalidCollection(#[source] serde_json::Error),
    #[error("Response {status_code} of request \"{request}\" has a body that is not valid JSON: {source}")]
    InvalidResponseBody {
        request: String,
        status_code: u16,
        #[source]
        source: serde_json::Error,
    },
    #[error("The output folder {0} has no final path component to name the config section after")]
    InvalidOutputFolder(PathBuf),
    #[error("Couldn't serialize the output document: {0}")]
    SerializationError(#[source] serde_json::Error),
}
