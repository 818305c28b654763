use thiserror::Error;

#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Duplicate {entity_type} id: {id}")]
    Duplicate { entity_type: String, id: String },

    #[error("Invalid input: {field} - {message}")]
    InvalidInput { field: String, message: String },

    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, LibraryError>;
