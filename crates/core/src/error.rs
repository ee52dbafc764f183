#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("principle not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read content file: {0}")]
    FileRead(std::io::Error),
    #[error("content error: {0}")]
    Content(#[from] solid_content::ContentError),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
