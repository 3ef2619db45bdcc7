use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed scene description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid scene: {reason}")]
    InvalidScene { reason: String },
}

impl Error {
    pub fn invalid_scene<S: Into<String>>(reason: S) -> Error {
        Error::InvalidScene {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
