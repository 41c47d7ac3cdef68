use crate::errors::HomepageError;

#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("No element matches selector '{selector}'")]
    NodeNotFound { selector: String },
}

impl HomepageError for SurfaceError {
    fn error_code(&self) -> &'static str {
        match self {
            SurfaceError::NodeNotFound { .. } => "SURFACE_NODE_NOT_FOUND",
        }
    }
}
