use crate::errors::HomepageError;
use crate::fetch::FetchError;
use crate::surface::SurfaceError;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Failed to bind dashboard: {source}")]
    Bind {
        #[from]
        source: SurfaceError,
    },

    #[error("Failed to create transport: {source}")]
    Transport {
        #[from]
        source: FetchError,
    },

    #[error("Dashboard task '{task}' failed: {message}")]
    TaskFailed { task: String, message: String },
}

impl HomepageError for DashboardError {
    fn error_code(&self) -> &'static str {
        match self {
            DashboardError::Bind { .. } => "DASHBOARD_BIND_FAILED",
            DashboardError::Transport { .. } => "DASHBOARD_TRANSPORT_FAILED",
            DashboardError::TaskFailed { .. } => "DASHBOARD_TASK_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DashboardError::Transport { source } => source.is_user_error(),
            _ => false,
        }
    }
}
