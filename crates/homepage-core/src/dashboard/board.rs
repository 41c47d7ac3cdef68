use crate::backdrop::{BackdropController, RefreshPolicy};
use crate::surface::{Surface, SurfaceError};

/// Everything the dashboard tasks share: the surface and the backdrop state
/// that the background poller and the toggle both touch.
#[derive(Debug)]
pub struct Board<S> {
    pub surface: S,
    pub backdrop: BackdropController,
    pub refresh_policy: RefreshPolicy,
}

impl<S: Surface> Board<S> {
    pub fn new(mut surface: S, refresh_policy: RefreshPolicy) -> Result<Self, SurfaceError> {
        let backdrop = BackdropController::bind(&mut surface)?;
        Ok(Self {
            surface,
            backdrop,
            refresh_policy,
        })
    }
}
