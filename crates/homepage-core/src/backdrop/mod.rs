//! Blur toggle for the background image.
//!
//! The backdrop is either blurred (content visible, image softened) or
//! unblurred (image in full, content hidden). The user flips it through the
//! `.view-image` control. State lives only in memory and always starts
//! blurred.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::info;

use crate::surface::{BackdropNodes, Surface, SurfaceError, swap_class};

pub const BLUR_CLASS: &str = "blur";
pub const UNBLUR_CLASS: &str = "unblur";
pub const SHOW_CLASS: &str = "show";
pub const HIDE_CLASS: &str = "hide";
pub const VIEW_IMAGE_LABEL: &str = "view image";
pub const HIDE_IMAGE_LABEL: &str = "hide image";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackdropState {
    #[default]
    Blurred,
    Unblurred,
}

impl BackdropState {
    pub fn toggled(self) -> Self {
        match self {
            BackdropState::Blurred => BackdropState::Unblurred,
            BackdropState::Unblurred => BackdropState::Blurred,
        }
    }

    /// Label for the control: the action it will perform next.
    pub fn control_label(self) -> &'static str {
        match self {
            BackdropState::Blurred => VIEW_IMAGE_LABEL,
            BackdropState::Unblurred => HIDE_IMAGE_LABEL,
        }
    }
}

impl fmt::Display for BackdropState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackdropState::Blurred => write!(f, "blurred"),
            BackdropState::Unblurred => write!(f, "unblurred"),
        }
    }
}

/// What happens to the blur when a new background image is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefreshPolicy {
    /// Every new image goes back to blurred.
    Reset,
    /// Keep whatever the user chose last.
    #[default]
    Preserve,
}

impl fmt::Display for RefreshPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RefreshPolicy::Reset => write!(f, "reset"),
            RefreshPolicy::Preserve => write!(f, "preserve"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BackdropController {
    nodes: BackdropNodes,
    state: BackdropState,
}

impl BackdropController {
    /// Bind the backdrop nodes and bring the surface to the blurred state.
    pub fn bind<S: Surface + ?Sized>(surface: &mut S) -> Result<Self, SurfaceError> {
        let controller = Self {
            nodes: BackdropNodes::bind(surface)?,
            state: BackdropState::default(),
        };
        controller.apply(surface);
        Ok(controller)
    }

    pub fn state(&self) -> BackdropState {
        self.state
    }

    /// Flip the state and update the surface. Returns the new state.
    pub fn toggle<S: Surface + ?Sized>(&mut self, surface: &mut S) -> BackdropState {
        let from = self.state;
        self.state = from.toggled();
        self.apply(surface);

        info!(
            event = "core.backdrop.toggle_completed",
            from = %from,
            to = %self.state
        );
        self.state
    }

    /// Write the classes and label for the current state.
    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S) {
        let (background_on, background_off, content_on, content_off) = match self.state {
            BackdropState::Blurred => (BLUR_CLASS, UNBLUR_CLASS, SHOW_CLASS, HIDE_CLASS),
            BackdropState::Unblurred => (UNBLUR_CLASS, BLUR_CLASS, HIDE_CLASS, SHOW_CLASS),
        };

        swap_class(surface, self.nodes.background, background_on, background_off);
        for &node in &self.nodes.content {
            swap_class(surface, node, content_on, content_off);
        }
        surface.set_text(self.nodes.control, self.state.control_label());
    }

    /// Called after a new background image has been painted.
    pub fn on_background_applied<S: Surface + ?Sized>(
        &mut self,
        surface: &mut S,
        policy: RefreshPolicy,
    ) {
        if policy == RefreshPolicy::Reset && self.state != BackdropState::Blurred {
            info!(
                event = "core.backdrop.reset_completed",
                from = %self.state
            );
            self.state = BackdropState::Blurred;
        }
        self.apply(surface);
    }
}
