//! Display surface abstraction.
//!
//! The dashboard never looks nodes up by selector while running. Each
//! component binds its nodes once via [`Surface::query_all`] and keeps the
//! resulting [`NodeHandle`]s for every later write.

pub mod bindings;
pub mod errors;
pub mod memory;
pub mod selector;

pub use bindings::{BackdropNodes, BackgroundNodes, ClockNodes, GreetingNodes, WeatherNodes};
pub use errors::SurfaceError;
pub use memory::{MemorySurface, Mutation, MutationKind, NodeSnapshot};
pub use selector::Selector;

/// Stable reference to a node on a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub(crate) usize);

/// Query-and-mutate operations the dashboard needs from a display.
///
/// Writes to a handle the surface does not know are ignored.
pub trait Surface: Send {
    /// Every node matching `selector`, in document order.
    fn query_all(&mut self, selector: Selector) -> Vec<NodeHandle>;

    /// Current text content, `None` for an unknown handle.
    fn text(&self, node: NodeHandle) -> Option<&str>;

    fn set_text(&mut self, node: NodeHandle, text: &str);

    fn set_attribute(&mut self, node: NodeHandle, name: &str, value: &str);

    fn set_style(&mut self, node: NodeHandle, property: &str, value: &str);

    fn add_class(&mut self, node: NodeHandle, class: &str);

    fn remove_class(&mut self, node: NodeHandle, class: &str);

    fn has_class(&self, node: NodeHandle, class: &str) -> bool;
}

/// Bind exactly one node, failing if the selector matches nothing.
///
/// When several nodes match, the first one wins.
pub fn bind_one<S: Surface + ?Sized>(
    surface: &mut S,
    selector: Selector,
) -> Result<NodeHandle, SurfaceError> {
    surface
        .query_all(selector)
        .into_iter()
        .next()
        .ok_or_else(|| SurfaceError::NodeNotFound {
            selector: selector.to_string(),
        })
}

/// Write `text` only if it differs from what the node currently shows.
///
/// Returns whether a write happened.
pub fn set_text_if_changed<S: Surface + ?Sized>(
    surface: &mut S,
    node: NodeHandle,
    text: &str,
) -> bool {
    if surface.text(node) == Some(text) {
        return false;
    }
    surface.set_text(node, text);
    true
}

/// Make `on` present and `off` absent on a node.
pub fn swap_class<S: Surface + ?Sized>(surface: &mut S, node: NodeHandle, on: &str, off: &str) {
    surface.add_class(node, on);
    surface.remove_class(node, off);
}
