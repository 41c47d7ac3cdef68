//! Periodic resource pollers.
//!
//! A [`Poller`] fetches one resource kind and, when the response is usable,
//! renders it onto the shared [`Board`]. The board lock is taken only after
//! the fetch has finished.

pub mod render;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::dashboard::Board;
use crate::fetch::{Transport, fetch_optional};
use crate::schedule::Tick;
use crate::surface::{Surface, SurfaceError};

pub use render::Render;

pub struct Poller<R: Render, T, S> {
    transport: Arc<T>,
    endpoint: String,
    interval: Duration,
    nodes: R::Nodes,
    board: Arc<Mutex<Board<S>>>,
}

impl<R, T, S> Poller<R, T, S>
where
    R: Render,
    T: Transport,
    S: Surface,
{
    /// Bind the resource's nodes on the board's surface.
    pub async fn bind(
        transport: Arc<T>,
        endpoint: impl Into<String>,
        interval: Duration,
        board: Arc<Mutex<Board<S>>>,
    ) -> Result<Self, SurfaceError> {
        let nodes = {
            let mut guard = board.lock().await;
            R::bind_nodes(&mut guard.surface)?
        };

        Ok(Self {
            transport,
            endpoint: endpoint.into(),
            interval,
            nodes,
            board,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Fetch once and render on success. Returns whether the surface was
    /// updated.
    pub async fn poll_once(&self) -> bool {
        debug!(
            event = "core.poller.poll_started",
            resource = %R::KIND,
            endpoint = %self.endpoint
        );

        let Some(resource) = fetch_optional::<R, T>(&*self.transport, &self.endpoint).await else {
            return false;
        };

        let mut board = self.board.lock().await;
        resource.render(&self.nodes, &mut board);

        info!(
            event = "core.poller.poll_completed",
            resource = %R::KIND
        );
        true
    }
}

impl<R, T, S> Tick for Poller<R, T, S>
where
    R: Render,
    T: Transport,
    S: Surface,
{
    fn name(&self) -> &'static str {
        R::KIND.as_str()
    }

    async fn tick(&mut self) {
        self.poll_once().await;
    }
}
