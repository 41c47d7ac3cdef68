//! Dashboard refresh controller.
//!
//! Binds every component to a surface, then either refreshes everything once
//! ([`Dashboard::refresh_once`]) or starts one task per component
//! ([`Dashboard::start`]). Tasks share the [`Board`] behind an async mutex
//! and stop together on a cancellation token.

pub mod board;
pub mod errors;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use crate::backdrop::BackdropState;
use crate::clock::{ClockRender, ClockRenderer};
use crate::config::HomepageConfig;
use crate::fetch::{HttpTransport, Transport};
use crate::poller::{Poller, Render};
use crate::resources::{BackgroundImage, Greeting, WeatherReading};
use crate::schedule::{Tick, run_fixed_delay, run_fixed_rate};
use crate::surface::Surface;

pub use board::Board;
pub use errors::DashboardError;

/// Outcome of a one-shot refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshReport {
    pub clock: ClockRender,
    pub weather: bool,
    pub background: bool,
    pub greeting: bool,
}

pub struct Dashboard<S, T = HttpTransport> {
    board: Arc<Mutex<Board<S>>>,
    clock: ClockRenderer,
    clock_period: Duration,
    weather: Option<Poller<WeatherReading, T, S>>,
    background: Option<Poller<BackgroundImage, T, S>>,
    greeting: Option<Poller<Greeting, T, S>>,
}

impl<S: Surface + 'static> Dashboard<S, HttpTransport> {
    /// Bind against an HTTP backend described by `config`.
    pub async fn connect(surface: S, config: &HomepageConfig) -> Result<Self, DashboardError> {
        let transport = HttpTransport::new(
            config.base_url(),
            config.request_method(),
            Some(config.request_timeout()),
        )?;
        Self::bind(surface, Arc::new(transport), config).await
    }
}

impl<S, T> Dashboard<S, T>
where
    S: Surface + 'static,
    T: Transport,
{
    pub async fn bind(
        mut surface: S,
        transport: Arc<T>,
        config: &HomepageConfig,
    ) -> Result<Self, DashboardError> {
        info!(event = "core.dashboard.bind_started");

        let clock = ClockRenderer::bind(&mut surface)?;
        let board = Arc::new(Mutex::new(Board::new(surface, config.refresh_policy())?));

        let dashboard = Self {
            weather: bind_poller(&transport, config, &board).await?,
            background: bind_poller(&transport, config, &board).await?,
            greeting: bind_poller(&transport, config, &board).await?,
            board,
            clock,
            clock_period: config.clock_period(),
        };

        info!(
            event = "core.dashboard.bind_completed",
            weather = dashboard.weather.is_some(),
            background = dashboard.background.is_some(),
            greeting = dashboard.greeting.is_some(),
            refresh_policy = %config.refresh_policy()
        );
        Ok(dashboard)
    }

    pub fn board(&self) -> Arc<Mutex<Board<S>>> {
        self.board.clone()
    }

    /// Render the clock and poll every enabled resource once.
    pub async fn refresh_once(&self) -> RefreshReport {
        let clock = {
            let mut board = self.board.lock().await;
            self.clock.render_now(&mut board.surface)
        };

        let (weather, background, greeting) = tokio::join!(
            poll_if_enabled(&self.weather),
            poll_if_enabled(&self.background),
            poll_if_enabled(&self.greeting),
        );

        let report = RefreshReport {
            clock,
            weather,
            background,
            greeting,
        };
        info!(
            event = "core.dashboard.refresh_completed",
            weather = report.weather,
            background = report.background,
            greeting = report.greeting
        );
        report
    }

    pub async fn toggle_backdrop(&self) -> BackdropState {
        toggle(&self.board).await
    }

    /// Spawn one task per component. Each runs immediately, then on its own
    /// schedule until `cancel` fires.
    pub fn start(self, cancel: CancellationToken) -> DashboardHandle<S> {
        let mut tasks = Vec::new();

        let clock = ClockTick {
            renderer: self.clock,
            board: self.board.clone(),
        };
        tasks.push((
            "clock",
            tokio::spawn(run_fixed_rate(self.clock_period, cancel.clone(), clock)),
        ));

        if let Some(poller) = self.weather {
            tasks.push(("weather", spawn_poller(poller, &cancel)));
        }
        if let Some(poller) = self.background {
            tasks.push(("background", spawn_poller(poller, &cancel)));
        }
        if let Some(poller) = self.greeting {
            tasks.push(("greeting", spawn_poller(poller, &cancel)));
        }

        info!(event = "core.dashboard.start_completed", tasks = tasks.len());

        DashboardHandle {
            board: self.board,
            cancel,
            tasks,
        }
    }
}

/// Running dashboard.
pub struct DashboardHandle<S> {
    board: Arc<Mutex<Board<S>>>,
    cancel: CancellationToken,
    tasks: Vec<(&'static str, JoinHandle<()>)>,
}

impl<S: Surface> DashboardHandle<S> {
    pub fn board(&self) -> Arc<Mutex<Board<S>>> {
        self.board.clone()
    }

    pub async fn toggle_backdrop(&self) -> BackdropState {
        toggle(&self.board).await
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }

    /// Wait for every task to finish. Tasks only finish once cancelled.
    pub async fn wait(self) -> Result<(), DashboardError> {
        let (names, handles): (Vec<_>, Vec<_>) = self.tasks.into_iter().unzip();
        let results = futures::future::join_all(handles).await;

        let mut first_failure = None;
        for (task, result) in names.into_iter().zip(results) {
            if let Err(e) = result {
                error!(
                    event = "core.dashboard.task_failed",
                    task = task,
                    error = %e
                );
                first_failure.get_or_insert(DashboardError::TaskFailed {
                    task: task.to_string(),
                    message: e.to_string(),
                });
            }
        }

        info!(event = "core.dashboard.stop_completed");
        match first_failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

struct ClockTick<S> {
    renderer: ClockRenderer,
    board: Arc<Mutex<Board<S>>>,
}

impl<S: Surface> Tick for ClockTick<S> {
    fn name(&self) -> &'static str {
        "clock"
    }

    async fn tick(&mut self) {
        let mut board = self.board.lock().await;
        self.renderer.render_now(&mut board.surface);
    }
}

async fn bind_poller<R, T, S>(
    transport: &Arc<T>,
    config: &HomepageConfig,
    board: &Arc<Mutex<Board<S>>>,
) -> Result<Option<Poller<R, T, S>>, DashboardError>
where
    R: Render,
    T: Transport,
    S: Surface,
{
    let settings = config.poller(R::KIND);
    if !settings.enabled {
        info!(
            event = "core.dashboard.poller_skipped",
            resource = %R::KIND,
            reason = "disabled"
        );
        return Ok(None);
    }

    let poller = Poller::bind(
        transport.clone(),
        settings.endpoint,
        settings.interval,
        board.clone(),
    )
    .await?;
    Ok(Some(poller))
}

async fn poll_if_enabled<R, T, S>(poller: &Option<Poller<R, T, S>>) -> bool
where
    R: Render,
    T: Transport,
    S: Surface,
{
    match poller {
        Some(poller) => poller.poll_once().await,
        None => false,
    }
}

fn spawn_poller<R, T, S>(poller: Poller<R, T, S>, cancel: &CancellationToken) -> JoinHandle<()>
where
    R: Render,
    T: Transport,
    S: Surface + 'static,
{
    tokio::spawn(run_fixed_delay(poller.interval(), cancel.clone(), poller))
}

async fn toggle<S: Surface>(board: &Mutex<Board<S>>) -> BackdropState {
    let mut board = board.lock().await;
    let Board {
        surface, backdrop, ..
    } = &mut *board;
    backdrop.toggle(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backdrop::{HIDE_IMAGE_LABEL, RefreshPolicy};
    use crate::fetch::scripted::ScriptedTransport;
    use crate::surface::{MemorySurface, Selector};

    const PARIS: &str =
        r#"{"cod":200,"city":"Paris","temperature":18,"humidity":60,"description":"clear"}"#;
    const IMAGE: &str = r##"{"url":"https://images.example.com/a.jpg","color":"#111111",
        "light_text":true,"photographer":"Ansel Adams",
        "photographer_url":"https://example.com/@ansel","location":"Yosemite"}"##;

    fn scripted() -> Arc<ScriptedTransport> {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond_json("/get/weather", PARIS);
        transport.respond_json("/get/image", IMAGE);
        transport.respond_json("/get/greetings", r#"{"message":"Good morning"}"#);
        transport
    }

    #[tokio::test]
    async fn test_refresh_once_updates_every_region() {
        let dashboard = Dashboard::bind(
            MemorySurface::with_dashboard_layout(),
            scripted(),
            &HomepageConfig::default(),
        )
        .await
        .unwrap();

        let report = dashboard.refresh_once().await;
        assert!(report.clock.time_written);
        assert!(report.clock.date_written);
        assert!(report.weather && report.background && report.greeting);

        let board = dashboard.board();
        let board = board.lock().await;
        assert_eq!(board.surface.text_of(Selector::City), Some("Paris"));
        assert_eq!(board.surface.text_of(Selector::Location), Some("Yosemite"));
        assert_eq!(
            board.surface.text_of(Selector::Greeting),
            Some("Good morning")
        );
    }

    #[tokio::test]
    async fn test_disabled_poller_is_not_fetched() {
        let mut config = HomepageConfig::default();
        config.greeting.enabled = Some(false);
        let transport = scripted();

        let dashboard = Dashboard::bind(
            MemorySurface::with_dashboard_layout(),
            transport.clone(),
            &config,
        )
        .await
        .unwrap();
        let report = dashboard.refresh_once().await;

        assert!(!report.greeting);
        assert_eq!(transport.calls("/get/greetings"), 0);
        assert_eq!(transport.calls("/get/weather"), 1);
    }

    #[tokio::test]
    async fn test_bind_fails_on_incomplete_surface() {
        let mut surface = MemorySurface::new();
        surface.add_node(Selector::Time);

        let result = Dashboard::bind(surface, scripted(), &HomepageConfig::default()).await;
        let Err(err) = result else {
            panic!("expected bind to fail");
        };
        assert!(err.to_string().contains("#date"));
    }

    #[tokio::test]
    async fn test_toggle_survives_background_refresh_with_preserve() {
        let mut config = HomepageConfig::default();
        config.backdrop.on_refresh = Some(RefreshPolicy::Preserve);
        let dashboard = Dashboard::bind(
            MemorySurface::with_dashboard_layout(),
            scripted(),
            &config,
        )
        .await
        .unwrap();

        assert_eq!(dashboard.toggle_backdrop().await, BackdropState::Unblurred);
        dashboard.refresh_once().await;

        let board = dashboard.board();
        let board = board.lock().await;
        assert_eq!(board.backdrop.state(), BackdropState::Unblurred);
        assert_eq!(
            board.surface.text_of(Selector::ViewImage),
            Some(HIDE_IMAGE_LABEL)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_runs_each_component_and_stops_on_cancel() {
        let transport = scripted();
        let dashboard = Dashboard::bind(
            MemorySurface::with_dashboard_layout(),
            transport.clone(),
            &HomepageConfig::default(),
        )
        .await
        .unwrap();

        let cancel = CancellationToken::new();
        let handle = dashboard.start(cancel.clone());
        tokio::time::sleep(Duration::from_secs(301)).await;
        handle.stop();
        let board = handle.board();
        handle.wait().await.unwrap();

        // Weather and greeting poll at 0 and 300s, background only at 0.
        assert_eq!(transport.calls("/get/weather"), 2);
        assert_eq!(transport.calls("/get/greetings"), 2);
        assert_eq!(transport.calls("/get/image"), 1);

        let board = board.lock().await;
        assert!(board.surface.text_of(Selector::Time).is_some_and(|t| t.len() == 8));
    }
}
