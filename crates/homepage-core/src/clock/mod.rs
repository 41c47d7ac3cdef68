//! Wall-clock rendering.
//!
//! Formatting is pure ([`ClockSnapshot`]); the renderer only touches the
//! surface when the formatted text differs from what is displayed.

use chrono::{Datelike, Local, Timelike};
use serde::Serialize;
use tracing::debug;

use crate::surface::{ClockNodes, Surface, SurfaceError, set_text_if_changed};

/// Zero-padded components of a local date and time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClockSnapshot {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub day: String,
    pub month: String,
    pub year: String,
}

/// Left-pad a number to at least two digits.
pub fn pad2(value: impl Into<i64>) -> String {
    format!("{:02}", value.into())
}

impl ClockSnapshot {
    pub fn from_datetime<T: Datelike + Timelike>(dt: &T) -> Self {
        Self {
            hours: pad2(dt.hour()),
            minutes: pad2(dt.minute()),
            seconds: pad2(dt.second()),
            day: pad2(dt.day()),
            month: pad2(dt.month()),
            year: pad2(dt.year()),
        }
    }

    /// Snapshot of the local system clock.
    pub fn now() -> Self {
        Self::from_datetime(&Local::now())
    }

    /// `HH:MM:SS`
    pub fn time_text(&self) -> String {
        format!("{}:{}:{}", self.hours, self.minutes, self.seconds)
    }

    /// `DD/MM/YYYY`
    pub fn date_text(&self) -> String {
        format!("{}/{}/{}", self.day, self.month, self.year)
    }
}

/// Which nodes a render pass actually wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClockRender {
    pub time_written: bool,
    pub date_written: bool,
}

#[derive(Debug, Clone)]
pub struct ClockRenderer {
    nodes: ClockNodes,
}

impl ClockRenderer {
    pub fn new(nodes: ClockNodes) -> Self {
        Self { nodes }
    }

    pub fn bind<S: Surface + ?Sized>(surface: &mut S) -> Result<Self, SurfaceError> {
        Ok(Self::new(ClockNodes::bind(surface)?))
    }

    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        snapshot: &ClockSnapshot,
    ) -> ClockRender {
        let render = ClockRender {
            time_written: set_text_if_changed(surface, self.nodes.time, &snapshot.time_text()),
            date_written: set_text_if_changed(surface, self.nodes.date, &snapshot.date_text()),
        };

        if render.date_written {
            debug!(
                event = "core.clock.date_rendered",
                date = snapshot.date_text()
            );
        }

        render
    }

    pub fn render_now<S: Surface + ?Sized>(&self, surface: &mut S) -> ClockRender {
        self.render(surface, &ClockSnapshot::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{MemorySurface, Selector};
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_hours_are_two_chars_for_every_hour() {
        for h in 0..24 {
            let snapshot = ClockSnapshot::from_datetime(&at(h, 0, 0));
            assert_eq!(snapshot.hours.len(), 2, "hour {} rendered as {}", h, snapshot.hours);
            assert_eq!(snapshot.hours.parse::<u32>().unwrap(), h);
        }
        assert_eq!(ClockSnapshot::from_datetime(&at(3, 0, 0)).hours, "03");
        assert_eq!(ClockSnapshot::from_datetime(&at(13, 0, 0)).hours, "13");
    }

    #[test]
    fn test_time_and_date_text() {
        let snapshot = ClockSnapshot::from_datetime(&at(9, 5, 7));
        assert_eq!(snapshot.time_text(), "09:05:07");
        assert_eq!(snapshot.date_text(), "05/03/2024");
    }

    #[test]
    fn test_formatting_is_pure() {
        let instant = at(23, 59, 59);
        let first = ClockSnapshot::from_datetime(&instant);
        let second = ClockSnapshot::from_datetime(&instant);
        assert_eq!(first, second);
        assert_eq!(first.time_text(), second.time_text());
        assert_eq!(first.date_text(), second.date_text());
    }

    #[test]
    fn test_first_render_always_writes() {
        let mut surface = MemorySurface::with_dashboard_layout();
        let renderer = ClockRenderer::bind(&mut surface).unwrap();

        let render = renderer.render(&mut surface, &ClockSnapshot::from_datetime(&at(0, 0, 0)));

        assert!(render.time_written);
        assert!(render.date_written);
        assert_eq!(surface.text_of(Selector::Time), Some("00:00:00"));
        assert_eq!(surface.text_of(Selector::Date), Some("05/03/2024"));
    }

    #[test]
    fn test_render_within_same_second_is_idempotent() {
        let mut surface = MemorySurface::with_dashboard_layout();
        let renderer = ClockRenderer::bind(&mut surface).unwrap();
        let snapshot = ClockSnapshot::from_datetime(&at(12, 30, 15));

        renderer.render(&mut surface, &snapshot);
        let writes_after_first = surface.mutation_count();

        let render = renderer.render(&mut surface, &snapshot);

        assert_eq!(render, ClockRender::default());
        assert_eq!(surface.mutation_count(), writes_after_first);
        assert_eq!(surface.text_of(Selector::Time), Some("12:30:15"));
    }

    #[test]
    fn test_next_second_rewrites_time_only() {
        let mut surface = MemorySurface::with_dashboard_layout();
        let renderer = ClockRenderer::bind(&mut surface).unwrap();

        renderer.render(&mut surface, &ClockSnapshot::from_datetime(&at(12, 30, 15)));
        let render = renderer.render(&mut surface, &ClockSnapshot::from_datetime(&at(12, 30, 16)));

        assert!(render.time_written);
        assert!(!render.date_written);
    }
}
