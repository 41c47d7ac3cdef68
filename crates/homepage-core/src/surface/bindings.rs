//! One-time node bindings for each dashboard region.
//!
//! Regions are disjoint except for `.background`, which the background
//! poller paints and the backdrop toggle blurs.

use super::{NodeHandle, Selector, Surface, SurfaceError, bind_one};

#[derive(Debug, Clone, Copy)]
pub struct ClockNodes {
    pub time: NodeHandle,
    pub date: NodeHandle,
}

impl ClockNodes {
    pub fn bind<S: Surface + ?Sized>(surface: &mut S) -> Result<Self, SurfaceError> {
        Ok(Self {
            time: bind_one(surface, Selector::Time)?,
            date: bind_one(surface, Selector::Date)?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WeatherNodes {
    pub city: NodeHandle,
    pub temperature_humidity: NodeHandle,
    pub description: NodeHandle,
}

impl WeatherNodes {
    pub fn bind<S: Surface + ?Sized>(surface: &mut S) -> Result<Self, SurfaceError> {
        Ok(Self {
            city: bind_one(surface, Selector::City)?,
            temperature_humidity: bind_one(surface, Selector::TemperatureHumidity)?,
            description: bind_one(surface, Selector::WeatherDescription)?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GreetingNodes {
    pub message: NodeHandle,
}

impl GreetingNodes {
    pub fn bind<S: Surface + ?Sized>(surface: &mut S) -> Result<Self, SurfaceError> {
        Ok(Self {
            message: bind_one(surface, Selector::Greeting)?,
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BackgroundNodes {
    pub background: NodeHandle,
    pub page: NodeHandle,
    pub photographer: NodeHandle,
    pub location: NodeHandle,
    pub description: NodeHandle,
}

impl BackgroundNodes {
    pub fn bind<S: Surface + ?Sized>(surface: &mut S) -> Result<Self, SurfaceError> {
        Ok(Self {
            background: bind_one(surface, Selector::Background)?,
            page: bind_one(surface, Selector::Page)?,
            photographer: bind_one(surface, Selector::Photographer)?,
            location: bind_one(surface, Selector::Location)?,
            description: bind_one(surface, Selector::ImageDescription)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct BackdropNodes {
    pub background: NodeHandle,
    pub control: NodeHandle,
    /// May be empty: a page without content containers still toggles the blur.
    pub content: Vec<NodeHandle>,
}

impl BackdropNodes {
    pub fn bind<S: Surface + ?Sized>(surface: &mut S) -> Result<Self, SurfaceError> {
        Ok(Self {
            background: bind_one(surface, Selector::Background)?,
            control: bind_one(surface, Selector::ViewImage)?,
            content: surface.query_all(Selector::Content),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::MemorySurface;

    #[test]
    fn test_bind_all_regions_on_full_layout() {
        let mut surface = MemorySurface::with_dashboard_layout();
        assert!(ClockNodes::bind(&mut surface).is_ok());
        assert!(WeatherNodes::bind(&mut surface).is_ok());
        assert!(GreetingNodes::bind(&mut surface).is_ok());
        assert!(BackgroundNodes::bind(&mut surface).is_ok());
        let backdrop = BackdropNodes::bind(&mut surface).unwrap();
        assert_eq!(backdrop.content.len(), 2);
    }

    #[test]
    fn test_backdrop_binds_without_content() {
        let mut surface = MemorySurface::new();
        surface.add_node(Selector::Background);
        surface.add_node(Selector::ViewImage);

        let backdrop = BackdropNodes::bind(&mut surface).unwrap();
        assert!(backdrop.content.is_empty());
    }

    #[test]
    fn test_weather_bind_reports_missing_node() {
        let mut surface = MemorySurface::new();
        surface.add_node(Selector::City);

        let err = WeatherNodes::bind(&mut surface).unwrap_err();
        assert!(err.to_string().contains("#temperature-humidity"));
    }
}
