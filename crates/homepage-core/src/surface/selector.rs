use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of display regions the dashboard writes to.
///
/// Each variant maps to the selector used by the page markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    Time,
    Date,
    City,
    TemperatureHumidity,
    WeatherDescription,
    Greeting,
    Background,
    Page,
    Photographer,
    Location,
    ImageDescription,
    ViewImage,
    /// Foreground containers hidden while the background is on view.
    Content,
}

impl Selector {
    pub const ALL: [Selector; 13] = [
        Selector::Time,
        Selector::Date,
        Selector::City,
        Selector::TemperatureHumidity,
        Selector::WeatherDescription,
        Selector::Greeting,
        Selector::Background,
        Selector::Page,
        Selector::Photographer,
        Selector::Location,
        Selector::ImageDescription,
        Selector::ViewImage,
        Selector::Content,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Selector::Time => "#time",
            Selector::Date => "#date",
            Selector::City => "#city",
            Selector::TemperatureHumidity => "#temperature-humidity",
            Selector::WeatherDescription => "#description",
            Selector::Greeting => "#greeting",
            Selector::Background => ".background",
            Selector::Page => ".page",
            Selector::Photographer => ".credits .photographer a",
            Selector::Location => ".credits .location",
            Selector::ImageDescription => ".description",
            Selector::ViewImage => ".view-image",
            Selector::Content => ".content",
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
