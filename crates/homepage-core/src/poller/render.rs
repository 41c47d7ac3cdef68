use crate::dashboard::Board;
use crate::resources::{BackgroundImage, Greeting, Resource, WeatherReading};
use crate::surface::{
    BackgroundNodes, GreetingNodes, Surface, SurfaceError, WeatherNodes, swap_class,
};

/// A resource that knows which nodes it owns and how to paint them.
pub trait Render: Resource {
    type Nodes: Clone + Send + Sync + 'static;

    fn bind_nodes<S: Surface + ?Sized>(surface: &mut S) -> Result<Self::Nodes, SurfaceError>;

    fn render<S: Surface>(&self, nodes: &Self::Nodes, board: &mut Board<S>);
}

impl Render for WeatherReading {
    type Nodes = WeatherNodes;

    fn bind_nodes<S: Surface + ?Sized>(surface: &mut S) -> Result<WeatherNodes, SurfaceError> {
        WeatherNodes::bind(surface)
    }

    fn render<S: Surface>(&self, nodes: &WeatherNodes, board: &mut Board<S>) {
        let surface = &mut board.surface;
        surface.set_text(nodes.city, &self.city);
        surface.set_text(nodes.temperature_humidity, &self.temperature_humidity_text());
        surface.set_text(nodes.description, &self.description);
    }
}

impl Render for BackgroundImage {
    type Nodes = BackgroundNodes;

    fn bind_nodes<S: Surface + ?Sized>(surface: &mut S) -> Result<BackgroundNodes, SurfaceError> {
        BackgroundNodes::bind(surface)
    }

    fn render<S: Surface>(&self, nodes: &BackgroundNodes, board: &mut Board<S>) {
        let surface = &mut board.surface;
        surface.set_style(nodes.background, "background-color", &self.color);
        surface.set_style(nodes.background, "background-image", &self.css_url());

        let (on, off) = self.text_class();
        swap_class(surface, nodes.page, on, off);

        surface.set_text(nodes.photographer, &self.photographer);
        surface.set_attribute(nodes.photographer, "href", &self.photographer_url);
        surface.set_text(nodes.location, self.location.as_deref().unwrap_or_default());
        if let Some(description) = &self.description {
            surface.set_text(nodes.description, description);
        }

        board
            .backdrop
            .on_background_applied(&mut board.surface, board.refresh_policy);
    }
}

impl Render for Greeting {
    type Nodes = GreetingNodes;

    fn bind_nodes<S: Surface + ?Sized>(surface: &mut S) -> Result<GreetingNodes, SurfaceError> {
        GreetingNodes::bind(surface)
    }

    fn render<S: Surface>(&self, nodes: &GreetingNodes, board: &mut Board<S>) {
        board.surface.set_text(nodes.message, &self.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backdrop::{BLUR_CLASS, RefreshPolicy, UNBLUR_CLASS};
    use crate::surface::{MemorySurface, Selector};

    fn board(policy: RefreshPolicy) -> Board<MemorySurface> {
        Board::new(MemorySurface::with_dashboard_layout(), policy).unwrap()
    }

    fn image(light_text: bool, location: Option<&str>) -> BackgroundImage {
        BackgroundImage {
            url: "https://images.example.com/a.jpg".to_string(),
            color: "#0c2633".to_string(),
            light_text,
            photographer: "Ansel Adams".to_string(),
            photographer_url: "https://example.com/@ansel".to_string(),
            location: location.map(str::to_string),
            description: None,
        }
    }

    #[test]
    fn test_background_paints_every_node() {
        let mut board = board(RefreshPolicy::Preserve);
        let nodes = BackgroundImage::bind_nodes(&mut board.surface).unwrap();

        image(true, Some("Yosemite")).render(&nodes, &mut board);

        let surface = &board.surface;
        assert_eq!(
            surface.style(nodes.background, "background-color"),
            Some("#0c2633")
        );
        assert_eq!(
            surface.style(nodes.background, "background-image"),
            Some("url(https://images.example.com/a.jpg)")
        );
        assert_eq!(surface.text_of(Selector::Photographer), Some("Ansel Adams"));
        assert_eq!(
            surface.attribute(nodes.photographer, "href"),
            Some("https://example.com/@ansel")
        );
        assert_eq!(surface.text_of(Selector::Location), Some("Yosemite"));
        assert!(surface.has_class(nodes.background, BLUR_CLASS));
    }

    #[test]
    fn test_text_class_is_exclusive() {
        let mut board = board(RefreshPolicy::Preserve);
        let nodes = BackgroundImage::bind_nodes(&mut board.surface).unwrap();

        image(true, None).render(&nodes, &mut board);
        assert!(board.surface.has_class(nodes.page, "light-text"));
        assert!(!board.surface.has_class(nodes.page, "dark-text"));

        image(false, None).render(&nodes, &mut board);
        assert!(board.surface.has_class(nodes.page, "dark-text"));
        assert!(!board.surface.has_class(nodes.page, "light-text"));
    }

    #[test]
    fn test_missing_location_clears_previous_one() {
        let mut board = board(RefreshPolicy::Preserve);
        let nodes = BackgroundImage::bind_nodes(&mut board.surface).unwrap();

        image(false, Some("Yosemite")).render(&nodes, &mut board);
        image(false, None).render(&nodes, &mut board);
        assert_eq!(board.surface.text_of(Selector::Location), Some(""));
    }

    #[test]
    fn test_missing_description_keeps_previous_one() {
        let mut board = board(RefreshPolicy::Preserve);
        let nodes = BackgroundImage::bind_nodes(&mut board.surface).unwrap();

        let mut first = image(false, None);
        first.description = Some("Half Dome".to_string());
        first.render(&nodes, &mut board);
        image(false, None).render(&nodes, &mut board);

        assert_eq!(
            board.surface.text_of(Selector::ImageDescription),
            Some("Half Dome")
        );
    }

    #[test]
    fn test_background_respects_refresh_policy() {
        let mut reset = board(RefreshPolicy::Reset);
        let nodes = BackgroundImage::bind_nodes(&mut reset.surface).unwrap();
        reset.backdrop.toggle(&mut reset.surface);
        image(false, None).render(&nodes, &mut reset);
        assert!(reset.surface.has_class(nodes.background, BLUR_CLASS));

        let mut preserve = board(RefreshPolicy::Preserve);
        let nodes = BackgroundImage::bind_nodes(&mut preserve.surface).unwrap();
        preserve.backdrop.toggle(&mut preserve.surface);
        image(false, None).render(&nodes, &mut preserve);
        assert!(preserve.surface.has_class(nodes.background, UNBLUR_CLASS));
        assert!(!preserve.surface.has_class(nodes.background, BLUR_CLASS));
    }

    #[test]
    fn test_greeting_writes_message() {
        let mut board = board(RefreshPolicy::Preserve);
        let nodes = Greeting::bind_nodes(&mut board.surface).unwrap();

        Greeting {
            message: "Good evening".to_string(),
        }
        .render(&nodes, &mut board);
        assert_eq!(board.surface.text_of(Selector::Greeting), Some("Good evening"));
    }
}
