/// Rating bar widget
/// Draws a movie's rating as a partially filled horizontal bar
use iced::widget::canvas;
use iced::{Color, Point, Rectangle, Size};

use crate::Message;

/// Highest rating a movie can carry; the bar is full at this value
const MAX_RATING: f32 = 5.0;

/// Canvas program that fills a gold bar proportionally to the rating
#[derive(Debug, Clone)]
pub struct RatingBar {
    /// Rating on a 0.0 to 5.0 scale
    pub rating: f32,
}

impl canvas::Program<Message> for RatingBar {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        // Track underneath the fill
        frame.fill_rectangle(
            Point::ORIGIN,
            Size::new(bounds.width, bounds.height),
            Color::from_rgba(0.5, 0.5, 0.5, 0.35),
        );

        // Filled portion proportional to the rating
        let fraction = (self.rating / MAX_RATING).clamp(0.0, 1.0);
        if fraction > 0.0 {
            frame.fill_rectangle(
                Point::ORIGIN,
                Size::new(bounds.width * fraction, bounds.height),
                Color::from_rgb(0.98, 0.75, 0.14),
            );
        }

        vec![frame.into_geometry()]
    }
}
