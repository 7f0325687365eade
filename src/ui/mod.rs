/// Presentation widgets that live outside the state machine
///
/// - `rating.rs` - canvas-drawn rating bar for cards and the detail view

pub mod rating;
