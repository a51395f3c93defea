pub mod controller;
pub mod geometry;
pub mod interaction;

pub use controller::{LayoutAction, LayoutController};
pub use geometry::{HitZone, LayoutMetrics, Point, Rect};
pub use interaction::{DragState, Interaction, ResizeState};
