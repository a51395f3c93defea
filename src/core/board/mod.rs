mod content;
mod model;

pub use model::Board;
