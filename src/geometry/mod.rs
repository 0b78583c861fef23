pub mod hit_testing;
pub mod shapes;

pub use hit_testing::{erase_threshold, strokes_intersect};
pub use shapes::{Shape, ShapeKind};
