pub mod engine;
pub mod lanes;
pub mod palette;

pub use engine::{layout, LayoutEngine};
pub use lanes::{LaneAllocator, LaneAssignment};
pub use palette::{Palette, PaletteError, DEFAULT_COLORS};
