//--------------------------------------------------------------------
// geometry.rs
//--------------------------------------------------------------------
// Provides the geometric constructs used in the project
//--------------------------------------------------------------------

mod grid_point;
mod rect;
mod vec2;

pub type Coord = f64;

pub use grid_point::*;
pub use rect::*;
pub use vec2::*;
