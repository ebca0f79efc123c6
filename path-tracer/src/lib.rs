//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Declaration of all modules occurs here
//--------------------------------------------------------------------

extern crate derive_more;
extern crate ordered_float;
extern crate image;
extern crate imageproc;
extern crate csv;
extern crate thiserror;
extern crate log;

mod geometry;
mod error;
mod contour;
mod table;
mod path;
mod render;

pub use geometry::{Coord, Vec2, GridPoint, Rect};
pub use error::*;
pub use contour::*;
pub use table::*;
pub use path::*;
pub use render::*;
