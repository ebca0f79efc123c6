//--------------------------------------------------------------------
// grid_point.rs
//--------------------------------------------------------------------
// Provides the integer pixel-grid point produced by contour tracing
//--------------------------------------------------------------------

use crate::derive_more::*;

// GridPoint
#[derive(Copy, Clone, Add, Sub, PartialEq, Eq, Hash, Display, Constructor)]
#[display(fmt = "({},{})", x, y)]
pub struct GridPoint { pub x: i32, pub y: i32 }

impl GridPoint {
    // The unit step between two neighbouring boundary pixels
    pub fn step_to(&self, other: GridPoint) -> GridPoint {
        let d = other - *self;
        GridPoint::new(d.x.signum(), d.y.signum())
    }
}

impl From<imageproc::point::Point<i32>> for GridPoint {
    fn from(pt: imageproc::point::Point<i32>) -> GridPoint { GridPoint::new(pt.x, pt.y) }
}

impl std::fmt::Debug for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
