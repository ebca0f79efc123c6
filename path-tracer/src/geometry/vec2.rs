//--------------------------------------------------------------------
// vec2.rs
//--------------------------------------------------------------------
// Provides a two-element vector class
//--------------------------------------------------------------------

use crate::derive_more::*;

use super::*;

// Vec2
#[derive(Copy, Clone, Add, Sub, PartialEq, From, Into, Display, Constructor)]
#[display(fmt = "({},{})", x, y)]
pub struct Vec2 { pub x: Coord, pub y: Coord }

impl From<GridPoint> for Vec2 {
    fn from(pt: GridPoint) -> Vec2 { Vec2::new(pt.x as Coord, pt.y as Coord) }
}

impl std::fmt::Debug for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
