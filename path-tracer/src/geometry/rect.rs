//--------------------------------------------------------------------
// rect.rs
//--------------------------------------------------------------------
// Provides a rectangle class
//--------------------------------------------------------------------

use crate::derive_more::*;

use super::*;
use std::iter::Iterator;

#[derive(Copy, Clone, Debug, PartialEq, Display, Constructor)]
#[display(fmt = "(x={}, y={}, width={}, height={})", x, y, width, height)]
pub struct Rect { pub x: Coord, pub y: Coord, pub width: Coord, pub height: Coord }

impl Rect {
    pub fn right(&self) -> Coord { self.x + self.width }
    pub fn bottom(&self) -> Coord { self.y + self.height }

    pub fn enclosing_rect(pts: impl Iterator<Item = Vec2>) -> Option<Rect> {
        let mut x1 = Coord::INFINITY;
        let mut x2 = -Coord::INFINITY;
        let mut y1 = Coord::INFINITY;
        let mut y2 = -Coord::INFINITY;
    
        let mut empty = true;
        for pt in pts {
            if x1 > pt.x { x1 = pt.x; }
            if x2 < pt.x { x2 = pt.x; }
            if y1 > pt.y { y1 = pt.y; }
            if y2 < pt.y { y2 = pt.y; }
            empty = false;
        }
    
        if empty { None } else { Some(Rect::new(x1, y1, x2 - x1, y2 - y1)) }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_enclosing_rect() {
        let pts = vec![Vec2::new(3.0, 4.0), Vec2::new(-1.0, 10.0), Vec2::new(7.0, 2.0)];
        let rect = Rect::enclosing_rect(pts.into_iter()).unwrap();
        assert_eq!(rect, Rect::new(-1.0, 2.0, 8.0, 8.0));
        assert_eq!(rect.right(), 7.0);
        assert_eq!(rect.bottom(), 10.0);
    }

    #[test]
    fn test_enclosing_rect_empty() {
        assert!(Rect::enclosing_rect(std::iter::empty()).is_none());
    }
}
