//--------------------------------------------------------------------
// render.rs
//--------------------------------------------------------------------
// Turns a PathGroup into a canvas-bounded set of stroke paths
//--------------------------------------------------------------------

use log::{debug, warn};

use crate::error::{Result, TraceError};
use crate::geometry::{Coord, Rect};
use crate::path::{polyline_to_path, Path, PathGroup};

// Fractional inflation applied to the largest coordinates
pub const CANVAS_PADDING: Coord = 0.1;
pub const STROKE_WIDTH: Coord = 2.0;
pub const STROKE_COLOR: &str = "black";

/// Unfilled, solid stroke paths over a canvas starting at the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorDrawing {
    pub width: u32,
    pub height: u32,
    pub paths: Vec<Path>
}

impl VectorDrawing {
    pub fn new(width: u32, height: u32, paths: Vec<Path>) -> VectorDrawing {
        VectorDrawing { width, height, paths }
    }

    pub fn has_area(&self) -> bool { self.width > 0 && self.height > 0 }
}

fn padded(extent: Coord) -> u32 {
    (extent.max(0.0) + CANVAS_PADDING * extent.max(0.0)).ceil() as u32
}

/// Canvas big enough for the largest x and y (measured from the origin)
/// plus padding, never smaller than 1x1. The padded extent is rounded up,
/// so each side is at least `max + CANVAS_PADDING * max`. `None` for a
/// group with no points.
pub fn canvas_size(paths: &PathGroup) -> Option<(u32, u32)> {
    let bounds = Rect::enclosing_rect(paths.points())?;
    Some((padded(bounds.right()).max(1), padded(bounds.bottom()).max(1)))
}

/// Builds the stroke drawing for `paths`; sub-paths without points are skipped.
pub fn render(paths: &PathGroup) -> Result<VectorDrawing> {
    let (width, height) = canvas_size(paths).ok_or(TraceError::EmptyCanvas { width: 0, height: 0 })?;

    let mut strokes = Vec::with_capacity(paths.sub_path_count());
    for shape in &paths.shapes {
        for (i, sub_path) in shape.sub_paths.iter().enumerate() {
            if sub_path.is_empty() {
                warn!("Skipping empty sub-path {} of shape {}", i, shape.key);
                continue;
            }
            strokes.push(polyline_to_path(sub_path));
        }
    }

    debug!("Rendered {} stroke paths on a {}x{} canvas", strokes.len(), width, height);
    Ok(VectorDrawing::new(width, height, strokes))
}
