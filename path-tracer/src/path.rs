//------------------------------------------------------------------------------
// path.rs
//------------------------------------------------------------------------------
// Provides the grouped path structure rebuilt from the path table, and the
// Path data structure, which is just a container for PathCommands
//------------------------------------------------------------------------------

use std::fmt::*;

use crate::geometry::*;

// A sub-path is an ordered run of points
pub type SubPath = Vec<Vec2>;

// One shape of a PathGroup, tagged with the key it was grouped under
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub key: i64,
    pub sub_paths: Vec<SubPath>
}

/// Shapes in ascending key order, each holding its sub-paths in ascending
/// sub-path key order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathGroup { pub shapes: Vec<Shape> }

impl PathGroup {
    pub fn is_empty(&self) -> bool { self.shapes.is_empty() }
    pub fn sub_path_count(&self) -> usize { self.shapes.iter().map(|s| s.sub_paths.len()).sum() }

    pub fn sub_paths(&self) -> impl Iterator<Item = &SubPath> + '_ {
        self.shapes.iter().flat_map(|s| s.sub_paths.iter())
    }

    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.sub_paths().flat_map(|sp| sp.iter().copied())
    }
}

// The PathCommand enum
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2)
}

// Implementing the display
impl Display for PathCommand {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PathCommand::MoveTo(target) => write!(f, "MoveTo({})", target),
            PathCommand::LineTo(target) => write!(f, "LineTo({})", target),
        }
    }
}

// The Path is just a vector of path commands
pub type Path = Vec<PathCommand>;

// A move to the first point followed by a line to each later point
pub fn polyline_to_path(points: &[Vec2]) -> Path {
    points.iter().enumerate().map(|(i, pt)| {
        if i == 0 { PathCommand::MoveTo(*pt) } else { PathCommand::LineTo(*pt) }
    }).collect()
}
