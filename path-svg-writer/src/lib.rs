//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Writes vector drawings as SVG documents and rasterizes them
//--------------------------------------------------------------------

extern crate path_tracer;
extern crate svg;
extern crate resvg;

use std::path::{Path as FsPath, PathBuf};

use image::RgbaImage;
use log::debug;
use path_tracer::{PathCommand, TraceError, VectorDrawing, Path, STROKE_WIDTH, STROKE_COLOR};
use resvg::{tiny_skia, usvg};
use svg::Document;
use svg::node::element::{Group, Path as SvgPath};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SvgError {
    #[error(transparent)]
    Trace(#[from] TraceError),

    #[error("failed to parse generated SVG: {0}")]
    Parse(#[from] usvg::Error),

    #[error("could not allocate a {width}x{height} pixmap")]
    Pixmap { width: u32, height: u32 },

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, SvgError>;

// Formats a path as "M x,y L x,y ..."
pub fn path_data(path: &Path) -> String {
    let cmds: Vec<String> = path.iter().map(|cmd| match cmd {
        PathCommand::MoveTo(pt) => format!("M {},{}", pt.x, pt.y),
        PathCommand::LineTo(pt) => format!("L {},{}", pt.x, pt.y),
    }).collect();
    cmds.join(" ")
}

/// Builds the SVG document: declared canvas size, crisp edges, and one
/// unfilled stroke element per path inside a single group.
pub fn to_document(drawing: &VectorDrawing) -> Document {
    let group = drawing.paths.iter().fold(Group::new(), |group, path| {
        group.add(SvgPath::new()
            .set("d", path_data(path))
            .set("fill", "none")
            .set("stroke", STROKE_COLOR)
            .set("stroke-width", STROKE_WIDTH))
    });

    Document::new()
        .set("xmlns", "http://www.w3.org/2000/svg")
        .set("width", drawing.width)
        .set("height", drawing.height)
        .set("viewBox", format!("0 0 {} {}", drawing.width, drawing.height))
        .set("shape-rendering", "crispEdges")
        .add(group)
}

pub fn save_drawing(path: impl AsRef<FsPath>, drawing: &VectorDrawing) -> Result<()> {
    let path = path.as_ref();
    let contents = to_document(drawing).to_string();
    std::fs::write(path, contents).map_err(|source| SvgError::Io { path: path.to_path_buf(), source })?;
    debug!("Saved {} paths to {}", drawing.paths.len(), path.display());
    Ok(())
}

/// Renders the drawing's SVG onto a white pixmap of exactly the declared
/// canvas size. Edges are crisp, so every pixel is either background or
/// fully covered stroke.
pub fn rasterize(drawing: &VectorDrawing) -> Result<RgbaImage> {
    if !drawing.has_area() {
        return Err(TraceError::EmptyCanvas { width: drawing.width, height: drawing.height }.into());
    }

    let (width, height) = (drawing.width, drawing.height);
    let tree = usvg::Tree::from_str(&to_document(drawing).to_string(), &usvg::Options::default())?;

    let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or(SvgError::Pixmap { width, height })?;
    pixmap.fill(tiny_skia::Color::WHITE);
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    let data = pixmap.pixels().iter().flat_map(|px| {
        let c = px.demultiply();
        [c.red(), c.green(), c.blue(), c.alpha()]
    }).collect();

    debug!("Rasterized {} paths at {}x{}", drawing.paths.len(), width, height);
    RgbaImage::from_raw(width, height, data).ok_or(SvgError::Pixmap { width, height })
}

pub fn save_png(path: impl AsRef<FsPath>, image: &RgbaImage) -> Result<()> {
    let path = path.as_ref();
    image.save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| SvgError::Encode { path: path.to_path_buf(), source })
}
