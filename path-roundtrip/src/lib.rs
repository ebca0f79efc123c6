//--------------------------------------------------------------------
// lib.rs
//--------------------------------------------------------------------
// Sequences extraction, table write, table read and rendering over
// three caller-supplied files
//--------------------------------------------------------------------

extern crate path_tracer;
extern crate path_svg_writer;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;
use path_tracer::PathGroup;

// Where each stage reads from or writes to
#[derive(Clone, Debug)]
pub struct RoundTrip {
    pub image_path: PathBuf,
    pub table_path: PathBuf,
    pub drawing_path: PathBuf,
    pub threshold: u8
}

// What a completed run produced
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub contours: usize,
    pub records: usize,
    pub shapes: usize,
    pub sub_paths: usize,
    pub strokes: usize,
    pub width: u32,
    pub height: u32,
    pub raster_path: PathBuf
}

// The raster output sits next to the drawing with a png extension
pub fn raster_path_for(drawing_path: &Path) -> PathBuf {
    drawing_path.with_extension("png")
}

impl RoundTrip {
    pub fn new(image_path: impl Into<PathBuf>, table_path: impl Into<PathBuf>, drawing_path: impl Into<PathBuf>) -> RoundTrip {
        RoundTrip {
            image_path: image_path.into(),
            table_path: table_path.into(),
            drawing_path: drawing_path.into(),
            threshold: path_tracer::DEFAULT_THRESHOLD
        }
    }

    pub fn with_threshold(self, threshold: u8) -> RoundTrip { RoundTrip { threshold, ..self } }

    // Image to table
    pub fn trace(&self) -> Result<usize> {
        let image = path_tracer::load_image(&self.image_path).context("image load failed")?;
        let contours = path_tracer::extract(&image, self.threshold);
        let records = path_tracer::serialize(&contours);
        path_tracer::write_table(&self.table_path, &records).context("table write failed")?;
        info!("Traced {} contours into {} records", contours.len(), records.len());
        Ok(contours.len())
    }

    // Table back to paths
    pub fn regroup(&self) -> Result<PathGroup> {
        path_tracer::read_table(&self.table_path).context("table read failed")
    }

    pub fn run(&self) -> Result<Report> {
        let contours = self.trace()?;
        let paths = self.regroup()?;
        summarize(&paths);

        let drawing = path_tracer::render(&paths).context("render failed")?;
        let raster = path_svg_writer::rasterize(&drawing).context("rasterize failed")?;

        let raster_path = raster_path_for(&self.drawing_path);
        path_svg_writer::save_drawing(&self.drawing_path, &drawing).context("drawing write failed")?;
        path_svg_writer::save_png(&raster_path, &raster).context("raster write failed")?;

        info!("Wrote {}x{} drawing to {} and {}", drawing.width, drawing.height,
            self.drawing_path.display(), raster_path.display());

        Ok(Report {
            contours,
            records: paths.points().count(),
            shapes: paths.shapes.len(),
            sub_paths: paths.sub_path_count(),
            strokes: drawing.paths.len(),
            width: drawing.width,
            height: drawing.height,
            raster_path
        })
    }
}

// Stands in for the interactive plot: one line per shape
fn summarize(paths: &PathGroup) {
    for shape in &paths.shapes {
        let points: usize = shape.sub_paths.iter().map(|sp| sp.len()).sum();
        info!("Shape {}: {} sub-paths, {} points", shape.key, shape.sub_paths.len(), points);
    }
}
