//--------------------------------------------------------------------
// contour.rs
//--------------------------------------------------------------------
// Binarizes a raster image and traces the external boundary of every
// connected foreground region
//--------------------------------------------------------------------

use std::path::Path;

use image::{DynamicImage, GrayImage, ImageError, Luma};
use imageproc::contours::{find_contours, BorderType};
use log::{debug, trace};

use crate::error::{Result, TraceError};
use crate::geometry::GridPoint;

pub const DEFAULT_THRESHOLD: u8 = 127;

const FOREGROUND: Luma<u8> = Luma([255]);
const BACKGROUND: Luma<u8> = Luma([0]);

// Border following only starts a region right of a background pixel, so
// traced masks get a one pixel background frame
const FRAME_OFFSET: GridPoint = GridPoint { x: 1, y: 1 };

// Every cell holds either 255 (foreground) or 0 (background)
pub type BinaryMask = GrayImage;

// An ordered boundary, points are kept in tracing order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contour { pub points: Vec<GridPoint> }

impl Contour {
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
}

/// Loads the raster at `path`. A zero-byte file is a load failure.
pub fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    let load_error = |source| TraceError::ImageLoad { path: path.to_path_buf(), source };

    let meta = std::fs::metadata(path).map_err(|e| load_error(ImageError::IoError(e)))?;
    if meta.len() == 0 {
        let empty = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "image file is empty");
        return Err(load_error(ImageError::IoError(empty)));
    }

    let image = image::open(path).map_err(load_error)?;
    debug!("Loaded {} ({}x{})", path.display(), image.width(), image.height());
    Ok(image)
}

/// Inverted binary threshold: bright pixels are background, ink is foreground.
pub fn binarize(image: &DynamicImage, threshold: u8) -> BinaryMask {
    let gray = image.to_luma8();
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        if gray.get_pixel(x, y)[0] > threshold { BACKGROUND } else { FOREGROUND }
    })
}

// Copies the mask inside a background border
fn framed(mask: &BinaryMask) -> BinaryMask {
    let (width, height) = mask.dimensions();
    GrayImage::from_fn(width + 2, height + 2, |x, y| {
        if x == 0 || y == 0 || x > width || y > height { BACKGROUND }
        else { *mask.get_pixel(x - 1, y - 1) }
    })
}

/// Extracts the external contours of `image`, each one reduced to the
/// points where the boundary changes direction. The position of a contour
/// in the result is its shape key.
pub fn extract(image: &DynamicImage, threshold: u8) -> Vec<Contour> {
    let mask = framed(&binarize(image, threshold));

    let contours: Vec<_> = find_contours::<i32>(&mask).into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .map(|c| {
            let points: Vec<GridPoint> = c.points.into_iter()
                .map(|pt| GridPoint::from(pt) - FRAME_OFFSET)
                .collect();
            Contour { points: approximate_chain(&points) }
        })
        .collect();

    debug!("Extracted {} external contours", contours.len());
    for (i, contour) in contours.iter().enumerate() {
        trace!("Contour {}: {} points starting at {:?}", i, contour.len(), contour.points.first());
    }

    contours
}

// Keeps only the points where the step entering a point differs from the
// step leaving it, treating the boundary as closed
pub fn approximate_chain(points: &[GridPoint]) -> Vec<GridPoint> {
    let mut points = points.to_vec();
    points.dedup();
    if points.len() > 1 && points.first() == points.last() { points.pop(); }

    let n = points.len();
    if n <= 2 { return points; }

    (0..n).filter(|&i| {
        let prev = points[(i + n - 1) % n];
        let next = points[(i + 1) % n];
        prev.step_to(points[i]) != points[i].step_to(next)
    }).map(|i| points[i]).collect()
}
