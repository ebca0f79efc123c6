//--------------------------------------------------------------------
// roundtrip.rs
//--------------------------------------------------------------------
// Runs whole round trips against files in a scratch directory
//--------------------------------------------------------------------

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

use image::{Rgb, RgbImage};
use path_roundtrip::RoundTrip;
use path_tracer::{TraceError, Vec2};

struct TestDir {
    path: PathBuf,
}

impl TestDir {
    fn new(tag: &str) -> Self {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let path =
            std::env::temp_dir().join(format!("path_roundtrip_{tag}_{}_{}", std::process::id(), ts));
        fs::create_dir_all(&path).expect("create temp test dir");
        Self { path }
    }

    fn file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn write_squares(path: &Path, squares: &[(u32, u32)]) {
    let mut image = RgbImage::from_pixel(100, 100, Rgb([255, 255, 255]));
    for &(from, to) in squares {
        for y in from..=to {
            for x in from..=to {
                image.put_pixel(x, y, Rgb([0, 0, 0]));
            }
        }
    }
    image.save(path).expect("write fixture image");
}

fn round_trip(dir: &TestDir) -> RoundTrip {
    RoundTrip::new(dir.file("upload.png"), dir.file("frag0.csv"), dir.file("output.svg"))
}

fn run_binary(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_path-roundtrip"))
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("run path-roundtrip")
}

#[test]
fn square_round_trip() {
    let dir = TestDir::new("square");
    write_squares(&dir.file("upload.png"), &[(10, 30)]);

    let report = round_trip(&dir).run().expect("round trip");
    assert_eq!(report.contours, 1);
    assert_eq!(report.records, 4);
    assert_eq!(report.shapes, 1);
    assert!(report.width >= 33 && report.height >= 33, "canvas {}x{}", report.width, report.height);

    // One shape; corners sharing a column end up in the same sub-path
    let table = fs::read_to_string(dir.file("frag0.csv")).expect("read table");
    assert_eq!(table.lines().count(), 4);
    assert!(table.lines().all(|l| l.starts_with("0,")), "{table}");

    let paths = round_trip(&dir).regroup().expect("regroup");
    assert_eq!(paths.shapes[0].sub_paths.len(), 2);
    assert_eq!(paths.shapes[0].sub_paths[0].len(), 2);
    assert!(paths.shapes[0].sub_paths[0].iter().all(|p| p.x == 10.0));
    assert!(paths.shapes[0].sub_paths[1].iter().all(|p| p.x == 30.0));
    let mut corners: Vec<Vec2> = paths.points().collect();
    corners.sort_by(|a, b| (a.x, a.y).partial_cmp(&(b.x, b.y)).unwrap());
    assert_eq!(corners, vec![
        Vec2::new(10.0, 10.0), Vec2::new(10.0, 30.0), Vec2::new(30.0, 10.0), Vec2::new(30.0, 30.0)
    ]);

    let svg = fs::read_to_string(dir.file("output.svg")).expect("read drawing");
    assert_eq!(svg.matches("<path").count(), report.strokes);
    assert!(svg.contains("width=\"33\""), "{svg}");

    let png = image::open(&report.raster_path).expect("read raster");
    assert_eq!((png.width(), png.height()), (report.width, report.height));
}

#[test]
fn shapes_follow_key_order() {
    let dir = TestDir::new("keys");
    write_squares(&dir.file("upload.png"), &[(5, 10), (40, 45), (70, 80)]);
    round_trip(&dir).trace().expect("trace");

    // Shuffle the table rows and relabel the shapes out of order
    let table = fs::read_to_string(dir.file("frag0.csv")).expect("read table");
    let mut rows: Vec<String> = table.lines().map(|l| {
        let (key, rest) = l.split_once(',').expect("row");
        let key = match key { "0" => "9", "1" => "-2", other => other };
        format!("{key},{rest}")
    }).collect();
    rows.reverse();
    fs::write(dir.file("frag0.csv"), rows.join("\n")).expect("write table");

    let paths = round_trip(&dir).regroup().expect("regroup");
    let keys: Vec<i64> = paths.shapes.iter().map(|s| s.key).collect();
    assert_eq!(keys, vec![-2, 2, 9]);
    assert_eq!(paths.points().count(), 12);
}

#[test]
fn blank_image_has_empty_canvas() {
    let dir = TestDir::new("blank");
    write_squares(&dir.file("upload.png"), &[]);

    let err = round_trip(&dir).run().unwrap_err();
    assert!(matches!(err.downcast_ref::<TraceError>(), Some(TraceError::EmptyCanvas { .. })), "{err:#}");
    assert_eq!(fs::read_to_string(dir.file("frag0.csv")).expect("read table"), "");
    assert!(!dir.file("output.svg").exists());
    assert!(!dir.file("output.png").exists());
}

#[test]
fn malformed_table_is_rejected() {
    let dir = TestDir::new("malformed");
    fs::write(dir.file("frag0.csv"), "0,10,10\n0,10,abc\n").expect("write table");

    let err = round_trip(&dir).regroup().unwrap_err();
    assert!(matches!(err.downcast_ref::<TraceError>(), Some(TraceError::MalformedRecord { line: 2, .. })), "{err:#}");
}

#[test]
fn missing_image_is_a_load_error() {
    let dir = TestDir::new("missing");
    let err = round_trip(&dir).run().unwrap_err();
    assert!(matches!(err.downcast_ref::<TraceError>(), Some(TraceError::ImageLoad { .. })), "{err:#}");
    assert!(!dir.file("frag0.csv").exists());
}

#[test]
fn binary_uses_default_paths() {
    let dir = TestDir::new("cli");
    write_squares(&dir.path.join("upload.png"), &[(10, 30)]);

    let output = run_binary(&[], &dir.path);
    assert!(output.status.success(), "process failed: {output:?}");
    assert!(dir.path.join("frag0.csv").exists());
    assert!(dir.path.join("output.svg").exists());
    assert!(dir.path.join("output.png").exists());
}

#[test]
fn binary_reports_failing_stage() {
    let dir = TestDir::new("cli_fail");
    fs::write(dir.path.join("empty.png"), "").expect("write empty image");

    let output = run_binary(&["empty.png", "t.csv", "d.svg"], &dir.path);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("image load failed"), "unexpected stderr: {stderr}");
}
