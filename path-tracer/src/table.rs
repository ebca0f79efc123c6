//--------------------------------------------------------------------
// table.rs
//--------------------------------------------------------------------
// Flattens contours into (shape, x, y) records, persists them as a
// headerless comma-separated table and regroups them on the way back
//--------------------------------------------------------------------

use std::collections::BTreeSet;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use log::debug;
use ordered_float::OrderedFloat;

use crate::contour::Contour;
use crate::error::{Result, TraceError};
use crate::geometry::{Coord, Vec2};
use crate::path::{PathGroup, Shape, SubPath};

const COLUMNS: usize = 3;

// One row of the path table
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlatRecord { pub shape_id: i64, pub x: Coord, pub y: Coord }

impl FlatRecord {
    pub fn new(shape_id: i64, x: Coord, y: Coord) -> FlatRecord { FlatRecord { shape_id, x, y } }
}

/// Emits one record per contour point, keyed by the contour's index.
pub fn serialize(contours: &[Contour]) -> Vec<FlatRecord> {
    contours.iter().enumerate()
        .flat_map(|(i, c)| c.points.iter().map(move |pt| FlatRecord::new(i as i64, pt.x as Coord, pt.y as Coord)))
        .collect()
}

/// Regroups records into shapes and sub-paths.
///
/// Shapes follow the ascending order of the distinct shape ids. Inside a
/// shape the x coordinate acts as the sub-path key: every distinct x value,
/// in ascending order, yields one sub-path holding the points that share it
/// in their original row order. Two points of one contour therefore only
/// land in the same sub-path when they sit on the same column.
pub fn deserialize(records: &[FlatRecord]) -> PathGroup {
    let keys: BTreeSet<i64> = records.iter().map(|r| r.shape_id).collect();

    let shapes: Vec<Shape> = keys.into_iter().map(|key| {
        let rows: Vec<&FlatRecord> = records.iter().filter(|r| r.shape_id == key).collect();
        let xs: BTreeSet<OrderedFloat<Coord>> = rows.iter().map(|r| OrderedFloat(r.x)).collect();

        let sub_paths: Vec<SubPath> = xs.into_iter().map(|x| {
            rows.iter().filter(|r| OrderedFloat(r.x) == x).map(|r| Vec2::new(r.x, r.y)).collect()
        }).collect();

        Shape { key, sub_paths }
    }).collect();

    let group = PathGroup { shapes };
    debug!("Regrouped {} records into {} shapes and {} sub-paths",
        records.len(), group.shapes.len(), group.sub_path_count());
    group
}

/// Writes records as `shape,x,y` rows with no header.
pub fn write_records<W: Write>(writer: W, records: &[FlatRecord]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    for r in records {
        writer.write_record(&[r.shape_id.to_string(), r.x.to_string(), r.y.to_string()])?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Parses `shape,x,y` rows in whatever order they appear.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<FlatRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| malformed(e.position().map_or(0, |p| p.line()), e.to_string()))?;
        records.push(parse_record(&row)?);
    }
    Ok(records)
}

fn parse_record(row: &StringRecord) -> Result<FlatRecord> {
    let line = row.position().map_or(0, |p| p.line());
    if row.len() != COLUMNS {
        return Err(malformed(line, format!("expected {} columns, found {}", COLUMNS, row.len())));
    }

    let shape = parse_number(line, "shape id", &row[0])?;
    if shape.fract() != 0.0 || shape.abs() >= i64::MAX as Coord {
        return Err(malformed(line, format!("shape id '{}' is not an integer", &row[0])));
    }

    let x = parse_number(line, "x", &row[1])?;
    let y = parse_number(line, "y", &row[2])?;
    Ok(FlatRecord::new(shape as i64, x, y))
}

fn parse_number(line: u64, column: &str, field: &str) -> Result<Coord> {
    match field.parse::<Coord>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(malformed(line, format!("{} '{}' is not a finite number", column, field)))
    }
}

fn malformed(line: u64, reason: String) -> TraceError {
    TraceError::MalformedRecord { line, reason }
}

/// Serializes contours to `path`; nothing is written unless encoding succeeds.
pub fn write_table(path: impl AsRef<Path>, records: &[FlatRecord]) -> Result<()> {
    let path = path.as_ref();
    let mut buffer = Vec::new();
    write_records(&mut buffer, records)?;

    std::fs::write(path, buffer).map_err(|source| TraceError::Io { path: path.to_path_buf(), source })?;
    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

pub fn read_table(path: impl AsRef<Path>) -> Result<PathGroup> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| TraceError::Io { path: path.to_path_buf(), source })?;
    let records = read_records(std::io::BufReader::new(file))?;
    debug!("Read {} records from {}", records.len(), path.display());
    Ok(deserialize(&records))
}
