use super::{DrawerKey, DtsKey, PhysicalLayout};
use crate::config::GeneratorConfig;
use crate::error::{KeyLabelError, KlResult};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Keys per main row of one half.
const ROW_KEYS: usize = 6;
/// Main (non-thumb) keys of one half.
const MAIN_KEYS: usize = ROW_KEYS * 3;

/// A point from ergogen's `points` output, coordinates in millimetres and
/// rotation in degrees. Other fields (meta, zone, ...) are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub r: f64,
}

pub type Points = BTreeMap<String, Point>;

pub fn load_points<P: AsRef<Path>>(path: P) -> KlResult<Points> {
    let content = fs::read_to_string(&path)?;
    debug!("Loading ergogen points from {}", path.as_ref().display());
    parse_points(&content)
}

/// Accepts ergogen's `points.yaml` (YAML) as well as the JSON dump of it.
pub fn parse_points(content: &str) -> KlResult<Points> {
    // 1. JSON
    if let Ok(points) = serde_json::from_str::<Points>(content) {
        return Ok(points);
    }

    // 2. YAML
    Ok(serde_yml::from_str::<Points>(content)?)
}

/// Sort key placing matrix keys row by row before the thumb fan.
fn sort_key(name: &str) -> KlResult<(u8, u32, u32)> {
    let bad = || KeyLabelError::Config(format!("malformed ergogen point name '{}'", name));
    let coord = |part: Option<&str>, prefix: char| -> KlResult<u32> {
        part.and_then(|p| p.strip_prefix(prefix))
            .and_then(|n| n.parse().ok())
            .ok_or_else(bad)
    };

    if let Some(rest) = name.strip_prefix("matrix_") {
        let mut parts = rest.split('_');
        let col = coord(parts.next(), 'c')?;
        let row = coord(parts.next(), 'r')?;
        Ok((0, row, col))
    } else if let Some(rest) = name.strip_prefix("thumbfan_") {
        let col = coord(rest.split('_').next(), 'c')?;
        Ok((1, 0, col))
    } else {
        Err(bad())
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Builds the physical layout of a split board from the points of its left
/// half. The right half is the mirror image, placed `gap_mm` to the right.
pub fn generate(points: &Points, config: &GeneratorConfig) -> KlResult<PhysicalLayout> {
    config.validate()?;

    let mut keys: Vec<((u8, u32, u32), &Point)> = Vec::new();
    for (name, point) in points {
        if name.starts_with("matrix_") || name.starts_with("thumbfan_") {
            keys.push((sort_key(name)?, point));
        }
    }
    if keys.is_empty() {
        return Err(KeyLabelError::Validation(
            "no matrix_ or thumbfan_ points found".to_string(),
        ));
    }
    keys.sort_by_key(|(k, _)| *k);

    let min_x = keys.iter().map(|(_, p)| p.x).fold(f64::INFINITY, f64::min);
    let max_x = keys.iter().map(|(_, p)| p.x).fold(f64::NEG_INFINITY, f64::max);
    let min_y = keys.iter().map(|(_, p)| p.y).fold(f64::INFINITY, f64::min);
    let max_y = keys.iter().map(|(_, p)| p.y).fold(f64::NEG_INFINITY, f64::max);

    let dts_scale = config.dts_scale();
    let json_scale = config.json_scale();
    let gap = (config.gap_mm * dts_scale) as i32;

    // Left half
    let mut left_dts = Vec::with_capacity(keys.len());
    let mut left_json = Vec::with_capacity(keys.len());
    for (col, (_, p)) in keys.iter().enumerate() {
        let x = ((p.x - min_x) * dts_scale) as i32;
        let y = ((p.y - min_y) * dts_scale) as i32;
        let r = (p.r * 100.0) as i32;
        let (rx, ry) = if r != 0 { (x, y) } else { (0, 0) };
        left_dts.push(DtsKey {
            w: config.key_width,
            h: config.key_height,
            x,
            y,
            r,
            rx,
            ry,
        });

        let x_json = (p.x - min_x) * json_scale;
        let y_json = (max_y - p.y) * json_scale;
        let r_json = -p.r;
        let rotated = r_json != 0.0;
        left_json.push(DrawerKey {
            row: 0,
            col,
            x: round_to(x_json, 2),
            y: round_to(y_json, 2),
            r: rotated.then(|| round_to(r_json, 1)),
            rx: rotated.then(|| round_to(x_json, 2)),
            ry: rotated.then(|| round_to(y_json, 2)),
        });
    }

    // Right half, mirrored about the board centre
    let board_width = ((max_x - min_x) * dts_scale) as i32 + config.key_width;
    let board_width_json = (max_x - min_x) * json_scale + config.json_key_width;
    let gap_json = config.gap_mm * json_scale;

    let mut dts = left_dts.clone();
    let mut right_json = Vec::with_capacity(left_json.len());
    for (i, (k, j)) in left_dts.iter().zip(&left_json).enumerate() {
        let mirror = |v: i32| board_width + gap + (board_width - v - config.key_width);
        dts.push(DtsKey {
            x: mirror(k.x),
            rx: if k.r != 0 { mirror(k.rx) } else { 0 },
            r: -k.r,
            ..*k
        });

        let x_r = round_to(
            board_width_json + gap_json + (board_width_json - j.x - config.json_key_width),
            2,
        );
        let rotated = j.r.is_some_and(|r| r != 0.0);
        right_json.push(DrawerKey {
            row: 0,
            col: left_json.len() + i,
            x: x_r,
            y: j.y,
            r: if rotated { j.r.map(|r| -r) } else { None },
            rx: rotated.then_some(x_r),
            ry: rotated.then_some(j.y),
        });
    }

    let drawer = interleave_rows(&left_json, &right_json);

    if config.rotate_180 {
        rotate_180(&mut dts);
    }

    info!(
        "Generated physical layout: {} devicetree keys, {} drawer keys",
        dts.len(),
        drawer.len()
    );
    Ok(PhysicalLayout { dts, drawer })
}

/// Orders drawer keys row by row, each row being the left half followed by
/// the right half read outside-in, and renumbers `col` to match.
fn interleave_rows(left: &[DrawerKey], right: &[DrawerKey]) -> Vec<DrawerKey> {
    fn by_row(keys: &[DrawerKey]) -> BTreeMap<usize, Vec<DrawerKey>> {
        let mut rows: BTreeMap<usize, Vec<DrawerKey>> = BTreeMap::new();
        for (i, key) in keys.iter().enumerate() {
            let row = if i < MAIN_KEYS { i / ROW_KEYS } else { 3 };
            rows.entry(row).or_default().push(key.clone());
        }
        for row in rows.values_mut() {
            row.sort_by_key(|k| k.col);
        }
        rows
    }

    let left_rows = by_row(left);
    let mut right_rows = by_row(right);

    let mut out = Vec::with_capacity(left.len() + right.len());
    for (row, keys) in left_rows {
        out.extend(keys);
        if let Some(mut mirrored) = right_rows.remove(&row) {
            mirrored.reverse();
            out.extend(mirrored);
        }
    }
    for (position, key) in out.iter_mut().enumerate() {
        key.col = position;
    }
    out
}

/// Rotates devicetree coordinates in place about the layout's bounding box.
/// A zero rotation origin stays zero.
pub fn rotate_180(keys: &mut [DtsKey]) {
    let Some(max_x) = keys.iter().map(|k| k.x).max() else {
        return;
    };
    let max_y = keys.iter().map(|k| k.y).max().unwrap_or(0);

    for k in keys.iter_mut() {
        k.x = max_x - k.x;
        k.y = max_y - k.y;
        if k.rx != 0 {
            k.rx = max_x - k.rx;
        }
        if k.ry != 0 {
            k.ry = max_y - k.ry;
        }
    }
}
