//! SVG export of kolam drawings
//!
//! Produces a fixed 400×400 document: black background, one orange dot per
//! grid point, one white open stroke per path.

use serde_json::Value;

use crate::pattern::{PatternRecord, Point};
use crate::{Error, Result};

pub const CANVAS_SIZE: u32 = 400;
pub const BACKGROUND: &str = "black";
pub const DOT_RADIUS: u32 = 3;
pub const DOT_FILL: &str = "#FF6347";
pub const STROKE: &str = "white";
pub const STROKE_WIDTH: u32 = 3;

/// Render dots and paths into an SVG document.
///
/// Empty paths are skipped. A single-point path still emits an element whose
/// data is a lone move command, which draws nothing.
pub fn render(dots: &[Point], paths: &[Vec<Point>]) -> String {
    let mut svg = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{size}" height="{size}" xmlns="http://www.w3.org/2000/svg">
  <rect width="{size}" height="{size}" fill="{bg}"/>

  <!-- Grid Dots -->
  <g id="grid">
"#,
        size = CANVAS_SIZE,
        bg = BACKGROUND,
    );

    for dot in dots {
        svg.push_str(&format!(
            "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>\n",
            dot.x(),
            dot.y(),
            DOT_RADIUS,
            DOT_FILL
        ));
    }

    svg.push_str("  </g>\n\n  <!-- Kolam Paths -->\n  <g id=\"kolam\">\n");

    for d in paths.iter().filter_map(|p| path_data(p)) {
        svg.push_str(&format!(
            "    <path d=\"{}\" stroke=\"{}\" stroke-width=\"{}\" fill=\"none\"/>\n",
            d, STROKE, STROKE_WIDTH
        ));
    }

    svg.push_str("  </g>\n</svg>");
    svg
}

/// `M x y L x y ...` through the points in order, `None` for an empty path.
pub fn path_data(path: &[Point]) -> Option<String> {
    let (first, rest) = path.split_first()?;
    let mut d = format!("M {} {}", first.x(), first.y());
    for p in rest {
        d.push_str(&format!(" L {} {}", p.x(), p.y()));
    }
    Some(d)
}

/// Validated body of an export request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SvgRequest {
    pub grid_dots: Vec<Point>,
    pub paths: Vec<Vec<Point>>,
}

impl SvgRequest {
    /// Validate a JSON body of the form `{"paths": [[[x, y], ...]], "grid_dots": [[x, y], ...]}`.
    ///
    /// Missing keys mean empty. Fractional coordinates are rounded to the
    /// nearest integer; anything else that is not a numeric pair is rejected.
    pub fn from_json(body: &Value) -> Result<Self> {
        let obj = body
            .as_object()
            .ok_or_else(|| Error::Validation("request body must be a JSON object".to_string()))?;

        let grid_dots = match obj.get("grid_dots") {
            None | Some(Value::Null) => Vec::new(),
            Some(v) => parse_points(v, "grid_dots")?,
        };

        let paths = match obj.get("paths") {
            None | Some(Value::Null) => Vec::new(),
            Some(v) => as_array(v, "paths")?
                .iter()
                .enumerate()
                .map(|(i, path)| parse_points(path, &format!("paths[{i}]")))
                .collect::<Result<Vec<_>>>()?,
        };

        Ok(Self { grid_dots, paths })
    }

    /// Parse raw bytes as JSON, then validate
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let body: Value = serde_json::from_slice(bytes)
            .map_err(|e| Error::Validation(format!("invalid JSON body: {e}")))?;
        Self::from_json(&body)
    }

    /// Export request that redraws a catalog template
    pub fn from_pattern(pattern: &PatternRecord) -> Self {
        Self {
            grid_dots: pattern.grid.dots.clone(),
            paths: pattern.paths.clone(),
        }
    }

    pub fn render(&self) -> String {
        render(&self.grid_dots, &self.paths)
    }
}

fn as_array<'a>(value: &'a Value, at: &str) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| Error::Validation(format!("{at}: expected an array, got {value}")))
}

fn parse_points(value: &Value, at: &str) -> Result<Vec<Point>> {
    as_array(value, at)?
        .iter()
        .enumerate()
        .map(|(i, p)| parse_point(p, &format!("{at}[{i}]")))
        .collect()
}

fn parse_point(value: &Value, at: &str) -> Result<Point> {
    match value.as_array().map(Vec::as_slice) {
        Some([x, y]) => Ok(Point(parse_coord(x, at)?, parse_coord(y, at)?)),
        _ => Err(Error::Validation(format!(
            "{at}: expected an [x, y] pair, got {value}"
        ))),
    }
}

fn parse_coord(value: &Value, at: &str) -> Result<i64> {
    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    match value.as_f64() {
        Some(f) if f.is_finite() => Ok(f.round() as i64),
        _ => Err(Error::Validation(format!(
            "{at}: coordinate {value} is not a number"
        ))),
    }
}
