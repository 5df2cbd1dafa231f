//! Pattern record types
//!
//! Field names follow the JSON the web client reads, so `type` appears both on
//! the record and on its grid.

use serde::{Deserialize, Serialize};

/// Integer canvas coordinate, serialized as `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point(pub i64, pub i64);

impl Point {
    pub fn x(&self) -> i64 {
        self.0
    }

    pub fn y(&self) -> i64 {
        self.1
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Point(x, y)
    }
}

/// How intricate a template is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

/// Layout of the dot grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridKind {
    Square,
    Circular,
}

/// Parametric curve fitted to the motif, as display strings in `t`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equations {
    pub x_function: String,
    pub y_function: String,
    pub domain: [f64; 2],
    pub r_squared: f64,
}

/// Anchor dots the strokes are threaded through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    #[serde(rename = "type")]
    pub kind: GridKind,
    pub dimensions: [u32; 2],
    pub dots: Vec<Point>,
}

/// One kolam template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub complexity: Complexity,
    pub symmetry: String,
    pub equations: Equations,
    pub grid: Grid,
    pub paths: Vec<Vec<Point>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_point_serializes_as_pair() {
        assert_eq!(serde_json::to_value(Point(100, 150)).unwrap(), json!([100, 150]));
        let p: Point = serde_json::from_value(json!([3, -4])).unwrap();
        assert_eq!((p.x(), p.y()), (3, -4));
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(serde_json::to_value(Complexity::High).unwrap(), json!("High"));
        assert_eq!(serde_json::to_value(GridKind::Circular).unwrap(), json!("circular"));
    }
}
