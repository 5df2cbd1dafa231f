//! The three built-in templates: Pulli, Kambi and Sikku kolam.
//!
//! Order matters: it is the index space of the selection hash.

use super::primitives::*;

fn points(coords: &[(i64, i64)]) -> Vec<Point> {
    coords.iter().copied().map(Point::from).collect()
}

/// Dots of a `cols`×`rows` square lattice starting at (`x0`, `y0`), row-major.
fn lattice(x0: i64, y0: i64, step: i64, cols: i64, rows: i64) -> Vec<Point> {
    (0..rows)
        .flat_map(|r| (0..cols).map(move |c| Point(x0 + c * step, y0 + r * step)))
        .collect()
}

pub(crate) fn records() -> Vec<PatternRecord> {
    vec![pulli(), kambi(), sikku()]
}

fn pulli() -> PatternRecord {
    PatternRecord {
        id: "KLM_001".to_string(),
        kind: "Pulli Kolam".to_string(),
        complexity: Complexity::Medium,
        symmetry: "Bilateral".to_string(),
        equations: Equations {
            x_function: "-61.26*cos(0.99*t + 13.35) + 199.12".to_string(),
            y_function: "-61.26*sin(0.99*t + 13.39) + 199.12".to_string(),
            domain: [0.0, 6.28],
            r_squared: 0.947,
        },
        grid: Grid {
            kind: GridKind::Square,
            dimensions: [5, 5],
            dots: lattice(100, 100, 50, 5, 5),
        },
        paths: vec![points(&[
            (150, 150),
            (200, 150),
            (250, 150),
            (250, 200),
            (250, 250),
            (200, 250),
            (150, 250),
            (150, 200),
            (150, 150),
        ])],
    }
}

fn kambi() -> PatternRecord {
    PatternRecord {
        id: "KLM_002".to_string(),
        kind: "Kambi Kolam".to_string(),
        complexity: Complexity::High,
        symmetry: "Radial (8-fold)".to_string(),
        equations: Equations {
            x_function: "80*cos(t) + 40*cos(3*t) + 200".to_string(),
            y_function: "80*sin(t) + 40*sin(3*t) + 200".to_string(),
            domain: [0.0, 6.28],
            r_squared: 0.923,
        },
        grid: Grid {
            kind: GridKind::Circular,
            dimensions: [7, 7],
            dots: points(&[
                (200, 120),
                (240, 140),
                (260, 180),
                (260, 220),
                (240, 260),
                (200, 280),
                (160, 260),
                (140, 220),
                (140, 180),
                (160, 140),
                (200, 200),
            ]),
        },
        paths: vec![points(&[
            (200, 120),
            (260, 180),
            (260, 220),
            (200, 280),
            (140, 220),
            (140, 180),
            (200, 120),
        ])],
    }
}

fn sikku() -> PatternRecord {
    PatternRecord {
        id: "KLM_003".to_string(),
        kind: "Sikku Kolam".to_string(),
        complexity: Complexity::Low,
        symmetry: "Rotational (4-fold)".to_string(),
        equations: Equations {
            x_function: "50*cos(t) + 20*cos(5*t) + 200".to_string(),
            y_function: "50*sin(t) + 20*sin(5*t) + 200".to_string(),
            domain: [0.0, 6.28],
            r_squared: 0.891,
        },
        grid: Grid {
            kind: GridKind::Square,
            dimensions: [3, 3],
            dots: lattice(150, 150, 50, 3, 3),
        },
        paths: vec![points(&[
            (200, 150),
            (250, 200),
            (200, 250),
            (150, 200),
            (200, 150),
        ])],
    }
}
