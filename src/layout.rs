//! Circle layout for 1 to 4 variables.
//!
//! Circles share one radius and are placed around the canvas center with fixed offsets of half
//! a radius, so every pair of circles overlaps and all `2^n` regions exist:
//!
//! ```text
//!  n=1      n=2        n=3         n=4
//!
//!   o       o o        o o         o o
//!                       o          o o
//! ```
//!
//! Each circle also gets a label position outside of its interior, pushed away from the canvas
//! center.
//!
//! # Examples
//!
//! ```
//! use euler_rs::layout::compute_centers;
//!
//! let centers = compute_centers(2, 800.0, 600.0, 100.0).unwrap();
//! assert_eq!(centers[0].x, 350.0);
//! assert_eq!(centers[1].x, 450.0);
//! assert!(compute_centers(5, 800.0, 600.0, 100.0).is_err());
//! ```

use log::debug;

use crate::error::{Error, Result};
use crate::types::{Point, Variable};

/// Largest number of circles that can be laid out.
pub const MAX_CIRCLES: usize = 4;

/// Distance from a circle center to its label, in radii.
pub const LABEL_DISTANCE: f64 = 1.15;
/// Scale applied to [`LABEL_DISTANCE`] on both axes for labels placed diagonally.
pub const LABEL_DIAGONAL: f64 = 0.7;

/// Center offsets in radii, relative to the canvas center. Entry `n - 1` holds the layout for
/// `n` circles, in variable order.
const LAYOUTS: [&[(f64, f64)]; MAX_CIRCLES] = [
    &[(0.0, 0.0)],
    &[(-0.5, 0.0), (0.5, 0.0)],
    &[(-0.5, -0.5), (0.5, -0.5), (0.0, 0.5)],
    &[(-0.5, -0.5), (0.5, -0.5), (-0.5, 0.5), (0.5, 0.5)],
];

/// A laid-out circle for one variable. Rebuilt on every render, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub variable: Variable,
    pub center: Point,
    pub radius: f64,
    /// Anchor of the variable name.
    pub label: Point,
}

impl Circle {
    /// Strict membership: points on the outline are outside.
    pub fn contains(&self, point: Point) -> bool {
        self.center.distance(point) < self.radius
    }
}

/// Computes the circle centers for `count` variables, in variable order.
///
/// Fails with [`Error::UnsupportedVariableCount`] unless `count` is in `1..=4`.
pub fn compute_centers(count: usize, canvas_width: f64, canvas_height: f64, radius: f64) -> Result<Vec<Point>> {
    let offsets = count
        .checked_sub(1)
        .and_then(|i| LAYOUTS.get(i))
        .ok_or(Error::UnsupportedVariableCount(count))?;
    let center = Point::new(canvas_width / 2.0, canvas_height / 2.0);
    let centers: Vec<Point> = offsets
        .iter()
        .map(|&(dx, dy)| center.offset(dx * radius, dy * radius))
        .collect();
    debug!("compute_centers(count = {}, radius = {}) -> {:?}", count, radius, centers);
    Ok(centers)
}

/// Places a label next to the circle at `circle_center`, outside of the circle.
///
/// Circles on the vertical axis get the label below, circles left or right of it get the label
/// on their outer side (straight or diagonal, depending on the vertical position). Labels below
/// the canvas center are shifted down by half the font size, labels on the right are shifted left
/// by the same amount, so that a text drawn from its left baseline does not run into the circle.
/// The half-font corrections are visual tuning, not geometry.
pub fn compute_label_position(
    circle_center: Point,
    radius: f64,
    font_size: f64,
    canvas_width: f64,
    canvas_height: f64,
) -> Point {
    let center = Point::new(canvas_width / 2.0, canvas_height / 2.0);
    let straight = LABEL_DISTANCE * radius;
    let diagonal = LABEL_DIAGONAL * straight;
    let font_offset = font_size / 2.0;

    let Point { x, y } = circle_center;
    if x == center.x {
        return Point::new(x, y + straight);
    }

    let (dx, correction) = if x < center.x { (-1.0, 0.0) } else { (1.0, -font_offset) };
    if y == center.y {
        Point::new(x + dx * straight + correction, y)
    } else if y < center.y {
        Point::new(x + dx * diagonal + correction, y - diagonal)
    } else {
        Point::new(x + dx * diagonal + correction, y + diagonal + font_offset)
    }
}

/// Lays out one circle per variable, with its label position.
pub fn layout_circles(
    variables: &[Variable],
    canvas_width: f64,
    canvas_height: f64,
    radius: f64,
    font_size: f64,
) -> Result<Vec<Circle>> {
    let centers = compute_centers(variables.len(), canvas_width, canvas_height, radius)?;
    Ok(variables
        .iter()
        .zip(centers)
        .map(|(variable, center)| Circle {
            variable: variable.clone(),
            center,
            radius,
            label: compute_label_position(center, radius, font_size, canvas_width, canvas_height),
        })
        .collect())
}

/// Pixel dimensions of the drawing surface.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// Fraction of the window width given to the diagram.
    pub const WINDOW_WIDTH_SHARE: f64 = 0.7;
    /// Fraction of the window height given to the diagram.
    pub const WINDOW_HEIGHT_SHARE: f64 = 0.8;

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Sizes the canvas for a window, truncating to whole pixels.
    pub fn fit_window(window_width: f64, window_height: f64) -> Self {
        Self {
            width: (window_width * Self::WINDOW_WIDTH_SHARE).max(0.0) as u32,
            height: (window_height * Self::WINDOW_HEIGHT_SHARE).max(0.0) as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    const W: f64 = 1000.0;
    const H: f64 = 800.0;
    const R: f64 = 165.0;
    const FONT: f64 = 40.0;

    #[test]
    fn test_counts() {
        for count in 1..=MAX_CIRCLES {
            let centers = compute_centers(count, W, H, R).unwrap();
            assert_eq!(centers.len(), count);
            for (i, a) in centers.iter().enumerate() {
                for b in centers.iter().skip(i + 1) {
                    assert_ne!(a, b, "centers coincide for count = {}", count);
                }
            }
        }
    }

    #[test]
    fn test_unsupported_counts() {
        for count in [0, 5, 10] {
            match compute_centers(count, W, H, R) {
                Err(Error::UnsupportedVariableCount(n)) => assert_eq!(n, count),
                other => panic!("unexpected result for count = {}: {:?}", count, other),
            }
        }
    }

    #[test]
    fn test_exact_layouts() {
        let c = Point::new(W / 2.0, H / 2.0);
        let h = R / 2.0;
        assert_eq!(compute_centers(1, W, H, R).unwrap(), vec![c]);
        assert_eq!(
            compute_centers(2, W, H, R).unwrap(),
            vec![c.offset(-h, 0.0), c.offset(h, 0.0)]
        );
        assert_eq!(
            compute_centers(3, W, H, R).unwrap(),
            vec![c.offset(-h, -h), c.offset(h, -h), c.offset(0.0, h)]
        );
        assert_eq!(
            compute_centers(4, W, H, R).unwrap(),
            vec![c.offset(-h, -h), c.offset(h, -h), c.offset(-h, h), c.offset(h, h)]
        );
    }

    #[test]
    fn test_label_below_on_axis() {
        let center = Point::new(W / 2.0, H / 2.0);
        let label = compute_label_position(center, R, FONT, W, H);
        assert_eq!(label, Point::new(W / 2.0, H / 2.0 + 1.15 * R));
    }

    #[test]
    fn test_label_sides() {
        for count in 1..=MAX_CIRCLES {
            for center in compute_centers(count, W, H, R).unwrap() {
                let label = compute_label_position(center, R, FONT, W, H);
                if center.x < W / 2.0 {
                    assert!(label.x < center.x);
                } else if center.x > W / 2.0 {
                    assert!(label.x > center.x);
                }
                assert!(label.distance(center) > R * 0.9, "label {} inside circle at {}", label, center);
            }
        }
    }

    fn assert_close(actual: Point, expected: Point) {
        assert!(
            actual.distance(expected) < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_label_right_side_correction() {
        let straight = 1.15 * R;
        let diagonal = 0.7 * straight;
        let centers = compute_centers(2, W, H, R).unwrap();
        let left = compute_label_position(centers[0], R, FONT, W, H);
        let right = compute_label_position(centers[1], R, FONT, W, H);
        assert_close(left, centers[0].offset(-straight, 0.0));
        assert_close(right, centers[1].offset(straight - FONT / 2.0, 0.0));

        let centers = compute_centers(4, W, H, R).unwrap();
        let labels: Vec<Point> = centers
            .iter()
            .map(|&c| compute_label_position(c, R, FONT, W, H))
            .collect();
        assert_close(labels[0], centers[0].offset(-diagonal, -diagonal));
        assert_close(labels[1], centers[1].offset(diagonal - FONT / 2.0, -diagonal));
        assert_close(labels[2], centers[2].offset(-diagonal, diagonal + FONT / 2.0));
        assert_close(labels[3], centers[3].offset(diagonal - FONT / 2.0, diagonal + FONT / 2.0));
    }

    #[test]
    fn test_layout_circles_keeps_order() {
        let vars: Vec<Variable> = ["A", "B", "C"].into_iter().map(Variable::from).collect();
        let circles = layout_circles(&vars, W, H, R, FONT).unwrap();
        let names: Vec<&str> = circles.iter().map(|c| c.variable.name()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(circles[2].center, Point::new(W / 2.0, H / 2.0 + R / 2.0));
        assert!(circles.iter().all(|c| c.radius == R));
    }

    #[test]
    fn test_contains_is_strict() {
        let circle = Circle {
            variable: Variable::from("A"),
            center: Point::new(0.0, 0.0),
            radius: 10.0,
            label: Point::default(),
        };
        assert!(circle.contains(Point::new(9.9, 0.0)));
        assert!(!circle.contains(Point::new(10.0, 0.0)));
        assert!(!circle.contains(Point::new(8.0, 8.0)));
    }

    #[test]
    fn test_fit_window() {
        let size = CanvasSize::fit_window(1000.0, 500.0);
        assert_eq!(size, CanvasSize::new(700, 400));
        assert_eq!(CanvasSize::fit_window(101.0, 11.0), CanvasSize::new(70, 8));
    }
}
