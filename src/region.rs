//! Pixel classification.
//!
//! Every sampled point gets a [`Membership`]: one inside/outside flag per circle. A truth table
//! row *matches* a point when each of its variable values equals the point's flag for that
//! variable's circle. A point is shaded when it matches some row whose expression value is true.
//!
//! Only every `stride`-th pixel on both axes is classified. The renderer samples with a stride of
//! 2, a quarter of the pixels, which is enough for the flat fills this crate produces.

use log::debug;

use crate::error::Result;
use crate::layout::{CanvasSize, Circle};
use crate::table::TruthTable;
use crate::types::Point;

/// Inside/outside flags of a point, bit `k` set when the point lies inside circle `k`.
///
/// Holds up to 32 circles; layouts never produce more than four.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Membership(u32);

impl Membership {
    /// Classifies `point` against every circle.
    pub fn of(point: Point, circles: &[Circle]) -> Self {
        debug_assert!(circles.len() <= 32);
        Membership(
            circles
                .iter()
                .enumerate()
                .fold(0, |bits, (k, circle)| bits | ((circle.contains(point) as u32) << k)),
        )
    }

    /// Returns `true` if the point is inside circle `k`.
    pub fn is_inside(self, k: usize) -> bool {
        k < 32 && self.0 & (1 << k) != 0
    }
}

/// Checks whether every variable value of `row` (all entries but the last) equals the
/// corresponding flag of `membership`. A row without entries matches nothing.
pub fn row_matches(row: &[bool], membership: Membership) -> bool {
    match row.split_last() {
        Some((_, assignment)) => assignment
            .iter()
            .enumerate()
            .all(|(k, &value)| membership.is_inside(k) == value),
        None => false,
    }
}

/// Sample points of a canvas: `x` in the outer loop, `y` in the inner one, both stepping by
/// `stride` from zero. A zero stride is treated as 1.
pub fn sample_points(size: CanvasSize, stride: usize) -> impl Iterator<Item = (u32, u32)> {
    let stride = stride.max(1);
    (0..size.width)
        .step_by(stride)
        .flat_map(move |x| (0..size.height).step_by(stride).map(move |y| (x, y)))
}

/// Number of points [`sample_points`] yields.
pub fn sample_count(size: CanvasSize, stride: usize) -> usize {
    let stride = stride.max(1) as u64;
    (size.width as u64).div_ceil(stride) as usize * (size.height as u64).div_ceil(stride) as usize
}

/// Iterates over the sample points that must be shaded for `table`.
///
/// `circles[k]` is the circle of `table.variables[k]`. Fails if a row of the table is malformed.
/// Only the true rows are checked, and a point is shaded on the first one it matches.
pub fn shaded_points<'a>(
    table: &'a TruthTable,
    circles: &'a [Circle],
    size: CanvasSize,
    stride: usize,
) -> Result<impl Iterator<Item = (u32, u32)> + 'a> {
    table.validate()?;
    let rows: Vec<&[bool]> = table.true_rows().collect();
    debug!(
        "shaded_points: {} true rows of {}, {} circles, size = {}x{}, stride = {}",
        rows.len(),
        table.body.len(),
        circles.len(),
        size.width,
        size.height,
        stride
    );

    Ok(sample_points(size, stride).filter(move |&(x, y)| {
        if rows.is_empty() {
            return false;
        }
        let membership = Membership::of(Point::new(x as f64, y as f64), circles);
        rows.iter().any(|row| row_matches(row, membership))
    }))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use test_log::test;

    use super::*;
    use crate::error::Error;
    use crate::layout::layout_circles;

    const SIZE: CanvasSize = CanvasSize::new(200, 160);
    const R: f64 = 40.0;

    fn circles_for(table: &TruthTable) -> Vec<Circle> {
        layout_circles(&table.variables, SIZE.width as f64, SIZE.height as f64, R, 10.0).unwrap()
    }

    fn two_circles() -> Vec<Circle> {
        circles_for(&TruthTable::from_fn(["A", "B"], |_| false))
    }

    #[test]
    fn test_membership_of_point() {
        let circles = two_circles();
        let left_only = circles[0].center.offset(-R / 2.0, 0.0);
        let both = Point::new(SIZE.width as f64 / 2.0, SIZE.height as f64 / 2.0);
        let outside = Point::new(0.0, 0.0);

        let m = Membership::of(left_only, &circles);
        assert!(m.is_inside(0));
        assert!(!m.is_inside(1));
        let m = Membership::of(both, &circles);
        assert!(m.is_inside(0) && m.is_inside(1));
        assert!(!m.is_inside(2));
        assert!(!m.is_inside(100));
        assert_eq!(Membership::of(outside, &circles), Membership::default());
        assert_eq!(Membership::of(both, &[]), Membership::default());
    }

    #[test]
    fn test_row_matches() {
        let circles = two_circles();
        let m = Membership::of(circles[0].center.offset(-R / 2.0, 0.0), &circles);
        assert!(row_matches(&[true, false, true], m));
        assert!(row_matches(&[true, false, false], m));
        assert!(!row_matches(&[true, true, true], m));
        assert!(!row_matches(&[false, false, true], m));
        assert!(!row_matches(&[], m));
    }

    #[test]
    fn test_shaded_points_follow_row_matches() {
        let table = TruthTable::from_fn(["A", "B"], |row| row[0] ^ row[1]);
        let circles = circles_for(&table);
        let shaded: HashSet<(u32, u32)> = shaded_points(&table, &circles, SIZE, 2).unwrap().collect();
        for (x, y) in sample_points(SIZE, 2) {
            let m = Membership::of(Point::new(x as f64, y as f64), &circles);
            let expected = table.true_rows().any(|row| row_matches(row, m));
            assert_eq!(shaded.contains(&(x, y)), expected, "at ({}, {})", x, y);
        }
        assert!(!shaded.is_empty());
    }

    #[test]
    fn test_sample_points_stride() {
        let points: Vec<(u32, u32)> = sample_points(CanvasSize::new(5, 3), 2).collect();
        assert_eq!(points, vec![(0, 0), (0, 2), (2, 0), (2, 2), (4, 0), (4, 2)]);
        assert_eq!(sample_count(CanvasSize::new(5, 3), 2), 6);
        assert_eq!(sample_points(CanvasSize::new(3, 3), 0).count(), 9);
        assert_eq!(sample_count(CanvasSize::new(3, 3), 0), 9);
        assert_eq!(sample_count(CanvasSize::new(0, 3), 2), 0);
    }

    #[test]
    fn test_shaded_matches_true_rows() {
        let table = TruthTable::from_fn(["A", "B", "C"], |row| row[0] && !row[2]);
        let circles = circles_for(&table);
        let shaded: HashSet<(u32, u32)> = shaded_points(&table, &circles, SIZE, 2).unwrap().collect();
        for (x, y) in sample_points(SIZE, 2) {
            let m = Membership::of(Point::new(x as f64, y as f64), &circles);
            let expected = m.is_inside(0) && !m.is_inside(2);
            assert_eq!(shaded.contains(&(x, y)), expected, "at ({}, {})", x, y);
        }
        assert!(!shaded.is_empty());
    }

    #[test]
    fn test_no_true_rows() {
        let table = TruthTable::from_fn(["A"], |_| false);
        let circles = circles_for(&table);
        assert_eq!(shaded_points(&table, &circles, SIZE, 2).unwrap().count(), 0);
    }

    #[test]
    fn test_malformed_table() {
        let table = TruthTable {
            variables: vec!["A".into(), "B".into()],
            body: vec![vec![true, true]],
        };
        let circles = Vec::new();
        let result = shaded_points(&table, &circles, SIZE, 2);
        assert!(matches!(result, Err(Error::MalformedRow { row: 0, expected: 3, found: 2 })));
    }
}
