use dungeon_core::Point;

/// Euclidean (L2) distance between two points.
///
/// Used both as the edge cost between adjacent nodes and as the A*
/// heuristic.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let d = a - b;
    f64::from(d.r).hypot(f64::from(d.c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_distance() {
        let a = Point::new(0, 0);
        assert_eq!(euclidean(a, Point::new(3, 4)), 5.0);
        assert_eq!(euclidean(a, Point::new(0, 1)), 1.0);
        assert_eq!(euclidean(a, a), 0.0);
        assert_eq!(euclidean(Point::new(2, 7), Point::new(-1, 3)), 5.0);
    }

    #[test]
    fn euclidean_never_exceeds_step_count() {
        // A 4-connected walk needs |dr| + |dc| unit steps.
        let a = Point::new(1, 1);
        for p in [Point::new(4, 5), Point::new(-2, 1), Point::new(1, 9)] {
            let d = p - a;
            assert!(euclidean(a, p) <= f64::from(d.r.abs() + d.c.abs()));
        }
    }
}
