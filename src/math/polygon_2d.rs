use super::{Point2, Vector2};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the area centroid of a closed polygon.
///
/// Falls back to the vertex average when the polygon has (near) zero area.
#[must_use]
pub fn centroid_2d(points: &[Point2]) -> Point2 {
    let n = points.len();
    if n == 0 {
        return Point2::origin();
    }
    let area = signed_area_2d(points);
    if area.abs() < super::TOLERANCE {
        #[allow(clippy::cast_precision_loss)]
        let inv = 1.0 / n as f64;
        let sum = points
            .iter()
            .fold(Vector2::zeros(), |acc, p| acc + p.coords);
        return Point2::from(sum * inv);
    }
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        let cross = points[i].x * points[j].y - points[j].x * points[i].y;
        cx += (points[i].x + points[j].x) * cross;
        cy += (points[i].y + points[j].y) * cross;
    }
    let k = 1.0 / (6.0 * area);
    Point2::new(cx * k, cy * k)
}

/// Returns the left-pointing normal of a direction vector (rotated +90°).
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn unit_square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        let area = signed_area_2d(&unit_square());
        assert!((area - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = unit_square();
        pts.reverse();
        let area = signed_area_2d(&pts);
        assert!((area + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!((signed_area_2d(&[Point2::new(0.0, 0.0)])).abs() < TOLERANCE);
        assert!((signed_area_2d(&[])).abs() < TOLERANCE);
    }

    #[test]
    fn centroid_of_square() {
        let c = centroid_2d(&unit_square());
        assert!((c.x - 0.5).abs() < TOLERANCE);
        assert!((c.y - 0.5).abs() < TOLERANCE);
    }

    #[test]
    fn centroid_of_collinear_points_is_average() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        ];
        let c = centroid_2d(&pts);
        assert!((c.x - 1.0).abs() < TOLERANCE);
        assert!(c.y.abs() < TOLERANCE);
    }

    #[test]
    fn left_normal_basic() {
        let n = left_normal(Vector2::new(1.0, 0.0));
        assert!((n.x).abs() < TOLERANCE);
        assert!((n.y - 1.0).abs() < TOLERANCE);
    }
}
