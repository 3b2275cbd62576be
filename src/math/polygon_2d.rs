use super::intersect_2d::segment_segment_intersect_2d;
use super::Point2;
use crate::error::{GeometryError, Result};

/// Computes the signed area of a polygon (shoelace formula).
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

/// Computes the unsigned area of a polygon.
#[must_use]
pub fn area_2d(points: &[Point2]) -> f64 {
    signed_area_2d(points).abs()
}

/// Computes the centroid of a polygon.
///
/// The sums are divided by `6 * signed_area`, so a clockwise winding flips
/// both the sums and the area and the result is correct for either winding.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the polygon has zero area.
pub fn centroid_2d(points: &[Point2]) -> Result<Point2> {
    let signed_area = signed_area_2d(points);
    if signed_area == 0.0 || !signed_area.is_finite() {
        return Err(GeometryError::Degenerate(format!(
            "centroid undefined for polygon with area {signed_area}"
        ))
        .into());
    }

    let n = points.len();
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    for i in 0..n {
        let a = &points[i];
        let b = &points[(i + 1) % n];
        let factor = a.x * b.y - b.x * a.y;
        sum_x += (a.x + b.x) * factor;
        sum_y += (a.y + b.y) * factor;
    }

    let scale = 6.0 * signed_area;
    Ok(Point2::new(sum_x / scale, sum_y / scale))
}

/// Boundary segments of a closed polygon.
///
/// The closing segment (last corner to first) comes first, followed by the
/// segments between consecutive corners.
pub fn segments_2d(points: &[Point2]) -> impl Iterator<Item = (Point2, Point2)> + '_ {
    let last = points.last().copied();
    last.into_iter()
        .chain(points.iter().copied())
        .zip(points.iter().copied())
}

/// Returns `true` if any two boundary segments cross at a point that is not
/// one of their end points.
///
/// All segment pairs are tested (`O(n²)`). Neighbouring segments only meet
/// at their shared corner and are skipped. Testing them too would let a
/// rounded hit next to the shared corner (off by an ulp) count as a
/// crossing, so convex polygons could be reported as non-simple.
#[must_use]
pub fn is_non_simple_2d(points: &[Point2]) -> bool {
    let segments: Vec<(Point2, Point2)> = segments_2d(points).collect();
    let n = segments.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            if adjacent {
                continue;
            }
            let (a1, a2) = &segments[i];
            let (b1, b2) = &segments[j];
            if let Some(hit) = segment_segment_intersect_2d(a1, a2, b1, b2) {
                let at_end_point = hit == *a1 || hit == *a2 || hit == *b1 || hit == *b2;
                if !at_end_point {
                    return true;
                }
            }
        }
    }
    false
}
