//! Small geometry helpers for the render boundary.

use nalgebra::Vector2;

/// Arithmetic-mean centroid of a point set.
fn centroid(points: &[Vector2<f64>]) -> Option<Vector2<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<f64>, p| acc + p);
    Some(sum / points.len() as f64)
}

/// Reorder polygon vertices counter-clockwise around their centroid.
///
/// Feasible vertices come out of enumeration in boundary-pair order; a
/// plotter wants them as a polygon outline. Assumes convex input, which LP
/// feasible regions are. Fewer than three points are returned unchanged.
pub fn order_ccw(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut out = points.to_vec();
    let Some(c) = centroid(points) else {
        return out;
    };
    if out.len() < 3 {
        return out;
    }
    out.sort_by(|p, q| {
        let ap = (p.y - c.y).atan2(p.x - c.x);
        let aq = (q.y - c.y).atan2(q.x - c.x);
        ap.partial_cmp(&aq).unwrap_or(std::cmp::Ordering::Equal)
    });
    out
}
