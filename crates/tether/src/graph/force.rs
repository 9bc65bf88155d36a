//! The spring model acting along a single edge.

use tether_core::geometry::Point;

/// Calculates the force acting on `vertex` because of `neighbor`.
///
/// The force lies on the line through both points and is proportional to
/// how far the pair is from `rest_length`:
///
/// ```text
/// F = (neighbor - vertex) * spring_constant * (1 - rest_length / |neighbor - vertex|)
/// ```
///
/// It points toward `neighbor` when the pair is farther apart than
/// `rest_length`, away from it when closer, and vanishes at exactly
/// `rest_length`.
///
/// Returns `None` when both points coincide, since the direction is
/// undefined there.
///
/// # Examples
///
/// ```
/// use tether::graph::spring_force;
/// use tether_core::geometry::Point;
///
/// let force = spring_force(Point::new(0.0, 0.0), Point::new(200.0, 0.0), 0.1, 100.0).unwrap();
/// assert!((force.x() - 10.0).abs() < 1e-4);
/// assert_eq!(force.y(), 0.0);
/// ```
pub fn spring_force(
    vertex: Point,
    neighbor: Point,
    spring_constant: f32,
    rest_length: f32,
) -> Option<Point> {
    let direction = neighbor.sub_point(vertex);
    let distance = direction.hypot();
    if distance == 0.0 {
        return None;
    }

    Some(
        direction
            .scale(spring_constant)
            .scale(1.0 - rest_length / distance),
    )
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    #[test]
    fn test_overlong_edge_attracts() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(200.0, 0.0);
        let force = spring_force(a, b, 0.1, 100.0).unwrap();

        assert!(approx_eq!(f32, force.x(), 10.0, epsilon = 1e-4));
        assert!(approx_eq!(f32, force.y(), 0.0));
    }

    #[test]
    fn test_compressed_edge_repels() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, 50.0);
        let force = spring_force(a, b, 0.1, 100.0).unwrap();

        // 0.1 * 50 * (1 - 100/50) = -5, pointing away from b
        assert!(approx_eq!(f32, force.x(), 0.0));
        assert!(approx_eq!(f32, force.y(), -5.0, epsilon = 1e-4));
    }

    #[test]
    fn test_rest_length_gives_zero_force() {
        let a = Point::new(10.0, 10.0);
        let b = Point::new(70.0, 90.0);
        let force = spring_force(a, b, 0.3, 100.0).unwrap();

        assert!(force.hypot() < 1e-4);
    }

    #[test]
    fn test_coincident_points_have_no_force() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(spring_force(p, p, 0.1, 100.0), None);
    }

    #[test]
    fn test_opposite_forces_along_edge() {
        let a = Point::new(-20.0, 5.0);
        let b = Point::new(130.0, 45.0);
        let on_a = spring_force(a, b, 0.1, 100.0).unwrap();
        let on_b = spring_force(b, a, 0.1, 100.0).unwrap();

        assert!(approx_eq!(f32, on_a.x(), -on_b.x(), epsilon = 1e-4));
        assert!(approx_eq!(f32, on_a.y(), -on_b.y(), epsilon = 1e-4));
    }

    #[test]
    fn test_zero_rest_length_is_plain_spring() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(30.0, 40.0);
        let force = spring_force(a, b, 0.5, 0.0).unwrap();

        assert!(approx_eq!(f32, force.x(), 15.0, epsilon = 1e-4));
        assert!(approx_eq!(f32, force.y(), 20.0, epsilon = 1e-4));
    }
}
