//! Ray / box intersection for building picking.

use bevy::prelude::*;

/// Slab-test a ray against an axis-aligned box centered at the origin.
///
/// `origin` and `direction` must already be in the box's local frame.
/// Returns the distance along the ray to the entry point, or `None` if the
/// ray misses (a ray starting inside the box hits at distance zero).
pub fn ray_box_intersection(origin: Vec3, direction: Vec3, half_extents: Vec3) -> Option<f32> {
    let inv_dir = direction.recip();
    let t_lower = (-half_extents - origin) * inv_dir;
    let t_upper = (half_extents - origin) * inv_dir;

    let t_entry = t_lower.min(t_upper);
    let t_exit = t_lower.max(t_upper);

    let near = t_entry.max_element();
    let far = t_exit.min_element();

    if near > far || far < 0.0 {
        None
    } else {
        Some(near.max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_box_straight_on() {
        let t = ray_box_intersection(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(1.0, 1.0, 1.0),
        );
        assert_eq!(t, Some(9.0));
    }

    #[test]
    fn misses_box_to_the_side() {
        let t = ray_box_intersection(
            Vec3::new(5.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(1.0, 1.0, 1.0),
        );
        assert_eq!(t, None);
    }

    #[test]
    fn ignores_box_behind_ray() {
        let t = ray_box_intersection(
            Vec3::new(0.0, 0.0, 10.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
        );
        assert_eq!(t, None);
    }

    #[test]
    fn ray_inside_box_hits_at_zero() {
        let t = ray_box_intersection(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(1.0, 1.0, 1.0),
        );
        assert_eq!(t, Some(0.0));
    }

    #[test]
    fn hits_tall_building_shape_diagonally() {
        // Building-sized box: 6 x 30 x 6
        let half_extents = Vec3::new(3.0, 15.0, 3.0);
        let origin = Vec3::new(50.0, 40.0, 50.0);
        let direction = (Vec3::new(0.0, 10.0, 0.0) - origin).normalize();
        let t = ray_box_intersection(origin, direction, half_extents).expect("should hit");
        let hit = origin + direction * t;
        assert!(hit.x.abs() <= 3.0 + 1e-3);
        assert!(hit.y.abs() <= 15.0 + 1e-3);
        assert!(hit.z.abs() <= 3.0 + 1e-3);
    }
}
