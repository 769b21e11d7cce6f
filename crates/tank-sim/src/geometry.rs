//! Collider overlap tests.
//!
//! Pure functions over positions and collider shapes. Boxes are axis-aligned
//! and centred on the entity position; touching counts as overlapping.

use glam::DVec3;

use tank_core::components::Collider;
use tank_core::types::Position;

/// Whether two colliders placed at the given positions intersect.
pub fn overlaps(a_pos: &Position, a: &Collider, b_pos: &Position, b: &Collider) -> bool {
    let a_center = DVec3::from(*a_pos);
    let b_center = DVec3::from(*b_pos);

    match (a, b) {
        (Collider::Box { half_extents: ha }, Collider::Box { half_extents: hb }) => {
            let reach = DVec3::from_array(*ha) + DVec3::from_array(*hb);
            (a_center - b_center).abs().cmple(reach).all()
        }
        (Collider::Sphere { radius: ra }, Collider::Sphere { radius: rb }) => {
            a_center.distance_squared(b_center) <= (ra + rb) * (ra + rb)
        }
        (Collider::Box { half_extents }, Collider::Sphere { radius }) => {
            box_sphere(a_center, half_extents, b_center, *radius)
        }
        (Collider::Sphere { radius }, Collider::Box { half_extents }) => {
            box_sphere(b_center, half_extents, a_center, *radius)
        }
    }
}

/// Sphere-vs-AABB: distance from the sphere centre to the closest point of the box.
fn box_sphere(box_center: DVec3, half_extents: &[f64; 3], sphere_center: DVec3, radius: f64) -> bool {
    let half = DVec3::from_array(*half_extents);
    let closest = sphere_center.clamp(box_center - half, box_center + half);
    closest.distance_squared(sphere_center) <= radius * radius
}
