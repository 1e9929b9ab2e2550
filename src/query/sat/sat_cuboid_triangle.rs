use crate::math::{Point, Real, Vector, DIM};
use crate::shape::Triangle;

/// Tests if one of the three coordinate axes separates `triangle` from a cuboid with the given
/// `half_extents` centered at the origin.
///
/// This is equivalent to an AABB/AABB test between the cuboid and the triangle's AABB.
pub fn cuboid_triangle_separated_along_local_axes(
    half_extents: &Vector<Real>,
    triangle: &Triangle,
) -> bool {
    for i in 0..DIM {
        let min = triangle.a[i].min(triangle.b[i]).min(triangle.c[i]);
        let max = triangle.a[i].max(triangle.b[i]).max(triangle.c[i]);

        if min > half_extents[i] || max < -half_extents[i] {
            return true;
        }
    }

    false
}

/// Tests if one of the nine cross products between the triangle's edges and the coordinate axes
/// separates `triangle` from a cuboid with the given `half_extents` centered at the origin.
pub fn cuboid_triangle_separated_along_edge_axes(
    half_extents: &Vector<Real>,
    triangle: &Triangle,
) -> bool {
    for e in triangle.edges_scaled_directions() {
        // Vector::{x, y, z}().cross(e)
        let axes = [
            Vector::new(0.0, -e.z, e.y),
            Vector::new(e.z, 0.0, -e.x),
            Vector::new(-e.y, e.x, 0.0),
        ];

        for axis in &axes {
            let p0 = axis.dot(&triangle.a.coords);
            let p1 = axis.dot(&triangle.b.coords);
            let p2 = axis.dot(&triangle.c.coords);
            let min = p0.min(p1).min(p2);
            let max = p0.max(p1).max(p2);
            let radius = half_extents.dot(&axis.abs());

            if min > radius || max < -radius {
                return true;
            }
        }
    }

    false
}

/// Tests if the plane of `triangle` separates it from a cuboid with the given `half_extents`
/// centered at the origin.
///
/// A degenerate triangle has no plane and is never separated by this test.
pub fn cuboid_triangle_separated_along_normal(
    half_extents: &Vector<Real>,
    triangle: &Triangle,
) -> bool {
    !plane_cuboid_overlap(&triangle.scaled_normal(), &triangle.a, half_extents)
}

/// Tests if the plane with the (not necessarily normalized) `normal` and passing through `point`
/// touches a cuboid with the given `half_extents` centered at the origin.
///
/// Only the two cuboid vertices that are extremal along `normal` are tested: the plane overlaps
/// the cuboid iff they lie on different sides of it (or on it).
pub fn plane_cuboid_overlap(
    normal: &Vector<Real>,
    point: &Point<Real>,
    half_extents: &Vector<Real>,
) -> bool {
    let mut vmin = Vector::zeros();
    let mut vmax = Vector::zeros();

    for i in 0..DIM {
        if normal[i] > 0.0 {
            vmin[i] = -half_extents[i] - point[i];
            vmax[i] = half_extents[i] - point[i];
        } else {
            vmin[i] = half_extents[i] - point[i];
            vmax[i] = -half_extents[i] - point[i];
        }
    }

    if normal.dot(&vmin) > 0.0 {
        return false;
    }

    normal.dot(&vmax) >= 0.0
}
