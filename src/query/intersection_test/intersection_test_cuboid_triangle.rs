use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::query::sat;
use crate::shape::Triangle;

/// Tests if a triangle intersects an AABB.
///
/// Touching counts as intersecting.
pub fn intersection_test_aabb_triangle(aabb1: &Aabb, triangle2: &Triangle) -> bool {
    intersection_test_cuboid_triangle(&aabb1.center(), &aabb1.half_extents(), triangle2)
}

/// Tests if a triangle intersects an axis-aligned cuboid with the given center and
/// half-extents.
#[inline]
pub fn intersection_test_cuboid_triangle(
    center1: &Point<Real>,
    half_extents1: &Vector<Real>,
    triangle2: &Triangle,
) -> bool {
    let shift = center1.coords;
    let local_triangle = Triangle::new(
        triangle2.id,
        triangle2.a - shift,
        triangle2.b - shift,
        triangle2.c - shift,
    );

    !sat::cuboid_triangle_separated_along_local_axes(half_extents1, &local_triangle)
        && !sat::cuboid_triangle_separated_along_edge_axes(half_extents1, &local_triangle)
        && !sat::cuboid_triangle_separated_along_normal(half_extents1, &local_triangle)
}
