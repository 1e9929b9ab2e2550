//! Application of the Separating Axis Theorem (SAT) for overlap tests.
//!
//! Two convex shapes do **not** intersect if and only if there exists an axis onto which their
//! projections do not overlap. For a triangle and an axis-aligned cuboid, it is sufficient to
//! test 13 candidate axes:
//!
//! - the 3 coordinate axes (the cuboid's face normals),
//! - the 9 cross products between the coordinate axes and the triangle's edges,
//! - the triangle's normal.
//!
//! All the functions of this module expect the cuboid to be centered at the origin, i.e., the
//! triangle must already be expressed in the cuboid's local frame.

pub use self::sat_cuboid_triangle::*;

mod sat_cuboid_triangle;
