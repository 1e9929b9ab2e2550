//! Non-persistent geometric queries.
//!
//! The specific functions have the form `[operation]_[shape1]_[shape2]()`, e.g.,
//! [`intersection_test_aabb_triangle`] tests whether an AABB and a triangle overlap.

pub use self::intersection_test::{
    intersection_test_aabb_triangle, intersection_test_cuboid_triangle,
};

mod intersection_test;
pub mod sat;
