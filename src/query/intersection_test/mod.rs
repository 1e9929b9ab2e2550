//! Implementation details of the intersection tests.

pub use self::intersection_test_cuboid_triangle::{
    intersection_test_aabb_triangle, intersection_test_cuboid_triangle,
};

mod intersection_test_cuboid_triangle;
