/*!
trigrid
========

**trigrid** is a sparse voxel partitioning library for 3-dimensional
triangle meshes, written with the rust programming language.

Triangles are rasterized into a grid of cubic voxels centered at the origin,
either conservatively through their bounding boxes or exactly through a
triangle/cube separating-axis test, and the grid answers region queries
(single cells, slices, tunnels, or the whole grid) with the set of triangle ids
they touch.

```
# #[cfg(feature = "f32")] {
use trigrid3d::math::Point;
use trigrid3d::partitioning::{FillMode, GridTrianglePartition, Region, VoxelCoords};
use trigrid3d::shape::Triangle;

let mut grid = GridTrianglePartition::new(1.0, 4, 16).unwrap();
let tri = Triangle::new(
    0,
    Point::new(0.1, 0.1, 0.1),
    Point::new(0.9, 0.1, 0.1),
    Point::new(0.1, 0.9, 0.1),
);
grid.insert(&tri, FillMode::Exact);

assert_eq!(grid.objects(&Region::Cell(VoxelCoords::new(2, 2, 2))), Some(vec![0]));
assert_eq!(grid.objects(&Region::Cell(VoxelCoords::new(0, 0, 0))), None);
# }
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![warn(unused_qualifications)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[cfg_attr(test, macro_use)]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod partitioning;
pub mod query;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;
}
