//! Spatial partitioning tools.
//!
//! The [`GridTrianglePartition`] assigns the triangles of a mesh to the cubic voxels of a sparse
//! grid, and answers [`Region`] queries with the ids of the triangles they contain.

pub use self::grid_box::GridBox;
pub use self::grid_triangle_partition::{
    FillMode, GridPartitionError, GridTrianglePartition, PartitionStats, RasterizationParams,
    VoxelContent, TRIANGLE_RATIO_MAX,
};
pub use self::region::{Axis, Region};

/// The integer coordinates of a voxel on a grid.
pub type VoxelCoords = na::Point3<i32>;

mod grid_box;
mod grid_triangle_partition;
mod region;
