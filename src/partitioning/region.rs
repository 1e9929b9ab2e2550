use crate::partitioning::{GridBox, VoxelCoords};

/// One of the three coordinate axes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The `x` axis.
    X,
    /// The `y` axis.
    Y,
    /// The `z` axis.
    Z,
}

impl Axis {
    /// The index (0, 1, or 2) of this axis.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// The indices of the two other axes, in increasing order.
    #[inline]
    pub fn orthogonal_indices(self) -> [usize; 2] {
        match self {
            Axis::X => [1, 2],
            Axis::Y => [0, 2],
            Axis::Z => [0, 1],
        }
    }
}

/// A query volume, expressed in grid coordinates.
///
/// Regions don't reference any triangle: they are translated by the grid into a box of voxels
/// (see [`Region::grid_box`]) whose content is aggregated.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    /// The whole grid.
    All,
    /// A single voxel.
    Cell(VoxelCoords),
    /// A slab spanning the whole grid along the two axes orthogonal to `axis`, and covering the
    /// grid coordinates `[loc, loc + height - 1]` along `axis`.
    Slice {
        /// The axis the slab is orthogonal to.
        axis: Axis,
        /// The first grid coordinate covered along `axis`.
        loc: i32,
        /// The number of layers covered along `axis`.
        height: i32,
    },
    /// A rectangular prism spanning the whole grid along `axis`.
    ///
    /// Along the first axis orthogonal to `axis` (in `x, y, z` order) it covers
    /// `[loc1 - height, loc1 + height]`, and along the second one
    /// `[loc2 - height, loc2 + height]`.
    Tunnel {
        /// The axis the tunnel is aligned with.
        axis: Axis,
        /// The tunnel center along the first orthogonal axis.
        loc1: i32,
        /// The tunnel center along the second orthogonal axis.
        loc2: i32,
        /// The half-width of the tunnel, in voxels.
        height: i32,
    },
}

impl Region {
    /// The box of voxels covered by this region on a grid with `num_voxels` voxels per side.
    ///
    /// Slices are always clipped to the grid. Tunnels are clipped only if their `height` is
    /// positive: with a non-positive height the returned box may lie partially (or entirely)
    /// outside of the grid, or be empty. Bounds beyond the `i32` range saturate.
    pub fn grid_box(&self, num_voxels: u32) -> GridBox {
        let last = num_voxels as i32 - 1;
        let full = GridBox::new(VoxelCoords::origin(), VoxelCoords::new(last, last, last));

        match *self {
            Region::All => full,
            Region::Cell(coords) => GridBox::cell(coords),
            Region::Slice { axis, loc, height } => {
                let mut result = full;
                let i = axis.index();
                result.mins[i] = loc.max(0);
                result.maxs[i] = loc.saturating_add(height).saturating_sub(1).min(last);
                result
            }
            Region::Tunnel {
                axis,
                loc1,
                loc2,
                height,
            } => {
                let mut result = full;

                for (i, loc) in axis.orthogonal_indices().into_iter().zip([loc1, loc2]) {
                    let (mins, maxs) = (loc.saturating_sub(height), loc.saturating_add(height));

                    if height > 0 {
                        result.mins[i] = mins.max(0);
                        result.maxs[i] = maxs.min(last);
                    } else {
                        result.mins[i] = mins;
                        result.maxs[i] = maxs;
                    }
                }

                result
            }
        }
    }
}
