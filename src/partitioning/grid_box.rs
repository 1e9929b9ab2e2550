use crate::partitioning::VoxelCoords;

/// An inclusive box of grid coordinates.
///
/// The box is empty if `mins` is greater than `maxs` along any axis.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GridBox {
    /// The smallest grid coordinates covered by the box.
    pub mins: VoxelCoords,
    /// The largest grid coordinates covered by the box.
    pub maxs: VoxelCoords,
}

impl GridBox {
    /// Creates a new grid box from its inclusive bounds.
    #[inline]
    pub fn new(mins: VoxelCoords, maxs: VoxelCoords) -> Self {
        Self { mins, maxs }
    }

    /// The box containing only the voxel at `coords`.
    #[inline]
    pub fn cell(coords: VoxelCoords) -> Self {
        Self::new(coords, coords)
    }

    /// Is this box empty?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.mins.x > self.maxs.x || self.mins.y > self.maxs.y || self.mins.z > self.maxs.z
    }

    /// The number of voxels covered by this box.
    ///
    /// Saturates at `u64::MAX`.
    pub fn num_cells(&self) -> u64 {
        if self.is_empty() {
            return 0;
        }

        (0..3)
            .map(|i| (self.maxs[i] as i64 - self.mins[i] as i64 + 1) as u64)
            .fold(1, u64::saturating_mul)
    }

    /// The part of this box lying inside the grid with `num_voxels` voxels per side.
    ///
    /// The result is empty if the two don't overlap.
    pub fn clipped(&self, num_voxels: u32) -> Self {
        let last = num_voxels as i32 - 1;
        Self::new(
            self.mins.map(|e| e.max(0)),
            self.maxs.map(|e| e.min(last)),
        )
    }

    /// Does this box contain the voxel at `coords`?
    #[inline]
    pub fn contains(&self, coords: &VoxelCoords) -> bool {
        coords.x >= self.mins.x
            && coords.x <= self.maxs.x
            && coords.y >= self.mins.y
            && coords.y <= self.maxs.y
            && coords.z >= self.mins.z
            && coords.z <= self.maxs.z
    }

    /// Iterates through all the voxel coordinates of this box.
    ///
    /// The `x` coordinate varies the slowest and `z` the fastest.
    pub fn iter(&self) -> impl Iterator<Item = VoxelCoords> {
        let (mins, maxs) = (self.mins, self.maxs);
        (mins.x..=maxs.x).flat_map(move |x| {
            (mins.y..=maxs.y)
                .flat_map(move |y| (mins.z..=maxs.z).map(move |z| VoxelCoords::new(x, y, z)))
        })
    }
}
