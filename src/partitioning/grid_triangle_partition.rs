use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DIM};
use crate::partitioning::{GridBox, Region, VoxelCoords};
use crate::query;
use crate::shape::Triangle;
use crate::utils::hashmap::HashMap;
use crate::utils::hashset::HashSet;
use core::fmt;
use smallvec::SmallVec;

/// Triangles with a `longest² / shortest²` squared side ratio above this value are
/// considered thin.
pub const TRIANGLE_RATIO_MAX: Real = 16.0;

/// The triangle ids stored in a single voxel.
pub type VoxelContent = SmallVec<[u32; 4]>;

/// Errors raised when creating a [`GridTrianglePartition`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum GridPartitionError {
    /// The number of voxels per side must be even and non-zero.
    #[error("the number of voxels per side must be even and non-zero, found {0}.")]
    InvalidConfiguration(u32),
    /// The voxel size must be finite and strictly positive.
    #[error("the voxel size must be finite and strictly positive, found {0}.")]
    InvalidVoxelSize(Real),
}

/// The strategy used to select the voxels a triangle is inserted into.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FillMode {
    /// Every voxel intersecting the triangle's bounding box is filled.
    ///
    /// This overestimates the set of voxels actually touched by the triangle.
    Bounds,
    /// Only the voxels passing a triangle/cube overlap test are filled.
    Exact,
}

/// Tuning of the exact rasterization of triangles.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RasterizationParams {
    /// Scale factor applied to each voxel's half-extent before testing it against a triangle,
    /// so triangles lying on voxel boundaries aren't missed because of rounding errors.
    pub cube_inflation: Real,
    /// The deepest recursion level at which a triangle for which no voxel passes the overlap
    /// test is still split. Deeper than that, the voxels containing its vertices are filled
    /// instead.
    pub max_split_depth: u32,
    /// The `longest² / shortest²` squared side ratio above which a triangle is considered thin.
    pub thin_triangle_ratio: Real,
    /// If `true`, thin triangles longer than a voxel are split before being rasterized.
    pub presplit_thin_triangles: bool,
}

impl Default for RasterizationParams {
    fn default() -> Self {
        Self {
            cube_inflation: 1.02,
            max_split_depth: 2,
            thin_triangle_ratio: TRIANGLE_RATIO_MAX,
            presplit_thin_triangles: false,
        }
    }
}

/// Counters describing the work done by a [`GridTrianglePartition`].
///
/// These are instrumentation only.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PartitionStats {
    /// The number of triangle ids written into voxels, duplicates included.
    pub cells_filled: u64,
    /// The number of calls to [`GridTrianglePartition::insert`].
    pub num_inserts: u64,
    /// The number of triangles split during exact insertion.
    pub num_splits: u64,
    /// The number of triangles for which only the voxels containing their vertices were
    /// filled, because the overlap test found no voxel.
    pub num_approximations: u64,
    /// The number of non-empty voxels.
    pub num_occupied_voxels: usize,
}

impl fmt::Display for PartitionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "inserts: {}, cells filled: {}, occupied voxels: {}, splits: {}, approximations: {}",
            self.num_inserts,
            self.cells_filled,
            self.num_occupied_voxels,
            self.num_splits,
            self.num_approximations
        )
    }
}

/// A sparse grid of cubic voxels partitioning the surface of a triangle mesh.
///
/// The grid is a cube of `n × n × n` voxels of size `voxel_size`, centered at the origin:
/// it covers the world-space coordinates `[-n/2 * voxel_size, n/2 * voxel_size]` along each
/// axis. Only the voxels containing at least one triangle are stored.
///
/// Queries only need a shared reference, so a grid that is no longer being modified can be
/// queried from multiple threads at once.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct GridTrianglePartition {
    voxel_size: Real,
    num_voxels: u32,
    params: RasterizationParams,
    voxels: HashMap<VoxelCoords, VoxelContent>,
    triangles: Vec<Option<Triangle>>,
    next_id: u32,
    stats: PartitionStats,
}

impl GridTrianglePartition {
    /// Creates an empty grid with the default [`RasterizationParams`].
    ///
    /// # Parameters
    /// - `voxel_size`: the side length of each voxel.
    /// - `num_voxels_per_side`: the number of voxels along each axis. Must be even.
    /// - `num_triangle_hint`: the expected number of triangles. This is used to preallocate
    ///   the triangle storage and as the first id given to triangles created by splitting, so
    ///   it should be larger than any id the caller will insert. See
    ///   [`GridTrianglePartition::set_next_id`].
    pub fn new(
        voxel_size: Real,
        num_voxels_per_side: u32,
        num_triangle_hint: u32,
    ) -> Result<Self, GridPartitionError> {
        Self::with_params(
            voxel_size,
            num_voxels_per_side,
            num_triangle_hint,
            RasterizationParams::default(),
        )
    }

    /// Creates an empty grid with custom rasterization parameters.
    pub fn with_params(
        voxel_size: Real,
        num_voxels_per_side: u32,
        num_triangle_hint: u32,
        params: RasterizationParams,
    ) -> Result<Self, GridPartitionError> {
        if num_voxels_per_side == 0 || num_voxels_per_side % 2 != 0 {
            return Err(GridPartitionError::InvalidConfiguration(num_voxels_per_side));
        }

        if !voxel_size.is_finite() || voxel_size <= 0.0 {
            return Err(GridPartitionError::InvalidVoxelSize(voxel_size));
        }

        Ok(Self {
            voxel_size,
            num_voxels: num_voxels_per_side,
            params,
            voxels: HashMap::default(),
            triangles: Vec::with_capacity(num_triangle_hint as usize),
            next_id: num_triangle_hint,
            stats: PartitionStats::default(),
        })
    }

    /// The side length of each voxel.
    #[inline]
    pub fn voxel_size(&self) -> Real {
        self.voxel_size
    }

    /// The number of voxels along each axis.
    #[inline]
    pub fn num_voxels_per_side(&self) -> u32 {
        self.num_voxels
    }

    /// The rasterization parameters of this grid.
    #[inline]
    pub fn params(&self) -> &RasterizationParams {
        &self.params
    }

    /// The id that will be given to the next triangle created by splitting.
    #[inline]
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Sets the id that will be given to the next triangle created by splitting.
    ///
    /// The counter never moves backward, so ids already in use are never given again. Once
    /// fewer than two ids are left, triangles are no longer split.
    ///
    /// The triangle registry is a dense array indexed by id: keep ids close to the number of
    /// triangles actually inserted, since a split with ids near `u32::MAX` allocates storage
    /// for billions of triangles.
    pub fn set_next_id(&mut self, next_id: u32) {
        self.next_id = self.next_id.max(next_id);
    }

    /// The world-space AABB covered by this grid.
    pub fn extents(&self) -> Aabb {
        let half = self.half_num_voxels() as Real * self.voxel_size;
        Aabb::from_half_extents(Point::origin(), Vector::repeat(half))
    }

    #[inline]
    fn half_num_voxels(&self) -> i32 {
        (self.num_voxels / 2) as i32
    }

    #[inline]
    fn half_voxel_size(&self) -> Real {
        self.voxel_size / 2.0
    }

    /// The grid coordinates of the voxel containing the world-space point `pt`.
    ///
    /// Points outside of the grid are clamped to the closest voxel on its boundary.
    pub fn grid_coords_from_world_coords(&self, pt: &Point<Real>) -> VoxelCoords {
        let half = self.half_num_voxels();
        let last = self.num_voxels as i32 - 1;

        VoxelCoords::from(
            pt.coords
                .map(|e| half.saturating_add((e / self.voxel_size).floor() as i32).clamp(0, last)),
        )
    }

    /// The world-space center of the voxel with the grid coordinates `coords`.
    pub fn voxel_center_in_world_coords(&self, coords: &VoxelCoords) -> Point<Real> {
        let half = self.half_num_voxels();
        let half_voxel = self.half_voxel_size();

        Point::from(
            coords
                .coords
                .map(|e| (e - half) as Real * self.voxel_size + half_voxel),
        )
    }

    /// The box of voxels potentially touched by `triangle`.
    ///
    /// Bounds lying exactly on a voxel boundary are pushed outward by half a voxel so both
    /// voxels sharing that boundary are included.
    pub fn triangle_grid_box(&self, triangle: &Triangle) -> GridBox {
        let mut aabb = triangle.local_aabb();
        let extents = self.extents();
        let half_voxel = self.half_voxel_size();

        for i in 0..DIM {
            if aabb.mins[i] % self.voxel_size == 0.0 {
                aabb.mins[i] = (aabb.mins[i] - half_voxel).max(extents.mins[i]);
            }
            if aabb.maxs[i] % self.voxel_size == 0.0 {
                aabb.maxs[i] = (aabb.maxs[i] + half_voxel).min(extents.maxs[i]);
            }
        }

        GridBox::new(
            self.grid_coords_from_world_coords(&aabb.mins),
            self.grid_coords_from_world_coords(&aabb.maxs),
        )
    }

    /// Inserts a triangle into every voxel selected by `mode`.
    ///
    /// The triangle's coordinates are copied: the grid doesn't borrow the caller's mesh. In
    /// [`FillMode::Exact`], the triangle may be split into smaller triangles which are given
    /// new ids (see [`GridTrianglePartition::next_id`]); their geometry is then available
    /// through [`GridTrianglePartition::triangle`].
    pub fn insert(&mut self, triangle: &Triangle, mode: FillMode) {
        self.stats.num_inserts += 1;
        self.register_triangle(triangle);

        match mode {
            FillMode::Bounds => {
                let grid_box = self.triangle_grid_box(triangle);
                self.fill_grid_box(&grid_box, triangle.id);
            }
            FillMode::Exact => self.insert_exact(triangle, 0),
        }
    }

    /// Inserts all the given triangles, in [`FillMode::Bounds`].
    ///
    /// There is no batch version of the exact insertion: call [`GridTrianglePartition::insert`]
    /// for each triangle instead.
    pub fn insert_all_with_bounds<'a>(&mut self, triangles: impl IntoIterator<Item = &'a Triangle>) {
        for triangle in triangles {
            self.insert(triangle, FillMode::Bounds);
        }
    }

    fn insert_exact(&mut self, triangle: &Triangle, depth: u32) {
        if self.params.presplit_thin_triangles
            && depth <= self.params.max_split_depth
            && self.is_thin(triangle)
            && triangle.largest_side() > self.voxel_size
            && self.split_and_insert(triangle, depth)
        {
            return;
        }

        let grid_box = self.triangle_grid_box(triangle);

        if grid_box.num_cells() <= 2 {
            self.fill_grid_box(&grid_box, triangle.id);
            return;
        }

        let half_extents =
            Vector::repeat(self.half_voxel_size() * self.params.cube_inflation);
        let mut found = false;

        for coords in grid_box.iter() {
            let center = self.voxel_center_in_world_coords(&coords);

            if query::intersection_test_cuboid_triangle(&center, &half_extents, triangle) {
                self.add_to_voxel(coords, triangle.id);
                found = true;
            }
        }

        if !found {
            self.recover_missed_triangle(triangle, depth);
        }
    }

    /// Handles a triangle for which the overlap test didn't find any voxel.
    fn recover_missed_triangle(&mut self, triangle: &Triangle, depth: u32) {
        let splittable =
            triangle.largest_side() >= self.voxel_size && depth <= self.params.max_split_depth;

        if !(splittable && self.split_and_insert(triangle, depth)) {
            log::debug!(
                "No voxel found for triangle {} (depth {}), filling the voxels of its vertices.",
                triangle.id,
                depth
            );
            self.stamp_vertices(triangle);
        }
    }

    /// Splits `triangle` and inserts its parts. Returns `false`, leaving the grid untouched, if
    /// there are no ids left for the new parts.
    fn split_and_insert(&mut self, triangle: &Triangle, depth: u32) -> bool {
        let Some(next_id) = self.next_id.checked_add(2) else {
            log::warn!("Triangle ids exhausted, triangle {} can't be split.", triangle.id);
            return false;
        };

        let parts = triangle.split(self.next_id);
        self.next_id = next_id;
        self.stats.num_splits += 1;

        log::debug!(
            "Split triangle {} into {}, {} and {} (depth {}).",
            triangle.id,
            parts[0].id,
            parts[1].id,
            parts[2].id,
            depth + 1
        );

        // The first part reuses the parent id, whose geometry is already registered.
        for part in &parts[1..] {
            self.register_triangle(part);
        }

        for part in &parts {
            self.insert_exact(part, depth + 1);
        }

        true
    }

    fn stamp_vertices(&mut self, triangle: &Triangle) {
        self.stats.num_approximations += 1;

        for pt in triangle.vertices() {
            let coords = self.grid_coords_from_world_coords(&pt);
            self.add_to_voxel(coords, triangle.id);
        }
    }

    fn is_thin(&self, triangle: &Triangle) -> bool {
        triangle.side_ratio() * self.params.thin_triangle_ratio < 1.0
    }

    fn fill_grid_box(&mut self, grid_box: &GridBox, id: u32) {
        for coords in grid_box.iter() {
            self.add_to_voxel(coords, id);
        }
    }

    fn add_to_voxel(&mut self, coords: VoxelCoords, id: u32) {
        self.voxels.entry(coords).or_default().push(id);
        self.stats.cells_filled += 1;
    }

    fn register_triangle(&mut self, triangle: &Triangle) {
        let id = triangle.id as usize;

        if id >= self.triangles.len() {
            // Over-allocate by 30% to amortize the growth caused by split triangles.
            let new_len = (id + 1) + (id + 1) * 3 / 10;
            self.triangles.resize(new_len, None);
        }

        self.triangles[id] = Some(*triangle);
        self.next_id = self.next_id.max(triangle.id.saturating_add(1));
    }

    /// The triangle with the given id, if it was inserted or created by splitting.
    pub fn triangle(&self, id: u32) -> Option<&Triangle> {
        self.triangles.get(id as usize)?.as_ref()
    }

    /// The flat vertex coordinates `[ax, ay, az, bx, …, cz]` of the triangle with the given id.
    pub fn triangle_coords(&self, id: u32) -> Option<[Real; 9]> {
        self.triangle(id).map(|t| t.coords())
    }

    /// The ids stored in the voxel at `coords`, if it isn't empty.
    ///
    /// The same id may appear more than once.
    pub fn voxel(&self, coords: &VoxelCoords) -> Option<&[u32]> {
        self.voxels.get(coords).map(|ids| &ids[..])
    }

    /// The number of non-empty voxels.
    #[inline]
    pub fn num_occupied_voxels(&self) -> usize {
        self.voxels.len()
    }

    /// Removes all the triangles from this grid.
    ///
    /// The id counter is left untouched so split ids are never given twice.
    pub fn clear(&mut self) {
        self.voxels.clear();
        self.triangles.clear();
        self.stats = PartitionStats::default();
    }

    /// The ids of all the triangles touching the given region.
    ///
    /// Each id is returned once, in no particular order. Returns `None` if the region is
    /// empty.
    pub fn objects(&self, region: &Region) -> Option<Vec<u32>> {
        match region {
            Region::Cell(coords) => {
                let ids = self.voxels.get(coords)?;
                let mut set = HashSet::default();
                set.extend(ids.iter().copied());
                Some(set.into_iter().collect())
            }
            _ => {
                let grid_box = region.grid_box(self.num_voxels);
                self.objects_in_box(&grid_box.mins, &grid_box.maxs)
            }
        }
    }

    /// The ids of all the triangles touching the voxels in the inclusive box `[mins, maxs]`.
    ///
    /// Each id is returned once, in no particular order. Returns `None` if the box is empty.
    /// The box is clipped to the grid, so its corners may lie anywhere.
    pub fn objects_in_box(&self, mins: &VoxelCoords, maxs: &VoxelCoords) -> Option<Vec<u32>> {
        let grid_box = GridBox::new(*mins, *maxs).clipped(self.num_voxels);
        let mut set = HashSet::default();
        set.reserve(53);

        if grid_box.num_cells() > self.voxels.len() as u64 {
            // Cheaper to go through the occupied voxels only.
            for (coords, ids) in self.voxels.iter() {
                if grid_box.contains(coords) {
                    set.extend(ids.iter().copied());
                }
            }
        } else {
            for coords in grid_box.iter() {
                if let Some(ids) = self.voxels.get(&coords) {
                    set.extend(ids.iter().copied());
                }
            }
        }

        if set.is_empty() {
            None
        } else {
            Some(set.into_iter().collect())
        }
    }

    /// Counters describing the work done by this grid so far.
    pub fn stats(&self) -> PartitionStats {
        PartitionStats {
            num_occupied_voxels: self.voxels.len(),
            ..self.stats
        }
    }

    /// Logs the [`PartitionStats`] of this grid at the `info` level.
    pub fn log_stats(&self) {
        log::info!("Grid of {}³ voxels: {}", self.num_voxels, self.stats());
    }

    /// A human-readable dump of the number of ids stored in each non-empty voxel, one voxel
    /// per line, sorted by grid coordinates.
    pub fn grid_counts_to_string(&self) -> String {
        use core::fmt::Write;

        let mut entries: Vec<_> = self
            .voxels
            .iter()
            .map(|(coords, ids)| ((coords.x, coords.y, coords.z), ids.len()))
            .collect();
        entries.sort_unstable();

        let mut result = String::new();

        for ((x, y, z), count) in entries {
            let _ = writeln!(result, "({}, {}, {}): {}", x, y, z, count);
        }

        result
    }
}
