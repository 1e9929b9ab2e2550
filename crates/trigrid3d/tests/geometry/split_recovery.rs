use trigrid3d::bounding_volume::Aabb;
use trigrid3d::math::{Point, Vector};
use trigrid3d::partitioning::{
    FillMode, GridTrianglePartition, RasterizationParams, Region, VoxelCoords, TRIANGLE_RATIO_MAX,
};
use trigrid3d::query::intersection_test_aabb_triangle;
use trigrid3d::shape::Triangle;

// Voxels are shrunk so much during the overlap test that it never succeeds for the triangles
// below, forcing the recovery path.
fn missing_grid(num_triangle_hint: u32) -> GridTrianglePartition {
    let params = RasterizationParams {
        cube_inflation: 0.1,
        ..RasterizationParams::default()
    };
    GridTrianglePartition::with_params(1.0, 4, num_triangle_hint, params).unwrap()
}

#[test]
fn small_missed_triangle_fills_its_vertex_voxels() {
    let mut grid = missing_grid(8);
    let tri = Triangle::new(
        0,
        Point::new(0.9, 0.9, 0.9),
        Point::new(1.1, 0.9, 1.1),
        Point::new(0.9, 1.1, 1.1),
    );
    grid.insert(&tri, FillMode::Exact);

    let stats = grid.stats();
    assert_eq!(stats.num_approximations, 1);
    assert_eq!(stats.num_splits, 0);
    assert_eq!(grid.num_occupied_voxels(), 3);

    for coords in [
        VoxelCoords::new(2, 2, 2),
        VoxelCoords::new(3, 2, 3),
        VoxelCoords::new(2, 3, 3),
    ] {
        assert_eq!(grid.voxel(&coords), Some(&[0][..]));
    }
}

#[test]
fn large_missed_triangle_is_split() {
    let mut grid = missing_grid(8);
    let tri = Triangle::new(
        0,
        Point::new(-1.9, 0.2, 0.2),
        Point::new(1.9, 0.2, 0.2),
        Point::new(1.9, 0.25, 0.2),
    );
    grid.insert(&tri, FillMode::Exact);

    let stats = grid.stats();
    assert!(stats.num_splits > 0);
    assert_eq!(grid.next_id(), 8 + 2 * stats.num_splits as u32);

    let ids = grid.objects(&Region::All).unwrap();
    assert!(ids.contains(&0));

    for id in ids {
        let part = grid.triangle(id).unwrap();
        assert!(part.area() <= tri.area() * 1.0001);
    }
}

#[test]
fn thin_triangles_are_presplit_without_losing_voxels() {
    let params = RasterizationParams {
        presplit_thin_triangles: true,
        ..RasterizationParams::default()
    };
    let mut grid = GridTrianglePartition::with_params(1.0, 4, 4, params).unwrap();
    let tri = Triangle::new(
        0,
        Point::new(-1.5, 0.1, 0.1),
        Point::new(1.5, 0.1, 0.1),
        Point::new(1.5, 0.3, 0.1),
    );
    assert!(tri.side_ratio() * TRIANGLE_RATIO_MAX < 1.0);

    grid.insert(&tri, FillMode::Exact);
    assert!(grid.stats().num_splits > 0);
    assert_eq!(grid.stats().num_approximations, 0);

    for coords in Region::All.grid_box(4).iter() {
        let cube = Aabb::from_half_extents(
            grid.voxel_center_in_world_coords(&coords),
            Vector::repeat(0.49),
        );

        if intersection_test_aabb_triangle(&cube, &tri) {
            assert!(grid.voxel(&coords).is_some(), "voxel {:?} lost", coords);
        }
    }
}

#[test]
fn thin_triangles_are_not_presplit_by_default() {
    let mut grid = GridTrianglePartition::new(1.0, 4, 4).unwrap();
    let tri = Triangle::new(
        0,
        Point::new(-1.5, 0.1, 0.1),
        Point::new(1.5, 0.1, 0.1),
        Point::new(1.5, 0.3, 0.1),
    );
    grid.insert(&tri, FillMode::Exact);

    assert_eq!(grid.stats().num_splits, 0);
    assert_eq!(grid.next_id(), 4);
    assert_eq!(grid.objects(&Region::All), Some(vec![0]));
}

#[test]
fn exhausted_ids_fall_back_to_vertex_voxels() {
    let mut grid = missing_grid(8);
    grid.set_next_id(u32::MAX - 1);

    let tri = Triangle::new(
        0,
        Point::new(-1.9, 0.2, 0.2),
        Point::new(1.9, 0.2, 0.2),
        Point::new(1.9, 0.25, 0.2),
    );
    grid.insert(&tri, FillMode::Exact);

    let stats = grid.stats();
    assert_eq!(stats.num_splits, 0);
    assert_eq!(stats.num_approximations, 1);
    assert_eq!(grid.next_id(), u32::MAX - 1);
    assert_eq!(grid.objects(&Region::All), Some(vec![0]));
    assert_eq!(grid.voxel(&VoxelCoords::new(0, 2, 2)), Some(&[0][..]));
    assert_eq!(grid.voxel(&VoxelCoords::new(3, 2, 2)), Some(&[0, 0][..]));
}

#[test]
fn exhausted_ids_skip_the_thin_triangle_presplit() {
    let params = RasterizationParams {
        presplit_thin_triangles: true,
        ..RasterizationParams::default()
    };
    let mut grid = GridTrianglePartition::with_params(1.0, 4, 4, params).unwrap();
    grid.set_next_id(u32::MAX);

    let tri = Triangle::new(
        0,
        Point::new(-1.5, 0.1, 0.1),
        Point::new(1.5, 0.1, 0.1),
        Point::new(1.5, 0.3, 0.1),
    );
    grid.insert(&tri, FillMode::Exact);

    assert_eq!(grid.stats().num_splits, 0);
    assert_eq!(grid.stats().num_approximations, 0);
    assert_eq!(grid.objects(&Region::All), Some(vec![0]));
    assert_eq!(grid.num_occupied_voxels(), 4);
}
