use trigrid3d::bounding_volume::Aabb;
use trigrid3d::math::{Point, Real, Vector};
use trigrid3d::query::intersection_test_aabb_triangle;
use trigrid3d::shape::Triangle;

fn random_point(rng: &mut oorandom::Rand32, extent: Real) -> Point<Real> {
    Point::new(
        (rng.rand_float() as Real * 2.0 - 1.0) * extent,
        (rng.rand_float() as Real * 2.0 - 1.0) * extent,
        (rng.rand_float() as Real * 2.0 - 1.0) * extent,
    )
}

fn sample_triangle(tri: &Triangle, rng: &mut oorandom::Rand32) -> Point<Real> {
    let mut u = rng.rand_float() as Real;
    let mut v = rng.rand_float() as Real;

    if u + v > 1.0 {
        u = 1.0 - u;
        v = 1.0 - v;
    }

    tri.a + (tri.b - tri.a) * u + (tri.c - tri.a) * v
}

#[test]
fn sat_agrees_with_sampled_points_and_aabbs() {
    let mut rng = oorandom::Rand32::new(1234);
    let cube = Aabb::from_half_extents(Point::origin(), Vector::repeat(0.5));

    for id in 0..2000 {
        let tri = Triangle::new(
            id,
            random_point(&mut rng, 1.5),
            random_point(&mut rng, 1.5),
            random_point(&mut rng, 1.5),
        );
        let intersects = intersection_test_aabb_triangle(&cube, &tri);

        // A point of the triangle strictly inside of the cube proves the intersection.
        for _ in 0..20 {
            let pt = sample_triangle(&tri, &mut rng);
            if pt.coords.amax() < 0.499 {
                assert!(intersects, "{:?} contains {:?} but was missed", tri, pt);
            }
        }

        // Disjoint AABBs prove the separation.
        if !tri.local_aabb().intersects(&cube) {
            assert!(!intersects);
        }
    }
}

#[test]
fn triangle_inside_an_inflated_voxel_intersects() {
    let voxel = Aabb::from_half_extents(Point::new(0.5, 0.5, 0.5), Vector::repeat(0.51));
    let tri = Triangle::new(
        0,
        Point::new(0.1, 0.1, 0.1),
        Point::new(0.9, 0.1, 0.1),
        Point::new(0.1, 0.9, 0.1),
    );
    assert!(intersection_test_aabb_triangle(&voxel, &tri));
}

#[test]
fn triangle_through_a_cube_face_intersects() {
    let voxel = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0));
    // Lies in the plane x = 1, covering part of the face of the voxel.
    let tri = Triangle::new(
        0,
        Point::new(1.0, 0.5, 0.5),
        Point::new(1.0, 3.0, 0.5),
        Point::new(1.0, 0.5, 3.0),
    );
    assert!(intersection_test_aabb_triangle(&voxel, &tri));

    // Only touches the voxel at one of its vertices.
    let tri = Triangle::new(
        1,
        Point::new(1.0, 1.0, 1.0),
        Point::new(2.0, 1.0, 1.0),
        Point::new(1.0, 2.0, 1.0),
    );
    assert!(intersection_test_aabb_triangle(&voxel, &tri));

    let shifted = Triangle::new(
        2,
        Point::new(1.01, 1.0, 1.0),
        Point::new(2.0, 1.0, 1.0),
        Point::new(1.01, 2.0, 1.0),
    );
    assert!(!intersection_test_aabb_triangle(&voxel, &shifted));
}

#[test]
fn degenerate_triangles_are_handled() {
    let voxel = Aabb::from_half_extents(Point::origin(), Vector::repeat(0.5));
    let through = Triangle::new(
        0,
        Point::new(-1.0, -1.0, -1.0),
        Point::new(1.0, 1.0, 1.0),
        Point::new(0.0, 0.0, 0.0),
    );
    let beside = Triangle::new(
        1,
        Point::new(-1.0, 0.8, 0.0),
        Point::new(1.0, 0.8, 0.0),
        Point::new(0.0, 0.8, 0.0),
    );

    assert!(intersection_test_aabb_triangle(&voxel, &through));
    assert!(!intersection_test_aabb_triangle(&voxel, &beside));
}
