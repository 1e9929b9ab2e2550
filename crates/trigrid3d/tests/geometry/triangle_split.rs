use trigrid3d::math::{Point, Real};
use trigrid3d::shape::Triangle;

fn random_point(rng: &mut oorandom::Rand32) -> Point<Real> {
    Point::new(
        rng.rand_float() as Real * 4.0 - 2.0,
        rng.rand_float() as Real * 4.0 - 2.0,
        rng.rand_float() as Real * 4.0 - 2.0,
    )
}

#[test]
fn split_partitions_the_area_of_random_triangles() {
    let mut rng = oorandom::Rand32::new(7);

    for id in 0..500 {
        let tri = Triangle::new(
            id,
            random_point(&mut rng),
            random_point(&mut rng),
            random_point(&mut rng),
        );
        let area = tri.area();

        if area < 5.0e-2 {
            continue;
        }

        let parts = tri.split(1000 + 2 * id);
        let ids: Vec<_> = parts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![id, 1000 + 2 * id, 1001 + 2 * id]);

        let total: Real = parts.iter().map(|p| p.area()).sum();
        assert!(
            (total - area).abs() <= area * 1.0e-3,
            "split areas sum to {} instead of {}",
            total,
            area
        );

        // Every sub-triangle vertex is on the boundary or inside the original triangle's AABB.
        let aabb = tri.local_aabb();
        for part in &parts {
            for pt in part.vertices() {
                assert!(aabb.contains_local_point(&pt));
            }
        }
    }
}

#[test]
fn split_halves_the_two_longest_edges() {
    // Longest edge AB (length 4), then CA (~3.2), then BC (2.5).
    let tri = Triangle::new(
        0,
        Point::new(0.0, 0.0, 0.0),
        Point::new(4.0, 0.0, 0.0),
        Point::new(2.5, 2.0, 0.0),
    );
    let parts = tri.split(10);

    assert_eq!(parts[0].vertices()[0], tri.a);
    assert_eq!(parts[0].vertices()[1], Point::new(2.0, 0.0, 0.0));
    assert_eq!(parts[0].vertices()[2], Point::new(1.25, 1.0, 0.0));
    assert!(parts.iter().all(|p| p.largest_side() < tri.largest_side()));
}
