//! Definition of the triangle shape.

use crate::math::{Point, Real, Vector};
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

/// A triangle shape with an identifier.
///
/// Two triangles are considered equal (and are ordered) according to their
/// [`Triangle::id`] only, regardless of their geometry: the id is what the
/// spatial partitioning structures store and report.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Triangle {
    /// The identifier of this triangle.
    pub id: u32,
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl Triangle {
    /// Creates a triangle from its id and three points.
    #[inline]
    pub fn new(id: u32, a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { id, a, b, c }
    }

    /// Creates a triangle from its id and the flat coordinates `[ax, ay, az, bx, …, cz]`
    /// of its three vertices.
    #[inline]
    pub fn from_coords(id: u32, coords: &[Real; 9]) -> Triangle {
        Triangle::new(
            id,
            Point::new(coords[0], coords[1], coords[2]),
            Point::new(coords[3], coords[4], coords[5]),
            Point::new(coords[6], coords[7], coords[8]),
        )
    }

    /// The flat coordinates `[ax, ay, az, bx, …, cz]` of this triangle's vertices.
    #[inline]
    pub fn coords(&self) -> [Real; 9] {
        [
            self.a.x, self.a.y, self.a.z, self.b.x, self.b.y, self.b.z, self.c.x, self.c.y,
            self.c.z,
        ]
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// The three edges scaled directions of this triangle: [B - A, C - B, A - C].
    #[inline]
    pub fn edges_scaled_directions(&self) -> [Vector<Real>; 3] {
        [self.b - self.a, self.c - self.b, self.a - self.c]
    }

    /// A vector normal of this triangle.
    ///
    /// The vector points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product). It is zero if the triangle is degenerate.
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The squared lengths of the edges [AB, BC, CA].
    #[inline]
    pub fn squared_side_lengths(&self) -> [Real; 3] {
        self.edges_scaled_directions().map(|e| e.norm_squared())
    }

    /// The area of this triangle.
    ///
    /// This uses Heron's formula, evaluated in double precision. The radicand is clamped to zero
    /// so degenerate (collinear) triangles yield `0.0` instead of `NaN`.
    pub fn area(&self) -> Real {
        let [ab, bc, ca] = self
            .edges_scaled_directions()
            .map(|e| e.cast::<f64>().norm());
        let s = (ab + bc + ca) * 0.5;
        let radicand = s * (s - ab) * (s - bc) * (s - ca);
        na::convert::<f64, Real>(radicand.max(0.0).sqrt())
    }

    /// The length of the longest edge of this triangle.
    pub fn largest_side(&self) -> Real {
        let [ab, bc, ca] = self.squared_side_lengths();
        ab.max(bc).max(ca).sqrt()
    }

    /// The ratio `shortest² / longest²` between the squared lengths of the shortest and
    /// longest edges of this triangle.
    ///
    /// This is a value in `(0, 1]` for non-degenerate triangles, `1` meaning equilateral. Note
    /// that it is a ratio of *squared* lengths. A triangle with all its vertices coincident
    /// reports `1`.
    pub fn side_ratio(&self) -> Real {
        let order = self.edges_by_decreasing_length();
        let sq = self.squared_side_lengths();
        let longest = sq[order[0]];

        if longest == 0.0 {
            1.0
        } else {
            sq[order[2]] / longest
        }
    }

    /// The edge indices (0 for AB, 1 for BC, 2 for CA) sorted by decreasing length.
    ///
    /// Edges with equal lengths stay ordered by index.
    pub fn edges_by_decreasing_length(&self) -> [usize; 3] {
        let sq = self.squared_side_lengths();
        let mut order = [0, 1, 2];
        order.sort_by(|i, j| sq[*j].partial_cmp(&sq[*i]).unwrap_or(Ordering::Equal));
        order
    }

    /// Splits this triangle into three triangles covering exactly the same area.
    ///
    /// The midpoints of the two longest edges are connected to each other and the midpoint of
    /// the longest edge is connected to the opposite vertex. The first resulting triangle (the
    /// one at the apex shared by the two longest edges) keeps `self.id`. The two others are
    /// given the ids `next_id` and `next_id + 1`, so the caller must advance its own id counter
    /// by 2. All three keep the orientation of `self`.
    ///
    /// `next_id` must be smaller than `u32::MAX`.
    pub fn split(&self, next_id: u32) -> [Triangle; 3] {
        let order = self.edges_by_decreasing_length();
        let shortest = order[2];
        // The apex is the only vertex that doesn't belong to the shortest edge.
        let ip = (shortest + 2) % 3;
        let iq = (ip + 1) % 3;
        let ir = (ip + 2) % 3;

        let pts = self.vertices();
        let (p, q, r) = (pts[ip], pts[iq], pts[ir]);
        let mid_pq = na::center(&p, &q);
        let mid_rp = na::center(&r, &p);

        let apex = Triangle::new(self.id, p, mid_pq, mid_rp);

        // Edge `ip` is PQ, edge `ir` is RP.
        if order[0] == ip {
            [
                apex,
                Triangle::new(next_id, mid_pq, q, r),
                Triangle::new(next_id + 1, mid_pq, r, mid_rp),
            ]
        } else {
            [
                apex,
                Triangle::new(next_id, mid_pq, q, mid_rp),
                Triangle::new(next_id + 1, q, r, mid_rp),
            ]
        }
    }
}

impl PartialEq for Triangle {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Triangle {}

impl Hash for Triangle {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl PartialOrd for Triangle {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Triangle {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}
