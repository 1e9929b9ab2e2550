mod aabb_triangle_intersection;
mod split_recovery;
mod triangle_split;
