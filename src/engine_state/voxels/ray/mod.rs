//! # Ray Module
//!
//! Ray casting against the voxel grid.
//!
//! ## Algorithm
//!
//! 1. The ray is clipped against the grid's bounding box with a slab test
//!    (`Aabb::intersect`). A miss ends the query.
//! 2. The walk starts in the cell containing the entry point, or the origin if the
//!    origin is already inside the box.
//! 3. `VoxelWalk` steps one cell at a time, always crossing the nearest grid plane
//!    next (ties go x, then y, then z), until it leaves the grid.
//! 4. The first solid cell visited is the hit.
//!
//! Stepping cell by cell means no block is ever skipped, however thin the ray's
//! overlap with it, and the work is bounded by the cells crossed rather than the
//! ray's length.
//!
//! Voxel `(x, y, z)` occupies `[x, x+1) x [y, y+1) x [z, z+1)`.

use cgmath::{InnerSpace, Point3, Vector3};

pub mod intersector;
pub mod voxel_walk;

/// Directions shorter than this are treated as degenerate.
const MIN_DIRECTION_LENGTH: f32 = 1e-6;

/// A half-line with a normalised direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Where the ray starts
    pub origin: Point3<f32>,
    /// Unit-length direction of travel
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Builds a ray, normalising `direction`.
    ///
    /// # Returns
    /// `None` if the direction is (nearly) zero-length or any component is not finite.
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Option<Self> {
        let finite = (0..3).all(|axis| origin[axis].is_finite() && direction[axis].is_finite());
        if !finite {
            return None;
        }

        // Scale down first so the magnitude of huge components cannot overflow.
        let largest = direction.x.abs().max(direction.y.abs()).max(direction.z.abs());
        if largest < MIN_DIRECTION_LENGTH {
            return None;
        }

        Some(Ray {
            origin,
            direction: (direction / largest).normalize(),
        })
    }

    /// The point at parametric distance `t` along the ray.
    pub fn at(&self, t: f32) -> Point3<f32> {
        self.origin + self.direction * t
    }
}

/// Where a ray crosses an `Aabb`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlabHit {
    /// Distance at which the ray enters the box, never negative
    pub t_enter: f32,
    /// Distance at which the ray leaves the box
    pub t_exit: f32,
    /// Axis of the face the ray entered through, `None` if the origin is inside
    pub entry_axis: Option<usize>,
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Point3<f32>,
    /// Maximum corner
    pub max: Point3<f32>,
}

impl Aabb {
    /// Creates a box from its two corners.
    pub fn new(min: Point3<f32>, max: Point3<f32>) -> Self {
        Aabb { min, max }
    }

    /// Whether `point` lies inside the box, faces included.
    pub fn contains(&self, point: Point3<f32>) -> bool {
        (0..3).all(|axis| self.min[axis] <= point[axis] && point[axis] <= self.max[axis])
    }

    /// Slab test of `ray` against the box.
    ///
    /// Only the part of the ray in front of its origin counts, so a box entirely
    /// behind the origin is a miss.
    pub fn intersect(&self, ray: &Ray) -> Option<SlabHit> {
        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;
        let mut entry_axis = None;

        for axis in 0..3 {
            let origin = ray.origin[axis];
            let direction = ray.direction[axis];

            if direction == 0.0 {
                // Parallel to this slab: either always inside it or never.
                if origin < self.min[axis] || origin > self.max[axis] {
                    return None;
                }
                continue;
            }

            let inverse = 1.0 / direction;
            let mut t_near = (self.min[axis] - origin) * inverse;
            let mut t_far = (self.max[axis] - origin) * inverse;
            if t_near > t_far {
                std::mem::swap(&mut t_near, &mut t_far);
            }

            if t_near > t_enter {
                t_enter = t_near;
                entry_axis = Some(axis);
            }
            t_exit = t_exit.min(t_far);

            if t_enter > t_exit {
                return None;
            }
        }

        if t_exit < 0.0 {
            return None;
        }

        if t_enter <= 0.0 {
            return Some(SlabHit {
                t_enter: 0.0,
                t_exit,
                entry_axis: None,
            });
        }

        Some(SlabHit {
            t_enter,
            t_exit,
            entry_axis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box() -> Aabb {
        Aabb::new(Point3::new(0.0, 0.0, 0.0), Point3::new(4.0, 8.0, 4.0))
    }

    #[test]
    fn degenerate_directions_are_rejected() {
        let origin = Point3::new(0.0, 0.0, 0.0);
        assert!(Ray::new(origin, Vector3::new(0.0, 0.0, 0.0)).is_none());
        assert!(Ray::new(origin, Vector3::new(f32::NAN, 1.0, 0.0)).is_none());
        assert!(Ray::new(origin, Vector3::new(f32::INFINITY, 0.0, 0.0)).is_none());
        assert!(Ray::new(Point3::new(f32::NAN, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0)).is_none());
    }

    #[test]
    fn huge_directions_keep_their_heading() {
        let origin = Point3::new(1.5, 1.5, 1.5);
        let ray = Ray::new(origin, Vector3::new(1e30, -1e30, 0.0)).unwrap();
        assert_relative_eq!(ray.direction.magnitude(), 1.0);
        assert_relative_eq!(ray.direction.x, std::f32::consts::FRAC_1_SQRT_2);
        assert_relative_eq!(ray.direction.y, -std::f32::consts::FRAC_1_SQRT_2);
        assert_eq!(ray.direction.z, 0.0);

        let ray = Ray::new(origin, Vector3::new(f32::MAX, f32::MAX, f32::MAX)).unwrap();
        assert_relative_eq!(ray.direction.magnitude(), 1.0);
    }

    #[test]
    fn directions_are_normalised() {
        let ray = Ray::new(Point3::new(1.0, 2.0, 3.0), Vector3::new(0.0, -5.0, 0.0)).unwrap();
        assert_relative_eq!(ray.direction.magnitude(), 1.0);
        assert_relative_eq!(ray.at(2.0).y, 0.0);
    }

    #[test]
    fn ray_from_above_enters_through_the_top() {
        let ray = Ray::new(Point3::new(2.0, 10.0, 2.0), Vector3::new(0.0, -1.0, 0.0)).unwrap();
        let hit = unit_box().intersect(&ray).unwrap();
        assert_relative_eq!(hit.t_enter, 2.0);
        assert_relative_eq!(hit.t_exit, 10.0);
        assert_eq!(hit.entry_axis, Some(1));
    }

    #[test]
    fn origin_inside_starts_at_zero() {
        let ray = Ray::new(Point3::new(1.5, 1.5, 1.5), Vector3::new(1.0, 0.0, 0.0)).unwrap();
        let hit = unit_box().intersect(&ray).unwrap();
        assert_eq!(hit.t_enter, 0.0);
        assert_eq!(hit.entry_axis, None);
        assert_relative_eq!(hit.t_exit, 2.5);
    }

    #[test]
    fn misses_and_boxes_behind_the_origin() {
        let pointing_away = Ray::new(Point3::new(2.0, 10.0, 2.0), Vector3::new(0.0, 1.0, 0.0)).unwrap();
        assert!(unit_box().intersect(&pointing_away).is_none());

        let beside = Ray::new(Point3::new(6.0, 10.0, 2.0), Vector3::new(0.0, -1.0, 0.0)).unwrap();
        assert!(unit_box().intersect(&beside).is_none());

        let skew = Ray::new(Point3::new(-1.0, 10.0, -1.0), Vector3::new(-1.0, -1.0, 0.0)).unwrap();
        assert!(unit_box().intersect(&skew).is_none());
    }

    #[test]
    fn contains_includes_faces() {
        assert!(unit_box().contains(Point3::new(0.0, 8.0, 4.0)));
        assert!(!unit_box().contains(Point3::new(-0.1, 1.0, 1.0)));
    }
}
