//! Incremental grid traversal along a ray.

use cgmath::{Point3, Vector3};

use super::{Aabb, Ray};
use crate::engine_state::voxels::block::block_side::BlockSide;

/// Relative slack when deciding whether the entry point lies on a grid plane.
const PLANE_TOLERANCE: f32 = 1e-6;

/// One cell visited by a `VoxelWalk`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkStep {
    /// The cell being visited
    pub cell: Point3<i32>,
    /// The face of `cell` the ray came in through, `None` if the ray started inside it
    pub entered_through: Option<BlockSide>,
    /// Distance along the ray at which the cell was entered
    pub distance: f32,
}

/// Iterator over the cells of a `dims`-sized grid crossed by a ray, nearest first.
///
/// Each step costs O(1). The walk visits at most `dims.x + dims.y + dims.z` cells,
/// which bounds any path through the grid.
#[derive(Debug, Clone)]
pub struct VoxelWalk {
    cell: [i32; 3],
    step: [i32; 3],
    /// Distance along the ray to the next grid plane on each axis.
    t_max: [f32; 3],
    /// Distance along the ray between successive grid planes on each axis.
    t_delta: [f32; 3],
    dims: [i32; 3],
    entered_through: Option<BlockSide>,
    distance: f32,
    remaining: usize,
}

impl VoxelWalk {
    /// Starts a walk of `ray` through a grid spanning `[0, dims]` on each axis.
    ///
    /// # Returns
    /// `None` if the ray misses the grid entirely.
    pub fn new(ray: &Ray, dims: Vector3<i32>) -> Option<Self> {
        let dims = [dims.x, dims.y, dims.z];
        if dims.iter().any(|&d| d <= 0) {
            return None;
        }

        let bounds = Aabb::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(dims[0] as f32, dims[1] as f32, dims[2] as f32),
        );
        let slab = bounds.intersect(ray)?;
        let mut entry = ray.at(slab.t_enter);

        let mut cell = [0; 3];
        let mut step = [0; 3];
        let mut t_max = [f32::INFINITY; 3];
        let mut t_delta = [f32::INFINITY; 3];

        for axis in 0..3 {
            let direction = ray.direction[axis];
            step[axis] = if direction > 0.0 {
                1
            } else if direction < 0.0 {
                -1
            } else {
                0
            };

            // Snap the entry coordinate onto the face it crossed.
            if slab.entry_axis == Some(axis) {
                entry[axis] = if step[axis] > 0 {
                    bounds.min[axis]
                } else {
                    bounds.max[axis]
                };
            }

            // A point on the max face belongs to the last cell.
            cell[axis] = (entry[axis].floor() as i32).clamp(0, dims[axis] - 1);

            if step[axis] != 0 {
                let next_plane = if step[axis] > 0 {
                    (cell[axis] + 1) as f32
                } else {
                    cell[axis] as f32
                };
                t_max[axis] = (next_plane - ray.origin[axis]) / direction;
                t_delta[axis] = 1.0 / direction.abs();
            }
        }

        // Entering along a grid plane only touches the cell behind it at an edge;
        // start in the cell the ray moves into instead.
        if let Some(entry_axis) = slab.entry_axis {
            let tolerance = PLANE_TOLERANCE * slab.t_enter.max(1.0);
            for axis in (0..3).filter(|&axis| axis != entry_axis) {
                if step[axis] != 0 && t_max[axis] - slab.t_enter <= tolerance {
                    cell[axis] += step[axis];
                    t_max[axis] += t_delta[axis];
                }
            }
        }

        let entered_through = slab
            .entry_axis
            .map(|axis| BlockSide::entered_through(axis, step[axis]));

        Some(VoxelWalk {
            cell,
            step,
            t_max,
            t_delta,
            dims,
            entered_through,
            distance: slab.t_enter,
            remaining: dims.iter().map(|&d| d as usize).sum(),
        })
    }

    fn in_bounds(&self) -> bool {
        (0..3).all(|axis| (0..self.dims[axis]).contains(&self.cell[axis]))
    }

    /// The axis whose next plane crossing is nearest. Ties go to x, then y, then z.
    fn next_axis(&self) -> usize {
        if self.t_max[0] <= self.t_max[1] && self.t_max[0] <= self.t_max[2] {
            0
        } else if self.t_max[1] <= self.t_max[2] {
            1
        } else {
            2
        }
    }
}

impl Iterator for VoxelWalk {
    type Item = WalkStep;

    fn next(&mut self) -> Option<WalkStep> {
        if self.remaining == 0 || !self.in_bounds() {
            return None;
        }
        self.remaining -= 1;

        let current = WalkStep {
            cell: Point3::new(self.cell[0], self.cell[1], self.cell[2]),
            entered_through: self.entered_through,
            distance: self.distance,
        };

        let axis = self.next_axis();
        if self.t_max[axis].is_finite() {
            self.distance = self.t_max[axis];
            self.cell[axis] += self.step[axis];
            self.t_max[axis] += self.t_delta[axis];
            self.entered_through = Some(BlockSide::entered_through(axis, self.step[axis]));
        } else {
            self.remaining = 0;
        }

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walk(origin: [f32; 3], direction: [f32; 3]) -> Vec<Point3<i32>> {
        let ray = Ray::new(origin.into(), direction.into()).unwrap();
        VoxelWalk::new(&ray, Vector3::new(4, 8, 4))
            .map(|steps| steps.map(|step| step.cell).collect())
            .unwrap_or_default()
    }

    #[test]
    fn straight_down_visits_the_whole_column() {
        let cells = walk([2.0, 10.0, 2.0], [0.0, -1.0, 0.0]);
        let expected: Vec<_> = (0..8).rev().map(|y| Point3::new(2, y, 2)).collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn first_step_reports_the_entry_face() {
        let ray = Ray::new(Point3::new(2.5, 10.0, 2.5), Vector3::new(0.0, -1.0, 0.0)).unwrap();
        let mut walk = VoxelWalk::new(&ray, Vector3::new(4, 8, 4)).unwrap();

        let first = walk.next().unwrap();
        assert_eq!(first.cell, Point3::new(2, 7, 2));
        assert_eq!(first.entered_through, Some(BlockSide::TOP));
        assert_eq!(first.distance, 2.0);

        let second = walk.next().unwrap();
        assert_eq!(second.cell, Point3::new(2, 6, 2));
        assert_eq!(second.entered_through, Some(BlockSide::TOP));
    }

    #[test]
    fn consecutive_cells_share_a_face() {
        let cells = walk([-1.3, 9.1, 0.4], [0.7, -0.9, 0.45]);
        assert!(!cells.is_empty());
        for pair in cells.windows(2) {
            let d = pair[1] - pair[0];
            assert_eq!(d.x.abs() + d.y.abs() + d.z.abs(), 1, "{pair:?}");
        }
    }

    #[test]
    fn corner_crossings_prefer_x_then_y() {
        // Crosses x = 1 and y = 1 at the same time.
        let cells = walk([0.5, 0.5, 0.5], [1.0, 1.0, 0.0]);
        assert_eq!(cells[0], Point3::new(0, 0, 0));
        assert_eq!(cells[1], Point3::new(1, 0, 0));
        assert_eq!(cells[2], Point3::new(1, 1, 0));
    }

    #[test]
    fn entering_along_a_grid_plane_skips_the_edge_cell() {
        // Enters the top face exactly on the x = 2 plane, heading towards -x.
        let cells = walk([3.0, 9.0, 1.5], [-1.0, -1.0, 0.0]);
        assert_eq!(cells[0], Point3::new(1, 7, 1));
        assert!(!cells.contains(&Point3::new(2, 7, 1)));

        // The mirror image heading towards +x.
        let cells = walk([1.0, 9.0, 1.5], [1.0, -1.0, 0.0]);
        assert_eq!(cells[0], Point3::new(2, 7, 1));
        assert!(!cells.contains(&Point3::new(1, 7, 1)));
    }

    #[test]
    fn grazing_the_outside_of_the_grid_visits_nothing() {
        // Slides down the x = 0 face while moving away from the grid.
        assert!(walk([1.0, 9.0, 1.5], [-1.0, -1.0, 0.0]).is_empty());
        // Slides down the x = 4 face while moving away from the grid.
        assert!(walk([3.0, 9.0, 1.5], [1.0, -1.0, 0.0]).is_empty());
    }

    #[test]
    fn origin_inside_starts_at_its_own_cell() {
        let ray = Ray::new(Point3::new(1.5, 3.5, 1.5), Vector3::new(1.0, 0.0, 0.0)).unwrap();
        let mut walk = VoxelWalk::new(&ray, Vector3::new(4, 8, 4)).unwrap();
        let first = walk.next().unwrap();
        assert_eq!(first.cell, Point3::new(1, 3, 1));
        assert_eq!(first.entered_through, None);
        assert_eq!(walk.map(|s| s.cell.x).collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn missing_rays_yield_nothing() {
        assert!(walk([10.0, 10.0, 10.0], [1.0, 0.0, 0.0]).is_empty());
        assert!(walk([2.0, 10.0, 2.0], [0.0, 1.0, 0.0]).is_empty());
    }

    #[test]
    fn walk_length_is_bounded_by_the_grid() {
        let cells = walk([0.01, 7.99, 0.02], [1.0, -1.9, 1.1]);
        assert!(cells.len() <= 4 + 8 + 4);
    }
}
