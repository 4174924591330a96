//! Ray and point queries against a voxel grid.

use cgmath::{Point3, Vector3};

use super::{voxel_walk::VoxelWalk, Ray};
use crate::engine_state::voxels::block::{block_side::BlockSide, block_type::BlockType};
use crate::engine_state::voxels::chunk::voxel_grid::VoxelGrid;

/// The first solid block found along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Grid coordinate of the block that was hit
    pub position: Point3<i32>,
    /// Material of the block that was hit
    pub block_type: BlockType,
    /// Face the ray entered through, `None` if the ray started inside the block
    pub face: Option<BlockSide>,
    /// Distance from the ray origin to the entry point
    pub distance: f32,
}

/// The grid extents as a walk size, `(LENGTH, HEIGHT, LENGTH)`.
pub fn grid_dims<const LENGTH: usize, const HEIGHT: usize>() -> Vector3<i32> {
    Vector3::new(LENGTH as i32, HEIGHT as i32, LENGTH as i32)
}

/// Finds the first solid block along `ray`, without changing anything.
pub fn cast_ray<const LENGTH: usize, const HEIGHT: usize>(
    grid: &VoxelGrid<LENGTH, HEIGHT>,
    ray: &Ray,
) -> Option<RayHit> {
    VoxelWalk::new(ray, grid_dims::<LENGTH, HEIGHT>())?.find_map(|step| {
        let block_type = grid.get_or_air(step.cell.x, step.cell.y, step.cell.z);
        block_type.is_solid().then_some(RayHit {
            position: step.cell,
            block_type,
            face: step.entered_through,
            distance: step.distance,
        })
    })
}

/// The grid cell containing `position`, if it lies inside the grid.
///
/// Points exactly on the grid's max faces are outside, matching the half-open
/// cell convention.
pub fn pick_block<const LENGTH: usize, const HEIGHT: usize>(
    position: Point3<f32>,
) -> Option<Point3<i32>> {
    if !(position.x.is_finite() && position.y.is_finite() && position.z.is_finite()) {
        return None;
    }

    let cell = Point3::new(
        position.x.floor() as i32,
        position.y.floor() as i32,
        position.z.floor() as i32,
    );
    VoxelGrid::<LENGTH, HEIGHT>::contains(cell.x, cell.y, cell.z).then_some(cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    type ToyGrid = VoxelGrid<4, 8>;

    fn ray(origin: [f32; 3], direction: [f32; 3]) -> Ray {
        Ray::new(origin.into(), direction.into()).unwrap()
    }

    #[test]
    fn empty_grid_has_no_hits() {
        let grid = ToyGrid::new();
        assert_eq!(cast_ray(&grid, &ray([2.0, 10.0, 2.0], [0.0, -1.0, 0.0])), None);
    }

    #[test]
    fn hit_reports_block_face_and_distance() {
        let mut grid = ToyGrid::new();
        grid.set(2, 3, 2, BlockType::Dirt).unwrap();
        grid.set(2, 1, 2, BlockType::Stone).unwrap();

        let hit = cast_ray(&grid, &ray([2.5, 10.0, 2.5], [0.0, -1.0, 0.0])).unwrap();
        assert_eq!(hit.position, Point3::new(2, 3, 2));
        assert_eq!(hit.block_type, BlockType::Dirt);
        assert_eq!(hit.face, Some(BlockSide::TOP));
        assert_eq!(hit.distance, 6.0);
    }

    #[test]
    fn thin_corner_overlap_is_not_skipped() {
        let mut grid = ToyGrid::new();
        grid.set(1, 0, 0, BlockType::Stone).unwrap();

        // Grazes the corner of (1, 0, 0) on its way diagonally through (0, 0, 0).
        let hit = cast_ray(&grid, &ray([0.5, 0.5, 0.5], [1.0, 1.0, 0.0])).unwrap();
        assert_eq!(hit.position, Point3::new(1, 0, 0));
        assert_eq!(hit.face, Some(BlockSide::LEFT));
    }

    #[test]
    fn pick_resolves_the_containing_cell() {
        assert_eq!(pick_block::<4, 8>(Point3::new(1.2, 7.9, 3.0)), Some(Point3::new(1, 7, 3)));
        assert_eq!(pick_block::<4, 8>(Point3::new(0.0, 0.0, 0.0)), Some(Point3::new(0, 0, 0)));
        assert_eq!(pick_block::<4, 8>(Point3::new(4.0, 1.0, 1.0)), None);
        assert_eq!(pick_block::<4, 8>(Point3::new(-0.1, 1.0, 1.0)), None);
        assert_eq!(pick_block::<4, 8>(Point3::new(1.0, f32::NAN, 1.0)), None);
    }
}
