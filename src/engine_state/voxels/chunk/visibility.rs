//! # Visibility Module
//!
//! Air-adjacency culling. A block that is buried on all six sides can never be
//! seen, so the renderer skips it. Cells beyond the grid edge count as air since
//! neighbouring chunks are not modelled.

use crate::engine_state::voxels::block::block_side::BlockSide;

use super::voxel_grid::VoxelGrid;

/// Whether the block at `(x, y, z)` is solid and shares a face with air.
///
/// Out-of-range coordinates (for the queried cell or its neighbours) read as air,
/// so this never fails. Six bounded lookups.
pub fn is_block_adjacent_to_air<const LENGTH: usize, const HEIGHT: usize>(
    grid: &VoxelGrid<LENGTH, HEIGHT>,
    x: i32,
    y: i32,
    z: i32,
) -> bool {
    if !grid.get_or_air(x, y, z).is_solid() {
        return false;
    }

    BlockSide::all().iter().any(|side| {
        let offset = side.neighbour_offset();
        !grid
            .get_or_air(x + offset.x, y + offset.y, z + offset.z)
            .is_solid()
    })
}
