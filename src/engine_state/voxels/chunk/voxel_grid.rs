//! # Voxel Grid Module
//!
//! Dense, fixed-size storage for the blocks of a chunk.
//!
//! ## Layout
//!
//! Blocks are stored in a flat vector indexed by `(x, z, y)`, with `y` varying
//! fastest. Every terrain column is therefore one contiguous slice, which is what
//! the terrain generator writes into.
//!
//! ```text
//! index = (x * LENGTH + z) * HEIGHT + y
//! ```
//!
//! ### Performance Characteristics
//! - **Lookup / update**: O(1)
//! - **Memory Usage**: one byte per cell

use cgmath::Point3;

use crate::engine_state::voxels::block::{block_type::BlockType, Block};
use crate::engine_state::voxels::error::GridError;

/// A `LENGTH` x `HEIGHT` x `LENGTH` block of voxels.
///
/// Width and depth share `LENGTH`; the vertical extent is `HEIGHT`. Both are fixed
/// at compile time, and the storage is allocated once and never resized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoxelGrid<const LENGTH: usize, const HEIGHT: usize> {
    blocks: Vec<Block>,
}

impl<const LENGTH: usize, const HEIGHT: usize> VoxelGrid<LENGTH, HEIGHT> {
    /// The total number of cells in the grid.
    pub const SIZE: usize = LENGTH * LENGTH * HEIGHT;

    /// Creates a grid filled with air.
    pub fn new() -> Self {
        VoxelGrid {
            blocks: vec![Block::AIR; Self::SIZE],
        }
    }

    /// Whether `(x, y, z)` addresses a stored cell.
    pub fn contains(x: i32, y: i32, z: i32) -> bool {
        (0..LENGTH as i32).contains(&x)
            && (0..HEIGHT as i32).contains(&y)
            && (0..LENGTH as i32).contains(&z)
    }

    fn index(x: i32, y: i32, z: i32) -> Result<usize, GridError> {
        if !Self::contains(x, y, z) {
            return Err(GridError::OutOfRange { x, y, z });
        }
        Ok((x as usize * LENGTH + z as usize) * HEIGHT + y as usize)
    }

    /// Gets the block at `(x, y, z)`.
    ///
    /// # Errors
    /// `GridError::OutOfRange` if the coordinate is outside the grid.
    pub fn get(&self, x: i32, y: i32, z: i32) -> Result<Block, GridError> {
        Ok(self.blocks[Self::index(x, y, z)?])
    }

    /// Overwrites the type of the block at `(x, y, z)`.
    ///
    /// # Errors
    /// `GridError::OutOfRange` if the coordinate is outside the grid.
    pub fn set(&mut self, x: i32, y: i32, z: i32, block_type: BlockType) -> Result<(), GridError> {
        let index = Self::index(x, y, z)?;
        self.blocks[index] = Block::new(block_type);
        Ok(())
    }

    /// Boundary-safe read: anything outside the grid is air.
    pub fn get_or_air(&self, x: i32, y: i32, z: i32) -> BlockType {
        match Self::index(x, y, z) {
            Ok(index) => self.blocks[index].block_type(),
            Err(_) => BlockType::Air,
        }
    }

    /// Sets every cell to `block_type`.
    pub fn fill(&mut self, block_type: BlockType) {
        self.blocks.fill(Block::new(block_type));
    }

    /// Iterates the vertical columns mutably as `(x, z, column)`, where
    /// `column[y]` is the block at height `y`.
    pub fn columns_mut(&mut self) -> impl Iterator<Item = (i32, i32, &mut [Block])> + '_ {
        self.blocks
            .chunks_exact_mut(HEIGHT)
            .enumerate()
            .map(|(i, column)| ((i / LENGTH) as i32, (i % LENGTH) as i32, column))
    }

    /// Iterates every cell as `(position, block)` in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (Point3<i32>, Block)> + '_ {
        self.blocks.iter().enumerate().map(|(i, block)| {
            let y = i % HEIGHT;
            let column = i / HEIGHT;
            (
                Point3::new((column / LENGTH) as i32, y as i32, (column % LENGTH) as i32),
                *block,
            )
        })
    }

    /// The raw cell storage, in `(x, z, y)` order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

impl<const LENGTH: usize, const HEIGHT: usize> Default for VoxelGrid<LENGTH, HEIGHT> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type ToyGrid = VoxelGrid<4, 8>;

    #[test]
    fn every_in_range_cell_is_addressable() {
        let grid = ToyGrid::new();
        for x in 0..4 {
            for z in 0..4 {
                for y in 0..8 {
                    assert_eq!(grid.get(x, y, z), Ok(Block::AIR));
                }
            }
        }
    }

    #[test]
    fn out_of_range_access_fails() {
        let mut grid = ToyGrid::new();
        for (x, y, z) in [(-1, 0, 0), (4, 0, 0), (0, -1, 0), (0, 8, 0), (0, 0, -1), (0, 0, 4)] {
            assert_eq!(grid.get(x, y, z), Err(GridError::OutOfRange { x, y, z }));
            assert_eq!(
                grid.set(x, y, z, BlockType::Stone),
                Err(GridError::OutOfRange { x, y, z })
            );
            assert_eq!(grid.get_or_air(x, y, z), BlockType::Air);
        }
    }

    #[test]
    fn set_touches_a_single_cell() {
        let mut grid = ToyGrid::new();
        grid.set(1, 5, 2, BlockType::Dirt).unwrap();

        for (position, block) in grid.iter() {
            let expected = if position == Point3::new(1, 5, 2) {
                BlockType::Dirt
            } else {
                BlockType::Air
            };
            assert_eq!(block.block_type(), expected);
        }
    }

    #[test]
    fn columns_are_contiguous_in_y() {
        let mut grid = ToyGrid::new();
        for (x, z, column) in grid.columns_mut() {
            if (x, z) == (3, 1) {
                column[6] = Block::new(BlockType::Stone);
            }
        }
        assert_eq!(grid.get_or_air(3, 6, 1), BlockType::Stone);
        assert_eq!(grid.blocks().iter().filter(|b| b.is_solid()).count(), 1);
    }

    #[test]
    fn fill_overwrites_everything() {
        let mut grid = ToyGrid::new();
        grid.fill(BlockType::Stone);
        assert!(grid.blocks().iter().all(|b| b.block_type() == BlockType::Stone));
        grid.fill(BlockType::Air);
        assert_eq!(grid, ToyGrid::new());
    }
}
