//! # Chunk Iteration Module
//!
//! This module provides the renderer's view of a chunk: an iterator over every
//! block that actually needs drawing.
//!
//! ## Culling
//!
//! The `VisibleBlockIterator` skips two kinds of cells:
//! 1. Air, which is never drawn
//! 2. Solid blocks buried on all six sides, which can never be seen
//!
//! Blocks come out in render order: x, then z, then y, which is also the grid's
//! storage order.

use cgmath::Point3;

use crate::engine_state::voxels::block::block_type::BlockType;

use super::visibility::is_block_adjacent_to_air;
use super::Chunk;

/// An iterator over all drawable blocks in a chunk.
///
/// Holds a shared borrow of the chunk, so the chunk cannot be mutated while a
/// frame is being built from it.
pub struct VisibleBlockIterator<'a, const LENGTH: usize, const HEIGHT: usize> {
    /// Reference to the chunk being iterated over
    chunk_ref: &'a Chunk<LENGTH, HEIGHT>,
    /// Next storage index to examine
    current_offset: usize,
}

impl<'a, const LENGTH: usize, const HEIGHT: usize> VisibleBlockIterator<'a, LENGTH, HEIGHT> {
    /// Creates a new iterator positioned before the first cell of `chunk_ref`.
    pub fn new(chunk_ref: &'a Chunk<LENGTH, HEIGHT>) -> Self {
        VisibleBlockIterator {
            chunk_ref,
            current_offset: 0,
        }
    }

    fn position_of(offset: usize) -> Point3<i32> {
        let column = offset / HEIGHT;
        Point3::new(
            (column / LENGTH) as i32,
            (offset % HEIGHT) as i32,
            (column % LENGTH) as i32,
        )
    }
}

impl<const LENGTH: usize, const HEIGHT: usize> Iterator for VisibleBlockIterator<'_, LENGTH, HEIGHT> {
    type Item = (Point3<i32>, BlockType);

    fn next(&mut self) -> Option<Self::Item> {
        let blocks = self.chunk_ref.grid().blocks();

        while self.current_offset < blocks.len() {
            let offset = self.current_offset;
            self.current_offset += 1;

            let block_type = blocks[offset].block_type();
            if !block_type.is_solid() {
                continue;
            }

            let position = Self::position_of(offset);
            if is_block_adjacent_to_air(self.chunk_ref.grid(), position.x, position.y, position.z) {
                return Some((position, block_type));
            }
        }

        None
    }
}
