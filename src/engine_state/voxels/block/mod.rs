//! # Block Module
//!
//! This module provides the core block-related functionality for the chunk.
//! It includes block type definitions, block face handling, and the stored block cell.

use block_type::BlockType;

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block types in memory.
pub type BlockTypeSize = u8;

/// Represents a single voxel block in the chunk.
///
/// This is a lightweight structure that stores only the block's material.
/// Identity comes from the cell the block lives in.
///
/// # Memory Layout
/// The `#[repr(C)]` attribute ensures a consistent memory layout so a renderer can
/// upload the grid as raw bytes.
#[repr(C)]
#[derive(Copy, Clone, PartialEq, Eq, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct Block {
    /// The type of this block, encoded as a `BlockTypeSize` for compact storage.
    pub block_type: BlockTypeSize,
}

impl Block {
    /// An air block, used to clear cells.
    pub const AIR: Block = Block {
        block_type: BlockType::Air as BlockTypeSize,
    };

    /// Creates a new block of the specified type.
    pub fn new(block_type: BlockType) -> Self {
        Block {
            block_type: block_type as BlockTypeSize,
        }
    }

    /// Gets the rich type of this block.
    ///
    /// # Panics
    /// Panics if the stored byte is not a valid `BlockType`, which can only happen if
    /// the grid was written through a raw byte view.
    pub fn block_type(&self) -> BlockType {
        match BlockType::from_int(self.block_type) {
            Some(btype) => btype,
            None => panic!("invalid block type discriminant {}", self.block_type),
        }
    }

    /// Shorthand for `self.block_type().is_solid()`.
    pub fn is_solid(&self) -> bool {
        self.block_type().is_solid()
    }
}

impl From<BlockType> for Block {
    fn from(block_type: BlockType) -> Self {
        Block::new(block_type)
    }
}

impl Default for Block {
    fn default() -> Self {
        Block::AIR
    }
}
