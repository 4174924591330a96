//! # Block Type Module
//!
//! This module defines the materials a block can be made of.
//! It provides conversion from the compact storage integer back to the enum.

use num_derive::FromPrimitive;
use serde::Deserialize;

use super::BlockTypeSize;

/// Enumerates all possible block types in the chunk.
///
/// The `FromPrimitive` derive allows conversion from the compact `BlockTypeSize`
/// stored in each `Block`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive, Deserialize)]
pub enum BlockType {
    /// An empty cell. Never drawn, never hit by rays.
    Air,

    /// The near-surface band of every terrain column.
    Dirt,

    /// Everything beneath the dirt band.
    Stone,
}

impl BlockType {
    /// Converts a `BlockTypeSize` to a `BlockType`.
    ///
    /// # Arguments
    /// * `btype` - The block type as a `BlockTypeSize`
    ///
    /// # Returns
    /// The corresponding `BlockType`, or `None` if the value is not a known discriminant.
    pub fn from_int(btype: BlockTypeSize) -> Option<Self> {
        num::FromPrimitive::from_u8(btype)
    }

    /// Whether the block occupies its cell. Only air is non-solid.
    pub fn is_solid(self) -> bool {
        self != BlockType::Air
    }
}
