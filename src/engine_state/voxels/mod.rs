//! # Voxel Core
//!
//! This module contains the chunk voxel model and its spatial queries: block
//! storage, procedural terrain, visibility culling and ray intersection.
//!
//! ## Architecture
//!
//! The voxel system is organized into several key components:
//!
//! * **Block**: Block materials and faces
//! * **Chunk**: The fixed-size grid of blocks and its lifecycle operations
//! * **Generation**: Seeded noise and the heightmap rule that fills a chunk
//! * **Ray**: Slab test, voxel walk, and ray hit queries
//!
//! ## Data Flow
//!
//! 1. `Chunk::populate_blocks` runs the terrain generator over the grid
//! 2. The renderer reads the grid and the air-adjacency query every frame
//! 3. Player input casts rays that turn the first solid block they reach into air
//!
//! ## Errors
//!
//! Raw grid access outside the chunk is a `GridError`. Rays that miss, or that
//! have no usable direction, are ordinary `None`/`false` results.

pub mod block;
pub mod chunk;
pub mod error;
pub mod generation;
pub mod ray;
