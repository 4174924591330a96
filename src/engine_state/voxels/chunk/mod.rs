//! # Chunk Module
//!
//! This module provides the `Chunk` struct, the single fixed-size block of voxels
//! that makes up the whole explorable world. A chunk owns its grid and the
//! parameters it was generated from; every mutation goes through the operations
//! below, so each cell always holds a valid block.
//!
//! ## Lifecycle
//!
//! ```text
//! new(seed) -> empty() -> populate_blocks() -> regenerate(..) / eliminate_ray_intersection(..)
//! ```
//!
//! The grid is allocated once in `new` and never reallocated.
//!
//! ### Performance Characteristics
//! - **Block lookup**: O(1)
//! - **Adjacency check**: O(1), six lookups
//! - **Ray elimination**: O(cells crossed), at most `2 * LENGTH + HEIGHT` steps

use bitvec::vec::BitVec;
use cgmath::{Point3, Vector3};
use log::{debug, info};
use web_time::Instant;

use chunk_iteration::VisibleBlockIterator;
use voxel_grid::VoxelGrid;

use super::block::block_type::BlockType;
use super::error::GridError;
use super::generation::terrain::{TerrainGenerator, TerrainSettings};
use super::ray::intersector::{self, grid_dims, RayHit};
use super::ray::{Aabb, Ray};

pub mod chunk_iteration;
pub mod visibility;
pub mod voxel_grid;

/// The width and depth of the default chunk in blocks.
pub const CHUNK_LENGTH: usize = 64;
/// The height of the default chunk in blocks.
pub const CHUNK_HEIGHT: usize = 64;

/// A `LENGTH` x `HEIGHT` x `LENGTH` collection of voxel blocks.
///
/// The extents are compile-time constants; the defaults give the 64-block chunk
/// used by the sandbox.
pub struct Chunk<const LENGTH: usize = CHUNK_LENGTH, const HEIGHT: usize = CHUNK_HEIGHT> {
    /// Dense block storage
    grid: VoxelGrid<LENGTH, HEIGHT>,
    /// Seeded heightmap generator used by `populate_blocks`
    generator: TerrainGenerator,
}

impl<const LENGTH: usize, const HEIGHT: usize> Chunk<LENGTH, HEIGHT> {
    /// Creates an unpopulated chunk with the default terrain settings.
    ///
    /// # Arguments
    /// * `seed` - The terrain seed
    pub fn new(seed: u32) -> Self {
        Self::with_settings(seed, TerrainSettings::default())
    }

    /// Creates an unpopulated chunk (all air) with explicit terrain settings.
    pub fn with_settings(seed: u32, settings: TerrainSettings) -> Self {
        Chunk {
            grid: VoxelGrid::new(),
            generator: TerrainGenerator::new(seed, settings),
        }
    }

    /// The seed the terrain is currently generated from.
    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    /// The terrain settings of this chunk.
    pub fn settings(&self) -> &TerrainSettings {
        self.generator.settings()
    }

    /// Sets every block to air.
    pub fn empty(&mut self) {
        self.grid.fill(BlockType::Air);
    }

    /// Runs terrain generation over every column.
    pub fn populate_blocks(&mut self) {
        let start = Instant::now();
        self.generator.populate(&mut self.grid);
        info!(
            "Populated {}x{}x{} chunk from seed {} in {:?}",
            LENGTH,
            HEIGHT,
            LENGTH,
            self.seed(),
            start.elapsed()
        );
    }

    /// Empties and repopulates the chunk.
    ///
    /// # Arguments
    /// * `seed` - A new seed to generate from, or `None` to keep the current one
    pub fn regenerate(&mut self, seed: Option<u32>) {
        if let Some(seed) = seed {
            let settings = *self.generator.settings();
            self.generator = TerrainGenerator::new(seed, settings);
        }
        self.empty();
        self.populate_blocks();
    }

    /// Gets the type of the block at `(x, y, z)`.
    ///
    /// # Errors
    /// `GridError::OutOfRange` if the coordinate is outside the chunk.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> Result<BlockType, GridError> {
        Ok(self.grid.get(x, y, z)?.block_type())
    }

    /// Read access to the block storage.
    pub fn grid(&self) -> &VoxelGrid<LENGTH, HEIGHT> {
        &self.grid
    }

    /// Whether the block at `(x, y, z)` is solid and touches air on at least one face.
    pub fn is_block_adjacent_to_air(&self, x: i32, y: i32, z: i32) -> bool {
        visibility::is_block_adjacent_to_air(&self.grid, x, y, z)
    }

    /// The chunk's extent in world space.
    pub fn bounds(&self) -> Aabb {
        let dims = grid_dims::<LENGTH, HEIGHT>();
        Aabb::new(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(dims.x as f32, dims.y as f32, dims.z as f32),
        )
    }

    /// Finds the first solid block along a ray without removing it.
    ///
    /// Degenerate directions and rays that miss the chunk return `None`.
    pub fn cast_ray(&self, origin: Point3<f32>, direction: Vector3<f32>) -> Option<RayHit> {
        let ray = Ray::new(origin, direction)?;
        intersector::cast_ray(&self.grid, &ray)
    }

    /// Removes the first solid block along a ray.
    ///
    /// # Returns
    /// `true` if a block was turned into air. On `false` the chunk is unchanged.
    pub fn eliminate_ray_intersection(
        &mut self,
        origin: Point3<f32>,
        direction: Vector3<f32>,
    ) -> bool {
        self.eliminate_ray_hit(origin, direction).is_some()
    }

    /// Like `eliminate_ray_intersection`, but reports which block was removed.
    pub fn eliminate_ray_hit(
        &mut self,
        origin: Point3<f32>,
        direction: Vector3<f32>,
    ) -> Option<RayHit> {
        let Some(hit) = self.cast_ray(origin, direction) else {
            debug!("Ray from {:?} along {:?} hit nothing", origin, direction);
            return None;
        };

        let position = hit.position;
        if let Err(err) = self.grid.set(position.x, position.y, position.z, BlockType::Air) {
            panic!("ray walk produced a cell outside the chunk: {err}");
        }

        debug!(
            "Eliminated {:?} block at {:?} ({:.2} along the ray)",
            hit.block_type, position, hit.distance
        );
        Some(hit)
    }

    /// The cell containing `position`, or `None` if the point is outside the chunk.
    pub fn pick_block(&self, position: Point3<f32>) -> Option<Point3<i32>> {
        intersector::pick_block::<LENGTH, HEIGHT>(position)
    }

    /// Iterates every block a renderer has to draw this frame.
    pub fn visible_blocks(&self) -> VisibleBlockIterator<'_, LENGTH, HEIGHT> {
        VisibleBlockIterator::new(self)
    }

    /// One bit per cell, in storage order, set for the blocks `visible_blocks` yields.
    pub fn visibility_mask(&self) -> BitVec {
        let mut mask = BitVec::repeat(false, VoxelGrid::<LENGTH, HEIGHT>::SIZE);
        for (position, _) in self.visible_blocks() {
            let index = (position.x as usize * LENGTH + position.z as usize) * HEIGHT
                + position.y as usize;
            mask.set(index, true);
        }
        mask
    }

    /// The grid as raw bytes, one per block, in storage order.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.grid.blocks())
    }
}
