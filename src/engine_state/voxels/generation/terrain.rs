//! # Terrain Generation
//!
//! Fills a voxel grid from a heightmap. Each `(x, z)` column gets a height `h`
//! derived from the noise field; cells below `h` are solid and cells at or above it
//! are air, so a column never contains floating blocks.
//!
//! ```text
//!  y >= h              Air
//!  h - dirt_depth..h   Dirt
//!  0..h - dirt_depth   Stone
//! ```

use serde::Deserialize;

use super::noise_field::NoiseField;
use crate::engine_state::voxels::block::{block_type::BlockType, Block};
use crate::engine_state::voxels::chunk::voxel_grid::VoxelGrid;

/// Tunable parameters of the heightmap and material rule.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TerrainSettings {
    /// Thickness of the dirt band at the top of every column.
    pub dirt_depth: usize,
    /// Column height where the noise is zero.
    pub base_height: f64,
    /// How far the noise can push a column above or below `base_height`.
    pub amplitude: f64,
    /// Scale applied to block coordinates before sampling the noise.
    pub frequency: f64,
    /// Number of noise octaves.
    pub octaves: usize,
    /// Amplitude falloff between octaves.
    pub persistence: f64,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        TerrainSettings {
            dirt_depth: 3,
            base_height: 32.0,
            amplitude: 12.0,
            frequency: 0.02,
            octaves: 4,
            persistence: 0.5,
        }
    }
}

/// Turns a noise field into block columns.
#[derive(Debug)]
pub struct TerrainGenerator {
    noise: NoiseField,
    settings: TerrainSettings,
}

impl TerrainGenerator {
    /// Creates a generator for `seed` with the given settings.
    pub fn new(seed: u32, settings: TerrainSettings) -> Self {
        TerrainGenerator {
            noise: NoiseField::new(
                seed,
                settings.frequency,
                settings.octaves,
                settings.persistence,
            ),
            settings,
        }
    }

    /// The seed of the underlying noise field.
    pub fn seed(&self) -> u32 {
        self.noise.seed()
    }

    /// The settings this generator was built with.
    pub fn settings(&self) -> &TerrainSettings {
        &self.settings
    }

    /// The height of the column at `(x, z)`, clamped into `[0, max_height)`.
    ///
    /// Cells with `y < column_height` are solid.
    pub fn column_height(&self, x: i32, z: i32, max_height: usize) -> usize {
        let raw = self.settings.base_height + self.settings.amplitude * self.noise.height(x, z);
        if !raw.is_finite() || raw <= 0.0 {
            return 0;
        }
        (raw.round() as usize).min(max_height.saturating_sub(1))
    }

    /// The material of the cell at height `y` in a column of height `column_height`.
    pub fn material_at(&self, y: usize, column_height: usize) -> BlockType {
        if y >= column_height {
            BlockType::Air
        } else if y + self.settings.dirt_depth < column_height {
            BlockType::Stone
        } else {
            BlockType::Dirt
        }
    }

    /// Writes every column of `grid`.
    pub fn populate<const LENGTH: usize, const HEIGHT: usize>(
        &self,
        grid: &mut VoxelGrid<LENGTH, HEIGHT>,
    ) {
        for (x, z, column) in grid.columns_mut() {
            let column_height = self.column_height(x, z, HEIGHT);
            for (y, block) in column.iter_mut().enumerate() {
                *block = Block::new(self.material_at(y, column_height));
            }
        }
    }
}
