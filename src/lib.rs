#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Sandbox
//!
//! The world model behind a small voxel viewer: one procedurally generated chunk
//! of dirt and stone that a camera can fly through and carve blocks out of.
//!
//! ## Key Modules
//!
//! * `engine_state` - The chunk, the camera, and the player actions that drive them
//! * `engine_state::voxels` - Block storage, terrain generation, visibility culling and ray casting
//! * `settings` - Seed, terrain and camera configuration for the binary
//!
//! ## Architecture
//!
//! The chunk is a dense, compile-time sized grid. Everything a renderer needs is
//! read-only (`Chunk::visible_blocks`, `Chunk::is_block_adjacent_to_air`); everything
//! the player does goes through `&mut Chunk` (`regenerate`, `eliminate_ray_intersection`).
//! Windowing, GPU resources and the render loop live outside this crate.
//!
//! ## Usage
//!
//! ```rust
//! use cgmath::{Point3, Vector3};
//! use voxel_sandbox::Chunk;
//!
//! let mut chunk: Chunk = Chunk::new(123489);
//! chunk.empty();
//! chunk.populate_blocks();
//!
//! let removed = chunk.eliminate_ray_intersection(
//!     Point3::new(32.5, 63.5, 32.5),
//!     Vector3::new(0.0, -1.0, 0.0),
//! );
//! assert!(removed);
//! ```

use std::path::Path;

use anyhow::Result;
use log::info;

pub mod engine_state;
pub mod settings;

pub use engine_state::voxels::{
    block::{block_side::BlockSide, block_type::BlockType, Block},
    chunk::{voxel_grid::VoxelGrid, Chunk, CHUNK_HEIGHT, CHUNK_LENGTH},
    error::GridError,
    generation::terrain::TerrainSettings,
    ray::{intersector::RayHit, Aabb, Ray},
};

use engine_state::EngineState;
use settings::Settings;

/// Runs the sandbox: builds the chunk, reports a frame, replays the scripted actions.
///
/// The first command-line argument, if any, is a JSON settings file.
pub fn run() -> Result<()> {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let settings = match std::env::args_os().nth(1) {
        Some(path) => Settings::load(Path::new(&path))?,
        None => Settings::default(),
    };

    let mut engine = EngineState::new(settings.seed, settings.terrain, &settings.camera);
    info!("Initial frame: {:?}", engine.frame_stats());

    for action in &settings.actions {
        let outcome = engine.process_action(*action);
        info!("{:?} -> {:?}", action, outcome);
    }

    if !settings.actions.is_empty() {
        info!("Final frame: {:?}", engine.frame_stats());
    }

    Ok(())
}
