//! # Engine State Module
//!
//! The headless side of the sandbox: owns the chunk and the camera, turns player
//! actions into chunk operations, and summarises what a renderer would draw.
//!
//! ## Key Components
//!
//! * `EngineState` - Owns the chunk and camera and applies player actions
//! * `camera_state` - Camera position and orientation
//! * `voxels` - Block storage, terrain generation, visibility and ray casting
//!
//! ## Frame Boundary
//!
//! Rendering only needs `&EngineState`, actions need `&mut EngineState`. The borrow
//! checker therefore keeps block mutation out of any in-progress frame without
//! further locking.

use cgmath::{Deg, Point3};
use log::info;
use serde::Deserialize;
use web_time::Instant;

use camera_state::Camera;
use voxels::{
    block::block_type::BlockType,
    chunk::Chunk,
    ray::intersector::RayHit,
};

pub mod camera_state;
pub mod voxels;

/// Length of the debug line recorded for each eliminating ray.
pub const RAY_LINE_LENGTH: f32 = 30.0;

/// Something the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerAction {
    /// Regenerate the chunk from a fresh random seed
    Regenerate,
    /// Regenerate the chunk from a given seed
    RegenerateWithSeed {
        /// The seed to generate from
        seed: u32,
    },
    /// Remove the first block along the camera's view
    EliminateBlock,
    /// Resolve the cell the camera is in
    PickBlock,
    /// Report the camera position
    PrintPosition,
    /// Switch between filled and wireframe drawing
    ToggleWireframe,
    /// Forget the recorded debug rays
    ClearRays,
    /// Turn the camera
    Look {
        /// New yaw in degrees
        yaw_degrees: f32,
        /// New pitch in degrees
        pitch_degrees: f32,
    },
    /// Move the camera
    MoveTo {
        /// New x position
        x: f32,
        /// New y position
        y: f32,
        /// New z position
        z: f32,
    },
}

/// What happened in response to a `PlayerAction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionOutcome {
    /// The chunk was rebuilt from `seed`
    Regenerated {
        /// Seed the chunk now uses
        seed: u32,
    },
    /// An elimination ray was cast; `hit` is the removed block, if any
    Eliminated {
        /// The removed block
        hit: Option<RayHit>,
    },
    /// A pick resolved `cell`, `None` if the camera is outside the chunk
    Picked {
        /// The cell containing the camera and its block type
        cell: Option<(Point3<i32>, BlockType)>,
    },
    /// The camera position
    Position(Point3<f32>),
    /// Wireframe mode after the toggle
    Wireframe(bool),
    /// Number of debug rays that were discarded
    RaysCleared(usize),
    /// The camera moved or turned
    CameraUpdated,
}

/// A recorded eliminating ray, drawn by the renderer as a debug line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayLine {
    /// Camera position when the ray was cast
    pub start: Point3<f32>,
    /// `RAY_LINE_LENGTH` along the view direction
    pub end: Point3<f32>,
}

/// What the renderer would draw this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Blocks drawn
    pub drawn: usize,
    /// Drawn dirt blocks
    pub dirt: usize,
    /// Drawn stone blocks
    pub stone: usize,
    /// Solid blocks skipped because they are buried
    pub culled: usize,
}

/// The main state container for the sandbox.
///
/// # Examples
///
/// ```
/// use voxel_sandbox::engine_state::{EngineState, PlayerAction};
/// use voxel_sandbox::engine_state::camera_state::CameraSettings;
///
/// let mut engine = EngineState::new(123489, Default::default(), &CameraSettings::default());
/// engine.process_action(PlayerAction::EliminateBlock);
/// let stats = engine.frame_stats();
/// assert!(stats.drawn > 0);
/// ```
pub struct EngineState {
    /// The chunk being explored
    pub chunk: Chunk,
    /// The viewpoint rays are cast from
    pub camera: Camera,
    /// Debug lines for every eliminating ray cast so far
    pub ray_lines: Vec<RayLine>,
    /// Whether blocks are drawn as wireframes
    pub wireframe: bool,
}

impl EngineState {
    /// Builds and populates the chunk and places the camera.
    pub fn new(
        seed: u32,
        terrain: voxels::generation::terrain::TerrainSettings,
        camera: &camera_state::CameraSettings,
    ) -> Self {
        let mut chunk = Chunk::with_settings(seed, terrain);
        chunk.empty();
        chunk.populate_blocks();

        EngineState {
            chunk,
            camera: camera.build(),
            ray_lines: Vec::new(),
            wireframe: false,
        }
    }

    /// Applies a single player action.
    pub fn process_action(&mut self, action: PlayerAction) -> ActionOutcome {
        match action {
            PlayerAction::Regenerate => self.regenerate(fastrand::u32(..)),
            PlayerAction::RegenerateWithSeed { seed } => self.regenerate(seed),
            PlayerAction::EliminateBlock => self.eliminate_block(),
            PlayerAction::PickBlock => {
                let cell = self.chunk.pick_block(self.camera.position).and_then(|cell| {
                    let block_type = self.chunk.get_block(cell.x, cell.y, cell.z).ok()?;
                    Some((cell, block_type))
                });
                info!("Picked {:?}", cell);
                ActionOutcome::Picked { cell }
            }
            PlayerAction::PrintPosition => {
                let position = self.camera.position;
                info!("Position: {:.3}, {:.3}, {:.3}", position.x, position.y, position.z);
                ActionOutcome::Position(position)
            }
            PlayerAction::ToggleWireframe => {
                self.wireframe = !self.wireframe;
                ActionOutcome::Wireframe(self.wireframe)
            }
            PlayerAction::ClearRays => {
                let cleared = self.ray_lines.len();
                self.ray_lines.clear();
                ActionOutcome::RaysCleared(cleared)
            }
            PlayerAction::Look {
                yaw_degrees,
                pitch_degrees,
            } => {
                self.camera.look(Deg(yaw_degrees), Deg(pitch_degrees));
                ActionOutcome::CameraUpdated
            }
            PlayerAction::MoveTo { x, y, z } => {
                self.camera.position = Point3::new(x, y, z);
                ActionOutcome::CameraUpdated
            }
        }
    }

    fn regenerate(&mut self, seed: u32) -> ActionOutcome {
        self.chunk.regenerate(Some(seed));
        ActionOutcome::Regenerated { seed }
    }

    fn eliminate_block(&mut self) -> ActionOutcome {
        let start = self.camera.position;
        let direction = self.camera.direction();
        self.ray_lines.push(RayLine {
            start,
            end: start + direction * RAY_LINE_LENGTH,
        });

        let timer = Instant::now();
        let hit = self.chunk.eliminate_ray_hit(start, direction);
        info!("Took {:?} to eliminate blocks", timer.elapsed());

        ActionOutcome::Eliminated { hit }
    }

    /// Walks the chunk the way the renderer does and counts what it would draw.
    pub fn frame_stats(&self) -> FrameStats {
        let mut stats = FrameStats::default();
        for (_, block_type) in self.chunk.visible_blocks() {
            stats.drawn += 1;
            match block_type {
                BlockType::Dirt => stats.dirt += 1,
                BlockType::Stone => stats.stone += 1,
                BlockType::Air => {}
            }
        }

        let solid = self
            .chunk
            .grid()
            .blocks()
            .iter()
            .filter(|block| block.is_solid())
            .count();
        stats.culled = solid - stats.drawn;
        stats
    }
}
