//! # Camera State Management
//!
//! The camera is the source of every ray the sandbox casts: primary actions
//! eliminate along its view direction and picks resolve the cell it sits in.
//!
//! ## Core Components
//! - `Camera`: Represents the camera's position and orientation in 3D space
//! - `CameraSettings`: Initial placement, read from the settings file

use cgmath::{Deg, Point3};
use serde::Deserialize;

pub mod camera;

pub use camera::Camera;

/// Initial camera placement.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Starting position in world space
    pub position: [f32; 3],
    /// Starting yaw in degrees
    pub yaw_degrees: f32,
    /// Starting pitch in degrees, negative looks down
    pub pitch_degrees: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        // Hovering over the middle of the chunk, looking down.
        CameraSettings {
            position: [32.5, 50.0, 32.5],
            yaw_degrees: 0.0,
            pitch_degrees: -90.0,
        }
    }
}

impl CameraSettings {
    /// Builds the camera these settings describe.
    pub fn build(&self) -> Camera {
        Camera::new(
            Point3::from(self.position),
            Deg(self.yaw_degrees),
            Deg(self.pitch_degrees),
        )
    }
}
