//! Runtime settings for the sandbox binary.

use std::{fs, path::Path};

use anyhow::{ensure, Context, Result};
use serde::Deserialize;

use crate::engine_state::{
    camera_state::CameraSettings, voxels::generation::terrain::TerrainSettings, PlayerAction,
};

/// Seed used when the settings file does not name one.
pub const DEFAULT_SEED: u32 = 123489;

/// Everything the sandbox reads from its settings file.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Terrain seed
    pub seed: u32,
    /// Heightmap and material parameters
    pub terrain: TerrainSettings,
    /// Initial camera placement
    pub camera: CameraSettings,
    /// Actions to replay after the chunk is built
    pub actions: Vec<PlayerAction>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            seed: DEFAULT_SEED,
            terrain: TerrainSettings::default(),
            camera: CameraSettings::default(),
            actions: Vec::new(),
        }
    }
}

impl Settings {
    /// Reads and validates a JSON settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let settings: Settings =
            serde_json::from_slice(&fs::read(path).context("reading settings file")?)
                .context("parsing settings file")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Rejects terrain parameters the generator cannot use.
    pub fn validate(&self) -> Result<()> {
        let terrain = &self.terrain;
        ensure!(
            terrain.base_height.is_finite(),
            "terrain.base_height must be finite"
        );
        ensure!(
            terrain.amplitude.is_finite() && terrain.amplitude >= 0.0,
            "terrain.amplitude must be a non-negative number"
        );
        ensure!(
            terrain.frequency.is_finite() && terrain.frequency > 0.0,
            "terrain.frequency must be positive"
        );
        ensure!(terrain.octaves >= 1, "terrain.octaves must be at least 1");
        ensure!(
            terrain.persistence.is_finite() && terrain.persistence > 0.0,
            "terrain.persistence must be positive"
        );
        ensure!(
            self.camera.position.iter().all(|c| c.is_finite()),
            "camera.position must be finite"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_gives_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn partial_terrain_keeps_other_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"seed": 7, "terrain": {"dirt_depth": 5}}"#).unwrap();
        assert_eq!(settings.seed, 7);
        assert_eq!(settings.terrain.dirt_depth, 5);
        assert_eq!(
            settings.terrain.base_height,
            TerrainSettings::default().base_height
        );
    }

    #[test]
    fn invalid_terrain_is_rejected() {
        let mut settings = Settings::default();
        settings.terrain.octaves = 0;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.terrain.frequency = -1.0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn missing_file_reports_context() {
        let err = Settings::load(Path::new("/nonexistent/voxel-sandbox.json")).unwrap_err();
        assert!(format!("{err:#}").contains("reading settings file"));
    }
}
