//! Interaction preferences for twisty puzzles.
//!
//! Preferences are stored as YAML. User preferences are layered on top of the
//! defaults embedded in this crate, so a user file only needs to contain the
//! keys it overrides.

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use twisty_core::{Cube, MAX_LAYER_COUNT, MIN_LAYER_COUNT, Pyraminx};

mod cube;
mod pyraminx;

pub use cube::CubePreferences;
pub use pyraminx::PyraminxPreferences;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    /// Preferences embedded in the crate.
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

/// All preferences.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
pub struct Preferences {
    /// Cube preferences.
    pub cube: CubePreferences,
    /// Pyraminx preferences.
    pub pyraminx: PyraminxPreferences,
}

impl Preferences {
    /// Loads preferences from the YAML file at `user_path`, layered over the
    /// defaults. If loading fails, the error is logged and the defaults are
    /// returned.
    pub fn load(user_path: Option<&Path>) -> Self {
        Self::try_load(user_path).unwrap_or_else(|e| {
            log::warn!("Error loading preferences: {e:#}");
            DEFAULT_PREFS.clone()
        })
    }

    /// Loads preferences from the YAML file at `user_path`, layered over the
    /// defaults. A missing file is not an error.
    pub fn try_load(user_path: Option<&Path>) -> Result<Self> {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));
        if let Some(path) = user_path {
            config = config.add_source(
                config::File::from(path)
                    .format(PREFS_FILE_FORMAT)
                    .required(false),
            );
        }
        Self::build(config).wrap_err("error loading user preferences")
    }

    /// Parses preferences from a YAML string, layered over the defaults.
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT))
            .add_source(config::File::from_str(s, PREFS_FILE_FORMAT));
        Self::build(config)
    }

    fn build(config: config::ConfigBuilder<config::builder::DefaultState>) -> Result<Self> {
        let mut prefs: Self = config.build()?.try_deserialize()?;
        prefs.sanitize();
        Ok(prefs)
    }

    /// Writes preferences to a YAML file, creating its directory if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        log::debug!("saved preferences to {}", path.display());
        Ok(())
    }

    /// Replaces out-of-range values with their defaults.
    fn sanitize(&mut self) {
        let defaults = &*DEFAULT_PREFS;
        sanitize_layer_count("cube", &mut self.cube.layer_count, defaults.cube.layer_count);
        sanitize_layer_count(
            "pyraminx",
            &mut self.pyraminx.layer_count,
            defaults.pyraminx.layer_count,
        );
        sanitize_step("cube", &mut self.cube.snap_step, defaults.cube.snap_step);
        sanitize_step("pyraminx", &mut self.pyraminx.snap_step, defaults.pyraminx.snap_step);
    }

    /// Constructs a solved cube of the preferred size.
    pub fn new_cube(&self) -> Result<Cube> {
        Cube::new(self.cube.layer_count).wrap_err("error constructing cube")
    }
    /// Constructs a solved pyraminx of the preferred size.
    pub fn new_pyraminx(&self) -> Result<Pyraminx> {
        Pyraminx::new(self.pyraminx.layer_count).wrap_err("error constructing pyraminx")
    }
}

fn sanitize_layer_count(puzzle: &str, layer_count: &mut u8, default: u8) {
    if !(MIN_LAYER_COUNT..=MAX_LAYER_COUNT).contains(layer_count) {
        log::warn!("{puzzle} layer count {layer_count} is out of range; using {default}");
        *layer_count = default;
    }
}

fn sanitize_step(puzzle: &str, step: &mut f32, default: f32) {
    if !step.is_finite() || *step <= 0.0 {
        log::warn!("{puzzle} snap step {step} is not positive; using {default}");
        *step = default;
    }
}
