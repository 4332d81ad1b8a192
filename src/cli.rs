// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::SceneConfig;
use crate::scenes::Layout;

#[derive(Parser, Debug, Clone)]
#[command(name = "orbit-walker")]
#[command(
    about = "Walk an agent around an obstacle field under an orbiting camera",
    long_about = None
)]
pub struct Cli {
    /// Preset obstacle layout
    #[arg(long, value_enum, default_value_t = Layout::Open)]
    pub scene: Layout,

    /// JSON file overriding any part of the scene config
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Hide the coordinates panel
    #[arg(long = "no-hud", default_value = "false")]
    pub no_hud: bool,
}

impl Cli {
    /// Defaults, overlaid with `--config` if given. The preset layout fills in
    /// obstacles unless the file lists its own.
    pub fn scene_config(&self) -> Result<SceneConfig> {
        let mut config = match &self.config {
            Some(path) => SceneConfig::load(path)?,
            None => SceneConfig::default(),
        };

        if config.obstacles.is_empty() {
            config = config.with_obstacles(self.scene.obstacles());
        }
        config.validate()?;

        log::info!("Using {:?} layout with {} obstacles", self.scene, config.obstacles.len());
        Ok(config)
    }
}
