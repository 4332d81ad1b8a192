mod common;
mod courtyard;

use clap::ValueEnum;

use crate::obstacle::ObstacleSpec;

pub use common::block;
pub use courtyard::create_courtyard_layout;

/// Preset obstacle layouts selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Layout {
    /// Empty ground
    #[default]
    Open,
    /// Walls and pillars around the spawn point
    Courtyard,
}

impl Layout {
    pub fn obstacles(self) -> Vec<ObstacleSpec> {
        match self {
            Layout::Open => Vec::new(),
            Layout::Courtyard => create_courtyard_layout(),
        }
    }
}
