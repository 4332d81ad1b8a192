pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod hud;
pub mod input;
pub mod math;
pub mod movement;
pub mod obstacle;
pub mod renderer;
pub mod scene;
pub mod scenes;
pub mod traits;
pub mod types;

pub use camera::OrbitCamera;
pub use config::SceneConfig;
pub use movement::{Intent, MovementController, TrackedPosition};
pub use obstacle::{Obstacle, ObstacleRegistry, ObstacleSpec};
pub use scene::Scene;
