pub mod camera;
pub mod listener;
pub mod sink;

pub use camera::*;
pub use listener::*;
pub use sink::*;
