pub mod clock;
pub mod controller;
pub mod input_adapter;

pub use clock::Clock;
pub use controller::Button;
pub use input_adapter::{route_event, translate_event};
