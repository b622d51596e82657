mod attempt;
mod controller;
mod heartbeat;

pub use controller::*;
pub use heartbeat::*;
