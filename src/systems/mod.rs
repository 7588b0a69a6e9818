//! Application systems
//!
//! Window, render and simulation systems driven by the event loop in main.rs.

mod render;
mod simulation;
mod window;

pub use render::{frame_uniforms, RenderError, RenderSystem};
pub use simulation::{SimulationResult, SimulationSystem, MAX_FRAME_TIME};
pub use window::{WindowError, WindowSystem};
