pub mod clock;
pub mod controller;
pub mod error;
pub mod gpu_context;
pub mod input_adapter;
pub mod renderer;

pub use clock::Clock;
pub use controller::{Button, Controller};
pub use error::InitError;
pub use gpu_context::GpuContext;
pub use input_adapter::WinitController;
pub use renderer::Renderer;
