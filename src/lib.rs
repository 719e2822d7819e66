mod camera;
mod framebuffer;
pub mod geometry;
mod output;
mod renderer;
pub mod scene;
mod tracer;

pub use camera::Camera;
pub use framebuffer::Framebuffer;
pub use output::{save_ppm, tone_map, write_ppm};
pub use renderer::{RenderProgress, RenderSettings, WorkerCount, render};
pub use scene::Scene;
pub use tracer::cast_ray;
