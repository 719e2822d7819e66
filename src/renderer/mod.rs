mod machinery;
mod worker;

pub use crate::renderer::machinery::{RenderProgress, render};

use std::num::NonZeroUsize;

#[derive(Copy, Clone, Debug)]
pub enum WorkerCount {
    /// One worker per logical core, pinned when the platform reports a
    /// core list.
    Auto,
    Manual(NonZeroUsize),
}

#[derive(Copy, Clone, Debug)]
pub struct RenderSettings {
    pub workers: WorkerCount,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            workers: WorkerCount::Auto,
        }
    }
}
