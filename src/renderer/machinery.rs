use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    thread::{self, JoinHandle},
};

use crate::{
    camera::Camera,
    framebuffer::Framebuffer,
    geometry::Color,
    renderer::{RenderSettings, WorkerCount, worker},
    scene::Scene,
};

/// Starts rendering the scene on a pool of worker threads and returns a
/// handle to the running render.
///
/// Workers claim scanlines through an atomic counter, render each into a
/// private row buffer and copy it into the shared framebuffer, so every
/// row is written exactly once and workers never wait on each other.
/// `finished_row_callback` fires after each row lands in the framebuffer.
pub fn render<F: Fn(u32) + Send + Sync + 'static>(
    scene: Scene,
    camera: Camera,
    settings: RenderSettings,
    finished_row_callback: F,
) -> anyhow::Result<RenderProgress> {
    let state = Arc::new(RenderState {
        scene,
        camera,
        framebuffer: Mutex::new(Framebuffer::new(camera.width(), camera.height())),
        next_row_index: AtomicUsize::new(0),
    });
    let finished_row_callback = Arc::new(finished_row_callback);

    let threads = worker_cores(settings.workers)
        .into_iter()
        .enumerate()
        .map(|(worker_id, core)| {
            let state = Arc::clone(&state);
            let finished_row_callback = Arc::clone(&finished_row_callback);

            thread::Builder::new()
                .name(format!("worker{worker_id}"))
                .spawn(move || {
                    if let Some(core) = core {
                        core_affinity::set_for_current(core);
                    }

                    let mut row = vec![Color::zeros(); state.camera.width() as usize];

                    while let Some(y) = state.claim_next_row() {
                        worker::render_row(&state.scene, &state.camera, y, &mut row);
                        state
                            .framebuffer
                            .lock()
                            .expect("Poisoned lock!")
                            .copy_row(y, &row);

                        (finished_row_callback)(y);
                    }
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RenderProgress {
        render_state: state,
        threads,
    })
}

/// One pool slot per worker. `Auto` follows the machine's logical core
/// list so the workers can be pinned; when the platform does not report
/// one, the pool still gets one unpinned worker per core.
fn worker_cores(workers: WorkerCount) -> Vec<Option<core_affinity::CoreId>> {
    match workers {
        WorkerCount::Manual(count) => vec![None; count.get()],
        WorkerCount::Auto => match core_affinity::get_core_ids() {
            Some(cores) if !cores.is_empty() => cores.into_iter().map(Some).collect(),
            _ => vec![None; num_cpus::get()],
        },
    }
}

pub struct RenderProgress {
    render_state: Arc<RenderState>,
    threads: Vec<JoinHandle<()>>,
}

impl RenderProgress {
    /// Return number of finished and total rows.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.render_state.camera.height() as usize;
        let claimed = self
            .render_state
            .next_row_index
            .load(Ordering::Acquire)
            .min(total);
        (claimed, total)
    }

    pub fn is_finished(&self) -> bool {
        self.threads.iter().all(|handle| handle.is_finished())
    }

    /// Wait for the workers to finish. The framebuffer is complete once
    /// this returns.
    pub fn wait(&mut self) {
        self.threads
            .drain(..)
            .for_each(|handle| handle.join().unwrap());
    }

    pub fn framebuffer(&self) -> &Mutex<Framebuffer> {
        &self.render_state.framebuffer
    }
}

struct RenderState {
    scene: Scene,
    camera: Camera,

    framebuffer: Mutex<Framebuffer>,

    next_row_index: AtomicUsize,
}

impl RenderState {
    fn claim_next_row(&self) -> Option<u32> {
        let y = self.next_row_index.fetch_add(1, Ordering::AcqRel);
        if y < self.camera.height() as usize {
            Some(y as u32)
        } else {
            None
        }
    }
}
