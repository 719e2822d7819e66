use std::path::Path;

use whitted::{Camera, RenderSettings, Scene, render, save_ppm};

use indicatif::ProgressBar;

fn main() -> anyhow::Result<()> {
    let camera = Camera::builder()
        .width(1024)
        .height(768)
        .fov(std::f64::consts::FRAC_PI_3)
        .build();

    let bar = ProgressBar::new(camera.height() as u64);
    let mut render_progress = render(Scene::demo(), camera, RenderSettings::default(), {
        let bar = bar.clone();
        move |_row| bar.inc(1)
    })?;

    render_progress.wait();
    bar.finish();

    let framebuffer = render_progress
        .framebuffer()
        .lock()
        .expect("Poisoned lock!");
    save_ppm(Path::new("out.ppm"), &framebuffer)?;

    Ok(())
}
