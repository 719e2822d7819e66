use assert2::assert;
use whitted::{Camera, RenderSettings, Scene, render, write_ppm};

/// Full render of the reference scene at the reference resolution,
/// checked end to end down to the PPM bytes.
#[test]
fn demo_scene_renders_to_valid_ppm() {
    let camera = Camera::builder()
        .width(1024)
        .height(768)
        .fov(std::f64::consts::FRAC_PI_3)
        .build();

    let mut render_progress =
        render(Scene::demo(), camera, RenderSettings::default(), |_| {}).unwrap();
    render_progress.wait();

    let framebuffer = render_progress.framebuffer().lock().unwrap();

    // Shading must never have produced NaN or negative radiance.
    for pixel in framebuffer.pixels() {
        for channel in [pixel.x, pixel.y, pixel.z] {
            assert!(channel.is_finite());
            assert!(channel >= 0.0);
        }
    }

    let mut bytes = Vec::new();
    write_ppm(&mut bytes, &framebuffer).unwrap();

    let header = b"P6\n1024 768\n255\n";
    assert!(&bytes[..header.len()] == header);
    assert!(bytes.len() == header.len() + 1024 * 768 * 3);
}
