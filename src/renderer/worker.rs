use crate::{camera::Camera, geometry::Color, scene::Scene, tracer};

/// Renders one scanline into `row`. Each pixel is an independent primary
/// ray cast at depth zero; there is no inter-pixel state.
pub fn render_row(scene: &Scene, camera: &Camera, y: u32, row: &mut [Color]) {
    debug_assert_eq!(row.len(), camera.width() as usize);

    for (x, pixel) in row.iter_mut().enumerate() {
        let ray = camera.primary_ray(x as u32, y);
        *pixel = tracer::cast_ray(scene, &ray, 0);
    }
}
