use crate::geometry::{Color, EPSILON, Ray, WorldPoint, WorldVector, reflect, refract};
use crate::scene::Scene;

/// Deepest secondary bounce. A fully reflective chain performs
/// `MAX_DEPTH + 1` casts in total (depths 0 through 4).
pub const MAX_DEPTH: u32 = 4;

/// Radiance arriving along the ray, by Whitted shading: local diffuse and
/// specular lighting with binary shadows, plus recursively gathered
/// reflected and refracted radiance, blended by the material's albedo
/// weights. Components are unbounded above; clamping is the output
/// encoder's job.
pub fn cast_ray(scene: &Scene, ray: &Ray, depth: u32) -> Color {
    if depth > MAX_DEPTH {
        return scene.background;
    }
    let Some(hit) = scene.intersect(ray) else {
        return scene.background;
    };

    let reflect_direction = reflect(&ray.direction, &hit.normal).normalize();
    let refract_direction =
        refract(&ray.direction, &hit.normal, hit.material.refractive_index).normalize();
    let reflect_origin = biased_origin(&hit.point, &hit.normal, &reflect_direction);
    let refract_origin = biased_origin(&hit.point, &hit.normal, &refract_direction);

    let reflect_color = cast_ray(scene, &Ray::new(reflect_origin, reflect_direction), depth + 1);
    let refract_color = cast_ray(scene, &Ray::new(refract_origin, refract_direction), depth + 1);

    let mut diffuse_intensity = 0.0;
    let mut specular_intensity = 0.0;
    for light in &scene.lights {
        let to_light = light.position - hit.point;
        let light_direction = to_light.normalize();
        let light_distance = to_light.norm();

        let shadow_origin = biased_origin(&hit.point, &hit.normal, &light_direction);
        let shadow_ray = Ray::new(shadow_origin, light_direction);
        if let Some(blocker) = scene.intersect(&shadow_ray) {
            // Any surface strictly nearer than the light fully occludes it.
            if (blocker.point - shadow_origin).norm() < light_distance {
                continue;
            }
        }

        diffuse_intensity += light.intensity * light_direction.dot(&hit.normal).max(0.0);
        specular_intensity += (-reflect(&-light_direction, &hit.normal).dot(&ray.direction))
            .max(0.0)
            .powf(hit.material.specular_exponent)
            * light.intensity;
    }

    hit.material.diffuse_color * diffuse_intensity * hit.material.albedo.diffuse
        + Color::new(1.0, 1.0, 1.0) * specular_intensity * hit.material.albedo.specular
        + reflect_color * hit.material.albedo.reflection
        + refract_color * hit.material.albedo.refraction
}

/// Secondary ray origin nudged off the surface so it cannot immediately
/// re-hit the surface it starts on. The offset goes to whichever side of
/// the surface the new direction points at.
fn biased_origin(
    point: &WorldPoint,
    normal: &WorldVector,
    direction: &WorldVector,
) -> WorldPoint {
    if direction.dot(normal) < 0.0 {
        point - normal * EPSILON
    } else {
        point + normal * EPSILON
    }
}
