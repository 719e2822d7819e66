mod material;
mod primitives;

pub use material::{Albedo, Material};
pub use primitives::{Checkerboard, Sphere};

use crate::geometry::{Color, FloatType, Ray, WorldPoint, WorldVector};

/// Hits farther than this count as misses.
pub const MAX_HIT_DISTANCE: FloatType = 1000.0;

#[derive(Copy, Clone, Debug)]
pub struct Light {
    pub position: WorldPoint,
    pub intensity: FloatType,
}

impl Light {
    pub fn new(position: WorldPoint, intensity: FloatType) -> Light {
        Light {
            position,
            intensity,
        }
    }
}

/// Result of a successful scene intersection.
///
/// The normal points away from the sphere center (or straight up for the
/// checkerboard), not necessarily toward the ray origin. The material is a
/// copy; for checkerboard hits its diffuse color carries the tile shade.
#[derive(Copy, Clone, Debug)]
pub struct HitRecord {
    pub distance: FloatType,
    pub point: WorldPoint,
    pub normal: WorldVector,
    pub material: Material,
}

/// All render input data. Immutable for the duration of a render; an
/// alternate scene is a pure data substitution.
#[derive(Clone, Debug)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
    pub checkerboard: Option<Checkerboard>,
    pub background: Color,
}

impl Scene {
    /// Nearest surface hit along the ray within [`MAX_HIT_DISTANCE`].
    ///
    /// Spheres are tested in list order, the checkerboard last; a strictly
    /// nearer hit wins, ties keep the earlier surface.
    pub fn intersect(&self, ray: &Ray) -> Option<HitRecord> {
        let mut nearest = None;
        let mut nearest_distance = FloatType::MAX;

        for sphere in &self.spheres {
            if let Some(distance) = sphere.intersect(ray) {
                if distance < nearest_distance {
                    nearest_distance = distance;
                    nearest = Some(sphere.hit_record(ray, distance));
                }
            }
        }

        if let Some(checkerboard) = &self.checkerboard {
            if let Some(hit) = checkerboard.intersect(ray, nearest_distance) {
                nearest = Some(hit);
            }
        }

        nearest.filter(|hit| hit.distance < MAX_HIT_DISTANCE)
    }

    /// The reference scene: four spheres over the checkerboard, lit by
    /// three point lights.
    pub fn demo() -> Scene {
        let ivory = Material::new(
            Color::new(0.4, 0.4, 0.3),
            50.0,
            Albedo::new(0.6, 0.3, 0.1, 0.0),
            1.0,
        );
        let glass = Material::new(
            Color::new(0.6, 0.7, 0.8),
            125.0,
            Albedo::new(0.0, 0.5, 0.1, 0.8),
            1.5,
        );
        let red_rubber = Material::new(
            Color::new(0.3, 0.1, 0.1),
            10.0,
            Albedo::new(0.9, 0.1, 0.0, 0.0),
            1.0,
        );
        let mirror = Material::new(
            Color::new(1.0, 1.0, 1.0),
            1425.0,
            Albedo::new(0.0, 10.0, 0.8, 0.0),
            1.0,
        );

        Scene {
            spheres: vec![
                Sphere::new(WorldPoint::new(-3.0, 0.0, -16.0), 2.0, ivory),
                Sphere::new(WorldPoint::new(-1.0, -1.5, -12.0), 2.0, glass),
                Sphere::new(WorldPoint::new(1.5, -0.5, -18.0), 3.0, red_rubber),
                Sphere::new(WorldPoint::new(7.0, 5.0, -18.0), 4.0, mirror),
            ],
            lights: vec![
                Light::new(WorldPoint::new(-20.0, 20.0, 20.0), 1.5),
                Light::new(WorldPoint::new(30.0, 50.0, -25.0), 1.8),
                Light::new(WorldPoint::new(30.0, 20.0, 30.0), 1.7),
            ],
            checkerboard: Some(Checkerboard),
            background: Color::new(0.2, 0.7, 0.8),
        }
    }
}
