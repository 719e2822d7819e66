use crate::geometry::{Color, EPSILON, FloatType, Ray, WorldPoint, WorldVector};

use super::{HitRecord, Material};

#[derive(Copy, Clone, Debug)]
pub struct Sphere {
    pub center: WorldPoint,
    pub radius: FloatType,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: WorldPoint, radius: FloatType, material: Material) -> Sphere {
        Sphere {
            center,
            radius,
            material,
        }
    }

    /// Distance along the ray to the nearest intersection in front of the
    /// origin, if any. Picks the nearer root of the quadratic, falling back
    /// to the farther one when the origin is inside the sphere.
    pub fn intersect(&self, ray: &Ray) -> Option<FloatType> {
        let l = self.center - ray.origin;
        let tca = l.dot(&ray.direction);
        let d2 = l.norm_squared() - tca * tca;
        let radius2 = self.radius * self.radius;
        if d2 > radius2 {
            return None;
        }

        let thc = (radius2 - d2).sqrt();
        let mut t = tca - thc;
        if t < 0.0 {
            t = tca + thc;
        }
        if t < 0.0 { None } else { Some(t) }
    }

    /// The normal always points away from the center, even for hits from
    /// the inside.
    pub fn hit_record(&self, ray: &Ray, distance: FloatType) -> HitRecord {
        let point = ray.point_at(distance);
        HitRecord {
            distance,
            point,
            normal: (point - self.center).normalize(),
            material: self.material,
        }
    }
}

/// The ground plane `y = -4` with a checkered pattern, clipped to the
/// fixed rectangle x in (-10, 10), z in (-30, -10). The bounds and the
/// two tile shades are part of the reference image and are kept verbatim.
#[derive(Copy, Clone, Debug, Default)]
pub struct Checkerboard;

impl Checkerboard {
    const PLANE_Y: FloatType = -4.0;

    /// Intersect, but only accept hits strictly nearer than `nearest`
    /// (the best sphere distance found so far).
    pub fn intersect(&self, ray: &Ray, nearest: FloatType) -> Option<HitRecord> {
        // Near-parallel rays would put the division arbitrarily far away.
        if ray.direction.y.abs() <= EPSILON {
            return None;
        }

        let distance = -(ray.origin.y - Self::PLANE_Y) / ray.direction.y;
        if distance <= 0.0 || distance >= nearest {
            return None;
        }

        let point = ray.point_at(distance);
        if point.x.abs() >= 10.0 || point.z >= -10.0 || point.z <= -30.0 {
            return None;
        }

        Some(HitRecord {
            distance,
            point,
            normal: WorldVector::y(),
            material: Material::matte(Self::tile_shade(&point)),
        })
    }

    /// Tile parity. The conversions truncate toward zero, matching the
    /// reference image exactly (this is not a mathematical floor for the
    /// negative z half).
    fn tile_shade(point: &WorldPoint) -> Color {
        if ((0.5 * point.x + 1000.0) as i64 + (0.5 * point.z) as i64) & 1 == 1 {
            Color::new(1.0, 1.0, 1.0) * 0.3
        } else {
            Color::new(1.0, 0.7, 0.3) * 0.3
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::assert;
    use proptest::prelude::*;
    use test_case::test_case;

    fn test_material() -> Material {
        Material::matte(Color::new(0.5, 0.5, 0.5))
    }

    #[test]
    fn direct_hit_through_center() {
        let sphere = Sphere::new(WorldPoint::new(1.0, 2.0, 3.0), 1.0, test_material());
        let ray = Ray::new(
            WorldPoint::new(1.0, 2.0, 0.0),
            WorldVector::new(0.0, 0.0, 1.0),
        );

        let t = sphere.intersect(&ray).expect("We should have a hit!");
        assert!((t - 2.0).abs() < 1e-9);
    }

    #[test]
    fn grazing_hit() {
        let sphere = Sphere::new(WorldPoint::new(1.0, 2.0, 3.0), 1.0, test_material());
        let ray = Ray::new(
            WorldPoint::new(2.0, 2.0, 0.0),
            WorldVector::new(0.0, 0.0, 1.0),
        );

        let t = sphere.intersect(&ray).expect("We should have a hit!");
        assert!((t - 3.0).abs() < 1e-9);
    }

    #[test]
    fn narrow_miss() {
        let sphere = Sphere::new(WorldPoint::new(1.0, 2.0, 3.0), 1.0, test_material());
        let ray = Ray::new(
            WorldPoint::new(2.0, 2.01, 0.0),
            WorldVector::new(0.0, 0.0, 1.0),
        );
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn sphere_behind_origin_misses() {
        let sphere = Sphere::new(WorldPoint::new(0.0, 0.0, 5.0), 1.0, test_material());
        let ray = Ray::new(WorldPoint::origin(), WorldVector::new(0.0, 0.0, -1.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn origin_inside_sphere_hits_far_side() {
        let sphere = Sphere::new(WorldPoint::origin(), 2.0, test_material());
        let ray = Ray::new(WorldPoint::origin(), WorldVector::new(0.0, 0.0, -1.0));

        let t = sphere.intersect(&ray).expect("We should have a hit!");
        assert!((t - 2.0).abs() < 1e-9);
    }

    #[test]
    fn hit_record_normal_points_away_from_center() {
        let sphere = Sphere::new(WorldPoint::new(0.0, 0.0, -10.0), 2.0, test_material());
        let ray = Ray::new(WorldPoint::origin(), WorldVector::new(0.0, 0.0, -1.0));

        let t = sphere.intersect(&ray).unwrap();
        let hit = sphere.hit_record(&ray, t);
        assert!((hit.normal - WorldVector::new(0.0, 0.0, 1.0)).norm() < 1e-9);
        assert!((hit.point.z - -8.0).abs() < 1e-9);
    }

    #[test]
    fn checkerboard_hit_from_above() {
        let ray = Ray::new(
            WorldPoint::new(0.0, 0.0, -20.0),
            WorldVector::new(0.0, -1.0, 0.0),
        );
        let hit = Checkerboard
            .intersect(&ray, FloatType::MAX)
            .expect("We should have a hit!");

        assert!((hit.distance - 4.0).abs() < 1e-9);
        assert!(hit.normal == WorldVector::y());
    }

    #[test]
    fn checkerboard_skips_near_parallel_rays() {
        let ray = Ray {
            origin: WorldPoint::new(0.0, 0.0, -20.0),
            direction: WorldVector::new(1.0, -1e-4, 0.0),
        };
        assert!(Checkerboard.intersect(&ray, FloatType::MAX).is_none());
    }

    #[test]
    fn checkerboard_respects_nearest_bound() {
        let ray = Ray::new(
            WorldPoint::new(0.0, 0.0, -20.0),
            WorldVector::new(0.0, -1.0, 0.0),
        );
        assert!(Checkerboard.intersect(&ray, 3.0).is_none());
    }

    #[test_case(15.0, -20.0; "x out of bounds")]
    #[test_case(0.0, -5.0; "z too near")]
    #[test_case(0.0, -35.0; "z too far")]
    fn checkerboard_clipped_outside_rectangle(x: FloatType, z: FloatType) {
        let ray = Ray::new(
            WorldPoint::new(x, 0.0, z),
            WorldVector::new(0.0, -1.0, 0.0),
        );
        assert!(Checkerboard.intersect(&ray, FloatType::MAX).is_none());
    }

    // Parity at (1.0, -20.5): trunc(1000.5) + trunc(-10.25) = 990, even.
    #[test_case(1.0, -20.5, Color::new(0.3, 0.21, 0.09); "orange tile")]
    #[test_case(3.0, -20.5, Color::new(0.3, 0.3, 0.3); "white tile")]
    fn checkerboard_tile_shades(x: FloatType, z: FloatType, expected: Color) {
        let ray = Ray::new(
            WorldPoint::new(x, 0.0, z),
            WorldVector::new(0.0, -1.0, 0.0),
        );
        let hit = Checkerboard
            .intersect(&ray, FloatType::MAX)
            .expect("We should have a hit!");
        assert!((hit.material.diffuse_color - expected).norm() < 1e-9);
    }

    proptest! {
        /// A sphere straight ahead on the ray axis at distance d with
        /// radius r < d is hit at exactly d - r.
        #[test]
        fn axis_aligned_hit_distance(d in 2.0..100.0f64, r in 0.1..1.9f64) {
            prop_assume!(r < d);
            let sphere = Sphere::new(
                WorldPoint::new(0.0, 0.0, -d),
                r,
                Material::matte(Color::zeros()),
            );
            let ray = Ray::new(WorldPoint::origin(), WorldVector::new(0.0, 0.0, -1.0));

            let t = sphere.intersect(&ray).expect("We should have a hit!");
            prop_assert!((t - (d - r)).abs() < 1e-6);
        }
    }
}
