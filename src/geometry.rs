pub type FloatType = f64;

/// Offset applied to secondary ray origins to avoid re-hitting the surface
/// they start on. Also the cutoff below which a ray counts as parallel to
/// the ground plane.
pub const EPSILON: FloatType = 1e-3;

pub type WorldPoint = nalgebra::Point3<FloatType>;
pub type WorldVector = nalgebra::Vector3<FloatType>;

/// Linear RGB radiance. Components are non-negative but not bounded above
/// until tone mapping.
pub type Color = nalgebra::Vector3<FloatType>;

#[derive(Copy, Clone, Debug)]
pub struct Ray {
    pub origin: WorldPoint,
    /// Normalized direction of the ray
    pub direction: WorldVector,
}

impl Ray {
    /// Direction must be non-zero, otherwise the normalization fills the
    /// ray with NaNs.
    pub fn new(origin: WorldPoint, direction: WorldVector) -> Ray {
        Ray {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn point_at(&self, distance: FloatType) -> WorldPoint {
        self.origin + self.direction * distance
    }
}

/// Mirror `incident` around `normal`. Preserves length when `normal` is unit.
pub fn reflect(incident: &WorldVector, normal: &WorldVector) -> WorldVector {
    incident - normal * (2.0 * incident.dot(normal))
}

/// Refracted direction through a surface with the given refractive index
/// (relative to vacuum), by Snell's law.
///
/// Handles both sides of the surface: a negative incidence cosine means the
/// ray travels from inside the medium out, so the normal is flipped and the
/// index ratio inverted. On total internal reflection the result is the
/// fixed direction (1, 0, 0) rather than a physically meaningful response;
/// the caster keeps this sentinel for output compatibility.
///
/// The result is not normalized.
pub fn refract(
    incident: &WorldVector,
    normal: &WorldVector,
    refractive_index: FloatType,
) -> WorldVector {
    let cosi = -incident.dot(normal).clamp(-1.0, 1.0);
    let (cosi, normal, eta) = if cosi < 0.0 {
        (-cosi, -normal, refractive_index)
    } else {
        (cosi, *normal, 1.0 / refractive_index)
    };

    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        WorldVector::new(1.0, 0.0, 0.0)
    } else {
        incident * eta + normal * (eta * cosi - k.sqrt())
    }
}
