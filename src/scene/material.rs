use crate::geometry::{Color, FloatType};

/// Blend weights for the four shading contributions. The weights are
/// independent coefficients and need not sum to one.
#[derive(Copy, Clone, Debug)]
pub struct Albedo {
    pub diffuse: FloatType,
    pub specular: FloatType,
    pub reflection: FloatType,
    pub refraction: FloatType,
}

impl Albedo {
    pub const fn new(
        diffuse: FloatType,
        specular: FloatType,
        reflection: FloatType,
        refraction: FloatType,
    ) -> Albedo {
        Albedo {
            diffuse,
            specular,
            reflection,
            refraction,
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Material {
    pub diffuse_color: Color,
    pub specular_exponent: FloatType,
    pub albedo: Albedo,
    /// Relative to vacuum, 1.0 = no refraction.
    pub refractive_index: FloatType,
}

impl Material {
    pub fn new(
        diffuse_color: Color,
        specular_exponent: FloatType,
        albedo: Albedo,
        refractive_index: FloatType,
    ) -> Material {
        Material {
            diffuse_color,
            specular_exponent,
            albedo,
            refractive_index,
        }
    }

    /// Purely diffuse material of the given color. Used for the
    /// checkerboard tiles.
    pub fn matte(diffuse_color: Color) -> Material {
        Material {
            diffuse_color,
            specular_exponent: 0.0,
            albedo: Albedo::new(1.0, 0.0, 0.0, 0.0),
            refractive_index: 1.0,
        }
    }
}
