use assert2::assert;
use bon::bon;

use crate::geometry::{FloatType, Ray, WorldPoint, WorldVector};

/// Pinhole camera at the origin, looking down the negative z axis.
#[derive(Copy, Clone, Debug)]
pub struct Camera {
    width: u32,
    height: u32,

    /// z component shared by all primary ray directions, derived from the
    /// vertical field of view.
    film_z: FloatType,
}

#[bon]
impl Camera {
    /// `fov` is the vertical field of view in radians.
    #[builder]
    pub fn new(width: u32, height: u32, fov: FloatType) -> Self {
        assert!(width > 0);
        assert!(height > 0);
        assert!(fov > 0.0);
        assert!(fov < std::f64::consts::PI);

        Camera {
            width,
            height,
            film_z: -(height as FloatType) / (2.0 * (fov / 2.0).tan()),
        }
    }
}

impl Camera {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Primary ray through the center of pixel (i, j). Pixel (0, 0) is the
    /// top left corner of the image.
    pub fn primary_ray(&self, i: u32, j: u32) -> Ray {
        let x = (i as FloatType + 0.5) - self.width as FloatType / 2.0;
        let y = -(j as FloatType + 0.5) + self.height as FloatType / 2.0;

        Ray::new(WorldPoint::origin(), WorldVector::new(x, y, self.film_z))
    }
}
