//! Hemispheric light
//!
//! Simulates sky light: surfaces facing `direction` get the diffuse color,
//! surfaces facing away get the ground color, and everything in between is
//! blended by `dot(normal, direction) * 0.5 + 0.5`.

use rig3d_math::Vec3;

/// Ambient light from a sky direction
#[derive(Clone, Debug, PartialEq)]
pub struct HemisphericLight {
    pub name: String,
    /// Points toward the sky; need not be normalized
    pub direction: Vec3,
    /// Sky color (RGB)
    pub diffuse: [f32; 3],
    /// Color reflected from the ground (RGB)
    pub ground_color: [f32; 3],
    pub intensity: f32,
}

impl HemisphericLight {
    /// Create a white light pointing at `direction`
    pub fn new(name: impl Into<String>, direction: Vec3) -> Self {
        Self {
            name: name.into(),
            direction,
            diffuse: [1.0, 1.0, 1.0],
            ground_color: [0.0, 0.0, 0.0],
            intensity: 1.0,
        }
    }

    /// Builder: set intensity
    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    /// Normalized sky direction (+Y when `direction` is zero)
    pub fn direction(&self) -> Vec3 {
        self.direction.try_normalize().unwrap_or(Vec3::Y)
    }

    /// Light arriving at a surface with the given normal
    ///
    /// Mirrors the fragment shader so lighting can be checked on the CPU.
    pub fn irradiance(&self, normal: Vec3) -> [f32; 3] {
        let n = normal.try_normalize().unwrap_or(Vec3::Y);
        let t = n.dot(self.direction()) * 0.5 + 0.5;
        let mut out = [0.0; 3];
        for (i, c) in out.iter_mut().enumerate() {
            *c = (self.ground_color[i] + (self.diffuse[i] - self.ground_color[i]) * t) * self.intensity;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_direction_normalized() {
        let light = HemisphericLight::new("light", Vec3::new(0.0, 100.0, 0.0));
        assert_eq!(light.direction(), Vec3::Y);
        assert_eq!(light.direction, Vec3::new(0.0, 100.0, 0.0));
    }

    #[test]
    fn test_zero_direction_falls_back_to_up() {
        let light = HemisphericLight::new("light", Vec3::ZERO);
        assert_eq!(light.direction(), Vec3::Y);
    }

    #[test]
    fn test_irradiance_blend() {
        let light = HemisphericLight::new("light", Vec3::Y).with_intensity(0.5);
        assert!((light.irradiance(Vec3::Y)[0] - 0.5).abs() < EPSILON);
        assert!(light.irradiance(Vec3::NEG_Y)[1].abs() < EPSILON);
        assert!((light.irradiance(Vec3::X)[2] - 0.25).abs() < EPSILON);
    }
}
