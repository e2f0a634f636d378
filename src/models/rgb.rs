//! Model a color in the sRGB color space.

use crate::{
    color::{Component, Components},
    math::{transform, transform_3x3, Transform},
    models::xyz::Xyz,
};

smooth_gradient_macros::gen_color! {
    /// A color specified in the sRGB color space.
    pub struct Rgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

/// Apply the sRGB transfer function, mapping linear-light values to gamma
/// encoded values. The sign of negative values is preserved.
fn to_gamma_encoded(from: &Components) -> Components {
    from.map(|value| {
        let abs = value.abs();

        if abs <= 0.0031308 {
            12.92 * value
        } else {
            value.signum() * (1.055 * abs.powf(1.0 / 2.4) - 0.055)
        }
    })
}

/// Remove the sRGB transfer function, mapping gamma encoded values to
/// linear-light values. The sign of negative values is preserved.
fn to_linear_light(from: &Components) -> Components {
    from.map(|value| {
        let abs = value.abs();

        if abs <= 0.04045 {
            value / 12.92
        } else {
            value.signum() * ((abs + 0.055) / 1.055).powf(2.4)
        }
    })
}

impl Rgb {
    /// Convert this color to the CIE-XYZ color space.
    pub fn to_xyz(&self) -> Xyz {
        #[rustfmt::skip]
        const TO_XYZ: Transform = transform_3x3(
            0.4124564, 0.2126729, 0.0193339,
            0.3575761, 0.7151522, 0.1191920,
            0.1804375, 0.0721750, 0.9503041,
        );

        let linear = to_linear_light(&self.to_components());
        let Components(x, y, z) = transform(&TO_XYZ, linear);
        Xyz::new(x, y, z, self.alpha)
    }
}

impl From<Xyz> for Rgb {
    fn from(value: Xyz) -> Self {
        #[rustfmt::skip]
        const FROM_XYZ: Transform = transform_3x3(
             3.2404542, -0.9692660,  0.0556434,
            -1.5371385,  1.8760108, -0.2040259,
            -0.4985314,  0.0415560,  1.0572252,
        );

        let linear = transform(&FROM_XYZ, value.to_components());
        let Components(red, green, blue) = to_gamma_encoded(&linear);
        Self::new(red, green, blue, value.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn white_maps_to_the_reference_white() {
        let white = Rgb::new(1.0, 1.0, 1.0, 1.0).to_xyz();
        assert_component_eq!(white.x, 0.95047, 1.0e-6);
        assert_component_eq!(white.y, 1.0, 1.0e-6);
        assert_component_eq!(white.z, 1.08883, 1.0e-6);
    }

    #[test]
    fn primaries_map_to_the_matrix_columns() {
        let red = Rgb::new(1.0, 0.0, 0.0, 1.0).to_xyz();
        assert_component_eq!(red.x, 0.4124564, 1.0e-6);
        assert_component_eq!(red.y, 0.2126729, 1.0e-6);
        assert_component_eq!(red.z, 0.0193339, 1.0e-6);

        let blue = Rgb::new(0.0, 0.0, 1.0, 1.0).to_xyz();
        assert_component_eq!(blue.x, 0.1804375, 1.0e-6);
        assert_component_eq!(blue.y, 0.0721750, 1.0e-6);
        assert_component_eq!(blue.z, 0.9503041, 1.0e-6);
    }

    #[test]
    fn xyz_round_trip() {
        let source = Rgb::new(0.823529, 0.411765, 0.117647, 1.0);
        let back = Rgb::from(source.to_xyz());
        assert_component_eq!(back.red, source.red, 1.0e-6);
        assert_component_eq!(back.green, source.green, 1.0e-6);
        assert_component_eq!(back.blue, source.blue, 1.0e-6);
        assert_component_eq!(back.alpha, source.alpha, 1.0e-6);
    }

    #[test]
    fn companding_preserves_the_sign_of_negative_channels() {
        let out = Rgb::new(-0.5, 0.0, 0.5, 1.0).to_xyz();
        let back = Rgb::from(out);
        assert_component_eq!(back.red, -0.5, 1.0e-6);
        assert_component_eq!(back.blue, 0.5, 1.0e-6);
    }
}
