//! Models for the CIE-Lab color space in its rectangular orthogonal form
//! and its cylindrical polar form.

use crate::{
    color::{Component, Components},
    math::normalize_hue,
    models::xyz::{Xyz, WHITE_POINT},
};

const EPSILON: Component = 0.008856;
// kappa / 116 and 16 / 116 from the CIE-Lab companding function.
const KAPPA_116: Component = 7.787036;
const OFFSET_116: Component = 0.1379310;

smooth_gradient_macros::gen_color! {
    /// A color specified in the CIE-Lab color space with the rectangular
    /// orthogonal form.
    pub struct Lab {
        /// The lightness component.
        lightness: Component,
        /// The a component.
        a: Component,
        /// The b component.
        b: Component,
    }
}

smooth_gradient_macros::gen_color! {
    /// A color specified in the CIE-Lab color space with the cylindrical
    /// polar form.
    pub struct Lch {
        /// The lightness component.
        lightness: Component,
        /// The chroma component.
        chroma: Component,
        /// The hue component, in degrees.
        hue: Component,
    }
}

impl Lab {
    /// Convert this rectangular orthogonal form into its cylindrical polar
    /// form. An achromatic color (zero chroma) has a hue of 0.
    pub fn to_lch(&self) -> Lch {
        let chroma = (self.a * self.a + self.b * self.b).sqrt();
        let hue = normalize_hue(self.b.atan2(self.a).to_degrees());

        Lch::new(self.lightness, chroma, hue, self.alpha)
    }
}

impl Lch {
    /// Convert this cylindrical polar form into its rectangular orthogonal
    /// form.
    pub fn to_lab(&self) -> Lab {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Lab::new(self.lightness, a, b, self.alpha)
    }
}

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        let scaled = Components(
            value.x / WHITE_POINT.0,
            value.y / WHITE_POINT.1,
            value.z / WHITE_POINT.2,
        );

        let Components(f0, f1, f2) = scaled.map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                KAPPA_116 * v + OFFSET_116
            }
        });

        let lightness = 116.0 * f1 - 16.0;
        let a = 500.0 * (f0 - f1);
        let b = 200.0 * (f1 - f2);

        Lab::new(lightness, a, b, value.alpha)
    }
}

impl From<Lab> for Xyz {
    fn from(value: Lab) -> Self {
        let f1 = (value.lightness + 16.0) / 116.0;
        let f0 = f1 + value.a / 500.0;
        let f2 = f1 - value.b / 200.0;

        let Components(x, y, z) = Components(f0, f1, f2).map(|v| {
            let cubed = v * v * v;
            if cubed > EPSILON {
                cubed
            } else {
                (v - OFFSET_116) / KAPPA_116
            }
        });

        Xyz::new(
            x * WHITE_POINT.0,
            y * WHITE_POINT.1,
            z * WHITE_POINT.2,
            value.alpha,
        )
    }
}
