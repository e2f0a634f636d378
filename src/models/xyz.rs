//! Model a color in the CIE-XYZ color space.

use crate::color::{Component, Components};

/// The D65 reference white used by all CIE conversions in this crate.
pub(crate) const WHITE_POINT: Components = Components(0.95047, 1.0, 1.08883);

smooth_gradient_macros::gen_color! {
    /// A color specified in the CIE-XYZ color space, relative to the D65
    /// reference white.
    pub struct Xyz {
        /// The X component of the color.
        x: Component,
        /// The Y component of the color.
        y: Component,
        /// The Z component of the color.
        z: Component,
    }
}
