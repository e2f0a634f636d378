//! Model a color with the HSB (also called HSV) notation in the sRGB color
//! space.

use crate::color::Component;

smooth_gradient_macros::gen_color! {
    /// A color specified with the HSB notation in the sRGB color space.
    pub struct Hsb {
        /// The hue component of the color, in degrees.
        hue: Component,
        /// The saturation component of the color, in the range [0, 100].
        saturation: Component,
        /// The brightness component of the color, in the range [0, 100].
        brightness: Component,
    }
}
