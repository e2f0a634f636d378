//! Model a color with the HSL notation in the sRGB color space.

use crate::color::Component;

smooth_gradient_macros::gen_color! {
    /// A color specified with the HSL notation in the sRGB color space.
    pub struct Hsl {
        /// The hue component of the color, in degrees.
        hue: Component,
        /// The saturation component of the color, in the range [0, 100].
        saturation: Component,
        /// The lightness component of the color, in the range [0, 100].
        lightness: Component,
    }
}
