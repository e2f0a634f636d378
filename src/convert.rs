//! Conversions between the supported color models. sRGB is the interchange
//! form: every model converts back to sRGB through [`ToRgb`] and every
//! other model is reachable from sRGB, chaining through CIE-XYZ where
//! needed.
//!
//! ```rust
//! use smooth_gradient::{Rgb, ToRgb};
//!
//! let lch = Rgb::new(0.0, 0.0, 1.0, 1.0).to_lch(); // blue in CIE-Lch.
//! let rgb = lch.to_rgb(); // and back to sRGB.
//! ```

use crate::models::{Hsb, Hsl, Lab, Lch, Rgb, ToRgb, Xyz};

impl Rgb {
    /// Convert this color to the CIE-Lab color space.
    pub fn to_lab(&self) -> Lab {
        Lab::from(self.to_xyz())
    }

    /// Convert this color to the cylindrical polar form of CIE-Lab.
    pub fn to_lch(&self) -> Lch {
        self.to_lab().to_lch()
    }

    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        Hsl::from_components(util::rgb_to_hsl(&self.to_components()), self.alpha)
    }

    /// Convert this color to the HSB notation.
    pub fn to_hsb(&self) -> Hsb {
        Hsb::from_components(util::rgb_to_hsb(&self.to_components()), self.alpha)
    }
}

impl Xyz {
    /// Convert this color to the CIE-Lab color space.
    pub fn to_lab(&self) -> Lab {
        Lab::from(*self)
    }

    /// Convert this color to the cylindrical polar form of CIE-Lab.
    pub fn to_lch(&self) -> Lch {
        self.to_lab().to_lch()
    }
}

impl ToRgb for Xyz {
    fn to_rgb(&self) -> Rgb {
        Rgb::from(*self)
    }
}

impl ToRgb for Lab {
    fn to_rgb(&self) -> Rgb {
        Xyz::from(*self).to_rgb()
    }
}

impl ToRgb for Lch {
    fn to_rgb(&self) -> Rgb {
        self.to_lab().to_rgb()
    }
}

impl ToRgb for Hsl {
    fn to_rgb(&self) -> Rgb {
        Rgb::from_components(util::hsl_to_rgb(&self.to_components()), self.alpha)
    }
}

impl ToRgb for Hsb {
    fn to_rgb(&self) -> Rgb {
        Rgb::from_components(util::hsb_to_rgb(&self.to_components()), self.alpha)
    }
}

mod util {
    use crate::color::{Component, Components};

    /// Calculate the hue from RGB components and return it along with the
    /// min and max channel values. An achromatic color (zero delta) has a
    /// hue of 0 by convention.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        };

        (hue, min, max)
    }

    /// Distribute chroma over the RGB channels for the 60 degree sextant
    /// the hue falls in. The lightness offset is not applied yet; a hue
    /// outside [0, 360) falls through to the zero sextant.
    fn sextant_to_rgb(hue: Component, chroma: Component) -> Components {
        let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());

        match hue / 60.0 {
            s if (0.0..1.0).contains(&s) => Components(chroma, x, 0.0),
            s if (1.0..2.0).contains(&s) => Components(x, chroma, 0.0),
            s if (2.0..3.0).contains(&s) => Components(0.0, chroma, x),
            s if (3.0..4.0).contains(&s) => Components(0.0, x, chroma),
            s if (4.0..5.0).contains(&s) => Components(x, 0.0, chroma),
            s if (5.0..6.0).contains(&s) => Components(chroma, 0.0, x),
            _ => Components(0.0, 0.0, 0.0),
        }
    }

    /// Convert from RGB to the HSL notation.
    /// <https://en.wikipedia.org/wiki/HSL_and_HSV>
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (max + min) / 2.0;
        let delta = max - min;

        let saturation = if delta == 0.0 {
            0.0
        } else if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        Components(hue, saturation * 100.0, lightness * 100.0)
    }

    /// Convert from the HSL notation to RGB.
    /// <https://en.wikipedia.org/wiki/HSL_and_HSV>
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        let lightness = lightness / 100.0;
        let saturation = saturation / 100.0;

        if saturation == 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let offset = lightness - chroma / 2.0;

        sextant_to_rgb(hue, chroma).map(|v| v + offset)
    }

    /// Convert from RGB to the HSB notation.
    /// <https://en.wikipedia.org/wiki/HSL_and_HSV>
    pub fn rgb_to_hsb(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let delta = max - min;

        let saturation = if delta == 0.0 || max == 0.0 {
            0.0
        } else {
            delta / max
        };

        Components(hue, saturation * 100.0, max * 100.0)
    }

    /// Convert from the HSB notation to RGB.
    /// <https://en.wikipedia.org/wiki/HSL_and_HSV>
    pub fn hsb_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, brightness) = *from;

        let brightness = brightness / 100.0;
        let saturation = saturation / 100.0;

        let chroma = brightness * saturation;
        let offset = brightness - chroma;

        sextant_to_rgb(hue, chroma).map(|v| v + offset)
    }
}
