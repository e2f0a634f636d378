//! Value models for each of the supported color spaces.

mod hsb;
mod hsl;
mod lab;
mod rgb;
mod xyz;

pub use hsb::Hsb;
pub use hsl::Hsl;
pub use lab::{Lab, Lch};
pub use rgb::Rgb;
pub use xyz::Xyz;

/// A trait implemented for color models that can be converted back to the
/// sRGB interchange form.
pub trait ToRgb {
    /// Convert this color to sRGB.
    fn to_rgb(&self) -> Rgb;
}
