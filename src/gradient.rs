//! Generate perceptually smooth gradients between two colors.
//!
//! A gradient is built by decomposing both endpoints in the interpolation
//! color space, interpolating every channel independently and recomposing
//! each step. Hue channels interpolate circularly along the shortest arc,
//! all other channels (including alpha) linearly.

use crate::{
    interpolate::{interpolate, interpolate_circular},
    models::{Hsb, Hsl, Lab, Lch, Rgb, ToRgb, Xyz},
};

/// The color space in which the gradient channels are interpolated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interpolation {
    /// Interpolate lightness, chroma and hue in the cylindrical polar form
    /// of CIE-Lab.
    #[default]
    Hcl,
    /// Interpolate in the HSL notation of the sRGB color space.
    Hsl,
    /// Interpolate in the HSB notation of the sRGB color space.
    Hsb,
}

/// The number of intermediate colors to generate between the endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Precision {
    /// 1 intermediate color.
    Low,
    /// 3 intermediate colors.
    LowMedium,
    /// 5 intermediate colors.
    #[default]
    Medium,
    /// 7 intermediate colors.
    MediumHigh,
    /// 9 intermediate colors.
    High,
    /// Any other number of intermediate colors.
    Custom(usize),
}

impl Precision {
    /// Return the number of intermediate colors this precision generates.
    pub fn count(self) -> usize {
        match self {
            Self::Low => 1,
            Self::LowMedium => 3,
            Self::Medium => 5,
            Self::MediumHigh => 7,
            Self::High => 9,
            Self::Custom(count) => count,
        }
    }
}

impl From<usize> for Precision {
    fn from(count: usize) -> Self {
        Self::Custom(count)
    }
}

/// Generate a smooth gradient between two sRGB colors.
///
/// The result holds `precision.count() + 2` colors: the `from` endpoint,
/// the intermediate colors and the `to` endpoint.
///
/// ```rust
/// use smooth_gradient::{generate, Interpolation, Precision, Rgb};
///
/// let gradient = generate(
///     Rgb::new(1.0, 0.0, 0.0, 1.0),
///     Rgb::new(0.0, 0.0, 1.0, 1.0),
///     Interpolation::Hcl,
///     Precision::Medium,
/// );
/// assert_eq!(gradient.len(), 7);
/// ```
pub fn generate(
    from: Rgb,
    to: Rgb,
    interpolation: Interpolation,
    precision: impl Into<Precision>,
) -> Vec<Rgb> {
    interpolate_colors(from, to, precision.into().count(), interpolation)
}

/// Generate a smooth gradient between two colors in the cylindrical polar
/// form of CIE-Lab. With [`Interpolation::Hcl`] the channels interpolate
/// natively, other modes round-trip through sRGB.
pub fn generate_lch(
    from: Lch,
    to: Lch,
    interpolation: Interpolation,
    precision: impl Into<Precision>,
) -> Vec<Lch> {
    let count = precision.into().count();
    match interpolation {
        Interpolation::Hcl => interpolate_lch(from, to, count),
        _ => interpolate_colors(from.to_rgb(), to.to_rgb(), count, interpolation)
            .into_iter()
            .map(|color| color.to_lch())
            .collect(),
    }
}

/// Generate a smooth gradient between two colors in the HSL notation. With
/// [`Interpolation::Hsl`] the channels interpolate natively, other modes
/// round-trip through sRGB.
pub fn generate_hsl(
    from: Hsl,
    to: Hsl,
    interpolation: Interpolation,
    precision: impl Into<Precision>,
) -> Vec<Hsl> {
    let count = precision.into().count();
    match interpolation {
        Interpolation::Hsl => interpolate_hsl(from, to, count),
        _ => interpolate_colors(from.to_rgb(), to.to_rgb(), count, interpolation)
            .into_iter()
            .map(|color| color.to_hsl())
            .collect(),
    }
}

/// Generate a smooth gradient between two colors in the HSB notation. With
/// [`Interpolation::Hsb`] the channels interpolate natively, other modes
/// round-trip through sRGB.
pub fn generate_hsb(
    from: Hsb,
    to: Hsb,
    interpolation: Interpolation,
    precision: impl Into<Precision>,
) -> Vec<Hsb> {
    let count = precision.into().count();
    match interpolation {
        Interpolation::Hsb => interpolate_hsb(from, to, count),
        _ => interpolate_colors(from.to_rgb(), to.to_rgb(), count, interpolation)
            .into_iter()
            .map(|color| color.to_hsb())
            .collect(),
    }
}

/// Generate a smooth gradient between two CIE-Lab colors. Lab has no
/// circular channel of its own, so the gradient always round-trips through
/// sRGB.
pub fn generate_lab(
    from: Lab,
    to: Lab,
    interpolation: Interpolation,
    precision: impl Into<Precision>,
) -> Vec<Lab> {
    interpolate_colors(from.to_rgb(), to.to_rgb(), precision.into().count(), interpolation)
        .into_iter()
        .map(|color| color.to_lab())
        .collect()
}

/// Generate a smooth gradient between two CIE-XYZ colors. XYZ has no
/// circular channel of its own, so the gradient always round-trips through
/// sRGB.
pub fn generate_xyz(
    from: Xyz,
    to: Xyz,
    interpolation: Interpolation,
    precision: impl Into<Precision>,
) -> Vec<Xyz> {
    interpolate_colors(from.to_rgb(), to.to_rgb(), precision.into().count(), interpolation)
        .into_iter()
        .map(|color| color.to_xyz())
        .collect()
}

/// Interpolate two sRGB colors in the given color space and recompose
/// every step back into sRGB.
fn interpolate_colors(from: Rgb, to: Rgb, count: usize, interpolation: Interpolation) -> Vec<Rgb> {
    match interpolation {
        Interpolation::Hcl => interpolate_lch(from.to_lch(), to.to_lch(), count)
            .into_iter()
            .map(|color| color.to_rgb())
            .collect(),
        Interpolation::Hsl => interpolate_hsl(from.to_hsl(), to.to_hsl(), count)
            .into_iter()
            .map(|color| color.to_rgb())
            .collect(),
        Interpolation::Hsb => interpolate_hsb(from.to_hsb(), to.to_hsb(), count)
            .into_iter()
            .map(|color| color.to_rgb())
            .collect(),
    }
}

fn interpolate_lch(from: Lch, to: Lch, count: usize) -> Vec<Lch> {
    let lightness = interpolate(from.lightness, to.lightness, count);
    let chroma = interpolate(from.chroma, to.chroma, count);
    let hue = interpolate_circular(from.hue, to.hue, count);
    let alpha = interpolate(from.alpha, to.alpha, count);

    zip4(lightness, chroma, hue, alpha)
        .map(|(lightness, chroma, hue, alpha)| Lch::new(lightness, chroma, hue, alpha))
        .collect()
}

fn interpolate_hsl(from: Hsl, to: Hsl, count: usize) -> Vec<Hsl> {
    let hue = interpolate_circular(from.hue, to.hue, count);
    let saturation = interpolate(from.saturation, to.saturation, count);
    let lightness = interpolate(from.lightness, to.lightness, count);
    let alpha = interpolate(from.alpha, to.alpha, count);

    zip4(hue, saturation, lightness, alpha)
        .map(|(hue, saturation, lightness, alpha)| Hsl::new(hue, saturation, lightness, alpha))
        .collect()
}

fn interpolate_hsb(from: Hsb, to: Hsb, count: usize) -> Vec<Hsb> {
    let hue = interpolate_circular(from.hue, to.hue, count);
    let saturation = interpolate(from.saturation, to.saturation, count);
    let brightness = interpolate(from.brightness, to.brightness, count);
    let alpha = interpolate(from.alpha, to.alpha, count);

    zip4(hue, saturation, brightness, alpha)
        .map(|(hue, saturation, brightness, alpha)| Hsb::new(hue, saturation, brightness, alpha))
        .collect()
}

fn zip4<A, B, C, D>(
    a: Vec<A>,
    b: Vec<B>,
    c: Vec<C>,
    d: Vec<D>,
) -> impl Iterator<Item = (A, B, C, D)> {
    a.into_iter()
        .zip(b)
        .zip(c.into_iter().zip(d))
        .map(|((a, b), (c, d))| (a, b, c, d))
}
