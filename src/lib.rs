//! smooth-gradient generates evenly spaced intermediate colors between two
//! endpoint colors, interpolating channels in a perceptual color space
//! instead of raw sRGB so the resulting gradient looks smooth.
//!
//! ```rust
//! use smooth_gradient::{generate, Interpolation, Precision, Rgb};
//!
//! let gradient = generate(
//!     Rgb::new(0.12, 0.0, 0.36, 1.0),
//!     Rgb::new(1.0, 0.71, 0.42, 1.0),
//!     Interpolation::Hcl,
//!     Precision::Medium,
//! );
//! assert_eq!(gradient.len(), 7);
//! ```

#![deny(missing_docs)]

mod color;
mod convert;
mod gradient;
mod interpolate;
mod math;
mod models;
#[cfg(test)]
mod test;

pub use color::{Component, Components};
pub use gradient::{
    generate, generate_hsb, generate_hsl, generate_lab, generate_lch, generate_xyz, Interpolation,
    Precision,
};
pub use interpolate::{interpolate, interpolate_circular};
pub use models::{Hsb, Hsl, Lab, Lch, Rgb, ToRgb, Xyz};
