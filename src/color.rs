//! Shared scalar and component types used by every color model.

#[cfg(not(feature = "f32"))]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

#[cfg(feature = "f32")]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

/// Represent the three channels that describe any color, without alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}
