/// Check for approximate equality between two components. The default
/// tolerance covers sRGB channels; angular and [0, 100] scaled channels
/// pass a wider epsilon explicitly.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        $crate::assert_component_eq!($actual, $expected, 0.01);
    }};
    ($actual:expr,$expected:expr,$epsilon:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = $epsilon);
    }};
}
