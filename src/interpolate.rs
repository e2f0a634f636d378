//! Linear and circular interpolation over scalar color channels.

use num_traits::Float;

use crate::color::Component;
use crate::math::normalize_hue;

/// Produce the inclusive sequence of `count + 2` evenly spaced values over
/// `[from, to]`: the `from` endpoint, `count` intermediates and the `to`
/// endpoint.
///
/// With a `count` of 0 the result is exactly `[from, to]`. Equal endpoints
/// produce `count + 2` repeats of `from`.
pub fn interpolate<T: Float>(from: T, to: T, count: usize) -> Vec<T> {
    if count == 0 {
        return vec![from, to];
    }

    if from == to {
        return vec![from; count + 2];
    }

    // `count` is a small number of intermediate colors, so the casts are
    // always exact.
    let step = (to - from) / T::from(count + 1).unwrap();

    (0..count + 2)
        .map(|i| from + step * T::from(i).unwrap())
        .collect()
}

/// Interpolate between two angles in degrees, producing `count + 2` values
/// that traverse the shorter of the two arcs between `from` and `to`. Both
/// arcs being exactly 180 degrees resolves to the increasing direction.
pub fn interpolate_circular(from: Component, to: Component, count: usize) -> Vec<Component> {
    fn wrap(values: Vec<Component>) -> Vec<Component> {
        values.into_iter().map(normalize_hue).collect()
    }

    let clockwise = (to > from && to - from <= 180.0) || (to < from && from - to > 180.0);

    match (to > from, clockwise) {
        // The shortest arc is the direct increasing path.
        (true, true) => interpolate(from, to, count),
        // The arc crosses the 0/360 boundary going up.
        (false, true) => wrap(interpolate(from, to + 360.0, count)),
        // The arc crosses the 0/360 boundary going down.
        (true, false) => wrap(interpolate(from, to - 360.0, count)),
        // The shortest arc is the direct decreasing path.
        (false, false) => interpolate(from, to, count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_values() {
        assert_eq!(interpolate(0.0, 100.0, 0), [0.0, 100.0]);
        assert_eq!(interpolate(0.0, 100.0, 1), [0.0, 50.0, 100.0]);
        assert_eq!(interpolate(0.0, 100.0, 3), [0.0, 25.0, 50.0, 75.0, 100.0]);

        assert_eq!(interpolate(100.0, 0.0, 0), [100.0, 0.0]);
        assert_eq!(interpolate(100.0, 0.0, 1), [100.0, 50.0, 0.0]);
        assert_eq!(interpolate(100.0, 0.0, 3), [100.0, 75.0, 50.0, 25.0, 0.0]);
    }

    #[test]
    fn linear_equal_endpoints_repeat() {
        assert_eq!(interpolate(5.0, 5.0, 0), [5.0, 5.0]);
        assert_eq!(interpolate(5.0, 5.0, 3), [5.0; 5]);
    }

    #[test]
    fn linear_length_and_endpoints() {
        for count in [0, 1, 2, 7, 100] {
            let values = interpolate(-1.5, 2.25, count);
            assert_eq!(values.len(), count + 2);
            assert_eq!(values[0], -1.5);
            assert!((values[count + 1] - 2.25).abs() < 1.0e-9);
        }
    }

    #[test]
    fn linear_is_monotonic() {
        let values = interpolate(0.25, 0.75, 9);
        for pair in values.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn circular_values() {
        assert_eq!(interpolate_circular(0.0, 90.0, 0), [0.0, 90.0]);
        assert_eq!(interpolate_circular(0.0, 90.0, 1), [0.0, 45.0, 90.0]);
        assert_eq!(interpolate_circular(0.0, 270.0, 1), [0.0, 315.0, 270.0]);
        assert_eq!(interpolate_circular(0.0, 180.0, 1), [0.0, 90.0, 180.0]);
        assert_eq!(interpolate_circular(90.0, 0.0, 1), [90.0, 45.0, 0.0]);
        assert_eq!(interpolate_circular(270.0, 0.0, 1), [270.0, 315.0, 0.0]);
    }

    #[test]
    fn circular_equal_endpoints_repeat() {
        assert_eq!(interpolate_circular(123.0, 123.0, 2), [123.0; 4]);
    }

    #[test]
    fn circular_takes_the_shorter_arc() {
        // Consecutive steps never span more than the tie arc of 180
        // degrees in total.
        for &(from, to) in &[(10.0, 350.0), (350.0, 10.0), (0.0, 181.0), (200.0, 10.0)] {
            let values = interpolate_circular(from, to, 8);

            let mut span: Component = 0.0;
            for pair in values.windows(2) {
                let diff = (pair[1] - pair[0]).abs();
                span += diff.min(360.0 - diff);
            }

            assert!(span <= 180.0 + 1.0e-9, "{from} -> {to} spans {span}");
        }
    }
}
