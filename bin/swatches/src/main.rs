use image::{Rgba, RgbaImage};
use smooth_gradient::{generate, Component, Interpolation, Rgb};

const WIDTH: u32 = 1000;
const HEIGHT_PER_MODE: u32 = 100;

fn main() {
    let from = Rgb::new(0.12, 0.0, 0.36, 1.0);
    let to = Rgb::new(1.0, 0.71, 0.42, 1.0);

    let modes = [Interpolation::Hcl, Interpolation::Hsl, Interpolation::Hsb];

    // One generated color per pixel column.
    let ramps = modes.map(|mode| generate(from, to, mode, WIDTH as usize - 2));

    let mut img = RgbaImage::new(WIDTH, modes.len() as u32 * HEIGHT_PER_MODE);

    for (band, ramp) in ramps.iter().enumerate() {
        for (x, color) in ramp.iter().enumerate() {
            let pixel = Rgba([
                to_channel(color.red),
                to_channel(color.green),
                to_channel(color.blue),
                to_channel(color.alpha),
            ]);

            for y in 0..HEIGHT_PER_MODE {
                img.put_pixel(x as u32, band as u32 * HEIGHT_PER_MODE + y, pixel);
            }
        }
    }

    img.save("out.png").expect("could not write image to out.png");
}

fn to_channel(value: Component) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
