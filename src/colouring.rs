use crate::util::image::Image;
use crate::util::PixelData;

use colorgrad::{BlendMode, Color, CustomGradient, Interpolation};

pub enum ColourMethod {
    SmoothIteration,
}

impl ColourMethod {
    pub fn run(
        &self,
        pixels: &[PixelData],
        image: &mut Image,
        iteration_division: f32,
        palette_offset: f32,
    ) {
        let palette = generate_default_palette();

        match self {
            ColourMethod::SmoothIteration => {
                for pixel in pixels {
                    let (red, green, blue) = if !pixel.escaped {
                        (0, 0, 0)
                    } else {
                        let temp = palette.len() as f32
                            * ((pixel.iteration as f32 + pixel.smooth) / iteration_division
                                + palette_offset)
                                .rem_euclid(1.0);

                        let pos1 = (temp.floor() as usize) % palette.len();
                        let pos2 = (pos1 + 1) % palette.len();

                        let (r, g, b, _) = palette[pos1]
                            .interpolate_rgb(&palette[pos2], temp.fract() as f64)
                            .rgba_u8();

                        (r, g, b)
                    };

                    image.plot(pixel.image_x, pixel.image_y, red, green, blue);
                }
            }
        }
    }
}

pub fn generate_default_palette() -> Vec<Color> {
    let colours = [
        (0u8, 7u8, 100u8),
        (32, 107, 203),
        (237, 255, 255),
        (255, 170, 0),
        (0, 2, 0),
    ]
    .iter()
    .map(|&(r, g, b)| Color::from_rgb_u8(r, g, b))
    .collect::<Vec<Color>>();

    let palette_generator = CustomGradient::new()
        .colors(&colours)
        .interpolation(Interpolation::CatmullRom)
        .mode(BlendMode::Oklab)
        .build()
        .expect("default palette is not valid");

    palette_generator.colors(colours.len() * 64)
}
