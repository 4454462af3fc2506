use crate::colouring::ColourMethod;
use crate::math::smooth::smooth_iteration;
use crate::math::{
    DirectEvaluator, DualOrbitEvaluator, EvaluatorKind, Evaluators, PerturbationEvaluator,
    Reference, SeriesEvaluator,
};
use crate::util::image::Image;
use crate::util::{ComplexFixed, PixelData};

use config::Config;
use rayon::prelude::*;
use std::time::Instant;

/// Frame compositor. Maps pixels to plane offsets from the reference point,
/// dispatches each pixel to an evaluator and turns the escape value into a
/// colour. Left of the split line the configured perturbation evaluator
/// runs on (C, dc); right of it the direct evaluator runs on C + dc, which
/// is the comparison view the perturbation output is judged against.
pub struct FractalRenderer {
    image_width: usize,
    image_height: usize,
    zoom: f64,
    centre: ComplexFixed<f64>,
    split: f64,
    evaluator: EvaluatorKind,
    evaluators: Evaluators,
    iteration_division: f32,
    palette_offset: f32,
    output: String,
    image: Image,
}

impl FractalRenderer {
    pub fn new(settings: Config) -> Self {
        let image_width = settings.get_int("image_width").unwrap_or(1000) as usize;
        let image_height = settings.get_int("image_height").unwrap_or(800) as usize;

        // Default location and zoom are a deep minibrot where double
        // precision alone visibly falls apart on the direct half.
        let centre = ComplexFixed::new(
            settings.get_float("centre_real").unwrap_or(-0.7436441),
            settings.get_float("centre_imag").unwrap_or(0.1318255),
        );
        let zoom = settings.get_float("zoom").unwrap_or(1e-6);

        let split = settings.get_float("split").unwrap_or(0.5);

        let evaluator = settings
            .get_str("evaluator")
            .ok()
            .as_deref()
            .map(|name| EvaluatorKind::from_name(name).expect("evaluator name is not valid"))
            .unwrap_or(EvaluatorKind::DeltaOrbit);

        let maximum_iteration = settings.get_int("maximum_iteration").unwrap_or(6000) as usize;

        let evaluators = Evaluators {
            direct: DirectEvaluator::new(
                settings.get_float("direct_escape_radius_sqr").unwrap_or(4.0),
                maximum_iteration,
            ),
            perturbation: PerturbationEvaluator::new(
                settings.get_float("delta_escape_radius_sqr").unwrap_or(4.0),
                maximum_iteration,
            ),
            series: SeriesEvaluator::new(
                settings.get_float("series_escape_radius_sqr").unwrap_or(10.0),
                settings.get_int("series_maximum_iteration").unwrap_or(4000) as usize,
            ),
            dual_orbit: DualOrbitEvaluator::new(
                settings.get_float("dual_escape_radius_sqr").unwrap_or(256.0),
                settings.get_int("dual_maximum_iteration").unwrap_or(900) as usize,
            ),
        };

        FractalRenderer {
            image_width,
            image_height,
            zoom,
            centre,
            split,
            evaluator,
            evaluators,
            iteration_division: settings.get_float("iteration_division").unwrap_or(64.0) as f32,
            palette_offset: settings.get_float("palette_offset").unwrap_or(0.0) as f32,
            output: settings
                .get_str("output")
                .unwrap_or_else(|_| String::from("output.png")),
            image: Image::new(image_width, image_height),
        }
    }

    pub fn render(&mut self) {
        let time = Instant::now();

        let mut reference = Reference::new(self.centre, self.evaluators.perturbation.maximum_iteration);

        if !reference.run() {
            // Precondition violation: the perturbation halves are undefined
            // from the iteration where the reference orbit diverged.
            println!(
                "Warning: reference orbit escaped at iteration {}",
                reference.current_iteration
            );
        }

        println!(
            "{:<14}{:>6} ms (iterations {})",
            "Reference",
            time.elapsed().as_millis(),
            reference.current_iteration
        );

        let time = Instant::now();

        let image_width = self.image_width;
        let image_height = self.image_height;
        let zoom = self.zoom;
        let centre = self.centre;
        let split_x = (self.split * image_width as f64) as usize;
        let evaluator = self.evaluator;
        let evaluators = &self.evaluators;
        let reference = &reference;

        let pixel_data = (0..image_height)
            .into_par_iter()
            .flat_map_iter(move |image_y| {
                (0..image_width).map(move |image_x| {
                    // normalized so the short axis spans -1..1, then scaled
                    // down to a plane offset from the reference point
                    let px = (2.0 * image_x as f64 - image_width as f64) / image_height as f64;
                    let py = (2.0 * image_y as f64 - image_height as f64) / image_height as f64;
                    let dc = ComplexFixed::new(px * zoom, py * zoom);

                    let kind = if image_x < split_x {
                        evaluator
                    } else {
                        EvaluatorKind::Direct
                    };

                    match evaluators.evaluate(kind, centre, dc, Some(reference)) {
                        Some(escape) => PixelData {
                            image_x,
                            image_y,
                            iteration: escape.iteration,
                            smooth: (smooth_iteration(escape) - escape.iteration as f64) as f32,
                            escaped: true,
                        },
                        None => PixelData {
                            image_x,
                            image_y,
                            iteration: 0,
                            smooth: 0.0,
                            escaped: false,
                        },
                    }
                })
            })
            .collect::<Vec<PixelData>>();

        println!("{:<14}{:>6} ms", "Iteration", time.elapsed().as_millis());

        let time = Instant::now();

        ColourMethod::SmoothIteration.run(
            &pixel_data,
            &mut self.image,
            self.iteration_division,
            self.palette_offset,
        );
        self.draw_overlays(split_x);

        println!("{:<14}{:>6} ms", "Colouring", time.elapsed().as_millis());

        let time = Instant::now();
        self.image.save(&self.output);
        println!("{:<14}{:>6} ms", "Saving", time.elapsed().as_millis());
    }

    // Split-line and reference-point markers, drawn over the colour data
    fn draw_overlays(&mut self, split_x: usize) {
        if split_x < self.image_width {
            for image_y in 0..self.image_height {
                self.image.plot(split_x, image_y, 255, 255, 255);
            }
        }

        let marker_radius = (0.01 * self.image_height as f64) as isize + 1;
        let centre_x = (self.image_width / 2) as isize;
        let centre_y = (self.image_height / 2) as isize;

        for dy in -marker_radius..=marker_radius {
            for dx in -marker_radius..=marker_radius {
                let x = centre_x + dx;
                let y = centre_y + dy;

                if dx * dx + dy * dy <= marker_radius * marker_radius
                    && x >= 0
                    && y >= 0
                    && (x as usize) < self.image_width
                    && (y as usize) < self.image_height
                {
                    self.image.plot(x as usize, y as usize, 255, 0, 0);
                }
            }
        }
    }
}
