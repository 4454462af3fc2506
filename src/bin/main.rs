use clap::{App, Arg};
use config::{Config, File};

use deltabrot::renderer::FractalRenderer;

fn main() {
    let matches = App::new("deltabrot")
        .version("0.1.0")
        .about("Perturbation-based mandelbrot set renderer")
        .arg(
            Arg::new("settings")
                .short('s')
                .long("settings")
                .takes_value(true)
                .help("Sets the settings file to use"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .takes_value(true)
                .help("Sets the output image location"),
        )
        .arg(
            Arg::new("evaluator")
                .short('e')
                .long("evaluator")
                .takes_value(true)
                .help("Evaluator for the left half of the split (direct, delta, series, dual)"),
        )
        .get_matches();

    let mut settings = Config::default();

    if let Some(filename) = matches.value_of("settings") {
        settings
            .merge(File::with_name(filename))
            .expect("settings file is not valid");
    }

    if let Some(output) = matches.value_of("output") {
        settings
            .set("output", output)
            .expect("output location is not valid");
    }

    if let Some(evaluator) = matches.value_of("evaluator") {
        settings
            .set("evaluator", evaluator)
            .expect("evaluator name is not valid");
    }

    let mut renderer = FractalRenderer::new(settings);
    renderer.render();
}
