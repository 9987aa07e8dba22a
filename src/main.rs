use std::io;
use std::path::PathBuf;

use fractal_viewer::{
    DEFAULT_CONFIG_PATH, FractalKinds, FrameController, Palette, PpmFilePresenter,
    load_colour_config, prompt_fractal_choice,
};

fn output_path(fractal: FractalKinds) -> PathBuf {
    let stem = fractal.display_name().to_lowercase().replace(' ', "_");
    PathBuf::from("output").join(format!("{}.ppm", stem))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let fractal = prompt_fractal_choice(&mut io::stdin().lock(), &mut io::stdout().lock())?;
    let palette = Palette::build(load_colour_config(DEFAULT_CONFIG_PATH));
    let presenter = PpmFilePresenter::new(output_path(fractal));
    let mut controller = FrameController::new(presenter, fractal, palette);

    controller.render()?;

    Ok(())
}
