use std::io;

use fractal_viewer::{
    DEFAULT_CONFIG_PATH, Palette, load_colour_config, prompt_fractal_choice, run_gui,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let fractal = prompt_fractal_choice(&mut io::stdin().lock(), &mut io::stdout().lock())?;
    let palette = Palette::build(load_colour_config(DEFAULT_CONFIG_PATH));

    run_gui(fractal, palette)
}
