use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use num_complex::Complex64;

use fractal_plotter::{
    DEFAULT_GAMMA, DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_MULTIPLICITY,
    DEFAULT_OUTPUT_PATH, DEFAULT_PLOT_WIDTH, DEFAULT_WIDTH, FractalKind, GradientKind,
    ImageFilePresenter, PlotConfig, PlotController, load_gradient,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Palette {
    Flame,
    BlackToWhite,
}

impl From<Palette> for GradientKind {
    fn from(palette: Palette) -> Self {
        match palette {
            Palette::Flame => GradientKind::Flame,
            Palette::BlackToWhite => GradientKind::BlackToWhite,
        }
    }
}

/// Sizes and iteration counts take the absolute value of what is given.
fn parse_magnitude(s: &str) -> Result<u32, String> {
    let value: i64 = s.parse().map_err(|e| format!("{e}"))?;
    u32::try_from(value.unsigned_abs()).map_err(|_| format!("{s} is out of range"))
}

/// Plots the Mandelbrot set or a Julia set to an image file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Output image, format taken from the extension
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
    /// Gradient image, only its first row is used
    #[arg(short, long)]
    gradient: Option<PathBuf>,
    /// Built-in gradient used when no gradient image is given
    #[arg(long, value_enum, default_value_t = Palette::Flame)]
    palette: Palette,
    /// Real part of the plot centre
    #[arg(short = 'x', long, default_value_t = 0.0, allow_negative_numbers = true)]
    center_x: f64,
    /// Imaginary part of the plot centre
    #[arg(short = 'y', long, default_value_t = 0.0, allow_negative_numbers = true)]
    center_y: f64,
    /// Width of the plot in the complex plane
    #[arg(short = 'p', long, default_value_t = DEFAULT_PLOT_WIDTH, allow_negative_numbers = true)]
    plot_width: f64,
    /// Exponent n of z^n + c
    #[arg(short, long, default_value_t = DEFAULT_MULTIPLICITY, allow_negative_numbers = true)]
    multiplicity: f64,
    /// Gamma applied before gradient lookup
    #[arg(short = 'G', long, default_value_t = DEFAULT_GAMMA, allow_negative_numbers = true)]
    gamma: f64,
    /// Disable anti-aliasing (smoothed colouring)
    #[arg(short = 'a', long)]
    no_anti_aliasing: bool,
    /// Maximum number of iterations
    #[arg(short, long, default_value_t = DEFAULT_MAX_ITERATIONS, value_parser = parse_magnitude, allow_negative_numbers = true)]
    iterations: u32,
    /// Output width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH, value_parser = parse_magnitude, allow_negative_numbers = true)]
    width: u32,
    /// Output height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT, value_parser = parse_magnitude, allow_negative_numbers = true)]
    height: u32,
    /// Plot a Julia set instead of the Mandelbrot set
    #[arg(short, long)]
    julia: bool,
    /// Real part of the Julia constant
    #[arg(short = 'u', long, default_value_t = 0.0, allow_negative_numbers = true)]
    julia_u: f64,
    /// Imaginary part of the Julia constant
    #[arg(short = 'v', long, default_value_t = 0.0, allow_negative_numbers = true)]
    julia_v: f64,
    /// Compute on a single thread
    #[arg(long)]
    serial: bool,
}

impl Args {
    fn into_config(self) -> PlotConfig {
        let fractal = if self.julia {
            FractalKind::Julia {
                c: Complex64::new(self.julia_u, self.julia_v),
            }
        } else {
            FractalKind::Mandelbrot
        };

        PlotConfig {
            width: self.width,
            height: self.height,
            plot_width: self.plot_width,
            center: Complex64::new(self.center_x, self.center_y),
            multiplicity: self.multiplicity,
            max_iterations: self.iterations,
            anti_aliasing: !self.no_anti_aliasing,
            fractal,
            gamma: self.gamma,
            gradient_path: self.gradient,
            gradient_kind: self.palette.into(),
            output_path: self.output,
            parallel: !self.serial,
        }
    }
}

fn log_parameters(config: &PlotConfig) {
    log::info!("Set parameters:");
    log::info!("  Output file:      {}", config.output_path.display());
    match &config.gradient_path {
        Some(path) => log::info!("  Gradient file:    {}", path.display()),
        None => log::info!("  Gradient:         {}", config.gradient_kind),
    }
    log::info!("  Center:           {} + {}i", config.center.re, config.center.im);
    log::info!("  Plot width:       {}", config.plot_width);
    log::info!("  Multiplicity:     {}", config.multiplicity);
    log::info!("  Gamma:            {}", config.gamma);
    log::info!("  Anti-aliasing:    {}", config.anti_aliasing);
    log::info!("  Iterations:       {}", config.max_iterations);
    log::info!("  Resolution:       {}x{}", config.width, config.height);
    log::info!("  Fractal:          {}", config.fractal);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config();
    log_parameters(&config);

    let gradient = match &config.gradient_path {
        Some(path) => load_gradient(path)?,
        None => config.gradient_kind.gradient(),
    };

    let mut controller = PlotController::new(config, ImageFilePresenter::new())?;
    controller.run(gradient)?;

    Ok(())
}
