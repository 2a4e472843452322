#[macro_use]
extern crate log;
extern crate custom_error;

pub mod geometry;
pub mod materials;
pub mod objects;
pub mod render;
pub mod scene;
pub mod scenes;

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use custom_error::custom_error;
use env_logger::Env;

use rt_core::models::image::Image;
use rt_core::models::io::{ImageWriter, ImageWriterOptions};
use rt_core::models::pixel::Pixel;
use rt_core::utils::print_intro;
use bmp_support::{pixels_per_meter_from_ppi, BMPWriter, PIXELS_PER_METER_OPTION};

use render::{basic::BasicRender, normals::NormalsRender, render::Render};
use scenes::{demo::DemoSceneProvider, provider::SceneProvider};

const DEFAULT_LOGGING_LEVEL: &str = "info";

const OUTPUT_WIDTH: usize = 1920;
const OUTPUT_HEIGHT: usize = 1080;
const OUTPUT_PPI: u32 = 80;
const BACKGROUND: Pixel = Pixel::from_rgb(0, 0, 0);

custom_error! {pub RtError
    FailedToRender {description: String} = "Failed to render scene: {description}",
    FailedToEncode {description: String} = "Failed to encode image: {description}",
    FailedToOpen {path: String, description: String} = "Failed to open the output file {path}: {description}",
    FailedToSave {path: String, description: String} = "Failed to save result image to {path}: {description}",
}

/// Renders a single lit sphere into a bitmap file.
#[derive(Parser, Debug)]
#[command(name = "rt", version)]
struct Cli {

    /// Path of the .bmp file to write
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Color surfaces by their normal instead of lighting them
    #[arg(long)]
    normals: bool,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();
    print_intro();

    if let Err(err) = render_scene(&cli) {
        error!("{}", err);
        eprintln!("rt: {}", err);
        process::exit(1);
    }

    info!("done");
}

fn render_scene(cli: &Cli) -> Result<(), RtError> {
    let scene_provider: Box<dyn SceneProvider> = Box::new(DemoSceneProvider::new());
    let render: Box<dyn Render> = if cli.normals {
        Box::new(NormalsRender::new())
    } else {
        Box::new(BasicRender::new())
    };
    let output_writer: Box<dyn ImageWriter> = Box::new(BMPWriter::new());

    let mut output = Image::new(OUTPUT_WIDTH, OUTPUT_HEIGHT);
    output.fill(BACKGROUND);
    let scene = scene_provider.scene(output.width, output.height);

    info!("rendering {}x{} image", output.width, output.height);
    render.render(&scene, &mut output).map_err(|err| RtError::FailedToRender {
        description: err.to_string(),
    })?;

    info!("saving rendered image to {}", cli.output.display());
    let options = ImageWriterOptions::default()
        .with_option_u32(PIXELS_PER_METER_OPTION, pixels_per_meter_from_ppi(OUTPUT_PPI));
    let image_bytes = output_writer.write(&output, &options).map_err(|err| RtError::FailedToEncode {
        description: err.to_string(),
    })?;

    let path = cli.output.display().to_string();
    let mut file = File::create(&cli.output).map_err(|err| RtError::FailedToOpen {
        path: path.clone(),
        description: err.to_string(),
    })?;
    file.write_all(&image_bytes).map_err(|err| RtError::FailedToSave {
        path,
        description: err.to_string(),
    })?;

    Ok(())
}
