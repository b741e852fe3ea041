use std::path::PathBuf;
use std::process;

use clap::Parser;
use dotenv::dotenv;
use log::{error, info};
use rotocrop::display::WindowSink;
use rotocrop::{run, InputSource, PipelineConfig, Sample};

/// Detect objects on a light background, rotate each one upright and show
/// the extracted crop.
#[derive(Parser)]
#[command(name = "rotocrop")]
struct Args {
    /// Input image; the bundled left sample is used when omitted
    image: Option<PathBuf>,
}

fn main() {
    dotenv().ok();
    env_logger::init();

    info!("Start");
    let args = Args::parse();
    let source = match args.image {
        Some(path) => InputSource::Path(path),
        None => InputSource::Bundled(Sample::Left),
    };

    let config = PipelineConfig { source };
    if let Err(err) = run(&config, &mut WindowSink) {
        error!("{err}");
        info!("Stop");
        process::exit(1);
    }
    info!("Stop");
}
