//--------------------------------------------------------------------
// main.rs
//--------------------------------------------------------------------
// Provides the main function
//--------------------------------------------------------------------

use std::path::PathBuf;
use std::process;

use clap::Parser;
use path_roundtrip::RoundTrip;

#[derive(Parser, Debug)]
#[command(version, about = "Trace a bitmap into stroke paths and render them back")]
struct Cli {
    /// Raster image to trace
    #[arg(default_value = "upload.png")]
    image: PathBuf,

    /// Intermediate shape,x,y table
    #[arg(default_value = "frag0.csv")]
    table: PathBuf,

    /// SVG output; a PNG is written next to it
    #[arg(default_value = "output.svg")]
    drawing: PathBuf,

    /// Intensities above this are background
    #[arg(short, long, default_value_t = path_tracer::DEFAULT_THRESHOLD)]
    threshold: u8,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let round_trip = RoundTrip::new(cli.image, cli.table, cli.drawing).with_threshold(cli.threshold);
    if let Err(e) = round_trip.run() {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}
