use clap_verbosity_flag::Verbosity;
use es_geo::output::Format;
use es_geo::{filter, process, DecodeOptions};
use log::{info, LevelFilter};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "es_geo",
    about = "Normalize, filter and inspect newline-delimited geo_shape geometries"
)]
struct Opt {
    /// Input file, stdin if omitted
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Comma-separated geometry types to keep, e.g. "point,polygon"
    #[structopt(short, long)]
    types: Option<String>,

    /// Output format
    #[structopt(short, long, default_value = "json-lines", possible_values = &Format::NAMES)]
    format: Format,

    /// Maximum nesting of geometry collections
    #[structopt(long)]
    max_depth: Option<usize>,

    #[structopt(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    env_logger::Builder::new()
        .filter_level(
            opt.verbose
                .log_level()
                .map_or(LevelFilter::Off, |level| level.to_level_filter()),
        )
        .format_timestamp(None)
        .init();

    let types = match &opt.types {
        Some(selector) => filter::parse(selector)?,
        None => vec![],
    };
    let options = DecodeOptions {
        max_collection_depth: opt.max_depth,
    };
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    match &opt.input {
        Some(path) => {
            info!("reading shapes from {}", path.display());
            let file = File::open(path)?;
            process(BufReader::new(file), &mut writer, &types, opt.format, &options)
        }
        None => {
            info!("reading shapes from stdin");
            let stdin = io::stdin();
            let reader = stdin.lock();
            process(reader, &mut writer, &types, opt.format, &options)
        }
    }
}
