use anyhow::{anyhow, Context};
use config::{Config, File};
use hexgrid::{
    hex_list, rectangle_grid, timed, Direction, Hex, HexSet, Layout,
    LayoutConfig, Point,
};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    path::{Path, PathBuf},
    process,
};
use structopt::{clap::AppSettings, StructOpt};

/// CLI for running hex grid calculations. Hexes are written as `q,r`, e.g.
/// `-3,1` or `(-3,1)`.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexgrid")]
struct Opt {
    /// Path to a config file that defines the pixel layout. Only used by the
    /// pixel commands. Supported formats: JSON, TOML
    #[structopt(short, long)]
    layout: Option<PathBuf>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

// Every subcommand allows leading hyphens so negative coordinates work
#[derive(Debug, StructOpt)]
enum Command {
    /// Print the number of steps between two hexes
    #[structopt(setting = AppSettings::AllowLeadingHyphen)]
    Distance { a: Hex, b: Hex },

    /// Print the hex one step away in the given direction. Directions: se,
    /// ne, n, nw, sw, s
    #[structopt(setting = AppSettings::AllowLeadingHyphen)]
    Neighbor { hex: Hex, direction: Direction },

    /// Print every hex on a straight line between two hexes
    #[structopt(setting = AppSettings::AllowLeadingHyphen)]
    Line { a: Hex, b: Hex },

    /// Print every hex within some number of steps of a center hex
    #[structopt(setting = AppSettings::AllowLeadingHyphen)]
    Range { center: Hex, radius: i64 },

    /// Print a grid of hexes that renders as a rectangle
    #[structopt(setting = AppSettings::AllowLeadingHyphen)]
    Rectangle { width: i64, height: i64 },

    /// Print every hex in a rectangle grid that is visible from a source hex
    #[structopt(setting = AppSettings::AllowLeadingHyphen)]
    Fov {
        source: Hex,

        /// Width of the rectangle grid, in columns
        #[structopt(long)]
        width: i64,

        /// Height of the rectangle grid, in hexes per column
        #[structopt(long)]
        height: i64,

        /// An opaque hex. Pass multiple times for multiple blockers
        #[structopt(long = "blocker", number_of_values = 1)]
        blockers: Vec<Hex>,
    },

    /// Print the pixel position of a hex's center
    #[structopt(setting = AppSettings::AllowLeadingHyphen)]
    ToPixel { hex: Hex },

    /// Print the hex that contains a pixel, before and after rounding
    #[structopt(setting = AppSettings::AllowLeadingHyphen)]
    FromPixel { x: f64, y: f64 },

    /// Print the pixel positions of a hex's 6 corners
    #[structopt(setting = AppSettings::AllowLeadingHyphen)]
    Corners { hex: Hex },
}

fn load_config(config_path: &Path) -> anyhow::Result<LayoutConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading layout file")?;
    settings.try_into().context("error reading layout")
}

/// Build the pixel layout from the given config file, or the default if there
/// isn't one
fn load_layout(config_path: Option<&Path>) -> anyhow::Result<Layout> {
    let config = match config_path {
        Some(config_path) => {
            let config = load_config(config_path)?;
            info!("Loaded layout config from {:?}", config_path);
            config
        }
        None => LayoutConfig::default(),
    };
    Layout::from_config(&config).context("invalid layout config")
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    match opt.command {
        Command::Distance { a, b } => println!("{}", a.distance_to(b)),
        Command::Neighbor { hex, direction } => {
            println!("{}", hex.neighbor(direction))
        }
        Command::Line { a, b } => println!("{}", hex_list(a.line_to(b))),
        Command::Range { center, radius } => {
            println!("{}", hex_list(center.range(radius)))
        }
        Command::Rectangle { width, height } => {
            println!("{}", hex_list(rectangle_grid(width, height)))
        }
        Command::Fov {
            source,
            width,
            height,
            blockers,
        } => {
            let blockers: HexSet = blockers.into_iter().collect();
            let visible: Vec<Hex> = timed!(
                format!("Field of view from {}", source),
                log::Level::Info,
                source
                    .field_of_view(rectangle_grid(width, height), &blockers)
                    .collect()
            );
            println!("{}", hex_list(visible));
        }
        Command::ToPixel { hex } => {
            let layout = load_layout(opt.layout.as_deref())?;
            println!("{}", layout.hex_to_pixel(hex));
        }
        Command::FromPixel { x, y } => {
            let layout = load_layout(opt.layout.as_deref())?;
            let hex = layout.pixel_to_hex(Point::new(x, y));
            println!("{} {}", hex, hex.round());
        }
        Command::Corners { hex } => {
            let layout = load_layout(opt.layout.as_deref())?;
            for corner in layout.hexagon_corners(hex).iter() {
                println!("{}", corner);
            }
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
