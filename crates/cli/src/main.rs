mod grid;

use crate::grid::GridConfig;
use anyhow::{anyhow, Context};
use config::{Config, File};
use hexgrid::{timed, OrientationKind};
use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for laying out hexagon grids and rendering them.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexgrid")]
struct Opt {
    /// Path to a config file that defines the grid: a `layout` table, an
    /// optional `class_name`, and a `hexes` list. Supported formats: JSON,
    /// TOML
    #[structopt(short, long)]
    config: PathBuf,

    /// File to write the output to. Defaults to `grid.svg` for SVG output,
    /// and `grid.toml` for config output
    #[structopt(short, long)]
    output: Option<PathBuf>,

    /// The format to output the grid in. Supported formats:
    ///
    /// svg - 2D rendering of the grid
    ///
    /// cfg - The full resolved config, with all defaults filled in, in TOML
    ///   format
    #[structopt(short = "f", long, default_value = "svg")]
    format: OutputFormat,

    /// Override the orientation from the config file (flat or pointy)
    #[structopt(long)]
    orientation: Option<OrientationKind>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for `--format`!
    /// Render the grid as a 2D SVG
    Svg,
    /// Export the resolved grid config in a human-readable file
    Cfg,
}

impl OutputFormat {
    fn file_ext(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Cfg => "toml",
        }
    }
}

fn load_config(config_path: &Path) -> anyhow::Result<GridConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Generate the output bytes for the grid in the given format
fn generate_bytes(
    output_format: OutputFormat,
    config: &GridConfig,
) -> anyhow::Result<Vec<u8>> {
    match output_format {
        OutputFormat::Svg => {
            let grid = config.build()?;
            info!(
                "Rendering {} hexes at size {} with spacing {}",
                grid.shapes().len(),
                grid.layout().size(),
                grid.layout().spacing()
            );
            Ok(grid.render().into_bytes())
        }
        OutputFormat::Cfg => {
            // Validate first so we never export something we couldn't load
            config.build()?;
            // Going through a TOML value puts plain values ahead of tables,
            // which the serializer requires
            let value = toml::Value::try_from(config)
                .context("error serializing config")?;
            Ok(toml::to_string_pretty(&value)
                .context("error serializing config")?
                .into_bytes())
        }
    }
}

/// Generate an output form of the grid and write it to a file
fn gen_output(
    output_path: &Path,
    output_format: OutputFormat,
    config: &GridConfig,
) -> anyhow::Result<()> {
    timed!(
        format!(
            "Generating {} output and writing to {:?}",
            output_format, output_path
        ),
        log::Level::Info,
        {
            let bytes = generate_bytes(output_format, config)?;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(output_path)
                .with_context(|| {
                    format!("error opening output file {:?}", output_path)
                })?;
            file.write_all(&bytes).with_context(|| {
                format!("error writing to file {:?}", output_path)
            })?;
        }
    );

    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let mut config = load_config(&opt.config)?;
    if let Some(orientation) = opt.orientation {
        config.layout.orientation = orientation;
    }
    info!("Loaded {} hexes from {:?}", config.hexes.len(), &opt.config);

    let output_path = opt.output.unwrap_or_else(|| {
        PathBuf::from("grid").with_extension(opt.format.file_ext())
    });
    gen_output(&output_path, opt.format, &config)
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
