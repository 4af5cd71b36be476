//! Command-line interface for writing tiling pattern images

use crate::generation::bitlist::generate_random_bitlist;
use crate::generation::color::{ColorMode, ColorPalette, Rgb};
use crate::generation::dimensions::{TileDimensions, TilingDimensions};
use crate::generation::{rectangle, triangle};
use crate::io::configuration::{
    DEFAULT_IMAGE_COUNT, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH, DEFAULT_TILES_ACROSS,
    DEFAULT_TILES_DOWN, OUTPUT_EXTENSION, OUTPUT_STEM, RANDOM_SUFFIX,
};
use crate::io::error::{Result, invalid_argument};
use crate::io::image::export_canvas_as_png;
use crate::io::logging;
use crate::io::palette::{palette_or_default, parse_color};
use crate::io::progress::ProgressManager;
use crate::raster::Canvas;
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "tilegen")]
#[command(
    author,
    version,
    about = "Generate rectangle and triangle tiling pattern images"
)]
/// Command-line arguments for the pattern generation tool
pub struct Cli {
    /// Which tiling to draw
    #[command(subcommand)]
    pub pattern: Pattern,

    /// Suppress progress output and all logs below error level
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log generation details
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter for the verbosity flags
    pub const fn log_filter(&self) -> &'static str {
        logging::default_filter(self.quiet, self.verbose)
    }

    /// Arguments shared by both tilings
    pub const fn tiling_args(&self) -> &TilingArgs {
        match &self.pattern {
            Pattern::Rectangle(args) => &args.tiling,
            Pattern::Triangle(args) => args,
        }
    }
}

/// Tiling shape
#[derive(Subcommand, Debug)]
pub enum Pattern {
    /// One rectangle per tile, colored from a palette or at random
    Rectangle(RectangleArgs),
    /// Two triangles per tile, colored from a palette
    Triangle(TilingArgs),
}

/// Arguments shared by every tiling
#[derive(Args, Debug)]
pub struct TilingArgs {
    /// Tile size in pixels, as WIDTHxHEIGHT
    #[arg(
        short,
        long,
        value_parser = parse_tile_dimensions,
        default_value_t = TileDimensions::new(DEFAULT_TILE_WIDTH, DEFAULT_TILE_HEIGHT)
    )]
    pub tile: TileDimensions,

    /// Grid size in tiles, as ACROSSxDOWN
    #[arg(
        short,
        long,
        value_parser = parse_tiling_dimensions,
        default_value_t = TilingDimensions::new(DEFAULT_TILES_ACROSS, DEFAULT_TILES_DOWN)
    )]
    pub grid: TilingDimensions,

    /// Comma-separated palette colors, as #RRGGBB or r:g:b
    #[arg(short, long, value_delimiter = ',', value_parser = parse_color)]
    pub palette: Vec<Rgb>,

    /// Random seed for reproducible generation (drawn at random if omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output PNG path (derived from the grid size if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of images to write; numbered when more than one
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_IMAGE_COUNT,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub count: u32,
}

/// Arguments for the rectangle tiling
#[derive(Args, Debug)]
pub struct RectangleArgs {
    /// Shared tiling arguments
    #[command(flatten)]
    pub tiling: TilingArgs,

    /// Give every tile an independent random color instead of using a palette
    #[arg(short, long, conflicts_with = "palette")]
    pub random: bool,
}

/// Parse `WIDTHxHEIGHT` into tile dimensions
///
/// # Errors
///
/// Returns `InvalidArgument` unless both sides are positive integers
pub fn parse_tile_dimensions(text: &str) -> Result<TileDimensions> {
    parse_pair("tile", text).map(|(width, height)| TileDimensions::new(width, height))
}

/// Parse `ACROSSxDOWN` into grid dimensions
///
/// # Errors
///
/// Returns `InvalidArgument` unless both sides are positive integers
pub fn parse_tiling_dimensions(text: &str) -> Result<TilingDimensions> {
    parse_pair("grid", text).map(|(across, down)| TilingDimensions::new(across, down))
}

fn parse_pair(parameter: &'static str, text: &str) -> Result<(u32, u32)> {
    let malformed = || {
        invalid_argument(
            parameter,
            &text,
            &"expected two positive integers separated by 'x'",
        )
    };

    let (first, second) = text
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(malformed)?;
    let first = first.trim().parse::<u32>().ok().filter(|&v| v > 0);
    let second = second.trim().parse::<u32>().ok().filter(|&v| v > 0);

    first.zip(second).ok_or_else(malformed)
}

/// Orchestrates generating and writing a batch of tiling images
pub struct TilingRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl TilingRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let count = u64::from(cli.tiling_args().count);
        let progress_manager = cli
            .should_show_progress()
            .then(|| ProgressManager::new(count));

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate and write every requested image
    ///
    /// # Errors
    ///
    /// Returns an error if generation fails validation or an image cannot be written
    pub fn run(&mut self) -> Result<Vec<PathBuf>> {
        let args = self.cli.tiling_args();
        let base_seed = args.seed.unwrap_or_else(rand::random);
        let palette = self.palette()?;
        let count = args.count;

        tracing::info!(
            seed = base_seed,
            pattern = self.pattern_name(),
            grid = %args.grid,
            tile = %args.tile,
            count,
            "generating tiling"
        );

        let mut written = Vec::with_capacity(count as usize);
        for index in 0..count {
            let seed = base_seed.wrapping_add(u64::from(index));
            let canvas = self.render(palette.as_ref(), seed)?;
            let path = self.output_path(index);

            export_canvas_as_png(&canvas, &path)?;
            tracing::info!(seed, path = %path.display(), "wrote tiling image");

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_image(&path.file_name().unwrap_or_default().to_string_lossy());
            }
            written.push(path);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    /// Render one image with a fresh random source seeded by `seed`
    ///
    /// `palette` is `None` only for random-color rectangles.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the generator rejects its inputs
    pub fn render(&self, palette: Option<&ColorPalette>, seed: u64) -> Result<Canvas> {
        let args = self.cli.tiling_args();
        let mut rng = StdRng::seed_from_u64(seed);

        match (&self.cli.pattern, palette) {
            (Pattern::Rectangle(_), None) => rectangle::generate_rectangle_tiling(
                args.tile,
                args.grid,
                &ColorMode::Random,
                &mut rng,
            ),
            (Pattern::Rectangle(_), Some(palette)) => {
                let length = rectangle::required_picker_length(args.grid);
                let picker = generate_random_bitlist(length, palette.len(), &mut rng)?;
                let mode = ColorMode::palette(palette, &picker)?;
                rectangle::generate_rectangle_tiling(args.tile, args.grid, &mode, &mut rng)
            }
            (Pattern::Triangle(_), Some(palette)) => {
                let length = triangle::required_picker_length(args.grid);
                let picker = generate_random_bitlist(length, palette.len(), &mut rng)?;
                triangle::generate_triangle_tiling(args.tile, args.grid, palette, &picker)
            }
            (Pattern::Triangle(_), None) => Err(invalid_argument(
                "color_palette",
                &"<absent>",
                &"triangle tilings require a color palette",
            )),
        }
    }

    /// Palette for this run, or `None` for random-color rectangles
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the palette cannot be built
    pub fn palette(&self) -> Result<Option<ColorPalette>> {
        match &self.cli.pattern {
            Pattern::Rectangle(args) if args.random => Ok(None),
            _ => palette_or_default(&self.cli.tiling_args().palette).map(Some),
        }
    }

    /// Path of the `index`th image of the batch
    pub fn output_path(&self, index: u32) -> PathBuf {
        let args = self.cli.tiling_args();
        let base = args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.default_file_name()));

        if args.count > 1 {
            numbered_path(&base, index + 1)
        } else {
            base
        }
    }

    fn default_file_name(&self) -> String {
        let grid = self.cli.tiling_args().grid;
        let suffix = match &self.cli.pattern {
            Pattern::Rectangle(args) if args.random => RANDOM_SUFFIX,
            _ => "",
        };
        format!(
            "{}x{}-{}-{OUTPUT_STEM}{suffix}.{OUTPUT_EXTENSION}",
            grid.across,
            grid.down,
            self.pattern_name()
        )
    }

    const fn pattern_name(&self) -> &'static str {
        match self.cli.pattern {
            Pattern::Rectangle(_) => "rectangle",
            Pattern::Triangle(_) => "triangle",
        }
    }
}

fn numbered_path(base: &Path, number: u32) -> PathBuf {
    let stem = base.file_stem().unwrap_or_default().to_string_lossy();
    let name = base.extension().map_or_else(
        || format!("{stem}-{number}"),
        |extension| format!("{stem}-{number}.{}", extension.to_string_lossy()),
    );

    match base.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(name),
        _ => PathBuf::from(name),
    }
}
