//! Generation constants and runtime configuration defaults

// Color decisions per grid cell
/// Triangles drawn per cell (upper-left, then lower-right)
pub const TRIANGLES_PER_TILE: usize = 2;

// Rectangle mode accepts the same picker length as triangle mode and only reads
// a prefix of it
/// Picker entries required per cell in rectangle palette mode
pub const RECTANGLE_PICKER_ENTRIES_PER_TILE: usize = 2;

// Largest side a cairo image surface accepts, so any canvas accepted here
// can also be handed to cairo-based tooling
/// Maximum canvas width or height in pixels
pub const MAX_CANVAS_DIMENSION: u32 = 32_767;

// Default values for configurable parameters
/// Default tile width in pixels
pub const DEFAULT_TILE_WIDTH: u32 = 300;
/// Default tile height in pixels
pub const DEFAULT_TILE_HEIGHT: u32 = 200;
/// Default number of tiles across
pub const DEFAULT_TILES_ACROSS: u32 = 10;
/// Default number of tiles down
pub const DEFAULT_TILES_DOWN: u32 = 8;

/// Default palette as RGB channels in `[0, 1]`
pub const DEFAULT_PALETTE: [[f64; 3]; 3] = [[0.25, 0.2, 0.8], [0.8, 0.8, 0.9], [0.1, 0.1, 0.15]];

/// Default number of images written per invocation
pub const DEFAULT_IMAGE_COUNT: u32 = 1;

// Output settings
/// Filename stem suffix for tiling patterns
pub const OUTPUT_STEM: &str = "tiling-pattern";
/// Extra suffix for random-color rectangle patterns
pub const RANDOM_SUFFIX: &str = "-random";
/// Output image extension
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Logging
/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
/// Filter used when `RUST_LOG` is unset and verbose output is requested
pub const VERBOSE_LOG_FILTER: &str = "debug";
