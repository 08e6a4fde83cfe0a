//! Engine constants and runtime configuration defaults

// Embedded template header layout
/// Number of header bytes stored at the end of the first pixel row
pub const HEADER_LEN: usize = 9;
/// Marker byte identifying a corner-colored template
pub const CORNER_MARKER: u8 = 0xC0;
/// Multiplier for the per-byte XOR that makes the header look like noise
pub const HEADER_SCRAMBLE: u8 = 55;

// Validation limits
/// Maximum number of cosmetic variations along one template axis
pub const MAX_VARIATIONS: usize = 64;
/// Maximum color count a decoded header may declare for a slot
pub const MAX_HEADER_COLORS: usize = 32;
/// Maximum colors per edge slot the template palette can draw
pub const MAX_EDGE_COLORS: usize = 8;
/// Maximum colors per corner slot the template palette can draw
pub const MAX_CORNER_COLORS: usize = 4;
/// Largest tile module size that fits the header byte
pub const MAX_SHORT_SIDE_LEN: usize = 255;

// Template geometry
/// Pixels added around every tile outline (two borders and a gap)
pub const TILE_PADDING: usize = 3;
/// Blank rows above each block of tiles in the template
pub const BLOCK_GAP: usize = 2;

// Map generation
/// Default maximum map width in tile modules
pub const DEFAULT_MAX_MODULES_X: usize = 100;
/// Default maximum map height in tile modules
pub const DEFAULT_MAX_MODULES_Y: usize = 100;
// The sweep reads up to four modules past the current row and column
/// Border margin of the working grid in modules
pub const GRID_MARGIN: usize = 6;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Command-line defaults
/// Default generated map width in pixels
pub const DEFAULT_MAP_WIDTH: u32 = 512;
/// Default generated map height in pixels
pub const DEFAULT_MAP_HEIGHT: u32 = 512;
/// Default tile module size for new templates
pub const DEFAULT_SHORT_SIDE_LEN: usize = 16;
/// Suffix added to generated map filenames
pub const OUTPUT_SUFFIX: &str = "_map";

// Progress bar display settings
/// Maximum number of per-file progress bars shown at once
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
