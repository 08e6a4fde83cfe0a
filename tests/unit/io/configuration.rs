//! Tests for engine constants and defaults

#[cfg(test)]
mod tests {
    use crate::io::configuration::{
        BLOCK_GAP, CORNER_MARKER, DEFAULT_MAX_MODULES_X, DEFAULT_MAX_MODULES_Y, DEFAULT_SEED,
        DEFAULT_SHORT_SIDE_LEN, GRID_MARGIN, HEADER_LEN, HEADER_SCRAMBLE, MAX_CORNER_COLORS,
        MAX_EDGE_COLORS, MAX_HEADER_COLORS, MAX_INDIVIDUAL_PROGRESS_BARS, MAX_SHORT_SIDE_LEN,
        MAX_VARIATIONS, OUTPUT_SUFFIX, TILE_PADDING,
    };

    // Tests header layout constants
    // Verified by changing the corner marker byte
    #[test]
    fn test_header_constants() {
        assert_eq!(HEADER_LEN, 9);
        assert_eq!(CORNER_MARKER, 0xC0);
        assert_eq!(HEADER_SCRAMBLE, 55);
    }

    // Tests validation limits
    // Verified by raising the variation limit
    #[test]
    fn test_validation_limits() {
        assert_eq!(MAX_VARIATIONS, 64);
        assert_eq!(MAX_HEADER_COLORS, 32);
        assert_eq!(MAX_EDGE_COLORS, 8);
        assert_eq!(MAX_CORNER_COLORS, 4);
        assert_eq!(MAX_SHORT_SIDE_LEN, usize::from(u8::MAX));
    }

    // Tests template spacing
    // Verified by shrinking the tile padding
    #[test]
    fn test_template_geometry() {
        assert_eq!(TILE_PADDING, 3);
        assert_eq!(BLOCK_GAP, 2);
    }

    // Tests generation defaults
    // Verified by changing the grid margin
    #[test]
    fn test_generation_defaults() {
        assert_eq!(DEFAULT_MAX_MODULES_X, 100);
        assert_eq!(DEFAULT_MAX_MODULES_Y, 100);
        assert_eq!(GRID_MARGIN, 6);
        assert_eq!(DEFAULT_SEED, 42);
    }

    // Tests command-line defaults
    // Verified by changing the output suffix
    #[test]
    fn test_cli_defaults() {
        assert_eq!(DEFAULT_SHORT_SIDE_LEN, 16);
        assert_eq!(OUTPUT_SUFFIX, "_map");
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }
}
