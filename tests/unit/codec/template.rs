//! Tests for blank template rendering and the swatch palette

#[cfg(test)]
mod tests {
    use crate::codec::header::TemplateHeader;
    use crate::codec::template::{
        corner_marker_color, corner_pair_color, make_template, render_template, swatch_color,
    };
    use crate::io::error::HerringboneError;
    use crate::spatial::config::TileConfig;
    use crate::spatial::pixels::PixelsMut;
    use image::RgbImage;

    const WHITE: [u8; 3] = [255, 255, 255];
    const BLACK: [u8; 3] = [0, 0, 0];

    fn pixel(image: &RgbImage, x: u32, y: u32) -> [u8; 3] {
        image.get_pixel(x, y).0
    }

    // Tests the palette is one flat table and out-of-range lookups are black
    // Verified by clamping the color index to the slot's row
    #[test]
    fn test_swatch_palette_is_flat() {
        assert_eq!(swatch_color(0, 0), [255, 51, 51]);
        assert_eq!(swatch_color(0, 8), swatch_color(1, 0));
        assert_eq!(swatch_color(0, 8), [235, 255, 30]);
        assert_eq!(swatch_color(6, 7), [200, 50, 200]);
        assert_eq!(swatch_color(6, 8), BLACK);
    }

    // Tests the corner pair table and marker colors
    // Verified by transposing the pair table
    #[test]
    fn test_corner_lookup_tables() {
        assert_eq!(corner_pair_color(0, 1), 1);
        assert_eq!(corner_pair_color(1, 0), 2);
        assert_eq!(corner_pair_color(3, 3), 15);
        assert_eq!(corner_pair_color(4, 0), 0);
        assert_eq!(corner_marker_color(1, 0), [0, 0, 255]);
        assert_eq!(corner_marker_color(4, 0), BLACK);
    }

    // Tests outlines are black with a pale swatch in the middle of the segment
    // Verified by drawing the swatch without whitening
    #[test]
    fn test_edge_template_outline_and_swatch() {
        let image = render_template(&TileConfig::edge(8, [1; 6])).expect("valid config");
        assert_eq!((image.width(), image.height()), (19, 34));

        // Top segment of the first horizontal tile, slot 2 color 0
        assert_eq!(pixel(&image, 1, 2), BLACK);
        assert_eq!(pixel(&image, 4, 2), [85, 184, 217]);
        assert_eq!(pixel(&image, 5, 2), [85, 184, 217]);
        assert_eq!(pixel(&image, 6, 2), BLACK);
        // Outline corners stay blank, interiors stay white
        assert_eq!(pixel(&image, 0, 2), WHITE);
        assert_eq!(pixel(&image, 5, 6), WHITE);
        // Left segment of the first vertical tile
        assert_eq!(pixel(&image, 0, 16), BLACK);
    }

    // Tests corner tiles get marker pixels at their corners
    // Verified by drawing markers before the outline
    #[test]
    fn test_corner_template_markers() {
        let image = render_template(&TileConfig::corner(6, [1; 4])).expect("valid config");
        assert_eq!(pixel(&image, 0, 2), [0, 0, 255]);
        assert_eq!(pixel(&image, 1, 3), WHITE);
    }

    // Tests corner markup draws a sample square inside marked corners only
    // Verified by ignoring the markup flags
    #[test]
    fn test_corner_markup_samples() {
        let mut config = TileConfig::corner(6, [1; 4]);
        config.corner_markup.set(1, 0, true);
        let image = render_template(&config).expect("valid config");
        assert_eq!(pixel(&image, 1, 3), [167, 204, 204]);
        assert_eq!(pixel(&image, 2, 3), [167, 204, 204]);
        assert_eq!(pixel(&image, 1, 4), [167, 204, 204]);
        assert_eq!(pixel(&image, 2, 4), WHITE);
        // Samples are clipped to the tile interior
        assert_eq!(pixel(&image, 0, 2), [0, 0, 255]);
    }

    // Tests the rendered header describes the rendered configuration
    // Verified by writing the header before filling white
    #[test]
    fn test_template_carries_header() {
        let config = TileConfig::edge(5, [2, 1, 3, 1, 2, 1]).with_variations(2, 1);
        let mut image = render_template(&config).expect("valid config");
        let header = TemplateHeader::decode(&PixelsMut::from_rgb_image(&mut image))
            .expect("header decodes");
        assert_eq!(header.to_config(), config);
    }

    // Tests invalid configurations and short views are refused
    // Verified by validating after filling the view and by accepting zero variations
    #[test]
    fn test_make_template_errors() {
        let mut image = RgbImage::new(18, 34);
        let mut pixels = PixelsMut::from_rgb_image(&mut image);
        assert!(matches!(
            make_template(&TileConfig::edge(8, [1; 6]), &mut pixels),
            Err(HerringboneError::ImageTooSmall { .. })
        ));
        assert!(matches!(
            make_template(&TileConfig::edge(8, [9; 6]), &mut pixels),
            Err(HerringboneError::InvalidConfig { .. })
        ));
        assert!(matches!(
            render_template(&TileConfig::corner(8, [5, 1, 1, 1])),
            Err(HerringboneError::InvalidConfig { .. })
        ));
        // Zero variations would lay out a template with no tiles
        assert!(matches!(
            render_template(&TileConfig::edge(8, [1; 6]).with_variations(0, 0)),
            Err(HerringboneError::InvalidConfig { .. })
        ));
    }

    // Tests larger views keep the header at the end of their own first row
    // Verified by encoding at the layout width
    #[test]
    fn test_make_template_into_larger_view() {
        let config = TileConfig::edge(4, [1; 6]);
        let mut image = RgbImage::new(40, 40);
        let mut pixels = PixelsMut::from_rgb_image(&mut image);
        make_template(&config, &mut pixels).expect("view is large enough");
        assert_eq!(
            TemplateHeader::decode(&pixels).map(|h| h.to_config()).ok(),
            Some(config)
        );
    }
}
