//! Tests for the scrambled template header

#[cfg(test)]
mod tests {
    use crate::codec::header::TemplateHeader;
    use crate::io::error::HerringboneError;
    use crate::spatial::config::{ColorModel, TileConfig};
    use crate::spatial::pixels::PixelsMut;
    use image::{Rgb, RgbImage};

    fn last_row_bytes(image: &RgbImage) -> Vec<u8> {
        let width = image.width() as usize * 3;
        image.as_raw().iter().take(width).copied().collect()
    }

    // Tests plain byte layout for both color models
    // Verified by swapping vary_x and vary_y in the edge layout
    #[test]
    fn test_plain_byte_layout() {
        let edge = TileConfig::edge(10, [2, 3, 1, 4, 5, 6]).with_variations(3, 2);
        assert_eq!(
            TemplateHeader::from_config(&edge).to_bytes(),
            [2, 3, 1, 4, 5, 6, 3, 2, 10]
        );

        let corner = TileConfig::corner(12, [1, 2, 3, 4]).with_variations(5, 0);
        let header = TemplateHeader::from_config(&corner);
        assert_eq!(header.to_bytes(), [1, 2, 3, 4, 5, 0, 12, 0xC0, 0]);
        assert_eq!(header.byte_count(), 8);
    }

    // Tests bytes are stored backwards and XORed with i * 55
    // Verified by storing the header forwards
    #[test]
    fn test_encode_scrambles_backwards() {
        let config = TileConfig::edge(10, [2, 3, 1, 4, 5, 6]).with_variations(3, 2);
        let mut image = RgbImage::new(4, 1);
        TemplateHeader::from_config(&config)
            .encode(&mut PixelsMut::from_rgb_image(&mut image))
            .expect("row holds nine bytes");

        let row = last_row_bytes(&image);
        assert_eq!(row.get(11), Some(&2));
        assert_eq!(row.get(10), Some(&(3 ^ 55)));
        assert_eq!(row.get(3), Some(&(10 ^ 184)));
    }

    // Tests corner headers leave the ninth byte's pixel value under the scramble
    // Verified by zeroing the unused byte before scrambling
    #[test]
    fn test_corner_encode_keeps_trailing_pixel() {
        let config = TileConfig::corner(12, [1, 2, 3, 4]);
        let mut image = RgbImage::from_pixel(4, 1, Rgb([255, 255, 255]));
        let mut pixels = PixelsMut::from_rgb_image(&mut image);
        let header = TemplateHeader::from_config(&config);
        header.encode(&mut pixels).expect("row holds nine bytes");

        assert_eq!(TemplateHeader::decode(&pixels).ok(), Some(header));
        assert_eq!(last_row_bytes(&image).get(3), Some(&71));
    }

    // Tests decoding restores an edge configuration with variations
    // Verified by decoding without the scramble
    #[test]
    fn test_edge_header_survives_encoding() {
        let config = TileConfig::edge(33, [8, 1, 2, 3, 4, 5]).with_variations(64, 7);
        let mut image = RgbImage::new(20, 3);
        let mut pixels = PixelsMut::from_rgb_image(&mut image);
        TemplateHeader::from_config(&config)
            .encode(&mut pixels)
            .expect("row holds nine bytes");

        let decoded = TemplateHeader::decode(&pixels).expect("valid header");
        assert_eq!(decoded.model, ColorModel::Edge);
        assert_eq!(decoded.to_config(), config);
    }

    // Tests an unmarked white image is rejected rather than misread
    // Verified by dropping the variation bound
    #[test]
    fn test_decode_rejects_white_image() {
        let mut image = RgbImage::from_pixel(16, 16, Rgb([255, 255, 255]));
        let pixels = PixelsMut::from_rgb_image(&mut image);
        assert!(matches!(
            TemplateHeader::decode(&pixels),
            Err(HerringboneError::BadHeader { .. })
        ));
    }

    // Tests images narrower than three pixels cannot carry a header
    // Verified by reading past the row start
    #[test]
    fn test_header_needs_three_pixels() {
        let mut image = RgbImage::new(2, 1);
        let mut pixels = PixelsMut::from_rgb_image(&mut image);
        let header = TemplateHeader::from_config(&TileConfig::edge(4, [1; 6]));

        assert!(matches!(
            header.encode(&mut pixels),
            Err(HerringboneError::ImageTooSmall {
                required: (3, 1),
                actual: (2, 1)
            })
        ));
        assert!(matches!(
            TemplateHeader::decode(&pixels),
            Err(HerringboneError::ImageTooSmall { .. })
        ));
    }

    // Tests header field validation bounds
    // Verified by accepting 33 colors
    #[test]
    fn test_from_bytes_validation() {
        assert!(TemplateHeader::from_bytes(&[32, 1, 1, 1, 1, 1, 64, 64, 1]).is_ok());

        for bytes in [
            [1, 1, 1, 1, 1, 1, 1, 1, 0],
            [1, 1, 1, 1, 1, 1, 65, 1, 8],
            [1, 1, 33, 1, 1, 1, 1, 1, 8],
            [1, 1, 1, 1, 1, 0, 1, 1, 8],
        ] {
            assert!(
                matches!(
                    TemplateHeader::from_bytes(&bytes),
                    Err(HerringboneError::BadHeader { .. })
                ),
                "{bytes:?} should be rejected"
            );
        }

        // Corner headers ignore the edge-only slots
        let corner = TemplateHeader::from_bytes(&[2, 2, 2, 2, 0, 0, 9, 0xC0, 77])
            .expect("valid corner header");
        assert_eq!(corner.num_color, [2, 2, 2, 2, 0, 0]);
        assert_eq!(corner.short_side_len, 9);
    }
}
