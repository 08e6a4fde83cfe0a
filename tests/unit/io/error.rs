//! Tests for error formatting and source chaining

#[cfg(test)]
mod tests {
    use crate::io::error::{HerringboneError, bad_header, invalid_config, usage_error};
    use crate::spatial::config::Orientation;
    use std::error::Error;
    use std::path::PathBuf;

    // Tests starvation errors name the orientation and position
    // Verified by printing the constraints only
    #[test]
    fn test_no_matching_tile_message() {
        let err = HerringboneError::NoMatchingTile {
            orientation: Orientation::Vertical,
            position: (24, -8),
            constraints: [0, -1, 1, -1, -1, 2],
        };

        let message = err.to_string();
        assert!(message.contains("vertical"));
        assert!(message.contains("(24, -8)"));
        assert!(message.contains("[0, -1, 1, -1, -1, 2]"));
    }

    // Tests helper constructors fill the expected variants
    // Verified by swapping the value and reason fields
    #[test]
    fn test_error_helpers() {
        match invalid_config("num_vary_x", &65, &"must be at most 64") {
            HerringboneError::InvalidConfig {
                parameter,
                value,
                reason,
            } => {
                assert_eq!(parameter, "num_vary_x");
                assert_eq!(value, "65");
                assert_eq!(reason, "must be at most 64");
            }
            other => panic!("unexpected variant {other:?}"),
        }

        assert_eq!(
            bad_header(&"short side length is zero").to_string(),
            "Bad template header: short side length is zero"
        );
        assert!(usage_error("no such target").to_string().contains("no such target"));
    }

    // Tests size errors print both dimensions
    // Verified by printing only the required size
    #[test]
    fn test_size_messages() {
        let too_small = HerringboneError::ImageTooSmall {
            required: (19, 34),
            actual: (19, 33),
        };
        assert_eq!(
            too_small.to_string(),
            "Image too small for configuration: need 19x34, got 19x33"
        );

        let too_large = HerringboneError::OutputTooLarge {
            requested: (111, 20),
            maximum: (106, 106),
        };
        assert!(too_large.to_string().contains("111x20"));
    }

    // Tests I/O failures keep their source error
    // Verified by returning None from source
    #[test]
    fn test_io_source_chain() {
        let err = HerringboneError::FileSystem {
            path: PathBuf::from("out/maps"),
            operation: "create directory",
            source: std::io::Error::other("denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("out/maps"));

        let converted = HerringboneError::from(std::io::Error::other("gone"));
        assert!(matches!(converted, HerringboneError::FileSystem { .. }));
        assert!(bad_header(&"x").source().is_none());
    }
}
