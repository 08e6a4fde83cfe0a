//! Tests for PNG loading and saving

#[cfg(test)]
mod tests {
    use crate::io::error::HerringboneError;
    use crate::io::image::{load_rgb_image, save_rgb_image};
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    // Tests saved images load back unchanged and parents are created
    // Verified by skipping create_dir_all
    #[test]
    fn test_save_creates_parent_and_loads_back() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("nested/deeper/map.png");
        let image = RgbImage::from_fn(5, 3, |x, y| Rgb([x as u8 * 40, y as u8 * 60, 7]));

        save_rgb_image(&image, &path).expect("save succeeds");
        assert_eq!(load_rgb_image(&path).expect("load succeeds"), image);
    }

    // Tests missing and undecodable files report the path
    // Verified by mapping load failures to FileSystem
    #[test]
    fn test_load_errors() {
        let dir = TempDir::new().expect("temp dir");
        let missing = dir.path().join("missing.png");
        assert!(matches!(
            load_rgb_image(&missing),
            Err(HerringboneError::ImageLoad { path, .. }) if path == missing
        ));

        let garbage = dir.path().join("garbage.png");
        std::fs::write(&garbage, b"not a png").expect("write succeeds");
        assert!(matches!(
            load_rgb_image(&garbage),
            Err(HerringboneError::ImageLoad { .. })
        ));
    }

    // Tests a parent that is a regular file is reported as a file system error
    // Verified by ignoring create_dir_all errors
    #[test]
    fn test_save_parent_is_file() {
        let dir = TempDir::new().expect("temp dir");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"").expect("write succeeds");

        let result = save_rgb_image(&RgbImage::new(1, 1), &blocker.join("map.png"));
        assert!(matches!(
            result,
            Err(HerringboneError::FileSystem {
                operation: "create directory",
                ..
            })
        ));
    }
}
