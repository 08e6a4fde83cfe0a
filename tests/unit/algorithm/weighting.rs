//! Tests for per-slot color weights

#[cfg(test)]
mod tests {
    use crate::algorithm::weighting::Weighting;
    use crate::codec::tileset::Tileset;
    use crate::io::error::HerringboneError;
    use crate::spatial::config::ColorModel;
    use image::RgbImage;

    fn tileset(model: ColorModel, num_color: [usize; 6]) -> Tileset {
        Tileset::from_parts(model, 4, num_color, RgbImage::new(1, 1), Vec::new(), Vec::new())
            .expect("empty tileset is valid")
    }

    // Tests slot lookups and missing colors weighing zero
    // Verified by returning None for colors past the table
    #[test]
    fn test_slot_weights() {
        let weighting = Weighting::new()
            .with_slot(2, vec![3, 1])
            .expect("slot 2 exists");
        assert_eq!(weighting.slot(2), Some(&[3, 1][..]));
        assert_eq!(weighting.slot(0), None);
        assert_eq!(weighting.weight(2, 0), Some(3));
        assert_eq!(weighting.weight(2, 5), Some(0));
        assert_eq!(weighting.weight(1, 0), None);
        assert_eq!(weighting.slot(9), None);
    }

    // Tests only six slots can be addressed
    // Verified by growing the slot table on demand
    #[test]
    fn test_set_slot_bounds() {
        let mut weighting = Weighting::new();
        assert!(weighting.set_slot(5, vec![1]).is_ok());
        assert!(matches!(
            weighting.set_slot(6, vec![1]),
            Err(HerringboneError::InvalidWeighting { slot: 6, .. })
        ));
    }

    // Tests validation against the slots a tileset actually uses
    // Verified by validating all six slots for corner tilesets
    #[test]
    fn test_validate_against_tileset() {
        let edge = tileset(ColorModel::Edge, [2, 2, 3, 2, 2, 2]);
        let corner = tileset(ColorModel::Corner, [2, 2, 2, 2, 0, 0]);

        let short = Weighting::new().with_slot(2, vec![1, 1]).expect("slot exists");
        assert!(matches!(
            short.validate(&edge),
            Err(HerringboneError::InvalidWeighting { slot: 2, .. })
        ));

        let zero = Weighting::new().with_slot(0, vec![0, 0, 5]).expect("slot exists");
        assert!(matches!(
            zero.validate(&edge),
            Err(HerringboneError::InvalidWeighting { slot: 0, .. })
        ));

        // Slot 5 is unused by corner tilesets
        let unused = Weighting::new().with_slot(5, vec![]).expect("slot exists");
        assert!(unused.validate(&corner).is_ok());
        assert!(unused.validate(&edge).is_err());

        let fine = Weighting::new()
            .with_slot(1, vec![0, 4])
            .and_then(|w| w.with_slot(3, vec![1, 1, 1]))
            .expect("slots exist");
        assert!(fine.validate(&edge).is_ok());
        assert!(fine.validate(&corner).is_ok());
    }
}
