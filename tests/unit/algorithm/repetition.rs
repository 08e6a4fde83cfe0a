//! Tests for corner color assignment and diagonal repetition reduction

#[cfg(test)]
mod tests {
    use crate::algorithm::repetition::{assign_corner_colors, corner_type, reduce_repetition};
    use crate::algorithm::weighting::Weighting;
    use crate::spatial::grid::{ColorGrid, Layer};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn corner(grid: &ColorGrid, row: usize, col: usize) -> i8 {
        grid.get(Layer::Corner, row as isize, col as isize)
    }

    // Tests corner types cycle along rows and shift down columns
    // Verified by using row - col instead of col - row
    #[test]
    fn test_corner_type_pattern() {
        assert_eq!(corner_type(0, 0), 1);
        assert_eq!(corner_type(0, 3), 0);
        assert_eq!(corner_type(1, 0), 0);
        assert_eq!(corner_type(2, 0), 3);
        assert_eq!(corner_type(5, 1), 1);
    }

    // Tests every corner receives a color legal for its type
    // Verified by drawing from slot 0 for every cell
    #[test]
    fn test_assign_respects_type_counts() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut grid = ColorGrid::new(9, 11);
        let num_color = [1, 2, 3, 4, 0, 0];
        assign_corner_colors(&mut grid, &mut rng, &num_color, None);

        for row in 0..9 {
            for col in 0..11 {
                let color = corner(&grid, row, col);
                let count = num_color.get(corner_type(row, col)).copied().unwrap_or(0);
                assert!(color >= 0 && (color as usize) < count, "({row}, {col}) = {color}");
            }
        }
    }

    // Tests weighted corner types only receive colors with weight
    // Verified by ignoring the weighting
    #[test]
    fn test_assign_uses_weights() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut grid = ColorGrid::new(8, 8);
        let weighting = Weighting::new().with_slot(2, vec![0, 0, 1]).expect("slot exists");
        assign_corner_colors(&mut grid, &mut rng, &[3, 3, 3, 3, 0, 0], Some(&weighting));

        for row in 0..8 {
            for col in 0..8 {
                if corner_type(row, col) == 2 {
                    assert_eq!(corner(&grid, row, col), 2);
                }
            }
        }
    }

    // Tests a uniform grid gets broken up when colors allow it
    // Verified by skipping the wide window check
    #[test]
    fn test_reduce_breaks_uniform_grid() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut grid = ColorGrid::new(10, 10);
        for row in 0..10 {
            for col in 0..10 {
                grid.set(Layer::Corner, row, col, 0);
            }
        }
        let recolored = reduce_repetition(&mut grid, &mut rng, &[2; 6], None);
        assert!(recolored > 0);
        // The first tall window recolors (1, 1) and nothing revisits it
        assert_eq!(corner(&grid, 1, 1), 1);

        let changed = (0..10)
            .flat_map(|row| (0..10).map(move |col| (row, col)))
            .filter(|&(row, col)| corner(&grid, row, col) == 1)
            .count();
        assert!(changed <= recolored);
    }

    // Tests single-color corner types are never touched
    // Verified by recoloring regardless of the color count
    #[test]
    fn test_reduce_skips_single_color_types() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut grid = ColorGrid::new(10, 10);
        for row in 0..10 {
            for col in 0..10 {
                grid.set(Layer::Corner, row, col, 0);
            }
        }
        assert_eq!(reduce_repetition(&mut grid, &mut rng, &[1; 6], None), 0);
        assert!((0..10).all(|row| (0..10).all(|col| corner(&grid, row, col) == 0)));
    }

    // Tests grids too small for a window are left alone
    // Verified by iterating to rows - 2
    #[test]
    fn test_reduce_small_grid() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = ColorGrid::new(3, 3);
        for row in 0..3 {
            for col in 0..3 {
                grid.set(Layer::Corner, row, col, 0);
            }
        }
        assert_eq!(reduce_repetition(&mut grid, &mut rng, &[2; 6], None), 0);
    }
}
