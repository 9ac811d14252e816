//! Tests for connected block discovery and intensity sums

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use tileplane::algorithm::component::{ColorFilter, component, component_sum};
    use tileplane::spatial::{Grid, Position};

    fn l_shape() -> Grid {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), "r", 1);
        grid.set(Position::new(0, 1), "r", 2);
        grid.set(Position::new(0, 2), "g", 3);
        grid.set(Position::new(1, 0), "r", 4);
        grid
    }

    fn positions(points: &[(i32, i32)]) -> HashSet<Position> {
        points.iter().copied().map(Position::from).collect()
    }

    // Tests the L-shape: all four tiles in the mixed block, three in the homogeneous one
    // Verified by ignoring the color filter
    #[test]
    fn test_l_shape_mixed_and_homogeneous() {
        let grid = l_shape();
        let seed = Position::new(0, 0);

        assert_eq!(
            component(&grid, seed, ColorFilter::Any),
            positions(&[(0, 0), (0, 1), (0, 2), (1, 0)])
        );
        assert_eq!(
            component(&grid, seed, ColorFilter::MatchSeed),
            positions(&[(0, 0), (0, 1), (1, 0)])
        );
    }

    // Tests diagonal contact connects tiles
    // Verified by restricting Direction::ALL to axis-aligned moves
    #[test]
    fn test_diagonal_adjacency_connects() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), "a", 1);
        grid.set(Position::new(1, 1), "a", 1);
        grid.set(Position::new(2, 0), "a", 1);
        grid.set(Position::new(5, 5), "a", 1);

        let block = component(&grid, Position::new(0, 0), ColorFilter::Any);
        assert_eq!(block, positions(&[(0, 0), (1, 1), (2, 0)]));
    }

    // Tests the homogeneity test is anchored to the seed color, not the expanding tile
    // Verified by comparing against the current tile's color during expansion
    #[test]
    fn test_homogeneous_block_anchored_to_seed_color() {
        let mut grid = Grid::new();
        // r - g - g chain: a filter anchored on the expanding tile would reach nothing extra,
        // but an r tile beyond g must not be reached through g either
        grid.set(Position::new(0, 0), "r", 1);
        grid.set(Position::new(1, 0), "g", 1);
        grid.set(Position::new(2, 0), "r", 1);

        let block = component(&grid, Position::new(0, 0), ColorFilter::MatchSeed);
        assert_eq!(block, positions(&[(0, 0)]));

        let from_green = component(&grid, Position::new(1, 0), ColorFilter::MatchSeed);
        assert_eq!(from_green, positions(&[(1, 0)]));
    }

    // Tests an unlit seed yields an empty block and a zero sum
    #[test]
    fn test_unlit_seed() {
        let grid = l_shape();
        let seed = Position::new(7, 7);

        assert!(component(&grid, seed, ColorFilter::Any).is_empty());
        assert_eq!(component_sum(&grid, seed, ColorFilter::Any), 0);
        assert_eq!(component_sum(&grid, seed, ColorFilter::MatchSeed), 0);
    }

    // Tests block sums over mixed and homogeneous blocks
    // Verified by summing only the seed's intensity
    #[test]
    fn test_component_sums() {
        let grid = l_shape();
        let seed = Position::new(0, 1);

        assert_eq!(component_sum(&grid, seed, ColorFilter::Any), 10);
        assert_eq!(component_sum(&grid, seed, ColorFilter::MatchSeed), 7);
        assert_eq!(
            component_sum(&grid, Position::new(0, 2), ColorFilter::MatchSeed),
            3
        );
    }

    // Tests a singleton block sums to its own intensity
    #[test]
    fn test_singleton_sum() {
        let mut grid = Grid::new();
        grid.set(Position::new(-4, 9), "x", 13);

        assert_eq!(
            component_sum(&grid, Position::new(-4, 9), ColorFilter::Any),
            13
        );
    }

    // Tests large intensities accumulate without overflow
    #[test]
    fn test_sum_uses_wide_accumulator() {
        let mut grid = Grid::new();
        grid.set(Position::new(0, 0), "x", u32::MAX);
        grid.set(Position::new(0, 1), "x", u32::MAX);

        assert_eq!(
            component_sum(&grid, Position::new(0, 0), ColorFilter::Any),
            2 * u64::from(u32::MAX)
        );
    }

    #[test]
    fn test_filter_from_flag() {
        assert_eq!(ColorFilter::from_same_color(true), ColorFilter::MatchSeed);
        assert_eq!(ColorFilter::from_same_color(false), ColorFilter::Any);
    }

    // Tests blocks do not reach across the coordinate range edge
    // Verified by wrapping neighbor coordinates
    #[test]
    fn test_block_stops_at_range_edge() {
        let mut grid = Grid::new();
        grid.set(Position::new(i32::MIN, 5), "r", 2);
        grid.set(Position::new(i32::MIN + 1, 6), "r", 3);
        grid.set(Position::new(i32::MAX, 5), "r", 7);

        let block = component(&grid, Position::new(i32::MIN, 5), ColorFilter::Any);
        assert_eq!(block, positions(&[(i32::MIN, 5), (i32::MIN + 1, 6)]));
        assert_eq!(component_sum(&grid, Position::new(i32::MAX, 5), ColorFilter::Any), 7);
    }
}
