//! Tests for the 8-direction neighborhood and move tokens

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use tileplane::spatial::{Direction, Position, neighbors};

    // Tests the neighborhood is exactly the eight surrounding cells
    // Verified by dropping one diagonal from Direction::ALL
    #[test]
    fn test_neighbors_are_the_eight_surrounding_cells() {
        let center = Position::new(10, -4);
        let found: HashSet<Position> = neighbors(center).collect();

        let mut expected = HashSet::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                if (dx, dy) != (0, 0) {
                    expected.insert(Position::new(center.x + dx, center.y + dy));
                }
            }
        }

        assert_eq!(found, expected);
        assert!(!found.contains(&center));
    }

    // Tests every token parses back to the direction it names
    // Verified by swapping the NE and NO offsets
    #[test]
    fn test_tokens_round_trip_and_offsets() {
        let expected = [
            ("NN", (0, 1)),
            ("NE", (1, 1)),
            ("EE", (1, 0)),
            ("SE", (1, -1)),
            ("SS", (0, -1)),
            ("SO", (-1, -1)),
            ("OO", (-1, 0)),
            ("NO", (-1, 1)),
        ];

        for (token, offset) in expected {
            let direction = Direction::from_token(token).unwrap();
            assert_eq!(direction.offset(), offset, "offset for {token}");
            assert_eq!(direction.token(), token);
            assert_eq!(direction.to_string(), token);
        }
    }

    // Tests English west spellings are accepted and unknown tokens rejected
    #[test]
    fn test_token_aliases_and_rejections() {
        assert_eq!(Direction::from_token("SW"), Some(Direction::SouthWest));
        assert_eq!(Direction::from_token("WW"), Some(Direction::West));
        assert_eq!(Direction::from_token("NW"), Some(Direction::NorthWest));
        assert_eq!(Direction::from_token("N"), None);
        assert_eq!(Direction::from_token("nn"), None);
        assert_eq!(Direction::from_token(""), None);
    }

    // Tests stepping applies the offset to the position
    #[test]
    fn test_step() {
        let origin = Position::new(0, 0);
        assert_eq!(Direction::SouthEast.step(origin), Some(Position::new(1, -1)));
        assert_eq!(
            Direction::East.step(origin).and_then(|pos| Direction::West.step(pos)),
            Some(origin),
            "opposite moves cancel"
        );
        assert_eq!(Direction::East.step(Position::new(i32::MAX, 0)), None);
    }

    // Tests positions on the range edge only see neighbors inside the range
    // Verified by wrapping neighbor coordinates around the edge
    #[test]
    fn test_neighbors_at_range_edge() {
        let east_edge: HashSet<Position> = neighbors(Position::new(i32::MAX, 0)).collect();
        assert_eq!(east_edge.len(), 5);
        assert!(east_edge.iter().all(|pos| pos.x == i32::MAX || pos.x == i32::MAX - 1));

        let corner: HashSet<Position> = neighbors(Position::new(i32::MIN, i32::MIN)).collect();
        let expected: HashSet<Position> = [
            (i32::MIN + 1, i32::MIN),
            (i32::MIN, i32::MIN + 1),
            (i32::MIN + 1, i32::MIN + 1),
        ]
        .into_iter()
        .map(Position::from)
        .collect();
        assert_eq!(corner, expected);
    }
}
