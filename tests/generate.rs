use mazewright::{Generator, Grid, MazeError, Walls, generate, generate_maze};

fn carved_set(grid: &Grid) -> Vec<((usize, usize), (usize, usize))> {
    mazewright::maze::all_edges(grid)
        .into_iter()
        .filter(|&(a, b)| grid.is_open(a, b).unwrap())
        .collect()
}

#[test]
fn test_kruskal_2x2_seed_42() {
    let grid = generate(2, 2, "kruskal", Some(42)).expect("2x2 kruskal failed");
    assert_eq!(grid.carved_edges(), 3);
    assert_eq!(carved_set(&grid).len(), 3);
    for a in [(0, 0), (0, 1), (1, 0), (1, 1)] {
        for b in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            assert!(grid.is_connected(a, b).unwrap(), "{a:?} cannot reach {b:?}");
        }
    }

    let again = generate(2, 2, "kruskal", Some(42)).unwrap();
    assert_eq!(carved_set(&grid), carved_set(&again));
}

#[test]
fn test_different_seed_still_valid() {
    for seed in 0..20 {
        let grid = generate(2, 2, "kruskal", Some(seed)).unwrap();
        assert_eq!(carved_set(&grid).len(), 3);
        assert!(grid.is_perfect());
    }
}

#[test]
fn test_seeds_produce_variety() {
    for generator in Generator::ALL {
        let first = generate_maze(8, 8, generator, Some(0)).unwrap();
        let differs =
            (1..20).any(|seed| generate_maze(8, 8, generator, Some(seed)).unwrap() != first);
        assert!(differs, "{generator} ignores its seed");
    }
}

#[test]
fn test_single_cell_keeps_all_walls() {
    for generator in Generator::ALL {
        let grid = generate_maze(1, 1, generator, Some(9)).unwrap();
        assert_eq!(grid.carved_edges(), 0);
        assert_eq!(grid.cell_at(0, 0).unwrap().walls, Walls::ALL);
    }
}

#[test]
fn test_corridors() {
    for generator in Generator::ALL {
        for (rows, cols) in [(1, 12), (12, 1)] {
            let grid = generate_maze(rows, cols, generator, Some(3)).unwrap();
            assert_eq!(grid.carved_edges(), rows * cols - 1);
            assert!(grid.is_connected((0, 0), (rows - 1, cols - 1)).unwrap());
        }
    }
}

#[test]
fn test_errors() {
    assert_eq!(
        generate(0, 0, "prim", None),
        Err(MazeError::InvalidDimension { rows: 0, cols: 0 })
    );
    assert_eq!(
        generate(5, 5, "binary-tree", None),
        Err(MazeError::UnknownAlgorithm("binary-tree".to_string()))
    );
}

#[test]
fn test_large_backtracker_does_not_overflow_stack() {
    let grid = generate_maze(300, 300, Generator::RecurBacktrack, Some(1)).unwrap();
    assert!(grid.is_perfect());
}
