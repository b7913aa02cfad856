use lifegrid::Cell;
use lifegrid::Grid;
use lifegrid::pattern;
use lifegrid::step::advance;

fn advance_n(grid: &Grid, n: usize) -> Grid {
    let mut grid = grid.clone();

    for _ in 0..n {
        grid = advance(&grid);
    }

    grid
}

#[test]
fn test_patterns_round_trip() -> anyhow::Result<()> {
    let pattern_dir = std::fs::read_dir("tests/patterns")?;
    let mut tested = 0;
    let mut failed = Vec::new();

    for entry in pattern_dir {
        let path = entry?.path();
        let text = std::fs::read_to_string(&path)?;

        match pattern::load_pattern(&path) {
            Ok(grid) if pattern::write_pattern(&grid) == text => tested += 1,
            Ok(_) => failed.push((path.clone(), "dump differs from file".to_string())),
            Err(e) => failed.push((path.clone(), format!("{e:#}"))),
        }
    }

    if !failed.is_empty() {
        for (path, err) in &failed {
            eprintln!("Failed on {:?}: {}", path, err);
        }

        panic!(
            "{}/{} patterns failed",
            failed.len(),
            tested + failed.len()
        );
    }

    assert!(tested > 0, "no patterns found");

    Ok(())
}

#[test]
fn test_oscillator_periods() -> anyhow::Result<()> {
    let periods = [
        ("block.txt", 1),
        ("blinker.txt", 2),
        ("toad.txt", 2),
        ("beacon.txt", 2),
    ];

    for (name, period) in periods {
        let grid = pattern::load_pattern(format!("tests/patterns/{name}"))?;

        assert_eq!(advance_n(&grid, period), grid, "{name} has period {period}");

        for n in 1..period {
            assert_ne!(advance_n(&grid, n), grid, "{name} returned early at {n}");
        }
    }

    Ok(())
}

#[test]
fn test_blinker_flips() -> anyhow::Result<()> {
    let grid = pattern::load_pattern("tests/patterns/blinker.txt")?;

    // loaded lines are the first axis: the blinker lies along x at y = 2
    for x in 0..5 {
        for y in 0..5 {
            let live = y == 2 && (1..=3).contains(&x);
            assert_eq!(grid.get(x, y), Cell::from(live), "({x}, {y})");
        }
    }

    let next = advance(&grid);

    insta::assert_snapshot!(pattern::write_pattern(&next), @r"
    00000
    00000
    01110
    00000
    00000
    ");

    assert_eq!(advance(&next), grid);

    Ok(())
}

#[test]
fn test_save_then_load() -> anyhow::Result<()> {
    let grid = lifegrid::seed::seeded_grid(17, 9, 99)?;
    let path = std::env::temp_dir().join(format!("lifegrid-{}.txt", std::process::id()));

    pattern::save_pattern(&grid, &path)?;
    let loaded = pattern::load_pattern(&path);
    std::fs::remove_file(&path)?;

    assert_eq!(loaded?, grid);

    Ok(())
}

#[test]
fn test_missing_file() {
    let err = pattern::load_pattern("tests/patterns/does-not-exist.txt").unwrap_err();

    assert!(matches!(err, pattern::PatternError::Io { .. }));
    assert!(err.to_string().contains("does-not-exist.txt"));
}
