use distance_field::{
    reference, transform, transform_2d, transform_indicator, transform_indicator_2d, Error, Grid,
};
use vek::Vec2;

#[test]
fn degenerate_lengths() {
    assert_eq!(transform(&[]), Vec::<f64>::new());
    assert_eq!(transform(&[5.0]), vec![5.0]);
}

#[test]
fn indicator_run_of_sites() {
    let indicator = [false, true, true, true, false];
    assert_eq!(transform_indicator(&indicator), vec![1.0, 0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn all_false_indicator_gives_zeros() {
    for n in [0, 1, 5, 300] {
        assert_eq!(transform_indicator(&vec![false; n]), vec![0.0; n]);
    }
    let d = transform_indicator_2d(&Grid::new(Vec2::new(8, 5), false).unwrap());
    assert_eq!(d, Grid::new(Vec2::new(8, 5), 0.0).unwrap());
}

#[test]
fn sine_samples_match_reference() {
    let f: Vec<f64> = (0..10).map(|i| (i as f64).sin()).collect();
    let fast = transform(&f);
    let slow = reference::transform(&f);
    for (a, b) in fast.iter().zip(&slow) {
        assert!((a - b).abs() < 1e-12, "{fast:?} vs {slow:?}");
    }
}

#[test]
fn wide_block_of_sites() {
    let indicator: Vec<bool> = std::iter::repeat(false)
        .take(300)
        .chain(std::iter::repeat(true).take(200))
        .chain(std::iter::repeat(false).take(300))
        .collect();
    let d = transform_indicator(&indicator);
    assert_eq!(d.len(), 800);
    assert_eq!(d[0], 300.0 * 300.0);
    assert_eq!(d[299], 1.0);
    assert!(d[300..500].iter().all(|v| *v == 0.0));
    assert_eq!(d[799], 300.0 * 300.0);
    assert_eq!(d, reference::transform_indicator(&indicator));
}

#[test]
fn single_cell_gives_paraboloid() {
    let size = Vec2::new(13, 9);
    for site in [Vec2::new(0, 0), Vec2::new(6, 4), Vec2::new(12, 8), Vec2::new(3, 8)] {
        let mut mask = Grid::new(size, false).unwrap();
        mask.set(site, true);
        let d = transform_indicator_2d(&mask);
        for (pos, v) in d.iter() {
            let e = pos - site;
            assert_eq!(*v, (e.x * e.x + e.y * e.y) as f64, "site {site:?} at {pos:?}");
        }
    }
}

#[test]
fn cost_field_seeds_are_lower_bounds() {
    // A site of cost 3 at (1, 1) and one of cost 0 at (6, 1).
    let mut costs = Grid::new(Vec2::new(8, 3), f64::INFINITY).unwrap();
    costs.set(Vec2::new(1, 1), 3.0);
    costs.set(Vec2::new(6, 1), 0.0);
    let d = transform_2d(&costs);
    assert_eq!(d.get(Vec2::new(1, 1)), Some(&3.0));
    assert_eq!(d.get(Vec2::new(0, 0)), Some(&5.0));
    assert_eq!(d.get(Vec2::new(4, 1)), Some(&4.0));
    assert_eq!(d.get(Vec2::new(7, 2)), Some(&2.0));
}

/// The transform is not idempotent on cost fields: feeding a distance field
/// back in as base costs lowers it, so only mask-seeded fields have a fixed
/// geometric meaning.
#[test]
fn reapplying_to_output_is_not_idempotent() {
    let mut indicator = vec![false; 5];
    indicator[0] = true;
    let once = transform_indicator(&indicator);
    assert_eq!(once, vec![0.0, 1.0, 4.0, 9.0, 16.0]);
    let twice = transform(&once);
    assert_ne!(twice, once);
    assert_eq!(twice[4], 8.0);
    assert!(twice.iter().zip(&once).all(|(a, b)| a <= b));

    let mut mask = Grid::new(Vec2::new(5, 5), false).unwrap();
    mask.set(Vec2::new(0, 0), true);
    let once = transform_indicator_2d(&mask);
    assert_ne!(transform_2d(&once), once);
}

#[test]
fn extreme_finite_costs_match_reference() {
    let max = f64::MAX;
    for f in [
        vec![max, -max],
        vec![-max, max],
        vec![max, -max, max, -max],
        vec![1.0, max, -max / 2.0, 0.0, max],
    ] {
        assert_eq!(transform(&f), reference::transform(&f), "{f:?}");
    }
}

#[test]
fn negative_extent_is_reported() {
    assert_eq!(
        Grid::new(Vec2::new(-3, 4), 0.0),
        Err(Error::InvalidExtent {
            expected: Vec2::new(0, 4),
            actual: Vec2::new(-3, 4),
        })
    );
}

#[test]
fn empty_grids() {
    assert!(transform_2d(&Grid::new(Vec2::new(0, 0), 0.0).unwrap()).is_empty());
    assert!(transform_indicator_2d(&Grid::new(Vec2::new(3, 0), false).unwrap()).is_empty());
}
