//! Randomized property sweeps over tables built from seeded random data.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tabula_math::bracket;
use tabula_table::{Table1D, Table2D};

use crate::{init_tracing, random_axis, random_values};

const SEED: u64 = 0x7ab1_a5ee_d000_0001;
const TRIALS: usize = 64;

fn random_table1d(rng: &mut StdRng) -> Table1D {
    let len = rng.gen_range(1..40);
    let xs = random_axis(rng, len);
    let ys = random_values(rng, len);
    Table1D::from_xy(xs, ys).unwrap()
}

fn random_table2d(rng: &mut StdRng) -> Table2D {
    let m = rng.gen_range(1..12);
    let n = rng.gen_range(1..12);
    let xs = random_axis(rng, m);
    let ys = random_axis(rng, n);
    let values = random_values(rng, m * n);
    Table2D::from_flat(xs, ys, values).unwrap()
}

#[test]
fn exact_match_1d() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..TRIALS {
        let table = random_table1d(&mut rng);
        for (x, y) in table.samples() {
            assert_eq!(table.evaluate(x).to_bits(), y.to_bits());
        }
    }
}

#[test]
fn clamp_1d() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 1);
    for _ in 0..TRIALS {
        let table = random_table1d(&mut rng);
        let (min, max) = table.domain();
        let first = table.ys()[0];
        let last = table.ys()[table.len() - 1];
        for _ in 0..16 {
            let below = min - rng.gen_range(1e-9..1e6);
            let above = max + rng.gen_range(1e-9..1e6);
            assert_eq!(table.evaluate(below), first);
            assert_eq!(table.evaluate(above), last);
        }
    }
}

#[test]
fn interpolation_stays_within_neighbors_1d() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 2);
    for _ in 0..TRIALS {
        let table = random_table1d(&mut rng);
        let (xs, ys) = (table.xs(), table.ys());
        for k in 0..xs.len().saturating_sub(1) {
            let (lo, hi) = (ys[k].min(ys[k + 1]), ys[k].max(ys[k + 1]));
            for _ in 0..8 {
                let x = rng.gen_range(xs[k]..=xs[k + 1]);
                let v = table.evaluate(x);
                assert!((lo..=hi).contains(&v), "{v} outside [{lo}, {hi}] at x = {x}");
            }
        }
    }
}

#[test]
fn idempotent_1d() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 3);
    let table = random_table1d(&mut rng);
    let (min, max) = table.domain();
    for _ in 0..256 {
        let x = rng.gen_range(min - 10.0..max + 10.0);
        let first = table.evaluate(x);
        for _ in 0..4 {
            assert_eq!(table.evaluate(x).to_bits(), first.to_bits());
        }
    }
}

#[test]
fn agrees_with_formula_1d() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 4);
    for _ in 0..TRIALS {
        let table = random_table1d(&mut rng);
        let (xs, ys) = (table.xs(), table.ys());
        let (min, max) = table.domain();
        for _ in 0..16 {
            let x = rng.gen_range(min..=max);
            let b = bracket(xs, x);
            let want = if b.is_exact() {
                ys[b.lo]
            } else {
                let (x0, x1, y0, y1) = (xs[b.lo], xs[b.hi], ys[b.lo], ys[b.hi]);
                y0 + (y1 - y0) * (x - x0) / (x1 - x0)
            };
            approx::assert_relative_eq!(table.evaluate(x), want, epsilon = 1e-9, max_relative = 1e-9);
        }
    }
}

#[test]
fn exact_match_2d() {
    init_tracing();
    let mut rng = StdRng::seed_from_u64(SEED ^ 5);
    for _ in 0..TRIALS {
        let table = random_table2d(&mut rng);
        let (xs, ys) = (table.x_axis().as_slice(), table.y_axis().as_slice());
        for (i, &x) in xs.iter().enumerate() {
            for (j, &y) in ys.iter().enumerate() {
                let stored = table.get(i, j).unwrap();
                assert_eq!(table.evaluate(x, y).to_bits(), stored.to_bits());
            }
        }
    }
}

#[test]
fn per_axis_clamp_2d() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 6);
    for _ in 0..TRIALS {
        let table = random_table2d(&mut rng);
        let (x_axis, y_axis) = (table.x_axis(), table.y_axis());
        for _ in 0..16 {
            let x = rng.gen_range(x_axis.min()..=x_axis.max());
            let y = rng.gen_range(y_axis.min()..=y_axis.max());
            let out = rng.gen_range(1e-9..1e6);

            assert_eq!(table.evaluate(x_axis.min() - out, y), table.evaluate(x_axis.min(), y));
            assert_eq!(table.evaluate(x_axis.max() + out, y), table.evaluate(x_axis.max(), y));
            assert_eq!(table.evaluate(x, y_axis.min() - out), table.evaluate(x, y_axis.min()));
            assert_eq!(table.evaluate(x, y_axis.max() + out), table.evaluate(x, y_axis.max()));
        }
    }
}

#[test]
fn bilinear_stays_within_cell_corners_2d() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 7);
    for _ in 0..TRIALS {
        let table = random_table2d(&mut rng);
        let (x_axis, y_axis) = (table.x_axis(), table.y_axis());
        for _ in 0..16 {
            let x = rng.gen_range(x_axis.min()..=x_axis.max());
            let y = rng.gen_range(y_axis.min()..=y_axis.max());
            let (bx, by) = (x_axis.bracket(x), y_axis.bracket(y));

            let corners = [
                table.get(bx.lo, by.lo).unwrap(),
                table.get(bx.hi, by.lo).unwrap(),
                table.get(bx.lo, by.hi).unwrap(),
                table.get(bx.hi, by.hi).unwrap(),
            ];
            let lo = corners.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = corners.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let v = table.evaluate(x, y);
            assert!((lo..=hi).contains(&v), "{v} outside [{lo}, {hi}] at ({x}, {y})");
        }
    }
}

#[test]
fn bounded_at_extreme_magnitudes() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 9);
    for _ in 0..TRIALS {
        // full-range draws would overflow the sampler's own span
        let a = rng.gen_range(-1.0..1.0) * f64::MAX;
        let b = rng.gen_range(-1.0..1.0) * f64::MAX;
        let (x0, x1) = (-rng.gen_range(1e300..1e308), rng.gen_range(1e300..1e308));
        let table = Table1D::new([(x0, a), (x1, b)]).unwrap();
        let (lo, hi) = (a.min(b), a.max(b));
        for _ in 0..16 {
            let t = rng.gen_range(0.0..=1.0);
            let x = x0 * (1.0 - t) + x1 * t;
            let v = table.evaluate(x);
            assert!((lo..=hi).contains(&v), "{v} outside [{lo}, {hi}] at x = {x}");
        }
    }
}

#[test]
fn batch_matches_scalar() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 8);
    let t1 = random_table1d(&mut rng);
    let t2 = random_table2d(&mut rng);

    let xs: Vec<f64> = (0..2048).map(|_| rng.gen_range(-300.0..300.0)).collect();
    let points: Vec<(f64, f64)> = xs.iter().map(|&x| (x, rng.gen_range(-300.0..300.0))).collect();

    for (&x, v) in xs.iter().zip(t1.evaluate_many(&xs)) {
        assert_eq!(v.to_bits(), t1.evaluate(x).to_bits());
    }
    for (&(x, y), v) in points.iter().zip(t2.evaluate_many(&points)) {
        assert_eq!(v.to_bits(), t2.evaluate(x, y).to_bits());
    }
}
