//! Integration tests for tabula crates.
//!
//! This crate holds end-to-end scenarios and randomized property sweeps that
//! exercise `tabula-math` and `tabula-table` together. The helpers below are
//! shared by the test modules.

use std::sync::Once;

use rand::Rng;
use tracing_subscriber::EnvFilter;

#[cfg(test)]
mod properties;

/// Installs a test-friendly tracing subscriber once per process.
///
/// Honors `RUST_LOG`; defaults to `warn` so construction chatter stays quiet.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
    });
}

/// Generates `len` strictly increasing coordinates with random spacing.
pub fn random_axis<R: Rng>(rng: &mut R, len: usize) -> Vec<f64> {
    let mut next = rng.gen_range(-100.0..100.0);
    (0..len)
        .map(|_| {
            let v = next;
            next += rng.gen_range(0.01..10.0);
            v
        })
        .collect()
}

/// Generates `len` random values in `[-1000, 1000)`.
pub fn random_values<R: Rng>(rng: &mut R, len: usize) -> Vec<f64> {
    (0..len).map(|_| rng.gen_range(-1000.0..1000.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::sync::Arc;
    use std::thread;
    use tabula_table::{Table1D, Table2D, TableError};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_tables_are_send_sync() {
        assert_send_sync::<Table1D>();
        assert_send_sync::<Table2D>();
        assert_send_sync::<TableError>();
    }

    /// An "expensive" function approximated by a table, queried in a loop.
    #[test]
    fn test_approximate_expensive_function() {
        init_tracing();

        let expensive = |x: f64| (x * 0.5).sin() * x.exp().ln_1p();
        let nodes: Vec<f64> = (0..=400).map(|i| i as f64 * 0.025).collect();
        let table = Table1D::from_fn(nodes.iter().copied(), expensive).unwrap();

        for i in 0..1000 {
            let x = i as f64 * 0.00999;
            assert_relative_eq!(table.evaluate(x), expensive(x), epsilon = 1e-3);
        }
    }

    #[test]
    fn test_surface_reproduces_bilinear_function() {
        init_tracing();

        let f = |x: f64, y: f64| 3.0 + 2.0 * x - 0.5 * y + 0.25 * x * y;
        let table = Table2D::from_fn(vec![-2.0, 0.0, 1.5, 4.0], vec![-1.0, 3.0, 8.0], f).unwrap();

        for i in 0..30 {
            for j in 0..30 {
                let x = -2.0 + i as f64 * 0.2;
                let y = -1.0 + j as f64 * 0.3;
                assert_relative_eq!(table.evaluate(x, y), f(x, y), epsilon = 1e-9, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_shared_across_threads() {
        init_tracing();

        let table = Arc::new(
            Table2D::from_fn(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 0.5, 1.0], |x, y| x * x - y).unwrap(),
        );
        let queries: Vec<(f64, f64)> = (0..500).map(|i| (i as f64 * 0.007, i as f64 * 0.003)).collect();
        let expected: Vec<f64> = queries.iter().map(|&(x, y)| table.evaluate(x, y)).collect();

        thread::scope(|s| {
            for _ in 0..8 {
                let table = Arc::clone(&table);
                let queries = &queries;
                let expected = &expected;
                s.spawn(move || {
                    for (&(x, y), &want) in queries.iter().zip(expected) {
                        assert_eq!(table.evaluate(x, y).to_bits(), want.to_bits());
                    }
                });
            }
        });
    }

    #[test]
    fn test_replace_by_rebuilding() {
        let mut current = Arc::new(Table1D::new([(0.0, 0.0), (1.0, 1.0)]).unwrap());
        let reader = Arc::clone(&current);

        current = Arc::new(Table1D::new([(0.0, 0.0), (1.0, 2.0)]).unwrap());

        assert_eq!(reader.evaluate(0.5), 0.5);
        assert_eq!(current.evaluate(0.5), 1.0);
    }

    #[test]
    fn test_construction_errors_surface() {
        init_tracing();

        assert!(matches!(Table1D::new(Vec::new()), Err(TableError::Empty { .. })));
        assert!(matches!(
            Table1D::new([(1.0, 1.0), (1.0, 2.0)]),
            Err(TableError::DuplicateAbscissa { .. })
        ));
        assert!(matches!(
            Table2D::new(vec![0.0, 1.0], vec![0.0, 1.0, 2.0], vec![vec![0.0; 2]; 2]),
            Err(TableError::GridShapeMismatch { expected: (2, 3), got: (2, 2) })
        ));
        assert!(matches!(
            Table2D::new(vec![0.0, 2.0, 1.0], vec![0.0], vec![vec![0.0]; 3]),
            Err(TableError::UnsortedOrDuplicateAxis { axis: "x-axis", .. })
        ));
        assert!(matches!(
            Table2D::new(vec![], vec![0.0], vec![]),
            Err(TableError::Empty { what: "x-axis" })
        ));
    }
}
