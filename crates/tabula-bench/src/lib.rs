//! Benchmark harness for tabula.
//!
//! The benchmarks live in `benches/`; this crate has no library API.
