//! Benchmarks for low-level DSP primitives.

mod fir;
mod symbol;

pub use fir::bench_fir;
pub use symbol::bench_symbol;
