//! Real-world scenario benchmarks.
//!
//! These drive the sequencer the way a modem scheduler does: submit frames,
//! then tick until the transmission completes.

mod transmit;

pub use transmit::bench_transmit;
