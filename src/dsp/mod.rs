//! Low-level DSP primitives used by the transmit sequencer.
//!
//! These components work on q15 fixed-point samples, never allocate after
//! construction and are total over their inputs, so the sequencer can call them
//! from a realtime scheduling slot without any error path.

/// Polyphase q15 FIR interpolator.
pub mod fir;
/// Root-raised-cosine shaping filter built on [`fir::FirInterpolator`].
pub mod rrc;
/// Byte to 4-level symbol mapping.
pub mod symbol;

pub use fir::FirInterpolator;
pub use rrc::RrcInterpolator;
pub use symbol::{map_byte, Deviation};
