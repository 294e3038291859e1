// Purpose: Frame queueing and the preamble / data / hang transmit sequence
// This layer sits above the DSP primitives and drives a SampleSink

pub mod config;
pub mod error;
pub mod queue;
pub mod sequencer;
