// Purpose - external interfaces, format conversions

pub mod converter;
pub mod memory;
pub mod ring;
pub mod sink;

pub use memory::MemorySink;
pub use ring::RingSink;
pub use sink::{ModemState, SampleSink};
