//! Flat-file persistence: the line codec and the files it is written to.

pub mod codec;
pub mod flat_file;

pub use codec::*;
pub use flat_file::*;
