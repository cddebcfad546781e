//! Text I/O for network description files.

pub mod reader;
pub mod writer;

pub use reader::GraphReader;
pub use writer::GraphWriter;
