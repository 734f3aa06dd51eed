pub mod loader;
pub mod source;
pub mod timestamp;

pub use loader::{build_recording, load_recording, read_document, LoadOptions, RawDocument, RawFrame};
pub use source::{clamp_low, SourceKind};
