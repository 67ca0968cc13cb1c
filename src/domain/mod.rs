pub mod image_file;
pub mod input_source;
pub mod output_path;
pub mod padder;

// --- public re-exports ---
pub use padder::{pad, PadError, PadRequest};
