pub mod image_io;
pub mod sequence;

pub use image_io::{decode_frame, encode_frame, load_frame, save_frame, OutputFormat};
pub use sequence::FileSequence;
