pub mod laplacian;

pub use laplacian::{rank_frames, sharpness};
