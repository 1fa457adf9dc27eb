pub mod clahe;
pub mod red_free;

pub use clahe::{enhance, EnhanceParams};
pub use red_free::red_free;
