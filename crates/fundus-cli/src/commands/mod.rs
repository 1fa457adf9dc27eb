pub mod burst;
pub mod config;
pub mod crop;
pub mod enhance;
pub mod info;
pub mod pipeline;
pub mod quality;
pub mod red_free;
