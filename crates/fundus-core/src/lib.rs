pub mod capture;
pub mod color;
pub mod consts;
pub mod crop;
pub mod error;
pub mod filters;
pub mod frame;
pub mod io;
pub mod pipeline;
pub mod quality;
