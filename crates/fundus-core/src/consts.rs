/// Minimum pixel count (h*w) to use band-level Rayon parallelism.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// ITU-R BT.601 luminance coefficient for the red channel.
pub const LUMINANCE_R: f32 = 0.299;

/// ITU-R BT.601 luminance coefficient for the green channel.
pub const LUMINANCE_G: f32 = 0.587;

/// ITU-R BT.601 luminance coefficient for the blue channel.
pub const LUMINANCE_B: f32 = 0.114;

/// Width frames are resized to before sharpness scoring, so scores from
/// different capture resolutions stay comparable.
pub const SHARPNESS_WORKING_WIDTH: u32 = 256;

/// Number of histogram bins for 8-bit luminance.
pub const HISTOGRAM_BINS: usize = 256;

/// Default number of frames grabbed per burst.
pub const DEFAULT_BURST_COUNT: usize = 5;

/// Default pause between two grabs of a burst, in milliseconds.
pub const DEFAULT_INTER_FRAME_DELAY_MS: u64 = 110;

/// Default contrast enhancement tile edge, in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 64;

/// Default contrast enhancement clip limit (fraction of tile pixels per bin).
pub const DEFAULT_CLIP_LIMIT: f64 = 0.01;

/// Fraction of the frame dimensions used for the radii of the initial ellipse.
pub const DEFAULT_ELLIPSE_RADIUS_FRACTION: f64 = 0.35;

/// JPEG quality used for photographic output.
pub const JPEG_QUALITY: u8 = 92;
