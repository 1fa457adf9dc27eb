use crate::frame::Frame;

/// Red-free view: the green channel copied into R, G and B.
///
/// Retinal vessels and haemorrhages show the most contrast in green light.
pub fn red_free(frame: &Frame) -> Frame {
    let mut image = frame.image().clone();
    for px in image.pixels_mut() {
        let g = px.0[1];
        px.0[0] = g;
        px.0[2] = g;
    }
    Frame::derived(image)
}
