/// Samples per RGBA8 pixel.
pub const RGBA_PLANES: usize = 4;

/// Replacement written over every near-white pixel.
pub const TRANSPARENT_WHITE: [u8; RGBA_PLANES] = [255, 255, 255, 0];

/// Whether red, green and blue all strictly exceed `threshold`.
///
/// Alpha takes no part in the decision.
#[inline(always)]
pub fn is_near_white(pixel: &[u8], threshold: u8) -> bool {
    pixel[0] > threshold && pixel[1] > threshold && pixel[2] > threshold
}

/// Write the whiteout of `src` into `dst`, returns whether the pixel was cleared.
#[inline(always)]
pub fn whiteout_into(src: &[u8], dst: &mut [u8], threshold: u8) -> bool {
    if is_near_white(src, threshold) {
        dst.copy_from_slice(&TRANSPARENT_WHITE);
        true
    } else {
        dst.copy_from_slice(src);
        false
    }
}
