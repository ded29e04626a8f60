/// Returns `true` when every packed pixel of the buffer is zero (fully
/// transparent black).
#[must_use]
pub fn is_pixel_buffer_blank(pixels: &[u32]) -> bool {
    pixels.iter().all(|&pixel| pixel == 0)
}

/// Byte-oriented variant for RGBA8 buffers read back from a drawing surface.
#[must_use]
pub fn is_rgba_buffer_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(|&byte| byte == 0)
}
