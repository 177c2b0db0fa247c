/// Bytes per row once padded up to the copy alignment the GPU requires.
#[must_use]
pub fn padded_bytes_per_row(width: u32, alignment: u32) -> u32 {
    let unpadded = width * 4;
    unpadded.div_ceil(alignment) * alignment
}

/// Drops the per-row padding of a texture readback, leaving tightly packed RGBA8.
#[must_use]
pub fn strip_row_padding(padded: &[u8], width: u32, height: u32, padded_row: u32) -> Vec<u8> {
    let row = width as usize * 4;
    let mut rgba = Vec::with_capacity(row * height as usize);

    for chunk in padded.chunks(padded_row as usize).take(height as usize) {
        rgba.extend_from_slice(&chunk[..row.min(chunk.len())]);
    }

    rgba
}
