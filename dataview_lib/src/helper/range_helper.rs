use crate::field_types::{ByteLength, RequestIndex, Width};

/// check if the window [start, start + width) lies inside [0, limit)
pub fn window_fits(start: RequestIndex, width: Width, limit: ByteLength) -> bool {
    match start.checked_add(width as u64) {
        Some(end) => end <= limit as u64,
        None => false,
    }
}
