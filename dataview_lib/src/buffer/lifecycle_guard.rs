use crate::buffer::buffer_capability::BufferCapability;
use crate::error::{ErrorType, Result, Site};

/// true iff the buffer was not detached
///
/// Only byte access consults this, the buffer, byteLength and byteOffset accessors do not.
pub fn is_access_safe<B: BufferCapability>(buffer: &B) -> bool {
    !buffer.is_detached()
}

pub fn ensure_access_safe<B: BufferCapability>(buffer: &B, site: Site) -> Result<()> {
    if is_access_safe(buffer) {
        Ok(())
    } else {
        Err(ErrorType::DetachedBuffer(site))
    }
}
