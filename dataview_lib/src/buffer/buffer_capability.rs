use crate::error::Result;
use crate::field_types::{ByteLength, ByteOffset, Width};

/// Trait for handles to raw, contiguous byte storage
///
/// Raw access is only valid while the storage is not detached,
/// the byte window handed to the closure must not escape it.
pub trait BufferCapability {
    /// current length, 0 once detached
    fn byte_length(&self) -> ByteLength;
    /// true once the storage was transferred away
    fn is_detached(&self) -> bool;
    /// read `width` bytes starting at `offset`
    fn raw_access<R, F>(&self, offset: ByteOffset, width: Width, f: F) -> Result<R>
        where F: FnOnce(&[u8]) -> R;
    /// write `width` bytes starting at `offset`
    fn raw_access_mut<R, F>(&self, offset: ByteOffset, width: Width, f: F) -> Result<R>
        where F: FnOnce(&mut [u8]) -> R;
}
