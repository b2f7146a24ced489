use std::cell::RefCell;
use std::fmt::{self, Debug, Formatter};
use std::rc::{Rc, Weak};
use crate::buffer::buffer_capability::BufferCapability;
use crate::error::{ErrorType, Result, Site};
use crate::field_types::{ByteLength, ByteOffset, Width};
use crate::log_buffer_detached;

/// backing store shared between the owner and all views
///
/// `None` after the buffer was detached
struct Storage {
    bytes: Option<Vec<u8>>,
}

impl Storage {

    fn window(&self, offset: ByteOffset, width: Width) -> Result<&[u8]> {
        let bytes = self.bytes.as_deref().ok_or(ErrorType::DetachedBuffer(Site::Storage))?;
        let end = checked_end(offset, width, bytes.len())?;
        Ok(&bytes[offset..end])
    }

    fn window_mut(&mut self, offset: ByteOffset, width: Width) -> Result<&mut [u8]> {
        let bytes = self.bytes.as_deref_mut().ok_or(ErrorType::DetachedBuffer(Site::Storage))?;
        let end = checked_end(offset, width, bytes.len())?;
        Ok(&mut bytes[offset..end])
    }
}

fn checked_end(offset: ByteOffset, width: Width, buffer_length: ByteLength) -> Result<usize> {
    match offset.checked_add(width) {
        Some(end) if end <= buffer_length => Ok(end),
        _ => Err(ErrorType::RawAccessOutOfRange { offset, width, buffer_length }),
    }
}

/// An owned, fixed size, detachable byte buffer
///
/// Cloning shares ownership of the same storage.
#[derive(Clone)]
pub struct ArrayBuffer {
    inner: Rc<RefCell<Storage>>,
}

/// A non-owning handle to an ArrayBuffer
///
/// Never keeps the storage alive, a buffer whose owners are gone behaves like a detached one.
#[derive(Clone)]
pub struct BufferRef {
    inner: Weak<RefCell<Storage>>,
}

impl ArrayBuffer {

    /// zero filled buffer
    pub fn new(byte_length: ByteLength) -> ArrayBuffer {
        ArrayBuffer::from_bytes(vec![0u8; byte_length])
    }

    pub fn from_bytes(bytes: Vec<u8>) -> ArrayBuffer {
        ArrayBuffer {
            inner: Rc::new(RefCell::new(Storage { bytes: Some(bytes) })),
        }
    }

    /// transfer the storage out of the buffer
    ///
    /// returns None if the buffer was already detached
    pub fn detach(&self) -> Option<Vec<u8>> {
        let bytes = self.inner.borrow_mut().bytes.take()?;
        log_buffer_detached!(bytes.len());
        Some(bytes)
    }

    /// copy of the current content, empty once detached
    pub fn to_vec(&self) -> Vec<u8> {
        self.inner.borrow().bytes.clone().unwrap_or_default()
    }

    pub fn downgrade(&self) -> BufferRef {
        BufferRef {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// true if both handles share the same storage
    pub fn same_buffer(&self, other: &ArrayBuffer) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl BufferCapability for ArrayBuffer {
    fn byte_length(&self) -> ByteLength {
        self.inner.borrow().bytes.as_ref().map_or(0, Vec::len)
    }

    fn is_detached(&self) -> bool {
        self.inner.borrow().bytes.is_none()
    }

    fn raw_access<R, F>(&self, offset: ByteOffset, width: Width, f: F) -> Result<R>
        where F: FnOnce(&[u8]) -> R
    {
        let storage = self.inner.borrow();
        Ok(f(storage.window(offset, width)?))
    }

    fn raw_access_mut<R, F>(&self, offset: ByteOffset, width: Width, f: F) -> Result<R>
        where F: FnOnce(&mut [u8]) -> R
    {
        let mut storage = self.inner.borrow_mut();
        Ok(f(storage.window_mut(offset, width)?))
    }
}

impl BufferRef {

    /// the owning handle, if any owner is still alive
    pub fn upgrade(&self) -> Option<ArrayBuffer> {
        self.inner.upgrade().map(|inner| ArrayBuffer { inner })
    }

    pub fn refers_to(&self, buffer: &ArrayBuffer) -> bool {
        Weak::ptr_eq(&self.inner, &Rc::downgrade(&buffer.inner))
    }
}

impl BufferCapability for BufferRef {
    fn byte_length(&self) -> ByteLength {
        self.upgrade().map_or(0, |buffer| buffer.byte_length())
    }

    fn is_detached(&self) -> bool {
        self.upgrade().map_or(true, |buffer| buffer.is_detached())
    }

    fn raw_access<R, F>(&self, offset: ByteOffset, width: Width, f: F) -> Result<R>
        where F: FnOnce(&[u8]) -> R
    {
        match self.upgrade() {
            Some(buffer) => buffer.raw_access(offset, width, f),
            None => Err(ErrorType::DetachedBuffer(Site::Storage)),
        }
    }

    fn raw_access_mut<R, F>(&self, offset: ByteOffset, width: Width, f: F) -> Result<R>
        where F: FnOnce(&mut [u8]) -> R
    {
        match self.upgrade() {
            Some(buffer) => buffer.raw_access_mut(offset, width, f),
            None => Err(ErrorType::DetachedBuffer(Site::Storage)),
        }
    }
}

impl Debug for ArrayBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayBuffer")
            .field("byte_length", &self.byte_length())
            .field("detached", &self.is_detached())
            .finish()
    }
}

impl Debug for BufferRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferRef")
            .field("byte_length", &self.byte_length())
            .field("detached", &self.is_detached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::buffer::array_buffer::ArrayBuffer;
    use crate::buffer::buffer_capability::BufferCapability;
    use crate::error::ErrorType;

    #[test]
    fn detach_once() {
        let buffer = ArrayBuffer::from_bytes(vec![1, 2, 3]);
        assert_eq!(buffer.byte_length(), 3);
        assert_eq!(buffer.detach(), Some(vec![1, 2, 3]));
        assert!(buffer.is_detached());
        assert_eq!(buffer.byte_length(), 0);
        assert_eq!(buffer.detach(), None);
        assert!(buffer.is_detached());
    }

    #[test]
    fn clones_share_storage() {
        let buffer = ArrayBuffer::new(4);
        let alias = buffer.clone();
        alias.raw_access_mut(1, 2, |bytes| bytes.copy_from_slice(&[7, 8])).unwrap();
        assert_eq!(buffer.to_vec(), vec![0, 7, 8, 0]);
        assert!(buffer.same_buffer(&alias));
        assert!(!buffer.same_buffer(&ArrayBuffer::new(4)));
    }

    #[test]
    fn raw_access_is_bounded() {
        let buffer = ArrayBuffer::new(4);
        assert_eq!(buffer.raw_access(2, 2, |bytes| bytes.len()).unwrap(), 2);
        assert_eq!(
            buffer.raw_access(3, 2, |bytes| bytes.len()),
            Err(ErrorType::RawAccessOutOfRange { offset: 3, width: 2, buffer_length: 4 })
        );
        assert!(buffer.raw_access(usize::MAX, 2, |_| ()).is_err());
    }

    #[test]
    fn weak_handle_does_not_keep_buffer_alive() {
        let buffer = ArrayBuffer::new(8);
        let handle = buffer.downgrade();
        assert!(handle.refers_to(&buffer));
        assert_eq!(handle.byte_length(), 8);
        assert!(!handle.is_detached());
        drop(buffer);
        assert!(handle.upgrade().is_none());
        assert!(handle.is_detached());
        assert_eq!(handle.byte_length(), 0);
        assert!(handle.raw_access(0, 1, |_| ()).unwrap_err().is_detached());
    }
}
