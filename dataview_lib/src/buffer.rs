pub use self::array_buffer::{ArrayBuffer, BufferRef};
pub use self::buffer_capability::BufferCapability;

pub mod array_buffer;
pub mod buffer_capability;
pub mod lifecycle_guard;
