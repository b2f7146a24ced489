/// the largest integer a double can hold without losing precision (2^53 - 1)
pub const MAX_SAFE_INTEGER: f64 = 9007199254740991.0;

/// name the constructor is registered under
pub const CONSTRUCTOR_NAME: &str = "DataView";

/// number of formal parameters of the constructor (buffer, byteOffset, byteLength)
pub const CONSTRUCTOR_ARITY: usize = 3;

/// number of formal parameters of every get method (byteOffset)
pub const GETTER_ARITY: usize = 1;

/// number of formal parameters of every set method (byteOffset, value)
pub const SETTER_ARITY: usize = 2;

/// accessor names, readable after the buffer is detached
pub const BUFFER_ACCESSOR: &str = "buffer";
pub const BYTE_LENGTH_ACCESSOR: &str = "byteLength";
pub const BYTE_OFFSET_ACCESSOR: &str = "byteOffset";
