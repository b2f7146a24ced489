pub use self::endianness::Endianness;
pub use self::numeric_format::{NumericFormat, FormatDescriptor, FormatKind};

pub mod byte_codec;
pub mod endianness;
pub mod numeric_format;
