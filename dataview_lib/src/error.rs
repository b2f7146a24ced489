use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    result,
};
use crate::field_types::{ByteLength, ByteOffset, RequestIndex, Width};
use crate::constants::CONSTRUCTOR_NAME;

pub type Result<T> = result::Result<T, ErrorType>;

/// Where a detached buffer was noticed
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Site {
    Constructor,
    /// name of the get or set method
    Method(&'static str),
    /// raw storage access below the view layer
    Storage,
}

/// Which validation stage produced an error
#[derive(Debug, Copy, Clone, PartialEq, Display)]
pub enum ErrorCategory {
    Construction,
    Access,
}

/// The error constructor a host runtime would throw
#[derive(Debug, Copy, Clone, PartialEq, Display)]
pub enum ErrorClass {
    TypeError,
    RangeError,
}

#[derive(Debug, Clone, PartialEq)]
/// Enum with all possible errors of view construction and typed access.
pub enum ErrorType {
    NotAConstructor,
    InvalidBufferType,
    /// the coerced offset was NaN, fractional or negative
    InvalidOffset(f64),
    DetachedBuffer(Site),
    OffsetOutOfRange { byte_offset: f64, buffer_length: ByteLength },
    LengthOutOfRange { byte_offset: f64, byte_length: f64, buffer_length: ByteLength },
    /// method name of the failed call
    WrongReceiverType(&'static str),
    /// the integer the index coerced to
    InvalidIndex(f64),
    AccessOutOfRange { method: &'static str, index: RequestIndex, width: Width, view_length: ByteLength },
    /// raw storage access outside of the buffer
    RawAccessOutOfRange { offset: ByteOffset, width: Width, buffer_length: ByteLength },
    UnknownMethod(String),
}

impl ErrorType {

    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorType::NotAConstructor
            | ErrorType::InvalidBufferType
            | ErrorType::InvalidOffset(_)
            | ErrorType::DetachedBuffer(Site::Constructor)
            | ErrorType::OffsetOutOfRange { .. }
            | ErrorType::LengthOutOfRange { .. } => ErrorCategory::Construction,
            ErrorType::DetachedBuffer(Site::Method(_))
            | ErrorType::DetachedBuffer(Site::Storage)
            | ErrorType::WrongReceiverType(_)
            | ErrorType::InvalidIndex(_)
            | ErrorType::AccessOutOfRange { .. }
            | ErrorType::RawAccessOutOfRange { .. }
            | ErrorType::UnknownMethod(_) => ErrorCategory::Access,
        }
    }

    pub fn error_class(&self) -> ErrorClass {
        match self {
            ErrorType::NotAConstructor
            | ErrorType::InvalidBufferType
            | ErrorType::DetachedBuffer(_)
            | ErrorType::WrongReceiverType(_)
            | ErrorType::UnknownMethod(_) => ErrorClass::TypeError,
            ErrorType::InvalidOffset(_)
            | ErrorType::OffsetOutOfRange { .. }
            | ErrorType::LengthOutOfRange { .. }
            | ErrorType::InvalidIndex(_)
            | ErrorType::AccessOutOfRange { .. }
            | ErrorType::RawAccessOutOfRange { .. } => ErrorClass::RangeError,
        }
    }

    pub fn is_detached(&self) -> bool {
        matches!(self, ErrorType::DetachedBuffer(_))
    }
}

impl Display for ErrorType {
    fn fmt(&self, fmt: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::NotAConstructor => write!(
                fmt,
                "{}: Constructor requires 'new'",
                CONSTRUCTOR_NAME
            ),
            ErrorType::InvalidBufferType => write!(
                fmt,
                "{}: first argument is not an ArrayBuffer",
                CONSTRUCTOR_NAME
            ),
            ErrorType::InvalidOffset(offset) => write!(
                fmt,
                "{}: invalid byte offset {}",
                CONSTRUCTOR_NAME,
                offset
            ),
            ErrorType::DetachedBuffer(Site::Constructor) => write!(
                fmt,
                "{}: ArrayBuffer is detached buffer",
                CONSTRUCTOR_NAME
            ),
            ErrorType::DetachedBuffer(Site::Method(method)) => write!(
                fmt,
                "{}.prototype.{}: ArrayBuffer is detached buffer",
                CONSTRUCTOR_NAME,
                method
            ),
            ErrorType::DetachedBuffer(Site::Storage) => write!(
                fmt,
                "ArrayBuffer is detached buffer"
            ),
            ErrorType::OffsetOutOfRange { byte_offset, buffer_length } => write!(
                fmt,
                "{}: byte offset {} is outside the bounds of the buffer of length {}",
                CONSTRUCTOR_NAME,
                byte_offset,
                buffer_length
            ),
            ErrorType::LengthOutOfRange { byte_offset, byte_length, buffer_length } => write!(
                fmt,
                "{}: byte offset {} plus byte length {} exceeds the buffer length {}",
                CONSTRUCTOR_NAME,
                byte_offset,
                byte_length,
                buffer_length
            ),
            ErrorType::WrongReceiverType(method) => write!(
                fmt,
                "{}.prototype.{} called on incompatible receiver",
                CONSTRUCTOR_NAME,
                method
            ),
            ErrorType::InvalidIndex(index) => write!(
                fmt,
                "{}: invalid index {}",
                CONSTRUCTOR_NAME,
                index
            ),
            ErrorType::AccessOutOfRange { method, index, width, view_length } => write!(
                fmt,
                "{}.prototype.{}: reading {} bytes at index {} is outside the bounds of the view of length {}",
                CONSTRUCTOR_NAME,
                method,
                width,
                index,
                view_length
            ),
            ErrorType::RawAccessOutOfRange { offset, width, buffer_length } => write!(
                fmt,
                "raw access of {} bytes at offset {} is outside the buffer of length {}",
                width,
                offset,
                buffer_length
            ),
            ErrorType::UnknownMethod(name) => write!(
                fmt,
                "{}.prototype.{} is not a function",
                CONSTRUCTOR_NAME,
                name
            ),
        }
    }
}

impl Error for ErrorType {}

#[cfg(test)]
mod tests {
    use crate::error::{ErrorType, ErrorCategory, ErrorClass, Site};

    #[test]
    fn detached_category_depends_on_site() {
        assert_eq!(ErrorType::DetachedBuffer(Site::Constructor).category(), ErrorCategory::Construction);
        assert_eq!(ErrorType::DetachedBuffer(Site::Method("getInt8")).category(), ErrorCategory::Access);
        assert_eq!(ErrorType::DetachedBuffer(Site::Method("getInt8")).error_class(), ErrorClass::TypeError);
    }

    #[test]
    fn range_errors() {
        assert_eq!(ErrorType::InvalidOffset(-1.0).error_class(), ErrorClass::RangeError);
        assert_eq!(ErrorType::InvalidIndex(-1.0).error_class(), ErrorClass::RangeError);
        assert_eq!(ErrorType::NotAConstructor.error_class(), ErrorClass::TypeError);
    }

    #[test]
    fn message_names_the_method() {
        let message = ErrorType::WrongReceiverType("setUint16").to_string();
        assert_eq!(message, "DataView.prototype.setUint16 called on incompatible receiver");
        assert_eq!(ErrorClass::RangeError.to_string(), "RangeError");
    }
}
