use crate::buffer::array_buffer::ArrayBuffer;
use crate::buffer::buffer_capability::BufferCapability;
use crate::buffer::lifecycle_guard::ensure_access_safe;
use crate::constants::{CONSTRUCTOR_ARITY, CONSTRUCTOR_NAME};
use crate::error::{ErrorType, Result, Site};
use crate::value::coercion::{to_integer, to_length, to_number};
use crate::value::host_value::Value;
use crate::view::data_view::DataView;
use crate::log_view_created;

/// How the constructor was reached
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CallKind {
    /// `new DataView(...)`
    Construct,
    /// plain call without `new`
    Call,
}

pub struct DataViewConstructor;

impl DataViewConstructor {

    pub const NAME: &'static str = CONSTRUCTOR_NAME;
    pub const ARITY: usize = CONSTRUCTOR_ARITY;

    /// `args` are (buffer, byteOffset, byteLength)
    ///
    /// An offset is only coerced if it was passed, so an explicit undefined offset is rejected.
    /// An undefined length covers the rest of the buffer.
    pub fn construct(call_kind: CallKind, args: &[Value]) -> Result<DataView> {
        if call_kind != CallKind::Construct {
            return Err(ErrorType::NotAConstructor);
        }
        let buffer = args.get(0)
            .and_then(Value::as_buffer)
            .ok_or(ErrorType::InvalidBufferType)?;

        let mut byte_offset = 0.0;
        if let Some(value) = args.get(1) {
            let number = to_number(value);
            byte_offset = to_integer(number);
            if number != byte_offset || byte_offset < 0.0 {
                return Err(ErrorType::InvalidOffset(number));
            }
        }

        let byte_length = match args.get(2) {
            Some(value) if !value.is_undefined() => Some(to_length(to_number(value))),
            _ => None,
        };

        materialize(buffer, byte_offset, byte_length)
    }
}

/// checks shared by the host facing and the typed constructor,
/// offset and length are already coerced integers
pub(crate) fn materialize(buffer: &ArrayBuffer, byte_offset: f64, byte_length: Option<f64>) -> Result<DataView> {
    ensure_access_safe(buffer, Site::Constructor)?;

    let buffer_length = buffer.byte_length();
    if byte_offset > buffer_length as f64 {
        return Err(ErrorType::OffsetOutOfRange { byte_offset, buffer_length });
    }

    let byte_length = match byte_length {
        Some(byte_length) => {
            if byte_offset + byte_length > buffer_length as f64 {
                return Err(ErrorType::LengthOutOfRange { byte_offset, byte_length, buffer_length });
            }
            byte_length
        }
        None => buffer_length as f64 - byte_offset,
    };

    let view = DataView::from_parts(buffer.downgrade(), byte_offset as usize, byte_length as usize);
    log_view_created!(view);
    Ok(view)
}
