//! Host facing get/set entry points.
//!
//! Arguments are coerced in call order (index, value, littleEndian) before the
//! view checks detachment and bounds, so a failing call never writes.

use crate::codec::endianness::Endianness;
use crate::codec::numeric_format::NumericFormat;
use crate::constants::{BUFFER_ACCESSOR, BYTE_LENGTH_ACCESSOR, BYTE_OFFSET_ACCESSOR};
use crate::error::{ErrorType, Result};
use crate::field_types::RequestIndex;
use crate::value::coercion::{to_boolean, to_index, to_number};
use crate::value::host_value::Value;
use crate::view::data_view::DataView;

fn resolve_receiver<'a>(this: &'a Value, method: &'static str) -> Result<&'a DataView> {
    this.as_view().ok_or(ErrorType::WrongReceiverType(method))
}

fn index_argument(args: &[Value], position: usize) -> Result<RequestIndex> {
    args.get(position).map_or(Ok(0), to_index)
}

fn number_argument(args: &[Value], position: usize) -> f64 {
    args.get(position).map_or(f64::NAN, to_number)
}

/// big endian unless a truthy flag was passed
fn order_argument(args: &[Value], position: usize) -> Endianness {
    Endianness::from_little_endian_flag(args.get(position).map_or(false, to_boolean))
}

/// `args` are (byteOffset, littleEndian)
pub fn get_view_value(this: &Value, args: &[Value], format: NumericFormat) -> Result<Value> {
    let view = resolve_receiver(this, format.descriptor().getter_name)?;
    let index = index_argument(args, 0)?;
    let order = order_argument(args, 1);
    view.get(format, index, order).map(Value::Number)
}

/// `args` are (byteOffset, value, littleEndian)
pub fn set_view_value(this: &Value, args: &[Value], format: NumericFormat) -> Result<Value> {
    let view = resolve_receiver(this, format.descriptor().setter_name)?;
    let index = index_argument(args, 0)?;
    let value = number_argument(args, 1);
    let order = order_argument(args, 2);
    view.set(format, index, value, order)?;
    Ok(Value::Undefined)
}

/// undefined once every owner of the buffer is gone
pub fn buffer_getter(this: &Value) -> Result<Value> {
    let view = resolve_receiver(this, BUFFER_ACCESSOR)?;
    Ok(view.buffer().upgrade().map_or(Value::Undefined, Value::Buffer))
}

pub fn byte_length_getter(this: &Value) -> Result<Value> {
    let view = resolve_receiver(this, BYTE_LENGTH_ACCESSOR)?;
    Ok(Value::Number(view.byte_length() as f64))
}

pub fn byte_offset_getter(this: &Value) -> Result<Value> {
    let view = resolve_receiver(this, BYTE_OFFSET_ACCESSOR)?;
    Ok(Value::Number(view.byte_offset() as f64))
}
