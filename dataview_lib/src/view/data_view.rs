use crate::buffer::array_buffer::{ArrayBuffer, BufferRef};
use crate::buffer::buffer_capability::BufferCapability;
use crate::buffer::lifecycle_guard::ensure_access_safe;
use crate::codec::endianness::Endianness;
use crate::codec::numeric_format::NumericFormat;
use crate::error::{ErrorType, Result, Site};
use crate::field_types::{ByteLength, ByteOffset, RequestIndex};
use crate::helper::range_helper::window_fits;
use crate::view::view_constructor;
use crate::log_view_access;

/// A fixed window over an ArrayBuffer with typed numeric access.
///
/// Offset and length never change after construction. The view only holds a weak
/// reference to its buffer; once the buffer is detached every get and set fails,
/// while `buffer`, `byte_offset` and `byte_length` keep returning the construction values.
#[derive(Debug, Clone)]
pub struct DataView {
    buffer: BufferRef,
    byte_offset: ByteOffset,
    byte_length: ByteLength,
}

impl DataView {

    /// `byte_length` of None covers the rest of the buffer
    pub fn new(buffer: &ArrayBuffer, byte_offset: ByteOffset, byte_length: Option<ByteLength>) -> Result<DataView> {
        view_constructor::materialize(
            buffer,
            byte_offset as f64,
            byte_length.map(|length| length as f64)
        )
    }

    /// without validation
    pub(crate) fn from_parts(buffer: BufferRef, byte_offset: ByteOffset, byte_length: ByteLength) -> DataView {
        DataView {
            buffer,
            byte_offset,
            byte_length,
        }
    }

    pub fn buffer(&self) -> &BufferRef {
        &self.buffer
    }

    pub fn byte_offset(&self) -> ByteOffset {
        self.byte_offset
    }

    pub fn byte_length(&self) -> ByteLength {
        self.byte_length
    }

    pub fn get(&self, format: NumericFormat, index: RequestIndex, order: Endianness) -> Result<f64> {
        let descriptor = format.descriptor();
        let offset = self.check_access(descriptor.getter_name, format, index)?;
        log_view_access!(descriptor.getter_name, index, order);
        self.buffer.raw_access(offset, descriptor.width, |bytes| descriptor.decode(bytes, order))
    }

    pub fn set(&self, format: NumericFormat, index: RequestIndex, value: f64, order: Endianness) -> Result<()> {
        let descriptor = format.descriptor();
        let offset = self.check_access(descriptor.setter_name, format, index)?;
        log_view_access!(descriptor.setter_name, index, order);
        self.buffer.raw_access_mut(offset, descriptor.width, |bytes| descriptor.encode(value, order, bytes))
    }

    /// all checks that must hold before a byte is touched,
    /// returns the absolute offset into the buffer
    fn check_access(&self, method: &'static str, format: NumericFormat, index: RequestIndex) -> Result<ByteOffset> {
        ensure_access_safe(&self.buffer, Site::Method(method))?;
        let width = format.width();
        if !window_fits(index, width, self.byte_length) {
            return Err(ErrorType::AccessOutOfRange {
                method,
                index,
                width,
                view_length: self.byte_length,
            });
        }
        Ok(self.byte_offset + index as ByteOffset)
    }
}

#[cfg(test)]
mod tests {
    use crate::buffer::array_buffer::ArrayBuffer;
    use crate::codec::endianness::Endianness::{self, Big, Little};
    use crate::codec::numeric_format::NumericFormat::{self, *};
    use crate::error::{ErrorType, Site};
    use crate::view::data_view::DataView;
    use hex_literal::hex;
    use test_case::test_case;

    #[test_case(Int8, -128.0 ; "int8 min")]
    #[test_case(Uint8, 255.0 ; "uint8 max")]
    #[test_case(Int16, -12345.0 ; "int16")]
    #[test_case(Uint16, 65535.0 ; "uint16 max")]
    #[test_case(Int32, -2147483648.0 ; "int32 min")]
    #[test_case(Uint32, 4294967295.0 ; "uint32 max")]
    #[test_case(Float32, 1.25 ; "float32")]
    #[test_case(Float64, -1.0e-300 ; "float64")]
    fn round_trip_in_both_orders(format: NumericFormat, value: f64) {
        let buffer = ArrayBuffer::new(16);
        let view = DataView::new(&buffer, 3, None).unwrap();
        for order in [Big, Little].iter() {
            view.set(format, 5, value, *order).unwrap();
            assert_eq!(view.get(format, 5, *order).unwrap(), value);
        }
    }

    #[test_case(Int8, 200.0, -56.0 ; "int8 wraps")]
    #[test_case(Uint8, -1.0, 255.0 ; "uint8 wraps")]
    #[test_case(Int16, 32768.0, -32768.0 ; "int16 wraps")]
    #[test_case(Uint32, -2.0, 4294967294.0 ; "uint32 wraps")]
    #[test_case(Int32, 2.9, 2.0 ; "int32 truncates")]
    #[test_case(Uint16, f64::NAN, 0.0 ; "nan stores zero")]
    #[test_case(Float32, 16777217.0, 16777216.0 ; "float32 rounds")]
    fn reduction(format: NumericFormat, value: f64, expected: f64) {
        let buffer = ArrayBuffer::new(8);
        let view = DataView::new(&buffer, 0, None).unwrap();
        view.set(format, 0, value, Big).unwrap();
        assert_eq!(view.get(format, 0, Big).unwrap(), expected);
    }

    #[test]
    fn writes_land_at_view_offset() {
        let buffer = ArrayBuffer::new(8);
        let view = DataView::new(&buffer, 2, Some(4)).unwrap();
        view.set(Uint16, 1, 0xabcd as f64, Little).unwrap();
        assert_eq!(buffer.to_vec(), hex!("000000cdab000000").to_vec());
    }

    #[test]
    fn endianness_sensitivity() {
        let buffer = ArrayBuffer::new(8);
        let view = DataView::new(&buffer, 0, None).unwrap();
        view.set(Int16, 0, 0x0102 as f64, Little).unwrap();
        assert_eq!(view.get(Int16, 0, Big).unwrap(), 0x0201 as f64);
        view.set(Float64, 0, 1.0, Little).unwrap();
        assert_eq!(view.get(Float64, 0, Big).unwrap().to_bits(), 0x0000_0000_0000_f03f);
        view.set(Uint32, 0, 0.0, Little).unwrap();
        assert_eq!(view.get(Uint32, 0, Big).unwrap(), 0.0);
    }

    #[test]
    fn float64_nan_payload_survives_order_flip() {
        let buffer = ArrayBuffer::from_bytes(hex!("7ff4000000000001").to_vec());
        let view = DataView::new(&buffer, 0, None).unwrap();
        let value = view.get(Float64, 0, Big).unwrap();
        view.set(Float64, 0, value, Little).unwrap();
        assert_eq!(buffer.to_vec(), hex!("010000000000f47f").to_vec());
        assert_eq!(view.get(Float64, 0, Little).unwrap().to_bits(), 0x7ff4_0000_0000_0001);
    }

    #[test]
    fn bounds_follow_view_length() {
        let buffer = ArrayBuffer::new(16);
        let view = DataView::new(&buffer, 4, Some(4)).unwrap();
        assert!(view.get(Uint32, 0, Big).is_ok());
        assert_eq!(
            view.get(Float64, 0, Big),
            Err(ErrorType::AccessOutOfRange { method: "getFloat64", index: 0, width: 8, view_length: 4 })
        );
        assert!(view.get(Uint8, 3, Big).is_ok());
        assert!(view.get(Uint8, 4, Big).is_err());
        assert!(view.get(Uint8, u64::MAX, Big).is_err());
    }

    #[test]
    fn failed_set_writes_nothing() {
        let buffer = ArrayBuffer::from_bytes(vec![1, 2, 3, 4, 5, 6]);
        let view = DataView::new(&buffer, 0, Some(5)).unwrap();
        assert!(view.set(Uint32, 2, 0.0, Big).is_err());
        assert_eq!(buffer.to_vec(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn detached_buffer_rejects_access_but_keeps_metadata() {
        let buffer = ArrayBuffer::new(12);
        let view = DataView::new(&buffer, 4, Some(6)).unwrap();
        buffer.detach();
        for format in NumericFormat::ALL.iter() {
            let descriptor = format.descriptor();
            assert_eq!(
                view.get(*format, 0, Big),
                Err(ErrorType::DetachedBuffer(Site::Method(descriptor.getter_name)))
            );
            assert_eq!(
                view.set(*format, 0, 1.0, Little),
                Err(ErrorType::DetachedBuffer(Site::Method(descriptor.setter_name)))
            );
        }
        assert_eq!(view.byte_offset(), 4);
        assert_eq!(view.byte_length(), 6);
        assert!(view.buffer().refers_to(&buffer));
    }

    #[test]
    fn detached_check_wins_over_bounds() {
        let buffer = ArrayBuffer::new(4);
        let view = DataView::new(&buffer, 0, None).unwrap();
        buffer.detach();
        assert!(view.get(Float64, 100, Endianness::Big).unwrap_err().is_detached());
    }

    #[test]
    fn aliasing_views_see_latest_write() {
        let buffer = ArrayBuffer::new(8);
        let whole = DataView::new(&buffer, 0, None).unwrap();
        let tail = DataView::new(&buffer, 4, None).unwrap();
        whole.set(Uint32, 4, 7.0, Big).unwrap();
        tail.set(Uint8, 3, 9.0, Big).unwrap();
        assert_eq!(whole.get(Uint32, 4, Big).unwrap(), 9.0);
    }

    #[test]
    fn view_does_not_keep_buffer_alive() {
        let buffer = ArrayBuffer::new(4);
        let view = DataView::new(&buffer, 0, None).unwrap();
        drop(buffer);
        assert!(view.buffer().upgrade().is_none());
        assert!(view.get(Uint8, 0, Big).unwrap_err().is_detached());
        assert_eq!(view.byte_length(), 4);
    }
}
