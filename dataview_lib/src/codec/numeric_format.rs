use std::fmt::Display;
use crate::codec::byte_codec::{self, DecodeFn, EncodeFn};
use crate::codec::endianness::Endianness;
use crate::field_types::{NumericFormatRaw, Width};

/// All numeric formats a view can read and write
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, FromPrimitive, Display)]
pub enum NumericFormat {
    Int8 = 0,
    Uint8 = 1,
    Int16 = 2,
    Uint16 = 3,
    Int32 = 4,
    Uint32 = 5,
    Float32 = 6,
    Float64 = 7,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FormatKind {
    /// two's complement
    SignedInteger,
    UnsignedInteger,
    /// IEEE-754 binary32 or binary64
    Float,
}

/// Everything the access path needs to know about a format
pub struct FormatDescriptor {
    pub format: NumericFormat,
    pub width: Width,
    pub kind: FormatKind,
    pub getter_name: &'static str,
    pub setter_name: &'static str,
    pub decode: DecodeFn,
    pub encode: EncodeFn,
}

/// indexed by the raw value of NumericFormat
pub static FORMATS: [FormatDescriptor; 8] = [
    FormatDescriptor {
        format: NumericFormat::Int8,
        width: 1,
        kind: FormatKind::SignedInteger,
        getter_name: "getInt8",
        setter_name: "setInt8",
        decode: byte_codec::decode_signed,
        encode: byte_codec::encode_integer,
    },
    FormatDescriptor {
        format: NumericFormat::Uint8,
        width: 1,
        kind: FormatKind::UnsignedInteger,
        getter_name: "getUint8",
        setter_name: "setUint8",
        decode: byte_codec::decode_unsigned,
        encode: byte_codec::encode_integer,
    },
    FormatDescriptor {
        format: NumericFormat::Int16,
        width: 2,
        kind: FormatKind::SignedInteger,
        getter_name: "getInt16",
        setter_name: "setInt16",
        decode: byte_codec::decode_signed,
        encode: byte_codec::encode_integer,
    },
    FormatDescriptor {
        format: NumericFormat::Uint16,
        width: 2,
        kind: FormatKind::UnsignedInteger,
        getter_name: "getUint16",
        setter_name: "setUint16",
        decode: byte_codec::decode_unsigned,
        encode: byte_codec::encode_integer,
    },
    FormatDescriptor {
        format: NumericFormat::Int32,
        width: 4,
        kind: FormatKind::SignedInteger,
        getter_name: "getInt32",
        setter_name: "setInt32",
        decode: byte_codec::decode_signed,
        encode: byte_codec::encode_integer,
    },
    FormatDescriptor {
        format: NumericFormat::Uint32,
        width: 4,
        kind: FormatKind::UnsignedInteger,
        getter_name: "getUint32",
        setter_name: "setUint32",
        decode: byte_codec::decode_unsigned,
        encode: byte_codec::encode_integer,
    },
    FormatDescriptor {
        format: NumericFormat::Float32,
        width: 4,
        kind: FormatKind::Float,
        getter_name: "getFloat32",
        setter_name: "setFloat32",
        decode: byte_codec::decode_float32,
        encode: byte_codec::encode_float32,
    },
    FormatDescriptor {
        format: NumericFormat::Float64,
        width: 8,
        kind: FormatKind::Float,
        getter_name: "getFloat64",
        setter_name: "setFloat64",
        decode: byte_codec::decode_float64,
        encode: byte_codec::encode_float64,
    },
];

impl NumericFormat {

    pub const ALL: [NumericFormat; 8] = [
        NumericFormat::Int8,
        NumericFormat::Uint8,
        NumericFormat::Int16,
        NumericFormat::Uint16,
        NumericFormat::Int32,
        NumericFormat::Uint32,
        NumericFormat::Float32,
        NumericFormat::Float64,
    ];

    pub fn from_raw(value: NumericFormatRaw) -> Option<NumericFormat> {
        num::FromPrimitive::from_u8(value)
    }

    pub fn to_raw(self) -> NumericFormatRaw {
        self as u8
    }

    pub fn descriptor(self) -> &'static FormatDescriptor {
        &FORMATS[self.to_raw() as usize]
    }

    pub fn width(self) -> Width {
        self.descriptor().width
    }
}

impl FormatDescriptor {

    /// bytes must be exactly `width` long
    pub fn decode(&self, bytes: &[u8], order: Endianness) -> f64 {
        debug_assert_eq!(bytes.len(), self.width);
        (self.decode)(bytes, order)
    }

    /// bytes must be exactly `width` long
    pub fn encode(&self, value: f64, order: Endianness, bytes: &mut [u8]) {
        debug_assert_eq!(bytes.len(), self.width);
        (self.encode)(value, order, bytes)
    }
}
