//! Conversion between byte windows and numbers.
//!
//! Every function takes a window whose length is the width of the format.
//! Nothing in here knows about views, buffers or value coercion.

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use crate::codec::endianness::Endianness;
use crate::field_types::Width;

pub type DecodeFn = fn(&[u8], Endianness) -> f64;
pub type EncodeFn = fn(f64, Endianness, &mut [u8]);

fn read_bits<B: ByteOrder>(bytes: &[u8]) -> u64 {
    B::read_uint(bytes, bytes.len())
}

fn write_bits<B: ByteOrder>(bits: u64, bytes: &mut [u8]) {
    let width = bytes.len();
    B::write_uint(bytes, bits, width)
}

/// assemble the window into an unsigned integer
pub fn read_unsigned(bytes: &[u8], order: Endianness) -> u64 {
    match order {
        Endianness::Big => read_bits::<BigEndian>(bytes),
        Endianness::Little => read_bits::<LittleEndian>(bytes),
    }
}

/// split an unsigned integer into the window,
/// bits must fit into the window
pub fn write_unsigned(bits: u64, order: Endianness, bytes: &mut [u8]) {
    match order {
        Endianness::Big => write_bits::<BigEndian>(bits, bytes),
        Endianness::Little => write_bits::<LittleEndian>(bits, bytes),
    }
}

/// two's complement reinterpretation of the lowest `width` bytes
pub fn sign_extend(bits: u64, width: Width) -> i64 {
    let shift = 64 - 8 * width as u32;
    ((bits << shift) as i64) >> shift
}

/// reduce a double modulo 2^(8 * width)
///
/// NaN and the infinities reduce to 0, fractions are truncated towards zero.
pub fn wrap_integer(value: f64, width: Width) -> u64 {
    if !value.is_finite() {
        return 0;
    }
    let modulus = 2f64.powi(8 * width as i32);
    let remainder = value.trunc() % modulus;
    if remainder < 0.0 {
        (remainder + modulus) as u64
    } else {
        remainder as u64
    }
}

pub fn decode_unsigned(bytes: &[u8], order: Endianness) -> f64 {
    read_unsigned(bytes, order) as f64
}

pub fn decode_signed(bytes: &[u8], order: Endianness) -> f64 {
    sign_extend(read_unsigned(bytes, order), bytes.len()) as f64
}

/// shared by the signed and unsigned formats,
/// the bit pattern after reduction is the same for both
pub fn encode_integer(value: f64, order: Endianness, bytes: &mut [u8]) {
    let bits = wrap_integer(value, bytes.len());
    write_unsigned(bits, order, bytes);
}

pub fn decode_float32(bytes: &[u8], order: Endianness) -> f64 {
    f32::from_bits(read_unsigned(bytes, order) as u32) as f64
}

/// narrows with round to nearest, ties to even
pub fn encode_float32(value: f64, order: Endianness, bytes: &mut [u8]) {
    write_unsigned((value as f32).to_bits() as u64, order, bytes);
}

pub fn decode_float64(bytes: &[u8], order: Endianness) -> f64 {
    f64::from_bits(read_unsigned(bytes, order))
}

pub fn encode_float64(value: f64, order: Endianness, bytes: &mut [u8]) {
    write_unsigned(value.to_bits(), order, bytes);
}
