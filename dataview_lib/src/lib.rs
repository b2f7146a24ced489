//! Typed views over detachable byte buffers.
//!
//! A [`DataView`](view::DataView) reads and writes the 8 numeric formats of
//! [`NumericFormat`](codec::NumericFormat) at any offset of an
//! [`ArrayBuffer`](buffer::ArrayBuffer), in big or little endian byte order.
//! Host values reach it through [`DataViewConstructor`](view::DataViewConstructor)
//! and the method table of [`DataViewPrototype`](view::DataViewPrototype).

pub mod buffer;
pub mod codec;
pub mod constants;
pub mod error;
pub mod field_types;
pub mod helper;
pub mod logger;
pub mod value;
pub mod view;

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate enum_display_derive;
