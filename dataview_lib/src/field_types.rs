/// offset of a view into its buffer, in bytes
pub type ByteOffset = usize;
/// length of a view or buffer, in bytes
pub type ByteLength = usize;
/// index of an access relative to the start of a view, in bytes
pub type RequestIndex = u64;
/// width of a numeric format, in bytes
pub type Width = usize;

/// this is the raw field type
/// it might be better to use the enum NumericFormat
pub type NumericFormatRaw = u8;
