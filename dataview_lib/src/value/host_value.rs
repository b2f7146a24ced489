use crate::buffer::array_buffer::ArrayBuffer;
use crate::view::data_view::DataView;

/// The host values the constructor and the prototype methods accept
#[derive(Debug, Clone)]
pub enum Value {
    Undefined,
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    /// any object that is neither a buffer nor a view
    Object,
    Buffer(ArrayBuffer),
    View(DataView),
}

impl Value {

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_view(&self) -> Option<&DataView> {
        match self {
            Value::View(view) => Some(view),
            _ => None,
        }
    }

    pub fn as_buffer(&self) -> Option<&ArrayBuffer> {
        match self {
            Value::Buffer(buffer) => Some(buffer),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<ArrayBuffer> for Value {
    fn from(buffer: ArrayBuffer) -> Self {
        Value::Buffer(buffer)
    }
}

impl From<DataView> for Value {
    fn from(view: DataView) -> Self {
        Value::View(view)
    }
}
