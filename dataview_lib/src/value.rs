pub use self::host_value::Value;

pub mod coercion;
pub mod host_value;
