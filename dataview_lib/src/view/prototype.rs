use std::collections::HashMap;
use crate::codec::numeric_format::NumericFormat;
use crate::constants::{BUFFER_ACCESSOR, BYTE_LENGTH_ACCESSOR, BYTE_OFFSET_ACCESSOR, GETTER_ARITY, SETTER_ARITY};
use crate::error::{ErrorType, Result};
use crate::value::host_value::Value;
use crate::view::access_dispatcher;
use crate::log_method_table_installed;

/// Everything reachable by name on a view
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Method {
    Get(NumericFormat),
    Set(NumericFormat),
    Buffer,
    ByteLength,
    ByteOffset,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MethodEntry {
    pub name: &'static str,
    /// number of formal parameters
    pub arity: usize,
    pub method: Method,
}

impl MethodEntry {

    pub fn call(&self, this: &Value, args: &[Value]) -> Result<Value> {
        match self.method {
            Method::Get(format) => access_dispatcher::get_view_value(this, args, format),
            Method::Set(format) => access_dispatcher::set_view_value(this, args, format),
            Method::Buffer => access_dispatcher::buffer_getter(this),
            Method::ByteLength => access_dispatcher::byte_length_getter(this),
            Method::ByteOffset => access_dispatcher::byte_offset_getter(this),
        }
    }
}

/// Immutable name to method table, built once by `install`
pub struct DataViewPrototype {
    entries: HashMap<&'static str, MethodEntry>,
}

impl DataViewPrototype {

    pub fn install() -> DataViewPrototype {
        let mut entries = HashMap::new();
        for format in NumericFormat::ALL.iter() {
            let descriptor = format.descriptor();
            entries.insert(descriptor.getter_name, MethodEntry {
                name: descriptor.getter_name,
                arity: GETTER_ARITY,
                method: Method::Get(*format),
            });
            entries.insert(descriptor.setter_name, MethodEntry {
                name: descriptor.setter_name,
                arity: SETTER_ARITY,
                method: Method::Set(*format),
            });
        }
        let accessors = [
            (BUFFER_ACCESSOR, Method::Buffer),
            (BYTE_LENGTH_ACCESSOR, Method::ByteLength),
            (BYTE_OFFSET_ACCESSOR, Method::ByteOffset),
        ];
        for (name, method) in accessors.iter() {
            entries.insert(*name, MethodEntry { name: *name, arity: 0, method: *method });
        }
        log_method_table_installed!(entries.len());
        DataViewPrototype { entries }
    }

    pub fn lookup(&self, name: &str) -> Option<&MethodEntry> {
        self.entries.get(name)
    }

    /// sorted, for listing
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.entries.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn invoke(&self, name: &str, this: &Value, args: &[Value]) -> Result<Value> {
        let entry = self.lookup(name)
            .ok_or_else(|| ErrorType::UnknownMethod(name.to_string()))?;
        entry.call(this, args)
    }
}
