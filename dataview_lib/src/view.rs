pub use self::data_view::DataView;
pub use self::view_constructor::{CallKind, DataViewConstructor};
pub use self::prototype::{DataViewPrototype, Method, MethodEntry};

pub mod access_dispatcher;
pub mod data_view;
pub mod prototype;
pub mod view_constructor;
