/// # Arguments
/// * `byte_length` - length of the transferred storage
#[macro_export]
macro_rules! log_buffer_detached {
    ($byte_length:expr) => {
        log::debug!("detached buffer of {} bytes", $byte_length);
    };
}

/// view of type dataview_lib::view::DataView
#[macro_export]
macro_rules! log_view_created {
    ($view:expr) => {
        log::debug!(
            "new view {{ byte_offset: {}, byte_length: {} }}",
            $view.byte_offset(),
            $view.byte_length()
        );
    };
}

/// # Arguments
/// * `method` - name of the get or set method
/// * `index` - request index relative to the view
/// * `order` - of type dataview_lib::codec::Endianness
#[macro_export]
macro_rules! log_view_access {
    ($method:expr, $index:expr, $order:expr) => {
        log::trace!("{} at {} ({} endian)", $method, $index, $order);
    };
}

/// # Arguments
/// * `count` - number of installed methods and accessors
#[macro_export]
macro_rules! log_method_table_installed {
    ($count:expr) => {
        log::debug!("installed {} methods on {}.prototype", $count, $crate::constants::CONSTRUCTOR_NAME);
    };
}
