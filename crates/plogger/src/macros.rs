//! Logging macros
//!
//! These resolve the caller at compile time, so they cost nothing extra and
//! keep function names even in stripped release builds.

/// Caller metadata for the enclosing function
///
/// The function name comes from `std::any::type_name` of a marker item
/// declared inside the caller.
#[macro_export]
macro_rules! caller {
    () => {{
        fn __plogger_caller() {}
        fn __plogger_type_name<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let path = __plogger_type_name(__plogger_caller);
        $crate::CallerInfo::from_parts(
            file!(),
            line!(),
            path.strip_suffix("::__plogger_caller").unwrap_or(path),
            module_path!(),
        )
    }};
}

#[macro_export]
macro_rules! log_critical {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_with_caller($crate::Severity::Critical, $crate::caller!(), format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_with_caller($crate::Severity::Error, $crate::caller!(), format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_warning {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_with_caller($crate::Severity::Warning, $crate::caller!(), format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_success {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_with_caller($crate::Severity::Success, $crate::caller!(), format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_with_caller($crate::Severity::Info, $crate::caller!(), format_args!($($arg)+))
    };
}
