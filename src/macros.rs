// Each macro logs to the default logger, or to the logger given as
// `logger: <expr>` before the format string.

#[macro_export]
macro_rules! trace {
    (logger: $logger:expr, $($arg:tt)+) => {
        ($logger).trace(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::trace(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        ($logger).debug(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::debug(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $($arg:tt)+) => {
        ($logger).info(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::info(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! warn {
    (logger: $logger:expr, $($arg:tt)+) => {
        ($logger).warn(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::warn(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $($arg:tt)+) => {
        ($logger).error(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::error(::std::format_args!($($arg)+))
    };
}

/// Logs at FATAL, then exits the process with status 1.
#[macro_export]
macro_rules! fatal {
    (logger: $logger:expr, $($arg:tt)+) => {
        ($logger).fatal(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::fatal(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! stats {
    (logger: $logger:expr, $($arg:tt)+) => {
        ($logger).stats(::std::format_args!($($arg)+))
    };
    ($($arg:tt)+) => {
        $crate::stats(::std::format_args!($($arg)+))
    };
}
