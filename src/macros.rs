//! `info!`, `error!` and `fatal!` take a printf-style format and any values convertible
//! into [`Arg`](crate::Arg). A leading `logger: <expr>,` targets that logger instead of
//! the process-wide default.
//!
//! ```no_run
//! stamplog::info!("listening on %s:%d", "0.0.0.0", 8080);
//! stamplog::error!("retrying in %.1fs", 2.5);
//! ```

#[macro_export]
macro_rules! info {
    (logger: $logger:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $logger.info($fmt, &[$($crate::Arg::from($arg)),*])
    };
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::info($fmt, &[$($crate::Arg::from($arg)),*])
    };
}

#[macro_export]
macro_rules! error {
    (logger: $logger:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $logger.error($fmt, &[$($crate::Arg::from($arg)),*])
    };
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::error($fmt, &[$($crate::Arg::from($arg)),*])
    };
}

/// Only returns if the exit hook in effect returns.
#[macro_export]
macro_rules! fatal {
    (logger: $logger:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $logger.fatal($fmt, &[$($crate::Arg::from($arg)),*])
    };
    ($fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::global::fatal($fmt, &[$($crate::Arg::from($arg)),*])
    };
}
