//! Logging shims over the `log` facade.
//!
//! With the `logging` feature disabled these expand to nothing, so the scan
//! loop carries no formatting cost.

macro_rules! lex_debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        {
            log::debug!($($arg)+);
        }
    };
}

macro_rules! lex_trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "logging")]
        {
            log::trace!($($arg)+);
        }
    };
}
