//! Logging shims: forward to `defmt` when the feature is enabled, compile away otherwise.

#[cfg(feature = "defmt")]
macro_rules! debug {
    ($($arg:tt)*) => {
        ::defmt::debug!($($arg)*)
    };
}

#[cfg(not(feature = "defmt"))]
macro_rules! debug {
    ($($arg:expr),* $(,)?) => {{
        let _ = ($(&$arg),*);
    }};
}

#[cfg(feature = "defmt")]
macro_rules! info {
    ($($arg:tt)*) => {
        ::defmt::info!($($arg)*)
    };
}

#[cfg(not(feature = "defmt"))]
macro_rules! info {
    ($($arg:expr),* $(,)?) => {{
        let _ = ($(&$arg),*);
    }};
}

#[cfg(feature = "defmt")]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        ::defmt::warn!($($arg)*)
    };
}

#[cfg(not(feature = "defmt"))]
macro_rules! log_warn {
    ($($arg:expr),* $(,)?) => {{
        let _ = ($(&$arg),*);
    }};
}

pub(crate) use {debug, info};
// Renamed internally: a bare `warn` re-export is ambiguous with the built-in `#[warn]` attribute.
pub(crate) use log_warn as warn;
