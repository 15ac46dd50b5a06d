//! Defaults for the car manager component.
//!
//! There is no runtime configuration source: the endpoint is a fixed literal
//! and both values can only be overridden through component properties.

/// Collection endpoint used when no `api_base` property is given.
pub const DEFAULT_API_BASE: &str = "https://final-janjocel-backend.onrender.com/cars";

/// How a failed request is surfaced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorReporting {
    /// Console only; the user sees nothing.
    #[default]
    LogOnly,
    /// Console plus a transient toast with the error text.
    Toast,
}
