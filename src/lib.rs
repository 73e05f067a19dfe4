//! Error code taxonomy for a Vulkan core validation layer.
//!
//! Every category of incorrect API usage the layer can diagnose is tagged
//! with exactly one code from one of four domains:
//!
//! - [`MemTrackCode`] – object/memory lifetime and binding tracking
//! - [`DrawStateCode`] – draw state and command buffer sequencing
//! - [`ShaderCheckerCode`] – static shader interface analysis
//! - [`DeviceLimitsCode`] – device limit and feature queries
//!
//! Each domain is a closed, scoped enumeration with a zero-valued `None`
//! sentinel ("no violation of this domain detected"). Codes are constant
//! data: identifiers and numeric values are stable once published, new
//! codes are only ever appended, and the whole taxonomy can be read from
//! any number of threads without synchronization.
//!
//! The checks that *select* a code and the dispatcher that turns one into
//! user-facing text live outside this crate. Checks hand their selection
//! to a [`report::ReportSink`] together with the offending object handle
//! and call site; [`report::LogSink`] is the built-in sink that forwards
//! violations to the `log` facade.

pub mod codes;
pub mod config;
pub mod report;

pub use codes::{
    DeviceLimitsCode, Domain, DrawStateCode, MemTrackCode, ShaderCheckerCode, UnknownCode,
    ValidationCode,
};
pub use report::{LogSink, ReportSink, TypedHandle, Violation};
