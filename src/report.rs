//! Boundary types for handing a selected code to a dispatcher.
//!
//! A validation check that finds a violation picks the single most
//! specific code for it, wraps the code with the offending object and the
//! intercepted call, and submits the result to a [`ReportSink`]. What
//! happens next — message text, severity, user callbacks, aborting the
//! call — is dispatcher policy and lives outside this crate. [`LogSink`]
//! is the built-in sink for tools that just want violations on the `log`
//! facade.

use std::fmt;

use log::error;
use vulkanalia::vk;

use crate::codes::ValidationCode;

/// The object a violation was detected on, the way drivers and capture
/// tools identify it: an object type plus the raw 64-bit handle value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypedHandle {
    /// Kind of the offending object.
    pub object_type: vk::ObjectType,
    /// Raw handle value.
    pub handle: u64,
}

impl TypedHandle {
    pub const fn new(object_type: vk::ObjectType, handle: u64) -> Self {
        Self {
            object_type,
            handle,
        }
    }
}

/// One detected violation: a code plus the context a dispatcher needs to
/// say something useful about it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation {
    /// The single most specific code describing the violation.
    pub code: ValidationCode,
    /// The object the violation was detected on, when there is one.
    /// Device limits checks, for instance, fire before objects exist.
    pub object: Option<TypedHandle>,
    /// Name of the intercepted API call, e.g. `"vkCmdDraw"`.
    pub call_site: &'static str,
}

impl Violation {
    /// Builds a report for a detected violation.
    ///
    /// The domain sentinels mean "nothing detected" and are not
    /// reportable; passing one here is a bug in the calling check.
    pub fn new(code: ValidationCode, object: Option<TypedHandle>, call_site: &'static str) -> Self {
        debug_assert!(!code.is_none(), "sentinel codes are not reportable");
        Self {
            code,
            object,
            call_site,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code.name())?;
        if let Some(object) = self.object {
            write!(f, " on {:?} 0x{:x}", object.object_type, object.handle)?;
        }
        write!(f, " at {}", self.call_site)
    }
}

/// Receiving end of the validation checks.
///
/// Implementations own the message table and the severity/abort policy
/// for every code in the taxonomy; the mapping is expected to be total,
/// so that no code can be reported without producing output.
pub trait ReportSink {
    /// Receives one violation. Called once per defect found, so a single
    /// API call can produce several submissions.
    fn submit(&self, violation: &Violation);
}

/// Sink that forwards every violation to the `log` facade.
///
/// It prints the domain and symbolic identifier only and logs at `error`
/// level across the board; a dispatcher with real per-code messages and
/// severities should implement [`ReportSink`] itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl ReportSink for LogSink {
    fn submit(&self, violation: &Violation) {
        error!("({}) {}", violation.code.domain(), violation);
    }
}
