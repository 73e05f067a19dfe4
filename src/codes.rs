use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;
use thiserror::Error;

mod code_impl;
pub mod device_limits;
pub mod draw_state;
pub mod mem_track;
pub mod shader_checker;

pub use device_limits::DeviceLimitsCode;
pub use draw_state::DrawStateCode;
pub use mem_track::MemTrackCode;
pub use shader_checker::ShaderCheckerCode;

/// # Validation domains
///
/// The taxonomy is partitioned into four independent domains, one per
/// family of checks the layer runs. Each domain owns a closed set of
/// codes; no code is shared or aliased across domains, so a `Domain`
/// value is always part of the identity of a code (see
/// [`ValidationCode::key`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Object and memory lifetime/binding tracking.
    MemTrack,
    /// Draw state and command buffer sequencing.
    DrawState,
    /// Static shader interface analysis.
    ShaderChecker,
    /// Device limit and feature queries.
    DeviceLimits,
}

impl Domain {
    /// Every domain, in the order the code tables are published.
    pub const ALL: [Self; 4] = [
        Self::MemTrack,
        Self::DrawState,
        Self::ShaderChecker,
        Self::DeviceLimits,
    ];

    /// Identifier prefix shared by every code of the domain.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::MemTrack => "MEMTRACK",
            Self::DrawState => "DRAWSTATE",
            Self::ShaderChecker => "SHADER_CHECKER",
            Self::DeviceLimits => "DEVLIMITS",
        }
    }

    /// The domain's zero-valued "no violation" sentinel.
    pub const fn none(self) -> ValidationCode {
        match self {
            Self::MemTrack => ValidationCode::MemTrack(MemTrackCode::None),
            Self::DrawState => ValidationCode::DrawState(DrawStateCode::None),
            Self::ShaderChecker => ValidationCode::ShaderChecker(ShaderCheckerCode::None),
            Self::DeviceLimits => ValidationCode::DeviceLimits(DeviceLimitsCode::None),
        }
    }

    /// Number of codes the domain publishes, sentinel included.
    pub const fn count(self) -> usize {
        match self {
            Self::MemTrack => MemTrackCode::COUNT,
            Self::DrawState => DrawStateCode::COUNT,
            Self::ShaderChecker => ShaderCheckerCode::COUNT,
            Self::DeviceLimits => DeviceLimitsCode::COUNT,
        }
    }

    /// Iterates every code of the domain in declaration order.
    pub fn codes(self) -> impl Iterator<Item = ValidationCode> {
        ValidationCode::all().filter(move |code| code.domain() == self)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A single code tagged with the domain that owns it.
///
/// The tag makes cross-domain confusion unrepresentable: a
/// [`MemTrackCode`] and a [`DrawStateCode`] that happen to share a
/// numeric value are different `ValidationCode`s. Checks pick the one
/// most specific code for the violation they found and pass it, wrapped
/// in a [`crate::report::Violation`], to the reporting side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationCode {
    MemTrack(MemTrackCode),
    DrawState(DrawStateCode),
    ShaderChecker(ShaderCheckerCode),
    DeviceLimits(DeviceLimitsCode),
}

impl ValidationCode {
    /// The domain owning this code.
    pub const fn domain(self) -> Domain {
        match self {
            Self::MemTrack(_) => Domain::MemTrack,
            Self::DrawState(_) => Domain::DrawState,
            Self::ShaderChecker(_) => Domain::ShaderChecker,
            Self::DeviceLimits(_) => Domain::DeviceLimits,
        }
    }

    /// Stable numeric value of the code within its domain.
    pub const fn as_raw(self) -> u32 {
        match self {
            Self::MemTrack(code) => code.as_raw(),
            Self::DrawState(code) => code.as_raw(),
            Self::ShaderChecker(code) => code.as_raw(),
            Self::DeviceLimits(code) => code.as_raw(),
        }
    }

    /// Domain-qualified symbolic identifier of the code.
    pub const fn name(self) -> &'static str {
        match self {
            Self::MemTrack(code) => code.name(),
            Self::DrawState(code) => code.name(),
            Self::ShaderChecker(code) => code.name(),
            Self::DeviceLimits(code) => code.name(),
        }
    }

    /// The `(domain, value)` pair. Unique across the whole taxonomy, which
    /// makes it the right key for tables that span domains.
    pub const fn key(self) -> (Domain, u32) {
        (self.domain(), self.as_raw())
    }

    /// Whether this is a domain's "no violation" sentinel.
    pub const fn is_none(self) -> bool {
        self.as_raw() == 0
    }

    /// Looks up a code from a domain tag and a persisted numeric value.
    pub fn from_parts(domain: Domain, value: u32) -> Result<Self, UnknownCode> {
        match domain {
            Domain::MemTrack => MemTrackCode::from_raw(value).map(Self::MemTrack),
            Domain::DrawState => DrawStateCode::from_raw(value).map(Self::DrawState),
            Domain::ShaderChecker => ShaderCheckerCode::from_raw(value).map(Self::ShaderChecker),
            Domain::DeviceLimits => DeviceLimitsCode::from_raw(value).map(Self::DeviceLimits),
        }
    }

    /// Looks up a code by its symbolic identifier across all domains.
    pub fn try_from_name(name: &str) -> Option<Self> {
        SYMBOL_INDEX.get(name).copied()
    }

    /// Iterates the complete taxonomy, domain by domain in declaration order.
    pub fn all() -> impl Iterator<Item = ValidationCode> {
        ALL_CODES.iter().copied()
    }
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<MemTrackCode> for ValidationCode {
    fn from(code: MemTrackCode) -> Self {
        Self::MemTrack(code)
    }
}

impl From<DrawStateCode> for ValidationCode {
    fn from(code: DrawStateCode) -> Self {
        Self::DrawState(code)
    }
}

impl From<ShaderCheckerCode> for ValidationCode {
    fn from(code: ShaderCheckerCode) -> Self {
        Self::ShaderChecker(code)
    }
}

impl From<DeviceLimitsCode> for ValidationCode {
    fn from(code: DeviceLimitsCode) -> Self {
        Self::DeviceLimits(code)
    }
}

/// Lookup failure: the value or symbol is not in the published tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no {domain} code with value {value}")]
pub struct UnknownCode {
    /// Domain the lookup was scoped to.
    pub domain: Domain,
    /// Raw value that matched no published code.
    pub value: u32,
}

lazy_static! {
    static ref ALL_CODES: Vec<ValidationCode> = {
        let mut codes = Vec::with_capacity(
            MemTrackCode::COUNT
                + DrawStateCode::COUNT
                + ShaderCheckerCode::COUNT
                + DeviceLimitsCode::COUNT,
        );
        codes.extend(MemTrackCode::ALL.iter().copied().map(ValidationCode::MemTrack));
        codes.extend(DrawStateCode::ALL.iter().copied().map(ValidationCode::DrawState));
        codes.extend(
            ShaderCheckerCode::ALL
                .iter()
                .copied()
                .map(ValidationCode::ShaderChecker),
        );
        codes.extend(
            DeviceLimitsCode::ALL
                .iter()
                .copied()
                .map(ValidationCode::DeviceLimits),
        );
        codes
    };
    static ref SYMBOL_INDEX: HashMap<&'static str, ValidationCode> =
        ValidationCode::all().map(|code| (code.name(), code)).collect();
}
