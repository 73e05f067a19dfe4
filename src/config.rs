//! Published constants of the code tables.
//!
//! Consumers persist numeric values and symbolic names, so the tables are
//! append-only: removing or renumbering a code is a breaking change that
//! requires a version bump and a migration, never an in-place edit.

/// Version of the published code tables. Bumped whenever codes are appended.
pub const TAXONOMY_VERSION: u32 = 1;

/// Published memory tracking code count, sentinel included.
pub const MEM_TRACK_CODE_COUNT: usize = 17;

/// Published draw state code count, sentinel included.
pub const DRAW_STATE_CODE_COUNT: usize = 98;

/// Published shader checker code count, sentinel included.
pub const SHADER_CHECKER_CODE_COUNT: usize = 19;

/// Published device limits code count, sentinel included.
pub const DEVICE_LIMITS_CODE_COUNT: usize = 8;
