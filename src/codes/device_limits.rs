//! Device limit and feature query codes.

crate::error_codes! {
    /// # Device limits violations
    ///
    /// Mismatches between what an application requests and what the
    /// physical device reported when queried. These checks run before a
    /// device or queue is created, so a violation here always surfaces
    /// before any object lifetime tracking can begin — there is no
    /// object to mis-track yet.
    pub enum DeviceLimitsCode: DeviceLimits, "DEVLIMITS" {
        /// No device limits violation detected. Never reported.
        #[default]
        None = 0 => "NONE",
        /// Instance handle is unknown.
        InvalidInstance = 1 => "INVALID_INSTANCE",
        /// Physical device handle is unknown.
        InvalidPhysicalDevice = 2 => "INVALID_PHYSICAL_DEVICE",
        /// Data requested without first querying the element count.
        MissingQueryCount = 3 => "MISSING_QUERY_COUNT",
        /// Count must be queried before this request can be honored.
        MustQueryCount = 4 => "MUST_QUERY_COUNT",
        /// Device creation enables a feature the physical device lacks.
        InvalidFeatureRequested = 5 => "INVALID_FEATURE_REQUESTED",
        /// Count passed in differs from the count previously queried.
        CountMismatch = 6 => "COUNT_MISMATCH",
        /// Queue creation request exceeds the family's published limits.
        InvalidQueueCreateRequest = 7 => "INVALID_QUEUE_CREATE_REQUEST",
    }
}
