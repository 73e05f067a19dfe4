//! Object and memory lifetime tracking codes.

crate::error_codes! {
    /// # Memory tracking violations
    ///
    /// Violations of the contract between an object and the device memory
    /// backing it: binding, mapping, lifetime and region rules. A memory
    /// check reports the first, most specific code that applies to the
    /// call it inspected; anything a memory check can detect must be
    /// expressible with a code from this set.
    pub enum MemTrackCode: MemTrack, "MEMTRACK" {
        /// No memory tracking violation detected. Never reported.
        #[default]
        None = 0 => "NONE",
        /// Command buffer handle is unknown to the tracker.
        InvalidCommandBuffer = 1 => "INVALID_CB",
        /// Device memory handle is unknown to the tracker.
        InvalidMemoryObject = 2 => "INVALID_MEM_OBJ",
        /// Memory ranges bound to different objects overlap illegally.
        InvalidAliasing = 3 => "INVALID_ALIASING",
        /// Bookkeeping failure inside the tracker itself.
        InternalError = 4 => "INTERNAL_ERROR",
        /// Use of a memory allocation after it was freed.
        FreedMemoryReference = 5 => "FREED_MEM_REF",
        /// Object handle is unknown or was already destroyed.
        InvalidObject = 6 => "INVALID_OBJECT",
        /// Device memory still bound when its last reference went away.
        MemoryLeak = 7 => "MEMORY_LEAK",
        /// Object is in a state that forbids the attempted operation.
        InvalidState = 8 => "INVALID_STATE",
        /// Command buffer reset while a prior submission is still executing.
        ResetCommandBufferWhileInFlight = 9 => "RESET_CB_WHILE_IN_FLIGHT",
        /// Fence used in the wrong signaled/unsignaled state.
        InvalidFenceState = 10 => "INVALID_FENCE_STATE",
        /// Memory bound to an object that already has a binding.
        RebindObject = 11 => "REBIND_OBJECT",
        /// Operation requires a usage flag the object was not created with.
        InvalidUsageFlag = 12 => "INVALID_USAGE_FLAG",
        /// Map or unmap outside the mapping rules (double map, flush of an
        /// unmapped allocation, non-host-visible memory).
        InvalidMap = 13 => "INVALID_MAP",
        /// Binding uses a memory type the object cannot accept.
        InvalidMemoryType = 14 => "INVALID_MEM_TYPE",
        /// Mapped or bound region falls outside the allocation.
        InvalidMemoryRegion = 15 => "INVALID_MEM_REGION",
        /// Object used before any memory was bound to it.
        ObjectNotBound = 16 => "OBJECT_NOT_BOUND",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_default_and_zero() {
        assert_eq!(MemTrackCode::default(), MemTrackCode::None);
        assert_eq!(MemTrackCode::None.as_raw(), 0);
        assert!(MemTrackCode::None.is_none());
        assert!(!MemTrackCode::MemoryLeak.is_none());
    }

    #[test]
    fn test_name_round_trip() {
        assert_eq!(
            MemTrackCode::FreedMemoryReference.name(),
            "MEMTRACK_FREED_MEM_REF"
        );
        assert_eq!(
            MemTrackCode::try_from_name("MEMTRACK_FREED_MEM_REF"),
            Some(MemTrackCode::FreedMemoryReference)
        );
        assert_eq!(MemTrackCode::try_from_name("MEMTRACK_NOT_A_CODE"), None);
    }

    #[test]
    fn test_raw_round_trip() {
        for code in MemTrackCode::ALL {
            assert_eq!(MemTrackCode::from_raw(code.as_raw()).unwrap(), code);
        }
        assert!(MemTrackCode::from_raw(MemTrackCode::COUNT as u32).is_err());
    }
}
