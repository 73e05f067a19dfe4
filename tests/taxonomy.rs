//! Structural properties of the code tables: sentinels, distinctness,
//! published counts, cross-domain isolation, and totality of a message
//! mapping over every code.

use std::collections::HashSet;

use corecheck::config;
use corecheck::{
    DeviceLimitsCode, Domain, DrawStateCode, MemTrackCode, ShaderCheckerCode, ValidationCode,
};

#[test]
fn test_every_domain_has_a_zero_sentinel() {
    for domain in Domain::ALL {
        let none = domain.none();
        assert_eq!(none.as_raw(), 0, "{domain} sentinel must be value 0");
        assert!(none.is_none());
        // The sentinel is the first code of its domain.
        assert_eq!(domain.codes().next(), Some(none));
    }
}

#[test]
fn test_published_counts() {
    assert_eq!(MemTrackCode::COUNT, config::MEM_TRACK_CODE_COUNT);
    assert_eq!(DrawStateCode::COUNT, config::DRAW_STATE_CODE_COUNT);
    assert_eq!(ShaderCheckerCode::COUNT, config::SHADER_CHECKER_CODE_COUNT);
    assert_eq!(DeviceLimitsCode::COUNT, config::DEVICE_LIMITS_CODE_COUNT);

    for domain in Domain::ALL {
        assert_eq!(domain.codes().count(), domain.count());
    }
    assert_eq!(
        ValidationCode::all().count(),
        config::MEM_TRACK_CODE_COUNT
            + config::DRAW_STATE_CODE_COUNT
            + config::SHADER_CHECKER_CODE_COUNT
            + config::DEVICE_LIMITS_CODE_COUNT
    );
}

#[test]
fn test_values_are_distinct_within_each_domain() {
    for domain in Domain::ALL {
        let mut seen = HashSet::new();
        for code in domain.codes() {
            assert!(
                seen.insert(code.as_raw()),
                "duplicate value {} in {domain}",
                code.as_raw()
            );
        }
    }
}

#[test]
fn test_names_are_distinct_across_the_whole_taxonomy() {
    let mut seen = HashSet::new();
    for code in ValidationCode::all() {
        assert!(seen.insert(code.name()), "duplicate name {}", code.name());
    }
}

#[test]
fn test_domain_value_pairs_are_unique() {
    let mut seen = HashSet::new();
    for code in ValidationCode::all() {
        assert!(seen.insert(code.key()), "duplicate key {:?}", code.key());
    }
}

#[test]
fn test_names_carry_their_domain_prefix() {
    for code in ValidationCode::all() {
        let prefix = format!("{}_", code.domain().prefix());
        assert!(
            code.name().starts_with(&prefix),
            "{} does not start with {prefix}",
            code.name()
        );
    }
}

#[test]
fn test_every_code_round_trips_by_value_and_by_name() {
    for code in ValidationCode::all() {
        let (domain, value) = code.key();
        assert_eq!(ValidationCode::from_parts(domain, value).unwrap(), code);
        assert_eq!(ValidationCode::try_from_name(code.name()), Some(code));
    }
}

#[test]
fn test_codes_stay_inside_their_domain() {
    for domain in Domain::ALL {
        for code in domain.codes() {
            assert_eq!(code.domain(), domain);
        }
    }
}

// A dispatcher has to map every code to user-facing text. The stub table
// below stands in for one: the matches carry no wildcard arm, so adding a
// code without extending the table is a compile error, and the test
// checks the sentinel convention plus non-empty text for the rest.

fn stub_message(code: ValidationCode) -> &'static str {
    match code {
        ValidationCode::MemTrack(code) => mem_track_message(code),
        ValidationCode::DrawState(code) => draw_state_message(code),
        ValidationCode::ShaderChecker(code) => shader_checker_message(code),
        ValidationCode::DeviceLimits(code) => device_limits_message(code),
    }
}

fn mem_track_message(code: MemTrackCode) -> &'static str {
    use MemTrackCode::*;
    match code {
        None => "",
        InvalidCommandBuffer => "command buffer is unknown to the memory tracker",
        InvalidMemoryObject => "device memory object is unknown to the memory tracker",
        InvalidAliasing => "memory ranges bound to different objects overlap illegally",
        InternalError => "internal memory tracker failure",
        FreedMemoryReference => "memory referenced after being freed",
        InvalidObject => "object is unknown or was destroyed",
        MemoryLeak => "device memory was leaked",
        InvalidState => "object state does not permit this operation",
        ResetCommandBufferWhileInFlight => "command buffer reset while still in flight",
        InvalidFenceState => "fence is in the wrong state for this operation",
        RebindObject => "object is already bound to memory",
        InvalidUsageFlag => "object was not created with the required usage flag",
        InvalidMap => "memory map or unmap violates the mapping rules",
        InvalidMemoryType => "memory type cannot back this object",
        InvalidMemoryRegion => "region falls outside the allocation",
        ObjectNotBound => "object has no memory bound",
    }
}

fn draw_state_message(code: DrawStateCode) -> &'static str {
    use DrawStateCode::*;
    match code {
        None => "",
        InternalError => "internal draw state tracker failure",
        NoPipelineBound => "no pipeline bound",
        InvalidSet => "descriptor set is unknown",
        InvalidRenderArea => "render area exceeds the framebuffer",
        InvalidLayout => "layout is unknown",
        InvalidImageLayout => "image is in the wrong layout",
        InvalidPipeline => "pipeline is unknown",
        InvalidPipelineCreateState => "pipeline create info is invalid",
        InvalidCommandBuffer => "command buffer is unknown",
        InvalidBarrier => "barrier is invalid",
        InvalidBuffer => "buffer is unknown",
        InvalidImage => "image is unknown",
        InvalidBufferView => "buffer view is unknown",
        InvalidImageView => "image view is unknown",
        InvalidQuery => "query is invalid",
        InvalidQueryPool => "query pool is unknown",
        InvalidDescriptorPool => "descriptor pool is unknown",
        InvalidCommandPool => "command pool is unknown",
        InvalidFence => "fence is unknown",
        InvalidEvent => "event is unknown",
        InvalidSampler => "sampler is unknown",
        InvalidFramebuffer => "framebuffer is unknown",
        InvalidDeviceMemory => "device memory is unknown",
        VertexIndexOutOfBounds => "index draw reads past the index buffer",
        VertexIndexAlignmentError => "index buffer offset is misaligned",
        OutOfMemory => "out of memory while tracking state",
        InvalidDescriptorSet => "descriptor set is invalid",
        DescriptorTypeMismatch => "descriptor update type does not match the binding",
        DescriptorStageFlagsMismatch => "descriptor stage flags do not match the binding",
        DescriptorUpdateOutOfBounds => "descriptor update exceeds the binding",
        DescriptorPoolEmpty => "descriptor pool has no free sets",
        CantFreeFromNonFreePool => "pool was not created for freeing descriptor sets",
        InvalidWriteUpdate => "write update is malformed",
        InvalidCopyUpdate => "copy update is malformed",
        InvalidUpdateStruct => "structure is not a descriptor update",
        NumSamplesMismatch => "sample counts do not match",
        NoEndCommandBuffer => "command buffer was never ended",
        NoBeginCommandBuffer => "command buffer was never begun",
        CommandBufferSingleSubmitViolation => "one-time-submit command buffer submitted again",
        InvalidSecondaryCommandBuffer => "secondary command buffer used incompatibly",
        ViewportNotBound => "viewport state not bound",
        ScissorNotBound => "scissor state not bound",
        LineWidthNotBound => "line width not bound",
        DepthBiasNotBound => "depth bias not bound",
        BlendNotBound => "blend constants not bound",
        DepthBoundsNotBound => "depth bounds not bound",
        StencilNotBound => "stencil state not bound",
        IndexBufferNotBound => "index buffer not bound",
        PipelineLayoutsIncompatible => "pipeline layouts are incompatible",
        RenderPassIncompatible => "render passes are incompatible",
        FramebufferIncompatible => "framebuffer is incompatible with the render pass",
        InvalidFramebufferCreateInfo => "framebuffer create info is invalid",
        InvalidRenderPass => "render pass is unknown",
        InvalidRenderPassCommand => "command not allowed in this render pass scope",
        NoActiveRenderPass => "no render pass is active",
        InvalidImageUsage => "image usage does not permit this attachment use",
        InvalidAttachmentIndex => "attachment index is out of range",
        DescriptorSetNotUpdated => "descriptor set bound before being updated",
        DescriptorSetNotBound => "descriptor set not bound",
        InvalidDynamicOffsetCount => "dynamic offset count is wrong",
        ClearCommandBeforeDraw => "clear recorded before any draw",
        BeginCommandBufferInvalidState => "begin called in the wrong command buffer state",
        InvalidCommandBufferSimultaneousUse => "simultaneous use was not requested at begin",
        InvalidCommandBufferReset => "pool does not allow resetting this command buffer",
        ViewportScissorMismatch => "viewport and scissor counts differ",
        InvalidImageAspect => "image aspect does not match the format",
        MissingAttachmentReference => "attachment reference is missing",
        SamplerDescriptorError => "sampler descriptor is invalid",
        InconsistentImmutableSamplerUpdate => "immutable sampler binding updated with a sampler",
        ImageViewDescriptorError => "image view descriptor is invalid",
        BufferViewDescriptorError => "buffer view descriptor is invalid",
        BufferInfoDescriptorError => "buffer descriptor is invalid",
        DynamicOffsetOverflow => "dynamic offset pushes the range past the buffer",
        DoubleDestroy => "object destroyed twice",
        ObjectInUse => "object destroyed while in use",
        QueueForwardProgress => "queue cannot make forward progress",
        InvalidBufferMemoryOffset => "buffer memory offset is misaligned",
        InvalidTexelBufferOffset => "texel buffer offset is misaligned",
        InvalidUniformBufferOffset => "uniform buffer offset is misaligned",
        InvalidStorageBufferOffset => "storage buffer offset is misaligned",
        IndependentBlend => "independent blend is not enabled",
        DisabledLogicOp => "logic op is not enabled",
        InvalidQueueIndex => "queue index is out of range",
        InvalidQueueFamily => "queue family cannot execute these commands",
        ImageTransferGranularity => "region violates the transfer granularity",
        PushConstantsError => "push constant update is out of range",
        InvalidSubpassIndex => "subpass index is out of range",
        SwapchainImageNotAcquired => "image was not acquired from the swapchain",
        SwapchainAlreadyExists => "surface already has a swapchain",
        SwapchainWrongSurface => "old swapchain belongs to another surface",
        SwapchainCreateBeforeQuery => "surface capabilities were never queried",
        SwapchainBadImageCount => "image count is outside the supported range",
        SwapchainBadExtents => "extent is outside the supported range",
        SwapchainBadPreTransform => "pre-transform is not supported",
        SwapchainBadUsageFlags => "usage flags are not supported",
        SwapchainTooManyImages => "too many images acquired",
        SwapchainBadPresentMode => "present mode is not supported",
    }
}

fn shader_checker_message(code: ShaderCheckerCode) -> &'static str {
    use ShaderCheckerCode::*;
    match code {
        None => "",
        InterfaceTypeMismatch => "interface types differ across the stage boundary",
        OutputNotConsumed => "output is never consumed by the next stage",
        InputNotProduced => "input is never produced by an earlier stage",
        NonSpirvShader => "module is not valid SPIR-V",
        InconsistentSpirv => "SPIR-V module is internally inconsistent",
        UnknownStage => "stage is unknown",
        InconsistentVertexInput => "vertex input state does not match the vertex stage",
        MissingDescriptor => "shader uses a binding missing from the layouts",
        BadSpecialization => "specialization constant is invalid",
        MissingEntrypoint => "entry point is missing from the module",
        PushConstantOutOfRange => "push constant use is outside every declared range",
        PushConstantNotAccessibleFromStage => "push constant range is not visible to this stage",
        DescriptorTypeMismatch => "descriptor type does not match the shader's use",
        DescriptorNotAccessibleFromStage => "binding is not visible to this stage",
        FeatureNotEnabled => "required feature is not enabled",
        BadCapability => "capability is not supported by the device",
        MissingInputAttachment => "subpass lacks the input attachment",
        InputAttachmentTypeMismatch => "input attachment format does not match the shader",
    }
}

fn device_limits_message(code: DeviceLimitsCode) -> &'static str {
    use DeviceLimitsCode::*;
    match code {
        None => "",
        InvalidInstance => "instance is unknown",
        InvalidPhysicalDevice => "physical device is unknown",
        MissingQueryCount => "count was never queried before requesting data",
        MustQueryCount => "count must be queried first",
        InvalidFeatureRequested => "requested feature is not supported",
        CountMismatch => "count differs from the queried count",
        InvalidQueueCreateRequest => "queue creation request exceeds the family's limits",
    }
}

#[test]
fn test_message_mapping_is_total() {
    for code in ValidationCode::all() {
        let message = stub_message(code);
        if code.is_none() {
            // Sentinels mean "nothing detected" and never reach a dispatcher.
            assert!(message.is_empty());
        } else {
            assert!(!message.is_empty(), "{} has no message", code.name());
        }
    }
}
