//! Draw state and command buffer sequencing codes.
//!
//! Command buffers move through a small lifecycle: *initial* after
//! allocation or reset, *recording* between begin and end, *executable*
//! after a successful end, *pending* while submitted, and *invalid* once
//! a resource they recorded was destroyed or a one-time submission
//! completed. On top of that, recording tracks which state is currently
//! bound (pipeline, viewport, scissor, dynamic state, descriptor sets,
//! index buffer, render pass). The codes in this domain name the
//! distinguishable ways a call can break those rules — an action taken in
//! a state that does not permit it, or a draw issued with required state
//! missing or incompatible. The lifecycle itself is driven by the checks
//! that consume these codes, not encoded here.

crate::error_codes! {
    /// # Draw state violations
    ///
    /// The largest domain: bound-state completeness at draw time, begin/
    /// end/reset sequencing, render pass and framebuffer compatibility,
    /// descriptor set updates and binds, swapchain lifecycle, and
    /// destruction ordering.
    pub enum DrawStateCode: DrawState, "DRAWSTATE" {
        /// No draw state violation detected. Never reported.
        #[default]
        None = 0 => "NONE",
        /// Bookkeeping failure inside the draw state tracker itself.
        InternalError = 1 => "INTERNAL_ERROR",
        /// Draw or dispatch issued with no pipeline bound.
        NoPipelineBound = 2 => "NO_PIPELINE_BOUND",
        /// Descriptor set handle is unknown.
        InvalidSet = 3 => "INVALID_SET",
        /// Render area falls outside the framebuffer.
        InvalidRenderArea = 4 => "INVALID_RENDER_AREA",
        /// Pipeline or descriptor set layout handle is unknown.
        InvalidLayout = 5 => "INVALID_LAYOUT",
        /// Image used in a layout it was never transitioned to.
        InvalidImageLayout = 6 => "INVALID_IMAGE_LAYOUT",
        /// Pipeline handle is unknown.
        InvalidPipeline = 7 => "INVALID_PIPELINE",
        /// Pipeline create info violates a creation rule.
        InvalidPipelineCreateState = 8 => "INVALID_PIPELINE_CREATE_STATE",

        // Unknown or destroyed handles recorded into a command buffer.
        InvalidCommandBuffer = 9 => "INVALID_COMMAND_BUFFER",
        InvalidBarrier = 10 => "INVALID_BARRIER",
        InvalidBuffer = 11 => "INVALID_BUFFER",
        InvalidImage = 12 => "INVALID_IMAGE",
        InvalidBufferView = 13 => "INVALID_BUFFER_VIEW",
        InvalidImageView = 14 => "INVALID_IMAGE_VIEW",
        InvalidQuery = 15 => "INVALID_QUERY",
        InvalidQueryPool = 16 => "INVALID_QUERY_POOL",
        InvalidDescriptorPool = 17 => "INVALID_DESCRIPTOR_POOL",
        InvalidCommandPool = 18 => "INVALID_COMMAND_POOL",
        InvalidFence = 19 => "INVALID_FENCE",
        InvalidEvent = 20 => "INVALID_EVENT",
        InvalidSampler = 21 => "INVALID_SAMPLER",
        InvalidFramebuffer = 22 => "INVALID_FRAMEBUFFER",
        InvalidDeviceMemory = 23 => "INVALID_DEVICE_MEMORY",

        /// Indexed draw reads past the end of the bound index buffer.
        VertexIndexOutOfBounds = 24 => "VTX_INDEX_OUT_OF_BOUNDS",
        /// Index buffer offset is not aligned to the index type.
        VertexIndexAlignmentError = 25 => "VTX_INDEX_ALIGNMENT_ERROR",
        /// Tracker ran out of memory recording state.
        OutOfMemory = 26 => "OUT_OF_MEMORY",

        // Descriptor set update and bind rules.
        /// Descriptor set handle is unknown or was freed.
        InvalidDescriptorSet = 27 => "INVALID_DESCRIPTOR_SET",
        /// Write or copy update uses the wrong descriptor type.
        DescriptorTypeMismatch = 28 => "DESCRIPTOR_TYPE_MISMATCH",
        /// Update stage flags disagree with the layout binding.
        DescriptorStageFlagsMismatch = 29 => "DESCRIPTOR_STAGEFLAGS_MISMATCH",
        /// Update writes past the end of the binding.
        DescriptorUpdateOutOfBounds = 30 => "DESCRIPTOR_UPDATE_OUT_OF_BOUNDS",
        /// Pool has no free sets of the requested layout left.
        DescriptorPoolEmpty = 31 => "DESCRIPTOR_POOL_EMPTY",
        /// Free called on a pool created without free-descriptor-set.
        CantFreeFromNonFreePool = 32 => "CANT_FREE_FROM_NON_FREE_POOL",
        /// Malformed write-update structure.
        InvalidWriteUpdate = 33 => "INVALID_WRITE_UPDATE",
        /// Malformed copy-update structure.
        InvalidCopyUpdate = 34 => "INVALID_COPY_UPDATE",
        /// Update structure type is not a descriptor update.
        InvalidUpdateStruct = 35 => "INVALID_UPDATE_STRUCT",
        /// Pipeline sample count differs from the render pass attachments.
        NumSamplesMismatch = 36 => "NUM_SAMPLES_MISMATCH",

        // Begin/end/reset sequencing.
        /// Submit of a command buffer still in the recording state.
        NoEndCommandBuffer = 37 => "NO_END_COMMAND_BUFFER",
        /// Recording command issued outside begin/end.
        NoBeginCommandBuffer = 38 => "NO_BEGIN_COMMAND_BUFFER",
        /// One-time-submit command buffer submitted twice.
        CommandBufferSingleSubmitViolation = 39 => "COMMAND_BUFFER_SINGLE_SUBMIT_VIOLATION",
        /// Secondary command buffer executed in an incompatible way.
        InvalidSecondaryCommandBuffer = 40 => "INVALID_SECONDARY_COMMAND_BUFFER",

        // Required dynamic state missing at draw time.
        ViewportNotBound = 41 => "VIEWPORT_NOT_BOUND",
        ScissorNotBound = 42 => "SCISSOR_NOT_BOUND",
        LineWidthNotBound = 43 => "LINE_WIDTH_NOT_BOUND",
        DepthBiasNotBound = 44 => "DEPTH_BIAS_NOT_BOUND",
        BlendNotBound = 45 => "BLEND_NOT_BOUND",
        DepthBoundsNotBound = 46 => "DEPTH_BOUNDS_NOT_BOUND",
        StencilNotBound = 47 => "STENCIL_NOT_BOUND",
        IndexBufferNotBound = 48 => "INDEX_BUFFER_NOT_BOUND",

        // Render pass and framebuffer compatibility.
        /// Bound descriptor sets were allocated against an incompatible
        /// pipeline layout.
        PipelineLayoutsIncompatible = 49 => "PIPELINE_LAYOUTS_INCOMPATIBLE",
        /// Pipeline's render pass is incompatible with the active one.
        RenderPassIncompatible = 50 => "RENDERPASS_INCOMPATIBLE",
        /// Framebuffer is incompatible with the render pass in use.
        FramebufferIncompatible = 51 => "FRAMEBUFFER_INCOMPATIBLE",
        /// Framebuffer create info violates a creation rule.
        InvalidFramebufferCreateInfo = 52 => "INVALID_FRAMEBUFFER_CREATE_INFO",
        /// Render pass handle is unknown.
        InvalidRenderPass = 53 => "INVALID_RENDERPASS",
        /// Command forbidden inside (or outside) a render pass instance.
        InvalidRenderPassCommand = 54 => "INVALID_RENDERPASS_CMD",
        /// Draw issued with no render pass instance active.
        NoActiveRenderPass = 55 => "NO_ACTIVE_RENDERPASS",
        /// Attachment used in a way its usage flags forbid.
        InvalidImageUsage = 56 => "INVALID_IMAGE_USAGE",
        /// Attachment reference indexes past the attachment array.
        InvalidAttachmentIndex = 57 => "INVALID_ATTACHMENT_INDEX",

        /// Descriptor set bound before ever being updated.
        DescriptorSetNotUpdated = 58 => "DESCRIPTOR_SET_NOT_UPDATED",
        /// Pipeline layout expects a set that was never bound.
        DescriptorSetNotBound = 59 => "DESCRIPTOR_SET_NOT_BOUND",
        /// Dynamic offset count differs from the dynamic descriptors.
        InvalidDynamicOffsetCount = 60 => "INVALID_DYNAMIC_OFFSET_COUNT",
        /// Attachment clear recorded before any draw used it.
        ClearCommandBeforeDraw = 61 => "CLEAR_CMD_BEFORE_DRAW",
        /// Begin called on a command buffer not in the initial state.
        BeginCommandBufferInvalidState = 62 => "BEGIN_CB_INVALID_STATE",
        /// Simultaneous use of a command buffer not recorded for it.
        InvalidCommandBufferSimultaneousUse = 63 => "INVALID_CB_SIMULTANEOUS_USE",
        /// Reset of a command buffer whose pool forbids individual reset.
        InvalidCommandBufferReset = 64 => "INVALID_COMMAND_BUFFER_RESET",
        /// Bound viewport and scissor counts disagree.
        ViewportScissorMismatch = 65 => "VIEWPORT_SCISSOR_MISMATCH",
        /// Image aspect does not match the image's format.
        InvalidImageAspect = 66 => "INVALID_IMAGE_ASPECT",
        /// Subpass references an attachment the render pass lacks.
        MissingAttachmentReference = 67 => "MISSING_ATTACHMENT_REFERENCE",

        // Descriptor contents checked at bind/draw time.
        /// Sampler descriptor holds an invalid or destroyed sampler.
        SamplerDescriptorError = 68 => "SAMPLER_DESCRIPTOR_ERROR",
        /// Immutable sampler binding updated with a different sampler.
        InconsistentImmutableSamplerUpdate = 69 => "INCONSISTENT_IMMUTABLE_SAMPLER_UPDATE",
        /// Image descriptor holds an invalid view or wrong layout.
        ImageViewDescriptorError = 70 => "IMAGEVIEW_DESCRIPTOR_ERROR",
        /// Texel buffer descriptor holds an invalid buffer view.
        BufferViewDescriptorError = 71 => "BUFFERVIEW_DESCRIPTOR_ERROR",
        /// Buffer descriptor holds an invalid buffer or range.
        BufferInfoDescriptorError = 72 => "BUFFERINFO_DESCRIPTOR_ERROR",
        /// Dynamic offset pushes the bound range past the buffer end.
        DynamicOffsetOverflow = 73 => "DYNAMIC_OFFSET_OVERFLOW",

        /// Object destroyed twice.
        DoubleDestroy = 74 => "DOUBLE_DESTROY",
        /// Object destroyed while still in use by the device.
        ObjectInUse = 75 => "OBJECT_INUSE",
        /// Queue submission can never complete (fence/semaphore cycle).
        QueueForwardProgress = 76 => "QUEUE_FORWARD_PROGRESS",

        // Buffer offset alignment limits.
        InvalidBufferMemoryOffset = 77 => "INVALID_BUFFER_MEMORY_OFFSET",
        InvalidTexelBufferOffset = 78 => "INVALID_TEXEL_BUFFER_OFFSET",
        InvalidUniformBufferOffset = 79 => "INVALID_UNIFORM_BUFFER_OFFSET",
        InvalidStorageBufferOffset = 80 => "INVALID_STORAGE_BUFFER_OFFSET",

        /// Per-attachment blend state differs without independent blend.
        IndependentBlend = 81 => "INDEPENDENT_BLEND",
        /// Logic op used while the logic op feature is disabled.
        DisabledLogicOp = 82 => "DISABLED_LOGIC_OP",
        /// Queue index exceeds the count requested at device creation.
        InvalidQueueIndex = 83 => "INVALID_QUEUE_INDEX",
        /// Queue family cannot execute the recorded commands.
        InvalidQueueFamily = 84 => "INVALID_QUEUE_FAMILY",
        /// Transfer region violates the queue family's granularity.
        ImageTransferGranularity = 85 => "IMAGE_TRANSFER_GRANULARITY",
        /// Push constant update outside the layout's declared ranges.
        PushConstantsError = 86 => "PUSH_CONSTANTS_ERROR",
        /// Subpass index exceeds the render pass's subpass count.
        InvalidSubpassIndex = 87 => "INVALID_SUBPASS_INDEX",

        // Swapchain lifecycle.
        /// Present of an image that was never acquired.
        SwapchainImageNotAcquired = 88 => "SWAPCHAIN_IMAGE_NOT_ACQUIRED",
        /// Surface already has a non-retired swapchain.
        SwapchainAlreadyExists = 89 => "SWAPCHAIN_ALREADY_EXISTS",
        /// Old swapchain belongs to a different surface.
        SwapchainWrongSurface = 90 => "SWAPCHAIN_WRONG_SURFACE",
        /// Swapchain created before querying surface capabilities.
        SwapchainCreateBeforeQuery = 91 => "SWAPCHAIN_CREATE_BEFORE_QUERY",
        /// Image count outside the surface's supported range.
        SwapchainBadImageCount = 92 => "SWAPCHAIN_BAD_IMAGE_COUNT",
        /// Extent outside the surface's supported range.
        SwapchainBadExtents = 93 => "SWAPCHAIN_BAD_EXTENTS",
        /// Pre-transform not supported by the surface.
        SwapchainBadPreTransform = 94 => "SWAPCHAIN_BAD_PRE_TRANSFORM",
        /// Image usage flags not supported for the surface.
        SwapchainBadUsageFlags = 95 => "SWAPCHAIN_BAD_USAGE_FLAGS",
        /// More images acquired than the swapchain allows at once.
        SwapchainTooManyImages = 96 => "SWAPCHAIN_TOO_MANY_IMAGES",
        /// Present mode not supported by the surface.
        SwapchainBadPresentMode = 97 => "SWAPCHAIN_BAD_PRESENT_MODE",
    }
}
