//! Static shader interface analysis codes.

crate::error_codes! {
    /// # Shader checker violations
    ///
    /// Mismatches found by inspecting shader modules against each other
    /// and against the pipeline state they are built with: interface
    /// variables across stage boundaries, descriptor bindings, push
    /// constant ranges, and declared capabilities. The checker emits one
    /// code per defect per offending pair of stages or bindings, so a
    /// single module can produce several independent reports.
    pub enum ShaderCheckerCode: ShaderChecker, "SHADER_CHECKER" {
        /// No shader interface violation detected. Never reported.
        #[default]
        None = 0 => "NONE",
        /// Types disagree across a stage interface location.
        InterfaceTypeMismatch = 1 => "INTERFACE_TYPE_MISMATCH",
        /// Producer stage writes a location the consumer never reads.
        OutputNotConsumed = 2 => "OUTPUT_NOT_CONSUMED",
        /// Consumer stage reads a location no earlier stage writes.
        InputNotProduced = 3 => "INPUT_NOT_PRODUCED",
        /// Module is not valid SPIR-V.
        NonSpirvShader = 4 => "NON_SPIRV_SHADER",
        /// SPIR-V parses but is internally inconsistent.
        InconsistentSpirv = 5 => "INCONSISTENT_SPIRV",
        /// Stage flag does not name a known pipeline stage.
        UnknownStage = 6 => "UNKNOWN_STAGE",
        /// Vertex input state and vertex stage inputs disagree.
        InconsistentVertexInput = 7 => "INCONSISTENT_VI",
        /// Shader references a binding absent from the set layouts.
        MissingDescriptor = 8 => "MISSING_DESCRIPTOR",
        /// Specialization constant entry is malformed or out of range.
        BadSpecialization = 9 => "BAD_SPECIALIZATION",
        /// Named entry point is not present in the module.
        MissingEntrypoint = 10 => "MISSING_ENTRYPOINT",
        /// Push constant use falls outside every declared range.
        PushConstantOutOfRange = 11 => "PUSH_CONSTANT_OUT_OF_RANGE",
        /// Push constant range is not visible to the using stage.
        PushConstantNotAccessibleFromStage = 12 => "PUSH_CONSTANT_NOT_ACCESSIBLE_FROM_STAGE",
        /// Descriptor type in the layout differs from the shader's use of it.
        DescriptorTypeMismatch = 13 => "DESCRIPTOR_TYPE_MISMATCH",
        /// Binding's stage flags exclude the stage that uses it.
        DescriptorNotAccessibleFromStage = 14 => "DESCRIPTOR_NOT_ACCESSIBLE_FROM_STAGE",
        /// Shader requires a device feature that was not enabled.
        FeatureNotEnabled = 15 => "FEATURE_NOT_ENABLED",
        /// Shader declares a capability the device cannot provide.
        BadCapability = 16 => "BAD_CAPABILITY",
        /// Fragment shader reads an input attachment the subpass lacks.
        MissingInputAttachment = 17 => "MISSING_INPUT_ATTACHMENT",
        /// Input attachment format and shader declaration disagree.
        InputAttachmentTypeMismatch = 18 => "INPUT_ATTACHMENT_TYPE_MISMATCH",
    }
}
