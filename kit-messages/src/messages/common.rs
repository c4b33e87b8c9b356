//! Messages shared across tools

pub struct CommonMessages {
    pub cancelled: &'static str,
    pub goodbye: &'static str,

    // ============================================================================
    // Errors and hints
    // ============================================================================
    pub completion_unsupported: &'static str,
    pub error_generic: &'static str,
    pub hint_needs_terminal: &'static str,
    pub hint_network: &'static str,
}

pub const COMMON_MESSAGES: CommonMessages = CommonMessages {
    cancelled: "Cancelled.",
    goodbye: "Goodbye!",

    completion_unsupported: "Unsupported shell: {shell}. Supported: bash, zsh, fish, powershell",
    error_generic: "❌ Error: {error}",
    hint_needs_terminal: "This tool is interactive. Run it in a terminal or pass the values as arguments.",
    hint_network: "Check your internet connection and try again.",
};
