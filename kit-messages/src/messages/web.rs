//! Website status checker messages

pub struct WebMessages {
    pub batch_checking: &'static str,
    pub batch_summary: &'static str,
    pub check_failed: &'static str,
    pub interactive_intro: &'static str,
    pub response_time: &'static str,
    pub security_header: &'static str,
    pub server_info_header: &'static str,
    pub url_prompt: &'static str,
}

pub const WEB_MESSAGES: WebMessages = WebMessages {
    batch_checking: "[{index}/{total}] Checking {url}",
    batch_summary: "{successful}/{total} sites responded",
    check_failed: "{url}: {error}",
    interactive_intro: "Enter a URL to check, or 'quit' to exit.",
    response_time: "Response time: {seconds}s",
    security_header: "Security headers ({present}/{total})",
    server_info_header: "Server information",
    url_prompt: "URL",
};
