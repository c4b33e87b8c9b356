//! Configuration file messages

pub struct ConfigMessages {
    pub hint_check_config: &'static str,
    pub init_exists: &'static str,
    pub init_written: &'static str,
    pub path_missing: &'static str,
    pub show_defaults: &'static str,
    pub show_from_file: &'static str,
}

pub const CONFIG_MESSAGES: ConfigMessages = ConfigMessages {
    hint_check_config: "Run 'kit config show' to inspect the settings, or 'kit config init --force' to start over.",
    init_exists: "A config file already exists at {path}. Use --force to overwrite it.",
    init_written: "Wrote default configuration to {path}",
    path_missing: "The file does not exist yet. Run 'kit config init' to create it.",
    show_defaults: "No config file found, showing defaults",
    show_from_file: "Configuration from {path}",
};
