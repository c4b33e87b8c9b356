//! Password generator and vault messages

pub struct VaultMessages {
    // ============================================================================
    // Generator
    // ============================================================================
    pub passgen_count_invalid: &'static str,
    pub passgen_header: &'static str,
    pub strength_report: &'static str,

    // ============================================================================
    // Master password
    // ============================================================================
    pub already_exists: &'static str,
    pub confirm_prompt: &'static str,
    pub created: &'static str,
    pub master_changed: &'static str,
    pub master_new_prompt: &'static str,
    pub master_prompt: &'static str,
    pub mismatch: &'static str,
    pub not_initialized: &'static str,
    pub too_many_attempts: &'static str,
    pub wrong_password: &'static str,

    // ============================================================================
    // Entries
    // ============================================================================
    pub added: &'static str,
    pub count: &'static str,
    pub edit_nothing: &'static str,
    pub empty: &'static str,
    pub entry_exists: &'static str,
    pub entry_password_prompt: &'static str,
    pub export_plaintext_warning: &'static str,
    pub exported: &'static str,
    pub imported: &'static str,
    pub index_invalid: &'static str,
    pub remove_confirm: &'static str,
    pub removed: &'static str,
    pub replaced: &'static str,
    pub search_none: &'static str,
    pub updated: &'static str,

    pub label_added: &'static str,
    pub label_email: &'static str,
    pub label_password: &'static str,
    pub label_website: &'static str,
}

pub const VAULT_MESSAGES: VaultMessages = VaultMessages {
    passgen_count_invalid: "The number of passwords must be at least 1.",
    passgen_header: "Generating {count} password(s) of length {length}",
    strength_report: "Strength: {strength} ({score}/100)",

    already_exists: "A vault already exists at {path}",
    confirm_prompt: "Confirm password",
    created: "Vault created at {path}",
    master_changed: "Master password changed; {count} entries re-encrypted",
    master_new_prompt: "Choose a master password",
    master_prompt: "Master password",
    mismatch: "Passwords do not match.",
    not_initialized: "No vault at {path}. Run 'kit vault init' first.",
    too_many_attempts: "Too many failed attempts.",
    wrong_password: "Invalid master password. {remaining} attempt(s) left.",

    added: "Saved password for {website}",
    count: "{count} entries",
    edit_nothing: "Nothing to change. Pass --website, --email, --password or --generate.",
    empty: "The vault is empty.",
    entry_exists: "An entry for {website} already exists. Use --force to replace it.",
    entry_password_prompt: "Password",
    export_plaintext_warning: "The export contains unencrypted passwords. Delete it when you are done.",
    exported: "Exported {count} entries to {path}",
    imported: "Imported {imported} new, replaced {replaced}, skipped {skipped}",
    index_invalid: "Entry numbers start at 1.",
    remove_confirm: "Delete the entry for {website}?",
    removed: "Removed {website}",
    replaced: "Replaced password for {website}",
    search_none: "No entries match '{term}'.",
    updated: "Updated {website}",

    label_added: "Added",
    label_email: "Email",
    label_password: "Password",
    label_website: "Website",
};
