//! `kit analyze`

use crate::error::CliResult;
use kit_core::{kit_println, kit_success};
use kit_messages::{msg, MESSAGES};
use kit_text::analysis::{analyze, preview, read_with_fallback, PREVIEW_CHARS};
use std::path::Path;
use tracing::info;

pub fn handle_analyze(
    file: &Path,
    detailed: bool,
    save: Option<&Path>,
    show_preview: bool,
    full: bool,
) -> CliResult<()> {
    let text = read_with_fallback(file)?;
    let stats = analyze(&text);
    info!(words = stats.total_words, "text analysed");

    kit_println!(
        "{}",
        msg!(MESSAGES.text.analyze_header, file = file.display().to_string())
    );
    if detailed {
        kit_println!("{}", stats.render_detailed());
    } else {
        kit_println!("{}", stats.render_basic());
    }

    if show_preview {
        kit_println!("{}", MESSAGES.text.analyze_preview_header);
        if full {
            kit_println!("{}", text);
        } else {
            kit_println!("{}", preview(&text, PREVIEW_CHARS));
        }
    }

    if let Some(out) = save {
        stats.write_report(out, &file.display().to_string())?;
        kit_success!(
            "{}",
            msg!(MESSAGES.text.analyze_saved, path = out.display().to_string())
        );
    }
    Ok(())
}
