//! `kit status`

use super::prompt;
use crate::error::CliResult;
use colored::Colorize;
use kit_config::WebSettings;
use kit_core::{kit_error, kit_info, kit_println, kit_progress, KitError};
use kit_messages::{msg, MESSAGES};
use kit_web::status::{ERROR_INDICATOR, SUCCESS_INDICATOR};
use kit_web::{StatusCategory, StatusChecker, StatusReport};
use std::time::Duration;

const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];

pub fn handle_status(settings: &WebSettings, urls: Vec<String>, json: bool) -> CliResult<()> {
    let checker = StatusChecker::new(
        Duration::from_secs(settings.timeout_secs),
        &settings.user_agent,
        settings.max_redirects,
    )?;

    match urls.as_slice() {
        [] => interactive(&checker),
        [url] => {
            let report = checker.check(url)?;
            if json {
                kit_println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
            Ok(())
        }
        _ => batch(&checker, &urls, Duration::from_millis(settings.batch_delay_ms), json),
    }
}

fn interactive(checker: &StatusChecker) -> CliResult<()> {
    kit_info!("{}", MESSAGES.web.interactive_intro);
    loop {
        let input = prompt::ask_line(MESSAGES.web.url_prompt)?;
        if input.is_empty() {
            continue;
        }
        if QUIT_WORDS.contains(&input.to_lowercase().as_str()) {
            kit_println!("{}", MESSAGES.common.goodbye);
            return Ok(());
        }
        match checker.check(&input) {
            Ok(report) => print_report(&report),
            Err(e) => kit_error!("{}", msg!(MESSAGES.common.error_generic, error = e.to_string())),
        }
    }
}

fn batch(checker: &StatusChecker, urls: &[String], delay: Duration, json: bool) -> CliResult<()> {
    let total = urls.len();
    let report = checker.check_many_with(urls, delay, |index, url, outcome| {
        if json {
            return;
        }
        kit_progress!(
            "{}",
            msg!(
                MESSAGES.web.batch_checking,
                index = index.to_string(),
                total = total.to_string(),
                url = url
            )
        );
        match outcome {
            Ok(report) => print_report(report),
            Err(error) => kit_println!(
                "{} {}",
                ERROR_INDICATOR.red(),
                msg!(MESSAGES.web.check_failed, url = url, error = error.as_str())
            ),
        }
    });

    if json {
        kit_println!("{}", serde_json::to_string_pretty(&report)?);
    }
    let summary = msg!(
        MESSAGES.web.batch_summary,
        successful = report.successful().to_string(),
        total = report.total().to_string()
    );
    if report.successful() == 0 {
        return Err(KitError::Network(summary).into());
    }
    kit_info!("{}", summary);
    Ok(())
}

fn colored_status(category: StatusCategory, text: String) -> colored::ColoredString {
    match category {
        StatusCategory::Success => text.green().bold(),
        StatusCategory::Informational | StatusCategory::Redirection => text.yellow().bold(),
        StatusCategory::ClientError | StatusCategory::ServerError => text.red().bold(),
        StatusCategory::Unknown => text.normal(),
    }
}

fn print_report(report: &StatusReport) {
    let headline = format!(
        "{} {} {} ({})",
        report.category.indicator(),
        report.status_code,
        report.category.label(),
        report.category.description()
    );
    kit_println!("{}", report.url.bold());
    kit_println!("  {}", colored_status(report.category, headline));
    kit_println!(
        "  {}",
        msg!(
            MESSAGES.web.response_time,
            seconds = format!("{:.3}", report.response_time)
        )
    );

    kit_println!("  {}", MESSAGES.web.server_info_header.bold());
    for (label, value) in report.server_info.rows() {
        kit_println!("    {:<16} {}", label, value);
    }

    kit_println!(
        "  {}",
        msg!(
            MESSAGES.web.security_header,
            present = report.security_headers.present().to_string(),
            total = report.security_headers.total().to_string()
        )
        .bold()
    );
    for (name, present) in &report.security_headers.headers {
        let mark = if *present {
            SUCCESS_INDICATOR.green()
        } else {
            ERROR_INDICATOR.red()
        };
        kit_println!("    {} {}", mark, name);
    }
}
