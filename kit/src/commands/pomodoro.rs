//! `kit pomodoro`

use crate::cli::PomodoroSubcommand;
use crate::error::CliResult;
use chrono::Local;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use kit_config::PomodoroSettings;
use kit_core::{kit_info, kit_println, kit_progress, kit_success};
use kit_messages::{msg, MESSAGES};
use kit_timer::{motivational_quote, Cycle, DailyStats, Durations, Phase};
use std::path::Path;
use std::thread;
use std::time::Duration;
use tracing::{debug, info};

const TICK: Duration = Duration::from_secs(1);

pub fn handle_pomodoro(settings: &PomodoroSettings, command: PomodoroSubcommand) -> CliResult<()> {
    let stats_path = settings.stats_path()?;
    match command {
        PomodoroSubcommand::Start { cycles } => run(settings, &stats_path, cycles),
        PomodoroSubcommand::Stats => {
            let stats = DailyStats::load(&stats_path, Local::now().date_naive())?;
            print_stats(&stats);
            Ok(())
        }
        PomodoroSubcommand::Reset => {
            let mut stats = DailyStats::load(&stats_path, Local::now().date_naive())?;
            stats.reset(Local::now().date_naive());
            stats.save(&stats_path)?;
            kit_success!("{}", MESSAGES.timer.stats_reset);
            Ok(())
        }
    }
}

fn run(settings: &PomodoroSettings, stats_path: &Path, cycles: Option<u32>) -> CliResult<()> {
    let durations = Durations::from_minutes(
        settings.work_min,
        settings.short_break_min,
        settings.long_break_min,
    );
    let mut stats = DailyStats::load(stats_path, Local::now().date_naive())?;
    let mut cycle = Cycle::new();
    let mut rng = rand::rng();
    let mut work_sessions = 0;

    kit_info!("{}", MESSAGES.timer.started);
    loop {
        let phase = cycle.start_next();
        let length = durations.of(phase);
        debug!(%phase, secs = length.as_secs(), rep = cycle.reps(), "phase started");
        kit_progress!("{}", msg!(MESSAGES.timer.phase_started, phase = phase.to_string()));
        count_down(phase, length, &cycle.checkmarks());
        cycle.complete();

        if phase.is_work() {
            work_sessions += 1;
            stats.record_work(settings.work_min, Local::now());
            stats.save(stats_path)?;
            kit_success!(
                "{}",
                msg!(
                    MESSAGES.timer.work_done,
                    checkmarks = cycle.checkmarks(),
                    count = stats.session_count_today.to_string()
                )
            );
            kit_println!("{}", motivational_quote(&mut rng).italic());
            if cycles.is_some_and(|limit| work_sessions >= limit) {
                info!(work_sessions, "requested cycles finished");
                break;
            }
        } else {
            kit_success!("{}", msg!(MESSAGES.timer.break_done, phase = phase.to_string()));
        }
    }

    print_stats(&stats);
    Ok(())
}

fn count_down(phase: Phase, length: Duration, checkmarks: &str) {
    let total = length.as_secs();
    let bar = ProgressBar::new(total);
    let color = match phase {
        Phase::Work => "red",
        Phase::ShortBreak => "yellow",
        Phase::LongBreak => "green",
    };
    bar.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{prefix:.bold}} [{{bar:40.{color}/white}}] {{msg}}"
            ))
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    bar.set_prefix(phase.to_string());
    bar.set_message(clock(total));

    for elapsed in 1..=total {
        thread::sleep(TICK);
        bar.set_position(elapsed);
        bar.set_message(format!("{} {}", clock(total - elapsed), checkmarks));
    }
    bar.finish_and_clear();
}

/// `MM:SS`
fn clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn print_stats(stats: &DailyStats) {
    let (hours, minutes) = stats.focused_hours_minutes();
    kit_println!("{}", MESSAGES.timer.stats_header.bold());
    kit_println!(
        "{}",
        msg!(
            MESSAGES.timer.stats_sessions,
            count = stats.session_count_today.to_string()
        )
    );
    kit_println!(
        "{}",
        msg!(
            MESSAGES.timer.stats_focused,
            hours = hours.to_string(),
            minutes = minutes.to_string()
        )
    );
    for record in &stats.session_history {
        kit_println!(
            "  {}",
            msg!(
                MESSAGES.timer.stats_entry,
                time = record.timestamp.format("%H:%M").to_string(),
                minutes = record.duration.to_string()
            )
        );
    }
}
