//! Pomodoro phases, the rep counter and persisted daily statistics.

use chrono::{DateTime, Local, NaiveDate};
use kit_core::error::Result;
use kit_core::file_system::{read_json_or_default, write_json_atomic};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Work sessions shown per set of checkmarks.
pub const SET_SIZE: u32 = 4;
/// A long break follows every eighth rep.
const LONG_BREAK_EVERY: u32 = SET_SIZE * 2;

const QUOTES: [&str; 10] = [
    "Focus is the key to success!",
    "Every expert was once a beginner.",
    "Progress, not perfection.",
    "One pomodoro at a time.",
    "You're doing great!",
    "Stay focused, stay strong!",
    "Small steps lead to big changes.",
    "Consistency beats perfection.",
    "Your future self will thank you.",
    "Focus on the process, not just the outcome.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Work,
    ShortBreak,
    LongBreak,
}

impl Phase {
    pub fn is_work(self) -> bool {
        self == Phase::Work
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Work => "Work",
            Phase::ShortBreak => "Break",
            Phase::LongBreak => "Long Break",
        })
    }
}

/// Phase lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    pub work: Duration,
    pub short_break: Duration,
    pub long_break: Duration,
}

impl Durations {
    pub fn from_minutes(work: u64, short_break: u64, long_break: u64) -> Self {
        Self {
            work: Duration::from_secs(work * 60),
            short_break: Duration::from_secs(short_break * 60),
            long_break: Duration::from_secs(long_break * 60),
        }
    }

    pub fn of(&self, phase: Phase) -> Duration {
        match phase {
            Phase::Work => self.work,
            Phase::ShortBreak => self.short_break,
            Phase::LongBreak => self.long_break,
        }
    }
}

/// The rep counter.
///
/// Odd reps are work, every eighth rep is a long break and the rest are
/// short breaks. Finishing a long break starts a fresh set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cycle {
    reps: u32,
    work_done: u32,
}

impl Cycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }

    /// Advance to the next rep and return its phase.
    pub fn start_next(&mut self) -> Phase {
        self.reps += 1;
        self.phase()
    }

    /// Phase of the current rep. Only meaningful after `start_next`.
    pub fn phase(&self) -> Phase {
        if self.reps % 2 == 1 {
            Phase::Work
        } else if self.reps % LONG_BREAK_EVERY != 0 {
            Phase::ShortBreak
        } else {
            Phase::LongBreak
        }
    }

    /// Mark the current rep finished.
    pub fn complete(&mut self) {
        match self.phase() {
            Phase::Work => self.work_done += 1,
            Phase::LongBreak => {
                self.reps = 0;
                self.work_done = 0;
            }
            Phase::ShortBreak => {}
        }
    }

    /// `✓` per finished work session in this set, `○` for the rest.
    pub fn checkmarks(&self) -> String {
        let done = self.work_done.min(SET_SIZE);
        (0..SET_SIZE)
            .map(|i| if i < done { '✓' } else { '○' })
            .collect()
    }
}

/// One finished work session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(rename = "type")]
    pub kind: String,
    /// Minutes
    pub duration: u64,
    pub timestamp: DateTime<Local>,
}

/// Today's totals, persisted as JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyStats {
    #[serde(default)]
    pub last_date: Option<NaiveDate>,
    #[serde(default)]
    pub session_count_today: u32,
    /// Seconds
    #[serde(default)]
    pub total_focused_time_today: u64,
    #[serde(default)]
    pub session_history: Vec<SessionRecord>,
}

impl DailyStats {
    /// Load the stats file; counters from another day are dropped.
    pub fn load(path: &Path, today: NaiveDate) -> Result<Self> {
        let mut stats: DailyStats = read_json_or_default(path)?;
        if stats.last_date != Some(today) {
            if stats.last_date.is_some() {
                debug!(last = ?stats.last_date, %today, "New day, resetting pomodoro stats");
            }
            stats.reset(today);
        }
        Ok(stats)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_json_atomic(path, self)
    }

    pub fn reset(&mut self, today: NaiveDate) {
        *self = DailyStats {
            last_date: Some(today),
            ..DailyStats::default()
        };
    }

    /// Count a finished work session of `minutes`.
    pub fn record_work(&mut self, minutes: u64, at: DateTime<Local>) {
        let day = at.date_naive();
        if self.last_date != Some(day) {
            self.reset(day);
        }
        self.session_count_today += 1;
        self.total_focused_time_today += minutes * 60;
        self.session_history.push(SessionRecord {
            kind: "work".to_string(),
            duration: minutes,
            timestamp: at,
        });
        info!(sessions = self.session_count_today, "Work session recorded");
    }

    /// `(hours, minutes)` focused today.
    pub fn focused_hours_minutes(&self) -> (u64, u64) {
        let secs = self.total_focused_time_today;
        (secs / 3600, (secs % 3600) / 60)
    }
}

pub fn motivational_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    QUOTES.choose(rng).copied().unwrap_or(QUOTES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(y, m, d, h, 0, 0)
            .single()
            .expect("unambiguous local time")
    }

    #[test]
    fn reps_follow_the_pomodoro_pattern() {
        let mut cycle = Cycle::new();
        let phases: Vec<Phase> = (0..8)
            .map(|_| {
                let phase = cycle.start_next();
                if phase != Phase::LongBreak {
                    cycle.complete();
                }
                phase
            })
            .collect();
        assert_eq!(
            phases,
            vec![
                Phase::Work,
                Phase::ShortBreak,
                Phase::Work,
                Phase::ShortBreak,
                Phase::Work,
                Phase::ShortBreak,
                Phase::Work,
                Phase::LongBreak,
            ]
        );
        assert_eq!(cycle.reps(), 8);
        assert_eq!(cycle.checkmarks(), "✓✓✓✓");

        cycle.complete();
        assert_eq!(cycle.reps(), 0);
        assert_eq!(cycle.checkmarks(), "○○○○");
        assert_eq!(cycle.start_next(), Phase::Work);
    }

    #[test]
    fn checkmarks_count_finished_work_only() {
        let mut cycle = Cycle::new();
        cycle.start_next();
        assert_eq!(cycle.checkmarks(), "○○○○");
        cycle.complete();
        assert_eq!(cycle.checkmarks(), "✓○○○");
        cycle.start_next();
        cycle.complete();
        assert_eq!(cycle.checkmarks(), "✓○○○");
    }

    #[test]
    fn durations_are_minutes() {
        let d = Durations::from_minutes(25, 5, 30);
        assert_eq!(d.of(Phase::Work), Duration::from_secs(1500));
        assert_eq!(d.of(Phase::ShortBreak), Duration::from_secs(300));
        assert_eq!(d.of(Phase::LongBreak), Duration::from_secs(1800));
    }

    #[test]
    fn work_sessions_accumulate() {
        let mut stats = DailyStats::default();
        stats.record_work(25, at(2026, 3, 2, 9));
        stats.record_work(25, at(2026, 3, 2, 10));
        assert_eq!(stats.session_count_today, 2);
        assert_eq!(stats.total_focused_time_today, 3000);
        assert_eq!(stats.focused_hours_minutes(), (0, 50));
        assert_eq!(stats.session_history[0].kind, "work");
        assert_eq!(stats.last_date, NaiveDate::from_ymd_opt(2026, 3, 2));
    }

    #[test]
    fn stats_reset_on_a_new_day() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = dir.path().join("pomodoro.json");
        let monday = NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid date");
        let tuesday = NaiveDate::from_ymd_opt(2026, 3, 3).expect("valid date");

        let mut stats = DailyStats::load(&path, monday).expect("missing file is empty");
        stats.record_work(25, at(2026, 3, 2, 9));
        stats.save(&path).expect("should save");

        let same_day = DailyStats::load(&path, monday).expect("should load");
        assert_eq!(same_day.session_count_today, 1);
        assert_eq!(same_day.session_history.len(), 1);

        let next_day = DailyStats::load(&path, tuesday).expect("should load");
        assert_eq!(next_day.session_count_today, 0);
        assert_eq!(next_day.total_focused_time_today, 0);
        assert!(next_day.session_history.is_empty());
        assert_eq!(next_day.last_date, Some(tuesday));
    }

    #[test]
    fn saved_file_uses_plain_field_names() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = dir.path().join("pomodoro.json");
        let mut stats = DailyStats::default();
        stats.record_work(10, at(2026, 3, 2, 9));
        stats.save(&path).expect("should save");

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("should read"))
                .expect("valid json");
        assert_eq!(raw["last_date"], "2026-03-02");
        assert_eq!(raw["total_focused_time_today"], 600);
        assert_eq!(raw["session_history"][0]["type"], "work");
        assert_eq!(raw["session_history"][0]["duration"], 10);
    }

    #[test]
    fn quotes_come_from_the_list() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            assert!(QUOTES.contains(&motivational_quote(&mut rng)));
        }
    }
}
