//! Pomodoro timer messages

pub struct TimerMessages {
    pub break_done: &'static str,
    pub phase_started: &'static str,
    pub started: &'static str,
    pub work_done: &'static str,

    pub stats_entry: &'static str,
    pub stats_focused: &'static str,
    pub stats_header: &'static str,
    pub stats_reset: &'static str,
    pub stats_sessions: &'static str,
}

pub const TIMER_MESSAGES: TimerMessages = TimerMessages {
    break_done: "{phase} over. Back to work!",
    phase_started: "{phase} started",
    started: "Pomodoro started. Press Ctrl-C to stop.",
    work_done: "Work session done {checkmarks} ({count} today)",

    stats_entry: "{time}  work  {minutes} min",
    stats_focused: "Focused time today: {hours}h {minutes}m",
    stats_header: "Today's statistics",
    stats_reset: "Today's statistics were reset.",
    stats_sessions: "Sessions today: {count}",
};
