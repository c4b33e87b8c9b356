//! Name all 50 US states before the clock runs out.

use kit_core::error::{KitError, Result};
use kit_core::file_system::ensure_parent_dir;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

pub const US_STATES: [&str; 50] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

const EXIT_WORD: &str = "Exit";

/// Capitalise the first letter of every word, lowercase the rest.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;
    for ch in input.trim().chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}

#[derive(Debug, Deserialize)]
struct StateRow {
    state: String,
}

/// Read state names from a CSV with a `state` column.
///
/// Names are title-cased the same way guesses are, and repeated or blank
/// rows are dropped, so every listed state can actually be named.
pub fn load_states_csv(path: &Path) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut states: Vec<String> = Vec::new();
    for row in reader.deserialize::<StateRow>() {
        let name = title_case(&row?.state);
        if !name.is_empty() && !states.contains(&name) {
            states.push(name);
        }
    }
    if states.is_empty() {
        return Err(KitError::Validation(format!(
            "{} lists no states.",
            path.display()
        )));
    }
    Ok(states)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    /// Newly named; carries the canonical spelling
    Correct(String),
    AlreadyGuessed(String),
    Unknown(String),
    Exit,
}

pub struct StatesGame {
    states: Vec<String>,
    guessed: Vec<String>,
    started: Instant,
    limit: Duration,
}

impl StatesGame {
    pub fn new(states: Vec<String>, limit: Duration) -> Self {
        Self::started_at(states, limit, Instant::now())
    }

    pub fn started_at(states: Vec<String>, limit: Duration, started: Instant) -> Self {
        Self {
            states,
            guessed: Vec::new(),
            started,
            limit,
        }
    }

    pub fn with_us_states(limit: Duration) -> Self {
        Self::new(US_STATES.iter().map(|s| s.to_string()).collect(), limit)
    }

    pub fn guess(&mut self, input: &str) -> Guess {
        let answer = title_case(input);
        if answer == EXIT_WORD {
            return Guess::Exit;
        }
        if self.guessed.contains(&answer) {
            return Guess::AlreadyGuessed(answer);
        }
        if self.states.contains(&answer) {
            self.guessed.push(answer.clone());
            Guess::Correct(answer)
        } else {
            Guess::Unknown(answer)
        }
    }

    pub fn guessed_count(&self) -> usize {
        self.guessed.len()
    }

    pub fn total(&self) -> usize {
        self.states.len()
    }

    pub fn is_complete(&self) -> bool {
        self.guessed.len() == self.states.len()
    }

    /// Time left at `now`, zero once the limit has passed.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.limit
            .saturating_sub(now.saturating_duration_since(self.started))
    }

    /// Less than a second left counts as out of time.
    pub fn is_out_of_time(&self, now: Instant) -> bool {
        self.remaining(now) < Duration::from_secs(1)
    }

    /// States not yet named, in list order.
    pub fn missing(&self) -> Vec<&str> {
        self.states
            .iter()
            .filter(|s| !self.guessed.contains(*s))
            .map(String::as_str)
            .collect()
    }

    /// Write the missing states one per line; returns how many.
    pub fn write_missing(&self, path: &Path) -> Result<usize> {
        let missing = self.missing();
        let mut content = missing.join("\n");
        if !content.is_empty() {
            content.push('\n');
        }
        ensure_parent_dir(path)?;
        fs::write(path, content)?;
        Ok(missing.len())
    }
}

/// `MM:SS`
pub fn format_clock(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn game() -> StatesGame {
        StatesGame::with_us_states(Duration::from_secs(300))
    }

    #[test]
    fn title_case_matches_state_names() {
        assert_eq!(title_case("new york"), "New York");
        assert_eq!(title_case("  wEST virginia "), "West Virginia");
        assert_eq!(title_case("exit"), "Exit");
    }

    #[test]
    fn guesses_are_classified() {
        let mut game = game();
        assert_eq!(game.guess("ohio"), Guess::Correct("Ohio".to_string()));
        assert_eq!(game.guess("OHIO"), Guess::AlreadyGuessed("Ohio".to_string()));
        assert_eq!(game.guess("atlantis"), Guess::Unknown("Atlantis".to_string()));
        assert_eq!(game.guess("EXIT"), Guess::Exit);
        assert_eq!(game.guessed_count(), 1);
    }

    #[test]
    fn missing_keeps_list_order() {
        let mut game = StatesGame::new(
            vec!["Alaska".into(), "Texas".into(), "Utah".into()],
            Duration::from_secs(60),
        );
        game.guess("texas");
        assert_eq!(game.missing(), vec!["Alaska", "Utah"]);
        game.guess("alaska");
        game.guess("utah");
        assert!(game.is_complete());
        assert!(game.missing().is_empty());
    }

    #[test]
    fn clock_counts_down() {
        let start = Instant::now();
        let game = StatesGame::started_at(Vec::new(), Duration::from_secs(300), start);
        assert_eq!(game.remaining(start + Duration::from_secs(100)), Duration::from_secs(200));
        assert_eq!(game.remaining(start + Duration::from_secs(400)), Duration::ZERO);
        assert!(game.is_out_of_time(start + Duration::from_millis(299_500)));
        assert!(!game.is_out_of_time(start + Duration::from_secs(10)));
        assert_eq!(format_clock(Duration::from_secs(299)), "04:59");
    }

    #[test]
    fn missing_states_are_written() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = dir.path().join("missed_states.txt");
        let mut game = game();
        game.guess("Alabama");
        assert_eq!(game.write_missing(&path).expect("should write"), 49);
        let content = fs::read_to_string(&path).expect("should read");
        assert!(content.starts_with("Alaska\n"));
        assert!(!content.contains("Alabama"));
    }

    #[test]
    fn states_csv_overrides_list() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = dir.path().join("50_states.csv");
        fs::write(&path, "state,x,y\nOhio,1,2\nTexas,3,4\n").expect("should write");
        assert_eq!(load_states_csv(&path).expect("should load"), vec!["Ohio", "Texas"]);
    }

    #[test]
    fn states_csv_is_canonicalised() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = dir.path().join("states.csv");
        fs::write(
            &path,
            "state\nDistrict of Columbia\nohio\nOhio\n  \n",
        )
        .expect("should write");
        let states = load_states_csv(&path).expect("should load");
        assert_eq!(states, vec!["District Of Columbia", "Ohio"]);

        let mut game = StatesGame::new(states, Duration::from_secs(60));
        assert!(matches!(game.guess("district of columbia"), Guess::Correct(_)));
        assert!(matches!(game.guess("OHIO"), Guess::Correct(_)));
        assert!(game.is_complete());
    }
}
