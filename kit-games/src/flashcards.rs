//! Vocabulary flash cards with simple spaced repetition.
//!
//! A language pair is a two-column CSV deck plus two progress lists:
//! cards still to learn and cards already learned. New cards are those in
//! neither list.

use indexmap::IndexMap;
use kit_core::error::{KitError, Result};
use kit_core::file_system::{read_json, read_json_or_default, write_json_atomic};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const CONFIGS_FILE: &str = "language_configs.json";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
}

impl Card {
    /// `(shown first, shown after the flip)`
    pub fn sides(&self, reverse: bool) -> (&str, &str) {
        if reverse {
            (&self.back, &self.front)
        } else {
            (&self.front, &self.back)
        }
    }
}

/// The cards of one language pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub front_name: String,
    pub back_name: String,
    pub cards: Vec<Card>,
}

impl Deck {
    /// Read a CSV with exactly two columns; the header names the languages.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            KitError::NotFound(format!("CSV not found at {}: {}", path.display(), e))
        })?;
        let headers = reader.headers()?.clone();
        if headers.len() != 2 {
            return Err(KitError::validation("CSV must have exactly two columns."));
        }

        let mut cards = Vec::new();
        for record in reader.records() {
            let record = record?;
            if let (Some(front), Some(back)) = (record.get(0), record.get(1)) {
                let (front, back) = (front.trim(), back.trim());
                if !front.is_empty() && !back.is_empty() {
                    cards.push(Card {
                        front: front.to_string(),
                        back: back.to_string(),
                    });
                }
            }
        }
        debug!(path = %path.display(), cards = cards.len(), "loaded deck");

        Ok(Self {
            front_name: headers[0].trim().to_string(),
            back_name: headers[1].trim().to_string(),
            cards,
        })
    }

    /// Same cards, languages renamed.
    pub fn renamed(mut self, front: &str, back: &str) -> Self {
        self.front_name = front.to_string();
        self.back_name = back.to_string();
        self
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairConfig {
    pub front: String,
    pub back: String,
    pub csv_path: PathBuf,
}

/// Registered language pairs, persisted in `language_configs.json`.
pub struct LanguagePairs {
    dir: PathBuf,
    pairs: IndexMap<String, PairConfig>,
}

impl LanguagePairs {
    /// Load the registry; pairs whose CSV has disappeared are left out.
    pub fn load(dir: &Path) -> Result<Self> {
        let stored: IndexMap<String, PairConfig> =
            match read_json_or_default(&dir.join(CONFIGS_FILE)) {
                Ok(pairs) => pairs,
                Err(KitError::Serialization(e)) => {
                    warn!(error = %e, "ignoring unreadable language configs");
                    IndexMap::new()
                }
                Err(e) => return Err(e),
            };
        let pairs = stored
            .into_iter()
            .filter(|(name, cfg)| {
                let present = cfg.csv_path.is_file();
                if !present {
                    warn!(pair = %name, path = %cfg.csv_path.display(), "deck CSV missing, skipping pair");
                }
                present
            })
            .collect();
        Ok(Self {
            dir: dir.to_path_buf(),
            pairs,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn names(&self) -> Vec<&str> {
        self.pairs.keys().map(String::as_str).collect()
    }

    pub fn get(&self, name: &str) -> Option<&PairConfig> {
        self.pairs.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Register `<front>-<back>` for a CSV deck, replacing an existing pair
    /// of that name. Returns the pair name and whether it replaced one.
    pub fn add_pair(&mut self, front: &str, back: &str, csv_path: &Path) -> Result<(String, bool)> {
        let (front, back) = (front.trim(), back.trim());
        if front.is_empty() || back.is_empty() {
            return Err(KitError::validation(
                "Please enter both front and back language names.",
            ));
        }
        Deck::from_csv(csv_path)?;

        let name = format!("{front}-{back}");
        let config = PairConfig {
            front: front.to_string(),
            back: back.to_string(),
            csv_path: csv_path.to_path_buf(),
        };
        let replaced = self.pairs.insert(name.clone(), config).is_some();
        self.save()?;
        if replaced {
            Progress::default().save(&self.dir, &name)?;
        }
        Ok((name, replaced))
    }

    fn save(&self) -> Result<()> {
        write_json_atomic(&self.dir.join(CONFIGS_FILE), &self.pairs)
    }

    /// Load the deck for `name` under the configured language names.
    pub fn deck(&self, name: &str) -> Result<Deck> {
        let config = self
            .get(name)
            .ok_or_else(|| KitError::NotFound(format!("Language pair {name}")))?;
        Ok(Deck::from_csv(&config.csv_path)?.renamed(&config.front, &config.back))
    }
}

/// What the learner has sorted so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Progress {
    pub to_learn: Vec<Card>,
    pub learned: Vec<Card>,
}

fn progress_paths(dir: &Path, pair: &str) -> (PathBuf, PathBuf) {
    (
        dir.join(format!("{pair}_words_to_learn.json")),
        dir.join(format!("{pair}_words_learned.json")),
    )
}

fn read_list(path: &Path) -> Vec<Card> {
    match read_json(path) {
        Ok(cards) => cards,
        Err(KitError::NotFound(_)) => Vec::new(),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "starting list afresh");
            Vec::new()
        }
    }
}

impl Progress {
    /// Load saved lists, dropping cards no longer in `deck`.
    pub fn load(dir: &Path, pair: &str, deck: &Deck) -> Self {
        let (to_learn_path, learned_path) = progress_paths(dir, pair);
        let keep = |cards: Vec<Card>| -> Vec<Card> {
            cards.into_iter().filter(|c| deck.contains(c)).collect()
        };
        Self {
            to_learn: keep(read_list(&to_learn_path)),
            learned: keep(read_list(&learned_path)),
        }
    }

    pub fn save(&self, dir: &Path, pair: &str) -> Result<()> {
        let (to_learn_path, learned_path) = progress_paths(dir, pair);
        write_json_atomic(&to_learn_path, &self.to_learn)?;
        write_json_atomic(&learned_path, &self.learned)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    New,
    Unfamiliar,
    Familiar,
}

impl Mode {
    fn slot(self) -> usize {
        match self {
            Mode::New => 0,
            Mode::Unfamiliar => 1,
            Mode::Familiar => 2,
        }
    }
}

/// Knobs for card selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSettings {
    /// How many recent picks random selection avoids
    pub recent_window: usize,
    /// Up to this many candidates, cards are walked in order
    pub sequential_limit: usize,
    /// Congratulate every N cards learned this session
    pub milestone_every: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            recent_window: 5,
            sequential_limit: 50,
            milestone_every: 20,
        }
    }
}

/// A study session over one language pair.
pub struct Session {
    deck: Deck,
    progress: Progress,
    mode: Mode,
    settings: SessionSettings,
    positions: [usize; 3],
    recent: [VecDeque<Card>; 3],
    learned_this_session: usize,
    store: Option<(PathBuf, String)>,
}

impl Session {
    /// Session that keeps its progress in memory only.
    pub fn new(deck: Deck, progress: Progress, settings: SessionSettings) -> Self {
        Self {
            deck,
            progress,
            mode: Mode::New,
            settings,
            positions: [0; 3],
            recent: Default::default(),
            learned_this_session: 0,
            store: None,
        }
    }

    /// Load the pair's progress from `dir` and save it after every answer.
    pub fn open(dir: &Path, pair: &str, deck: Deck, settings: SessionSettings) -> Self {
        let progress = Progress::load(dir, pair, &deck);
        let mut session = Self::new(deck, progress, settings);
        session.store = Some((dir.to_path_buf(), pair.to_string()));
        session
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn learned_this_session(&self) -> usize {
        self.learned_this_session
    }

    /// Switch modes, starting each list from the top. A review mode with
    /// nothing to review falls back to `New`; the mode in effect is returned.
    pub fn set_mode(&mut self, mode: Mode) -> Mode {
        let empty = match mode {
            Mode::New => false,
            Mode::Unfamiliar => self.progress.to_learn.is_empty(),
            Mode::Familiar => self.progress.learned.is_empty(),
        };
        self.mode = if empty { Mode::New } else { mode };
        self.positions = [0; 3];
        self.recent.iter_mut().for_each(VecDeque::clear);
        self.mode
    }

    fn new_cards(&self) -> Vec<Card> {
        let fresh: Vec<Card> = self
            .deck
            .cards
            .iter()
            .filter(|c| !self.progress.to_learn.contains(c) && !self.progress.learned.contains(c))
            .cloned()
            .collect();
        if fresh.is_empty() {
            self.deck.cards.clone()
        } else {
            fresh
        }
    }

    /// Pick the next card for the current mode.
    pub fn next_card<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Card> {
        let candidates = match self.mode {
            Mode::New => self.new_cards(),
            Mode::Unfamiliar => self.progress.to_learn.clone(),
            Mode::Familiar => self.progress.learned.clone(),
        };
        if candidates.is_empty() {
            return None;
        }

        let slot = self.mode.slot();
        if candidates.len() <= self.settings.sequential_limit {
            let card = candidates[self.positions[slot] % candidates.len()].clone();
            self.positions[slot] = (self.positions[slot] + 1) % candidates.len();
            return Some(card);
        }

        let recent = &mut self.recent[slot];
        let mut available: Vec<&Card> = candidates.iter().filter(|c| !recent.contains(*c)).collect();
        if available.is_empty() {
            recent.clear();
            available = candidates.iter().collect();
        }
        let card = (*available.choose(rng)?).clone();
        recent.push_back(card.clone());
        while recent.len() > self.settings.recent_window {
            recent.pop_front();
        }
        Some(card)
    }

    fn persist(&self) -> Result<()> {
        match &self.store {
            Some((dir, pair)) => self.progress.save(dir, pair),
            None => Ok(()),
        }
    }

    /// The learner knew `card`. Returns the session count when it hits a
    /// milestone.
    pub fn mark_known(&mut self, card: &Card) -> Result<Option<usize>> {
        let mut milestone = None;
        if !self.progress.learned.contains(card) {
            self.progress.learned.push(card.clone());
            self.learned_this_session += 1;
            if self.settings.milestone_every > 0
                && self.learned_this_session % self.settings.milestone_every == 0
            {
                milestone = Some(self.learned_this_session);
            }
        }
        self.progress.to_learn.retain(|c| c != card);
        self.persist()?;
        Ok(milestone)
    }

    /// The learner did not know `card`.
    pub fn mark_unknown(&mut self, card: &Card) -> Result<()> {
        if !self.progress.to_learn.contains(card) {
            self.progress.to_learn.push(card.clone());
        }
        if self.mode == Mode::Familiar {
            self.progress.learned.retain(|c| c != card);
        }
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::TempDir;

    fn card(i: usize) -> Card {
        Card {
            front: format!("f{i}"),
            back: format!("b{i}"),
        }
    }

    fn deck(n: usize) -> Deck {
        Deck {
            front_name: "Slovenian".to_string(),
            back_name: "English".to_string(),
            cards: (0..n).map(card).collect(),
        }
    }

    fn write_csv(dir: &Path) -> PathBuf {
        let path = dir.join("words.csv");
        fs::write(&path, "Slovenian,English\nmiza,table\nstol,chair\nokno,window\n")
            .expect("should write csv");
        path
    }

    #[test]
    fn deck_reads_two_column_csv() {
        let dir = TempDir::new().expect("should create temp dir");
        let deck = Deck::from_csv(&write_csv(dir.path())).expect("should load");
        assert_eq!(deck.front_name, "Slovenian");
        assert_eq!(deck.cards.len(), 3);
        assert_eq!(deck.cards[1].sides(true), ("chair", "stol"));
    }

    #[test]
    fn deck_rejects_other_shapes() {
        let dir = TempDir::new().expect("should create temp dir");
        let path = dir.path().join("three.csv");
        fs::write(&path, "a,b,c\n1,2,3\n").expect("should write");
        assert!(Deck::from_csv(&path).unwrap_err().is_validation());
        assert!(Deck::from_csv(&dir.path().join("none.csv")).is_err());
    }

    #[test]
    fn small_sets_are_walked_in_order() {
        let mut session = Session::new(deck(3), Progress::default(), SessionSettings::default());
        let mut rng = StdRng::seed_from_u64(0);
        let picks: Vec<Card> = (0..4).filter_map(|_| session.next_card(&mut rng)).collect();
        assert_eq!(picks, vec![card(0), card(1), card(2), card(0)]);
    }

    #[test]
    fn large_sets_avoid_recent_picks() {
        let settings = SessionSettings {
            recent_window: 5,
            sequential_limit: 3,
            milestone_every: 20,
        };
        let mut session = Session::new(deck(8), Progress::default(), settings);
        let mut rng = StdRng::seed_from_u64(11);
        let picks: Vec<Card> = (0..6).filter_map(|_| session.next_card(&mut rng)).collect();
        for window in picks.windows(6) {
            let unique: HashSet<&Card> = window.iter().collect();
            assert_eq!(unique.len(), 6);
        }
    }

    #[test]
    fn recent_window_resets_when_exhausted() {
        let settings = SessionSettings {
            recent_window: 10,
            sequential_limit: 1,
            milestone_every: 20,
        };
        let mut session = Session::new(deck(2), Progress::default(), settings);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..10 {
            assert!(session.next_card(&mut rng).is_some());
        }
    }

    #[test]
    fn new_mode_skips_sorted_cards_until_none_left() {
        let progress = Progress {
            to_learn: vec![card(0)],
            learned: vec![card(1)],
        };
        let mut session = Session::new(deck(3), progress, SessionSettings::default());
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(session.next_card(&mut rng), Some(card(2)));
        assert_eq!(session.next_card(&mut rng), Some(card(2)));

        session.mark_known(&card(2)).expect("should mark");
        session.mark_known(&card(0)).expect("should mark");
        // Everything sorted: fall back to the whole deck.
        assert!(session.next_card(&mut rng).is_some());
    }

    #[test]
    fn marking_moves_cards_between_lists() {
        let mut session = Session::new(deck(3), Progress::default(), SessionSettings::default());
        session.mark_unknown(&card(0)).expect("should mark");
        session.mark_unknown(&card(0)).expect("should mark");
        assert_eq!(session.progress().to_learn, vec![card(0)]);

        session.mark_known(&card(0)).expect("should mark");
        assert!(session.progress().to_learn.is_empty());
        assert_eq!(session.progress().learned, vec![card(0)]);
    }

    #[test]
    fn forgetting_in_familiar_mode_demotes() {
        let progress = Progress {
            to_learn: vec![],
            learned: vec![card(0), card(1)],
        };
        let mut session = Session::new(deck(3), progress, SessionSettings::default());
        assert_eq!(session.set_mode(Mode::Familiar), Mode::Familiar);
        let mut rng = StdRng::seed_from_u64(0);
        let first = session.next_card(&mut rng).expect("should pick");
        assert_eq!(first, card(0));

        session.mark_unknown(&first).expect("should mark");
        assert_eq!(session.progress().learned, vec![card(1)]);
        assert_eq!(session.progress().to_learn, vec![card(0)]);
    }

    #[test]
    fn empty_review_mode_falls_back_to_new() {
        let mut session = Session::new(deck(3), Progress::default(), SessionSettings::default());
        assert_eq!(session.set_mode(Mode::Unfamiliar), Mode::New);
        assert_eq!(session.set_mode(Mode::Familiar), Mode::New);
    }

    #[test]
    fn milestones_fire_every_n() {
        let settings = SessionSettings {
            milestone_every: 2,
            ..SessionSettings::default()
        };
        let mut session = Session::new(deck(5), Progress::default(), settings);
        assert_eq!(session.mark_known(&card(0)).expect("should mark"), None);
        assert_eq!(session.mark_known(&card(0)).expect("should mark"), None);
        assert_eq!(session.mark_known(&card(1)).expect("should mark"), Some(2));
        assert_eq!(session.learned_this_session(), 2);
    }

    #[test]
    fn progress_persists_and_drops_stale_cards() {
        let dir = TempDir::new().expect("should create temp dir");
        let mut session = Session::open(dir.path(), "sl-en", deck(3), SessionSettings::default());
        session.mark_known(&card(1)).expect("should mark");
        session.mark_unknown(&card(2)).expect("should mark");
        assert!(dir.path().join("sl-en_words_learned.json").is_file());

        let reloaded = Progress::load(dir.path(), "sl-en", &deck(3));
        assert_eq!(reloaded.learned, vec![card(1)]);
        assert_eq!(reloaded.to_learn, vec![card(2)]);

        let shrunk = Progress::load(dir.path(), "sl-en", &deck(2));
        assert!(shrunk.to_learn.is_empty());
        assert_eq!(shrunk.learned, vec![card(1)]);
    }

    #[test]
    fn pairs_register_and_reload() {
        let dir = TempDir::new().expect("should create temp dir");
        let csv = write_csv(dir.path());
        let mut pairs = LanguagePairs::load(dir.path()).expect("should load");
        assert!(pairs.is_empty());

        let (name, replaced) = pairs.add_pair("Slovenian", "English", &csv).expect("should add");
        assert_eq!(name, "Slovenian-English");
        assert!(!replaced);
        let (_, replaced) = pairs.add_pair("Slovenian", "English", &csv).expect("should add");
        assert!(replaced);

        let reloaded = LanguagePairs::load(dir.path()).expect("should reload");
        assert_eq!(reloaded.names(), vec!["Slovenian-English"]);
        let deck = reloaded.deck("Slovenian-English").expect("should load deck");
        assert_eq!(deck.cards.len(), 3);
        assert!(reloaded.deck("Nope").is_err());
    }

    #[test]
    fn pairs_with_missing_csv_are_skipped() {
        let dir = TempDir::new().expect("should create temp dir");
        let csv = write_csv(dir.path());
        let mut pairs = LanguagePairs::load(dir.path()).expect("should load");
        pairs.add_pair("A", "B", &csv).expect("should add");
        fs::remove_file(&csv).expect("should remove");
        assert!(LanguagePairs::load(dir.path()).expect("should load").is_empty());
    }

    #[test]
    fn adding_pair_needs_both_names() {
        let dir = TempDir::new().expect("should create temp dir");
        let csv = write_csv(dir.path());
        let mut pairs = LanguagePairs::load(dir.path()).expect("should load");
        assert!(pairs.add_pair(" ", "English", &csv).is_err());
    }
}
