// CLI argument parsing and definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "kit")]
#[command(about = "A toolbox of small everyday command-line tools")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a custom configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub debug: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum MorseAction {
    /// Convert text to Morse code
    Encode {
        /// Text to encode (words may be given as separate arguments)
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Convert Morse code to text
    Decode {
        /// Morse code; letters separated by one space, words by ` / ` or more spaces
        code: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DistanceUnit {
    /// Convert miles to kilometres
    Km,
    /// Convert kilometres to miles
    Miles,
}

#[derive(Debug, Clone, Subcommand)]
pub enum PassgenAction {
    /// Rate the strength of a password
    Check {
        /// Password to rate
        password: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum VaultSubcommand {
    /// Create a new vault protected by a master password
    Init,
    /// Store a password
    Add {
        /// Website or service name
        website: String,
        /// Email or username
        email: String,
        /// Password (prompted when omitted)
        password: Option<String>,
        /// Generate a password instead of entering one
        #[arg(short, long, conflicts_with = "password")]
        generate: bool,
        /// Replace an existing entry for the same website
        #[arg(short, long)]
        force: bool,
    },
    /// List stored entries with masked passwords
    List,
    /// Find entries by website or email
    Search {
        /// Case-insensitive search term
        term: String,
    },
    /// Show one entry with its password
    Show {
        /// Entry number as printed by `list`
        index: usize,
    },
    /// Change fields of an entry
    Edit {
        /// Entry number as printed by `list`
        index: usize,
        #[arg(long)]
        website: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long, conflicts_with = "generate")]
        password: Option<String>,
        /// Replace the password with a generated one
        #[arg(short, long)]
        generate: bool,
    },
    /// Delete an entry
    Remove {
        /// Entry number as printed by `list`
        index: usize,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Write all entries, decrypted, to a JSON file
    Export {
        /// Destination file
        path: PathBuf,
    },
    /// Merge entries from a plaintext JSON file
    Import {
        /// Source file
        path: PathBuf,
    },
    /// Change the master password and re-encrypt every entry
    Passwd,
    /// Generate a password with the vault's generator settings
    Generate {
        /// Override the configured length
        #[arg(short, long)]
        length: Option<usize>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StudyMode {
    /// Cards not yet sorted into either list
    New,
    /// Cards marked as unknown
    Unfamiliar,
    /// Cards already learned
    Familiar,
}

#[derive(Debug, Clone, Subcommand)]
pub enum FlashcardSubcommand {
    /// List configured language pairs
    Pairs,
    /// Register a two-column CSV as a language pair
    Add {
        /// Name of the language on the front of the cards
        front: String,
        /// Name of the language on the back of the cards
        back: String,
        /// CSV file with one card per row
        csv: PathBuf,
    },
    /// Study a language pair
    Study {
        /// Pair name, e.g. "French-English" (chosen interactively when omitted)
        pair: Option<String>,
        #[arg(short, long, value_enum, default_value_t = StudyMode::New)]
        mode: StudyMode,
        /// Show the back of the card first
        #[arg(short, long)]
        reverse: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum PomodoroSubcommand {
    /// Run work and break sessions
    Start {
        /// Stop after this many work sessions
        #[arg(long)]
        cycles: Option<u32>,
    },
    /// Show today's focus statistics
    Stats,
    /// Clear today's statistics
    Reset,
}

#[derive(Debug, Clone, Subcommand)]
pub enum ConfigSubcommand {
    /// Print the effective configuration
    Show,
    /// Print the configuration file location
    Path,
    /// Write a configuration file with all defaults
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Talk to a simple phrase-matching chat bot
    Chat {
        /// Answer a single message and exit
        #[arg(long)]
        once: Option<String>,
    },

    /// Encode or decode Morse code (interactive menu without an action)
    Morse {
        #[command(subcommand)]
        action: Option<MorseAction>,
    },

    /// Count the most frequent words in a text
    Words {
        /// Text to analyse
        #[arg(short, long, conflicts_with = "file")]
        text: Option<String>,
        /// File to analyse
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Show only the top N words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Report statistics for a text file
    Analyze {
        /// File to analyse
        file: PathBuf,
        /// Include averages and the most common words
        #[arg(long)]
        detailed: bool,
        /// Write the report to a file
        #[arg(long)]
        save: Option<PathBuf>,
        /// Print the beginning of the text
        #[arg(long)]
        preview: bool,
        /// With --preview, print the whole text
        #[arg(long, requires = "preview")]
        full: bool,
    },

    /// Convert between currencies
    Currency {
        /// Amount to convert
        amount: Option<String>,
        /// Currency code to convert from
        from: Option<String>,
        /// Currency code to convert to
        to: Option<String>,
        /// Use the local rates file only
        #[arg(long)]
        offline: bool,
        /// Rates file to use instead of the configured one
        #[arg(long)]
        rates: Option<PathBuf>,
        /// List supported currency codes
        #[arg(long)]
        list: bool,
    },

    /// Convert between miles and kilometres
    Distance {
        /// Distance to convert
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Target unit
        #[arg(long, value_enum, default_value_t = DistanceUnit::Km)]
        to: DistanceUnit,
    },

    /// Split an expense between people by percentage
    Split {
        /// Amount to split
        #[arg(short, long)]
        total: Option<f64>,
        /// One percentage per person, in order
        #[arg(short, long = "percent", num_args = 1..)]
        percents: Vec<f64>,
        /// Split evenly between this many people
        #[arg(long, conflicts_with = "percents")]
        even: Option<usize>,
        /// Currency symbol for the output
        #[arg(long, default_value = "€")]
        currency: String,
    },

    /// Summarise monthly and yearly income after tax
    Finance {
        /// Monthly income
        #[arg(long)]
        income: Option<f64>,
        /// Tax rate in percent
        #[arg(long)]
        tax: Option<f64>,
        /// Monthly expenses
        #[arg(long)]
        expenses: Option<f64>,
        /// Currency symbol for the output
        #[arg(long, default_value = "$")]
        currency: String,
    },

    /// Generate random passwords
    Passgen {
        #[command(subcommand)]
        action: Option<PassgenAction>,
        /// Password length
        #[arg(short, long)]
        length: Option<usize>,
        /// Number of passwords
        #[arg(short = 'n', long)]
        count: Option<usize>,
        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,
        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,
    },

    /// Encrypted password manager
    Vault {
        #[command(subcommand)]
        command: VaultSubcommand,
        /// Vault file to use instead of the configured one
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Play blackjack against the computer
    Blackjack,

    /// Answer true/false questions
    Quiz {
        /// JSON question bank to use instead of the built-in one
        #[arg(long)]
        questions: Option<PathBuf>,
    },

    /// Name all 50 US states against the clock
    States {
        /// Time limit in seconds
        #[arg(long)]
        time_limit: Option<u64>,
        /// Where to write the states you missed
        #[arg(long)]
        missed: Option<PathBuf>,
        /// CSV with a `state` column to use instead of the built-in list
        #[arg(long)]
        states_csv: Option<PathBuf>,
    },

    /// Learn vocabulary with flash cards
    Flashcards {
        #[command(subcommand)]
        command: FlashcardSubcommand,
    },

    /// Check whether websites are up (interactive without URLs)
    Status {
        /// URLs to check
        urls: Vec<String>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Pomodoro focus timer
    Pomodoro {
        #[command(subcommand)]
        command: PomodoroSubcommand,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigSubcommand,
    },

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for (bash, zsh, fish, powershell)
        shell: String,
    },
}

impl Command {
    /// Name used for the `tool` span and log tags.
    pub fn tool_name(&self) -> &'static str {
        match self {
            Command::Chat { .. } => "chat",
            Command::Morse { .. } => "morse",
            Command::Words { .. } => "words",
            Command::Analyze { .. } => "analyze",
            Command::Currency { .. } => "currency",
            Command::Distance { .. } => "distance",
            Command::Split { .. } => "split",
            Command::Finance { .. } => "finance",
            Command::Passgen { .. } => "passgen",
            Command::Vault { .. } => "vault",
            Command::Blackjack => "blackjack",
            Command::Quiz { .. } => "quiz",
            Command::States { .. } => "states",
            Command::Flashcards { .. } => "flashcards",
            Command::Status { .. } => "status",
            Command::Pomodoro { .. } => "pomodoro",
            Command::Config { .. } => "config",
            Command::Completion { .. } => "completion",
        }
    }
}
