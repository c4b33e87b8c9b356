use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const MASTER: &str = "correct horse battery staple";

/// Isolated home, data directory and config file for one test
struct KitFixture {
    temp_dir: TempDir,
}

impl KitFixture {
    fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        fs::create_dir_all(temp_dir.path().join("data"))?;
        Ok(Self { temp_dir })
    }

    fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    fn data_dir(&self) -> PathBuf {
        self.root().join("data")
    }

    fn config_path(&self) -> PathBuf {
        self.root().join("config.yaml")
    }

    fn kit(&self) -> Result<Command> {
        let mut cmd = Command::cargo_bin("kit")?;
        cmd.current_dir(self.root())
            .env("HOME", self.root())
            .env("KIT_DATA_DIR", self.data_dir())
            .env("KIT_CONFIG", self.config_path())
            .env("KIT_TEST_MODE", "1")
            .env("NO_COLOR", "1")
            .env_remove("KIT_VAULT_PASSWORD")
            .env_remove("KIT_VAULT_NEW_PASSWORD");
        Ok(cmd)
    }

    fn vault(&self, args: &[&str]) -> Result<Command> {
        let mut cmd = self.kit()?;
        cmd.arg("vault").args(args).env("KIT_VAULT_PASSWORD", MASTER);
        Ok(cmd)
    }

    fn write(&self, name: &str, content: &str) -> Result<PathBuf> {
        let path = self.root().join(name);
        fs::write(&path, content)?;
        Ok(path)
    }
}

#[cfg(test)]
mod text_tools {
    use super::*;

    #[test]
    fn morse_encodes_and_decodes() -> Result<()> {
        let fixture = KitFixture::new()?;
        fixture
            .kit()?
            .args(["morse", "encode", "SOS", "help"])
            .assert()
            .success()
            .stdout("... --- ...   .... . .-.. .--.\n");
        fixture
            .kit()?
            .args(["morse", "decode", "... --- ... / .... .."])
            .assert()
            .success()
            .stdout("SOS HI\n");
        Ok(())
    }

    #[test]
    fn morse_rejects_unknown_symbols() -> Result<()> {
        let fixture = KitFixture::new()?;
        fixture
            .kit()?
            .args(["morse", "decode", "......."])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid Morse code character"));
        Ok(())
    }

    #[test]
    fn words_ranks_by_frequency() -> Result<()> {
        let fixture = KitFixture::new()?;
        fixture
            .kit()?
            .args(["words", "--text", "Apple banana apple cherry", "--limit", "2"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Top 2 words:"))
            .stdout(predicate::str::is_match(r"1\. apple\s+2")?)
            .stdout(predicate::str::contains("cherry").not());
        Ok(())
    }

    #[test]
    fn analyze_reports_and_saves() -> Result<()> {
        let fixture = KitFixture::new()?;
        let input = fixture.write("notes.txt", "One fish. Two fish.\n\nRed fish!\n")?;
        let report = fixture.root().join("report.txt");
        fixture
            .kit()?
            .arg("analyze")
            .arg(&input)
            .arg("--save")
            .arg(&report)
            .assert()
            .success()
            .stdout(predicate::str::contains("BASIC STATISTICS"))
            .stdout(predicate::str::is_match(r"Total words:\s+6")?);
        assert!(fs::read_to_string(&report)?.contains("total_words: 6"));
        Ok(())
    }

    #[test]
    fn chat_answers_once() -> Result<()> {
        let fixture = KitFixture::new()?;
        fixture
            .kit()?
            .args(["chat", "--once", "hello"])
            .assert()
            .success()
            .stdout(predicate::str::is_empty().not());
        Ok(())
    }
}

#[cfg(test)]
mod converters {
    use super::*;

    #[test]
    fn distance_converts_both_ways() -> Result<()> {
        let fixture = KitFixture::new()?;
        fixture
            .kit()?
            .args(["distance", "10"])
            .assert()
            .success()
            .stdout("10.00 miles = 16.09 km\n");
        fixture
            .kit()?
            .args(["distance", "16.09344", "--to", "miles"])
            .assert()
            .success()
            .stdout("16.09 km = 10.00 miles\n");
        Ok(())
    }

    #[test]
    fn split_by_percentages() -> Result<()> {
        let fixture = KitFixture::new()?;
        fixture
            .kit()?
            .args(["split", "--total", "90", "-p", "50", "30", "20"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Person 1 (50.00%): €45.00"))
            .stdout(predicate::str::contains("Person 3 (20.00%): €18.00"));
        Ok(())
    }

    #[test]
    fn split_rejects_bad_sum() -> Result<()> {
        let fixture = KitFixture::new()?;
        fixture
            .kit()?
            .args(["split", "--total", "90", "-p", "50", "30"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("must be 100%"));
        Ok(())
    }

    #[test]
    fn finance_summary() -> Result<()> {
        let fixture = KitFixture::new()?;
        fixture
            .kit()?
            .args([
                "finance",
                "--income",
                "5000",
                "--tax",
                "20",
                "--expenses",
                "1000",
            ])
            .assert()
            .success()
            .stdout(predicate::str::is_match(r"Yearly salary\s+\$60,000\.00")?)
            .stdout(predicate::str::is_match(r"Left after expenses\s+\$3,000\.00")?);
        Ok(())
    }

    #[test]
    fn currency_uses_rates_file_offline() -> Result<()> {
        let fixture = KitFixture::new()?;
        let rates = fixture.write(
            "rates.json",
            r#"{"eur": {"rate": 1.0}, "usd": {"rate": 1.1}}"#,
        )?;
        fixture
            .kit()?
            .args(["currency", "100", "eur", "USD", "--offline", "--rates"])
            .arg(&rates)
            .assert()
            .success()
            .stdout("100.00 EUR = 110.00 USD\n")
            .stderr(predicate::str::contains("Using rates from"));
        fixture
            .kit()?
            .args(["currency", "--offline", "--list", "--rates"])
            .arg(&rates)
            .assert()
            .success()
            .stdout(predicate::str::contains("2 currencies: EUR, USD"));
        Ok(())
    }

    #[test]
    fn currency_rejects_unknown_code() -> Result<()> {
        let fixture = KitFixture::new()?;
        let rates = fixture.write("rates.json", r#"{"eur": {"rate": 1.0}}"#)?;
        fixture
            .kit()?
            .args(["currency", "5", "eur", "xyz", "--offline", "--rates"])
            .arg(&rates)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Currency xyz not supported."));
        Ok(())
    }
}

#[cfg(test)]
mod passwords {
    use super::*;

    #[test]
    fn passgen_prints_requested_count() -> Result<()> {
        let fixture = KitFixture::new()?;
        let output = fixture
            .kit()?
            .args(["passgen", "-n", "3", "-l", "16"])
            .output()?;
        assert!(output.status.success());
        let stdout = String::from_utf8(output.stdout)?;
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.chars().count() == 16));
        Ok(())
    }

    #[test]
    fn passgen_rates_strength() -> Result<()> {
        let fixture = KitFixture::new()?;
        fixture
            .kit()?
            .args(["passgen", "check", "Tr0ub4dor&3xyzQW!"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Very Strong"))
            .stdout(predicate::str::contains("(100/100)"));
        fixture
            .kit()?
            .args(["passgen", "-n", "0"])
            .assert()
            .failure();
        Ok(())
    }

    #[test]
    fn vault_round_trip() -> Result<()> {
        let fixture = KitFixture::new()?;
        fixture
            .vault(&["init"])?
            .assert()
            .success()
            .stderr(predicate::str::contains("Vault created"));
        assert!(fixture.data_dir().join("vault.json").is_file());

        fixture
            .vault(&["add", "GitHub", "me@example.com", "s3cret-Pass"])?
            .assert()
            .success();
        fixture
            .vault(&["add", "Mail", "me@example.com", "other-Pass1"])?
            .assert()
            .success();

        fixture
            .vault(&["list"])?
            .assert()
            .success()
            .stdout(predicate::str::contains("GitHub"))
            .stdout(predicate::str::contains("Mail"))
            .stdout(predicate::str::contains("s3cret-Pass").not());

        fixture
            .vault(&["show", "1"])?
            .assert()
            .success()
            .stdout(predicate::str::contains("s3cret-Pass"));

        fixture
            .vault(&["search", "mail"])?
            .assert()
            .success()
            .stdout(predicate::str::contains("Mail"))
            .stdout(predicate::str::contains("GitHub").not());

        fixture
            .vault(&["remove", "2", "--yes"])?
            .assert()
            .success();
        fixture
            .vault(&["list"])?
            .assert()
            .success()
            .stdout(predicate::str::contains("Mail").not());

        let raw = fs::read_to_string(fixture.data_dir().join("vault.json"))?;
        assert!(!raw.contains("s3cret-Pass"));
        Ok(())
    }

    #[test]
    fn vault_refuses_duplicates_without_force() -> Result<()> {
        let fixture = KitFixture::new()?;
        fixture.vault(&["init"])?.assert().success();
        fixture
            .vault(&["add", "GitHub", "me@example.com", "first-Pass1"])?
            .assert()
            .success();
        fixture
            .vault(&["add", "github", "me@example.com", "second-Pass1"])?
            .assert()
            .failure()
            .stderr(predicate::str::contains("--force"));
        fixture
            .vault(&["add", "github", "me@example.com", "second-Pass1", "--force"])?
            .assert()
            .success();
        fixture
            .vault(&["show", "1"])?
            .assert()
            .success()
            .stdout(predicate::str::contains("second-Pass1"));
        Ok(())
    }

    #[test]
    fn vault_rejects_wrong_master_password() -> Result<()> {
        let fixture = KitFixture::new()?;
        fixture.vault(&["init"])?.assert().success();
        fixture
            .vault(&["list"])?
            .env("KIT_VAULT_PASSWORD", "not the password")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid master password"));
        Ok(())
    }

    #[test]
    fn vault_passwd_switches_master_password() -> Result<()> {
        let fixture = KitFixture::new()?;
        fixture.vault(&["init"])?.assert().success();
        fixture
            .vault(&["add", "GitHub", "me@example.com", "kept-Pass1"])?
            .assert()
            .success();

        fixture
            .vault(&["passwd"])?
            .env("KIT_VAULT_NEW_PASSWORD", "a brand new master")
            .assert()
            .success()
            .stderr(predicate::str::contains("1 entries re-encrypted"));

        fixture
            .vault(&["list"])?
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid master password"));
        fixture
            .vault(&["show", "1"])?
            .env("KIT_VAULT_PASSWORD", "a brand new master")
            .assert()
            .success()
            .stdout(predicate::str::contains("kept-Pass1"));
        Ok(())
    }

    #[test]
    fn vault_requires_init() -> Result<()> {
        let fixture = KitFixture::new()?;
        fixture
            .vault(&["list"])?
            .assert()
            .failure()
            .stderr(predicate::str::contains("kit vault init"));
        Ok(())
    }

    #[test]
    fn vault_export_and_import() -> Result<()> {
        let fixture = KitFixture::new()?;
        let export = fixture.root().join("export.json");
        fixture.vault(&["init"])?.assert().success();
        fixture
            .vault(&["add", "GitHub", "me@example.com", "s3cret-Pass"])?
            .assert()
            .success();
        fixture
            .vault(&["export"])?
            .arg(&export)
            .assert()
            .success();
        assert!(fs::read_to_string(&export)?.contains("s3cret-Pass"));

        let other = fixture.root().join("other.json");
        fixture
            .vault(&["--file"])?
            .arg(&other)
            .arg("init")
            .assert()
            .success();
        fixture
            .vault(&["--file"])?
            .arg(&other)
            .arg("import")
            .arg(&export)
            .assert()
            .success()
            .stderr(predicate::str::contains("Imported 1 new"));
        Ok(())
    }

    #[test]
    fn vault_generate_uses_configured_length() -> Result<()> {
        let fixture = KitFixture::new()?;
        fixture
            .vault(&["generate"])?
            .assert()
            .success()
            .stdout(predicate::str::is_match(r"^\S{12}\n$")?);
        Ok(())
    }
}

#[cfg(test)]
mod study_and_time {
    use super::*;

    #[test]
    fn flashcard_pairs_are_registered() -> Result<()> {
        let fixture = KitFixture::new()?;
        let csv = fixture.write("french.csv", "French,English\nchat,cat\nchien,dog\n")?;
        fixture
            .kit()?
            .args(["flashcards", "pairs"])
            .assert()
            .success()
            .stderr(predicate::str::contains("No language pairs yet"));
        fixture
            .kit()?
            .args(["flashcards", "add", "French", "English"])
            .arg(&csv)
            .assert()
            .success()
            .stderr(predicate::str::contains("Added language pair French-English"));
        fixture
            .kit()?
            .args(["flashcards", "pairs"])
            .assert()
            .success()
            .stdout("French-English\n");
        Ok(())
    }

    #[test]
    fn pomodoro_stats_start_empty() -> Result<()> {
        let fixture = KitFixture::new()?;
        fixture
            .kit()?
            .args(["pomodoro", "stats"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Sessions today: 0"))
            .stdout(predicate::str::contains("0h 0m"));
        fixture
            .kit()?
            .args(["pomodoro", "reset"])
            .assert()
            .success();
        assert!(fixture.data_dir().join("pomodoro.json").is_file());
        Ok(())
    }

    #[test]
    fn states_rejects_zero_time_limit() -> Result<()> {
        let fixture = KitFixture::new()?;
        fixture
            .kit()?
            .args(["states", "--time-limit", "0"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("time limit"));
        Ok(())
    }
}

#[cfg(test)]
mod plumbing {
    use super::*;

    #[test]
    fn config_init_show_and_path() -> Result<()> {
        let fixture = KitFixture::new()?;
        let path = fixture.config_path();

        fixture
            .kit()?
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains(path.display().to_string()));

        fixture.kit()?.args(["config", "init"]).assert().success();
        assert!(path.is_file());
        fixture
            .kit()?
            .args(["config", "init"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("--force"));
        fixture
            .kit()?
            .args(["config", "init", "--force"])
            .assert()
            .success();

        fixture
            .kit()?
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("work_min: 25"))
            .stdout(predicate::str::contains("max_attempts"));
        Ok(())
    }

    #[test]
    fn config_reset_keeps_unknown_keys() -> Result<()> {
        let fixture = KitFixture::new()?;
        fixture.write("config.yaml", "theme: ocean\npomodoro:\n  work_min: 50\n")?;
        fixture
            .kit()?
            .args(["config", "init", "--force"])
            .assert()
            .success();
        let written = fs::read_to_string(fixture.config_path())?;
        assert!(written.contains("theme: ocean"));
        assert!(written.contains("work_min: 25"));
        Ok(())
    }

    #[test]
    fn invalid_config_is_reported_with_hint() -> Result<()> {
        let fixture = KitFixture::new()?;
        fixture.write("config.yaml", "web:\n  timeout_secs: 0\n")?;
        fixture
            .kit()?
            .args(["distance", "1"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("timeout_secs"))
            .stderr(predicate::str::contains("kit config show"));
        Ok(())
    }

    #[test]
    fn completion_scripts() -> Result<()> {
        let fixture = KitFixture::new()?;
        fixture
            .kit()?
            .args(["completion", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("kit"));
        fixture
            .kit()?
            .args(["completion", "tcsh"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unsupported shell: tcsh"));
        Ok(())
    }

    #[test]
    fn status_rejects_malformed_url() -> Result<()> {
        let fixture = KitFixture::new()?;
        fixture
            .kit()?
            .args(["status", "not a url"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid URL format"));
        Ok(())
    }
}
