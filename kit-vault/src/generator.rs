//! Random password generation and strength scoring.

use kit_core::error::{KitError, Result};
use rand::Rng;
use std::fmt;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";

/// Every ASCII punctuation character.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Symbols the vault uses; avoids quotes and backslashes that break
/// copy-paste into web forms.
pub const VAULT_SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Which character classes a password is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub length: usize,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub symbol_set: String,
}

impl PasswordPolicy {
    /// Lowercase letters and digits always, uppercase and punctuation optional.
    pub fn standalone(length: usize, uppercase: bool, symbols: bool) -> Self {
        Self {
            length,
            lowercase: true,
            uppercase,
            digits: true,
            symbols,
            symbol_set: PUNCTUATION.to_string(),
        }
    }

    /// Every class toggleable, symbols drawn from [`VAULT_SYMBOLS`].
    pub fn vault(length: usize, uppercase: bool, lowercase: bool, digits: bool, symbols: bool) -> Self {
        Self {
            length,
            lowercase,
            uppercase,
            digits,
            symbols,
            symbol_set: VAULT_SYMBOLS.to_string(),
        }
    }

    fn classes(&self) -> Vec<&str> {
        let mut classes = Vec::new();
        if self.lowercase {
            classes.push(LOWERCASE);
        }
        if self.uppercase {
            classes.push(UPPERCASE);
        }
        if self.digits {
            classes.push(DIGITS);
        }
        if self.symbols {
            classes.push(self.symbol_set.as_str());
        }
        classes
    }

    /// Draw characters uniformly from the enabled classes until the
    /// result contains at least one character of each class.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String> {
        let classes = self.classes();
        if classes.is_empty() || classes.iter().any(|c| c.is_empty()) {
            return Err(KitError::validation(
                "Select at least one character type.",
            ));
        }
        if self.length < classes.len() {
            return Err(KitError::Validation(format!(
                "Password length must be at least {} for the selected character types.",
                classes.len()
            )));
        }

        let alphabet: Vec<char> = classes.iter().flat_map(|c| c.chars()).collect();
        loop {
            let candidate: String = (0..self.length)
                .map(|_| alphabet[rng.random_range(0..alphabet.len())])
                .collect();
            if classes
                .iter()
                .all(|class| candidate.chars().any(|ch| class.contains(ch)))
            {
                return Ok(candidate);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl Strength {
    fn from_score(score: u32) -> Self {
        match score {
            80.. => Strength::VeryStrong,
            60..=79 => Strength::Strong,
            40..=59 => Strength::Moderate,
            20..=39 => Strength::Weak,
            _ => Strength::VeryWeak,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Moderate => "Moderate",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        };
        f.write_str(label)
    }
}

/// Score a password out of 100 by length and character variety.
pub fn check_strength(password: &str) -> (Strength, u32) {
    let length = password.chars().count();
    let mut score = match length {
        12.. => 30,
        8..=11 => 15,
        _ => 5,
    };

    let checks: [fn(&char) -> bool; 4] = [
        char::is_ascii_lowercase,
        char::is_ascii_uppercase,
        char::is_ascii_digit,
        |c| !c.is_ascii_alphanumeric(),
    ];
    for check in checks {
        if password.chars().any(|c| check(&c)) {
            score += 15;
        }
    }
    if length >= 16 {
        score += 10;
    }

    (Strength::from_score(score), score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn standalone_passwords_hold_every_class() {
        let mut rng = StdRng::seed_from_u64(7);
        let policy = PasswordPolicy::standalone(20, true, true);
        for _ in 0..20 {
            let pw = policy.generate(&mut rng).expect("should generate");
            assert_eq!(pw.chars().count(), 20);
            assert!(pw.chars().any(|c| c.is_ascii_lowercase()));
            assert!(pw.chars().any(|c| c.is_ascii_uppercase()));
            assert!(pw.chars().any(|c| c.is_ascii_digit()));
            assert!(pw.chars().any(|c| PUNCTUATION.contains(c)));
        }
    }

    #[test]
    fn disabled_classes_never_appear() {
        let mut rng = StdRng::seed_from_u64(1);
        let pw = PasswordPolicy::standalone(30, false, false)
            .generate(&mut rng)
            .expect("should generate");
        assert!(pw.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn vault_symbols_are_limited() {
        let mut rng = StdRng::seed_from_u64(3);
        let policy = PasswordPolicy::vault(16, false, false, false, true);
        let pw = policy.generate(&mut rng).expect("should generate");
        assert!(pw.chars().all(|c| VAULT_SYMBOLS.contains(c)));
    }

    #[test]
    fn impossible_policies_are_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let none = PasswordPolicy::vault(12, false, false, false, false);
        assert!(none.generate(&mut rng).unwrap_err().is_validation());
        let short = PasswordPolicy::vault(3, true, true, true, true);
        assert!(short.generate(&mut rng).is_err());
    }

    #[test]
    fn same_seed_same_password() {
        let policy = PasswordPolicy::standalone(12, true, true);
        let a = policy.generate(&mut StdRng::seed_from_u64(42)).expect("should generate");
        let b = policy.generate(&mut StdRng::seed_from_u64(42)).expect("should generate");
        assert_eq!(a, b);
    }

    #[test]
    fn strength_scores() {
        assert_eq!(check_strength("abc"), (Strength::Weak, 20));
        assert_eq!(check_strength("password"), (Strength::Weak, 30));
        assert_eq!(check_strength("hello123"), (Strength::Moderate, 45));
        assert_eq!(check_strength("Password1"), (Strength::Strong, 60));
        assert_eq!(check_strength("Password1!ab"), (Strength::VeryStrong, 90));
        assert_eq!(check_strength("Password1!abcdef"), (Strength::VeryStrong, 100));
        assert_eq!(check_strength(""), (Strength::VeryWeak, 5));
    }

    #[test]
    fn strength_labels() {
        assert_eq!(Strength::VeryStrong.to_string(), "Very Strong");
        assert_eq!(Strength::VeryWeak.to_string(), "Very Weak");
    }
}
