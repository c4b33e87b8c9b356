//! Master-password key derivation and per-entry sealing.
//!
//! Stored values are `base64(nonce ‖ ciphertext)` under AES-256-GCM with a
//! key stretched from the master password by PBKDF2-HMAC-SHA256.

use aes_gcm::{
    aead::{rand_core::RngCore, Aead, AeadCore, KeyInit, OsRng},
    Aes256Gcm, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use kit_core::error::{KitError, Result};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;

const ROUNDS: u32 = 100_000;
const NONCE_BYTES: usize = 12;

pub const SALT_BYTES: usize = 32;

/// Sealed alongside the entries so a wrong master password is caught
/// before any entry is touched.
pub const CANARY: &str = "PasswordManagerTest";

fn crypto_err(what: &str, detail: impl std::fmt::Display) -> KitError {
    KitError::Crypto(format!("{what}: {detail}"))
}

/// Cipher bound to one vault's master password.
#[derive(Clone)]
pub struct MasterKey {
    cipher: Aes256Gcm,
}

impl MasterKey {
    pub fn derive(master: &str, salt: &[u8]) -> Result<Self> {
        if salt.len() != SALT_BYTES {
            return Err(KitError::Crypto(format!(
                "vault salt has {} bytes, expected {SALT_BYTES}",
                salt.len()
            )));
        }
        let mut raw = [0u8; 32];
        pbkdf2_hmac::<Sha256>(master.as_bytes(), salt, ROUNDS, &mut raw);
        Aes256Gcm::new_from_slice(&raw)
            .map(|cipher| Self { cipher })
            .map_err(|e| crypto_err("cipher setup", e))
    }

    pub fn encrypt(&self, secret: &str) -> Result<String> {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let sealed = self
            .cipher
            .encrypt(&nonce, secret.as_bytes())
            .map_err(|e| crypto_err("sealing failed", e))?;
        let blob: Vec<u8> = nonce.iter().copied().chain(sealed).collect();
        Ok(STANDARD.encode(blob))
    }

    /// Inverse of [`MasterKey::encrypt`]. Fails on tampering or a foreign key.
    pub fn decrypt(&self, sealed: &str) -> Result<String> {
        let blob = STANDARD
            .decode(sealed)
            .map_err(|e| crypto_err("sealed value is not base64", e))?;
        if blob.len() <= NONCE_BYTES {
            return Err(KitError::Crypto("sealed value is truncated".to_string()));
        }
        let (nonce, body) = blob.split_at(NONCE_BYTES);
        let plain = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), body)
            .map_err(|e| crypto_err("opening failed", e))?;
        String::from_utf8(plain).map_err(|e| crypto_err("opened value", e))
    }

    pub fn seal_canary(&self) -> Result<String> {
        self.encrypt(CANARY)
    }

    pub fn opens_canary(&self, sealed: &str) -> bool {
        self.decrypt(sealed).is_ok_and(|text| text == CANARY)
    }
}

pub fn fresh_salt() -> [u8; SALT_BYTES] {
    let mut salt = [0u8; SALT_BYTES];
    OsRng.fill_bytes(&mut salt);
    salt
}

pub fn salt_to_text(salt: &[u8]) -> String {
    STANDARD.encode(salt)
}

pub fn salt_from_text(text: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(text)
        .map_err(|e| crypto_err("vault salt is not base64", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(master: &str, salt: &[u8]) -> MasterKey {
        MasterKey::derive(master, salt).expect("key should derive")
    }

    #[test]
    fn sealed_secret_opens_with_same_master() {
        let salt = fresh_salt();
        let k = key("correct horse", &salt);
        let sealed = k.encrypt("hunter2").expect("seal");
        assert!(!sealed.contains("hunter2"));
        assert_eq!(k.decrypt(&sealed).expect("open"), "hunter2");
    }

    #[test]
    fn each_seal_uses_a_fresh_nonce() {
        let k = key("pw", &fresh_salt());
        assert_ne!(k.encrypt("same").expect("seal"), k.encrypt("same").expect("seal"));
    }

    #[test]
    fn other_master_cannot_open() {
        let salt = fresh_salt();
        let sealed = key("alpha", &salt).encrypt("secret").expect("seal");
        assert!(key("beta", &salt).decrypt(&sealed).is_err());
    }

    #[test]
    fn canary_distinguishes_master_passwords() {
        let salt = fresh_salt();
        let k = key("master", &salt);
        let canary = k.seal_canary().expect("canary");

        assert!(k.opens_canary(&canary));
        assert!(!key("Master", &salt).opens_canary(&canary));
        assert!(!k.opens_canary("not base64 at all!"));
        assert!(!k.opens_canary(&STANDARD.encode([0u8; NONCE_BYTES])));
    }

    #[test]
    fn salt_survives_text_form() {
        let salt = fresh_salt();
        assert_ne!(salt, fresh_salt());
        assert_eq!(salt_from_text(&salt_to_text(&salt)).expect("decode"), salt);
    }

    #[test]
    fn wrong_salt_length_is_rejected() {
        assert!(MasterKey::derive("pw", &[0u8; 16]).is_err());
    }
}
