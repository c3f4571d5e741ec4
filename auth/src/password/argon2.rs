use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Password hasher backed by Argon2id with per-password random salts.
///
/// Hashes are stored in PHC string format, which embeds the algorithm,
/// parameters, and salt, so verification needs no extra state. Comparison is
/// constant-time via the password-hash machinery.
pub struct PasswordHasher;

impl PasswordHasher {
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a plaintext candidate against a stored hash.
    ///
    /// Returns `Ok(false)` on a well-formed mismatch; errors only when the
    /// stored hash cannot be parsed as a PHC string.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash = PasswordHash::new(hash).map_err(|e| {
            PasswordError::VerificationFailed(format!("invalid password hash: {}", e))
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let hasher = PasswordHasher::new();
        let password = "correct-horse-battery-staple";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher.verify(password, &hash).expect("Failed to verify"));
        assert!(!hasher
            .verify("wrong-password", &hash)
            .expect("Failed to verify"));
    }

    #[test]
    fn distinct_passwords_produce_distinct_hashes() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("password-one").expect("Failed to hash");
        let second = hasher.hash("password-two").expect("Failed to hash");

        assert_ne!(first, second);
        assert!(!hasher.verify("password-one", &second).expect("verify"));
    }

    #[test]
    fn same_password_hashes_differently_per_salt() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("repeated").expect("Failed to hash");
        let second = hasher.hash("repeated").expect("Failed to hash");

        // Random salts make the encodings differ while both still verify.
        assert_ne!(first, second);
        assert!(hasher.verify("repeated", &first).expect("verify"));
        assert!(hasher.verify("repeated", &second).expect("verify"));
    }

    #[test]
    fn verify_errors_on_malformed_hash() {
        let hasher = PasswordHasher::new();

        let result = hasher.verify("anything", "not-a-valid-hash");
        assert!(matches!(
            result,
            Err(PasswordError::VerificationFailed(_))
        ));
    }
}
