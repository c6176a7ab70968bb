//! Password hashing built around Argon2id.
//! Every hash is a PHC string carrying its own salt and cost parameters, so
//! verification needs nothing but the stored value.

use crate::config::HashCost;
use crate::error::XteamError;
use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use rand::rngs::OsRng;

fn argon2_with(cost: HashCost) -> Result<Argon2<'static>, XteamError> {
    let params = Params::new(cost.memory_kib, cost.time_cost, cost.parallelism, None)
        .map_err(|e| XteamError::PasswordHash(e.to_string()))?;
    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hash `plaintext` under a freshly generated salt.
pub fn hash_password(plaintext: &str, cost: HashCost) -> Result<String, XteamError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2_with(cost)?
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| XteamError::PasswordHash(e.to_string()))?;
    Ok(hash.to_string())
}

/// `false` for a mismatch and for anything that is not a parseable hash.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
pub(crate) const TEST_COST: HashCost = HashCost {
    memory_kib: 1024,
    time_cost: 1,
    parallelism: 1,
};
