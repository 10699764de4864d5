//! Credential hashing and login.
//!
//! Passwords are stored as salted Argon2id digests in PHC string format.
//! Login failure is a single opaque [`Error::AuthFailure`] whether the
//! username is unknown or the password is wrong, so callers cannot
//! enumerate usernames from the error.

use crate::{
    core::notify::LoginNotifier,
    entities::{User, user},
    errors::{Error, Result},
    session::Session,
};
use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{PasswordHash, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use sea_orm::prelude::*;

/// Hashes a password with Argon2id and a fresh random salt.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| Error::Crypto {
            message: format!("hashing failed: {e}"),
        })
}

/// Verifies a plaintext password against a stored PHC-format hash.
///
/// Returns `Ok(true)` on match, `Ok(false)` on mismatch, or
/// [`Error::Crypto`] if the stored hash is malformed.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash).map_err(|e| Error::Crypto {
        message: format!("invalid hash format: {e}"),
    })?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(Error::Crypto {
            message: format!("verify error: {e}"),
        }),
    }
}

/// Authenticates a user and opens a [`Session`].
///
/// On success the login notification fires best-effort before the session is
/// returned; notifier failures never surface. Unknown usernames and wrong
/// passwords both yield the same [`Error::AuthFailure`].
pub async fn login(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
    notifier: &dyn LoginNotifier,
) -> Result<Session> {
    if username.is_empty() || password.is_empty() {
        return Err(Error::AuthFailure);
    }

    let Some(account) = User::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?
    else {
        return Err(Error::AuthFailure);
    };

    if !verify_password(password, &account.password_hash)? {
        tracing::debug!(username, "Password mismatch");
        return Err(Error::AuthFailure);
    }

    notifier.notify_login(username, Utc::now());
    tracing::info!(username, role = ?account.role, "Login succeeded");
    Ok(Session::new(&account.username, account.role))
}
