//! User account management.
//!
//! Account creation and password maintenance. Creation is an admin
//! operation in the consuming UI; password changes are either self-service
//! (with current-credential proof) or an unconditional admin reset.

use crate::{
    core::auth::{hash_password, verify_password},
    entities::{Role, User, user},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Creates a new user account.
///
/// Fails with [`Error::DuplicateUser`] if the username is taken; nothing is
/// written in that case.
pub async fn create_user(
    db: &DatabaseConnection,
    username: &str,
    password: &str,
    role: Role,
) -> Result<user::Model> {
    if username.trim().is_empty() {
        return Err(Error::Validation {
            message: "Username is required".to_string(),
        });
    }
    if password.is_empty() {
        return Err(Error::Validation {
            message: "Password is required".to_string(),
        });
    }

    let existing = User::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(Error::DuplicateUser {
            username: username.to_string(),
        });
    }

    let account = user::ActiveModel {
        username: Set(username.to_string()),
        password_hash: Set(hash_password(password)?),
        role: Set(role),
        ..Default::default()
    };

    let result = account.insert(db).await?;
    tracing::info!(username, role = ?role, "Created user");
    Ok(result)
}

/// Changes a user's own password after verifying the current one.
///
/// A wrong current password surfaces as [`Error::AuthFailure`], same as a
/// failed login.
pub async fn change_password(
    db: &DatabaseConnection,
    username: &str,
    current_password: &str,
    new_password: &str,
) -> Result<()> {
    let account = User::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?
        .ok_or(Error::AuthFailure)?;

    if !verify_password(current_password, &account.password_hash)? {
        return Err(Error::AuthFailure);
    }

    set_password(db, account, new_password).await
}

/// Unconditionally resets a user's password. Admin operation.
pub async fn reset_password(
    db: &DatabaseConnection,
    username: &str,
    new_password: &str,
) -> Result<()> {
    let account = User::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?
        .ok_or_else(|| Error::UserNotFound {
            username: username.to_string(),
        })?;

    set_password(db, account, new_password).await
}

async fn set_password(
    db: &DatabaseConnection,
    account: user::Model,
    new_password: &str,
) -> Result<()> {
    if new_password.is_empty() {
        return Err(Error::Validation {
            message: "New password is required".to_string(),
        });
    }

    let username = account.username.clone();
    let mut active: user::ActiveModel = account.into();
    active.password_hash = Set(hash_password(new_password)?);
    active.update(db).await?;
    tracing::info!(username, "Password updated");
    Ok(())
}

/// Lists all user accounts, ordered by username. Backs the admin settings
/// view; password hashes ride along but must never be displayed.
pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<user::Model>> {
    User::find()
        .order_by_asc(user::Column::Username)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Seeds the default admin account if no user with that name exists.
///
/// Username and password come from `LEADTRACK_ADMIN_USER` /
/// `LEADTRACK_ADMIN_PASSWORD`, defaulting to `admin` / `admin123`.
/// Idempotent: a second call is a no-op.
pub async fn seed_admin(db: &DatabaseConnection) -> Result<bool> {
    let username =
        std::env::var("LEADTRACK_ADMIN_USER").unwrap_or_else(|_| "admin".to_string());
    let password =
        std::env::var("LEADTRACK_ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

    match create_user(db, &username, &password, Role::Admin).await {
        Ok(_) => {
            tracing::info!(username, "Seeded default admin user");
            Ok(true)
        }
        Err(Error::DuplicateUser { .. }) => Ok(false),
        Err(e) => Err(e),
    }
}
