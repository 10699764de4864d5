//! User entity - Represents an operator account.
//!
//! The `username` is the external identity (unique), `password_hash` holds an
//! Argon2id PHC-format digest, and `role` gates the admin-only operations.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Surrogate primary key
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Login name, unique across all users
    #[sea_orm(unique)]
    pub username: String,
    /// Salted Argon2id digest in PHC string format, never the plaintext
    pub password_hash: String,
    /// Access role
    pub role: Role,
}

/// Operator roles.
#[derive(Copy, Clone, Debug, EnumIter, DeriveActiveEnum, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "role")]
pub enum Role {
    /// Regular operator, sees only leads assigned to them
    #[sea_orm(string_value = "Staff")]
    Staff,
    /// Administrator, manages users and may see all leads
    #[sea_orm(string_value = "Admin")]
    Admin,
}

/// Users have no relations to other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
