//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod lead;
pub mod user;

// Re-export specific types to avoid conflicts
pub use lead::{
    Column as LeadColumn, Entity as Lead, LeadStatus, Model as LeadModel, ServiceInterest,
};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel, Role};
