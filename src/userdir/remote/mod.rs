//! # Source Layer
//!
//! The [`UserSource`] trait is the seam between the command layer and wherever the
//! user collection lives.
//!
//! ## Implementations
//!
//! - [`http::HttpSource`]: Production source talking to a REST collection endpoint
//!   - `GET {endpoint}` reads the whole collection (a JSON array)
//!   - `POST {endpoint}` creates a user from a JSON `{name, lastname, phone}` body
//!   - `PATCH {endpoint}/{id}` and `DELETE {endpoint}/{id}` for remote mutations
//!
//! - [`memory::InMemorySource`]: In-memory source for testing
//!   - Records every request it receives, in order
//!   - Can be told to fail reads or writes, or to answer with a given status
//!
//! ## Status Handling
//!
//! Mutations return the response [`StatusCode`] for any status the server sends;
//! `Err` is reserved for transport failures. Deciding what a status means is the
//! command layer's job.

use crate::error::Result;
use crate::model::{DraftUser, StatusCode, User, UserId};

pub mod http;
pub mod memory;

/// Abstract interface for the remote user collection.
pub trait UserSource {
    /// Read the full collection, in server order
    fn list_users(&self) -> Result<Vec<User>>;

    /// Create a user from a draft
    fn create_user(&self, draft: &DraftUser) -> Result<StatusCode>;

    /// Overwrite the editable fields of an existing user
    fn update_user(&self, user: &User) -> Result<StatusCode>;

    /// Delete a user
    fn delete_user(&self, id: UserId) -> Result<StatusCode>;
}
