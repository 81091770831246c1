//! Phonebook API endpoints.

use axum::extract::State;

use super::{success, ApiResult};
use crate::models::Contact;
use crate::AppState;

/// GET /api/persons - List all contacts.
pub async fn list_persons(State(state): State<AppState>) -> ApiResult<Vec<Contact>> {
    let contacts = state.repo.list_contacts().await?;
    success(contacts)
}
