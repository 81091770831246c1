//! Data models for the phonebook and blog endpoints.
//!
//! These are the wire representations; the repository maps rows into them.

mod blog;
mod contact;

pub use blog::*;
pub use contact::*;
