//! Session/content state authority and its data models.

pub mod models;
pub mod seed;
mod store;

pub use models::{
    AuthorDisplay, Comment, MediaKind, Pin, ProfileUpdate, Theme, User, UserRole,
};
pub use store::{AppStore, RegisterError, UploadFile, UploadRequest};
