//! Core data models: users, pins, comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role attached to a user account. Admins bypass the action gate and
/// never see monetization surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn is_privileged(self) -> bool {
        matches!(self, UserRole::Admin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

/// Media kind of a pin. Absent in older snapshots, so it defaults to image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

impl MediaKind {
    /// File extension used when a pin of this kind is saved to disk.
    pub fn file_extension(self) -> &'static str {
        match self {
            MediaKind::Image => "jpg",
            MediaKind::Video => "mp4",
        }
    }
}

/// UI theme. Persisted with the rest of the session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub name: String,
    pub avatar: String,
    pub bio: String,
    pub followers: u32,
    pub following: u32,
    pub role: UserRole,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    /// Weak reference to a user; the referenced account may no longer exist.
    pub user_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// A single content item in the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pin {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Media URL. Videos also live here; `kind` tells them apart.
    pub image_url: String,
    #[serde(rename = "type", default)]
    pub kind: MediaKind,
    pub width: u32,
    pub height: u32,
    /// Weak reference to a user. Ingested pins carry synthetic authors
    /// ("api_user", "admin_1") that may have no users-map entry.
    pub author_id: String,
    pub tags: Vec<String>,
    pub likes: u32,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    /// Reserved for moderation, currently always false.
    pub nsfw: bool,
    /// Reserved for moderation, currently always false.
    pub hidden: bool,
}

/// Partial profile update; only the provided fields are merged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
}

/// Display identity for a pin author, resolved gracefully even when the
/// author id dangles (ingested content).
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorDisplay {
    pub id: String,
    pub name: String,
    pub avatar: String,
}
