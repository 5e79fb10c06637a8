//! The application store: single authority for session and content state.
//!
//! Every operation is total. Conflicts and missing ids are expressed as
//! returned values or silent no-ops, never as panics or propagated errors.
//! Each mutation writes the persisted slice of state through the snapshot
//! store, fire-and-forget.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use chrono::Utc;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::notify::Notifier;
use crate::persistence::{Snapshot, SnapshotStore};

use super::models::{
    AuthorDisplay, Comment, MediaKind, Pin, ProfileUpdate, Theme, User, UserRole,
};
use super::seed;

/// Conflict signal for registration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegisterError {
    #[error("identifier already in use: {0}")]
    IdentifierTaken(String),
}

/// One file in an upload batch.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub url: String,
    pub kind: MediaKind,
}

/// A locally-authored upload batch, as assembled by the upload screen.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    /// Comma-separated free-form tags.
    pub tags: String,
    pub files: Vec<UploadFile>,
}

#[derive(Debug, Clone, Default)]
struct SessionState {
    theme: Theme,
    current_user: Option<User>,
    users: HashMap<String, User>,
    pins: Vec<Pin>,
    saved_pin_ids: Vec<String>,
    followed_users: Vec<String>,
    search_query: String,
}

pub struct AppStore {
    state: Mutex<SessionState>,
    snapshots: Arc<dyn SnapshotStore>,
    notifier: Arc<dyn Notifier>,
}

impl AppStore {
    /// Builds the store from the persisted snapshot, or from the built-in
    /// demo catalog when no snapshot exists yet.
    pub fn new(snapshots: Arc<dyn SnapshotStore>, notifier: Arc<dyn Notifier>) -> Self {
        let state = match snapshots.load() {
            Ok(Some(snapshot)) => {
                debug!(
                    "Loaded snapshot: {} users, {} pins",
                    snapshot.users.len(),
                    snapshot.pins.len()
                );
                SessionState {
                    theme: snapshot.theme,
                    current_user: snapshot.current_user,
                    users: snapshot.users,
                    pins: snapshot.pins,
                    saved_pin_ids: snapshot.saved_pin_ids,
                    followed_users: snapshot.followed_users,
                    search_query: String::new(),
                }
            }
            Ok(None) => {
                debug!("No snapshot found, seeding demo catalog");
                SessionState {
                    users: seed::demo_users(),
                    pins: seed::generate_demo_pins(),
                    ..SessionState::default()
                }
            }
            Err(err) => {
                warn!("Failed to load snapshot, starting fresh: {:#}", err);
                SessionState {
                    users: seed::demo_users(),
                    pins: seed::generate_demo_pins(),
                    ..SessionState::default()
                }
            }
        };

        Self {
            state: Mutex::new(state),
            snapshots,
            notifier,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn theme(&self) -> Theme {
        self.state.lock().unwrap().theme
    }

    pub fn current_user(&self) -> Option<User> {
        self.state.lock().unwrap().current_user.clone()
    }

    /// Role of the acting user; anonymous viewers act unprivileged.
    pub fn current_role(&self) -> UserRole {
        self.state
            .lock()
            .unwrap()
            .current_user
            .as_ref()
            .map(|u| u.role)
            .unwrap_or(UserRole::User)
    }

    pub fn user(&self, user_id: &str) -> Option<User> {
        self.state.lock().unwrap().users.get(user_id).cloned()
    }

    pub fn users(&self) -> HashMap<String, User> {
        self.state.lock().unwrap().users.clone()
    }

    pub fn pins(&self) -> Vec<Pin> {
        self.state.lock().unwrap().pins.clone()
    }

    pub fn pin(&self, pin_id: &str) -> Option<Pin> {
        self.state
            .lock()
            .unwrap()
            .pins
            .iter()
            .find(|p| p.id == pin_id)
            .cloned()
    }

    pub fn pin_count(&self) -> usize {
        self.state.lock().unwrap().pins.len()
    }

    pub fn saved_pin_ids(&self) -> Vec<String> {
        self.state.lock().unwrap().saved_pin_ids.clone()
    }

    pub fn is_pin_saved(&self, pin_id: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .saved_pin_ids
            .iter()
            .any(|id| id == pin_id)
    }

    /// Saved pins resolved against the current collection. Ids whose pin has
    /// been deleted are skipped here; the raw id set is left untouched.
    pub fn saved_pins(&self) -> Vec<Pin> {
        let state = self.state.lock().unwrap();
        state
            .saved_pin_ids
            .iter()
            .filter_map(|id| state.pins.iter().find(|p| &p.id == id).cloned())
            .collect()
    }

    pub fn followed_users(&self) -> Vec<String> {
        self.state.lock().unwrap().followed_users.clone()
    }

    pub fn is_following(&self, user_id: &str) -> bool {
        self.state
            .lock()
            .unwrap()
            .followed_users
            .iter()
            .any(|id| id == user_id)
    }

    pub fn search_query(&self) -> String {
        self.state.lock().unwrap().search_query.clone()
    }

    /// Resolves an author id for display. Synthetic authors of ingested
    /// content have no users-map entry, so this falls back to an identity
    /// derived from the id itself.
    pub fn author_display(&self, author_id: &str) -> AuthorDisplay {
        match self.state.lock().unwrap().users.get(author_id) {
            Some(user) => AuthorDisplay {
                id: user.id.clone(),
                name: user.name.clone(),
                avatar: user.avatar.clone(),
            },
            None => AuthorDisplay {
                id: author_id.to_string(),
                name: author_id.to_string(),
                avatar: format!("https://i.pravatar.cc/150?u={}", author_id),
            },
        }
    }

    // =========================================================================
    // Session operations
    // =========================================================================

    pub fn toggle_theme(&self) {
        let mut state = self.state.lock().unwrap();
        state.theme = state.theme.toggled();
        self.persist(&state);
    }

    /// Logs in by user id. An unknown id leaves the session anonymous.
    pub fn login(&self, user_id: &str) {
        let mut state = self.state.lock().unwrap();
        state.current_user = state.users.get(user_id).cloned();
        self.persist(&state);
    }

    /// Logs in by account identifier (username/email). Absent accounts are a
    /// no-op with a user notice.
    pub fn login_with_identifier(&self, identifier: &str) -> bool {
        let mut state = self.state.lock().unwrap();
        let found = state
            .users
            .values()
            .find(|u| u.username == identifier)
            .cloned();
        match found {
            Some(user) => {
                state.current_user = Some(user);
                self.persist(&state);
                true
            }
            None => {
                self.notifier
                    .notify("Account not found. Please sign up first!");
                false
            }
        }
    }

    /// Registers a new account and logs it in. Registering an identifier that
    /// is already taken is a conflict: state is unchanged and the caller gets
    /// a rejection signal.
    pub fn register_user(
        &self,
        name: &str,
        identifier: &str,
        _secret: &str,
    ) -> Result<User, RegisterError> {
        let mut state = self.state.lock().unwrap();
        if state.users.values().any(|u| u.username == identifier) {
            self.notifier.notify("Email already in use. Please log in.");
            return Err(RegisterError::IdentifierTaken(identifier.to_string()));
        }

        let id = format!("user_{}", Utc::now().timestamp_millis());
        let user = User {
            id: id.clone(),
            username: identifier.to_string(),
            name: name.to_string(),
            avatar: format!("https://i.pravatar.cc/150?u={}", id),
            bio: "Welcome to my Interest profile!".to_string(),
            followers: 0,
            following: 0,
            role: UserRole::User,
        };
        state.users.insert(id, user.clone());
        state.current_user = Some(user.clone());
        self.persist(&state);
        Ok(user)
    }

    /// Simulated federated sign-in. Always succeeds: a fresh linked account
    /// is synthesized and logged in.
    pub fn external_login(&self) -> User {
        let mut rng = rand::rng();
        let id = format!("google_{}", Utc::now().timestamp_millis());
        let user = User {
            id: id.clone(),
            username: format!("google_{}@gmail.com", rng.random_range(0..1000)),
            name: "Google User".to_string(),
            avatar: format!("https://i.pravatar.cc/150?u={}", id),
            bio: "Connected via Google Auth.".to_string(),
            followers: rng.random_range(0..100),
            following: rng.random_range(0..50),
            role: UserRole::User,
        };

        let mut state = self.state.lock().unwrap();
        state.users.insert(id, user.clone());
        state.current_user = Some(user.clone());
        self.persist(&state);
        self.notifier.notify(
            "Google Authentication Successful! Automatically created & logged into your Google Account.",
        );
        user
    }

    /// Clears the current user. Content and social state are retained.
    pub fn logout(&self) {
        let mut state = self.state.lock().unwrap();
        state.current_user = None;
        self.persist(&state);
    }

    /// Merges the provided fields into the current user and its users-map
    /// entry. No-op when anonymous.
    pub fn update_profile(&self, update: ProfileUpdate) {
        let mut state = self.state.lock().unwrap();
        let Some(mut user) = state.current_user.clone() else {
            return;
        };

        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(avatar) = update.avatar {
            user.avatar = avatar;
        }
        if let Some(bio) = update.bio {
            user.bio = bio;
        }

        state.users.insert(user.id.clone(), user.clone());
        state.current_user = Some(user);
        self.persist(&state);
    }

    // =========================================================================
    // Content operations
    // =========================================================================

    pub fn add_pin(&self, pin: Pin) {
        let mut state = self.state.lock().unwrap();
        state.pins.insert(0, pin);
        self.persist(&state);
    }

    /// Prepends a batch, keeping the batch's internal order.
    pub fn add_pins(&self, pins: Vec<Pin>) {
        if pins.is_empty() {
            return;
        }
        let mut state = self.state.lock().unwrap();
        let existing = std::mem::take(&mut state.pins);
        state.pins = pins.into_iter().chain(existing).collect();
        self.persist(&state);
    }

    /// Prepends only the pins whose id is not already present. Returns the
    /// number actually merged; merging the same batch again adds nothing.
    pub fn merge_unique(&self, pins: Vec<Pin>) -> usize {
        let mut state = self.state.lock().unwrap();
        let mut existing: HashSet<String> =
            state.pins.iter().map(|p| p.id.clone()).collect();

        let fresh: Vec<Pin> = pins
            .into_iter()
            .filter(|p| existing.insert(p.id.clone()))
            .collect();

        let merged = fresh.len();
        if merged > 0 {
            let existing_pins = std::mem::take(&mut state.pins);
            state.pins = fresh.into_iter().chain(existing_pins).collect();
            self.persist(&state);
        }
        merged
    }

    /// Symmetric set-membership flip of the saved set.
    pub fn toggle_save_pin(&self, pin_id: &str) {
        let mut state = self.state.lock().unwrap();
        match state.saved_pin_ids.iter().position(|id| id == pin_id) {
            Some(index) => {
                state.saved_pin_ids.remove(index);
            }
            None => state.saved_pin_ids.push(pin_id.to_string()),
        }
        self.persist(&state);
    }

    /// Symmetric set-membership flip of the followed set.
    pub fn toggle_follow_user(&self, user_id: &str) {
        let mut state = self.state.lock().unwrap();
        match state.followed_users.iter().position(|id| id == user_id) {
            Some(index) => {
                state.followed_users.remove(index);
            }
            None => state.followed_users.push(user_id.to_string()),
        }
        self.persist(&state);
    }

    /// Increments the like count by exactly one. Unknown ids are a no-op.
    pub fn toggle_like_pin(&self, pin_id: &str) {
        let mut state = self.state.lock().unwrap();
        let Some(pin) = state.pins.iter_mut().find(|p| p.id == pin_id) else {
            return;
        };
        pin.likes += 1;
        self.persist(&state);
    }

    /// Removes the pin. Saved-set entries referencing it are deliberately
    /// left behind; reads resolve them leniently (see `saved_pins`).
    pub fn delete_pin(&self, pin_id: &str) {
        let mut state = self.state.lock().unwrap();
        let before = state.pins.len();
        state.pins.retain(|p| p.id != pin_id);
        if state.pins.len() != before {
            self.persist(&state);
        }
    }

    /// Appends a comment authored by the current user. No-op when anonymous
    /// or when the pin is gone.
    pub fn add_comment(&self, pin_id: &str, text: &str) -> Option<Comment> {
        let mut state = self.state.lock().unwrap();
        let author_id = state.current_user.as_ref()?.id.clone();
        let pin = state.pins.iter_mut().find(|p| p.id == pin_id)?;

        let comment = Comment {
            id: format!("c_{}", Uuid::new_v4()),
            user_id: author_id,
            text: text.to_string(),
            created_at: Utc::now(),
        };
        pin.comments.push(comment.clone());
        self.persist(&state);
        Some(comment)
    }

    /// Replaces the transient search query. Never touches the pins.
    pub fn set_search_query(&self, query: &str) {
        let mut state = self.state.lock().unwrap();
        state.search_query = query.to_string();
    }

    /// Builds and adds pins for a local upload batch, authored by the current
    /// user. Anonymous viewers cannot upload; the result is empty.
    pub fn compose_upload(&self, request: UploadRequest) -> Vec<Pin> {
        let Some(author) = self.current_user() else {
            return Vec::new();
        };
        if request.files.is_empty() {
            return Vec::new();
        }

        let now = Utc::now();
        let batch = request.files.len();
        let base_title = if request.title.is_empty() {
            "Untitled".to_string()
        } else {
            request.title.clone()
        };

        let mut tags = vec![request.category.clone()];
        tags.extend(
            request
                .tags
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty()),
        );

        let pins: Vec<Pin> = request
            .files
            .iter()
            .enumerate()
            .map(|(idx, file)| Pin {
                id: format!("upload_{}_{}", now.timestamp_millis(), idx),
                title: if batch > 1 {
                    format!("{} {}", base_title, idx + 1)
                } else {
                    base_title.clone()
                },
                description: request.description.clone(),
                image_url: file.url.clone(),
                kind: file.kind,
                width: 800,
                height: 1000,
                author_id: author.id.clone(),
                tags: tags.clone(),
                likes: 0,
                comments: vec![],
                created_at: now,
                nsfw: false,
                hidden: false,
            })
            .collect();

        self.add_pins(pins.clone());
        self.notifier
            .notify(&format!("Successfully uploaded {} file(s)!", batch));
        pins
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write-through save of the persisted slice of state. Failures are
    /// logged and absorbed; a stale snapshot is acceptable, a broken
    /// operation is not.
    fn persist(&self, state: &SessionState) {
        let snapshot = Snapshot {
            theme: state.theme,
            current_user: state.current_user.clone(),
            users: state.users.clone(),
            saved_pin_ids: state.saved_pin_ids.clone(),
            followed_users: state.followed_users.clone(),
            pins: state.pins.clone(),
        };
        if let Err(err) = self.snapshots.save(&snapshot) {
            warn!("Failed to persist snapshot: {:#}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NoopNotifier;
    use crate::persistence::NullSnapshotStore;
    use chrono::Utc;

    fn make_store() -> AppStore {
        AppStore::new(Arc::new(NullSnapshotStore), Arc::new(NoopNotifier))
    }

    fn make_pin(id: &str) -> Pin {
        Pin {
            id: id.to_string(),
            title: format!("Pin {}", id),
            description: String::new(),
            image_url: format!("https://example.com/{}.jpg", id),
            kind: MediaKind::Image,
            width: 800,
            height: 1200,
            author_id: "user_1".to_string(),
            tags: vec!["HD".to_string()],
            likes: 0,
            comments: vec![],
            created_at: Utc::now(),
            nsfw: false,
            hidden: false,
        }
    }

    #[test]
    fn fresh_store_is_seeded() {
        let store = make_store();
        assert_eq!(store.users().len(), 2);
        assert_eq!(store.pin_count(), 50);
        assert!(store.current_user().is_none());
    }

    #[test]
    fn login_with_unknown_id_stays_anonymous() {
        let store = make_store();
        store.login("nope");
        assert!(store.current_user().is_none());

        store.login("user_1");
        assert_eq!(store.current_user().unwrap().id, "user_1");
    }

    #[test]
    fn register_conflict_leaves_users_unchanged() {
        let store = make_store();
        let before = store.users().len();

        store.register_user("A", "a@x.com", "pw").unwrap();
        let after_first = store.users().len();
        assert_eq!(after_first, before + 1);

        let second = store.register_user("B", "a@x.com", "pw");
        assert_eq!(
            second,
            Err(RegisterError::IdentifierTaken("a@x.com".to_string()))
        );
        assert_eq!(store.users().len(), after_first);
    }

    #[test]
    fn external_login_always_creates_and_logs_in() {
        let store = make_store();
        let before = store.users().len();
        let user = store.external_login();
        assert_eq!(store.users().len(), before + 1);
        assert_eq!(store.current_user().unwrap().id, user.id);
        assert_eq!(user.role, UserRole::User);
    }

    #[test]
    fn logout_retains_content_state() {
        let store = make_store();
        store.login("user_1");
        store.toggle_save_pin("pin_1");
        store.logout();
        assert!(store.current_user().is_none());
        assert!(store.is_pin_saved("pin_1"));
        assert_eq!(store.pin_count(), 50);
    }

    #[test]
    fn update_profile_is_noop_when_anonymous() {
        let store = make_store();
        store.update_profile(ProfileUpdate {
            bio: Some("new bio".to_string()),
            ..ProfileUpdate::default()
        });
        assert_eq!(store.user("user_1").unwrap().bio, "Photography enthusiast.");
    }

    #[test]
    fn update_profile_merges_into_both_copies() {
        let store = make_store();
        store.login("user_1");
        store.update_profile(ProfileUpdate {
            bio: Some("Shooting film".to_string()),
            name: Some("Johnny".to_string()),
            ..ProfileUpdate::default()
        });
        assert_eq!(store.current_user().unwrap().bio, "Shooting film");
        assert_eq!(store.user("user_1").unwrap().name, "Johnny");
        // untouched fields survive
        assert_eq!(store.user("user_1").unwrap().username, "john_doe");
    }

    #[test]
    fn toggle_save_is_symmetric() {
        let store = make_store();
        assert!(!store.is_pin_saved("pin_3"));
        store.toggle_save_pin("pin_3");
        assert!(store.is_pin_saved("pin_3"));
        store.toggle_save_pin("pin_3");
        assert!(!store.is_pin_saved("pin_3"));
        assert!(store.saved_pin_ids().is_empty());
    }

    #[test]
    fn toggle_follow_is_symmetric() {
        let store = make_store();
        store.toggle_follow_user("user_1");
        store.toggle_follow_user("api_user");
        store.toggle_follow_user("user_1");
        assert_eq!(store.followed_users(), vec!["api_user".to_string()]);
    }

    #[test]
    fn like_missing_pin_is_noop() {
        let store = make_store();
        let before = store.pins();
        store.toggle_like_pin("missing_id");
        assert_eq!(store.pins(), before);
    }

    #[test]
    fn like_increments_by_one() {
        let store = make_store();
        let before = store.pin("pin_1").unwrap().likes;
        store.toggle_like_pin("pin_1");
        assert_eq!(store.pin("pin_1").unwrap().likes, before + 1);
    }

    #[test]
    fn delete_leaves_saved_ids_but_saved_pins_prunes() {
        let store = make_store();
        store.toggle_save_pin("pin_5");
        store.toggle_save_pin("pin_6");
        store.delete_pin("pin_5");

        // the raw set still holds the dangling id
        assert!(store.saved_pin_ids().contains(&"pin_5".to_string()));
        // but the resolved view skips it
        let saved: Vec<String> = store.saved_pins().into_iter().map(|p| p.id).collect();
        assert_eq!(saved, vec!["pin_6".to_string()]);
    }

    #[test]
    fn add_pins_prepend_in_batch_order() {
        let store = make_store();
        store.add_pins(vec![make_pin("a"), make_pin("b")]);
        let pins = store.pins();
        assert_eq!(pins[0].id, "a");
        assert_eq!(pins[1].id, "b");
        assert_eq!(pins[2].id, "pin_1");
    }

    #[test]
    fn merge_unique_skips_existing_ids() {
        let store = make_store();
        store.add_pins(vec![make_pin("p2")]);

        let merged = store.merge_unique(vec![make_pin("p1"), make_pin("p2"), make_pin("p3")]);
        assert_eq!(merged, 2);

        let ids: Vec<String> = store
            .pins()
            .into_iter()
            .take(3)
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["p1", "p3", "p2"]);
    }

    #[test]
    fn merge_unique_twice_is_idempotent() {
        let store = make_store();
        let batch = vec![make_pin("x1"), make_pin("x2")];

        assert_eq!(store.merge_unique(batch.clone()), 2);
        let after_first = store.pins();
        assert_eq!(store.merge_unique(batch), 0);
        assert_eq!(store.pins(), after_first);
    }

    #[test]
    fn pin_ids_stay_unique() {
        let store = make_store();
        store.add_pin(make_pin("u1"));
        store.merge_unique(vec![make_pin("u1"), make_pin("u2")]);

        let mut ids: Vec<String> = store.pins().into_iter().map(|p| p.id).collect();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn add_comment_requires_login_and_pin() {
        let store = make_store();
        assert!(store.add_comment("pin_1", "hello").is_none());

        store.login("user_1");
        assert!(store.add_comment("missing", "hello").is_none());

        let comment = store.add_comment("pin_1", "hello").unwrap();
        assert_eq!(comment.user_id, "user_1");
        let pin = store.pin("pin_1").unwrap();
        assert_eq!(pin.comments.last().unwrap().text, "hello");
    }

    #[test]
    fn comments_preserve_append_order() {
        let store = make_store();
        store.login("user_1");
        store.add_comment("pin_2", "first");
        store.add_comment("pin_2", "second");
        let comments = store.pin("pin_2").unwrap().comments;
        let texts: Vec<&str> = comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(&texts[texts.len() - 2..], &["first", "second"]);
    }

    #[test]
    fn search_query_does_not_touch_pins() {
        let store = make_store();
        let before = store.pins();
        store.set_search_query("shiva");
        assert_eq!(store.search_query(), "shiva");
        assert_eq!(store.pins(), before);
    }

    #[test]
    fn compose_upload_anonymous_is_empty() {
        let store = make_store();
        let created = store.compose_upload(UploadRequest {
            title: "T".to_string(),
            description: String::new(),
            category: "Art HD".to_string(),
            tags: String::new(),
            files: vec![UploadFile {
                url: "data:image/png;base64,xyz".to_string(),
                kind: MediaKind::Image,
            }],
        });
        assert!(created.is_empty());
        assert_eq!(store.pin_count(), 50);
    }

    #[test]
    fn compose_upload_numbers_multi_file_batches() {
        let store = make_store();
        store.login("user_1");
        let created = store.compose_upload(UploadRequest {
            title: "Trip".to_string(),
            description: "desc".to_string(),
            category: "Travel World".to_string(),
            tags: "beach, sunset,".to_string(),
            files: vec![
                UploadFile {
                    url: "data:1".to_string(),
                    kind: MediaKind::Image,
                },
                UploadFile {
                    url: "data:2".to_string(),
                    kind: MediaKind::Video,
                },
            ],
        });
        assert_eq!(created.len(), 2);
        assert_eq!(created[0].title, "Trip 1");
        assert_eq!(created[1].title, "Trip 2");
        assert_eq!(created[1].kind, MediaKind::Video);
        assert_eq!(
            created[0].tags,
            vec!["Travel World", "beach", "sunset"]
        );
        assert_eq!(created[0].author_id, "user_1");
        assert_eq!(created[0].likes, 0);
        // newest first
        assert_eq!(store.pins()[0].id, created[0].id);
    }

    #[test]
    fn author_display_falls_back_for_synthetic_authors() {
        let store = make_store();
        let display = store.author_display("api_user");
        assert_eq!(display.id, "api_user");
        assert_eq!(display.name, "api_user");
        assert!(display.avatar.contains("api_user"));

        let known = store.author_display("user_1");
        assert_eq!(known.name, "John Doe");
    }
}
