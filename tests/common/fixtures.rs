//! Shared fixtures: in-memory fakes for the ports and builders for common
//! test data.
#![allow(dead_code)] // Not every suite uses every fixture

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;

use interest_core::config::IngestionSettings;
use interest_core::ingestion::{
    IngestionManager, SearchApi, SearchApiError, SearchHit, SearchPage, SearchRequest,
    TopicStrategy,
};
use interest_core::notify::Notifier;
use interest_core::persistence::NullSnapshotStore;
use interest_core::store::{AppStore, MediaKind, Pin};

/// Notifier that records every message for later assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

/// Search API fake backed by a queue of canned responses. Records every
/// request it sees. An empty queue yields empty pages.
#[derive(Default)]
pub struct FakeSearchApi {
    responses: Mutex<VecDeque<Result<SearchPage, SearchApiError>>>,
    requests: Mutex<Vec<SearchRequest>>,
}

impl FakeSearchApi {
    pub fn push_page(&self, hits: Vec<SearchHit>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(SearchPage { hits }));
    }

    pub fn push_failure(&self, status: u16) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(SearchApiError::Status(status)));
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SearchApi for FakeSearchApi {
    async fn search(&self, request: &SearchRequest) -> Result<SearchPage, SearchApiError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(SearchPage::default()))
    }
}

/// Topic strategy that cycles through a fixed sequence.
pub struct FixedTopics {
    topics: Vec<String>,
    next: Mutex<usize>,
}

impl FixedTopics {
    pub fn new(topics: &[&str]) -> Self {
        Self {
            topics: topics.iter().map(|t| t.to_string()).collect(),
            next: Mutex::new(0),
        }
    }
}

impl TopicStrategy for FixedTopics {
    fn next_topic(&self) -> String {
        let mut next = self.next.lock().unwrap();
        let topic = self.topics[*next % self.topics.len()].clone();
        *next += 1;
        topic
    }
}

/// Store with no persistence and no notifications, seeded with the demo
/// catalog.
pub fn make_store() -> Arc<AppStore> {
    Arc::new(AppStore::new(
        Arc::new(NullSnapshotStore),
        Arc::new(RecordingNotifier::default()),
    ))
}

/// Store plus a recording notifier to assert on user notices.
pub fn make_store_with_notifier() -> (Arc<AppStore>, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::default());
    let store = Arc::new(AppStore::new(Arc::new(NullSnapshotStore), notifier.clone()));
    (store, notifier)
}

/// Ingestion manager over fakes, with default settings.
pub fn make_ingestor(
    store: Arc<AppStore>,
    api: Arc<FakeSearchApi>,
    topics: Arc<FixedTopics>,
) -> Arc<IngestionManager> {
    Arc::new(IngestionManager::new(
        api,
        store,
        topics,
        IngestionSettings::default(),
    ))
}

pub fn make_pin(id: &str) -> Pin {
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

pub fn make_hit(id: u64) -> SearchHit {
    SearchHit {
        id,
        tags: "temple, religion, india".to_string(),
        user: "uploader".to_string(),
        large_image_url: format!("https://pixabay.com/get/{}.jpg", id),
        image_width: Some(1080),
        image_height: Some(1920),
        likes: Some(64),
    }
}
