//! Built-in demo catalog used when no snapshot exists yet.
//!
//! A fresh install starts with two well-known accounts and a generated set
//! of demo pins so the feed is never empty before the first ingestion.

use std::collections::HashMap;

use chrono::{Duration, Utc};
use rand::Rng;

use super::models::{Comment, MediaKind, Pin, User, UserRole};

/// Fixed category catalog. Doubles as the tag pool for demo pins and as the
/// suggestion list the UI renders above the feed.
pub const CATEGORIES: &[&str] = &[
    "Hindu Gods",
    "Lord Shiva",
    "Lord Krishna",
    "Shri Ram",
    "Hanuman Ji",
    "Ganesha",
    "Goddess Lakshmi",
    "Saraswati",
    "Durga Mata",
    "Nature 4K",
    "Tech Hacks",
    "Art HD",
    "Architecture",
    "Street Food",
    "Fashion Trends",
    "Travel World",
    "Anime 4K",
    "Super Cars",
    "Inspirational Quotes",
    "Fitness Motivation",
    "Decor Ideas",
    "Gaming Setup",
    "Music Legends",
    "Photography Tips",
    "Love Feelings",
    "Meditation",
];

/// Well-known author id for administratively seeded content.
pub const ADMIN_USER_ID: &str = "admin_1";

const DEMO_PIN_COUNT: usize = 50;

/// The two built-in accounts every fresh install starts with.
pub fn demo_users() -> HashMap<String, User> {
    let mut users = HashMap::new();
    users.insert(
        "user_1".to_string(),
        User {
            id: "user_1".to_string(),
            username: "john_doe".to_string(),
            name: "John Doe".to_string(),
            avatar: "https://i.pravatar.cc/150?u=user_1".to_string(),
            bio: "Photography enthusiast.".to_string(),
            followers: 120,
            following: 45,
            role: UserRole::User,
        },
    );
    users.insert(
        ADMIN_USER_ID.to_string(),
        User {
            id: ADMIN_USER_ID.to_string(),
            username: "admin_master".to_string(),
            name: "Admin User".to_string(),
            avatar: format!("https://i.pravatar.cc/150?u={}", ADMIN_USER_ID),
            bio: "Platform Administrator".to_string(),
            followers: 99999,
            following: 1,
            role: UserRole::Admin,
        },
    );
    users
}

/// Generates the demo pin set: a mix of devotional imagery and random stock
/// photos, portrait-biased for the masonry layout.
pub fn generate_demo_pins() -> Vec<Pin> {
    let mut rng = rand::rng();
    let mut pins = Vec::with_capacity(DEMO_PIN_COUNT);

    for i in 1..=DEMO_PIN_COUNT {
        let is_portrait = rng.random_bool(0.6);
        let width = 800u32;
        let height: u32 = if is_portrait {
            rng.random_range(900..1200)
        } else {
            rng.random_range(500..700)
        };

        let is_devotional = i % 3 == 0;
        let image_url = if is_devotional {
            format!(
                "https://images.unsplash.com/photo-1582213782179-e0d53f98f2ca?auto=format&fit=crop&q=80&w={}&h={}&random={}",
                width, height, i
            )
        } else {
            format!("https://picsum.photos/seed/{}/{}/{}", i + 100, width, height)
        };

        let primary = if is_devotional {
            CATEGORIES[rng.random_range(0..6)]
        } else {
            CATEGORIES[rng.random_range(0..CATEGORIES.len())]
        };
        let secondary = CATEGORIES[rng.random_range(0..CATEGORIES.len())];

        let mut tags = vec![primary.to_string()];
        for tag in [secondary, "HD", "Wallpaper"] {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }

        let prefix = if is_devotional { "Divine" } else { "Inspiring" };
        let created_at = Utc::now() - Duration::seconds(rng.random_range(0..10_000_000));

        pins.push(Pin {
            id: format!("pin_{}", i),
            title: format!("{} {} {}", prefix, primary, i),
            description: format!("A beautiful high quality HD wallpaper of {}", primary),
            image_url,
            kind: MediaKind::Image,
            width,
            height,
            author_id: if i % 10 == 0 {
                ADMIN_USER_ID.to_string()
            } else {
                "user_1".to_string()
            },
            tags,
            likes: rng.random_range(0..5000),
            comments: vec![Comment {
                id: format!("c_{}_1", i),
                user_id: "user_1".to_string(),
                text: "Love this so much!".to_string(),
                created_at: Utc::now() - Duration::seconds(10_000),
            }],
            created_at,
            nsfw: false,
            hidden: false,
        });
    }
    pins
}
