// tests/support/mocks/util.rs
use chrono::NaiveDateTime;
use gamenews::application::ports::util::ArticleIdGenerator;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicU64, Ordering};

static FIXED_PUBLISH_DATE: Lazy<NaiveDateTime> = Lazy::new(|| {
    NaiveDateTime::parse_from_str("2023-04-16 16:41:00", "%Y-%m-%d %H:%M:%S")
        .expect("invalid date in tests/support/mocks/util.rs")
});

pub fn fixed_publish_date() -> NaiveDateTime {
    *FIXED_PUBLISH_DATE
}

/// Hands out `generated-1`, `generated-2`, ...
#[derive(Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl ArticleIdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("generated-{n}")
    }
}
