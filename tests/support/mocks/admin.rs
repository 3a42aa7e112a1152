// tests/support/mocks/admin.rs
use async_trait::async_trait;
use gamenews::application::{dto::CallerOrigin, ports::security::AdminGate};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Gate with a fixed set of trusted addresses. Counts lookups so tests can
/// check the gate is consulted on every call.
pub struct StaticAdminGate {
    admins: HashSet<String>,
    lookups: AtomicUsize,
}

impl StaticAdminGate {
    pub fn new<I, S>(admins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            admins: admins.into_iter().map(Into::into).collect(),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AdminGate for StaticAdminGate {
    async fn is_admin(&self, origin: &CallerOrigin) -> bool {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.admins.contains(origin.as_str())
    }
}
