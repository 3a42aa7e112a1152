// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        authorization::ensure_admin,
        dto::CallerOrigin,
        ports::{AdminGatePort, ArticleIdGeneratorPort},
    },
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

/// Admin-only article mutations. Every command consults the admin gate
/// before touching the store.
pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) admin_gate: Arc<AdminGatePort>,
    pub(super) id_generator: Arc<ArticleIdGeneratorPort>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        admin_gate: Arc<AdminGatePort>,
        id_generator: Arc<ArticleIdGeneratorPort>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            admin_gate,
            id_generator,
        }
    }

    /// Run only the admin gate. Lets the HTTP layer reject a non-admin before
    /// it reports anything about a request body it could not decode.
    pub async fn authorize(&self, origin: &CallerOrigin) -> ApplicationResult<()> {
        ensure_admin(self.admin_gate.as_ref(), origin).await
    }
}
