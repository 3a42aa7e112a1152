use std::sync::Arc;

use crate::{
    application::ports::AdminGatePort,
    domain::article::{ArticleReadRepository, PageSize},
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) admin_gate: Arc<AdminGatePort>,
    pub(super) page_size: PageSize,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        admin_gate: Arc<AdminGatePort>,
        page_size: PageSize,
    ) -> Self {
        Self {
            read_repo,
            admin_gate,
            page_size,
        }
    }
}
