use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{AdminGatePort, ArticleIdGeneratorPort},
        queries::articles::ArticleQueryService,
    },
    domain::article::{ArticleReadRepository, ArticleWriteRepository, PageSize},
};

/// Entry point the presentation layer talks to.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        admin_gate: Arc<AdminGatePort>,
        id_generator: Arc<ArticleIdGeneratorPort>,
        page_size: PageSize,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            article_write_repo,
            Arc::clone(&article_read_repo),
            Arc::clone(&admin_gate),
            id_generator,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            article_read_repo,
            admin_gate,
            page_size,
        ));

        Self {
            article_commands,
            article_queries,
        }
    }
}
