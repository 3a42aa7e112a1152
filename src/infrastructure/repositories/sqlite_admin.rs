use super::error::{is_unique_violation, map_sqlx};
use crate::domain::admin::{AdminRecord, AdminRepository};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteAdminRepository {
    pool: SqlitePool,
}

impl SqliteAdminRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AdminRow {
    id: String,
    ip: String,
}

impl TryFrom<AdminRow> for AdminRecord {
    type Error = DomainError;

    fn try_from(row: AdminRow) -> Result<Self, Self::Error> {
        AdminRecord::new(row.id, row.ip)
    }
}

#[async_trait]
impl AdminRepository for SqliteAdminRepository {
    async fn find_by_ip(&self, ip: &str) -> DomainResult<Option<AdminRecord>> {
        let row = sqlx::query_as::<_, AdminRow>("SELECT id, ip FROM admins WHERE ip = ?")
            .bind(ip)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(AdminRecord::try_from).transpose()
    }

    async fn insert(&self, admin: &AdminRecord) -> DomainResult<bool> {
        let result = sqlx::query("INSERT INTO admins (id, ip) VALUES (?, ?)")
            .bind(admin.id.as_str())
            .bind(admin.ip.as_str())
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) => Ok(done.rows_affected() == 1),
            Err(err) if is_unique_violation(&err) => Ok(false),
            Err(err) => Err(map_sqlx(err)),
        }
    }
}
