//! 管理员表的 PostgreSQL 实现

use super::PostgresRepository;
use crate::models::admin::{AdminCreate, AdminInfo};
use crate::repositories::traits::AdminRepositoryTrait;
use crate::DatabaseResult;
use tracing::debug;

const ADMIN_COLUMNS: &str = "id, username, password_hash, email, created_at, last_login";

#[async_trait::async_trait]
impl AdminRepositoryTrait for PostgresRepository {
    async fn get_admin_by_username(&self, username: &str) -> DatabaseResult<Option<AdminInfo>> {
        let sql = format!("SELECT {ADMIN_COLUMNS} FROM admins WHERE username = $1");
        let admin = sqlx::query_as::<_, AdminInfo>(&sql)
            .bind(username)
            .fetch_optional(self.pool())
            .await?;
        Ok(admin)
    }

    async fn count_admins(&self) -> DatabaseResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admins")
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }

    async fn create_admin(&self, admin: AdminCreate) -> DatabaseResult<Option<AdminInfo>> {
        debug!("📝 创建管理员: {}", admin.username);

        let sql = format!(
            "INSERT INTO admins (username, password_hash, email) \
             VALUES ($1, $2, $3) \
             RETURNING {ADMIN_COLUMNS}"
        );
        let created = sqlx::query_as::<_, AdminInfo>(&sql)
            .bind(&admin.username)
            .bind(&admin.password_hash)
            .bind(&admin.email)
            .fetch_one(self.pool())
            .await?;
        Ok(Some(created))
    }

    async fn update_admin_last_login(&self, id: i64) -> DatabaseResult<()> {
        sqlx::query("UPDATE admins SET last_login = now() WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(())
    }
}
