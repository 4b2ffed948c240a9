//! 个人资料表的 PostgreSQL 实现
//!
//! 资料是单例，固定存放在 id = 1 的行

use super::PostgresRepository;
use crate::models::profile::{ProfileInfo, ProfileUpdate};
use crate::repositories::traits::ProfileRepositoryTrait;
use crate::DatabaseResult;
use tracing::debug;

const PROFILE_COLUMNS: &str =
    "name, title, bio, email, phone, location, github, twitter, linkedin, \
     wechat, skills, avatar, updated_at";

#[async_trait::async_trait]
impl ProfileRepositoryTrait for PostgresRepository {
    async fn get_profile(&self) -> DatabaseResult<Option<ProfileInfo>> {
        let sql = format!("SELECT {PROFILE_COLUMNS} FROM profile WHERE id = 1");
        let profile = sqlx::query_as::<_, ProfileInfo>(&sql)
            .fetch_optional(self.pool())
            .await?;
        Ok(profile)
    }

    async fn insert_profile(&self, profile: ProfileInfo) -> DatabaseResult<()> {
        debug!("📝 插入默认个人资料");

        sqlx::query(
            "INSERT INTO profile (id, name, title, bio, email, phone, location, \
                                  github, twitter, linkedin, wechat, skills, avatar) \
             VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)",
        )
        .bind(&profile.name)
        .bind(&profile.title)
        .bind(&profile.bio)
        .bind(&profile.email)
        .bind(&profile.phone)
        .bind(&profile.location)
        .bind(&profile.github)
        .bind(&profile.twitter)
        .bind(&profile.linkedin)
        .bind(&profile.wechat)
        .bind(&profile.skills)
        .bind(&profile.avatar)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    async fn update_profile(&self, update: ProfileUpdate) -> DatabaseResult<bool> {
        debug!("🔄 更新个人资料");

        let result = sqlx::query(
            "UPDATE profile \
             SET name = $1, title = $2, bio = $3, email = $4, phone = $5, location = $6, \
                 github = $7, twitter = $8, linkedin = $9, wechat = $10, skills = $11, \
                 avatar = coalesce($12, avatar), updated_at = now() \
             WHERE id = 1",
        )
        .bind(&update.name)
        .bind(&update.title)
        .bind(&update.bio)
        .bind(&update.email)
        .bind(&update.phone)
        .bind(&update.location)
        .bind(&update.github)
        .bind(&update.twitter)
        .bind(&update.linkedin)
        .bind(&update.wechat)
        .bind(&update.skills)
        .bind(&update.avatar)
        .execute(self.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
