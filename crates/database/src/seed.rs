//! 种子数据初始化
//!
//! 每次冷启动都可以安全调用：先检查"是否已存在"，不存在才插入，
//! 绝不会把用户已自定义的资料或密码重置回默认值。
//!
//! 密码哈希由调用方提前计算好传入，本模块不接触明文密码。

use crate::models::admin::AdminCreate;
use crate::models::profile::ProfileInfo;
use crate::repositories::traits::ContentRepositoryTrait;
use crate::DatabaseResult;
use tracing::info;

/// 默认管理员的种子参数
///
/// username/email 来自配置，`password_hash` 是已经计算好的不透明凭据
pub struct SeedAdmin {
    pub username: String,
    pub password_hash: String,
    pub email: String,
}

/// 确保默认管理员和默认个人资料存在
///
/// 幂等：重复调用不会产生第二个管理员，也不会覆盖已有资料。
/// 数据库未配置时各操作降级为 no-op，这里同样安全。
pub async fn ensure_seed_data<R: ContentRepositoryTrait>(
    repo: &R,
    admin: SeedAdmin,
) -> DatabaseResult<()> {
    if repo.count_admins().await? == 0 {
        let created = repo
            .create_admin(AdminCreate {
                username: admin.username.clone(),
                password_hash: admin.password_hash,
                email: admin.email,
            })
            .await?;
        if created.is_some() {
            info!("✅ 默认管理员已创建: {}", admin.username);
        }
    }

    if repo.get_profile().await?.is_none() {
        repo.insert_profile(ProfileInfo::default_seed()).await?;
        info!("✅ 默认个人资料已创建");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::ProfileUpdate;
    use crate::repositories::json_file::JsonFileRepository;
    use crate::repositories::traits::{AdminRepositoryTrait, ProfileRepositoryTrait};
    use tempfile::TempDir;

    fn seed_admin() -> SeedAdmin {
        SeedAdmin {
            username: "admin".to_string(),
            password_hash: "$argon2id$fake-hash".to_string(),
            email: "admin@jianbing.dev".to_string(),
        }
    }

    #[tokio::test]
    async fn seeding_creates_admin_once() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::open(dir.path().join("site.json"))
            .await
            .unwrap();

        ensure_seed_data(&repo, seed_admin()).await.unwrap();
        assert_eq!(repo.count_admins().await.unwrap(), 1);
        let admin = repo.get_admin_by_username("admin").await.unwrap().unwrap();
        assert!(admin.last_login.is_none());

        // 再跑一次：不会出现第二个管理员
        ensure_seed_data(&repo, seed_admin()).await.unwrap();
        assert_eq!(repo.count_admins().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn seeding_does_not_reset_customized_profile() {
        let dir = TempDir::new().unwrap();
        let repo = JsonFileRepository::open(dir.path().join("site.json"))
            .await
            .unwrap();
        ensure_seed_data(&repo, seed_admin()).await.unwrap();

        let before = repo.get_profile().await.unwrap().unwrap();
        let update = ProfileUpdate {
            name: "自定义名字".to_string(),
            title: before.title.clone(),
            bio: before.bio.clone(),
            email: before.email.clone(),
            phone: before.phone.clone(),
            location: before.location.clone(),
            github: before.github.clone(),
            twitter: before.twitter.clone(),
            linkedin: before.linkedin.clone(),
            wechat: before.wechat.clone(),
            skills: before.skills.clone(),
            avatar: None,
        };
        assert!(repo.update_profile(update).await.unwrap());

        ensure_seed_data(&repo, seed_admin()).await.unwrap();
        let after = repo.get_profile().await.unwrap().unwrap();
        assert_eq!(after.name, "自定义名字");
    }
}
