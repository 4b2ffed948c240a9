//! 产品表的 PostgreSQL 实现

use super::PostgresRepository;
use crate::models::product::{ProductCreate, ProductInfo, ProductUpdate};
use crate::repositories::traits::ProductRepositoryTrait;
use crate::{DatabaseError, DatabaseResult};
use tracing::debug;

const PRODUCT_COLUMNS: &str =
    "id, name, slug, description, short_description, images, tech_stack, \
     project_url, github_url, featured, display_order, created_at, updated_at";

#[async_trait::async_trait]
impl ProductRepositoryTrait for PostgresRepository {
    async fn list_products(&self) -> DatabaseResult<Vec<ProductInfo>> {
        let sql = format!(
            "SELECT {PRODUCT_COLUMNS} FROM products \
             ORDER BY featured DESC, display_order ASC, created_at DESC"
        );
        let products = sqlx::query_as::<_, ProductInfo>(&sql)
            .fetch_all(self.pool())
            .await?;
        Ok(products)
    }

    async fn get_product_by_slug(&self, slug: &str) -> DatabaseResult<Option<ProductInfo>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE slug = $1");
        let product = sqlx::query_as::<_, ProductInfo>(&sql)
            .bind(slug)
            .fetch_optional(self.pool())
            .await?;
        Ok(product)
    }

    async fn get_product_by_id(&self, id: i64) -> DatabaseResult<Option<ProductInfo>> {
        let sql = format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1");
        let product = sqlx::query_as::<_, ProductInfo>(&sql)
            .bind(id)
            .fetch_optional(self.pool())
            .await?;
        Ok(product)
    }

    async fn create_product(&self, product: ProductCreate) -> DatabaseResult<Option<ProductInfo>> {
        debug!("📝 创建产品: {}", product.slug);

        if self.get_product_by_slug(&product.slug).await?.is_some() {
            return Err(DatabaseError::DuplicateSlug(product.slug));
        }

        let sql = format!(
            "INSERT INTO products (name, slug, description, short_description, images, \
                                   tech_stack, project_url, github_url, featured, display_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {PRODUCT_COLUMNS}"
        );
        let created = sqlx::query_as::<_, ProductInfo>(&sql)
            .bind(&product.name)
            .bind(&product.slug)
            .bind(&product.description)
            .bind(&product.short_description)
            .bind(&product.images)
            .bind(&product.tech_stack)
            .bind(&product.project_url)
            .bind(&product.github_url)
            .bind(product.featured)
            .bind(product.display_order)
            .fetch_one(self.pool())
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    DatabaseError::DuplicateSlug(product.slug.clone())
                }
                _ => DatabaseError::from(e),
            })?;

        debug!("✅ 产品创建成功: id={}", created.id);
        Ok(Some(created))
    }

    async fn update_product(&self, id: i64, update: ProductUpdate) -> DatabaseResult<bool> {
        debug!("🔄 更新产品 {}: {}", id, update.slug);

        // id 不存在直接返回 false，优先于 slug 冲突检查
        if self.get_product_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let taken = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM products WHERE slug = $1 AND id <> $2",
        )
        .bind(&update.slug)
        .bind(id)
        .fetch_optional(self.pool())
        .await?;
        if taken.is_some() {
            return Err(DatabaseError::DuplicateSlug(update.slug));
        }

        let result = sqlx::query(
            "UPDATE products \
             SET name = $2, slug = $3, description = $4, short_description = $5, \
                 images = coalesce($6, images), \
                 tech_stack = $7, project_url = $8, github_url = $9, \
                 featured = $10, display_order = $11, updated_at = now() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(&update.name)
        .bind(&update.slug)
        .bind(&update.description)
        .bind(&update.short_description)
        .bind(&update.images)
        .bind(&update.tech_stack)
        .bind(&update.project_url)
        .bind(&update.github_url)
        .bind(update.featured)
        .bind(update.display_order)
        .execute(self.pool())
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_product(&self, id: i64) -> DatabaseResult<bool> {
        debug!("🗑️ 删除产品: {}", id);

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_products(&self) -> DatabaseResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(self.pool())
            .await?;
        Ok(count)
    }
}
