//! Repository for the `products` table.

use chrono::Utc;
use shoplite_core::{Price, ProductId};
use sqlx::SqlitePool;

use crate::models::Product;

use super::RepositoryError;

/// Fields accepted when creating a product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: Price,
}

/// Typed access to stored products.
pub struct ProductRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ProductRepository<'a> {
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all products in insertion order.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, title, description, price, created_at, updated_at
             FROM products
             ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    /// Fetch a single product by id.
    pub async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, title, description, price, created_at, updated_at
             FROM products
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(product)
    }

    /// Insert a new product and return the stored row.
    pub async fn create(&self, new: NewProduct) -> Result<Product, RepositoryError> {
        let now = Utc::now();
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (title, description, price, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?)
             RETURNING id, title, description, price, created_at, updated_at",
        )
        .bind(new.title)
        .bind(new.description)
        .bind(new.price)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(product)
    }

    /// Update a product's title and description.
    ///
    /// The price is not editable after creation, so it is absent here.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no row matches `id`.
    pub async fn update_details(
        &self,
        id: ProductId,
        title: &str,
        description: &str,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE products SET title = ?, description = ?, updated_at = ? WHERE id = ?",
        )
        .bind(title)
        .bind(description)
        .bind(Utc::now())
        .bind(id)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    /// Delete a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::NotFound`] if no row matches `id`.
    pub async fn delete(&self, id: ProductId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn sample(title: &str, price: &str) -> NewProduct {
        NewProduct {
            title: title.to_string(),
            description: format!("Description of {title}"),
            price: Price::parse(price).expect("valid price"),
        }
    }

    #[tokio::test]
    async fn create_then_list_returns_the_product() {
        let pool = test_pool().await;
        let repo = ProductRepository::new(&pool);

        let created = repo.create(sample("Laptop", "999.99")).await.expect("create");
        assert_eq!(created.title, "Laptop");
        assert_eq!(created.price, Price::parse("999.99").expect("valid price"));
        assert_eq!(created.created_at, created.updated_at);

        let all = repo.list().await.expect("list");
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, created.id);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let pool = test_pool().await;
        let repo = ProductRepository::new(&pool);

        repo.create(sample("First", "1.00")).await.expect("create");
        repo.create(sample("Second", "2.00")).await.expect("create");
        repo.create(sample("Third", "3.00")).await.expect("create");

        let titles: Vec<String> = repo
            .list()
            .await
            .expect("list")
            .into_iter()
            .map(|p| p.title)
            .collect();
        assert_eq!(titles, ["First", "Second", "Third"]);
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let pool = test_pool().await;
        let repo = ProductRepository::new(&pool);

        let found = repo.get(ProductId::new(42)).await.expect("get");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn update_changes_details_but_not_price() {
        let pool = test_pool().await;
        let repo = ProductRepository::new(&pool);

        let created = repo.create(sample("Laptop", "999.99")).await.expect("create");
        repo.update_details(created.id, "Gaming laptop", "Now with RGB")
            .await
            .expect("update");

        let updated = repo.get(created.id).await.expect("get").expect("exists");
        assert_eq!(updated.title, "Gaming laptop");
        assert_eq!(updated.description, "Now with RGB");
        assert_eq!(updated.price, created.price);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let pool = test_pool().await;
        let repo = ProductRepository::new(&pool);

        let err = repo
            .update_details(ProductId::new(42), "Ghost", "Nothing here")
            .await
            .expect_err("should fail");
        assert!(matches!(err, RepositoryError::NotFound));
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let pool = test_pool().await;
        let repo = ProductRepository::new(&pool);

        let created = repo.create(sample("Laptop", "999.99")).await.expect("create");
        repo.delete(created.id).await.expect("delete");

        assert!(repo.get(created.id).await.expect("get").is_none());
        assert!(repo.list().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let pool = test_pool().await;
        let repo = ProductRepository::new(&pool);

        let err = repo.delete(ProductId::new(42)).await.expect_err("should fail");
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
