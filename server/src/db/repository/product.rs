//! Product Repository
//!
//! Products are keyed by name (the original catalog uses the name as
//! primary key), so every lookup addresses the record id directly.

use super::{BaseRepository, RepoError, RepoResult, strip_table};
use crate::db::models::{Product, ProductCreate, ProductUpdate};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "product";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn record_id(name: &str) -> RecordId {
        RecordId::from_table_key(TABLE, strip_table(name, TABLE))
    }

    /// Find all products
    pub async fn find_all(&self) -> RepoResult<Vec<Product>> {
        let products: Vec<Product> = self
            .base
            .db()
            .query("SELECT * FROM product ORDER BY name")
            .await?
            .take(0)?;
        Ok(products)
    }

    /// Find product by name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Product>> {
        let product: Option<Product> = self.base.db().select(Self::record_id(name)).await?;
        Ok(product)
    }

    /// Check whether a product exists
    pub async fn exists(&self, name: &str) -> RepoResult<bool> {
        Ok(self.find_by_name(name).await?.is_some())
    }

    /// Resolve a batch of product names, failing on the first unknown one
    pub async fn find_by_names(&self, names: &[String]) -> RepoResult<Vec<Product>> {
        let mut products = Vec::with_capacity(names.len());
        for name in names {
            let product = self.find_by_name(name).await?.ok_or_else(|| {
                RepoError::NotFound(format!("Product with name {} does not exist", name))
            })?;
            products.push(product);
        }
        Ok(products)
    }

    /// Create a new product
    pub async fn create(&self, data: ProductCreate) -> RepoResult<Product> {
        if self.exists(&data.name).await? {
            return Err(RepoError::Duplicate(format!(
                "Product '{}' already exists",
                data.name
            )));
        }

        let product = Product {
            id: None,
            name: data.name.clone(),
            price: data.price,
            category: data.category,
        };

        let created: Option<Product> = self
            .base
            .db()
            .create(Self::record_id(&data.name))
            .content(product)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Update a product's price and category (the name is the key)
    pub async fn update(&self, name: &str, data: ProductUpdate) -> RepoResult<Product> {
        let existing = self
            .find_by_name(name)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", name)))?;

        let price = data.price.unwrap_or(existing.price);
        let category = data.category.or(existing.category);

        self.base
            .db()
            .query("UPDATE $thing SET price = $price, category = $category")
            .bind(("thing", Self::record_id(name)))
            .bind(("price", price))
            .bind(("category", category))
            .await?;

        self.find_by_name(name)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product {} not found", name)))
    }

    /// Hard delete a product
    pub async fn delete(&self, name: &str) -> RepoResult<bool> {
        let deleted: Option<Product> = self.base.db().delete(Self::record_id(name)).await?;
        Ok(deleted.is_some())
    }
}
