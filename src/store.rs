use anyhow::{Context, Result};
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection, Database};

use crate::config::Config;
use crate::image::ImageFile;
use crate::models::{Admin, Review, Service};

// Fixed collection names within the configured database
const SERVICES: &str = "services";
const REVIEWS: &str = "reviews";
const ORDERS: &str = "orders";
const ADMINS: &str = "admins";

/// Shareable document store client for use across async handlers
///
/// Wraps one `mongodb::Client` created at startup and held for the process
/// lifetime. The driver pools connections internally, so clones of this
/// handle share the same underlying topology.
#[derive(Clone)]
pub struct StoreClient {
    client: Client,
    db: Database,
}

impl StoreClient {
    /// Create a client from configuration and verify the connection.
    ///
    /// The initial ping must succeed; a caller that cannot reach the store
    /// is expected to treat this as fatal rather than serve requests
    /// against a broken connection.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let client = Client::with_uri_str(&config.mongodb_uri)
            .await
            .context("Failed to create MongoDB client")?;

        let db = client.database(&config.db_name);

        db.run_command(doc! { "ping": 1 })
            .await
            .context("Initial ping to MongoDB failed")?;

        tracing::info!("Connected to MongoDB database: {}", config.db_name);

        Ok(Self { client, db })
    }

    /// Close the connection. Called once on shutdown.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        tracing::info!("MongoDB connection closed");
    }

    fn services(&self) -> Collection<Service> {
        self.db.collection(SERVICES)
    }

    fn reviews(&self) -> Collection<Review> {
        self.db.collection(REVIEWS)
    }

    fn orders(&self) -> Collection<Document> {
        self.db.collection(ORDERS)
    }

    fn admins(&self) -> Collection<Admin> {
        self.db.collection(ADMINS)
    }

    /// Insert a service with its image record. Returns whether the insert
    /// occurred; the generated id is not reported back.
    pub async fn insert_service(
        &self,
        title: &str,
        description: &str,
        image: &ImageFile,
    ) -> Result<bool> {
        let document = doc! {
            "title": title,
            "description": description,
            "image": image.to_bson(),
        };

        self.db
            .collection::<Document>(SERVICES)
            .insert_one(document)
            .await
            .context("Failed to insert service")?;

        tracing::debug!("Inserted service '{}'", title);
        Ok(true)
    }

    pub async fn list_services(&self) -> Result<Vec<Service>> {
        let cursor = self
            .services()
            .find(doc! {})
            .await
            .context("Failed to query services")?;

        cursor
            .try_collect()
            .await
            .context("Failed to read services cursor")
    }

    pub async fn find_service(&self, id: ObjectId) -> Result<Option<Service>> {
        self.services()
            .find_one(doc! { "_id": id })
            .await
            .context("Failed to query service by id")
    }

    /// Insert a review; the image field is only present when an upload
    /// accompanied the review.
    pub async fn insert_review(
        &self,
        name: &str,
        description: &str,
        designation: &str,
        image: Option<&ImageFile>,
    ) -> Result<bool> {
        let mut document = doc! {
            "name": name,
            "description": description,
            "designation": designation,
        };
        if let Some(image) = image {
            document.insert("image", image.to_bson());
        }

        self.db
            .collection::<Document>(REVIEWS)
            .insert_one(document)
            .await
            .context("Failed to insert review")?;

        tracing::debug!("Inserted review from '{}'", name);
        Ok(true)
    }

    pub async fn list_reviews(&self) -> Result<Vec<Review>> {
        let cursor = self
            .reviews()
            .find(doc! {})
            .await
            .context("Failed to query reviews")?;

        cursor
            .try_collect()
            .await
            .context("Failed to read reviews cursor")
    }

    /// Insert an order document verbatim, whatever fields the caller sent.
    pub async fn insert_order(&self, order: Document) -> Result<bool> {
        self.orders()
            .insert_one(order)
            .await
            .context("Failed to insert order")?;

        Ok(true)
    }

    pub async fn orders_by_email(&self, email: &str) -> Result<Vec<Document>> {
        let cursor = self
            .orders()
            .find(doc! { "email": email })
            .await
            .context("Failed to query orders by email")?;

        cursor
            .try_collect()
            .await
            .context("Failed to read orders cursor")
    }

    pub async fn list_orders(&self) -> Result<Vec<Document>> {
        let cursor = self
            .orders()
            .find(doc! {})
            .await
            .context("Failed to query orders")?;

        cursor
            .try_collect()
            .await
            .context("Failed to read orders cursor")
    }

    /// Set the status of one order. Returns whether a document actually
    /// changed, so updating a nonexistent id reports `false` rather than
    /// an error.
    pub async fn set_order_status(&self, id: ObjectId, status: &str) -> Result<bool> {
        let result = self
            .orders()
            .update_one(doc! { "_id": id }, doc! { "$set": { "status": status } })
            .await
            .context("Failed to update order status")?;

        tracing::debug!(
            "Status update for order {}: matched {}, modified {}",
            id,
            result.matched_count,
            result.modified_count
        );
        Ok(result.modified_count > 0)
    }

    /// Append an admin email. No uniqueness is enforced; inserting the same
    /// email twice yields two entries.
    pub async fn insert_admin(&self, email: &str) -> Result<bool> {
        self.db
            .collection::<Document>(ADMINS)
            .insert_one(doc! { "email": email })
            .await
            .context("Failed to insert admin")?;

        tracing::debug!("Inserted admin '{}'", email);
        Ok(true)
    }

    pub async fn list_admins(&self) -> Result<Vec<Admin>> {
        let cursor = self
            .admins()
            .find(doc! {})
            .await
            .context("Failed to query admins")?;

        cursor
            .try_collect()
            .await
            .context("Failed to read admins cursor")
    }
}
