//! MongoDB Repository Implementation
//!
//! This module implements the `PersonRepository` trait using the official
//! MongoDB driver. It handles all collection operations and converts driver
//! errors to domain errors.

use std::time::Duration;

use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::Collection;
use tokio::time::timeout;
use tracing::{debug, error, info, instrument, warn};

use personas_domain::{Person, PersonError, PersonRepository};

/// Timeout budget for single-record operations
const SINGLE_OP_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout budget for full-collection reads, which may carry larger result sets
const FIND_ALL_TIMEOUT: Duration = Duration::from_secs(10);

/// MongoDB-based implementation of the PersonRepository port
///
/// This adapter translates domain storage operations into MongoDB driver
/// calls against a single typed collection. Records are keyed by the
/// business `document` field, not by the generated `_id`.
///
/// ## Configuration
///
/// The repository requires a `Collection<Person>` handle, built from a
/// connected `mongodb::Client` with the target database and collection names.
///
/// ## Error Handling
///
/// Every operation is bounded by a timeout; timeouts, connectivity loss and
/// driver faults all become `PersonError::Storage`. A `find_one` miss becomes
/// `PersonError::NotFound`, which the service layer depends on being able to
/// tell apart from other faults.
#[derive(Clone)]
pub struct MongoPersonRepository {
    collection: Collection<Person>,
}

impl MongoPersonRepository {
    /// Create a new MongoDB person repository
    ///
    /// # Arguments
    ///
    /// * `collection` - Typed handle to the person collection
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use mongodb::Client;
    /// use personas_mongo::MongoPersonRepository;
    ///
    /// # async fn example() -> mongodb::error::Result<()> {
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let collection = client.database("personas").collection("personas");
    /// let repo = MongoPersonRepository::new(collection);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(collection: Collection<Person>) -> Self {
        info!(collection = %collection.name(), "Initializing MongoPersonRepository");
        Self { collection }
    }

    /// Filter matching a single person by its business document key
    fn by_document(document: &str) -> Document {
        doc! { "document": document }
    }
}

impl PersonRepository for MongoPersonRepository {
    #[instrument(skip(self, person), fields(document = %person.document))]
    fn insert(
        &self,
        person: &Person,
    ) -> impl std::future::Future<Output = Result<(), PersonError>> + Send {
        let collection = self.collection.clone();
        let person = person.clone();

        async move {
            debug!("Inserting person record");

            match timeout(SINGLE_OP_TIMEOUT, collection.insert_one(&person)).await {
                Ok(Ok(_)) => {
                    info!("Successfully inserted person record");
                    Ok(())
                }
                Ok(Err(err)) => {
                    error!(error = ?err, "Failed to insert person record");
                    Err(PersonError::storage(format!(
                        "insert_one failed for document '{}': {}",
                        person.document, err
                    )))
                }
                Err(_) => {
                    error!("Insert timed out");
                    Err(PersonError::storage(format!(
                        "insert_one timed out after {}s",
                        SINGLE_OP_TIMEOUT.as_secs()
                    )))
                }
            }
        }
    }

    #[instrument(skip(self))]
    fn find_all(&self) -> impl std::future::Future<Output = Result<Vec<Person>, PersonError>> + Send {
        let collection = self.collection.clone();

        async move {
            debug!("Listing all person records");

            let listing = async {
                let cursor = collection.find(doc! {}).await?;
                cursor.try_collect::<Vec<Person>>().await
            };

            match timeout(FIND_ALL_TIMEOUT, listing).await {
                Ok(Ok(people)) => {
                    info!(count = people.len(), "Successfully listed person records");
                    Ok(people)
                }
                Ok(Err(err)) => {
                    error!(error = ?err, "Failed to list person records");
                    Err(PersonError::storage(format!("find failed: {}", err)))
                }
                Err(_) => {
                    error!("Listing timed out");
                    Err(PersonError::storage(format!(
                        "find timed out after {}s",
                        FIND_ALL_TIMEOUT.as_secs()
                    )))
                }
            }
        }
    }

    #[instrument(skip(self), fields(document = %document))]
    fn find_by_document(
        &self,
        document: &str,
    ) -> impl std::future::Future<Output = Result<Person, PersonError>> + Send {
        let collection = self.collection.clone();
        let document = document.to_string();

        async move {
            debug!("Looking up person by document");

            match timeout(
                SINGLE_OP_TIMEOUT,
                collection.find_one(Self::by_document(&document)),
            )
            .await
            {
                Ok(Ok(Some(person))) => {
                    debug!("Found person record");
                    Ok(person)
                }
                Ok(Ok(None)) => {
                    debug!("No person matches document");
                    Err(PersonError::NotFound)
                }
                Ok(Err(err)) => {
                    warn!(error = ?err, "Failed to look up person");
                    Err(PersonError::storage(format!(
                        "find_one failed for document '{}': {}",
                        document, err
                    )))
                }
                Err(_) => {
                    warn!("Lookup timed out");
                    Err(PersonError::storage(format!(
                        "find_one timed out after {}s",
                        SINGLE_OP_TIMEOUT.as_secs()
                    )))
                }
            }
        }
    }

    #[instrument(skip(self, person), fields(document = %document))]
    fn update(
        &self,
        document: &str,
        person: &Person,
    ) -> impl std::future::Future<Output = Result<(), PersonError>> + Send {
        let collection = self.collection.clone();
        let document = document.to_string();
        let person = person.clone();

        async move {
            debug!("Replacing person record");

            // A replace that matches no record succeeds as a no-op; the
            // match count is not inspected. Existence is the caller's
            // concern.
            match timeout(
                SINGLE_OP_TIMEOUT,
                collection.replace_one(Self::by_document(&document), &person),
            )
            .await
            {
                Ok(Ok(_)) => {
                    info!("Successfully replaced person record");
                    Ok(())
                }
                Ok(Err(err)) => {
                    error!(error = ?err, "Failed to replace person record");
                    Err(PersonError::storage(format!(
                        "replace_one failed for document '{}': {}",
                        document, err
                    )))
                }
                Err(_) => {
                    error!("Replace timed out");
                    Err(PersonError::storage(format!(
                        "replace_one timed out after {}s",
                        SINGLE_OP_TIMEOUT.as_secs()
                    )))
                }
            }
        }
    }

    #[instrument(skip(self), fields(document = %document))]
    fn delete(
        &self,
        document: &str,
    ) -> impl std::future::Future<Output = Result<(), PersonError>> + Send {
        let collection = self.collection.clone();
        let document = document.to_string();

        async move {
            debug!("Deleting person record");

            match timeout(
                SINGLE_OP_TIMEOUT,
                collection.delete_one(Self::by_document(&document)),
            )
            .await
            {
                Ok(Ok(_)) => {
                    info!("Successfully deleted person record");
                    Ok(())
                }
                Ok(Err(err)) => {
                    error!(error = ?err, "Failed to delete person record");
                    Err(PersonError::storage(format!(
                        "delete_one failed for document '{}': {}",
                        document, err
                    )))
                }
                Err(_) => {
                    error!("Delete timed out");
                    Err(PersonError::storage(format!(
                        "delete_one timed out after {}s",
                        SINGLE_OP_TIMEOUT.as_secs()
                    )))
                }
            }
        }
    }
}
