//! Generic CRUD over typed records.

use crate::{
    attachment,
    model::{Record, Stored, validate_required},
};
use galley_core::{
    CREATED_AT, UPDATED_AT,
    document::DocId,
    error::Error,
    obs::{self, MetricsEvent},
    project::LookupCache,
    store::{DocumentStore, ObjectStore},
    value::Timestamp,
};
use tracing::{debug, warn};

///
/// Repository
///
/// Every write is validated client-side first; nothing reaches the store
/// for a record with a missing required field.
///

#[derive(Clone, Copy, Debug)]
pub struct Repository<'a, S> {
    store: &'a S,
}

impl<'a, S: DocumentStore> Repository<'a, S> {
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Insert `record` under a freshly minted id, stamped with `createdAt`.
    pub async fn create<R: Record>(&self, record: &R) -> Result<DocId, Error> {
        let id = DocId::generate();
        let mut document = record.to_document(id.clone())?;
        validate_required(R::COLLECTION, R::REQUIRED, &document)?;
        document.set(CREATED_AT, Timestamp::now());

        self.store.insert(R::COLLECTION, document).await?;
        debug!(collection = R::COLLECTION, %id, "record created");

        Ok(id)
    }

    /// Merge `record` into the stored document, stamped with `updatedAt`.
    pub async fn update<R: Record>(&self, id: &DocId, record: &R) -> Result<(), Error> {
        let mut document = record.to_document(id.clone())?;
        validate_required(R::COLLECTION, R::REQUIRED, &document)?;
        document.set(UPDATED_AT, Timestamp::now());

        self.store.update(R::COLLECTION, document).await?;
        debug!(collection = R::COLLECTION, %id, "record updated");

        Ok(())
    }

    /// Like `update`, also dropping the cached copy used by joins.
    pub async fn update_cached<R: Record>(
        &self,
        id: &DocId,
        record: &R,
        cache: &mut LookupCache,
    ) -> Result<(), Error> {
        self.update(id, record).await?;
        cache.invalidate(R::COLLECTION, id);

        Ok(())
    }

    pub async fn get<R: Record>(&self, id: &DocId) -> Result<Option<Stored<R>>, Error> {
        let Some(document) = self.store.get(R::COLLECTION, id).await? else {
            return Ok(None);
        };

        Ok(Some(Stored::from_document(&document)?))
    }

    /// Every record of a small reference collection, such as categories.
    pub async fn list_all<R: Record>(&self) -> Result<Vec<Stored<R>>, Error> {
        let documents = self.store.list(R::COLLECTION).await?;

        documents
            .iter()
            .map(|document| Stored::<R>::from_document(document).map_err(Error::from))
            .collect()
    }
}

impl<S: DocumentStore + ObjectStore> Repository<'_, S> {
    /// Upload `images` as `<collection>/<id>_<n>` and return their paths.
    pub async fn upload_images(
        &self,
        collection: &str,
        id: &DocId,
        images: Vec<Vec<u8>>,
    ) -> Result<Vec<String>, Error> {
        let paths = attachment::numbered(collection, id, images.len());
        for (path, bytes) in paths.iter().zip(images) {
            self.store.upload(path, bytes).await?;
        }

        Ok(paths)
    }

    pub async fn upload_attachment(&self, path: &str, bytes: Vec<u8>) -> Result<(), Error> {
        self.store.upload(path, bytes).await?;

        Ok(())
    }

    /// Delete the document, then its attachments.
    ///
    /// Attachment deletes are best-effort: a failure leaves an orphaned
    /// object, which is logged and counted but never returned.
    pub async fn delete<R: Record>(&self, id: &DocId) -> Result<(), Error> {
        let attachments = match self.store.get(R::COLLECTION, id).await? {
            Some(document) => R::from_document(&document)?.attachments(id),
            None => Vec::new(),
        };

        self.store.delete(R::COLLECTION, id).await?;
        debug!(collection = R::COLLECTION, %id, "record deleted");

        for path in attachments {
            if let Err(err) = self.store.delete_object(&path).await {
                warn!(
                    collection = R::COLLECTION,
                    %id,
                    path = %path,
                    error = %err,
                    "orphaned attachment"
                );
                obs::record(MetricsEvent::OrphanedObject);
            }
        }

        Ok(())
    }
}
