//! The document store: discovered documents plus the cached post collection.

use std::{collections::HashMap, sync::Arc};

use quire_document::{
    Clock, DocumentError, Post, PostMetadata, SystemClock, parse_post, slug_from_identifier,
};
use quire_query::{Page, PageRequest, paginate, search, sort_by_recency};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::{DocumentSource, StoreError};

/// A document that was excluded from the collection, and why.
#[derive(Debug)]
pub struct LoadFailure {
    /// Slug of the document, or its identifier when no slug could be derived.
    pub slug: String,
    /// What went wrong.
    pub error: DocumentError,
}

/// The materialized, recency-ordered post collection.
#[derive(Debug, Default)]
pub struct Collection {
    /// Posts, newest first. Ties keep discovery order.
    pub posts: Vec<PostMetadata>,
    /// Documents excluded while building the collection.
    pub failures: Vec<LoadFailure>,
}

impl Collection {
    /// Number of posts.
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Returns true if there are no posts.
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        quire_query::categories(&self.posts)
    }

    /// Distinct tags in first-seen order.
    pub fn tags(&self) -> Vec<String> {
        quire_query::tags(&self.posts)
    }

    /// Posts matching `query`, still newest first. A blank query matches everything.
    pub fn search(&self, query: &str) -> Vec<&PostMetadata> {
        search(query, &self.posts)
    }

    /// One page of the collection.
    pub fn page(&self, request: PageRequest) -> Page<PostMetadata> {
        paginate(&self.posts, request)
    }
}

/// A discovered document whose slug was accepted.
#[derive(Debug, Clone)]
struct Entry {
    /// Post slug.
    slug: String,
    /// Storage identifier within the source.
    identifier: String,
}

/// A discovered document rejected before reading.
#[derive(Debug, Clone)]
struct Rejected {
    /// Storage identifier within the source.
    identifier: String,
    /// Slug already claimed by an earlier document, if that was the reason.
    duplicate_of: Option<String>,
}

impl Rejected {
    /// Builds the failure reported for this document.
    fn to_failure(&self) -> LoadFailure {
        match &self.duplicate_of {
            Some(slug) => LoadFailure {
                slug: slug.clone(),
                error: DocumentError::DuplicateSlug {
                    slug: slug.clone(),
                    identifier: self.identifier.clone(),
                },
            },
            None => LoadFailure {
                slug: self.identifier.clone(),
                error: DocumentError::NoSlug {
                    identifier: self.identifier.clone(),
                },
            },
        }
    }
}

/// Posts from one [`DocumentSource`], with a single-flight cache of the full collection.
///
/// The set of documents is enumerated once, at [`open`](Self::open). The collection is built on
/// the first [`list_all`](Self::list_all) and reused until [`invalidate`](Self::invalidate).
/// [`get`](Self::get) always reads the source directly, so a post without a `date` header can
/// show a different defaulted date there than in the cached collection if the day changed in
/// between.
pub struct DocumentStore<S> {
    /// Where documents are read from.
    source: S,
    /// Accepted documents in discovery order.
    entries: Vec<Entry>,
    /// Slug to index into `entries`.
    by_slug: HashMap<String, usize>,
    /// Documents rejected at discovery.
    rejected: Vec<Rejected>,
    /// Supplies the default date for posts without one.
    clock: Arc<dyn Clock>,
    /// The cached collection. Held locked while it is being built.
    cache: Mutex<Option<Arc<Collection>>>,
}

impl<S: DocumentSource> DocumentStore<S> {
    /// Enumerates `source` and creates a store using the system clock.
    pub async fn open(source: S) -> Result<Self, StoreError> {
        Self::open_with_clock(source, Arc::new(SystemClock)).await
    }

    /// Enumerates `source` and creates a store using `clock` for defaulted dates.
    ///
    /// Fails only if the source cannot be enumerated. Identifiers that yield no slug, or a slug
    /// already taken by an earlier identifier, are kept aside and reported as failures of every
    /// collection.
    pub async fn open_with_clock(source: S, clock: Arc<dyn Clock>) -> Result<Self, StoreError> {
        let identifiers = source.discover().await?;

        let mut entries = Vec::with_capacity(identifiers.len());
        let mut by_slug = HashMap::with_capacity(identifiers.len());
        let mut rejected = Vec::new();

        for identifier in identifiers {
            let Some(slug) = slug_from_identifier(&identifier) else {
                rejected.push(Rejected {
                    identifier,
                    duplicate_of: None,
                });
                continue;
            };
            if by_slug.contains_key(&slug) {
                rejected.push(Rejected {
                    identifier,
                    duplicate_of: Some(slug),
                });
                continue;
            }
            by_slug.insert(slug.clone(), entries.len());
            entries.push(Entry { slug, identifier });
        }

        debug!(
            documents = entries.len(),
            rejected = rejected.len(),
            "opened document store"
        );

        Ok(Self {
            source,
            entries,
            by_slug,
            rejected,
            clock,
            cache: Mutex::new(None),
        })
    }

    /// Number of documents with an accepted slug.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the source held no usable documents.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Accepted slugs in discovery order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.slug.as_str())
    }

    /// The underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the post collection, building and caching it on first use.
    ///
    /// Concurrent first calls share one build. Documents that fail to load are left out and
    /// listed in [`Collection::failures`].
    pub async fn list_all(&self) -> Arc<Collection> {
        let mut cache = self.cache.lock().await;
        if let Some(collection) = cache.as_ref() {
            return Arc::clone(collection);
        }

        let collection = Arc::new(self.materialize().await);
        *cache = Some(Arc::clone(&collection));
        collection
    }

    /// Reads and parses a single post, bypassing the cache.
    ///
    /// Returns `Ok(None)` for an unknown slug.
    pub async fn get(&self, slug: &str) -> Result<Option<Post>, DocumentError> {
        let Some(&index) = self.by_slug.get(slug) else {
            debug!(slug, "unknown slug");
            return Ok(None);
        };
        let entry = &self.entries[index];
        let text = self.source.read(&entry.identifier).await?;
        Ok(Some(parse_post(&entry.slug, &text, self.clock.as_ref())))
    }

    /// Drops the cached collection. The next [`list_all`](Self::list_all) rebuilds it from the
    /// same set of documents.
    pub async fn invalidate(&self) {
        *self.cache.lock().await = None;
        debug!("collection cache invalidated");
    }

    /// Distinct categories across the collection.
    pub async fn categories(&self) -> Vec<String> {
        self.list_all().await.categories()
    }

    /// Distinct tags across the collection.
    pub async fn tags(&self) -> Vec<String> {
        self.list_all().await.tags()
    }

    /// Posts matching `query`, newest first.
    pub async fn search(&self, query: &str) -> Vec<PostMetadata> {
        self.list_all()
            .await
            .search(query)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Reads every accepted document and folds the results into a collection.
    async fn materialize(&self) -> Collection {
        let mut posts = Vec::with_capacity(self.entries.len());
        let mut failures: Vec<LoadFailure> =
            self.rejected.iter().map(Rejected::to_failure).collect();

        for entry in &self.entries {
            match self.source.read(&entry.identifier).await {
                Ok(text) => {
                    posts.push(parse_post(&entry.slug, &text, self.clock.as_ref()).into_metadata());
                }
                Err(error) => failures.push(LoadFailure {
                    slug: entry.slug.clone(),
                    error,
                }),
            }
        }

        for failure in &failures {
            warn!(slug = %failure.slug, error = %failure.error, "excluding document");
        }

        sort_by_recency(&mut posts);
        info!(
            posts = posts.len(),
            failures = failures.len(),
            "materialized post collection"
        );

        Collection { posts, failures }
    }
}
