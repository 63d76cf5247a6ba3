//! Remote API trait definition for account-resource fetching.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::RemoteFailure;

/// Abstract remote account API, one operation per locator kind.
///
/// The resolver dispatches exactly one of these operations per resolution;
/// it never combines them except for `get_queries`, which backs the
/// stream-queries view. Implementations own their HTTP client and
/// credentials — the resolver only verifies a credential exists before
/// calling.
///
/// Operations return `Ok(None)` when the remote reports an absent record
/// through a successful response; transport and status failures surface as
/// [`RemoteFailure`] and are passed through unmodified. Any "treat 404 as
/// empty" policy belongs to listing collaborators that call this trait
/// directly, not to the resolver.
#[async_trait]
pub trait RemoteApi: Send + Sync {
    /// Fetches an account record by id.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn get_account(&self, aid: u64) -> Result<Option<Value>, RemoteFailure>;

    /// Fetches an audience segment by slug.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn get_segment(&self, slug: &str) -> Result<Option<Value>, RemoteFailure>;

    /// Fetches a segment collection by slug.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn get_segment_collection(&self, slug: &str) -> Result<Option<Value>, RemoteFailure>;

    /// Fetches a segment ML model by name.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn get_segment_ml_model(&self, name: &str) -> Result<Option<Value>, RemoteFailure>;

    /// Fetches an account setting by slug.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn get_account_setting(&self, slug: &str) -> Result<Option<Value>, RemoteFailure>;

    /// Fetches a data stream by name.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn get_stream(&self, name: &str) -> Result<Option<Value>, RemoteFailure>;

    /// Fetches one field of a stream.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn get_stream_field(
        &self,
        stream: &str,
        field: &str,
    ) -> Result<Option<Value>, RemoteFailure>;

    /// Fetches every stored query for the account.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn get_queries(&self) -> Result<Vec<Value>, RemoteFailure>;

    /// Fetches one stored query by alias.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn get_query(&self, alias: &str) -> Result<Option<Value>, RemoteFailure>;

    /// Evaluates a server-side function with positional arguments.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn test_function(
        &self,
        name: &str,
        params: &[String],
    ) -> Result<Option<Value>, RemoteFailure>;

    /// Fetches a subscription by slug.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn get_subscription(&self, slug: &str) -> Result<Option<Value>, RemoteFailure>;

    /// Fetches the schema of a table.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn get_table_schema(&self, table: &str) -> Result<Option<Value>, RemoteFailure>;

    /// Fetches schema information for one table field.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn get_table_schema_field_info(
        &self,
        table: &str,
        field: &str,
    ) -> Result<Option<Value>, RemoteFailure>;

    /// Fetches an entity by table, field, and field value.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn get_entity(
        &self,
        table: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Value>, RemoteFailure>;

    /// Fetches the URLs matching a topic label, optionally capped.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn get_topic_urls(
        &self,
        label: &str,
        limit: Option<u32>,
    ) -> Result<Option<Value>, RemoteFailure>;

    /// Fetches a campaign by id.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn get_campaign(&self, id: &str) -> Result<Option<Value>, RemoteFailure>;

    /// Fetches a campaign variation by id.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn get_campaign_variation(&self, id: &str) -> Result<Option<Value>, RemoteFailure>;

    /// Fetches the override attached to a campaign variation.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn get_campaign_variation_override(
        &self,
        id: &str,
    ) -> Result<Option<Value>, RemoteFailure>;

    /// Classifies a piece of text.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn classify_text(&self, text: &str) -> Result<Option<Value>, RemoteFailure>;

    /// Classifies the content behind a public URL.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn classify_url(&self, url: &str) -> Result<Option<Value>, RemoteFailure>;

    /// Fetches the topics extracted for a document URL.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn get_document_topics(&self, url: &str) -> Result<Option<Value>, RemoteFailure>;

    /// Computes the digest of a value with the named algorithm.
    ///
    /// # Errors
    ///
    /// Returns `RemoteFailure` when the remote call fails.
    async fn compute_hash(&self, hash_type: &str, value: &str) -> Result<Value, RemoteFailure>;
}
