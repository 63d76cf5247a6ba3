//! Resource resolution: locator plus session becomes document text.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::draft::{DraftSource, NoDraftSource};
use crate::error::ResolveError;
use crate::locator::{ClassificationSource, QueryMode, ResourceLocator};
use crate::remote::RemoteApi;
use crate::session::SessionContext;

/// The document rendered for an absent structured result.
///
/// Always loadable JSON, never `null` or an empty string.
const EMPTY_DOCUMENT: &str = "{}";

/// Resolves locators into fetched, formatted document text.
///
/// For every valid locator the resolver verifies the active account has a
/// usable access token, dispatches to exactly one [`RemoteApi`] operation,
/// and formats the result. It holds no cache and performs no deduplication:
/// concurrent resolutions of the identical URI each hit the remote, and a
/// caller wanting at-most-one-in-flight semantics adds that above this
/// layer.
///
/// # Examples
///
/// ```
/// # use lytics_uri::{ResolveError, ResourceLocator, ResourceResolver, SessionContext};
/// # async fn demo(
/// #     resolver: &ResourceResolver,
/// #     session: &dyn SessionContext,
/// # ) -> Result<(), ResolveError> {
/// let locator = ResourceLocator::parse("lytics://55/streams/web.json");
/// let text = resolver.resolve(&locator, session).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ResourceResolver {
    remote: Arc<dyn RemoteApi>,
    drafts: Arc<dyn DraftSource>,
}

impl ResourceResolver {
    /// Creates a resolver over a remote API, with no draft source.
    ///
    /// Draft-classification locators resolve to the empty document; hosts
    /// with an editor use [`Self::with_draft_source`].
    #[must_use]
    pub fn new(remote: Arc<dyn RemoteApi>) -> Self {
        Self::with_draft_source(remote, Arc::new(NoDraftSource))
    }

    /// Creates a resolver over a remote API and a host draft source.
    #[must_use]
    pub fn with_draft_source(remote: Arc<dyn RemoteApi>, drafts: Arc<dyn DraftSource>) -> Self {
        Self { remote, drafts }
    }

    /// Resolves a locator into document text.
    ///
    /// Suspends at two points: the session token lookup and the remote
    /// call. Dropping the returned future aborts the in-flight remote call.
    ///
    /// # Errors
    ///
    /// - `UnsupportedResource` for an [`ResourceLocator::Invalid`] locator,
    ///   before anything else happens
    /// - `MissingCredential` when no account is active or its token is
    ///   absent or blank, before any remote call
    /// - `Remote` for remote failures, passed through unmodified
    pub async fn resolve(
        &self,
        locator: &ResourceLocator,
        session: &dyn SessionContext,
    ) -> Result<String, ResolveError> {
        if let ResourceLocator::Invalid { raw } = locator {
            return Err(ResolveError::unsupported_resource(raw.clone()));
        }

        let Some(account) = session.active_account().await else {
            warn!("refusing to resolve: no active account");
            return Err(ResolveError::missing_credential(None));
        };
        let token = session.access_token(account.aid).await;
        if !token.is_some_and(|t| !t.trim().is_empty()) {
            warn!(aid = account.aid, "refusing to resolve: no usable access token");
            return Err(ResolveError::missing_credential(Some(account.aid)));
        }

        debug!(kind = locator.kind(), %locator, "resolving");
        self.dispatch(locator).await
    }

    /// Resolves a locator, settling with `Cancelled` if the token fires
    /// first. The in-flight remote call is dropped on cancellation.
    ///
    /// # Errors
    ///
    /// As [`Self::resolve`], plus `Cancelled`.
    pub async fn resolve_with_cancel(
        &self,
        locator: &ResourceLocator,
        session: &dyn SessionContext,
        cancel: &CancellationToken,
    ) -> Result<String, ResolveError> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => Err(ResolveError::Cancelled),
            result = self.resolve(locator, session) => result,
        }
    }

    /// One remote operation per locator kind; the token precondition has
    /// already been checked. The remote client carries its own credential.
    #[allow(clippy::too_many_lines)]
    async fn dispatch(&self, locator: &ResourceLocator) -> Result<String, ResolveError> {
        let remote = self.remote.as_ref();
        match locator {
            ResourceLocator::Invalid { raw } => {
                Err(ResolveError::unsupported_resource(raw.clone()))
            }
            ResourceLocator::Account { account_id } => {
                Ok(render(remote.get_account(*account_id).await?))
            }
            ResourceLocator::Hash { hash_type, value } => {
                let hashed = remote.compute_hash(hash_type, value).await?;
                Ok(to_pretty(&json!({
                    "type": hash_type,
                    "value": value,
                    "hashed": hashed,
                })))
            }
            ResourceLocator::Query {
                alias,
                mode: QueryMode::Text,
            } => {
                // The one non-JSON document: raw query-language source.
                let query = remote.get_query(alias).await?;
                let text = query
                    .as_ref()
                    .and_then(|q| q.get("text"))
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                Ok(text.to_string())
            }
            ResourceLocator::Query {
                alias,
                mode: QueryMode::Info,
            } => Ok(render(remote.get_query(alias).await?)),
            ResourceLocator::Function { name, params } => {
                Ok(render(remote.test_function(name, params).await?))
            }
            ResourceLocator::Segment { slug } => Ok(render(remote.get_segment(slug).await?)),
            ResourceLocator::SegmentCollection { slug } => {
                Ok(render(remote.get_segment_collection(slug).await?))
            }
            ResourceLocator::SegmentMlModel { name } => {
                Ok(render(remote.get_segment_ml_model(name).await?))
            }
            ResourceLocator::Setting { slug } => {
                Ok(render(remote.get_account_setting(slug).await?))
            }
            ResourceLocator::Stream { name } => Ok(render(remote.get_stream(name).await?)),
            ResourceLocator::StreamQueries { stream } => {
                let queries = remote.get_queries().await?;
                let aliases: Vec<&str> = queries
                    .iter()
                    .filter(|q| q.get("from").and_then(Value::as_str) == Some(stream.as_str()))
                    .filter_map(|q| q.get("alias").and_then(Value::as_str))
                    .collect();
                Ok(to_pretty(&json!({
                    "stream": stream,
                    "aliases": aliases,
                })))
            }
            ResourceLocator::StreamField { stream, field } => {
                Ok(render(remote.get_stream_field(stream, field).await?))
            }
            ResourceLocator::Subscription { slug } => {
                Ok(render(remote.get_subscription(slug).await?))
            }
            ResourceLocator::Table { name } => Ok(render(remote.get_table_schema(name).await?)),
            ResourceLocator::TableField { table, field } => {
                Ok(render(remote.get_table_schema_field_info(table, field).await?))
            }
            ResourceLocator::Entity {
                table,
                field,
                value,
            } => Ok(render(remote.get_entity(table, field, value).await?)),
            ResourceLocator::Topic { label } => {
                Ok(render(remote.get_topic_urls(label, None).await?))
            }
            ResourceLocator::Campaign { id } => Ok(render(remote.get_campaign(id).await?)),
            ResourceLocator::CampaignVariation { id } => {
                Ok(render(remote.get_campaign_variation(id).await?))
            }
            ResourceLocator::CampaignVariationOverride { id } => {
                Ok(render(remote.get_campaign_variation_override(id).await?))
            }
            ResourceLocator::ContentClassification { source } => {
                self.classify(source).await
            }
            ResourceLocator::DocumentTopics { url } => {
                Ok(render(remote.get_document_topics(url).await?))
            }
        }
    }

    async fn classify(&self, source: &ClassificationSource) -> Result<String, ResolveError> {
        let text = match source {
            ClassificationSource::Url(url) => {
                return Ok(render(self.remote.classify_url(url).await?));
            }
            ClassificationSource::DraftFile(path) => self.drafts.read_draft(path).await,
            ClassificationSource::DraftActiveEditor => self.drafts.active_draft().await,
        };
        match text {
            Some(text) => Ok(render(self.remote.classify_text(&text).await?)),
            // No obtainable draft text: an absent result, zero remote calls.
            None => Ok(EMPTY_DOCUMENT.to_string()),
        }
    }
}

/// Renders a structured result: pretty JSON, or `{}` when absent.
fn render(value: Option<Value>) -> String {
    match value {
        Some(value) => to_pretty(&value),
        None => EMPTY_DOCUMENT.to_string(),
    }
}

/// Pretty-prints with 4-space indentation for human-diffable documents.
fn to_pretty(value: &Value) -> String {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    // A Value serialized into an in-memory buffer cannot fail.
    value.serialize(&mut ser).expect("JSON serialization");
    String::from_utf8(buf).expect("serializer emits UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_absent_is_empty_object() {
        assert_eq!(render(None), "{}");
    }

    #[test]
    fn render_uses_four_space_indent() {
        let text = render(Some(json!({ "id": "vip", "kind": "segment" })));
        assert_eq!(text, "{\n    \"id\": \"vip\",\n    \"kind\": \"segment\"\n}");
    }

    #[test]
    fn render_nested_indentation() {
        let text = render(Some(json!({ "outer": { "inner": 1 } })));
        assert_eq!(
            text,
            "{\n    \"outer\": {\n        \"inner\": 1\n    }\n}"
        );
    }

    #[test]
    fn to_pretty_keeps_member_order() {
        // preserve_order keeps the remote's member order intact.
        let text = to_pretty(&json!({ "z": 1, "a": 2 }));
        let z = text.find("\"z\"").expect("z present");
        let a = text.find("\"a\"").expect("a present");
        assert!(z < a);
    }
}
