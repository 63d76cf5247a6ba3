//! Typed resource locators parsed from lytics URIs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{
    ACCOUNTS_AUTHORITY, JSON_SUFFIX, LQL_SUFFIX, OVERRIDE_SUFFIX, SCHEME, UTILS_AUTHORITY,
};
use crate::query::QueryParams;

/// How a query resource is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryMode {
    /// Raw query-language source (`.lql` documents).
    Text,
    /// Full query record as JSON (`.json` documents).
    Info,
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "lql"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// Where the text for a content-classification resource comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassificationSource {
    /// A draft file in the workspace, addressed by path.
    DraftFile(String),
    /// The active editor draft of the host.
    DraftActiveEditor,
    /// A public URL classified by the remote service.
    Url(String),
}

/// A typed, immutable resource locator parsed from a lytics URI.
///
/// Exactly one variant is active per parse result. Parsing is total: every
/// input yields a locator, with unmatched shapes landing in [`Invalid`]
/// carrying the original text for diagnostics. It is also deterministic —
/// no I/O, no clock, no randomness.
///
/// The account id appearing in most resource paths (`lytics://55/...`) is
/// cosmetic: it is never extracted for any variant except [`Account`], and
/// resolution always uses the ambient active account from the session
/// instead. This reproduces the observed single-account-at-a-time behavior
/// of the host; see the crate docs.
///
/// [`Invalid`]: Self::Invalid
/// [`Account`]: Self::Account
///
/// # Examples
///
/// ```
/// use lytics_uri::ResourceLocator;
///
/// let locator = ResourceLocator::parse("lytics://55/segments/vip.json");
/// assert_eq!(locator, ResourceLocator::Segment { slug: "vip".to_string() });
///
/// let locator = ResourceLocator::parse("lytics://utils/hash/sip/a/b/c.json");
/// assert_eq!(
///     locator,
///     ResourceLocator::Hash { hash_type: "sip".to_string(), value: "a/b/c".to_string() }
/// );
///
/// let locator = ResourceLocator::parse("not a uri");
/// assert!(!locator.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceLocator {
    /// An account record (`lytics://accounts/{id}.json`).
    Account {
        /// Numeric account id extracted from the path
        account_id: u64,
    },
    /// A digest computed by the remote (`lytics://utils/hash/{type}/{value...}.json`).
    Hash {
        /// The hash algorithm name (e.g. `sip`)
        hash_type: String,
        /// The payload to hash; may contain embedded slashes
        value: String,
    },
    /// A stored query (`.../queries/{alias}.lql|.json`).
    Query {
        /// The query alias
        alias: String,
        /// Whether the document is raw source or the full record
        mode: QueryMode,
    },
    /// A server-side function invocation (`.../function/{name}.json?params=...`).
    Function {
        /// The function name
        name: String,
        /// Ordered positional arguments from repeated `params` parameters
        params: Vec<String>,
    },
    /// An audience segment (`.../segments/{slug}.json`).
    Segment {
        /// The segment slug
        slug: String,
    },
    /// A segment collection (`.../segmentcollections/{slug}.json`).
    SegmentCollection {
        /// The collection slug
        slug: String,
    },
    /// A segment ML model (`.../segmentml/{name}.json`).
    SegmentMlModel {
        /// The model name
        name: String,
    },
    /// An account setting (`.../settings/{slug}.json`).
    Setting {
        /// The setting slug
        slug: String,
    },
    /// A data stream (`.../streams/{name}.json`).
    Stream {
        /// The stream name
        name: String,
    },
    /// The queries sourced from one stream (`.../streams/{name}/queries/{anything}.json`).
    StreamQueries {
        /// The source stream name
        stream: String,
    },
    /// A single stream field (`.../streams/{name}/{field}.json`).
    StreamField {
        /// The stream name
        stream: String,
        /// The field name
        field: String,
    },
    /// A subscription (`.../subscriptions/{slug}.json`).
    Subscription {
        /// The subscription slug
        slug: String,
    },
    /// A table (`.../tables/{name}.json`).
    Table {
        /// The table name
        name: String,
    },
    /// Schema information for one table field (`.../tables/{name}/{field}.json`).
    TableField {
        /// The table name
        table: String,
        /// The field name
        field: String,
    },
    /// An entity looked up by field value (`.../tables/{name}/{field}/{value}.json`).
    Entity {
        /// The table name
        table: String,
        /// The field to match on
        field: String,
        /// The field value identifying the entity
        value: String,
    },
    /// A topic with its matching URLs (`.../topics/{label}.json`).
    Topic {
        /// The topic label
        label: String,
    },
    /// A campaign (`.../campaigns/{id}.json`).
    Campaign {
        /// The campaign id
        id: String,
    },
    /// A campaign variation (`.../variations/{id}.json`).
    CampaignVariation {
        /// The variation id
        id: String,
    },
    /// A campaign variation override (`.../variations/{id}.campaign.override`).
    CampaignVariationOverride {
        /// The variation id
        id: String,
    },
    /// A content classification (`.../content/classification/...`).
    ContentClassification {
        /// Where the classified text or URL comes from
        source: ClassificationSource,
    },
    /// Topics extracted for a document URL (`.../document/topics/{url...}.json`).
    DocumentTopics {
        /// The document URL; may contain embedded slashes
        url: String,
    },
    /// Anything that matched no known shape.
    Invalid {
        /// The original URI text, kept for diagnostics
        raw: String,
    },
}

impl ResourceLocator {
    /// Parses a lytics URI into a locator.
    ///
    /// Total and pure: unmatched shapes yield [`ResourceLocator::Invalid`]
    /// rather than an error, and repeated calls on the same text return the
    /// same locator.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        Self::parse_inner(input).unwrap_or_else(|| Self::Invalid {
            raw: input.to_string(),
        })
    }

    /// Returns a stable lowercase label for the active variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Account { .. } => "account",
            Self::Hash { .. } => "hash",
            Self::Query { .. } => "query",
            Self::Function { .. } => "function",
            Self::Segment { .. } => "segment",
            Self::SegmentCollection { .. } => "segmentcollection",
            Self::SegmentMlModel { .. } => "segmentml",
            Self::Setting { .. } => "setting",
            Self::Stream { .. } => "stream",
            Self::StreamQueries { .. } => "streamqueries",
            Self::StreamField { .. } => "streamfield",
            Self::Subscription { .. } => "subscription",
            Self::Table { .. } => "table",
            Self::TableField { .. } => "tablefield",
            Self::Entity { .. } => "entity",
            Self::Topic { .. } => "topic",
            Self::Campaign { .. } => "campaign",
            Self::CampaignVariation { .. } => "variation",
            Self::CampaignVariationOverride { .. } => "variationoverride",
            Self::ContentClassification { .. } => "classification",
            Self::DocumentTopics { .. } => "documenttopics",
            Self::Invalid { .. } => "invalid",
        }
    }

    /// Returns false only for [`ResourceLocator::Invalid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid { .. })
    }

    /// Renders the canonical URI this locator round-trips through.
    ///
    /// `aid` supplies the cosmetic account prefix for account-scoped
    /// resources; global resources (accounts, hashes) ignore it. Invalid
    /// locators render their original text unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use lytics_uri::ResourceLocator;
    ///
    /// let locator = ResourceLocator::Segment { slug: "vip".to_string() };
    /// assert_eq!(locator.uri(55), "lytics://55/segments/vip.json");
    /// assert_eq!(ResourceLocator::parse(&locator.uri(55)), locator);
    /// ```
    #[must_use]
    pub fn uri(&self, aid: u64) -> String {
        match self {
            Self::Account { account_id } => {
                format!("{SCHEME}://{ACCOUNTS_AUTHORITY}/{account_id}.json")
            }
            Self::Hash { hash_type, value } => {
                format!("{SCHEME}://{UTILS_AUTHORITY}/hash/{hash_type}/{value}.json")
            }
            Self::Query {
                alias,
                mode: QueryMode::Text,
            } => format!("{SCHEME}://{aid}/queries/{alias}.lql"),
            Self::Query {
                alias,
                mode: QueryMode::Info,
            } => format!("{SCHEME}://{aid}/queries/{alias}.json"),
            Self::Function { name, params } => {
                let mut uri = format!("{SCHEME}://{aid}/function/{name}.json");
                for (i, param) in params.iter().enumerate() {
                    uri.push(if i == 0 { '?' } else { '&' });
                    uri.push_str("params=");
                    uri.push_str(param);
                }
                uri
            }
            Self::Segment { slug } => format!("{SCHEME}://{aid}/segments/{slug}.json"),
            Self::SegmentCollection { slug } => {
                format!("{SCHEME}://{aid}/segmentcollections/{slug}.json")
            }
            Self::SegmentMlModel { name } => format!("{SCHEME}://{aid}/segmentml/{name}.json"),
            Self::Setting { slug } => format!("{SCHEME}://{aid}/settings/{slug}.json"),
            Self::Stream { name } => format!("{SCHEME}://{aid}/streams/{name}.json"),
            Self::StreamQueries { stream } => {
                format!("{SCHEME}://{aid}/streams/{stream}/queries/all.json")
            }
            Self::StreamField { stream, field } => {
                format!("{SCHEME}://{aid}/streams/{stream}/{field}.json")
            }
            Self::Subscription { slug } => format!("{SCHEME}://{aid}/subscriptions/{slug}.json"),
            Self::Table { name } => format!("{SCHEME}://{aid}/tables/{name}.json"),
            Self::TableField { table, field } => {
                format!("{SCHEME}://{aid}/tables/{table}/{field}.json")
            }
            Self::Entity {
                table,
                field,
                value,
            } => format!("{SCHEME}://{aid}/tables/{table}/{field}/{value}.json"),
            Self::Topic { label } => format!("{SCHEME}://{aid}/topics/{label}.json"),
            Self::Campaign { id } => format!("{SCHEME}://{aid}/campaigns/{id}.json"),
            Self::CampaignVariation { id } => format!("{SCHEME}://{aid}/variations/{id}.json"),
            Self::CampaignVariationOverride { id } => {
                format!("{SCHEME}://{aid}/variations/{id}{OVERRIDE_SUFFIX}")
            }
            Self::ContentClassification { source } => match source {
                ClassificationSource::DraftFile(path) => format!(
                    "{SCHEME}://{aid}/content/classification/draft/draft.json?path={path}"
                ),
                ClassificationSource::DraftActiveEditor => format!(
                    "{SCHEME}://{aid}/content/classification/draft/active.json?active=true"
                ),
                ClassificationSource::Url(url) => {
                    format!("{SCHEME}://{aid}/content/classification/url/{url}.json")
                }
            },
            Self::DocumentTopics { url } => {
                format!("{SCHEME}://{aid}/document/topics/{url}.json")
            }
            Self::Invalid { raw } => raw.clone(),
        }
    }

    fn parse_inner(input: &str) -> Option<Self> {
        let rest = input.strip_prefix(SCHEME)?.strip_prefix("://")?;

        // The query string never participates in shape dispatch.
        let (rest, query) = match rest.split_once('?') {
            Some((path, query)) => (path, QueryParams::parse(query)),
            None => (rest, QueryParams::new()),
        };

        let (authority, path) = rest.split_once('/')?;
        let segments: Vec<&str> = path.split('/').collect();

        match authority {
            ACCOUNTS_AUTHORITY => Self::parse_account(&segments),
            UTILS_AUTHORITY => Self::parse_hash(&segments),
            _ => Self::parse_scoped(&segments, &query),
        }
    }

    fn parse_account(segments: &[&str]) -> Option<Self> {
        if segments.len() != 1 {
            return None;
        }
        let id = trim_suffix(segments[0], JSON_SUFFIX)?;
        let account_id = id.parse::<u64>().ok()?;
        Some(Self::Account { account_id })
    }

    fn parse_hash(segments: &[&str]) -> Option<Self> {
        if segments.len() < 3 || segments[0] != "hash" || segments[1].is_empty() {
            return None;
        }
        let joined = segments[2..].join("/");
        let value = non_empty(trim_suffix(&joined, JSON_SUFFIX)?)?;
        Some(Self::Hash {
            hash_type: segments[1].to_string(),
            value: value.to_string(),
        })
    }

    /// Dispatches account-scoped paths on their category keyword. The
    /// account id in the authority position is cosmetic and ignored.
    fn parse_scoped(segments: &[&str], query: &QueryParams) -> Option<Self> {
        let (category, rest) = segments.split_first()?;
        match *category {
            "queries" => Self::parse_query(rest),
            "function" => Self::parse_function(rest, query),
            "segments" => Self::parse_named(rest, |slug| Self::Segment { slug }),
            "segmentcollections" => Self::parse_named(rest, |slug| Self::SegmentCollection { slug }),
            "segmentml" => Self::parse_named(rest, |name| Self::SegmentMlModel { name }),
            "settings" => Self::parse_named(rest, |slug| Self::Setting { slug }),
            "streams" => Self::parse_stream(rest),
            "subscriptions" => Self::parse_named(rest, |slug| Self::Subscription { slug }),
            "tables" => Self::parse_table(rest),
            "topics" => Self::parse_named(rest, |label| Self::Topic { label }),
            "campaigns" => Self::parse_named(rest, |id| Self::Campaign { id }),
            "variations" => Self::parse_variation(rest),
            "content" => Self::parse_classification(rest, query),
            "document" => Self::parse_document_topics(rest),
            _ => None,
        }
    }

    /// Single-identifier shapes: one trailing segment named `{id}.json`.
    fn parse_named(rest: &[&str], build: impl FnOnce(String) -> Self) -> Option<Self> {
        if rest.len() != 1 {
            return None;
        }
        let name = non_empty(trim_suffix(rest[0], JSON_SUFFIX)?)?;
        Some(build(name.to_string()))
    }

    fn parse_query(rest: &[&str]) -> Option<Self> {
        if rest.len() != 1 {
            return None;
        }
        if let Some(alias) = trim_suffix(rest[0], LQL_SUFFIX) {
            let alias = non_empty(alias)?;
            return Some(Self::Query {
                alias: alias.to_string(),
                mode: QueryMode::Text,
            });
        }
        let alias = non_empty(trim_suffix(rest[0], JSON_SUFFIX)?)?;
        Some(Self::Query {
            alias: alias.to_string(),
            mode: QueryMode::Info,
        })
    }

    fn parse_function(rest: &[&str], query: &QueryParams) -> Option<Self> {
        if rest.len() != 1 {
            return None;
        }
        let name = non_empty(trim_suffix(rest[0], JSON_SUFFIX)?)?;
        // A single `params` occurrence still becomes a one-element list.
        let params = query.all("params").map(str::to_string).collect();
        Some(Self::Function {
            name: name.to_string(),
            params,
        })
    }

    fn parse_stream(rest: &[&str]) -> Option<Self> {
        match rest {
            [name] => {
                let name = non_empty(trim_suffix(name, JSON_SUFFIX)?)?;
                Some(Self::Stream {
                    name: name.to_string(),
                })
            }
            [stream, field] => {
                let stream = non_empty(stream)?;
                let field = non_empty(trim_suffix(field, JSON_SUFFIX)?)?;
                Some(Self::StreamField {
                    stream: stream.to_string(),
                    field: field.to_string(),
                })
            }
            [stream, "queries", trailer] => {
                let stream = non_empty(stream)?;
                trim_suffix(trailer, JSON_SUFFIX)?;
                Some(Self::StreamQueries {
                    stream: stream.to_string(),
                })
            }
            _ => None,
        }
    }

    fn parse_table(rest: &[&str]) -> Option<Self> {
        match rest {
            [name] => {
                let name = non_empty(trim_suffix(name, JSON_SUFFIX)?)?;
                Some(Self::Table {
                    name: name.to_string(),
                })
            }
            [table, field] => {
                let table = non_empty(table)?;
                let field = non_empty(trim_suffix(field, JSON_SUFFIX)?)?;
                Some(Self::TableField {
                    table: table.to_string(),
                    field: field.to_string(),
                })
            }
            [table, field, value] => {
                let table = non_empty(table)?;
                let field = non_empty(field)?;
                let value = non_empty(trim_suffix(value, JSON_SUFFIX)?)?;
                Some(Self::Entity {
                    table: table.to_string(),
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
            _ => None,
        }
    }

    fn parse_variation(rest: &[&str]) -> Option<Self> {
        if rest.len() != 1 {
            return None;
        }
        if let Some(id) = trim_suffix(rest[0], OVERRIDE_SUFFIX) {
            let id = non_empty(id)?;
            return Some(Self::CampaignVariationOverride { id: id.to_string() });
        }
        let id = non_empty(trim_suffix(rest[0], JSON_SUFFIX)?)?;
        Some(Self::CampaignVariation { id: id.to_string() })
    }

    fn parse_classification(rest: &[&str], query: &QueryParams) -> Option<Self> {
        if rest.len() < 3 || rest[0] != "classification" {
            return None;
        }
        match rest[1] {
            "draft" => {
                if let Some(path) = query.get("path").filter(|p| !p.is_empty()) {
                    return Some(Self::ContentClassification {
                        source: ClassificationSource::DraftFile(path.to_string()),
                    });
                }
                if query.get("active") == Some("true") {
                    return Some(Self::ContentClassification {
                        source: ClassificationSource::DraftActiveEditor,
                    });
                }
                None
            }
            "url" => {
                let joined = rest[2..].join("/");
                let url = non_empty(trim_suffix(&joined, JSON_SUFFIX)?)?;
                Some(Self::ContentClassification {
                    source: ClassificationSource::Url(url.to_string()),
                })
            }
            _ => None,
        }
    }

    fn parse_document_topics(rest: &[&str]) -> Option<Self> {
        if rest.len() < 2 || rest[0] != "topics" {
            return None;
        }
        let joined = rest[1..].join("/");
        let url = non_empty(trim_suffix(&joined, JSON_SUFFIX)?)?;
        Some(Self::DocumentTopics {
            url: url.to_string(),
        })
    }
}

/// Strips `suffix` at its **first** occurrence, requiring the value to end
/// with it. A value containing the suffix literal earlier is truncated
/// there; this matches the host's historical extraction semantics and is
/// documented rather than fixed.
fn trim_suffix<'a>(value: &'a str, suffix: &str) -> Option<&'a str> {
    if value.ends_with(suffix) {
        value.find(suffix).map(|idx| &value[..idx])
    } else {
        None
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

impl fmt::Display for ResourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account { account_id } => write!(f, "account {account_id}"),
            Self::Hash { hash_type, value } => write!(f, "{hash_type} hash of '{value}'"),
            Self::Query { alias, mode } => write!(f, "query '{alias}' ({mode})"),
            Self::Function { name, params } => {
                write!(f, "function {name}({})", params.join(", "))
            }
            Self::Segment { slug } => write!(f, "segment '{slug}'"),
            Self::SegmentCollection { slug } => write!(f, "segment collection '{slug}'"),
            Self::SegmentMlModel { name } => write!(f, "segment ML model '{name}'"),
            Self::Setting { slug } => write!(f, "setting '{slug}'"),
            Self::Stream { name } => write!(f, "stream '{name}'"),
            Self::StreamQueries { stream } => write!(f, "queries sourced from stream '{stream}'"),
            Self::StreamField { stream, field } => write!(f, "field '{field}' of stream '{stream}'"),
            Self::Subscription { slug } => write!(f, "subscription '{slug}'"),
            Self::Table { name } => write!(f, "table '{name}'"),
            Self::TableField { table, field } => write!(f, "field '{field}' of table '{table}'"),
            Self::Entity {
                table,
                field,
                value,
            } => write!(f, "entity {table}/{field}={value}"),
            Self::Topic { label } => write!(f, "topic '{label}'"),
            Self::Campaign { id } => write!(f, "campaign '{id}'"),
            Self::CampaignVariation { id } => write!(f, "campaign variation '{id}'"),
            Self::CampaignVariationOverride { id } => {
                write!(f, "campaign variation override '{id}'")
            }
            Self::ContentClassification { source } => match source {
                ClassificationSource::DraftFile(path) => {
                    write!(f, "classification of draft '{path}'")
                }
                ClassificationSource::DraftActiveEditor => {
                    write!(f, "classification of the active draft")
                }
                ClassificationSource::Url(url) => write!(f, "classification of '{url}'"),
            },
            Self::DocumentTopics { url } => write!(f, "topics for document '{url}'"),
            Self::Invalid { raw } => write!(f, "unrecognized resource '{raw}'"),
        }
    }
}

impl From<&str> for ResourceLocator {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl FromStr for ResourceLocator {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> ResourceLocator {
        ResourceLocator::parse(input)
    }

    #[test]
    fn parse_account() {
        assert_eq!(
            parse("lytics://accounts/12345.json"),
            ResourceLocator::Account { account_id: 12345 }
        );
    }

    #[test]
    fn parse_account_non_numeric_is_invalid() {
        assert!(!parse("lytics://accounts/abc.json").is_valid());
    }

    #[test]
    fn parse_account_extra_segment_is_invalid() {
        assert!(!parse("lytics://accounts/1/2.json").is_valid());
    }

    #[test]
    fn parse_hash_preserves_embedded_slashes() {
        assert_eq!(
            parse("lytics://utils/hash/sip/a/b/c.json"),
            ResourceLocator::Hash {
                hash_type: "sip".to_string(),
                value: "a/b/c".to_string(),
            }
        );
    }

    #[test]
    fn parse_hash_single_value() {
        assert_eq!(
            parse("lytics://utils/hash/md5/payload.json"),
            ResourceLocator::Hash {
                hash_type: "md5".to_string(),
                value: "payload".to_string(),
            }
        );
    }

    #[test]
    fn parse_hash_missing_value_is_invalid() {
        assert!(!parse("lytics://utils/hash/sip.json").is_valid());
        assert!(!parse("lytics://utils/hash/sip/.json").is_valid());
    }

    #[test]
    fn parse_query_lql_is_text_mode() {
        assert_eq!(
            parse("lytics://7/queries/default.lql"),
            ResourceLocator::Query {
                alias: "default".to_string(),
                mode: QueryMode::Text,
            }
        );
    }

    #[test]
    fn parse_query_json_is_info_mode() {
        assert_eq!(
            parse("lytics://7/queries/default.json"),
            ResourceLocator::Query {
                alias: "default".to_string(),
                mode: QueryMode::Info,
            }
        );
    }

    #[test]
    fn parse_query_empty_alias_is_invalid() {
        assert!(!parse("lytics://7/queries/.lql").is_valid());
        assert!(!parse("lytics://7/queries/.json").is_valid());
    }

    #[test]
    fn parse_function_without_params() {
        assert_eq!(
            parse("lytics://55/function/score.json"),
            ResourceLocator::Function {
                name: "score".to_string(),
                params: vec![],
            }
        );
    }

    #[test]
    fn parse_function_single_param_is_one_element_list() {
        assert_eq!(
            parse("lytics://55/function/score.json?params=only"),
            ResourceLocator::Function {
                name: "score".to_string(),
                params: vec!["only".to_string()],
            }
        );
    }

    #[test]
    fn parse_function_repeated_params_keep_order() {
        assert_eq!(
            parse("lytics://55/function/score.json?params=b&params=a"),
            ResourceLocator::Function {
                name: "score".to_string(),
                params: vec!["b".to_string(), "a".to_string()],
            }
        );
    }

    #[test]
    fn parse_segment_ignores_path_account_id() {
        assert_eq!(
            parse("lytics://55/segments/vip.json"),
            ResourceLocator::Segment {
                slug: "vip".to_string()
            }
        );
    }

    #[test]
    fn suffix_trims_at_first_occurrence() {
        assert_eq!(
            parse("lytics://55/segments/abc.json.json"),
            ResourceLocator::Segment {
                slug: "abc".to_string()
            }
        );
    }

    #[test]
    fn parse_single_identifier_shapes() {
        assert_eq!(
            parse("lytics://55/segmentcollections/core.json"),
            ResourceLocator::SegmentCollection {
                slug: "core".to_string()
            }
        );
        assert_eq!(
            parse("lytics://55/segmentml/churn_model.json"),
            ResourceLocator::SegmentMlModel {
                name: "churn_model".to_string()
            }
        );
        assert_eq!(
            parse("lytics://55/settings/api_whitelist.json"),
            ResourceLocator::Setting {
                slug: "api_whitelist".to_string()
            }
        );
        assert_eq!(
            parse("lytics://55/subscriptions/weekly.json"),
            ResourceLocator::Subscription {
                slug: "weekly".to_string()
            }
        );
        assert_eq!(
            parse("lytics://55/topics/sports.json"),
            ResourceLocator::Topic {
                label: "sports".to_string()
            }
        );
        assert_eq!(
            parse("lytics://55/campaigns/xyz.json"),
            ResourceLocator::Campaign {
                id: "xyz".to_string()
            }
        );
    }

    #[test]
    fn parse_stream_shapes() {
        assert_eq!(
            parse("lytics://55/streams/web.json"),
            ResourceLocator::Stream {
                name: "web".to_string()
            }
        );
        assert_eq!(
            parse("lytics://55/streams/web/user_id.json"),
            ResourceLocator::StreamField {
                stream: "web".to_string(),
                field: "user_id".to_string(),
            }
        );
        assert_eq!(
            parse("lytics://55/streams/web/queries/all.json"),
            ResourceLocator::StreamQueries {
                stream: "web".to_string()
            }
        );
    }

    #[test]
    fn parse_stream_queries_requires_queries_literal() {
        assert!(!parse("lytics://55/streams/web/other/all.json").is_valid());
    }

    #[test]
    fn parse_table_shapes() {
        assert_eq!(
            parse("lytics://55/tables/user.json"),
            ResourceLocator::Table {
                name: "user".to_string()
            }
        );
        assert_eq!(
            parse("lytics://55/tables/user/email.json"),
            ResourceLocator::TableField {
                table: "user".to_string(),
                field: "email".to_string(),
            }
        );
    }

    #[test]
    fn parse_entity_keeps_value_verbatim() {
        assert_eq!(
            parse("lytics://55/tables/user/email/test@example.com.json"),
            ResourceLocator::Entity {
                table: "user".to_string(),
                field: "email".to_string(),
                value: "test@example.com".to_string(),
            }
        );
    }

    #[test]
    fn parse_variation_suffix_disambiguation() {
        assert_eq!(
            parse("lytics://55/variations/123.json"),
            ResourceLocator::CampaignVariation {
                id: "123".to_string()
            }
        );
        assert_eq!(
            parse("lytics://55/variations/123.campaign.override"),
            ResourceLocator::CampaignVariationOverride {
                id: "123".to_string()
            }
        );
    }

    #[test]
    fn parse_classification_draft_file() {
        assert_eq!(
            parse("lytics://55/content/classification/draft/doc.json?path=notes/draft.txt"),
            ResourceLocator::ContentClassification {
                source: ClassificationSource::DraftFile("notes/draft.txt".to_string()),
            }
        );
    }

    #[test]
    fn parse_classification_active_editor() {
        assert_eq!(
            parse("lytics://55/content/classification/draft/doc.json?active=true"),
            ResourceLocator::ContentClassification {
                source: ClassificationSource::DraftActiveEditor,
            }
        );
    }

    #[test]
    fn parse_classification_draft_without_source_is_invalid() {
        assert!(!parse("lytics://55/content/classification/draft/doc.json").is_valid());
        assert!(!parse("lytics://55/content/classification/draft/doc.json?active=false").is_valid());
    }

    #[test]
    fn parse_classification_url_preserves_slashes() {
        assert_eq!(
            parse("lytics://55/content/classification/url/example.com/blog/post.json"),
            ResourceLocator::ContentClassification {
                source: ClassificationSource::Url("example.com/blog/post".to_string()),
            }
        );
    }

    #[test]
    fn parse_document_topics() {
        assert_eq!(
            parse("lytics://55/document/topics/example.com/page.json"),
            ResourceLocator::DocumentTopics {
                url: "example.com/page".to_string()
            }
        );
    }

    #[test]
    fn parse_document_topics_requires_json_suffix() {
        assert!(!parse("lytics://55/document/topics/example.com/page").is_valid());
    }

    #[test]
    fn parse_unknown_shapes_are_invalid() {
        for input in [
            "",
            "lytics://",
            "lytics://55",
            "lytics://55/",
            "lytics://55/unknown/thing.json",
            "lytics://55/segments/vip",
            "lytics://55/tables/user/email/extra/deep.json",
            "http://55/segments/vip.json",
            "not a uri at all",
        ] {
            let locator = parse(input);
            assert_eq!(
                locator,
                ResourceLocator::Invalid {
                    raw: input.to_string()
                },
                "expected invalid for {input:?}"
            );
        }
    }

    #[test]
    fn invalid_keeps_original_text() {
        let locator = parse("lytics://55/nope");
        assert_eq!(
            locator,
            ResourceLocator::Invalid {
                raw: "lytics://55/nope".to_string()
            }
        );
    }

    #[test]
    fn parse_is_deterministic() {
        let input = "lytics://55/tables/user/email/test@example.com.json";
        assert_eq!(parse(input), parse(input));
    }

    #[test]
    fn kind_labels_are_stable() {
        assert_eq!(parse("lytics://55/segments/vip.json").kind(), "segment");
        assert_eq!(parse("lytics://accounts/1.json").kind(), "account");
        assert_eq!(parse("garbage").kind(), "invalid");
    }

    #[test]
    fn uri_round_trips() {
        let locators = [
            ResourceLocator::Account { account_id: 9 },
            ResourceLocator::Hash {
                hash_type: "sip".to_string(),
                value: "a/b".to_string(),
            },
            ResourceLocator::Query {
                alias: "default".to_string(),
                mode: QueryMode::Text,
            },
            ResourceLocator::Function {
                name: "score".to_string(),
                params: vec!["a".to_string(), "b".to_string()],
            },
            ResourceLocator::Segment {
                slug: "vip".to_string(),
            },
            ResourceLocator::StreamField {
                stream: "web".to_string(),
                field: "user_id".to_string(),
            },
            ResourceLocator::Entity {
                table: "user".to_string(),
                field: "email".to_string(),
                value: "test@example.com".to_string(),
            },
            ResourceLocator::CampaignVariationOverride {
                id: "123".to_string(),
            },
            ResourceLocator::DocumentTopics {
                url: "example.com/page".to_string(),
            },
        ];
        for locator in locators {
            assert_eq!(ResourceLocator::parse(&locator.uri(55)), locator);
        }
    }

    #[test]
    fn invalid_uri_renders_raw_text() {
        let locator = ResourceLocator::Invalid {
            raw: "whatever".to_string(),
        };
        assert_eq!(locator.uri(55), "whatever");
    }

    #[test]
    fn display_is_diagnostic_not_uri() {
        let locator = parse("lytics://55/segments/vip.json");
        assert_eq!(locator.to_string(), "segment 'vip'");
    }
}
