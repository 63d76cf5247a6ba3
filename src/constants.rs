//! Constants for lytics URI parsing.

/// The URI scheme.
pub const SCHEME: &str = "lytics";

/// Suffix carried by JSON-formatted resource documents.
pub const JSON_SUFFIX: &str = ".json";

/// Suffix carried by raw query-language documents.
pub const LQL_SUFFIX: &str = ".lql";

/// Suffix carried by campaign-variation override documents.
pub const OVERRIDE_SUFFIX: &str = ".campaign.override";

/// Authority hosting account documents (`lytics://accounts/{id}.json`).
pub const ACCOUNTS_AUTHORITY: &str = "accounts";

/// Authority hosting utility documents (`lytics://utils/hash/...`).
pub const UTILS_AUTHORITY: &str = "utils";
