//! Parser and resolver for the `lytics://` account-resource URI scheme.
//!
//! This crate implements the resource-addressing subsystem that exposes
//! remote account data (accounts, queries, segments, streams, tables,
//! campaigns, subscriptions, content classifications, hashes, …) as
//! read-only documents addressed by opaque URIs.
//!
//! # Overview
//!
//! Three pieces cooperate:
//!
//! - [`ResourceLocator::parse`] — a pure, total grammar parser turning URI
//!   text into a typed locator; unmatched shapes become
//!   [`ResourceLocator::Invalid`], never an error.
//! - [`ResourceResolver::resolve`] — an async resolver turning a locator
//!   plus ambient session state into fetched, formatted document text,
//!   with typed failures.
//! - [`ChangeNotifier`] — a multicast invalidation channel telling a host
//!   document cache to discard the text for a URI and re-resolve it.
//!
//! ```text
//! text → ResourceLocator::parse → locator
//!      → ResourceResolver::resolve(locator, session) → remote call
//!      → formatted text
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use lytics_uri::{QueryMode, ResourceLocator};
//!
//! let locator = ResourceLocator::parse("lytics://7/queries/default.lql");
//! assert_eq!(
//!     locator,
//!     ResourceLocator::Query {
//!         alias: "default".to_string(),
//!         mode: QueryMode::Text,
//!     }
//! );
//!
//! // Embedded slashes in multi-segment values are preserved exactly.
//! let locator = ResourceLocator::parse("lytics://utils/hash/sip/a/b/c.json");
//! assert_eq!(
//!     locator,
//!     ResourceLocator::Hash {
//!         hash_type: "sip".to_string(),
//!         value: "a/b/c".to_string(),
//!     }
//! );
//! ```
//!
//! # Account Identity
//!
//! The account id appearing in most resource paths (`lytics://55/...`) is
//! cosmetic. It is never extracted for any locator except
//! [`ResourceLocator::Account`]; resolution always uses the active account
//! from the [`SessionContext`] passed into every resolve call. This
//! reproduces the host's observed single-account-at-a-time behavior; in a
//! multi-account scenario two URIs differing only in that prefix resolve
//! identically.
//!
//! # Suffix Extraction
//!
//! Trailing names are extracted as the substring up to the **first**
//! occurrence of the expected suffix literal (`.json`, `.lql`,
//! `.campaign.override`). A value containing that literal earlier is
//! truncated there: `…/segments/abc.json.json` yields slug `abc`. This is
//! long-standing behavior and callers depend on it; it is documented, not
//! fixed.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
mod draft;
mod error;
mod locator;
mod notify;
pub mod prelude;
mod query;
mod remote;
mod resolver;
mod session;

pub use constants::{
    ACCOUNTS_AUTHORITY, JSON_SUFFIX, LQL_SUFFIX, OVERRIDE_SUFFIX, SCHEME, UTILS_AUTHORITY,
};
pub use draft::{DraftSource, NoDraftSource};
pub use error::{RemoteFailure, ResolveError};
pub use locator::{ClassificationSource, QueryMode, ResourceLocator};
pub use notify::{ChangeNotifier, Subscription};
pub use query::QueryParams;
pub use remote::RemoteApi;
pub use resolver::ResourceResolver;
pub use session::{Account, SessionContext, StaticSession};
