//! Convenient re-exports for glob imports.
//!
//! This module provides a single import for all common types:
//!
//! ```rust
//! use lytics_uri::prelude::*;
//!
//! let locator = ResourceLocator::parse("lytics://55/segments/vip.json");
//! assert!(locator.is_valid());
//! ```

pub use crate::{
    // Core types
    Account, ChangeNotifier, ClassificationSource, QueryMode, QueryParams, ResourceLocator,
    ResourceResolver, StaticSession, Subscription,
    // Collaborator traits
    DraftSource, NoDraftSource, RemoteApi, SessionContext,
    // Errors
    RemoteFailure, ResolveError,
    // Constants
    ACCOUNTS_AUTHORITY, JSON_SUFFIX, LQL_SUFFIX, OVERRIDE_SUFFIX, SCHEME, UTILS_AUTHORITY,
};
