//! Draft text sources for content classification.

use async_trait::async_trait;

/// Supplies draft document text for content-classification resources.
///
/// Classification of a draft needs the draft's text, and only the host
/// editor knows where that text lives — an open buffer or a file in the
/// workspace. The resolver asks this collaborator and sends whatever comes
/// back to the remote classifier; `None` means no text could be produced.
#[async_trait]
pub trait DraftSource: Send + Sync {
    /// Returns the text of the draft at a workspace-relative path.
    async fn read_draft(&self, path: &str) -> Option<String>;

    /// Returns the text of the host's active editor draft.
    async fn active_draft(&self) -> Option<String>;
}

/// A draft source for headless hosts; never produces text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDraftSource;

#[async_trait]
impl DraftSource for NoDraftSource {
    async fn read_draft(&self, _path: &str) -> Option<String> {
        None
    }

    async fn active_draft(&self) -> Option<String> {
        None
    }
}
