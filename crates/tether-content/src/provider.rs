//! VirtualDocumentProvider: resolves `<scheme>:<id>` URIs against the registry.
//!
//! Resolution never fails: absent content, foreign schemes and malformed URIs
//! all render as an empty read-only document.

use std::sync::Arc;

use tracing::debug;

use crate::registry::VirtualContentRegistry;

/// Pull-based content provider registered under a private URI scheme.
#[derive(Debug, Clone)]
pub struct VirtualDocumentProvider {
    scheme: String,
    registry: Arc<VirtualContentRegistry>,
}

impl VirtualDocumentProvider {
    pub fn new(scheme: impl Into<String>, registry: Arc<VirtualContentRegistry>) -> Self {
        Self {
            scheme: scheme.into(),
            registry,
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn registry(&self) -> &Arc<VirtualContentRegistry> {
        &self.registry
    }

    /// The URI under which the host can open the content stored for `id`.
    pub fn uri_for(&self, id: &str) -> String {
        format!("{}:{}", self.scheme, id)
    }

    /// Extract the content identifier from a URI under this provider's scheme.
    pub fn id_from_uri<'a>(&self, uri: &'a str) -> Option<&'a str> {
        uri.strip_prefix(self.scheme.as_str())?
            .strip_prefix(':')
            .filter(|id| !id.is_empty())
    }

    /// Text for the host to render; empty when nothing is stored.
    pub fn provide_text(&self, uri: &str) -> String {
        let Some(id) = self.id_from_uri(uri) else {
            debug!(uri, scheme = %self.scheme, "uri not under virtual scheme");
            return String::new();
        };
        self.registry.get(id).unwrap_or_else(|| {
            debug!(id, "virtual content not found, rendering empty document");
            String::new()
        })
    }
}
