//! `TetherBridge`: the session bridge of one extension activation.
//!
//! Constructed by the extension's activate hook and dropped (after `dispose`)
//! by its deactivate hook. Container notifications and backend events are
//! pushed in; payloads for each container and actions for the backend are
//! drained out by the host after every call.

use napi_derive::napi;
use tracing::info;

use tether_core::constants::VERSION;
use tether_core::models::ContainerKind;
use tether_observability::init_tracing;
use tether_session::BridgeRuntime;

use crate::conversions::error_codes::{serialization_error, to_napi_error};

fn parse_kind(kind: &str) -> napi::Result<ContainerKind> {
    kind.parse().map_err(to_napi_error)
}

#[napi]
pub struct TetherBridge {
    runtime: BridgeRuntime,
}

#[napi]
impl TetherBridge {
    /// `config_toml`: optional TOML configuration string.
    #[napi(constructor)]
    pub fn new(config_toml: Option<String>) -> napi::Result<Self> {
        let config = BridgeRuntime::load_config(config_toml.as_deref()).map_err(to_napi_error)?;
        init_tracing(&config.observability);
        let runtime = BridgeRuntime::new(config);
        info!(version = VERSION, "tether bridge activated");
        Ok(Self { runtime })
    }

    /// The floating panel was created; `reveal` when it opened in the foreground.
    #[napi]
    pub fn open_panel(&self, reveal: Option<bool>) -> napi::Result<()> {
        self.runtime
            .open_panel(reveal.unwrap_or(true))
            .map_err(to_napi_error)
    }

    #[napi]
    pub fn notify_visibility(&self, kind: String, visible: bool) -> napi::Result<()> {
        self.runtime
            .notify_visibility(parse_kind(&kind)?, visible)
            .map_err(to_napi_error)
    }

    #[napi]
    pub fn notify_disposed(&self, kind: String) -> napi::Result<()> {
        self.runtime.notify_disposed(parse_kind(&kind)?);
        Ok(())
    }

    /// A message the UI in `kind` posted to the extension.
    #[napi]
    pub fn post_from_ui(&self, kind: String, message: serde_json::Value) -> napi::Result<()> {
        self.runtime
            .post_from_ui(parse_kind(&kind)?, message)
            .map_err(to_napi_error)
    }

    /// Payloads to post into the container of `kind`, oldest first.
    #[napi]
    pub fn drain_ui(&self, kind: String) -> napi::Result<Vec<serde_json::Value>> {
        Ok(self.runtime.drain_ui(parse_kind(&kind)?))
    }

    /// Actions to hand to the backend, oldest first.
    #[napi]
    pub fn drain_backend(&self) -> napi::Result<Vec<serde_json::Value>> {
        self.runtime.drain_backend().map_err(to_napi_error)
    }

    #[napi]
    pub fn push_backend_event(&self, event: serde_json::Value) -> napi::Result<()> {
        self.runtime.push_backend_event(event).map_err(to_napi_error)
    }

    /// Content for a URI under the virtual document scheme; empty if unknown.
    #[napi]
    pub fn provide_virtual_document(&self, uri: String) -> String {
        self.runtime.provide_virtual_document(&uri)
    }

    #[napi]
    pub fn virtual_document_scheme(&self) -> String {
        self.runtime.virtual_document_scheme().to_string()
    }

    #[napi]
    pub fn snapshot(&self) -> napi::Result<serde_json::Value> {
        serde_json::to_value(self.runtime.snapshot()).map_err(serialization_error)
    }

    #[napi]
    pub fn metrics(&self) -> napi::Result<serde_json::Value> {
        serde_json::to_value(self.runtime.metrics()).map_err(serialization_error)
    }

    #[napi]
    pub fn dispose(&self) {
        self.runtime.dispose();
        info!("tether bridge disposed");
    }
}
