//! IPC protocol between Rust and the shell view's JavaScript.
//!
//! - **JS -> Rust**: `window.shoal.ipc.send(kind, payload)` posts
//!   `{"kind": ..., "payload": ...}` through wry's `window.ipc.postMessage`.
//! - **Rust -> JS**: [`js_dispatch_message`] builds a script that invokes the
//!   handler registered with `window.shoal.ipc.on(kind, fn)`.

use serde::{Deserialize, Serialize};

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload (arbitrary JSON).
    #[serde(default)]
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a plain string, structured JSON, or nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    #[default]
    None,
}

impl IpcPayload {
    /// The payload as a JSON value; `Null` when empty.
    pub fn to_value(&self) -> serde_json::Value {
        match self {
            IpcPayload::Text(s) => serde_json::Value::String(s.clone()),
            IpcPayload::Json(v) => v.clone(),
            IpcPayload::None => serde_json::Value::Null,
        }
    }

    /// Decode the payload into `T`.
    pub fn parse<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(self.to_value())
    }
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Create a simple text message.
    pub fn text(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Text(text.into()),
        }
    }

    /// Create a JSON message.
    pub fn json(kind: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Json(value),
        }
    }
}

/// Installs `window.shoal.ipc` in the shell view.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.shoal = window.shoal || {};
    window.shoal.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.shoal && window.shoal.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}
