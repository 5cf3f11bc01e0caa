use std::collections::HashMap;

use parking_lot::Mutex;
use serde::Deserialize;
use tower_lsp::Client;
use tower_lsp::lsp_types::MessageType;

use crate::completion::resolver::ResolverRegistry;

pub mod completion;
pub mod context;
pub mod server;
pub mod symbols;
pub mod types;

/// Client-supplied configuration, read from the `initializationOptions`
/// of the `initialize` request. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Cap on the number of completion items returned per request.
    /// When the cap truncates the list, the response is marked
    /// incomplete so the client re-requests as the user types.
    pub max_items: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_items: 100 }
    }
}

pub struct Backend {
    name: String,
    version: String,
    /// Maps a file URI to its current text.
    open_files: Mutex<HashMap<String, String>>,
    config: Mutex<Config>,
    /// Grammar-context dispatch table; populated once here, read-only
    /// for the lifetime of the server.
    registry: ResolverRegistry,
    client: Option<Client>,
}

impl Backend {
    pub fn new(client: Client) -> Self {
        Self {
            name: "BallerinaLSP".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            open_files: Mutex::new(HashMap::new()),
            config: Mutex::new(Config::default()),
            registry: ResolverRegistry::new(),
            client: Some(client),
        }
    }

    /// Backend without a client connection, for tests that drive the
    /// `LanguageServer` trait directly.
    pub fn new_test() -> Self {
        Self {
            name: "BallerinaLSP".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            open_files: Mutex::new(HashMap::new()),
            config: Mutex::new(Config::default()),
            registry: ResolverRegistry::new(),
            client: None,
        }
    }

    async fn log(&self, typ: MessageType, message: String) {
        if let Some(client) = &self.client {
            client.log_message(typ, message).await;
        }
    }
}
