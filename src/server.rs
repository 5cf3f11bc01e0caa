/// LSP server trait implementation.
///
/// This module contains the `impl LanguageServer for Backend` block: the
/// protocol lifecycle (initialize, didOpen, didChange, didClose) and the
/// completion handler, which is the orchestrating engine for the
/// resolver dispatch — it builds the per-request context snapshot and
/// symbol catalog, looks up the resolver for the detected grammar
/// context, and serializes the resulting items to the wire type.
use tower_lsp::LanguageServer;
use tower_lsp::jsonrpc::{Error, ErrorCode, Result};
use tower_lsp::lsp_types::*;
use tracing::{debug, error};

use crate::{Backend, Config, context, symbols};

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        if let Some(options) = params.initialization_options {
            match serde_json::from_value::<Config>(options) {
                Ok(config) => *self.config.lock() = config,
                Err(e) => debug!("ignoring malformed initializationOptions: {e}"),
            }
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                completion_provider: Some(CompletionOptions {
                    resolve_provider: Some(false),
                    trigger_characters: Some(vec![
                        ":".to_string(),
                        "=".to_string(),
                        " ".to_string(),
                    ]),
                    all_commit_characters: None,
                    work_done_progress_options: WorkDoneProgressOptions {
                        work_done_progress: None,
                    },
                    completion_item: None,
                }),
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                ..ServerCapabilities::default()
            },
            server_info: Some(ServerInfo {
                name: self.name.clone(),
                version: Some(self.version.clone()),
            }),
            offset_encoding: None,
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.log(MessageType::INFO, "BallerinaLSP initialized!".to_string())
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;
        let uri = doc.uri.to_string();

        self.open_files.lock().insert(uri.clone(), doc.text);

        self.log(MessageType::INFO, format!("Opened file: {}", uri))
            .await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        let uri = params.text_document.uri.to_string();

        // Full sync: the last change carries the whole document.
        if let Some(change) = params.content_changes.into_iter().next_back() {
            self.open_files.lock().insert(uri, change.text);
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri.to_string();

        self.open_files.lock().remove(&uri);

        self.log(MessageType::INFO, format!("Closed file: {}", uri))
            .await;
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri.to_string();
        let position = params.text_document_position.position;

        let content = self.open_files.lock().get(&uri).cloned();
        let Some(content) = content else {
            return Ok(None);
        };

        // Fresh per-request snapshots; resolvers only read these.
        let ctx = context::build_context(&content, position);
        let catalog = symbols::visible_symbols(&content, position);

        debug!(
            context = ctx.context_kind.as_str(),
            statement = ctx.statement.as_str(),
            symbols = catalog.len(),
            "resolving completion"
        );

        let items = match self.registry.resolve(ctx.context_kind, &ctx, &catalog) {
            Ok(items) => items,
            Err(e) => {
                // A missing dispatch entry is an engine bug, not a
                // normal empty result; surface it to the client.
                error!("completion dispatch failed: {e}");
                return Err(Error {
                    code: ErrorCode::InternalError,
                    message: e.to_string().into(),
                    data: None,
                });
            }
        };

        let max_items = self.config.lock().max_items;
        let mut lsp_items: Vec<CompletionItem> = items.iter().map(|i| i.to_lsp()).collect();

        if lsp_items.len() > max_items {
            lsp_items.truncate(max_items);
            return Ok(Some(CompletionResponse::List(CompletionList {
                is_incomplete: true,
                items: lsp_items,
            })));
        }

        Ok(Some(CompletionResponse::Array(lsp_items)))
    }
}
