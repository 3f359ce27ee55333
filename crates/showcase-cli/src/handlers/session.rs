//! Interactive session: wires the controller and the renderer together.
//!
//! The renderer runs on its own thread and owns the terminal; the controller
//! runs on the async runtime in the main thread. They talk over two
//! channels: view models one way, intents the other.

use std::sync::mpsc;
use std::thread;

use anyhow::Result;
use showcase_client::ApiClient;
use tokio::runtime::Runtime;

use crate::controller;
use crate::presentation::renderer::TuiRenderer;

pub fn handle(runtime: Runtime, client: ApiClient) -> Result<()> {
    let (ui_tx, ui_rx) = mpsc::channel();
    let (intent_tx, intent_rx) = tokio::sync::mpsc::unbounded_channel();

    let renderer_handle = thread::spawn(move || {
        let renderer = TuiRenderer::new(intent_tx);
        renderer.run(ui_rx)
    });

    let result = runtime.block_on(controller::run(client, intent_rx, ui_tx));

    match renderer_handle.join() {
        Ok(renderer_result) => renderer_result?,
        Err(_) => {
            tracing::error!("renderer thread panicked");
        }
    }

    result
}
