use tracing::debug;

use super::Document;

/// Loading phases of a hosted document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    /// Structure parsed; content-loaded handlers have run.
    Interactive,
    Complete,
}

type Handler<D> = Box<dyn FnOnce(&mut D)>;

/// Owns a document and fires its content-loaded handlers exactly once.
pub struct Host<D> {
    document: D,
    state: ReadyState,
    pending: Vec<Handler<D>>,
}

impl<D: Document> Host<D> {
    pub fn new(document: D) -> Self {
        Self {
            document,
            state: ReadyState::Loading,
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> ReadyState {
        self.state
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// Register a handler for the content-loaded signal. Handlers added after
    /// the signal has fired are dropped without running.
    pub fn on_content_loaded<F>(&mut self, handler: F)
    where
        F: FnOnce(&mut D) + 'static,
    {
        if self.state != ReadyState::Loading {
            debug!(state = ?self.state, "content-loaded already fired, ignoring handler");
            return;
        }
        self.pending.push(Box::new(handler));
    }

    /// Mark the structure as parsed and run pending handlers in registration
    /// order. Later calls do nothing.
    pub fn finish_parsing(&mut self) {
        if self.state != ReadyState::Loading {
            return;
        }
        self.state = ReadyState::Interactive;
        let handlers = std::mem::take(&mut self.pending);
        debug!(handlers = handlers.len(), "content loaded");
        for handler in handlers {
            handler(&mut self.document);
        }
    }

    /// Finish loading, firing content-loaded first if it has not happened.
    pub fn finish_loading(&mut self) {
        self.finish_parsing();
        self.state = ReadyState::Complete;
    }

    pub fn into_document(self) -> D {
        self.document
    }
}
