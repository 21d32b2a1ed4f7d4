//! An editor bound to a render adapter.
//!
//! [`EditSession`] runs each stimulus to completion: the edit engine handles
//! it, and if the path changed the serialized curve and overlay are pushed to
//! the adapter before the call returns. [`SharedEditor`] puts a session behind
//! one lock for hosts that deliver pointer events from several threads.

use curvekit_core::{thread_safe, PathError, ThreadSafe};

use crate::editor::{EditOutcome, PathEditor, PointerEvent};
use crate::renderer::{render_path, RenderAdapter};

/// A path editor and the surface that shows it.
#[derive(Debug)]
pub struct EditSession<R: RenderAdapter> {
    editor: PathEditor,
    adapter: R,
}

impl<R: RenderAdapter> EditSession<R> {
    /// Binds `editor` to `adapter` and draws the initial frame.
    pub fn new(editor: PathEditor, mut adapter: R) -> Result<Self, PathError> {
        render_path(editor.path(), &mut adapter)?;
        tracing::debug!("Edit session started with {} nodes", editor.path().len());
        Ok(Self { editor, adapter })
    }

    /// Handles one pointer stimulus, redrawing if it changed the path.
    pub fn handle(&mut self, event: PointerEvent) -> Result<EditOutcome, PathError> {
        let outcome = self.editor.handle(event);
        if outcome.is_mutation() {
            self.redraw()?;
        }
        Ok(outcome)
    }

    /// Feeds a recorded sequence of stimuli in order, stopping at the first failure.
    pub fn replay<I>(&mut self, events: I) -> Result<Vec<EditOutcome>, PathError>
    where
        I: IntoIterator<Item = PointerEvent>,
    {
        events.into_iter().map(|event| self.handle(event)).collect()
    }

    /// Pushes the current path to the adapter.
    pub fn redraw(&mut self) -> Result<(), PathError> {
        render_path(self.editor.path(), &mut self.adapter)
    }

    pub fn editor(&self) -> &PathEditor {
        &self.editor
    }

    /// Mutable access to the engine. Call [`EditSession::redraw`] after editing the path directly.
    pub fn editor_mut(&mut self) -> &mut PathEditor {
        &mut self.editor
    }

    pub fn adapter(&self) -> &R {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut R {
        &mut self.adapter
    }

    pub fn into_parts(self) -> (PathEditor, R) {
        (self.editor, self.adapter)
    }
}

/// An [`EditSession`] shared between threads, one stimulus per lock.
pub struct SharedEditor<R: RenderAdapter> {
    inner: ThreadSafe<EditSession<R>>,
}

impl<R: RenderAdapter> SharedEditor<R> {
    pub fn new(session: EditSession<R>) -> Self {
        Self {
            inner: thread_safe(session),
        }
    }

    /// Handles `event` while holding the session lock for the whole stimulus.
    pub fn dispatch(&self, event: PointerEvent) -> Result<EditOutcome, PathError> {
        self.inner.lock().handle(event)
    }

    /// Runs `f` with exclusive access to the session.
    pub fn with_session<T>(&self, f: impl FnOnce(&mut EditSession<R>) -> T) -> T {
        let mut session = self.inner.lock();
        f(&mut session)
    }
}

impl<R: RenderAdapter> Clone for SharedEditor<R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Parses a JSON array of pointer events, e.g.
/// `[{"kind":"down","x":101,"y":101},{"kind":"up","x":101,"y":101}]`.
pub fn load_script(json: &str) -> Result<Vec<PointerEvent>, serde_json::Error> {
    serde_json::from_str(json)
}
