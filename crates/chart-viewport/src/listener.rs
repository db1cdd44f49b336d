// File: crates/chart-viewport/src/listener.rs
// Summary: Viewport-change observer trait with a no-op default and closure support.

use crate::viewport::Viewport;

/// Receives the current viewport every time the computator re-runs its
/// constraint routine, whether or not the value changed.
pub trait ViewportChangeListener {
    fn on_viewport_changed(&mut self, viewport: &Viewport);
}

/// Listener installed by default; ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct DummyViewportChangeListener;

impl ViewportChangeListener for DummyViewportChangeListener {
    fn on_viewport_changed(&mut self, _viewport: &Viewport) {}
}

impl<F> ViewportChangeListener for F
where
    F: FnMut(&Viewport),
{
    fn on_viewport_changed(&mut self, viewport: &Viewport) {
        self(viewport)
    }
}
