// Mutable page state shared by the event handlers and the frame loop.

use super::cursor::CursorState;
use super::selection::Selection;

#[derive(Clone, Debug, Default)]
pub struct PageState {
    pub selection: Selection,
    pub cursor: CursorState,
    /// Latest raw page scroll progress; the frame loop smooths it.
    pub scroll_progress: f32,
    scroll_measured: bool,
}

impl PageState {
    /// Store a new scroll progress sample. Returns true when it differs from
    /// the previous sample; the first sample (taken at mount) never counts as
    /// a change, so the page starts on its plain background.
    pub fn record_scroll(&mut self, progress: f32) -> bool {
        let changed = self.scroll_measured && progress != self.scroll_progress;
        self.scroll_measured = true;
        self.scroll_progress = progress;
        changed
    }
}
