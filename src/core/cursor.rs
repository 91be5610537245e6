// Custom cursor state: pointer position plus image-hover preview.

use super::constants::{
    CURSOR_HOVER_SCALE, CURSOR_SCALE_SEC, CURSOR_SIZE, PREVIEW_FADE_SEC, PREVIEW_SIZE,
};
use super::ease::{Ease, Tween};
use glam::IVec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerPhase {
    #[default]
    Idle,
    HoveringImage,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CursorState {
    pub position: IVec2,
    pub phase: PointerPhase,
    pub preview: String,
}

impl CursorState {
    #[inline]
    pub fn hovering(&self) -> bool {
        self.phase == PointerPhase::HoveringImage
    }

    pub fn pointer_move(&mut self, x: i32, y: i32) {
        self.position = IVec2::new(x, y);
    }

    /// Capture-phase enter on any element. Only images change state.
    pub fn pointer_enter(&mut self, tag_name: &str, src: Option<String>) {
        if !tag_name.eq_ignore_ascii_case("img") {
            return;
        }
        self.phase = PointerPhase::HoveringImage;
        self.preview = src.unwrap_or_default();
    }

    /// Capture-phase leave on any element.
    pub fn pointer_leave(&mut self) {
        self.phase = PointerPhase::Idle;
        self.preview.clear();
    }

    /// Top-left of the overlay so its center sits on the pointer.
    #[inline]
    pub fn overlay_origin(&self) -> IVec2 {
        self.position - IVec2::splat(CURSOR_SIZE / 2)
    }

    #[inline]
    pub fn target_scale(&self) -> f32 {
        if self.hovering() {
            CURSOR_HOVER_SCALE
        } else {
            1.0
        }
    }
}

/// Offset of the preview image inside the overlay so both share a center.
#[inline]
pub fn preview_offset() -> IVec2 {
    IVec2::splat((CURSOR_SIZE - PREVIEW_SIZE) / 2)
}

/// Eased scale of the cursor circle and opacity of the hover preview.
///
/// The preview restarts its fade from 0 each time a hover begins and drops to
/// 0 as soon as the hover ends; the scale eases both ways.
#[derive(Clone, Debug)]
pub struct CursorAnim {
    scale: Tween,
    preview: Tween,
    was_hovering: bool,
}

impl Default for CursorAnim {
    fn default() -> Self {
        Self {
            scale: Tween::settled(1.0, CURSOR_SCALE_SEC, Ease::OutCubic),
            preview: Tween::settled(0.0, PREVIEW_FADE_SEC, Ease::Linear),
            was_hovering: false,
        }
    }
}

impl CursorAnim {
    /// Advance by `dt_sec`; returns `(scale, preview_opacity)`.
    pub fn step(&mut self, cursor: &CursorState, dt_sec: f32) -> (f32, f32) {
        self.scale.retarget(cursor.target_scale());
        let scale = self.scale.advance(dt_sec);

        let hovering = cursor.hovering();
        let opacity = if hovering && !self.was_hovering {
            self.preview = Tween::fade_in(PREVIEW_FADE_SEC);
            self.preview.value()
        } else if hovering {
            self.preview.advance(dt_sec)
        } else {
            self.preview.snap(0.0);
            0.0
        };
        self.was_hovering = hovering;
        (scale, opacity)
    }
}
