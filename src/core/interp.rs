// Scroll progress and piecewise-linear mapping.
//
// Everything here is a pure function of its inputs so the scroll handler can
// recompute styles on every tick without keeping history.

use super::constants::{
    BG_LIGHTNESS_PCT, BG_SATURATION_PCT, DETAIL_SCALE_STOPS, FADE_STOPS, ITEM_OFFSET_STOPS,
};
use smallvec::SmallVec;

/// Piecewise-linear map from an input range to output values.
///
/// Inputs must be strictly increasing. Samples outside the first/last input
/// clamp to the first/last output. A map with no stops samples as 0.
#[derive(Clone, Debug, PartialEq)]
pub struct Piecewise {
    stops: SmallVec<[(f32, f32); 4]>,
}

impl Piecewise {
    pub fn new(stops: &[(f32, f32)]) -> Self {
        debug_assert!(
            stops.windows(2).all(|w| w[0].0 < w[1].0),
            "piecewise inputs must be strictly increasing"
        );
        Self {
            stops: stops.iter().copied().collect(),
        }
    }

    /// Build from parallel input/output slices. Only the first
    /// `min(inputs.len(), outputs.len())` pairs are used.
    pub fn from_parallel(inputs: &[f32], outputs: &[f32]) -> Self {
        let stops: SmallVec<[(f32, f32); 4]> =
            inputs.iter().copied().zip(outputs.iter().copied()).collect();
        Self::new(&stops)
    }

    pub fn item_offset() -> Self {
        Self::new(&ITEM_OFFSET_STOPS)
    }

    pub fn fade() -> Self {
        Self::new(&FADE_STOPS)
    }

    pub fn detail_scale() -> Self {
        Self::new(&DETAIL_SCALE_STOPS)
    }

    pub fn sample(&self, x: f32) -> f32 {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(f), Some(l)) => (*f, *l),
            _ => return 0.0,
        };
        if x.is_nan() || x <= first.0 {
            return first.1;
        }
        if x >= last.0 {
            return last.1;
        }
        for w in self.stops.windows(2) {
            let (x0, y0) = w[0];
            let (x1, y1) = w[1];
            if x <= x1 {
                let t = (x - x0) / (x1 - x0);
                return y0 + (y1 - y0) * t;
            }
        }
        last.1
    }
}

/// Progress of an element through the viewport.
///
/// 0 when the element's top edge sits on the viewport's bottom edge, 1 when
/// its bottom edge sits on the viewport's top edge.
#[inline]
pub fn element_progress(top: f32, height: f32, viewport_height: f32) -> f32 {
    let travel = viewport_height + height;
    if travel.is_nan() || travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}

/// Whole-page scroll progress.
#[inline]
pub fn page_progress(scroll_y: f32, scroll_height: f32, viewport_height: f32) -> f32 {
    let max_scroll = scroll_height - viewport_height;
    if max_scroll.is_nan() || max_scroll <= 0.0 {
        return 0.0;
    }
    (scroll_y / max_scroll).clamp(0.0, 1.0)
}

#[inline]
pub fn hue_for_progress(progress: f32) -> u16 {
    let p = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    ((p * 360.0).round() as u16) % 360
}

pub fn background_hsl(progress: f32) -> String {
    format!(
        "hsl({}, {}%, {}%)",
        hue_for_progress(progress),
        BG_SATURATION_PCT,
        BG_LIGHTNESS_PCT
    )
}

/// Styles derived for one scroll-tracked element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedStyle {
    pub offset_y: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl TrackedStyle {
    pub fn css_transform(&self) -> String {
        format!("translateY({:.2}px) scale({:.4})", self.offset_y, self.scale)
    }
}

/// How a tracked element reacts to its own scroll progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackKind {
    /// Project list entry: slides up and fades in/out.
    Item,
    /// Detail pane: grows to full size and fades in/out.
    Detail,
}

impl TrackKind {
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "item" => Some(Self::Item),
            "detail" => Some(Self::Detail),
            _ => None,
        }
    }

    pub fn style_at(self, progress: f32) -> TrackedStyle {
        let opacity = Piecewise::fade().sample(progress);
        match self {
            Self::Item => TrackedStyle {
                offset_y: Piecewise::item_offset().sample(progress),
                scale: 1.0,
                opacity,
            },
            Self::Detail => TrackedStyle {
                offset_y: 0.0,
                scale: Piecewise::detail_scale().sample(progress),
                opacity,
            },
        }
    }
}
