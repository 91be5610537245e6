// Host-side tests for scroll progress and piecewise mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod folio {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod interp {
        include!("../src/core/interp.rs");
    }
}

use folio::interp::*;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn offset_map_hits_endpoints_and_midpoint() {
    let offset = Piecewise::from_parallel(&[0.0, 1.0], &[100.0, -100.0]);
    assert_eq!(offset.sample(0.0), 100.0);
    assert_eq!(offset.sample(1.0), -100.0);
    assert_eq!(offset.sample(0.5), 0.0);
    assert!(approx(offset.sample(0.25), 50.0));
}

#[test]
fn item_offset_preset_matches_parallel_form() {
    let preset = Piecewise::item_offset();
    let explicit = Piecewise::from_parallel(&[0.0, 1.0], &[100.0, -100.0]);
    assert_eq!(preset, explicit);
}

#[test]
fn fade_map_is_zero_at_edges_and_one_in_plateau() {
    let fade = Piecewise::from_parallel(&[0.0, 0.2, 0.8, 1.0], &[0.0, 1.0, 1.0, 0.0]);
    assert_eq!(fade.sample(0.0), 0.0);
    assert_eq!(fade.sample(1.0), 0.0);
    for p in [0.2, 0.35, 0.5, 0.65, 0.8] {
        assert_eq!(fade.sample(p), 1.0, "p = {}", p);
    }
    assert!(approx(fade.sample(0.1), 0.5));
    assert!(approx(fade.sample(0.9), 0.5));
    assert_eq!(fade, Piecewise::fade());
}

#[test]
fn out_of_range_inputs_clamp_instead_of_extrapolating() {
    let offset = Piecewise::item_offset();
    assert_eq!(offset.sample(-0.5), 100.0);
    assert_eq!(offset.sample(1.5), -100.0);

    let fade = Piecewise::fade();
    assert_eq!(fade.sample(-3.0), 0.0);
    assert_eq!(fade.sample(7.0), 0.0);
    assert_eq!(fade.sample(f32::NAN), 0.0);
}

#[test]
fn single_stop_map_is_constant() {
    let flat = Piecewise::new(&[(0.5, 42.0)]);
    assert_eq!(flat.sample(0.0), 42.0);
    assert_eq!(flat.sample(0.5), 42.0);
    assert_eq!(flat.sample(1.0), 42.0);
}

#[test]
fn hue_follows_progress_and_wraps() {
    assert_eq!(hue_for_progress(0.0), 0);
    assert_eq!(hue_for_progress(0.5), 180);
    assert_eq!(hue_for_progress(1.0), 0);
    assert_eq!(hue_for_progress(0.25), 90);
    assert_eq!(hue_for_progress(-1.0), 0);
    assert_eq!(hue_for_progress(2.0), 0);
}

#[test]
fn background_uses_full_saturation_near_white() {
    assert_eq!(background_hsl(0.5), "hsl(180, 100%, 98%)");
    assert_eq!(background_hsl(0.0), "hsl(0, 100%, 98%)");
}

#[test]
fn element_progress_spans_enter_to_exit() {
    let viewport = 800.0;
    let height = 200.0;
    // Top edge on the viewport's bottom edge
    assert_eq!(element_progress(viewport, height, viewport), 0.0);
    // Bottom edge on the viewport's top edge
    assert_eq!(element_progress(-height, height, viewport), 1.0);
    // Halfway through the travel
    assert!(approx(element_progress(300.0, height, viewport), 0.5));
    // Not yet visible / already gone
    assert_eq!(element_progress(2000.0, height, viewport), 0.0);
    assert_eq!(element_progress(-2000.0, height, viewport), 1.0);
}

#[test]
fn element_progress_degenerate_viewport_is_zero() {
    assert_eq!(element_progress(0.0, 0.0, 0.0), 0.0);
    assert_eq!(element_progress(10.0, -50.0, 20.0), 0.0);
}

#[test]
fn page_progress_clamps_and_handles_short_pages() {
    assert_eq!(page_progress(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(page_progress(1000.0, 3000.0, 1000.0), 0.5);
    assert_eq!(page_progress(2000.0, 3000.0, 1000.0), 1.0);
    assert_eq!(page_progress(2500.0, 3000.0, 1000.0), 1.0);
    // Page shorter than the viewport cannot scroll
    assert_eq!(page_progress(0.0, 500.0, 1000.0), 0.0);
}

#[test]
fn tracked_styles_per_kind() {
    let item = TrackKind::Item.style_at(0.5);
    assert_eq!(item.offset_y, 0.0);
    assert_eq!(item.scale, 1.0);
    assert_eq!(item.opacity, 1.0);

    let detail = TrackKind::Detail.style_at(0.0);
    assert_eq!(detail.offset_y, 0.0);
    assert!(approx(detail.scale, 0.8));
    assert_eq!(detail.opacity, 0.0);

    let detail_end = TrackKind::Detail.style_at(1.0);
    assert_eq!(detail_end.scale, 1.0);
    assert_eq!(detail_end.opacity, 0.0);
}

#[test]
fn track_kind_parses_attribute_values() {
    assert_eq!(TrackKind::from_attr("item"), Some(TrackKind::Item));
    assert_eq!(TrackKind::from_attr("detail"), Some(TrackKind::Detail));
    assert_eq!(TrackKind::from_attr("other"), None);
}

#[test]
fn css_transform_formats_both_components() {
    let style = TrackKind::Item.style_at(0.0);
    assert_eq!(style.css_transform(), "translateY(100.00px) scale(1.0000)");
}

#[test]
fn empty_map_samples_as_zero() {
    let empty = Piecewise::from_parallel(&[], &[]);
    assert_eq!(empty.sample(0.5), 0.0);
    assert_eq!(Piecewise::new(&[]).sample(-1.0), 0.0);
}

#[test]
fn mismatched_parallel_slices_use_the_shorter_length() {
    let extra_output = Piecewise::from_parallel(&[0.0, 1.0], &[10.0, 20.0, 99.0]);
    assert_eq!(extra_output, Piecewise::new(&[(0.0, 10.0), (1.0, 20.0)]));
    assert_eq!(extra_output.sample(2.0), 20.0);

    let extra_input = Piecewise::from_parallel(&[0.0, 1.0, 2.0], &[5.0]);
    assert_eq!(extra_input.sample(2.0), 5.0);
}
