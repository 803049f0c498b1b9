#![cfg(target_arch = "wasm32")]

//! Browser-side tests: surface bootstrap contract (mbh-wasm).
//!
//! The test harness page has finished loading by the time these run, so
//! `DOMContentLoaded` never fires after `bootstrapSurface` — which makes the
//! stay-detached behavior directly observable here.

use mbh_wasm::bootstrap_surface;
use wasm_bindgen_test::*;
use web_sys::{Event, EventInit};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn config_exposes_a_configured_canvas() {
    let config = bootstrap_surface().unwrap();
    let canvas = config.canvas();

    assert_eq!(canvas.id(), "canvas");
    assert_eq!(canvas.tab_index(), -1);
}

#[wasm_bindgen_test]
fn context_menu_default_is_always_suppressed() {
    let config = bootstrap_surface().unwrap();
    let canvas = config.canvas();

    let init = EventInit::new();
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("contextmenu", &init).unwrap();

    // dispatch_event returns false when a handler called preventDefault
    let not_prevented = canvas.dispatch_event(&event).unwrap();
    assert!(!not_prevented, "native menu should be suppressed");
    assert!(event.default_prevented());
}

#[wasm_bindgen_test]
fn surface_stays_detached_when_ready_signal_never_fires() {
    let config = bootstrap_surface().unwrap();

    // The harness page parsed long ago; with no further DOMContentLoaded the
    // canvas must stay outside the visible tree, and no fault is raised.
    assert!(!config.canvas().is_connected());
}

#[wasm_bindgen_test]
fn each_bootstrap_yields_a_distinct_handle() {
    let first = bootstrap_surface().unwrap();
    let second = bootstrap_surface().unwrap();

    assert!(
        first.canvas() != second.canvas(),
        "each bootstrap call owns its own surface"
    );
}
