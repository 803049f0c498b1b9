//! WASM surface bootstrap for MBH — prepares the host page before the game
//! runtime loads.
//!
//! Compiled via `wasm-pack build --target web` and evaluated by the shell
//! page ahead of the game module. The page keeps the returned
//! [`SurfaceConfig`]; the game discovers the canvas through it.

use mbh_surface::{AttachOnce, SurfaceSpec};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlCanvasElement};

/// The configuration record handed back to the hosting page.
///
/// Later-loaded code reads the rendering surface through this value instead
/// of an ambient global. Dropping the record does not detach the surface.
#[wasm_bindgen]
pub struct SurfaceConfig {
    canvas: HtmlCanvasElement,
}

#[wasm_bindgen]
impl SurfaceConfig {
    /// The rendering-surface handle.
    #[wasm_bindgen(getter)]
    pub fn canvas(&self) -> HtmlCanvasElement {
        self.canvas.clone()
    }
}

/// Create and configure the rendering surface, then schedule its attachment
/// to `document.body` for when the page's structural content is ready.
///
/// The surface is fully configured before the ready listener is registered,
/// so no observer can see a half-built canvas. Platform faults (missing
/// `window`, element allocation failure) propagate to the caller as a thrown
/// value; nothing is caught or retried at this layer.
#[wasm_bindgen(js_name = bootstrapSurface)]
pub fn bootstrap_surface() -> Result<SurfaceConfig, JsValue> {
    console_error_panic_hook_setup();

    let document = document()?;
    let canvas = create_surface(&document, &SurfaceSpec::default())?;
    schedule_attach(&document, &canvas)?;

    Ok(SurfaceConfig { canvas })
}

// ─── Surface construction ────────────────────────────────────────────────

/// Allocate the `<canvas>` element and apply the fixed interaction policy.
fn create_surface(document: &Document, spec: &SurfaceSpec) -> Result<HtmlCanvasElement, JsValue> {
    let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
    canvas.set_id(spec.id);
    canvas.set_tab_index(spec.tab_index);

    if spec.suppress_context_menu {
        // Right-click belongs to the game; the native menu never opens over
        // the surface.
        let on_context_menu =
            Closure::<dyn FnMut(web_sys::Event)>::new(|event: web_sys::Event| {
                event.prevent_default();
            });
        canvas.set_oncontextmenu(Some(on_context_menu.as_ref().unchecked_ref()));
        // Handler lives for the page lifetime.
        on_context_menu.forget();
    }

    log::debug!("surface created: #{}", spec.id);
    Ok(canvas)
}

/// Register the one-shot listener that appends the surface to the page body
/// once structural parsing completes.
///
/// If the signal never fires (the listener was registered after the page
/// already finished parsing), the surface stays detached — no timeout, no
/// readyState fallback.
fn schedule_attach(document: &Document, canvas: &HtmlCanvasElement) -> Result<(), JsValue> {
    let latch = AttachOnce::new();
    let doc = document.clone();
    let surface = canvas.clone();

    let on_ready = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        if !latch.fire() {
            return;
        }
        let Some(body) = doc.body() else {
            return;
        };
        match body.append_child(&surface) {
            // A mutation fault cannot propagate out of an event listener;
            // it lands in the console like any unhandled handler exception.
            Err(err) => web_sys::console::error_1(&err),
            Ok(_) => log::debug!("surface attached to body"),
        }
    });

    let listener: &js_sys::Function = on_ready.as_ref().unchecked_ref();
    document.add_event_listener_with_callback("DOMContentLoaded", listener)?;
    // Listener lives for the page lifetime.
    on_ready.forget();
    Ok(())
}

/// Resolve the page document from the global `window`.
fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no window.document in this environment"))
}

// ─── Panic hook for WASM debugging ───────────────────────────────────────

fn console_error_panic_hook_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("MBH bootstrap panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
