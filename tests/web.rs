#![cfg(target_arch = "wasm32")]

use shader_view::{normalized_pointer, ClientRect, SetupError};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_canvas(w: u32, h: u32) -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    let style = canvas.style();
    style.set_property("width", &format!("{w}px")).unwrap();
    style.set_property("height", &format!("{h}px")).unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn canvas_center_maps_to_origin() {
    let canvas = mount_canvas(320, 200);
    let r = canvas.get_bounding_client_rect();
    assert!(r.width() > 0.0 && r.height() > 0.0);

    let rect = ClientRect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    };
    let p = normalized_pointer(r.left() + r.width() / 2.0, r.top() + r.height() / 2.0, rect).unwrap();
    assert!(p.x.abs() < 1e-9 && p.y.abs() < 1e-9, "{p:?}");
    canvas.remove();
}

#[wasm_bindgen_test]
fn canvas_offers_webgl2() {
    let canvas = mount_canvas(16, 16);
    let ctx = canvas.get_context("webgl2").unwrap();
    assert!(ctx.is_some());
    canvas.remove();
}

#[wasm_bindgen_test]
fn setup_errors_become_js_strings() {
    let value: wasm_bindgen::JsValue = SetupError::CanvasNotFound("canvas".into()).into();
    assert_eq!(value.as_string().as_deref(), Some("canvas #canvas not found"));
}
