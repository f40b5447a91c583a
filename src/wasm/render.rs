use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    window, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent, WebGl2RenderingContext as GL,
    WebGlProgram, WebGlVertexArrayObject, WheelEvent, Window,
};

use super::{fetch, shader};
use crate::config::Config;
use crate::error::SetupError;
use crate::frame::{FrameUniforms, Renderer, Scheduler, Viewer};
use crate::input::{ClientRect, Surface};

/// Clip-space corners drawn as a triangle strip.
const QUAD: [f32; 8] = [-1.0, -1.0, 1.0, -1.0, -1.0, 1.0, 1.0, 1.0];

/// Pixels per wheel "line" when the browser reports line deltas.
const WHEEL_LINE_PX: f64 = 16.0;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Schedules the shared frame callback with `requestAnimationFrame`.
#[derive(Clone)]
struct AnimationFrame {
    window: Window,
    callback: FrameCallback,
}

impl Scheduler for AnimationFrame {
    fn request_frame(&mut self) {
        let slot = self.callback.borrow();
        let Some(callback) = slot.as_ref() else {
            log::error!("frame requested before callback was installed");
            return;
        };
        if let Err(err) = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            log::error!("requestAnimationFrame failed: {err:?}");
        }
    }
}

struct GlRenderer {
    gl: GL,
    program: WebGlProgram,
    vao: WebGlVertexArrayObject,
    uniforms: shader::Uniforms,
}

impl Renderer for GlRenderer {
    fn draw(&mut self, u: &FrameUniforms) {
        let gl = &self.gl;
        gl.viewport(0, 0, u.resolution[0] as i32, u.resolution[1] as i32);
        gl.clear_color(0.0, 0.0, 0.0, 1.0);
        gl.clear(GL::COLOR_BUFFER_BIT);

        gl.use_program(Some(&self.program));
        gl.bind_vertex_array(Some(&self.vao));

        let loc = &self.uniforms;
        gl.uniform1f(loc.time.as_ref(), u.time);
        gl.uniform2f(loc.resolution.as_ref(), u.resolution[0], u.resolution[1]);
        gl.uniform1f(loc.zoom.as_ref(), u.zoom);
        gl.uniform2f(loc.mouse.as_ref(), u.mouse[0], u.mouse[1]);
        gl.uniform2f(loc.pan.as_ref(), u.pan[0], u.pan[1]);

        gl.draw_arrays(GL::TRIANGLE_STRIP, 0, 4);
    }
}

/// Fetches the shaders, builds the GL resources, wires input and starts the
/// frame loop.
pub async fn start(canvas: HtmlCanvasElement, config: Config) -> Result<(), SetupError> {
    let window = window().ok_or(SetupError::NoWindow)?;
    let surface = fit_to_window(&window, &canvas);

    let gl = context(&canvas)?;

    log::info!("fetching {} and {}", config.vertex_url, config.fragment_url);
    let vertex_src = fetch::fetch_text(&config.vertex_url).await?;
    let fragment_src = fetch::fetch_text(&config.fragment_url).await?;
    let program = shader::build_program(&gl, &vertex_src, &fragment_src)?;

    let vao = upload_quad(&gl, &program)?;
    let uniforms = shader::Uniforms::locate(&gl, &program);
    log::info!("shader program ready");

    let mut renderer = GlRenderer {
        gl,
        program,
        vao,
        uniforms,
    };
    let viewer = Rc::new(RefCell::new(Viewer::new(&config.view, surface)));
    let scheduler = AnimationFrame {
        window: window.clone(),
        callback: Rc::new(RefCell::new(None)),
    };

    // The callback holds its own scheduler so each tick can request the next.
    {
        let viewer = viewer.clone();
        let mut next = scheduler.clone();
        *scheduler.callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            viewer.borrow_mut().tick(&mut next, &mut renderer);
        }) as Box<dyn FnMut()>));
    }

    wire_input(&window, &canvas, &viewer, &scheduler)?;

    viewer.borrow_mut().start(&mut scheduler.clone());
    Ok(())
}

fn context(canvas: &HtmlCanvasElement) -> Result<GL, SetupError> {
    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &JsValue::from_str("antialias"), &JsValue::TRUE)?;
    canvas
        .get_context_with_context_options("webgl2", &options)?
        .ok_or(SetupError::WebGl2Unavailable)?
        .dyn_into::<GL>()
        .map_err(|_| SetupError::WebGl2Unavailable)
}

fn upload_quad(gl: &GL, program: &WebGlProgram) -> Result<WebGlVertexArrayObject, SetupError> {
    let buffer = gl.create_buffer().ok_or(SetupError::Resource("vertex buffer"))?;
    gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
    let positions = js_sys::Float32Array::from(&QUAD[..]);
    gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &positions, GL::STATIC_DRAW);

    let vao = gl
        .create_vertex_array()
        .ok_or(SetupError::Resource("vertex array"))?;
    gl.bind_vertex_array(Some(&vao));

    let position = shader::attribute_location(gl, program)?;
    gl.enable_vertex_attrib_array(position);
    gl.vertex_attrib_pointer_with_i32(position, 2, GL::FLOAT, false, 0, 0);
    Ok(vao)
}

/// Sizes the drawing buffer to the window in device pixels and the element to
/// the window in CSS pixels.
fn fit_to_window(window: &Window, canvas: &HtmlCanvasElement) -> Surface {
    let dpr = match window.device_pixel_ratio() {
        r if r > 0.0 => r,
        _ => 1.0,
    };
    let css_w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_else(|| f64::from(canvas.client_width()));
    let css_h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or_else(|| f64::from(canvas.client_height()));

    canvas.set_width((css_w * dpr) as u32);
    canvas.set_height((css_h * dpr) as u32);
    let style = canvas.style();
    style.set_property("width", &format!("{css_w}px")).ok();
    style.set_property("height", &format!("{css_h}px")).ok();

    Surface::new(f64::from(canvas.width()), f64::from(canvas.height()))
}

fn client_rect(canvas: &HtmlCanvasElement) -> ClientRect {
    let rect = canvas.get_bounding_client_rect();
    ClientRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

fn listen<T>(target: &EventTarget, event: &str, closure: Closure<T>) -> Result<(), SetupError>
where
    T: ?Sized + WasmClosure,
{
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page.
    closure.forget();
    Ok(())
}

fn wire_input(
    window: &Window,
    canvas: &HtmlCanvasElement,
    viewer: &Rc<RefCell<Viewer>>,
    scheduler: &AnimationFrame,
) -> Result<(), SetupError> {
    let resize = {
        let (window, canvas, viewer) = (window.clone(), canvas.clone(), viewer.clone());
        Closure::wrap(Box::new(move || {
            let surface = fit_to_window(&window, &canvas);
            viewer.borrow_mut().resize(surface);
        }) as Box<dyn FnMut()>)
    };
    listen(window, "resize", resize)?;

    let mousedown = {
        let viewer = viewer.clone();
        Closure::wrap(Box::new(move |e: MouseEvent| {
            viewer
                .borrow_mut()
                .press(f64::from(e.client_x()), f64::from(e.client_y()));
        }) as Box<dyn FnMut(_)>)
    };
    listen(canvas, "mousedown", mousedown)?;

    let mousemove = {
        let (canvas_ref, viewer) = (canvas.clone(), viewer.clone());
        Closure::wrap(Box::new(move |e: MouseEvent| {
            let rect = client_rect(&canvas_ref);
            viewer
                .borrow_mut()
                .move_to(f64::from(e.client_x()), f64::from(e.client_y()), rect);
        }) as Box<dyn FnMut(_)>)
    };
    listen(canvas, "mousemove", mousemove)?;

    let mouseup = {
        let viewer = viewer.clone();
        Closure::wrap(Box::new(move |_e: MouseEvent| {
            viewer.borrow_mut().release();
        }) as Box<dyn FnMut(_)>)
    };
    listen(canvas, "mouseup", mouseup)?;

    let wheel = {
        let viewer = viewer.clone();
        Closure::wrap(Box::new(move |e: WheelEvent| {
            e.prevent_default();
            let delta = match e.delta_mode() {
                WheelEvent::DOM_DELTA_LINE => e.delta_y() * WHEEL_LINE_PX,
                _ => e.delta_y(),
            };
            viewer.borrow_mut().wheel(delta);
        }) as Box<dyn FnMut(_)>)
    };
    listen(canvas, "wheel", wheel)?;

    let keydown = {
        let (viewer, mut scheduler) = (viewer.clone(), scheduler.clone());
        Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if e.code() == "Space" && !e.repeat() {
                e.prevent_default();
                viewer.borrow_mut().toggle(&mut scheduler);
            }
        }) as Box<dyn FnMut(_)>)
    };
    listen(window, "keydown", keydown)?;

    Ok(())
}
