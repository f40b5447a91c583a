use shader_view::{ClientRect, InputController, Surface, ViewState};

/// Pan target x after dragging `px` device pixels right on a surface.
fn drag_x(px: f64, surface: Surface) -> f64 {
    let rect = ClientRect {
        left: 0.0,
        top: 0.0,
        width: surface.width,
        height: surface.height,
    };
    let mut input = InputController::new(0.001);
    let mut view = ViewState::default();
    input.press(0.0, 0.0);
    input.move_to(px, 0.0, rect, surface, &mut view);
    view.target_pan().0 - 0.5
}

#[test]
fn horizontal_drag_depends_on_height_only() {
    // dx / W * (W / H) == px / H, so width cancels out
    let wide = drag_x(54.0, Surface::new(1920.0, 1080.0));
    let square = drag_x(54.0, Surface::new(1080.0, 1080.0));
    let tall = drag_x(54.0, Surface::new(720.0, 1080.0));
    assert!((wide - square).abs() < 1e-12);
    assert!((tall - square).abs() < 1e-12);
    assert!((square + 54.0 / 1080.0 * 2.0).abs() < 1e-12);
}

#[test]
fn same_pixel_drag_pans_less_on_taller_surface() {
    let short = drag_x(30.0, Surface::new(800.0, 400.0));
    let tall = drag_x(30.0, Surface::new(800.0, 1200.0));
    assert!(short < tall && tall < 0.0);
}
