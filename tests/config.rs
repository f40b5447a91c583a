use shader_view::{Config, ConfigError, ViewConfig};

#[test]
fn defaults_match_stock_page() {
    let c = Config::default();
    assert_eq!(c.canvas_id, "canvas");
    assert_eq!(c.vertex_url, "vertex.glsl");
    assert_eq!(c.fragment_url, "fragment.glsl");
    assert_eq!(c.view.zoom_rate, 0.15);
    assert_eq!(c.view.pan_rate, 0.10);
    assert_eq!(c.view.time_step, 0.016);
    assert_eq!(c.view.initial_zoom, 1.0);
    assert_eq!(c.view.initial_pan, (0.5, 0.9));
    assert!(c.validate().is_ok());
}

#[test]
fn overrides_replace_non_blank_urls() {
    let c = Config::default().with_overrides(Some(" shaders/v.glsl ".into()), Some("   ".into()));
    assert_eq!(c.vertex_url, "shaders/v.glsl");
    assert_eq!(c.fragment_url, "fragment.glsl");

    let c = Config::default().with_overrides(None, Some("f.glsl".into()));
    assert_eq!(c.vertex_url, "vertex.glsl");
    assert_eq!(c.fragment_url, "f.glsl");
}

#[test]
fn rejects_bad_view_values() {
    let bad = |view: ViewConfig| view.validate().unwrap_err();
    let base = ViewConfig::default();

    assert_eq!(
        bad(ViewConfig { zoom_rate: 0.0, ..base }),
        ConfigError::Rate { name: "zoom_rate", value: 0.0 }
    );
    assert!(matches!(bad(ViewConfig { pan_rate: 1.5, ..base }), ConfigError::Rate { name: "pan_rate", .. }));
    assert!(matches!(bad(ViewConfig { pan_rate: f64::NAN, ..base }), ConfigError::Rate { .. }));
    assert!(matches!(
        bad(ViewConfig { time_step: -0.016, ..base }),
        ConfigError::NotPositive { name: "time_step", .. }
    ));
    assert!(matches!(
        bad(ViewConfig { initial_zoom: 0.0, ..base }),
        ConfigError::NotPositive { name: "initial_zoom", .. }
    ));
    assert!(matches!(
        bad(ViewConfig { initial_pan: (f64::INFINITY, 0.0), ..base }),
        ConfigError::NotFinite { name: "initial_pan.x", .. }
    ));
    assert!(matches!(
        bad(ViewConfig { wheel_sensitivity: -1.0, ..base }),
        ConfigError::Negative { .. }
    ));
    assert!(ViewConfig { zoom_rate: 1.0, wheel_sensitivity: 0.0, ..base }.validate().is_ok());
}

#[test]
fn rejects_empty_names() {
    let c = Config {
        canvas_id: String::new(),
        ..Config::default()
    };
    assert_eq!(c.validate(), Err(ConfigError::Empty("canvas_id")));
    let c = Config {
        fragment_url: String::new(),
        ..Config::default()
    };
    assert_eq!(c.validate(), Err(ConfigError::Empty("fragment_url")));
}

#[test]
fn error_messages_name_the_field() {
    let err = ViewConfig { zoom_rate: 2.0, ..ViewConfig::default() }.validate().unwrap_err();
    assert_eq!(err.to_string(), "zoom_rate must be in (0, 1], got 2");
}
