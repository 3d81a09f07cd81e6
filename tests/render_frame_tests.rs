use scatter_marginals::api::{MarginalStyle, Margins, PlotConfig, PlotSnapshot};
use scatter_marginals::core::{Axis, Viewport};
use scatter_marginals::data::{default_synthetic_conditions, generate_records};
use scatter_marginals::render::{Color, NullRenderer, PathCommand, SvgRenderer, frame_to_svg};
use scatter_marginals::{PlotError, ScatterPlotEngine};

fn synthetic_engine(config: PlotConfig) -> ScatterPlotEngine<NullRenderer> {
    let records = generate_records(&default_synthetic_conditions(), 7).expect("records");
    let mut engine = ScatterPlotEngine::new(NullRenderer::default(), config).expect("engine");
    engine.set_records(records).expect("set records");
    engine
}

#[test]
fn synthetic_frame_is_valid_and_draws_every_point() {
    let mut engine = synthetic_engine(PlotConfig::default());
    let frame = engine.build_render_frame().expect("frame");
    frame.validate().expect("valid frame");
    assert_eq!(frame.circles.len(), 450);
    assert_eq!(frame.paths.len(), 6);

    engine.render().expect("render");
    assert_eq!(engine.renderer().last_circle_count, 450);
}

#[test]
fn points_stay_inside_the_plot_area() {
    let engine = synthetic_engine(PlotConfig::default());
    let area = engine.config().plot_area();
    let frame = engine.build_render_frame().expect("frame");

    for circle in &frame.circles {
        assert!(circle.cx >= area.left - 1e-9 && circle.cx <= area.right + 1e-9);
        assert!(circle.cy >= area.top - 1e-9 && circle.cy <= area.bottom + 1e-9);
    }
}

#[test]
fn curve_marginals_stay_inside_their_bands() {
    let engine = synthetic_engine(PlotConfig::default());
    let area = engine.config().plot_area();
    let band = engine.config().marginal.band_px;
    let frame = engine.build_render_frame().expect("frame");

    for path in &frame.paths {
        assert!(matches!(path.commands.first(), Some(PathCommand::MoveTo(..))));
        for command in &path.commands {
            let (x, y) = match *command {
                PathCommand::MoveTo(x, y) | PathCommand::LineTo(x, y) => (x, y),
                PathCommand::CubicTo { end, .. } => end,
                PathCommand::Close => continue,
            };
            let in_top_band = y >= area.top - band - 1e-9 && y <= area.top + 1e-9;
            let in_right_band = x >= area.right - 1e-9 && x <= area.right + band + 1e-9;
            assert!(in_top_band || in_right_band, "({x}, {y}) outside marginal bands");
        }
    }
}

#[test]
fn svg_output_contains_points_and_labels() {
    let engine = synthetic_engine(PlotConfig::default());
    let frame = engine.build_render_frame().expect("frame");
    let svg = frame_to_svg(&frame, Some("Wing Disc Area vs Lambda"));

    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("<svg "));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches("<circle").count(), 450);
    assert!(svg.contains(">Area<"));
    assert!(svg.contains(">Lambda<"));
    assert!(svg.contains(">Hypoxia<"));
}

#[test]
fn hidden_conditions_disappear_from_svg() {
    let mut engine = synthetic_engine(PlotConfig::default().with_marginal_style(MarginalStyle::Bars));
    engine.toggle_condition("Hypoxia");
    engine.toggle_condition("LowTemp");
    let frame = engine.build_render_frame().expect("frame");

    assert_eq!(frame.circles.len(), 150);
    let svg = frame_to_svg(&frame, None);
    assert_eq!(svg.matches("<circle").count(), 150);
    assert!(svg.contains(">Hypoxia<"));
}

#[test]
fn bar_marginals_line_up_with_bin_edges() {
    let engine = synthetic_engine(PlotConfig::default().with_marginal_style(MarginalStyle::Bars));
    let histogram = engine.marginal_histogram(Axis::X).expect("histogram");
    let frame = engine.build_render_frame().expect("frame");
    let x_scale = engine.x_scale();

    for series in &histogram.series {
        for bin in series.bins.iter().filter(|bin| bin.count > 0) {
            let left = x_scale.to_pixel(bin.x0).expect("x0");
            assert!(
                frame.rects.iter().any(|rect| (rect.x - left).abs() < 1e-9),
                "no bar starts at bin edge {}",
                bin.x0
            );
        }
    }
}

#[test]
fn config_round_trips_through_json() {
    let config = PlotConfig::default()
        .with_marginal_style(MarginalStyle::Bars)
        .with_bin_counts(12, 9)
        .with_title(None);
    let json = config.to_json_pretty().expect("serialize");
    let restored = PlotConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);

    let minimal = PlotConfig::from_json_str(r#"{"viewport":{"width":640,"height":480}}"#)
        .expect("defaults fill in");
    assert_eq!(minimal.marginal.x_bin_count, 20);
    assert_eq!(minimal.plot_size_px, 500.0);
}

#[test]
fn snapshot_contract_round_trips() {
    let mut engine = synthetic_engine(PlotConfig::default());
    engine.toggle_condition("Standard");

    let snapshot = engine.snapshot().expect("snapshot");
    assert_eq!(snapshot.record_count, 450);
    assert_eq!(snapshot.visible_record_count, 300);
    assert!(snapshot.x_marginal.series_for("Standard").is_none());

    let json = engine.snapshot_json_pretty().expect("contract json");
    assert!(json.contains("\"schema_version\": 1"));
    let restored = PlotSnapshot::from_json_compat_str(&json).expect("parse contract");
    assert_eq!(restored.record_count, snapshot.record_count);
    assert_eq!(restored.conditions, snapshot.conditions);
    assert_eq!(restored.visibility, snapshot.visibility);
    let counts = |histogram: &scatter_marginals::core::MarginalHistogram| {
        histogram
            .series
            .iter()
            .map(|series| series.bins.iter().map(|bin| bin.count).collect::<Vec<_>>())
            .collect::<Vec<_>>()
    };
    assert_eq!(counts(&restored.x_marginal), counts(&snapshot.x_marginal));
    assert_eq!(counts(&restored.y_marginal), counts(&snapshot.y_marginal));
}

#[test]
fn custom_layout_moves_plot_area_and_labels() {
    let config = PlotConfig::new(Viewport::new(700, 600))
        .with_margins(Margins {
            top: 90.0,
            right: 180.0,
            bottom: 60.0,
            left: 70.0,
        })
        .with_plot_size(400.0)
        .with_axis_labels("Wing disc area", "D");
    let engine = synthetic_engine(config);
    let area = engine.config().plot_area();
    assert_eq!((area.left, area.top, area.right, area.bottom), (70.0, 90.0, 470.0, 490.0));
    assert_eq!(engine.x_scale().range(), (70.0, 470.0));
    assert_eq!(engine.y_scale().range(), (490.0, 90.0));

    let frame = engine.build_render_frame().expect("frame");
    for circle in &frame.circles {
        assert!(circle.cx >= area.left - 1e-9 && circle.cx <= area.right + 1e-9);
    }
    let svg = frame_to_svg(&frame, None);
    assert!(svg.contains(">Wing disc area<"));
    assert!(svg.contains(">D<"));
}

#[test]
fn palette_override_from_hex_recolors_points() {
    let mut engine = synthetic_engine(PlotConfig::default());
    let red = Color::from_hex("#f00").expect("short hex");
    assert_eq!(red, Color::from_hex("ff0000").expect("long hex"));
    assert!(Color::from_hex("#12345").is_err());

    let mut palette = engine.palette().clone();
    palette.set_color("Hypoxia", red);
    engine.set_palette(palette);

    let frame = engine.build_render_frame().expect("frame");
    let opacity = engine.config().points.opacity;
    let red_points = frame
        .circles
        .iter()
        .filter(|circle| circle.fill_color == red.with_alpha(opacity))
        .count();
    assert_eq!(red_points, 150);
}

#[test]
fn malformed_json_reports_json_errors() {
    assert!(matches!(
        PlotConfig::from_json_str("{\"viewport\":"),
        Err(PlotError::Json(_))
    ));
    assert!(matches!(
        PlotSnapshot::from_json_compat_str("not json"),
        Err(PlotError::Json(_))
    ));
}

#[test]
fn snapshot_from_future_schema_is_rejected() {
    let engine = synthetic_engine(PlotConfig::default());
    let json = engine.snapshot_json_pretty().expect("contract json");
    let future = json.replace("\"schema_version\": 1", "\"schema_version\": 2");

    match PlotSnapshot::from_json_compat_str(&future) {
        Err(PlotError::InvalidData(message)) => assert!(message.contains("schema version")),
        other => panic!("unexpected result: {other:?}"),
    }

    let bare = serde_json::to_string(&engine.snapshot().expect("snapshot")).expect("bare json");
    let restored = PlotSnapshot::from_json_compat_str(&bare).expect("bare snapshot");
    assert_eq!(restored.record_count, 450);
}

#[test]
fn svg_renderer_keeps_last_document() {
    let records = generate_records(&default_synthetic_conditions(), 7).expect("records");
    let mut engine =
        ScatterPlotEngine::new(SvgRenderer::new().with_title("wing discs"), PlotConfig::default())
            .expect("engine");
    engine.set_records(records).expect("set records");
    engine.render().expect("render");

    let document = engine.into_renderer().document().to_owned();
    assert!(document.contains("<title>wing discs</title>"));
    assert_eq!(document.matches("<circle").count(), 450);
}
