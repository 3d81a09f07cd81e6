#![cfg(feature = "cairo-backend")]

use scatter_marginals::api::{MarginalStyle, PlotConfig, ScatterPlotEngine};
use scatter_marginals::core::Viewport;
use scatter_marginals::data::{default_synthetic_conditions, generate_records};
use scatter_marginals::render::CairoRenderer;
use scatter_marginals::PlotError;

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, PlotError::InvalidData(_)));
}

#[test]
fn cairo_renderer_draws_every_frame_primitive() {
    let renderer = CairoRenderer::new(1000, 800).expect("renderer");
    let mut engine = ScatterPlotEngine::new(renderer, PlotConfig::default()).expect("engine init");
    engine
        .set_records(generate_records(&default_synthetic_conditions(), 7).expect("records"))
        .expect("set records");

    let frame = engine.build_render_frame().expect("frame");
    engine.render().expect("render");
    let stats = engine.into_renderer().last_stats();

    assert_eq!(stats.circles_drawn, 450);
    assert_eq!(stats.paths_drawn, 6);
    assert_eq!(stats.rects_drawn, frame.rects.len());
    assert_eq!(stats.lines_drawn, frame.lines.len());
    assert_eq!(stats.texts_drawn, frame.texts.len());
}

#[test]
fn cairo_renderer_writes_png_for_bar_marginals() {
    let renderer = CairoRenderer::new(640, 480).expect("renderer");
    let config = PlotConfig::new(Viewport::new(640, 480))
        .with_plot_size(300.0)
        .with_marginal_style(MarginalStyle::Bars);
    let mut engine = ScatterPlotEngine::new(renderer, config).expect("engine init");
    engine
        .set_records(generate_records(&default_synthetic_conditions(), 3).expect("records"))
        .expect("set records");
    engine.toggle_condition("LowTemp");
    engine.render().expect("render");

    let stats = engine.renderer().last_stats();
    assert_eq!(stats.circles_drawn, 300);
    assert_eq!(stats.paths_drawn, 0);

    let path = std::env::temp_dir().join(format!(
        "scatter_marginals_cairo_{}.png",
        std::process::id()
    ));
    engine.renderer().write_png(&path).expect("write png");
    let written = std::fs::metadata(&path).map(|meta| meta.len());
    let _ = std::fs::remove_file(&path);
    assert!(written.expect("png metadata") > 0);
}
