// File: crates/demo/src/main.rs
// Summary: Demo drives a computator through zoom and pan, then prints axis ticks, labels and pixel transforms.

use anyhow::{Context, Result};
use chart_viewport::{
    compute_auto_generated_axis_values, AxisAutoValues, ChartComputator, ComputatorConfig, ValueFormatter, Viewport,
    ZoomType,
};
use log::{info, LevelFilter};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"{
    "kind": "standard",
    "max_zoom": 20.0,
    "chart_width": 800,
    "chart_height": 600,
    "padding": { "left": 8, "top": 8, "right": 8, "bottom": 8 },
    "max_viewport": { "left": 0.0, "top": 100.0, "right": 1000.0, "bottom": 0.0 }
}"#;

fn main() -> Result<()> {
    // Usage: viewport-demo [config.json] [log-level]
    let mut args = std::env::args().skip(1);
    let config_path = args.next();
    let level = args
        .next()
        .or_else(|| std::env::var("RUST_LOG").ok())
        .map(|s| s.parse::<LevelFilter>())
        .transpose()
        .context("invalid log level")?
        .unwrap_or(LevelFilter::Info);
    setup_logger(level)?;

    let config = match config_path.as_deref() {
        Some(path) => load_config(Path::new(path))?,
        None => ComputatorConfig::from_json_str(DEFAULT_CONFIG).context("built-in config is invalid")?,
    };
    info!("using {:?} computator, max zoom {}", config.kind, config.max_zoom);

    let mut computator = ChartComputator::from_config(&config).context("failed to build computator")?;
    // Room for axis labels on the left and bottom.
    computator.inset_content_rect(40, 0, 0, 20);
    computator.set_viewport_change_listener(|v: &Viewport| log::debug!("viewport -> {v:?}"));

    let rect = computator.content_rect_minus_all_margins();
    let (cx, cy) = ((rect.left + rect.right) as f32 / 2.0, (rect.top + rect.bottom) as f32 / 2.0);

    let x_fmt = ValueFormatter::new();
    let y_fmt = ValueFormatter::new().with_appended_text("%");
    let mut x_ticks = AxisAutoValues::new();
    let mut y_ticks = AxisAutoValues::new();

    report("initial", &computator, &mut x_ticks, &mut y_ticks, &x_fmt, &y_fmt);

    computator.zoom_at_pixel(ZoomType::HorizontalAndVertical, cx, cy, 0.25);
    report("zoomed x4 at center", &computator, &mut x_ticks, &mut y_ticks, &x_fmt, &y_fmt);

    let scroll = computator.pan_by_pixels(120.0, -40.0);
    info!("pan result: {scroll:?}");
    report("panned", &computator, &mut x_ticks, &mut y_ticks, &x_fmt, &y_fmt);

    computator.pan_by_pixels(1.0e6, 0.0);
    report("panned to right edge", &computator, &mut x_ticks, &mut y_ticks, &x_fmt, &y_fmt);

    let scroll = computator.compute_scroll_surface_size();
    println!("scroll surface: {} x {}", scroll.width, scroll.height);

    for (px, py) in [(cx, cy), (rect.left as f32, rect.top as f32), (0.0, 0.0)] {
        match computator.raw_pixels_to_data_point(px, py) {
            Some(p) => println!("pixel ({px}, {py}) -> data ({:.3}, {:.3})", p.x, p.y),
            None => println!("pixel ({px}, {py}) is outside the content rect"),
        }
    }
    Ok(())
}

fn setup_logger(level: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{} {}] {}", record.level(), record.target(), message))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .context("failed to install logger")?;
    Ok(())
}

fn load_config(path: &Path) -> Result<ComputatorConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path.display()))?;
    ComputatorConfig::from_json_str(&text).with_context(|| format!("invalid config '{}'", path.display()))
}

fn report(
    stage: &str,
    computator: &ChartComputator,
    x_ticks: &mut AxisAutoValues,
    y_ticks: &mut AxisAutoValues,
    x_fmt: &ValueFormatter,
    y_fmt: &ValueFormatter,
) {
    let v = computator.visible_viewport();
    println!("== {stage}: viewport [{}, {}] x [{}, {}]", v.left, v.right, v.bottom, v.top);

    compute_auto_generated_axis_values(v.left, v.right, 5, x_ticks);
    compute_auto_generated_axis_values(v.bottom, v.top, 4, y_ticks);

    let xs: Vec<String> = x_ticks
        .format_labels(x_fmt)
        .into_iter()
        .zip(x_ticks.iter())
        .map(|(label, value)| format!("{label}@{:.0}px", computator.compute_raw_x(value)))
        .collect();
    let ys: Vec<String> = y_ticks
        .format_labels(y_fmt)
        .into_iter()
        .zip(y_ticks.iter())
        .map(|(label, value)| format!("{label}@{:.0}px", computator.compute_raw_y(value)))
        .collect();
    println!("  x: {}", xs.join("  "));
    println!("  y: {}", ys.join("  "));
}
