//! Replays a scripted drag on a range seek slider and prints the frames a
//! renderer would draw.
//!
//! ```text
//! RUST_LOG=tessera_range_seek=trace cargo run -p example -- --from 0 --to 35 --step 5
//! ```
use std::{fs, path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use tessera_range_seek::{
    Color, HandleImage, Point, PointerEvent, RangeSeekConfig, RangeSeekController,
    RangeSeekDelegate, RangeSeekSlider, Rect, Size,
};

#[derive(Parser, Debug)]
#[command(about = "Drive a range seek slider from the command line")]
struct Cli {
    /// JSON slider configuration.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Control width.
    #[arg(long, default_value_t = 320.0)]
    width: f32,
    /// Value of the handle to grab.
    #[arg(long, allow_negative_numbers = true)]
    from: f32,
    /// Value to drag the handle to.
    #[arg(long, allow_negative_numbers = true)]
    to: f32,
    /// Enables step snapping with this step.
    #[arg(long)]
    step: Option<f32>,
    /// Use round swatch images for both handles.
    #[arg(long)]
    swatches: bool,
    /// Number of intermediate move events.
    #[arg(long, default_value_t = 8)]
    moves: u32,
}

struct LoggingDelegate;

impl RangeSeekDelegate for LoggingDelegate {
    fn did_start_touches(&self, slider: &RangeSeekSlider) {
        tracing::info!(handle = ?slider.handle_tracking(), "drag started");
    }

    fn did_end_touches(&self, _slider: &RangeSeekSlider) {
        tracing::info!("drag ended");
    }

    fn did_change(&self, _slider: &RangeSeekSlider, min_value: f32, max_value: f32) {
        tracing::info!(min_value, max_value, "selection changed");
    }
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,tessera_range_seek=info,example=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn load_config(cli: &Cli) -> anyhow::Result<RangeSeekConfig> {
    let Some(path) = &cli.config else {
        return Ok(RangeSeekConfig::default());
    };
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    RangeSeekConfig::from_json_slice(&bytes)
        .with_context(|| format!("parsing {}", path.display()))
}

fn describe(name: &str, rect: &Rect) {
    println!(
        "{name:>16}: x={:>8.2} y={:>6.2} w={:>8.2} h={:>6.2}",
        rect.min_x(),
        rect.min_y(),
        rect.width(),
        rect.height()
    );
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = load_config(&cli)?;
    if let Some(step) = cli.step {
        config.enable_step = true;
        config.step = step;
    }

    let mut slider = config.build();
    if cli.swatches {
        slider.set_left_handle_image(Some(HandleImage::solid(Color::from_rgb(0.9, 0.3, 0.2))));
        slider.set_right_handle_image(Some(HandleImage::solid(Color::from_rgb(0.2, 0.6, 0.9))));
    }
    slider.set_bounds(Size::new(cli.width, slider.intrinsic_height()));

    let delegate = Arc::new(LoggingDelegate);
    slider.set_delegate(&delegate);
    slider.set_step_feedback(|| tracing::info!("step pulse"));

    let metrics = slider.track_metrics();
    let y = slider.geometry().line.mid_y();
    let start = Point::new(metrics.x_for_value(cli.from), y);
    let end_x = metrics.x_for_value(cli.to);

    let moves = cli.moves.max(1);
    let mut events = vec![PointerEvent::Pressed(start)];
    events.extend((1..=moves).map(|i| {
        let t = i as f32 / moves as f32;
        PointerEvent::Moved(Point::new(start.x + (end_x - start.x) * t, y))
    }));
    events.push(PointerEvent::Released);

    let mut controller = RangeSeekController::new();
    if !controller.handle_events(&mut slider, events) {
        println!("touch at {} missed both handles", cli.from);
    }

    println!(
        "selection: {:.3} ..= {:.3} (initial: {})",
        slider.selected_min_value(),
        slider.selected_max_value(),
        slider.is_initial()
    );
    let geometry = slider.geometry();
    describe("line", &geometry.line);
    describe("left handle", &geometry.left_handle);
    describe("right handle", &geometry.right_handle);
    describe("between handles", &geometry.between_handles);
    println!("colors: {:?}", slider.resolved_colors());

    Ok(())
}
