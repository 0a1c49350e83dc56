//! Drives a live chart on a simulated clock and writes one composited PNG
//! per rendered tick.
//!
//! Usage: `render_live_frames [--config chart.json] [--frames 40] [--output-root dir]`

#[cfg(feature = "cairo-backend")]
use std::fs;
#[cfg(feature = "cairo-backend")]
use std::path::PathBuf;

#[cfg(feature = "cairo-backend")]
const DEFAULT_OUTPUT_ROOT: &str = "target/live_frames";
#[cfg(feature = "cairo-backend")]
const DEFAULT_FRAMES: usize = 40;

#[cfg(feature = "cairo-backend")]
struct Args {
    config_path: Option<PathBuf>,
    frames: usize,
    output_root: PathBuf,
}

#[cfg(feature = "cairo-backend")]
fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    eprintln!("this tool requires feature `cairo-backend`");
    std::process::exit(1);
}

#[cfg(feature = "cairo-backend")]
fn run() -> Result<(), String> {
    use std::time::Instant;

    use livechart::core::ScaleGeometry;
    use livechart::render::{CairoSurface, Color, composite_to_png};
    use livechart::{LiveChart, LiveChartConfig, RenderContexts};

    let _ = livechart::telemetry::init_default_tracing();
    let args = parse_args()?;

    let config = match &args.config_path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read config `{}`: {err}", path.display()))?;
            LiveChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => LiveChartConfig::new(ScaleGeometry::new(640.0, 360.0, 40.0)),
    };

    let width = config.geometry.width.round() as i32;
    let height = config.geometry.height.round() as i32;
    let mut axis_surface = CairoSurface::new(width, height).map_err(|err| err.to_string())?;
    let mut line_surface = CairoSurface::new(width, height).map_err(|err| err.to_string())?;
    let background = Color::rgb8(0x0f, 0x17, 0x2a);

    fs::create_dir_all(&args.output_root).map_err(|err| {
        format!(
            "failed to create output root `{}`: {err}",
            args.output_root.display()
        )
    })?;

    let mut chart = LiveChart::new(config).map_err(|err| err.to_string())?;
    let interval = config.series.interval();
    let started_at = Instant::now();

    let mut written = 0usize;
    for step in 0..args.frames {
        let now = started_at + interval * u32::try_from(step).unwrap_or(u32::MAX);
        let mut contexts = RenderContexts {
            axis: &mut axis_surface,
            line: &mut line_surface,
        };
        let rendered = if step == 0 {
            usize::from(chart.start(now, &mut contexts).map_err(|err| err.to_string())?)
        } else {
            chart.poll(now, &mut contexts).map_err(|err| err.to_string())?
        };
        if rendered == 0 {
            continue;
        }

        let png = composite_to_png(&[&axis_surface, &line_surface], background)
            .map_err(|err| err.to_string())?;
        let path = args.output_root.join(format!("frame_{step:04}.png"));
        fs::write(&path, png)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display()))?;
        written += 1;
    }
    chart.stop();

    println!(
        "wrote {written} frames to {} via {} ({} points buffered)",
        args.output_root.display(),
        line_surface.backend_name(),
        chart.data().len()
    );
    Ok(())
}

#[cfg(feature = "cairo-backend")]
fn parse_args() -> Result<Args, String> {
    let mut config_path = None;
    let mut frames = DEFAULT_FRAMES;
    let mut output_root = PathBuf::from(DEFAULT_OUTPUT_ROOT);

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config_path = Some(PathBuf::from(value));
            }
            "--frames" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --frames".to_owned())?;
                frames = value
                    .parse()
                    .map_err(|err| format!("invalid --frames `{value}`: {err}"))?;
            }
            "--output-root" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output-root".to_owned())?;
                output_root = PathBuf::from(value);
            }
            other => return Err(format!("unknown argument `{other}`")),
        }
    }

    Ok(Args {
        config_path,
        frames,
        output_root,
    })
}
