use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::errors::PingplotError;
use crate::types::SampleSet;

/// Where and how big to draw the scatter plot.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub caption: String,
}

impl RenderOptions {
    pub fn new(output: impl Into<PathBuf>) -> Self {
        RenderOptions {
            output: output.into(),
            width: 1000,
            height: 600,
            caption: "Ping-pong latency".to_string(),
        }
    }
}

/// Render a latency-vs-packet-size scatter plot to a PNG file.
///
/// Packet size runs along a logarithmic x axis ("Packet size (byte)"),
/// latency along a linear y axis ("Time (microsec)"). The two sequences
/// must be the same non-zero length.
pub fn render(
    sizes: &[u64],
    latencies: &[u64],
    options: &RenderOptions,
) -> Result<(), PingplotError> {
    let samples = SampleSet::from_parts(sizes, latencies)?;
    if samples.is_empty() {
        return Err(PingplotError::InvalidSampleCount { count: 0 });
    }

    draw(&samples, options).map_err(|detail| PingplotError::Render {
        path: options.output.clone(),
        detail,
    })
}

/// Convenience wrapper for an already-assembled sample set.
pub fn render_samples(samples: &SampleSet, options: &RenderOptions) -> Result<(), PingplotError> {
    if samples.is_empty() {
        return Err(PingplotError::InvalidSampleCount { count: 0 });
    }

    draw(samples, options).map_err(|detail| PingplotError::Render {
        path: options.output.clone(),
        detail,
    })
}

// Plotters surfaces backend failures through several error types; flatten
// them to a message here and let the caller attach the output path.
fn draw(samples: &SampleSet, options: &RenderOptions) -> Result<(), String> {
    let root = BitMapBackend::new(&options.output, (options.width, options.height))
        .into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let max_size = samples
        .iter()
        .map(|s| s.packet_size)
        .max()
        .unwrap_or(1) as f64;
    let max_latency = samples
        .iter()
        .map(|s| s.latency_us)
        .max()
        .unwrap_or(1)
        .max(1) as f64;

    let mut chart = ChartBuilder::on(&root)
        .caption(&options.caption, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((0.8..max_size * 1.5).log_scale(), 0.0..max_latency * 1.1)
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .x_desc("Packet size (byte)")
        .y_desc("Time (microsec)")
        .label_style(("sans-serif", 14))
        .draw()
        .map_err(|e| e.to_string())?;

    chart
        .draw_series(samples.iter().map(|s| {
            Circle::new((s.packet_size as f64, s.latency_us as f64), 5, BLUE.filled())
        }))
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())?;
    Ok(())
}

/// Check that the output path is writable before doing any parsing work,
/// so a bad `--output` fails fast rather than after the whole pipeline.
pub fn check_output_path(path: &Path) -> Result<(), PingplotError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        return Err(PingplotError::Render {
            path: path.to_path_buf(),
            detail: format!("directory {} does not exist", parent.display()),
        });
    }
    Ok(())
}
