use std::path::PathBuf;

/// Largest accepted sample count: exponent `count - 1` must fit a `u64`
/// packet size, so anything past 64 would overflow.
pub const MAX_SAMPLE_COUNT: usize = 64;

#[derive(thiserror::Error, Debug)]
pub enum PingplotError {
    #[error("Failed to read benchmark log {path}: {source}")]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed input at line {line}: {detail}")]
    MalformedInput { line: usize, detail: String },

    #[error("Sample count must be between 1 and {MAX_SAMPLE_COUNT}, got {count}")]
    InvalidSampleCount { count: usize },

    #[error("Packet size / latency count mismatch ({sizes} sizes, {latencies} latencies)")]
    DimensionMismatch { sizes: usize, latencies: usize },

    #[error("Failed to render plot to {path}: {detail}")]
    Render { path: PathBuf, detail: String },
}
