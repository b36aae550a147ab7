use std::io::BufRead;
use std::path::Path;

use crate::errors::{MAX_SAMPLE_COUNT, PingplotError};

/// 0-based field holding the latency value on each log line.
const LATENCY_FIELD: usize = 3;

/// Length of the unit marker trailing the latency value (e.g. "us").
const UNIT_SUFFIX_LEN: usize = 2;

/// Read the first `count` latency samples from a ping-pong benchmark log.
///
/// Each line is split on runs of whitespace (leading and trailing whitespace
/// is ignored, so irregularly spaced logs parse the same as tidy ones). The
/// fourth field carries `<integer><unit>`, e.g. `123us`; the two-character
/// unit suffix is stripped and the remainder parsed as microseconds.
///
/// Returns exactly `count` values in file order, index-aligned with the
/// line they came from.
pub fn load_samples(path: &Path, count: usize) -> Result<Vec<u64>, PingplotError> {
    check_sample_count(count)?;

    let file = std::fs::File::open(path).map_err(|source| PingplotError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = std::io::BufReader::new(file);

    let mut latencies = Vec::with_capacity(count);

    for (index, line_result) in reader.lines().take(count).enumerate() {
        let line = line_result.map_err(|source| PingplotError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        latencies.push(parse_latency(&line, index)?);
    }

    if latencies.len() < count {
        return Err(PingplotError::MalformedInput {
            line: latencies.len(),
            detail: format!("expected {} lines, file has only {}", count, latencies.len()),
        });
    }

    Ok(latencies)
}

/// Extract the latency in microseconds from a single log line.
///
/// `index` is the 0-based line number, used only for error reporting.
pub fn parse_latency(line: &str, index: usize) -> Result<u64, PingplotError> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    if fields.len() <= LATENCY_FIELD {
        return Err(PingplotError::MalformedInput {
            line: index,
            detail: format!(
                "expected at least {} whitespace-separated fields, found {}",
                LATENCY_FIELD + 1,
                fields.len()
            ),
        });
    }

    let field = fields[LATENCY_FIELD];

    // Byte offset of the suffix start, walking back over char boundaries.
    let suffix_start = field
        .char_indices()
        .rev()
        .nth(UNIT_SUFFIX_LEN - 1)
        .map(|(i, _)| i)
        .filter(|&i| i > 0)
        .ok_or_else(|| PingplotError::MalformedInput {
            line: index,
            detail: format!(
                "latency field '{}' is too short to carry a {}-char unit suffix",
                field, UNIT_SUFFIX_LEN
            ),
        })?;

    let digits = &field[..suffix_start];

    digits
        .parse::<u64>()
        .map_err(|_| PingplotError::MalformedInput {
            line: index,
            detail: format!(
                "'{}' is not an integer latency (latency field was '{}')",
                digits, field
            ),
        })
}

/// Packet sizes for `count` samples: `[2^0, 2^1, ..., 2^(count-1)]` bytes.
///
/// Sample index i maps to a payload of 2^i bytes. That mapping is a
/// convention of the harness that generated the log — the file never states
/// it — so it lives here as the single place deriving sizes from indices.
pub fn derive_packet_sizes(count: usize) -> Result<Vec<u64>, PingplotError> {
    check_sample_count(count)?;
    Ok((0..count).map(|i| 1u64 << i).collect())
}

fn check_sample_count(count: usize) -> Result<(), PingplotError> {
    if count == 0 || count > MAX_SAMPLE_COUNT {
        return Err(PingplotError::InvalidSampleCount { count });
    }
    Ok(())
}
