use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use crate::types::SampleSet;

/// Aligned two-column table of samples with a min/max/mean footer.
pub fn format_table(samples: &SampleSet) -> String {
    let mut out = String::new();

    let header = format!("{:>12}  {:>12}", "size (byte)", "time (us)");
    out.push_str(
        &header
            .if_supports_color(Stream::Stdout, |s| s.dimmed())
            .to_string(),
    );
    out.push('\n');

    for sample in samples {
        let size_str = format!("{:>12}", sample.packet_size);
        let size_colored = size_str
            .if_supports_color(Stream::Stdout, |s| s.cyan())
            .to_string();

        let latency_str = format!("{:>12}", sample.latency_us);
        let latency_colored = latency_str
            .if_supports_color(Stream::Stdout, |s| s.white())
            .to_string();

        out.push_str(&format!("{}  {}\n", size_colored, latency_colored));
    }

    if let Some(stats) = latency_stats(samples) {
        let footer = format!(
            "min {} us, max {} us, mean {:.1} us over {} samples",
            stats.min,
            stats.max,
            stats.mean,
            samples.len()
        );
        out.push_str(
            &footer
                .if_supports_color(Stream::Stdout, |s| s.dimmed())
                .to_string(),
        );
        out.push('\n');
    }

    out
}

struct LatencyStats {
    min: u64,
    max: u64,
    mean: f64,
}

fn latency_stats(samples: &SampleSet) -> Option<LatencyStats> {
    if samples.is_empty() {
        return None;
    }

    let latencies: Vec<u64> = samples.iter().map(|s| s.latency_us).collect();
    let sum: u64 = latencies.iter().sum();

    Some(LatencyStats {
        min: latencies.iter().copied().min().unwrap_or(0),
        max: latencies.iter().copied().max().unwrap_or(0),
        mean: sum as f64 / latencies.len() as f64,
    })
}

/// JSON output format.
#[derive(Serialize)]
struct JsonSample {
    index: usize,
    packet_size: u64,
    latency_us: u64,
}

pub fn format_json(samples: &SampleSet) -> String {
    let json_samples: Vec<JsonSample> = samples
        .iter()
        .enumerate()
        .map(|(i, sample)| JsonSample {
            index: i,
            packet_size: sample.packet_size,
            latency_us: sample.latency_us,
        })
        .collect();

    serde_json::to_string_pretty(&json_samples).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_set(latencies: &[u64]) -> SampleSet {
        SampleSet::from_latencies(latencies).unwrap()
    }

    // --- format_table ---

    #[test]
    fn table_contains_header_and_rows() {
        let result = format_table(&make_set(&[10, 20, 30]));
        assert!(result.contains("size (byte)"));
        assert!(result.contains("time (us)"));
        assert!(result.contains("10"));
        assert!(result.contains("20"));
        assert!(result.contains("30"));
    }

    #[test]
    fn table_shows_derived_sizes() {
        let result = format_table(&make_set(&[5, 5, 5, 5]));
        for size in ["1", "2", "4", "8"] {
            assert!(result.contains(size), "missing size {size}");
        }
    }

    #[test]
    fn table_footer_stats() {
        let result = format_table(&make_set(&[10, 20, 30]));
        assert!(result.contains("min 10 us"));
        assert!(result.contains("max 30 us"));
        assert!(result.contains("mean 20.0 us"));
        assert!(result.contains("over 3 samples"));
    }

    #[test]
    fn table_single_sample_footer() {
        let result = format_table(&make_set(&[456]));
        assert!(result.contains("min 456 us"));
        assert!(result.contains("max 456 us"));
        assert!(result.contains("over 1 samples"));
    }

    #[test]
    fn table_columns_right_aligned() {
        let result = format_table(&make_set(&[7]));
        let row = result
            .lines()
            .find(|l| l.trim_start().starts_with('1') && l.contains('7'))
            .unwrap();
        // Both columns padded to width 12.
        assert!(row.contains("           1"));
        assert!(row.contains("           7"));
    }

    // --- format_json ---

    #[test]
    fn json_schema() {
        let result = format_json(&make_set(&[10, 20]));
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed.len(), 2);

        assert_eq!(parsed[0]["index"], 0);
        assert_eq!(parsed[0]["packet_size"], 1);
        assert_eq!(parsed[0]["latency_us"], 10);

        assert_eq!(parsed[1]["index"], 1);
        assert_eq!(parsed[1]["packet_size"], 2);
        assert_eq!(parsed[1]["latency_us"], 20);
    }

    #[test]
    fn json_preserves_file_order() {
        let result = format_json(&make_set(&[30, 10, 20]));
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&result).unwrap();
        let latencies: Vec<u64> = parsed
            .iter()
            .map(|v| v["latency_us"].as_u64().unwrap())
            .collect();
        assert_eq!(latencies, vec![30, 10, 20]);
    }

    #[test]
    fn json_large_packet_sizes_exact() {
        let latencies = vec![1; 21];
        let result = format_json(&make_set(&latencies));
        let parsed: Vec<serde_json::Value> = serde_json::from_str(&result).unwrap();
        assert_eq!(parsed[20]["packet_size"], 1_048_576);
    }
}
