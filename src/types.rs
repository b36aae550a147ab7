use serde::Serialize;

use crate::errors::PingplotError;
use crate::parse::derive_packet_sizes;

/// One (packet size, latency) observation point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sample {
    /// Payload size in bytes, equal to 2^index by harness convention.
    pub packet_size: u64,
    /// Round-trip time in microseconds, parsed from the log.
    pub latency_us: u64,
}

/// Ordered set of samples, index-aligned with the input file's lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSet {
    samples: Vec<Sample>,
}

impl SampleSet {
    /// Pair parsed latencies with derived packet sizes.
    ///
    /// The size for index `i` is 2^i — a convention of the benchmark harness
    /// that wrote the log, not something the file itself records. A length
    /// mismatch between the derived sizes and the latencies means a logic
    /// error upstream and is reported as such.
    pub fn from_latencies(latencies: &[u64]) -> Result<SampleSet, PingplotError> {
        let sizes = derive_packet_sizes(latencies.len())?;
        Self::from_parts(&sizes, latencies)
    }

    /// Zip explicit size/latency sequences into a sample set.
    pub fn from_parts(sizes: &[u64], latencies: &[u64]) -> Result<SampleSet, PingplotError> {
        if sizes.len() != latencies.len() {
            return Err(PingplotError::DimensionMismatch {
                sizes: sizes.len(),
                latencies: latencies.len(),
            });
        }

        let samples = sizes
            .iter()
            .zip(latencies)
            .map(|(&packet_size, &latency_us)| Sample {
                packet_size,
                latency_us,
            })
            .collect();

        Ok(SampleSet { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }
}

impl<'a> IntoIterator for &'a SampleSet {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
