//! ## strovare-telemetry::metrics
//! **Prometheus recorder for simulation runs**
//!
//! Metrics live in a per-recorder registry, not a process global, so every
//! run (and every test) starts from zero.

use prometheus::{Counter, Histogram, HistogramOpts, Registry};

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: prometheus::Registry,
    pub rovers_deployed: prometheus::Counter,
    pub instructions_applied: prometheus::Counter,
    pub dispatch_latency: prometheus::Histogram,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder {
    pub fn new() -> Self {
        let registry = Registry::new();
        let rovers_deployed = Counter::new(
            "strovare_rovers_deployed_total",
            "Rovers registered with mission control",
        )
        .unwrap();

        let instructions_applied = Counter::new(
            "strovare_instructions_total",
            "Movement instructions applied to rovers",
        )
        .unwrap();

        let dispatch_latency = Histogram::with_opts(
            HistogramOpts::new(
                "strovare_dispatch_latency_ns",
                "Per-rover instruction replay time",
            )
            .buckets(vec![1_000.0, 10_000.0, 100_000.0, 1_000_000.0]),
        )
        .unwrap();

        registry.register(Box::new(rovers_deployed.clone())).unwrap();
        registry
            .register(Box::new(instructions_applied.clone()))
            .unwrap();
        registry
            .register(Box::new(dispatch_latency.clone()))
            .unwrap();

        Self {
            registry,
            rovers_deployed,
            instructions_applied,
            dispatch_latency,
        }
    }

    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap())
    }
}
