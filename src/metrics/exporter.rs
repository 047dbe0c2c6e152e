use std::io::Write;

use parking_lot::Mutex;

use crate::metrics::snapshot::ClockTableMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for clock table snapshots.
///
/// Writes the Prometheus text exposition format so output can be scraped by
/// Prometheus or forwarded to an OpenTelemetry collector. Write failures are
/// dropped; metrics never affect clock behavior.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_metric(&self, kind: &str, name: &str, value: u64) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, name: &str, value: u64) {
        self.write_metric("counter", name, value);
    }

    fn write_gauge(&self, name: &str, value: u64) {
        self.write_metric("gauge", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send> MetricsExporter<ClockTableMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &ClockTableMetricsSnapshot) {
        self.write_counter(&self.metric_name("get_calls_total"), snapshot.get_calls);
        self.write_counter(&self.metric_name("get_hits_total"), snapshot.get_hits);
        self.write_counter(&self.metric_name("get_misses_total"), snapshot.get_misses);
        self.write_counter(
            &self.metric_name("increment_calls_total"),
            snapshot.increment_calls,
        );
        self.write_counter(&self.metric_name("merge_calls_total"), snapshot.merge_calls);
        self.write_counter(
            &self.metric_name("merge_dominated_total"),
            snapshot.merge_dominated,
        );
        self.write_counter(&self.metric_name("admissions_total"), snapshot.admissions);
        self.write_counter(&self.metric_name("evictions_total"), snapshot.evictions);
        self.write_counter(&self.metric_name("clears_total"), snapshot.clears);
        self.write_gauge(&self.metric_name("resident_keys"), snapshot.resident as u64);
        self.write_gauge(&self.metric_name("capacity"), snapshot.capacity as u64);
    }
}
