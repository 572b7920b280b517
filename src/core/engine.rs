use crate::core::inspect::builtin_policy_reports;
use crate::core::policy::resolve_policies;
use crate::core::timed_sort::sort_timed;
use crate::core::{ConfigProvider, RecordSource, ReportSink, RunReport, SortSummary};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use chrono::Utc;
use rand::Rng;

pub struct SortTimerEngine<S: RecordSource, C: ConfigProvider> {
    source: S,
    config: C,
    monitor: SystemMonitor,
}

impl<S: RecordSource, C: ConfigProvider> SortTimerEngine<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self::new_with_monitoring(source, config, false)
    }

    pub fn new_with_monitoring(source: S, config: C, monitor_enabled: bool) -> Self {
        Self {
            source,
            config,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// 產生資料，依每個策略各排序一份副本，最後附上策略描述
    pub fn run<R, K>(&mut self, rng: &mut R, sink: &mut K) -> Result<RunReport>
    where
        R: Rng + ?Sized,
        K: ReportSink + ?Sized,
    {
        let started_at = Utc::now();

        // 先解析策略，避免產生資料後才發現設定錯誤
        let policies = resolve_policies(self.config.policies())?;
        let algorithm = self.config.algorithm();
        let preview_len = self.config.preview_len();

        tracing::info!(
            "🚀 Generating {} records (seed: {:?})",
            self.config.record_count(),
            self.config.seed()
        );
        let records = self.source.generate(self.config.record_count(), rng)?;
        sink.on_generated(records.len())?;
        self.monitor.log_stats("Generate");

        let mut sorts = Vec::with_capacity(policies.len());
        for policy in policies {
            sink.on_sorting(policy.label())?;
            let timed = sort_timed(&records, policy, algorithm);
            let summary = SortSummary {
                policy: policy.name().to_string(),
                label: policy.label().to_string(),
                algorithm,
                record_count: timed.sorted.len(),
                elapsed_ms: u64::try_from(timed.elapsed.as_millis()).unwrap_or(u64::MAX),
                elapsed_us: u64::try_from(timed.elapsed.as_micros()).unwrap_or(u64::MAX),
                preview: timed.preview(preview_len).to_vec(),
            };

            tracing::info!(
                "⏱️ Sorted {} records by {} in {} µs",
                summary.record_count,
                summary.label,
                summary.elapsed_us
            );
            sink.on_sorted(&summary)?;
            self.monitor.log_stats(&format!("Sort by {}", policy.label()));
            sorts.push(summary);
        }

        let policy_reports = if self.config.inspect_policies() {
            let reports = builtin_policy_reports();
            sink.on_policy_reports(&reports)?;
            reports
        } else {
            tracing::debug!("Policy inspection disabled");
            Vec::new()
        };

        let report = RunReport {
            started_at,
            seed: self.config.seed(),
            generated_count: records.len(),
            sorts,
            policy_reports,
        };
        sink.finish(&report)?;
        self.monitor.log_final_stats();

        Ok(report)
    }
}
