use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// Runs extract, transform and load in order, stopping at the first
    /// error. Returns the path the report was written to.
    pub fn run(&mut self) -> Result<String> {
        tracing::info!("Starting grade report run");
        self.monitor.log_stats("Start");

        let students = self.pipeline.extract()?;
        tracing::info!("Extracted {} students", students.len());
        self.monitor.log_stats("Extract");

        let report = self.pipeline.transform(students)?;
        tracing::info!("Graded {} students", report.students.len());
        self.monitor.log_stats("Transform");

        let output_path = self.pipeline.load(report)?;
        tracing::info!("Report saved to: {}", output_path);
        self.monitor.log_final_stats();

        Ok(output_path)
    }

    pub fn into_pipeline(self) -> P {
        self.pipeline
    }
}
