use crate::core::parser::read_students;
use crate::core::report::{build_report, save_report};
use crate::core::{ConfigProvider, GradeReport, Pipeline, Student};
use crate::utils::error::Result;
use std::io::Write;

/// Reads the student file, grades every record and writes the report.
/// Console lines go to `console`, normally stdout.
pub struct GradePipeline<C: ConfigProvider, W: Write> {
    config: C,
    console: W,
}

impl<C: ConfigProvider, W: Write> GradePipeline<C, W> {
    pub fn new(config: C, console: W) -> Self {
        Self { config, console }
    }

    pub fn into_console(self) -> W {
        self.console
    }
}

impl<C: ConfigProvider, W: Write> Pipeline for GradePipeline<C, W> {
    fn extract(&mut self) -> Result<Vec<Student>> {
        read_students(self.config.input_path(), &mut self.console)
    }

    fn transform(&mut self, students: Vec<Student>) -> Result<GradeReport> {
        let report = build_report(students)?;
        tracing::debug!(
            "Rendered {} report lines ({} bytes)",
            report.students.len(),
            report.report_data.len()
        );
        Ok(report)
    }

    fn load(&mut self, report: GradeReport) -> Result<String> {
        let output_path = self.config.output_path();
        save_report(
            &report,
            output_path,
            &mut self.console,
            self.config.echo_summaries(),
        )?;
        Ok(output_path.to_string())
    }
}
