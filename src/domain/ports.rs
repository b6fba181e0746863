use crate::domain::model::{GradeReport, Student};
use crate::utils::error::Result;

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    /// Whether per-student summary lines are echoed to the console.
    fn echo_summaries(&self) -> bool;
}

pub trait Pipeline {
    fn extract(&mut self) -> Result<Vec<Student>>;
    fn transform(&mut self, students: Vec<Student>) -> Result<GradeReport>;
    fn load(&mut self, report: GradeReport) -> Result<String>;
}
