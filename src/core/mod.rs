pub mod etl;
pub mod parser;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{Grade, GradeReport, Student};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
