pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::RunConfig;
pub use crate::core::{
    etl::EtlEngine,
    parser::{parse_students, read_students},
    pipeline::GradePipeline,
    report::{render_report, write_report},
};
pub use crate::domain::model::{Grade, Student};
pub use crate::utils::error::{GradeError, Result};
