use crate::domain::model::{GradeReport, Student};
use crate::utils::error::{GradeError, Result};
use crate::utils::validation::validate_path;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;

/// Renders `id,full_name,score,grade` lines, one per student, in order.
pub fn render_report(students: &[Student]) -> Result<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for student in students {
        writer.write_record(student.report_fields())?;
    }

    writer
        .into_inner()
        .map_err(|e| GradeError::IoError(e.into_error()))
}

pub fn build_report(students: Vec<Student>) -> Result<GradeReport> {
    if students.is_empty() {
        return Err(GradeError::config("Student list cannot be null or empty."));
    }

    let report_data = render_report(&students)?;
    let summaries = students.iter().map(Student::summary_line).collect();

    Ok(GradeReport {
        students,
        report_data,
        summaries,
    })
}

/// Persists an already rendered report. The file is replaced in a single
/// write after every line has been rendered.
pub fn save_report<W: Write>(
    report: &GradeReport,
    path: &str,
    console: &mut W,
    echo_summaries: bool,
) -> Result<()> {
    if report.students.is_empty() {
        return Err(GradeError::config("Student list cannot be null or empty."));
    }
    validate_path("Output file path", path)?;

    writeln!(console, "Writing report to {}", path)?;
    tracing::debug!("Writing {} bytes to {}", report.report_data.len(), path);
    std::fs::write(path, &report.report_data)?;

    if echo_summaries {
        for summary in &report.summaries {
            writeln!(console, "{}", summary)?;
        }
    }
    console.flush()?;

    Ok(())
}

/// Writes the report to `path`, replacing any previous content, and echoes
/// one summary line per student to `console`.
pub fn write_report<W: Write>(students: &[Student], path: &str, console: &mut W) -> Result<()> {
    let report = build_report(students.to_vec())?;
    save_report(&report, path, console, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_students;
    use crate::utils::error::ErrorCategory;
    use tempfile::TempDir;

    fn sample() -> Vec<Student> {
        vec![
            Student {
                id: 1,
                full_name: "Ama Owusu".to_string(),
                score: 85,
            },
            Student {
                id: 2,
                full_name: "Kojo Mensah".to_string(),
                score: 42,
            },
        ]
    }

    #[test]
    fn test_render_report() {
        let data = render_report(&sample()).unwrap();
        assert_eq!(
            String::from_utf8(data).unwrap(),
            "1,Ama Owusu,85,A\n2,Kojo Mensah,42,F\n"
        );
    }

    #[test]
    fn test_render_matches_report_lines() {
        let students = sample();
        let data = String::from_utf8(render_report(&students).unwrap()).unwrap();
        let lines: Vec<String> = students.iter().map(Student::to_report_line).collect();
        assert_eq!(data.lines().collect::<Vec<_>>(), lines);
    }

    #[test]
    fn test_rendered_report_parses_back() {
        let students = vec![
            Student {
                id: -4,
                full_name: "Nana \"Kwame\" Asante".to_string(),
                score: 0,
            },
            Student {
                id: 9,
                full_name: "Efua Sey".to_string(),
                score: 100,
            },
        ];
        let data = render_report(&students).unwrap();
        assert_eq!(parse_students(data.as_slice()).unwrap(), students);
    }

    #[test]
    fn test_write_report_file_and_console() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.txt");
        let path = path.to_str().unwrap();
        let mut console = Vec::new();

        write_report(&sample(), path, &mut console).unwrap();

        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "1,Ama Owusu,85,A\n2,Kojo Mensah,42,F\n"
        );
        assert_eq!(
            String::from_utf8(console).unwrap(),
            format!(
                "Writing report to {}\n\
                 Ama Owusu (ID:1): Score = 85, Grade = A\n\
                 Kojo Mensah (ID:2): Score = 42, Grade = F\n",
                path
            )
        );
    }

    #[test]
    fn test_write_report_truncates_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.txt");
        std::fs::write(&path, "old line that is much longer than the new report\n".repeat(10))
            .unwrap();

        let mut console = Vec::new();
        write_report(&sample()[..1], path.to_str().unwrap(), &mut console).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1,Ama Owusu,85,A\n");
    }

    #[test]
    fn test_write_report_rejects_empty_students() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.txt");
        let mut console = Vec::new();

        let err = write_report(&[], path.to_str().unwrap(), &mut console).unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Config);
        assert!(!path.exists());
        assert!(console.is_empty());
    }

    #[test]
    fn test_write_report_rejects_empty_path() {
        let mut console = Vec::new();
        let err = write_report(&sample(), "", &mut console).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Config);
    }

    #[test]
    fn test_build_report() {
        let report = build_report(sample()).unwrap();
        assert_eq!(report.students.len(), 2);
        assert_eq!(
            report.summaries,
            vec![
                "Ama Owusu (ID:1): Score = 85, Grade = A".to_string(),
                "Kojo Mensah (ID:2): Score = 42, Grade = F".to_string(),
            ]
        );
        assert_eq!(build_report(Vec::new()).unwrap_err().category(), ErrorCategory::Config);
    }

    #[test]
    fn test_quiet_mode_skips_summaries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.txt");
        let path = path.to_str().unwrap();
        let mut console = Vec::new();

        let report = build_report(sample()).unwrap();
        save_report(&report, path, &mut console, false).unwrap();

        assert_eq!(
            String::from_utf8(console).unwrap(),
            format!("Writing report to {}\n", path)
        );
        assert!(std::fs::metadata(path).unwrap().len() > 0);
    }
}
