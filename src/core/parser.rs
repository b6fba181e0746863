use crate::domain::model::Student;
use crate::utils::error::{GradeError, Result};
use crate::utils::validation::{is_non_empty_string, validate_path, validate_range};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, Write};

pub const FIELD_DELIMITER: char = ',';

pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 100;

/// Reads every student in `path`, announcing the read on `console` first.
///
/// The read is fail-fast: the first bad line aborts the whole call and no
/// records are returned.
pub fn read_students<W: Write>(path: &str, console: &mut W) -> Result<Vec<Student>> {
    validate_path("File path", path)?;

    writeln!(console, "Reading student data from {}", path)?;
    tracing::debug!("Opening input file {}", path);

    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => GradeError::FileNotFoundError {
            path: path.to_string(),
        },
        _ => GradeError::IoError(e),
    })?;

    let students = parse_students(file)?;
    tracing::debug!("Parsed {} students from {}", students.len(), path);
    Ok(students)
}

/// Parses `id,full_name,score` lines from any reader. Fields after the third
/// are ignored. Every physical line counts, so an empty line is a
/// `MissingFieldError` like any other short line.
pub fn parse_students<R: Read>(reader: R) -> Result<Vec<Student>> {
    let mut students = Vec::new();
    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        students.push(parse_fields(&fields, index as u64 + 1)?);
    }

    Ok(students)
}

fn parse_fields(fields: &[&str], line: u64) -> Result<Student> {
    if fields.len() < 3 {
        return Err(GradeError::MissingFieldError {
            line,
            message: "Each line must contain three fields: Id, FullName, and Score.".to_string(),
        });
    }

    let raw_id = fields[0];
    let id = raw_id
        .trim()
        .parse::<i32>()
        .map_err(|_| GradeError::InvalidIdError {
            line,
            value: raw_id.to_string(),
        })?;

    let full_name = fields[1];
    if !is_non_empty_string(full_name) {
        return Err(GradeError::MissingFieldError {
            line,
            message: "FullName cannot be empty.".to_string(),
        });
    }

    let raw_score = fields[2];
    let score = raw_score
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|s| validate_range(*s, MIN_SCORE, MAX_SCORE))
        .and_then(|s| u8::try_from(s).ok())
        .ok_or_else(|| GradeError::InvalidScoreError {
            line,
            value: raw_score.to_string(),
        })?;

    Ok(Student {
        id,
        full_name: full_name.to_string(),
        score,
    })
}
