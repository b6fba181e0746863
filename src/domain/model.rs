use std::fmt;

/// One validated line of the student input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i32,
    pub full_name: String,
    pub score: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: i64) -> Self {
        match score {
            s if s >= 80 => Grade::A,
            s if s >= 70 => Grade::B,
            s if s >= 60 => Grade::C,
            s if s >= 50 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Student {
    pub fn grade(&self) -> Grade {
        Grade::from_score(i64::from(self.score))
    }

    /// Report columns in output order: id, full name, score, grade.
    pub fn report_fields(&self) -> [String; 4] {
        [
            self.id.to_string(),
            self.full_name.clone(),
            self.score.to_string(),
            self.grade().to_string(),
        ]
    }

    /// `id,full_name,score,grade`
    pub fn to_report_line(&self) -> String {
        self.report_fields().join(",")
    }

    pub fn summary_line(&self) -> String {
        format!(
            "{} (ID:{}): Score = {}, Grade = {}",
            self.full_name,
            self.id,
            self.score,
            self.grade()
        )
    }
}

/// Graded students with their report file content already rendered.
#[derive(Debug, Clone)]
pub struct GradeReport {
    pub students: Vec<Student>,
    pub report_data: Vec<u8>,
    pub summaries: Vec<String>,
}
