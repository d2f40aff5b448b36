//! Student grade summaries.
//!
//! A [`Student`] record holds a name and a list of graded subjects; [`summarize`]
//! reduces it to the grade average and the names of the highest- and
//! lowest-graded subjects.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordscanError};

/// A single graded subject.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Subject name
    pub name: String,

    /// Grade for the subject
    pub grade: f64,
}

impl Subject {
    /// Create a new graded subject.
    pub fn new<S: Into<String>>(name: S, grade: f64) -> Self {
        Subject {
            name: name.into(),
            grade,
        }
    }
}

/// A student record with a list of graded subjects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Student name
    pub name: String,

    /// Graded subjects, in enrollment order
    pub grades: Vec<Subject>,
}

impl Student {
    /// Create a new student record.
    pub fn new<S: Into<String>>(name: S, grades: Vec<Subject>) -> Self {
        Student {
            name: name.into(),
            grades,
        }
    }

    /// The fixed sample record used as the default CLI input.
    pub fn sample() -> Self {
        Student::new(
            "John Doe",
            vec![
                Subject::new("math", 80.0),
                Subject::new("science", 100.0),
                Subject::new("history", 60.0),
                Subject::new("PE", 90.0),
                Subject::new("music", 98.0),
            ],
        )
    }
}

/// Summary statistics computed from a student record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradeSummary {
    /// Student name, carried over from the record
    pub name: String,

    /// Arithmetic mean of all grades
    pub grade_avg: f64,

    /// Name of the subject with the highest grade
    pub highest_grade: String,

    /// Name of the subject with the lowest grade
    pub lowest_grade: String,
}

/// Compute the grade summary for a student record.
///
/// Ties on the highest or lowest grade keep the earliest subject in the
/// list. A record with no grades has no average and is rejected.
pub fn summarize(student: &Student) -> Result<GradeSummary> {
    if student.grades.is_empty() {
        return Err(WordscanError::invalid_operation(format!(
            "student '{}' has no grades",
            student.name
        )));
    }

    let mut total = 0.0;
    for subject in &student.grades {
        total += subject.grade;
    }
    let grade_avg = total / student.grades.len() as f64;

    let mut highest = &student.grades[0];
    for subject in &student.grades {
        if subject.grade > highest.grade {
            highest = subject;
        }
    }

    let mut lowest = &student.grades[0];
    for subject in &student.grades {
        if subject.grade < lowest.grade {
            lowest = subject;
        }
    }

    Ok(GradeSummary {
        name: student.name.clone(),
        grade_avg,
        highest_grade: highest.name.clone(),
        lowest_grade: lowest.name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_sample() {
        let summary = summarize(&Student::sample()).unwrap();

        assert_eq!(summary.name, "John Doe");
        assert_eq!(summary.grade_avg, 85.6);
        assert_eq!(summary.highest_grade, "science");
        assert_eq!(summary.lowest_grade, "history");
    }

    #[test]
    fn test_summarize_single_subject() {
        let student = Student::new("Ada", vec![Subject::new("math", 100.0)]);
        let summary = summarize(&student).unwrap();

        assert_eq!(summary.grade_avg, 100.0);
        assert_eq!(summary.highest_grade, "math");
        assert_eq!(summary.lowest_grade, "math");
    }

    #[test]
    fn test_summarize_ties_keep_earliest_subject() {
        let student = Student::new(
            "Ada",
            vec![
                Subject::new("math", 90.0),
                Subject::new("science", 90.0),
                Subject::new("history", 90.0),
            ],
        );
        let summary = summarize(&student).unwrap();

        assert_eq!(summary.highest_grade, "math");
        assert_eq!(summary.lowest_grade, "math");
    }

    #[test]
    fn test_summarize_empty_grades_is_rejected() {
        let student = Student::new("Ada", vec![]);
        let err = summarize(&student).unwrap_err();

        assert!(matches!(err, WordscanError::InvalidOperation(_)));
    }

    #[test]
    fn test_student_record_json_round_trip() {
        let student = Student::sample();
        let json = serde_json::to_string(&student).unwrap();
        let parsed: Student = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, student);
    }
}
