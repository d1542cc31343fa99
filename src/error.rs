use crate::model::StudentId;
use thiserror::Error;

/// Broad classification of a [`CourseError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Malformed input.
    Validation,
    /// Reference to a student who is not enrolled.
    NotFound,
    /// Second exam score for the same student.
    DuplicateSubmission,
}

#[derive(Debug, Error, PartialEq)]
pub enum CourseError {
    #[error("invalid course title `{0}`")]
    InvalidTitle(String),
    #[error("a course needs at least one presentation")]
    NoPresentations,
    #[error("invalid title `{title}` for presentation {index}")]
    InvalidPresentationTitle { index: usize, title: String },
    #[error("invalid student name `{0}`, expected `Firstname Lastname`")]
    InvalidName(String),
    #[error("homework {homework} does not exist, valid ids go from 1 to {presentations}")]
    InvalidHomework {
        homework: usize,
        presentations: usize,
    },
    #[error("invalid exam score {score} for student {student}")]
    InvalidScore { student: StudentId, score: f64 },
    #[error("exam results reference unknown student {0}")]
    UnknownExamStudent(StudentId),
    #[error("student {0} does not exist")]
    UnknownStudent(StudentId),
    #[error("student {0} already has an exam score")]
    DuplicateExamResult(StudentId),
}

impl CourseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CourseError::UnknownStudent(_) => ErrorKind::NotFound,
            CourseError::DuplicateExamResult(_) => ErrorKind::DuplicateSubmission,
            CourseError::InvalidTitle(_)
            | CourseError::NoPresentations
            | CourseError::InvalidPresentationTitle { .. }
            | CourseError::InvalidName(_)
            | CourseError::InvalidHomework { .. }
            | CourseError::InvalidScore { .. }
            | CourseError::UnknownExamStudent(_) => ErrorKind::Validation,
        }
    }
}

#[test]
fn test_kind() {
    assert_eq!(
        CourseError::UnknownStudent(StudentId(4)).kind(),
        ErrorKind::NotFound
    );
    assert_eq!(
        CourseError::UnknownExamStudent(StudentId(4)).kind(),
        ErrorKind::Validation
    );
    assert_eq!(
        CourseError::DuplicateExamResult(StudentId(1)).kind(),
        ErrorKind::DuplicateSubmission
    );
    assert_eq!(
        CourseError::UnknownStudent(StudentId(4)).to_string(),
        "student #4 does not exist"
    );
}
