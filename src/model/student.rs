use crate::error::CourseError;
use crate::validate;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StudentId(pub usize);

impl StudentId {
    /// Build an identifier from an untrusted integer. Identifiers start at 1.
    pub fn from_raw(n: i64) -> Option<StudentId> {
        validate::is_positive_integer(n).then(|| StudentId(n as usize))
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Student {
    pub id: StudentId,
    pub firstname: String,
    pub lastname: String,
    exam_score: f64,
}

impl Student {
    /// Build a student from a `Firstname Lastname` string.
    pub fn new(id: StudentId, full_name: &str) -> Result<Student, CourseError> {
        if !validate::is_valid_full_name(full_name) {
            return Err(CourseError::InvalidName(full_name.to_owned()));
        }
        let Some((firstname, lastname)) = full_name.split_once(' ') else {
            return Err(CourseError::InvalidName(full_name.to_owned()));
        };
        Ok(Student {
            id,
            firstname: firstname.to_owned(),
            lastname: lastname.to_owned(),
            exam_score: 0.0,
        })
    }

    pub fn exam_score(&self) -> f64 {
        self.exam_score
    }

    /// A nonzero exam score means the student already took the exam.
    pub fn has_exam_score(&self) -> bool {
        self.exam_score != 0.0
    }

    pub(crate) fn set_exam_score(&mut self, score: f64) {
        assert!(
            !self.has_exam_score(),
            "exam score of {self} is already recorded"
        );
        self.exam_score = score;
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.firstname, self.lastname)
    }
}
