use super::{Student, StudentId};
use crate::error::CourseError;
use tracing::debug;

/// Students enrolled in a course, in id order.
///
/// Identifiers are given out sequentially starting at 1 and students are
/// never removed, so the student with id `n` lives at index `n - 1`.
#[derive(Clone, Debug, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    pub fn new() -> Roster {
        Roster::default()
    }

    /// Enroll a student given as `Firstname Lastname` and return its id.
    pub fn add(&mut self, full_name: &str) -> Result<StudentId, CourseError> {
        let id = StudentId(self.students.len() + 1);
        let student = Student::new(id, full_name)?;
        debug!(student = %student, %id, "student enrolled");
        self.students.push(student);
        Ok(id)
    }

    /// Copy of all students, in id order.
    pub fn students(&self) -> Vec<Student> {
        self.students.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn exists(&self, StudentId(id): StudentId) -> bool {
        (1..=self.students.len()).contains(&id)
    }

    pub fn get(&self, student: StudentId) -> Result<&Student, CourseError> {
        if self.exists(student) {
            Ok(&self.students[student.0 - 1])
        } else {
            Err(CourseError::UnknownStudent(student))
        }
    }

    pub(crate) fn get_mut(&mut self, student: StudentId) -> Result<&mut Student, CourseError> {
        if self.exists(student) {
            Ok(&mut self.students[student.0 - 1])
        } else {
            Err(CourseError::UnknownStudent(student))
        }
    }
}
