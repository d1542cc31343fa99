use crate::config::Config;
use crate::error::CourseError;
use crate::model::{HomeworkId, Roster, Student, StudentId, SubmissionLedger};
use crate::ranking::{self, Standing};
use crate::results::{self, ExamResult};
use crate::validate;
use tracing::info;

/// A course: a fixed list of presentations (one homework each), enrolled
/// students, their homework submissions and exam scores.
#[derive(Clone, Debug)]
pub struct Course {
    title: String,
    presentations: Vec<String>,
    students: Roster,
    ledger: SubmissionLedger,
    config: Config,
}

impl Course {
    pub fn new<S: AsRef<str>>(title: &str, presentations: &[S]) -> Result<Course, CourseError> {
        Self::with_config(title, presentations, Config::default())
    }

    pub fn with_config<S: AsRef<str>>(
        title: &str,
        presentations: &[S],
        config: Config,
    ) -> Result<Course, CourseError> {
        if !validate::is_valid_title(title) {
            return Err(CourseError::InvalidTitle(title.to_owned()));
        }
        if presentations.is_empty() {
            return Err(CourseError::NoPresentations);
        }
        if let Some((index, title)) = presentations
            .iter()
            .map(AsRef::as_ref)
            .enumerate()
            .find(|(_, title)| !validate::is_valid_title(title))
        {
            return Err(CourseError::InvalidPresentationTitle {
                index: index + 1,
                title: title.to_owned(),
            });
        }
        info!(
            title,
            presentations = presentations.len(),
            policy = ?config.ledger.policy,
            "course created"
        );
        Ok(Course {
            title: title.to_owned(),
            presentations: presentations
                .iter()
                .map(|p| p.as_ref().to_owned())
                .collect(),
            students: Roster::new(),
            ledger: SubmissionLedger::new(),
            config,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn presentations(&self) -> &[String] {
        &self.presentations
    }

    pub fn homework_count(&self) -> usize {
        self.presentations.len()
    }

    /// Presentation to which the homework belongs, if the homework exists.
    pub fn presentation(&self, homework: HomeworkId) -> Option<&str> {
        validate::is_valid_homework(homework.0, self.homework_count())
            .then(|| self.presentations[homework.presentation_index()].as_str())
    }

    pub fn add_student(&mut self, full_name: &str) -> Result<StudentId, CourseError> {
        self.students.add(full_name)
    }

    /// Copy of every enrolled student, in id order.
    pub fn all_students(&self) -> Vec<Student> {
        self.students.students()
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn student(&self, id: StudentId) -> Result<&Student, CourseError> {
        self.students.get(id)
    }

    pub fn submit_homework(
        &mut self,
        student: StudentId,
        homework: HomeworkId,
    ) -> Result<(), CourseError> {
        self.ledger.submit(&self.students, student, homework, self.presentations.len())
    }

    pub fn submissions(&self, student: StudentId) -> Result<&[HomeworkId], CourseError> {
        self.students.get(student)?;
        Ok(self.ledger.submissions(student))
    }

    /// Number of submissions used in the final score, according to the
    /// configured submission policy.
    pub fn counted_submissions(&self, student: StudentId) -> Result<usize, CourseError> {
        self.students.get(student)?;
        Ok(self.ledger.count_for(student, self.config.ledger.policy))
    }

    pub(crate) fn ledger(&self) -> &SubmissionLedger {
        &self.ledger
    }

    /// Record exam scores. A rejected batch records nothing.
    pub fn push_exam_results(&mut self, results: &[ExamResult]) -> Result<usize, CourseError> {
        results::apply_results(&mut self.students, results)
    }

    /// Final score of every student, in id order.
    pub fn standings(&self) -> Vec<Standing> {
        ranking::standings(
            &self.students,
            &self.ledger,
            self.presentations.len(),
            self.config.ledger.policy,
        )
    }

    /// Best students according to the configured leaderboard size.
    pub fn top_students(&self) -> Vec<Standing> {
        self.top_students_limit(self.config.ranking.limit)
    }

    pub fn top_students_limit(&self, limit: usize) -> Vec<Standing> {
        ranking::top_students(
            &self.students,
            &self.ledger,
            self.presentations.len(),
            self.config.ledger.policy,
            limit,
        )
    }
}
