use super::{Roster, StudentId};
use crate::config::SubmissionPolicy;
use crate::error::CourseError;
use crate::validate;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::trace;

/// Homework identifier. Homework `n` belongs to the `n`-th presentation.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct HomeworkId(pub usize);

impl HomeworkId {
    pub fn from_raw(n: i64) -> Option<HomeworkId> {
        validate::is_positive_integer(n).then(|| HomeworkId(n as usize))
    }

    /// Index of the matching presentation.
    pub fn presentation_index(self) -> usize {
        self.0 - 1
    }
}

impl fmt::Display for HomeworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "homework {}", self.0)
    }
}

/// Record of submitted homework, per student, in submission order.
///
/// Submitting the same homework twice appends a second entry.
#[derive(Clone, Debug, Default)]
pub struct SubmissionLedger {
    submitted: HashMap<StudentId, Vec<HomeworkId>>,
}

impl SubmissionLedger {
    pub fn new() -> SubmissionLedger {
        SubmissionLedger::default()
    }

    pub fn submit(
        &mut self,
        roster: &Roster,
        student: StudentId,
        homework: HomeworkId,
        presentations: usize,
    ) -> Result<(), CourseError> {
        if !roster.exists(student) {
            return Err(CourseError::UnknownStudent(student));
        }
        if !validate::is_valid_homework(homework.0, presentations) {
            return Err(CourseError::InvalidHomework {
                homework: homework.0,
                presentations,
            });
        }
        let entries = self.submitted.entry(student).or_default();
        entries.push(homework);
        trace!(
            %student,
            %homework,
            submissions = entries.len(),
            "homework submitted"
        );
        Ok(())
    }

    pub fn submissions(&self, student: StudentId) -> &[HomeworkId] {
        self.submitted
            .get(&student)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn submission_count(&self, student: StudentId) -> usize {
        self.submissions(student).len()
    }

    pub fn distinct_count(&self, student: StudentId) -> usize {
        self.submissions(student)
            .iter()
            .collect::<HashSet<_>>()
            .len()
    }

    /// Number of submissions taken into account for scoring.
    pub fn count_for(&self, student: StudentId, policy: SubmissionPolicy) -> usize {
        match policy {
            SubmissionPolicy::Count => self.submission_count(student),
            SubmissionPolicy::Distinct => self.distinct_count(student),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        let mut roster = Roster::new();
        roster.add("Alice Smith").unwrap();
        roster.add("Bob Jones").unwrap();
        roster
    }

    #[test]
    fn test_submit() {
        let roster = roster();
        let mut ledger = SubmissionLedger::new();
        ledger.submit(&roster, StudentId(1), HomeworkId(2), 4).unwrap();
        ledger.submit(&roster, StudentId(1), HomeworkId(4), 4).unwrap();
        ledger.submit(&roster, StudentId(1), HomeworkId(1), 4).unwrap();
        assert_eq!(
            ledger.submissions(StudentId(1)),
            &[HomeworkId(2), HomeworkId(4), HomeworkId(1)]
        );
        assert_eq!(ledger.submission_count(StudentId(1)), 3);
        assert_eq!(ledger.submission_count(StudentId(2)), 0);
        assert!(ledger.submissions(StudentId(2)).is_empty());
    }

    #[test]
    fn test_resubmission_is_appended() {
        let roster = roster();
        let mut ledger = SubmissionLedger::new();
        for _ in 0..3 {
            ledger.submit(&roster, StudentId(2), HomeworkId(1), 2).unwrap();
        }
        assert_eq!(ledger.submission_count(StudentId(2)), 3);
        assert_eq!(ledger.distinct_count(StudentId(2)), 1);
        assert_eq!(ledger.count_for(StudentId(2), SubmissionPolicy::Count), 3);
        assert_eq!(ledger.count_for(StudentId(2), SubmissionPolicy::Distinct), 1);
    }

    #[test]
    fn test_submit_unknown_student() {
        let roster = roster();
        let mut ledger = SubmissionLedger::new();
        assert_eq!(
            ledger.submit(&roster, StudentId(3), HomeworkId(1), 4),
            Err(CourseError::UnknownStudent(StudentId(3)))
        );
        assert_eq!(
            ledger.submit(&roster, StudentId(0), HomeworkId(1), 4),
            Err(CourseError::UnknownStudent(StudentId(0)))
        );
        assert_eq!(ledger.submission_count(StudentId(3)), 0);
    }

    #[test]
    fn test_submit_out_of_range() {
        let roster = roster();
        let mut ledger = SubmissionLedger::new();
        for homework in [0, 5, 100] {
            assert_eq!(
                ledger.submit(&roster, StudentId(1), HomeworkId(homework), 4),
                Err(CourseError::InvalidHomework {
                    homework,
                    presentations: 4
                })
            );
        }
        assert_eq!(ledger.submission_count(StudentId(1)), 0);
    }

    #[test]
    fn test_homework_from_raw() {
        assert_eq!(HomeworkId::from_raw(3), Some(HomeworkId(3)));
        assert_eq!(HomeworkId::from_raw(0), None);
        assert_eq!(HomeworkId::from_raw(-1), None);
        assert_eq!(HomeworkId(3).presentation_index(), 2);
    }
}
