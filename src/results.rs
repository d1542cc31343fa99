use crate::error::CourseError;
use crate::model::{Roster, StudentId};
use crate::validate;
use std::collections::HashMap;
use tracing::debug;

/// Exam score for one student, as pushed by the examiner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExamResult {
    pub student: StudentId,
    pub score: f64,
}

impl ExamResult {
    pub fn new(student: StudentId, score: f64) -> ExamResult {
        ExamResult { student, score }
    }
}

/// Apply a batch of exam results to the roster and return the number of
/// scores recorded.
///
/// The whole batch is checked before anything is written: if any entry
/// is rejected, no student is modified. An entry is rejected if its
/// student is not enrolled, if its score is not a finite non-negative
/// number, or if the student already has a nonzero score (either from
/// an earlier batch or from an earlier entry of this batch).
pub fn apply_results(roster: &mut Roster, results: &[ExamResult]) -> Result<usize, CourseError> {
    let mut pending: HashMap<StudentId, f64> = HashMap::new();
    let mut accepted = Vec::with_capacity(results.len());
    for &ExamResult { student, score } in results {
        let current = match pending.get(&student) {
            Some(&pending_score) => pending_score,
            None => roster
                .get(student)
                .map_err(|_| CourseError::UnknownExamStudent(student))?
                .exam_score(),
        };
        if !validate::is_valid_score(score) {
            return Err(CourseError::InvalidScore { student, score });
        }
        if current != 0.0 {
            return Err(CourseError::DuplicateExamResult(student));
        }
        pending.insert(student, score);
        accepted.push((student, score));
    }
    for &(student, score) in &accepted {
        if score != 0.0 {
            roster.get_mut(student)?.set_exam_score(score);
        }
    }
    debug!(
        entries = results.len(),
        students = pending.len(),
        "exam results applied"
    );
    Ok(accepted.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(n: usize) -> Roster {
        let mut roster = Roster::new();
        for name in ["Alice Smith", "Bob Jones", "Carol Adams", "Dave Brown"]
            .into_iter()
            .take(n)
        {
            roster.add(name).unwrap();
        }
        roster
    }

    fn scores(roster: &Roster) -> Vec<f64> {
        roster.iter().map(|s| s.exam_score()).collect()
    }

    #[test]
    fn test_apply() {
        let mut roster = roster(3);
        let applied = apply_results(
            &mut roster,
            &[
                ExamResult::new(StudentId(3), 55.0),
                ExamResult::new(StudentId(1), 80.5),
            ],
        )
        .unwrap();
        assert_eq!(applied, 2);
        assert_eq!(scores(&roster), vec![80.5, 0.0, 55.0]);
    }

    #[test]
    fn test_second_push_is_cheating() {
        let mut roster = roster(1);
        apply_results(&mut roster, &[ExamResult::new(StudentId(1), 10.0)]).unwrap();
        assert_eq!(
            apply_results(&mut roster, &[ExamResult::new(StudentId(1), 20.0)]),
            Err(CourseError::DuplicateExamResult(StudentId(1)))
        );
        assert_eq!(scores(&roster), vec![10.0]);
    }

    #[test]
    fn test_duplicate_within_batch() {
        let mut roster = roster(2);
        assert_eq!(
            apply_results(
                &mut roster,
                &[
                    ExamResult::new(StudentId(2), 30.0),
                    ExamResult::new(StudentId(1), 40.0),
                    ExamResult::new(StudentId(2), 35.0),
                ],
            ),
            Err(CourseError::DuplicateExamResult(StudentId(2)))
        );
        // Nothing from the failing batch is kept.
        assert_eq!(scores(&roster), vec![0.0, 0.0]);
    }

    #[test]
    fn test_zero_score_can_be_followed() {
        let mut roster = roster(1);
        apply_results(
            &mut roster,
            &[
                ExamResult::new(StudentId(1), 0.0),
                ExamResult::new(StudentId(1), 12.0),
            ],
        )
        .unwrap();
        assert_eq!(scores(&roster), vec![12.0]);
    }

    #[test]
    fn test_rejections() {
        let mut roster = roster(2);
        assert_eq!(
            apply_results(
                &mut roster,
                &[
                    ExamResult::new(StudentId(1), 10.0),
                    ExamResult::new(StudentId(9), 10.0),
                ]
            ),
            Err(CourseError::UnknownExamStudent(StudentId(9)))
        );
        assert_eq!(
            apply_results(&mut roster, &[ExamResult::new(StudentId(2), -1.0)]),
            Err(CourseError::InvalidScore {
                student: StudentId(2),
                score: -1.0
            })
        );
        assert!(matches!(
            apply_results(&mut roster, &[ExamResult::new(StudentId(2), f64::NAN)]),
            Err(CourseError::InvalidScore { .. })
        ));
        assert!(matches!(
            apply_results(&mut roster, &[ExamResult::new(StudentId(2), f64::INFINITY)]),
            Err(CourseError::InvalidScore { .. })
        ));
        assert_eq!(scores(&roster), vec![0.0, 0.0]);
    }

    #[test]
    fn test_empty_batch() {
        let mut roster = roster(2);
        assert_eq!(apply_results(&mut roster, &[]), Ok(0));
    }
}
