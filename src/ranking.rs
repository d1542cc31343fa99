use crate::config::SubmissionPolicy;
use crate::model::{Roster, Student, SubmissionLedger};
use std::cmp::Ordering;

const EXAM_WEIGHT: f64 = 0.75;
const HOMEWORK_WEIGHT: f64 = 0.25;

/// A student together with its final score.
#[derive(Clone, Debug, PartialEq)]
pub struct Standing {
    pub student: Student,
    pub final_score: f64,
}

/// Blend the exam score with the ratio of submitted homework.
///
/// # Panics
///
/// Panics if `presentations` is zero.
pub fn final_score(exam_score: f64, submissions: usize, presentations: usize) -> f64 {
    assert!(presentations > 0, "a course always has presentations");
    EXAM_WEIGHT * exam_score + HOMEWORK_WEIGHT * (submissions as f64 / presentations as f64)
}

/// Compute the final score of every student, in id order.
pub(crate) fn standings(
    roster: &Roster,
    ledger: &SubmissionLedger,
    presentations: usize,
    policy: SubmissionPolicy,
) -> Vec<Standing> {
    roster
        .iter()
        .map(|student| Standing {
            final_score: final_score(
                student.exam_score(),
                ledger.count_for(student.id, policy),
                presentations,
            ),
            student: student.clone(),
        })
        .collect()
}

/// Best first, students with the same score ordered by id.
fn by_rank(a: &Standing, b: &Standing) -> Ordering {
    b.final_score
        .total_cmp(&a.final_score)
        .then_with(|| a.student.id.cmp(&b.student.id))
}

/// Return at most `limit` students, best first.
pub(crate) fn top_students(
    roster: &Roster,
    ledger: &SubmissionLedger,
    presentations: usize,
    policy: SubmissionPolicy,
    limit: usize,
) -> Vec<Standing> {
    let mut standings = standings(roster, ledger, presentations, policy);
    standings.sort_by(by_rank);
    standings.truncate(limit);
    standings
}
