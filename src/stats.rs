use crate::course::Course;
use crate::model::StudentId;

/// Number of students per number of distinct homework submitted. The
/// vector is indexed by the number of homework and has no trailing zeroes.
pub fn homework_statistics(c: &Course) -> Vec<usize> {
    let mut completed = vec![0; c.homework_count() + 1];
    for student in c.all_students() {
        completed[c.ledger().distinct_count(student.id)] += 1;
    }
    let latest = completed.iter().rposition(|&n| n != 0).map_or(0, |n| n + 1);
    completed.truncate(latest);
    completed
}

/// Students for whom no exam score has been recorded.
pub fn missing_exam(c: &Course) -> Vec<StudentId> {
    c.all_students()
        .into_iter()
        .filter(|s| !s.has_exam_score())
        .map(|s| s.id)
        .collect()
}
