use rgrader::stats;
use rgrader::{Course, Standing};

pub fn display_top(c: &Course, top: &[Standing]) {
    println!("{}: top {} of {} students", c.title(), top.len(), c.student_count());
    for (rank, standing) in top.iter().enumerate() {
        let s = &standing.student;
        let submitted = c.counted_submissions(s.id).unwrap_or(0);
        println!(
            "  {:>2}. {} ({}): {:.3} (exam {}, homework {}/{})",
            rank + 1,
            s,
            s.id,
            standing.final_score,
            s.exam_score(),
            submitted,
            c.homework_count()
        );
    }
}

pub fn display_stats(c: &Course) {
    let completed = stats::homework_statistics(c);
    let total: usize = completed.iter().sum();
    if total == 0 {
        return;
    }
    println!("Homework completion:");
    for (n, students) in completed.iter().enumerate() {
        if *students != 0 {
            println!(
                "  - {}/{} homework: {} ({:.2}%)",
                n,
                c.homework_count(),
                students,
                100.0 * *students as f32 / total as f32
            );
        }
    }
}

pub fn display_missing_exam(c: &Course) {
    let missing = stats::missing_exam(c);
    if !missing.is_empty() {
        println!("Students without exam score:");
        for id in missing {
            if let Ok(s) = c.student(id) {
                println!("  - {} ({})", s, id);
            }
        }
    }
}
