//! Course roster and grading engine.
//!
//! A [`Course`] keeps a fixed list of presentations, each with one
//! homework, enrolls students under sequential ids, records homework
//! submissions and one-time exam scores, and ranks students by a final
//! score made of 75% of the exam score and 25% of the ratio of submitted
//! homework.
//!
//! ```
//! use rgrader::{Course, ExamResult, HomeworkId};
//!
//! let mut course = Course::new("JavaScript OOP", &["Functions", "Closures"])?;
//! let alice = course.add_student("Alice Smith")?;
//! course.submit_homework(alice, HomeworkId(1))?;
//! course.push_exam_results(&[ExamResult::new(alice, 90.0)])?;
//! assert_eq!(course.top_students()[0].final_score, 67.625);
//! # Ok::<(), rgrader::CourseError>(())
//! ```

pub mod config;
pub mod course;
pub mod error;
pub mod model;
pub mod ranking;
pub mod results;
pub mod stats;
pub mod validate;

pub use config::{Config, DEFAULT_TOP_LIMIT, SubmissionPolicy};
pub use course::Course;
pub use error::{CourseError, ErrorKind};
pub use model::{HomeworkId, Student, StudentId};
pub use ranking::Standing;
pub use results::ExamResult;
