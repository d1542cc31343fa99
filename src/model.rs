pub use self::ledger::{HomeworkId, SubmissionLedger};
pub use self::roster::Roster;
pub use self::student::{Student, StudentId};

mod ledger;
mod roster;
mod student;
