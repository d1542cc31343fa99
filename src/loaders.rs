use eyre::{Error, OptionExt, WrapErr};
use rgrader::{Config, Course, ExamResult, HomeworkId, StudentId};
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, trace};

/// Course description as written in a scenario file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub title: String,
    pub presentations: Vec<String>,
    #[serde(default)]
    pub students: Vec<String>,
    #[serde(default)]
    pub submissions: Vec<RawSubmission>,
    #[serde(default)]
    pub exam_results: Vec<RawExamResult>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawSubmission {
    pub student: i64,
    pub homework: i64,
}

#[derive(Debug, Deserialize)]
pub struct RawExamResult {
    #[serde(rename = "StudentID", alias = "student")]
    pub student: i64,
    #[serde(rename = "Score", alias = "score")]
    pub score: f64,
}

impl RawExamResult {
    fn check(&self) -> Result<ExamResult, Error> {
        let student = StudentId::from_raw(self.student)
            .ok_or_eyre(format!("invalid student id {}", self.student))?;
        Ok(ExamResult::new(student, self.score))
    }
}

impl RawSubmission {
    fn check(&self) -> Result<(StudentId, HomeworkId), Error> {
        let student = StudentId::from_raw(self.student)
            .ok_or_eyre(format!("invalid student id {}", self.student))?;
        let homework = HomeworkId::from_raw(self.homework)
            .ok_or_eyre(format!("invalid homework id {}", self.homework))?;
        Ok((student, homework))
    }
}

pub fn load_config(path: Option<&Path>) -> Result<Config, Error> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("cannot load configuration file {}", path.display()))?;
    Config::from_toml(&content).wrap_err("cannot parse configuration file")
}

pub fn parse_scenario(s: &str) -> Result<Scenario, Error> {
    toml::from_str(s).wrap_err("cannot parse scenario")
}

pub fn load_scenario(path: &Path) -> Result<Scenario, Error> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("cannot load scenario {}", path.display()))?;
    parse_scenario(&content)
}

/// Read exam results from CSV data with a `StudentID,Score` header.
pub fn read_exam_results<R: io::Read>(reader: R) -> Result<Vec<ExamResult>, Error> {
    let mut results = Vec::new();
    for (line, record) in csv::Reader::from_reader(reader)
        .deserialize::<RawExamResult>()
        .enumerate()
    {
        let record = record.wrap_err_with(|| format!("cannot read exam result {}", line + 1))?;
        results.push(
            record
                .check()
                .wrap_err_with(|| format!("bad exam result {}", line + 1))?,
        );
    }
    Ok(results)
}

pub fn load_exam_results(path: &Path) -> Result<Vec<ExamResult>, Error> {
    let file = fs::File::open(path)
        .wrap_err_with(|| format!("cannot open exam results {}", path.display()))?;
    read_exam_results(file)
}

/// Build the course described by the scenario, then record its students,
/// submissions and exam results in this order.
pub fn build_course(
    scenario: &Scenario,
    config: Config,
    extra_results: &[ExamResult],
) -> Result<Course, Error> {
    let mut course = Course::with_config(&scenario.title, &scenario.presentations, config)
        .wrap_err("cannot create course")?;
    for name in &scenario.students {
        let id = course
            .add_student(name)
            .wrap_err_with(|| format!("cannot enroll {name:?}"))?;
        trace!(%id, %name, "enrolled");
    }
    for submission in &scenario.submissions {
        let (student, homework) = submission.check()?;
        course
            .submit_homework(student, homework)
            .wrap_err("cannot record submission")?;
    }
    let mut results = scenario
        .exam_results
        .iter()
        .map(RawExamResult::check)
        .collect::<Result<Vec<_>, _>>()?;
    results.extend_from_slice(extra_results);
    if results.is_empty() {
        return Ok(course);
    }
    let applied = course
        .push_exam_results(&results)
        .wrap_err("cannot record exam results")?;
    info!(applied, "exam results recorded");
    Ok(course)
}
