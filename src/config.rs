use serde::Deserialize;

/// Default number of students returned by the leaderboard.
pub const DEFAULT_TOP_LIMIT: usize = 10;

/// How homework submissions are counted when computing the final score.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionPolicy {
    /// Every ledger entry counts, including repeated submissions.
    #[default]
    Count,
    /// Only distinct homework ids count.
    Distinct,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RankingConfig {
    pub limit: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_TOP_LIMIT,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LedgerConfig {
    pub policy: SubmissionPolicy,
}

/// Grading settings, usually read from a TOML file:
///
/// ```toml
/// [ranking]
/// limit = 10
///
/// [ledger]
/// policy = "count"
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub ranking: RankingConfig,
    pub ledger: LedgerConfig,
}

impl Config {
    pub fn from_toml(s: &str) -> Result<Config, toml::de::Error> {
        toml::from_str(s)
    }
}
