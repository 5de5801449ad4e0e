use std::fmt;

/// Why a file was left alone before any rename was attempted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No track number, title or artist (or no tag at all).
    NoTags,
    /// The file could not be parsed.
    ReadError,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Renamed,
    /// Dry run: the rename would have been attempted.
    Planned,
    /// The built name is the current name.
    Unchanged,
    Skipped(SkipReason),
    /// The rename was attempted (or refused) and the file keeps its name.
    Failed(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Renamed => f.write_str("renamed"),
            Self::Planned => f.write_str("planned"),
            Self::Unchanged => f.write_str("unchanged"),
            Self::Skipped(SkipReason::NoTags) => f.write_str("skipped: missing tags"),
            Self::Skipped(SkipReason::ReadError) => f.write_str("skipped: unreadable tags"),
            Self::Failed(msg) => write!(f, "failed: {msg}"),
        }
    }
}

/// One qualifying file of a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameRecord {
    pub original_name: String,
    /// `None` when the file was skipped before a name was built.
    pub new_name: Option<String>,
    pub outcome: Outcome,
}

impl RenameRecord {
    pub fn skipped(original_name: impl Into<String>, reason: SkipReason) -> Self {
        Self {
            original_name: original_name.into(),
            new_name: None,
            outcome: Outcome::Skipped(reason),
        }
    }
}

impl fmt::Display for RenameRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.new_name {
            Some(new) => write!(f, "{} -> {} [{}]", self.original_name, new, self.outcome),
            None => write!(f, "{} [{}]", self.original_name, self.outcome),
        }
    }
}

/// Records of a batch run, in directory listing order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub records: Vec<RenameRecord>,
}

impl BatchReport {
    pub fn push(&mut self, record: RenameRecord) {
        self.records.push(record);
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up the record of a file by its original name.
    pub fn get(&self, original_name: &str) -> Option<&RenameRecord> {
        self.records
            .iter()
            .find(|r| r.original_name == original_name)
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.records.iter().filter(|r| pred(&r.outcome)).count()
    }

    pub fn renamed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Renamed))
    }

    pub fn planned(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Planned))
    }

    pub fn unchanged(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Unchanged))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Skipped(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    /// One-line human summary, e.g. `2 renamed, 1 skipped, 0 failed`.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if self.planned() > 0 {
            parts.push(format!("{} planned", self.planned()));
        } else {
            parts.push(format!("{} renamed", self.renamed()));
        }
        if self.unchanged() > 0 {
            parts.push(format!("{} unchanged", self.unchanged()));
        }
        parts.push(format!("{} skipped", self.skipped()));
        parts.push(format!("{} failed", self.failed()));
        parts.join(", ")
    }
}
