use std::path::Path;

/// One classification decision about a track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub track: String,
    pub reason: String,
}

impl AuditEntry {
    /// Renders the entry as an org/markdown table row.
    pub fn to_row(&self) -> String {
        format!("| {} | {} |", self.track, self.reason)
    }
}

/// Append-only record of classification decisions, in decision order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, track: impl Into<String>, reason: impl Into<String>) {
        self.entries.push(AuditEntry {
            track: track.into(),
            reason: reason.into(),
        });
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One newline-terminated `| track | reason |` line per entry.
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{}\n", e.to_row()))
            .collect()
    }

    /// Writes the log to `path`, replacing any previous file.
    pub async fn write(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                async_fs::create_dir_all(parent).await?;
            }
        }
        async_fs::write(path, self.render()).await
    }
}
