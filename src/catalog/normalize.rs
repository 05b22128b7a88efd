/// Separator between a song title and the subtitle Spotify appends to
/// variants, as in `Let It Be - Remastered 2009`.
pub const TITLE_DELIMITER: &str = " - ";

/// Literal replacements applied, in order, before a title is split.
///
/// Entries keep abbreviation periods and unusual dashes from being read as
/// (or hiding) a title/subtitle delimiter. Extend the table rather than the
/// splitting code.
pub const DEFAULT_REPLACEMENTS: &[(&str, &str)] = &[
    ("Sgt. ", "Sgt "),
    ("Mr. ", "Mr "),
    ("Mrs. ", "Mrs "),
    ("Dr. ", "Dr "),
    ("St. ", "St "),
    ("Vol. ", "Vol "),
    ("No. ", "No "),
    (" – ", TITLE_DELIMITER),
    (" — ", TITLE_DELIMITER),
    (" -- ", TITLE_DELIMITER),
];

/// Identity of a track title after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleIdentity {
    /// Grouping key: the title without any subtitle.
    pub short_name: String,
    /// Title after the replacement table was applied.
    pub cleaned: String,
    /// Trimmed parts of `cleaned` split on the delimiter.
    pub parts: Vec<String>,
}

impl TitleIdentity {
    /// Everything after the short name, e.g. `Remastered 2009`. Empty for a
    /// title without subtitle.
    pub fn version(&self) -> String {
        self.parts
            .get(1..)
            .unwrap_or_default()
            .iter()
            .filter(|p| !p.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(TITLE_DELIMITER)
    }
}

#[derive(Debug, Clone)]
pub struct Normalizer {
    replacements: Vec<(String, String)>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            replacements: DEFAULT_REPLACEMENTS
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
        }
    }
}

impl Normalizer {
    /// A normalizer with an empty replacement table.
    pub fn empty() -> Self {
        Self {
            replacements: Vec::new(),
        }
    }

    /// Appends a replacement, applied after the existing ones.
    pub fn with_replacement(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        let from = from.into();
        if !from.is_empty() {
            self.replacements.push((from, to.into()));
        }
        self
    }

    pub fn replacements(&self) -> &[(String, String)] {
        &self.replacements
    }

    pub fn clean(&self, raw_title: &str) -> String {
        self.replacements
            .iter()
            .fold(raw_title.to_string(), |title, (from, to)| {
                title.replace(from.as_str(), to)
            })
    }

    pub fn normalize(&self, raw_title: &str) -> TitleIdentity {
        let cleaned = self.clean(raw_title);
        let parts: Vec<String> = cleaned
            .split(TITLE_DELIMITER)
            .map(|p| p.trim().to_string())
            .collect();

        let short_name = match parts.first() {
            Some(first) if !first.is_empty() => first.clone(),
            _ => fallback_short_name(&cleaned, raw_title),
        };

        TitleIdentity {
            short_name,
            cleaned,
            parts,
        }
    }
}

// A leading delimiter (" - Intro") leaves nothing before the split.
fn fallback_short_name(cleaned: &str, raw_title: &str) -> String {
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        raw_title.to_string()
    } else {
        trimmed.to_string()
    }
}
