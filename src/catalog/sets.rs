use std::{
    collections::{BTreeMap, HashSet},
    fmt,
    str::FromStr,
};

use super::{classify::Catalog, track::ClassifiedTrack};

/// Named output sets derived from a classified catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NamedSet {
    All,
    Short,
    Candidates,
    ThreeOrMore,
    ThreeOrMoreUnfiltered,
    ThreeOrMoreByReleaseDate,
    Originals,
    OnExcludedAlbum,
    Singles,
}

impl NamedSet {
    pub const ALL: [NamedSet; 9] = [
        NamedSet::All,
        NamedSet::Short,
        NamedSet::Candidates,
        NamedSet::ThreeOrMore,
        NamedSet::ThreeOrMoreUnfiltered,
        NamedSet::ThreeOrMoreByReleaseDate,
        NamedSet::Originals,
        NamedSet::OnExcludedAlbum,
        NamedSet::Singles,
    ];

    /// Sets rebuilt by `--rebuild-multiple`.
    pub const MULTIPLE: [NamedSet; 5] = [
        NamedSet::ThreeOrMore,
        NamedSet::ThreeOrMoreUnfiltered,
        NamedSet::ThreeOrMoreByReleaseDate,
        NamedSet::Originals,
        NamedSet::OnExcludedAlbum,
    ];

    /// Sets rebuilt by `--rebuild-base`.
    pub const BASE: [NamedSet; 3] = [NamedSet::All, NamedSet::Short, NamedSet::Candidates];

    pub fn key(&self) -> &'static str {
        match self {
            NamedSet::All => "all",
            NamedSet::Short => "short",
            NamedSet::Candidates => "candidates",
            NamedSet::ThreeOrMore => "3-or-more",
            NamedSet::ThreeOrMoreUnfiltered => "3-or-more-unfiltered",
            NamedSet::ThreeOrMoreByReleaseDate => "3-or-more-by-release-date",
            NamedSet::Originals => "originals",
            NamedSet::OnExcludedAlbum => "on-excluded-album",
            NamedSet::Singles => "singles",
        }
    }

    /// Suffix appended to the artist name to form the default playlist name.
    pub fn playlist_suffix(&self) -> &'static str {
        match self {
            NamedSet::All => "(all)",
            NamedSet::Short => "(short)",
            NamedSet::Candidates => "(candidates)",
            NamedSet::ThreeOrMore => "(R >= 3)",
            NamedSet::ThreeOrMoreUnfiltered => "(R >= 3 unfiltered)",
            NamedSet::ThreeOrMoreByReleaseDate => "(R >= 3 by release date)",
            NamedSet::Originals => "(R >= 3 originals)",
            NamedSet::OnExcludedAlbum => "(R >= 3 on excluded albums)",
            NamedSet::Singles => "(excluded - single recordings)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            NamedSet::All => "Every track of at least a minute, one per title.",
            NamedSet::Short => "Tracks shorter than a minute.",
            NamedSet::Candidates => "Tracks that are neither short nor excluded.",
            NamedSet::ThreeOrMore => "Songs with three or more recordings.",
            NamedSet::ThreeOrMoreUnfiltered => {
                "Songs with three or more recordings, ignoring excluded albums."
            }
            NamedSet::ThreeOrMoreByReleaseDate => {
                "Songs with three or more recordings, newest song first."
            }
            NamedSet::Originals => "The original recording of songs recorded three or more times.",
            NamedSet::OnExcludedAlbum => "Songs with three or more recordings on excluded albums.",
            NamedSet::Singles => "Songs with a single recording.",
        }
    }

    fn is_base(&self) -> bool {
        NamedSet::BASE.contains(self)
    }

    fn sorted_by_release_date(&self) -> bool {
        matches!(
            self,
            NamedSet::ThreeOrMoreByReleaseDate | NamedSet::Originals
        )
    }

    /// Membership predicate of a single track.
    pub fn contains(&self, t: &ClassifiedTrack) -> bool {
        match self {
            NamedSet::All => !t.is_short(),
            NamedSet::Short => t.is_short(),
            NamedSet::Candidates => !t.is_short() && !t.is_excluded(),
            NamedSet::ThreeOrMore => {
                t.has_three_or_more_recordings() && !t.is_excluded() && !t.on_excluded_album
            }
            NamedSet::ThreeOrMoreUnfiltered => {
                t.has_three_or_more_recordings() && !t.outcome.is_membership_excluded()
            }
            NamedSet::ThreeOrMoreByReleaseDate => {
                t.has_three_or_more_recordings() && !t.is_excluded()
            }
            NamedSet::Originals => {
                t.has_three_or_more_recordings() && t.is_original && !t.is_excluded()
            }
            NamedSet::OnExcludedAlbum => t.has_three_or_more_recordings() && t.on_excluded_album,
            NamedSet::Singles => t.has_single_recording(),
        }
    }
}

impl fmt::Display for NamedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for NamedSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        NamedSet::ALL
            .into_iter()
            .find(|set| set.key() == key)
            .ok_or_else(|| format!("unknown set '{}'", s.trim()))
    }
}

/// Track IDs of every named set, each in the order its set is published.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedSets {
    sets: BTreeMap<NamedSet, Vec<String>>,
}

impl NamedSets {
    /// Builds all sets from the catalog.
    ///
    /// The base sets (`all`, `short`, `candidates`) visit each raw title once:
    /// the first track with that title in catalog order decides where the
    /// title goes, and later tracks with the same title are skipped even when
    /// they would match. The remaining sets admit a raw title at most once,
    /// represented by its first matching track in the set's order.
    ///
    /// Sets follow the catalog's name order except the release-date sets,
    /// which list the newest song first (`release_date_for_sorting`
    /// descending, ties in name order).
    pub fn build(catalog: &Catalog) -> Self {
        let by_name: Vec<&ClassifiedTrack> = catalog.tracks().iter().collect();
        let mut by_release_date = by_name.clone();
        by_release_date.sort_by(|a, b| b.release_date_for_sorting.cmp(&a.release_date_for_sorting));

        let mut seen_titles: HashSet<&str> = HashSet::new();
        let first_per_title: Vec<&ClassifiedTrack> = by_name
            .iter()
            .copied()
            .filter(|t| seen_titles.insert(t.name()))
            .collect();

        let sets = NamedSet::ALL
            .into_iter()
            .map(|set| {
                let ids = if set.is_base() {
                    first_per_title
                        .iter()
                        .filter(|t| set.contains(t))
                        .map(|t| t.id().to_string())
                        .collect()
                } else {
                    let source = if set.sorted_by_release_date() {
                        &by_release_date
                    } else {
                        &by_name
                    };
                    let mut seen_titles: HashSet<&str> = HashSet::new();
                    source
                        .iter()
                        .filter(|t| set.contains(t) && seen_titles.insert(t.name()))
                        .map(|t| t.id().to_string())
                        .collect()
                };
                (set, ids)
            })
            .collect();

        Self { sets }
    }

    pub fn get(&self, set: NamedSet) -> &[String] {
        self.sets.get(&set).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NamedSet, &[String])> {
        self.sets.iter().map(|(set, ids)| (*set, ids.as_slice()))
    }
}
