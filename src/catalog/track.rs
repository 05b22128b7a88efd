use std::fmt;

use chrono::NaiveDate;

use super::normalize::TitleIdentity;

/// Tracks shorter than this are their own tier and never grouped.
pub const SHORT_TRACK_MS: u64 = 60_000;

/// A track of the curated discography as fetched from Spotify.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackInfo {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub album_id: String,
    pub album: String,
    pub album_release_date: NaiveDate,
    pub duration_ms: u64,
    pub popularity: u32,
}

impl TrackInfo {
    pub fn is_short(&self) -> bool {
        self.duration_ms < SHORT_TRACK_MS
    }
}

/// Why a track was excluded.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExclusionReason {
    /// Listed on a user-curated exclusion playlist.
    Playlist(String),
    /// Shorter than a minute; carries the duration in milliseconds.
    TooShort(u64),
    /// A recording of the song appears on this excluded album.
    ExcludedAlbum(String),
}

impl ExclusionReason {
    pub fn is_membership(&self) -> bool {
        matches!(self, ExclusionReason::Playlist(_))
    }
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionReason::Playlist(name) => write!(f, "Excluded by {name}"),
            ExclusionReason::TooShort(ms) => write!(f, "Too short ({}s)", ms / 1000),
            ExclusionReason::ExcludedAlbum(album) => write!(f, "Excluded album ({album})"),
        }
    }
}

/// Exclusion verdict of a track: the ordered, duplicate-free list of reasons.
///
/// Reasons can only be added, so once a track is excluded it stays excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionOutcome {
    reasons: Vec<ExclusionReason>,
}

impl ExclusionOutcome {
    /// Adds a reason. Returns false when the reason was already recorded.
    pub fn add(&mut self, reason: ExclusionReason) -> bool {
        if self.reasons.contains(&reason) {
            return false;
        }
        self.reasons.push(reason);
        true
    }

    /// Folds the reasons produced by one rule into the outcome.
    pub fn extend(mut self, reasons: impl IntoIterator<Item = ExclusionReason>) -> Self {
        for reason in reasons {
            self.add(reason);
        }
        self
    }

    pub fn is_excluded(&self) -> bool {
        !self.reasons.is_empty()
    }

    pub fn is_membership_excluded(&self) -> bool {
        self.reasons.iter().any(ExclusionReason::is_membership)
    }

    pub fn reasons(&self) -> &[ExclusionReason] {
        &self.reasons
    }

    /// Reasons joined for display, e.g. `Excluded by x, Too short (42s)`.
    pub fn joined(&self) -> String {
        self.reasons
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Recording-count tier of a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordingTier {
    /// Exactly one recording.
    Single,
    /// Two recordings: flagged by neither the single nor the multiple tier.
    Pair,
    /// Three or more recordings.
    Multiple,
}

impl RecordingTier {
    pub fn from_size(size: usize) -> Option<Self> {
        match size {
            0 => None,
            1 => Some(RecordingTier::Single),
            2 => Some(RecordingTier::Pair),
            _ => Some(RecordingTier::Multiple),
        }
    }
}

/// A track together with everything the classification derived for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedTrack {
    pub track: TrackInfo,
    pub identity: TitleIdentity,
    /// Number of recordings in the track's group; `None` for short tracks.
    pub recording_group_size: Option<usize>,
    pub release_date_for_sorting: NaiveDate,
    pub is_original: bool,
    pub on_excluded_album: bool,
    pub outcome: ExclusionOutcome,
}

impl ClassifiedTrack {
    pub fn new(track: TrackInfo, identity: TitleIdentity) -> Self {
        let release_date_for_sorting = track.album_release_date;
        Self {
            track,
            identity,
            recording_group_size: None,
            release_date_for_sorting,
            is_original: false,
            on_excluded_album: false,
            outcome: ExclusionOutcome::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.track.id
    }

    pub fn name(&self) -> &str {
        &self.track.name
    }

    pub fn short_name(&self) -> &str {
        &self.identity.short_name
    }

    pub fn is_short(&self) -> bool {
        self.track.is_short()
    }

    pub fn is_excluded(&self) -> bool {
        self.outcome.is_excluded()
    }

    pub fn tier(&self) -> Option<RecordingTier> {
        self.recording_group_size.and_then(RecordingTier::from_size)
    }

    pub fn has_single_recording(&self) -> bool {
        self.tier() == Some(RecordingTier::Single)
    }

    pub fn has_three_or_more_recordings(&self) -> bool {
        self.tier() == Some(RecordingTier::Multiple)
    }
}
