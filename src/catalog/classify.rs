use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use super::{
    audit::AuditLog,
    grouping::{RecordingGroup, RecordingGroups},
    normalize::Normalizer,
    track::{ClassifiedTrack, ExclusionOutcome, ExclusionReason, TrackInfo},
};

/// A user-curated playlist whose tracks are removed from generated sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionPlaylist {
    pub name: String,
    pub track_ids: HashSet<String>,
}

impl ExclusionPlaylist {
    pub fn new<I, S>(name: impl Into<String>, track_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            track_ids: track_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Exclusion data consulted by the classification.
#[derive(Debug, Clone, Default)]
pub struct ExclusionInputs {
    /// Exclusion playlists in discovery order.
    pub playlists: Vec<ExclusionPlaylist>,
    /// Track ID to the name of the excluded album it appears on.
    pub excluded_album_tracks: HashMap<String, String>,
}

impl ExclusionInputs {
    pub fn add_excluded_album<I, S>(&mut self, album_name: &str, track_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in track_ids {
            self.excluded_album_tracks
                .entry(id.into())
                .or_insert_with(|| album_name.to_string());
        }
    }

    pub fn excluded_track_count(&self) -> usize {
        self.playlists
            .iter()
            .flat_map(|p| p.track_ids.iter())
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Which recordings count as original when several share the earliest date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OriginalPolicy {
    /// Exactly one: the first tied recording in group order (name order).
    #[default]
    FirstEncountered,
    /// Every recording released on the earliest date.
    AllTied,
}

/// Membership rule: one reason per exclusion playlist listing the track.
pub fn membership_rule(track: &TrackInfo, inputs: &ExclusionInputs) -> Vec<ExclusionReason> {
    inputs
        .playlists
        .iter()
        .filter(|p| p.track_ids.contains(&track.id))
        .map(|p| ExclusionReason::Playlist(p.name.clone()))
        .collect()
}

/// Duration rule: tracks under a minute are too short.
pub fn duration_rule(track: &TrackInfo) -> Option<ExclusionReason> {
    track
        .is_short()
        .then_some(ExclusionReason::TooShort(track.duration_ms))
}

/// Excluded-album rule: the excluded albums any member of the group is on,
/// in member order.
pub fn excluded_album_rule(
    group: &RecordingGroup,
    tracks: &[ClassifiedTrack],
    inputs: &ExclusionInputs,
) -> Vec<ExclusionReason> {
    let mut reasons: Vec<ExclusionReason> = Vec::new();
    for &idx in &group.members {
        if let Some(album) = inputs.excluded_album_tracks.get(tracks[idx].id()) {
            let reason = ExclusionReason::ExcludedAlbum(album.clone());
            if !reasons.contains(&reason) {
                reasons.push(reason);
            }
        }
    }
    reasons
}

/// Earliest release date among the group's members and the members marked
/// original under `policy`. `None` for an empty group.
pub fn originals(
    group: &RecordingGroup,
    tracks: &[ClassifiedTrack],
    policy: OriginalPolicy,
) -> Option<(NaiveDate, Vec<usize>)> {
    let earliest = group
        .members
        .iter()
        .map(|idx| tracks[*idx].track.album_release_date)
        .min()?;

    let mut tied = group
        .members
        .iter()
        .copied()
        .filter(|idx| tracks[*idx].track.album_release_date == earliest);

    let marked = match policy {
        OriginalPolicy::FirstEncountered => tied.next().into_iter().collect(),
        OriginalPolicy::AllTied => tied.collect(),
    };
    Some((earliest, marked))
}

/// Classification result of one run: the tracks in name order, their
/// recording groups and the audit trail of every decision.
#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Vec<ClassifiedTrack>,
    groups: RecordingGroups,
    audit: AuditLog,
}

impl Catalog {
    pub fn tracks(&self) -> &[ClassifiedTrack] {
        &self.tracks
    }

    pub fn groups(&self) -> &RecordingGroups {
        &self.groups
    }

    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    /// Tracks ordered by popularity, most popular first; ties keep name order.
    pub fn by_popularity(&self) -> Vec<&ClassifiedTrack> {
        let mut tracks: Vec<&ClassifiedTrack> = self.tracks.iter().collect();
        tracks.sort_by(|a, b| b.track.popularity.cmp(&a.track.popularity));
        tracks
    }
}

/// Decides which tracks are the same song, which recording is the original
/// and which tracks are excluded, and why.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    normalizer: Normalizer,
    policy: OriginalPolicy,
}

impl Classifier {
    pub fn new(normalizer: Normalizer) -> Self {
        Self {
            normalizer,
            policy: OriginalPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: OriginalPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn classify(&self, mut tracks: Vec<TrackInfo>, inputs: &ExclusionInputs) -> Catalog {
        tracks.sort_by(|a, b| a.name.cmp(&b.name));

        let mut audit = AuditLog::new();
        let mut classified: Vec<ClassifiedTrack> = Vec::with_capacity(tracks.len());

        for track in tracks {
            let identity = self.normalizer.normalize(&track.name);

            let reasons = membership_rule(&track, inputs)
                .into_iter()
                .chain(duration_rule(&track));
            let mut outcome = ExclusionOutcome::default();
            for reason in reasons {
                let text = reason.to_string();
                if outcome.add(reason) {
                    audit.append(track.name.as_str(), text);
                }
            }

            let mut ct = ClassifiedTrack::new(track, identity);
            ct.outcome = outcome;
            classified.push(ct);
        }

        let groups = RecordingGroups::build(&classified);

        for group in groups.iter() {
            let size = group.size();
            let Some((earliest, marked)) = originals(group, &classified, self.policy) else {
                continue;
            };

            for &idx in &group.members {
                let ct = &mut classified[idx];
                ct.recording_group_size = Some(size);
                ct.release_date_for_sorting = earliest;
            }

            for idx in marked {
                let ct = &mut classified[idx];
                ct.is_original = true;
                audit.append(
                    ct.track.name.as_str(),
                    format!("Marked as original ({})", ct.track.album),
                );
            }

            let album_reasons = excluded_album_rule(group, &classified, inputs);
            if album_reasons.is_empty() {
                continue;
            }
            for &idx in &group.members {
                let ct = &mut classified[idx];
                ct.on_excluded_album = true;
                for reason in &album_reasons {
                    if ct.outcome.add(reason.clone()) {
                        audit.append(ct.track.name.as_str(), reason.to_string());
                    }
                }
            }
        }

        Catalog {
            tracks: classified,
            groups,
            audit,
        }
    }
}
