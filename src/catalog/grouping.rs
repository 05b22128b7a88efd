use std::collections::HashMap;

use super::track::ClassifiedTrack;

/// All tracks sharing a short name: one logical song.
///
/// Members are indices into the track list the groups were built from, in the
/// order they were encountered. Every member counts as a recording, including
/// tracks whose raw title repeats on another album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingGroup {
    pub short_name: String,
    pub members: Vec<usize>,
}

impl RecordingGroup {
    fn new(short_name: &str) -> Self {
        Self {
            short_name: short_name.to_string(),
            members: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// Index from short name to recording group, built once per run.
///
/// Groups keep the order in which their short name was first encountered.
#[derive(Debug, Clone, Default)]
pub struct RecordingGroups {
    groups: Vec<RecordingGroup>,
    index: HashMap<String, usize>,
}

impl RecordingGroups {
    /// Groups every track that is not short by its short name.
    ///
    /// Short tracks are a separate tier and never join a group, so every other
    /// track ends up in exactly one group.
    pub fn build(tracks: &[ClassifiedTrack]) -> Self {
        let mut groups = RecordingGroups::default();

        for (idx, track) in tracks.iter().enumerate() {
            if track.is_short() {
                continue;
            }
            groups.entry(track.short_name()).members.push(idx);
        }

        groups
    }

    fn entry(&mut self, short_name: &str) -> &mut RecordingGroup {
        let pos = match self.index.get(short_name).copied() {
            Some(pos) => pos,
            None => {
                self.groups.push(RecordingGroup::new(short_name));
                let pos = self.groups.len() - 1;
                self.index.insert(short_name.to_string(), pos);
                pos
            }
        };
        &mut self.groups[pos]
    }

    pub fn get(&self, short_name: &str) -> Option<&RecordingGroup> {
        self.index.get(short_name).map(|pos| &self.groups[*pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordingGroup> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
