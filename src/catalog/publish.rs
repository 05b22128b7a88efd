use std::collections::HashSet;

/// Maximum number of items Spotify accepts per playlist mutation call.
pub const PLAYLIST_CHUNK: usize = 100;

/// One playlist mutation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistBatch {
    /// Replace the whole playlist with these tracks.
    Replace(Vec<String>),
    /// Append these tracks.
    Append(Vec<String>),
}

/// Calls needed to make a playlist hold exactly `desired`, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistPlan {
    pub additions: Vec<String>,
    pub removals: Vec<String>,
    pub batches: Vec<PlaylistBatch>,
}

impl PlaylistPlan {
    /// Plans the reconciliation of `current` contents to `desired`.
    ///
    /// Identical lists need no call. Otherwise the first chunk replaces the
    /// playlist and the remaining chunks are appended; an empty `desired`
    /// becomes a single replace that clears the playlist.
    pub fn new(current: &[String], desired: &[String]) -> Self {
        let current_ids: HashSet<&String> = current.iter().collect();
        let desired_ids: HashSet<&String> = desired.iter().collect();

        let mut seen = HashSet::new();
        let additions = desired
            .iter()
            .filter(|id| !current_ids.contains(id) && seen.insert(*id))
            .cloned()
            .collect();
        let mut seen = HashSet::new();
        let removals = current
            .iter()
            .filter(|id| !desired_ids.contains(id) && seen.insert(*id))
            .cloned()
            .collect();

        let batches = if current == desired {
            Vec::new()
        } else if desired.is_empty() {
            vec![PlaylistBatch::Replace(Vec::new())]
        } else {
            desired
                .chunks(PLAYLIST_CHUNK)
                .enumerate()
                .map(|(i, chunk)| {
                    if i == 0 {
                        PlaylistBatch::Replace(chunk.to_vec())
                    } else {
                        PlaylistBatch::Append(chunk.to_vec())
                    }
                })
                .collect()
        };

        Self {
            additions,
            removals,
            batches,
        }
    }

    pub fn is_noop(&self) -> bool {
        self.batches.is_empty()
    }
}
