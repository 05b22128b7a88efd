//! # Catalog Module
//!
//! Track identity and classification: everything that decides which tracks
//! are recordings of the same song, which recording is the original, which
//! tracks are excluded and which playlist each track ends up in.
//!
//! ## Pipeline
//!
//! ```text
//! TrackInfo list
//!     ↓ normalize   (title → short name)
//!     ↓ classify    (membership + duration rules, recording groups,
//!     ↓              originals, excluded-album propagation)
//! Catalog + AuditLog
//!     ↓ sets        (named track ID lists)
//!     ↓ publish     (per-playlist reconciliation plan)
//! ```
//!
//! Everything in here is pure and synchronous; fetching and publishing live in
//! [`crate::spotify`] and [`crate::cli`].

mod audit;
mod classify;
mod grouping;
mod normalize;
mod publish;
mod roles;
mod sets;
mod track;

pub use audit::{AuditEntry, AuditLog};
pub use classify::{
    Catalog, Classifier, ExclusionInputs, ExclusionPlaylist, OriginalPolicy, duration_rule,
    excluded_album_rule, membership_rule, originals,
};
pub use grouping::{RecordingGroup, RecordingGroups};
pub use normalize::{DEFAULT_REPLACEMENTS, Normalizer, TITLE_DELIMITER, TitleIdentity};
pub use publish::{PLAYLIST_CHUNK, PlaylistBatch, PlaylistPlan};
pub use roles::{
    ExclusionMatcher, NamingConvention, PlaylistRole, PlaylistRoles, RoleConfig, parse_target,
};
pub use sets::{NamedSet, NamedSets};
pub use track::{
    ClassifiedTrack, ExclusionOutcome, ExclusionReason, RecordingTier, SHORT_TRACK_MS, TrackInfo,
};
