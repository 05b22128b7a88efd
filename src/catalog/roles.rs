use std::collections::{BTreeMap, HashMap};

use super::sets::NamedSet;

/// What a playlist of the user means to a curation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistRole {
    /// Its tracks are excluded from generated sets.
    ExclusionSource,
    /// The run writes this named set into it.
    OutputTarget(NamedSet),
    Ignored,
}

/// Decides from a playlist name whether it is an exclusion source.
pub trait ExclusionMatcher {
    fn is_exclusion_source(&self, playlist_name: &str) -> bool;
}

/// Default matcher: the name starts with the artist name and contains the
/// marker (`"excluded"` unless configured otherwise).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingConvention {
    pub artist_name: String,
    pub marker: String,
}

impl NamingConvention {
    pub const DEFAULT_MARKER: &'static str = "excluded";

    pub fn new(artist_name: impl Into<String>) -> Self {
        Self {
            artist_name: artist_name.into(),
            marker: Self::DEFAULT_MARKER.to_string(),
        }
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }
}

impl ExclusionMatcher for NamingConvention {
    fn is_exclusion_source(&self, playlist_name: &str) -> bool {
        !self.artist_name.is_empty()
            && playlist_name.starts_with(&self.artist_name)
            && playlist_name.contains(&self.marker)
    }
}

/// Role settings of a run, usually read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleConfig {
    /// Exclusion sources in addition to those the naming convention finds.
    pub exclusion_playlists: Vec<String>,
    /// Playlists that are never exclusion sources, whatever their name.
    pub ignored_playlists: Vec<String>,
    /// Playlist names replacing `<artist name> <suffix>` for a set.
    pub targets: Vec<(NamedSet, String)>,
    /// Marker of the naming convention, `"excluded"` when unset.
    pub marker: Option<String>,
}

/// Parses a `set=playlist name` target entry.
pub fn parse_target(entry: &str) -> Result<(NamedSet, String), String> {
    let (set, name) = entry
        .split_once('=')
        .ok_or_else(|| format!("expected set=playlist name, got '{}'", entry.trim()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("empty playlist name for '{}'", set.trim()));
    }
    Ok((set.parse()?, name.to_string()))
}

/// Maps playlist names to roles.
///
/// Resolution order: explicit overrides, then the exclusion matcher, then the
/// output target names. A generated playlist may therefore also act as an
/// exclusion source on the next run (the single-recordings playlist does with
/// the default names) unless it is ignored or renamed.
pub struct PlaylistRoles<M: ExclusionMatcher = NamingConvention> {
    artist_name: String,
    matcher: M,
    overrides: HashMap<String, PlaylistRole>,
    targets: BTreeMap<NamedSet, String>,
}

impl PlaylistRoles<NamingConvention> {
    pub fn for_artist(artist_name: impl Into<String>) -> Self {
        let artist_name = artist_name.into();
        PlaylistRoles::with_matcher(artist_name.clone(), NamingConvention::new(artist_name))
    }

    /// Roles of the naming convention adjusted by `config`.
    ///
    /// Listed exclusion playlists are added to what the convention finds.
    /// Ignored playlists win over both.
    pub fn configured(artist_name: impl Into<String>, config: &RoleConfig) -> Self {
        let artist_name = artist_name.into();
        let mut convention = NamingConvention::new(artist_name.clone());
        if let Some(marker) = &config.marker {
            convention = convention.with_marker(marker.as_str());
        }

        let mut roles = PlaylistRoles::with_matcher(artist_name, convention);
        for (set, name) in &config.targets {
            roles.set_target(*set, name.as_str());
        }
        for name in &config.exclusion_playlists {
            roles.set_role(name.as_str(), PlaylistRole::ExclusionSource);
        }
        for name in &config.ignored_playlists {
            roles.set_role(name.as_str(), PlaylistRole::Ignored);
        }
        roles
    }
}

impl<M: ExclusionMatcher> PlaylistRoles<M> {
    pub fn with_matcher(artist_name: impl Into<String>, matcher: M) -> Self {
        Self {
            artist_name: artist_name.into(),
            matcher,
            overrides: HashMap::new(),
            targets: BTreeMap::new(),
        }
    }

    /// Pins the role of a playlist, bypassing the matcher.
    pub fn set_role(&mut self, playlist_name: impl Into<String>, role: PlaylistRole) -> &mut Self {
        self.overrides.insert(playlist_name.into(), role);
        self
    }

    /// Publishes `set` into `playlist_name` instead of the default name.
    pub fn set_target(&mut self, set: NamedSet, playlist_name: impl Into<String>) -> &mut Self {
        self.targets.insert(set, playlist_name.into());
        self
    }

    /// Name of the playlist receiving `set`: an explicit target, or
    /// `<artist name> <suffix>`.
    pub fn target_name(&self, set: NamedSet) -> String {
        self.targets
            .get(&set)
            .cloned()
            .unwrap_or_else(|| format!("{} {}", self.artist_name, set.playlist_suffix()))
    }

    pub fn role_of(&self, playlist_name: &str) -> PlaylistRole {
        if let Some(role) = self.overrides.get(playlist_name) {
            return *role;
        }
        if self.matcher.is_exclusion_source(playlist_name) {
            return PlaylistRole::ExclusionSource;
        }
        NamedSet::ALL
            .into_iter()
            .find(|set| self.target_name(*set) == playlist_name)
            .map(PlaylistRole::OutputTarget)
            .unwrap_or(PlaylistRole::Ignored)
    }

    pub fn is_exclusion_source(&self, playlist_name: &str) -> bool {
        self.role_of(playlist_name) == PlaylistRole::ExclusionSource
    }
}
