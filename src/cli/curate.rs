use indicatif::ProgressBar;
use tabled::{Table, settings::Style};

use crate::{
    Res,
    catalog::{
        Catalog, Classifier, ExclusionInputs, NamedSet, NamedSets, OriginalPolicy,
        PlaylistBatch, PlaylistPlan, PlaylistRoles, TrackInfo,
    },
    config, info,
    management::{CatalogSource, ResponseCache},
    spotify::{SpotifyClient, playlist::find_by_name},
    success,
    types::{Playlist, SetSummaryRow},
    verbose, warning,
};

use super::{report, spinner};

/// Options of one `curate` run.
#[derive(Debug, Clone)]
pub struct CurateSettings {
    pub user: Option<String>,
    pub artist_id: Option<String>,
    pub artist_name: Option<String>,
    /// Classify and write reports, but do not touch playlists.
    pub dry: bool,
    /// Look up playlists and log the plans, but do not create or change any.
    pub read_only: bool,
    pub rebuild_multiple: bool,
    pub rebuild_singles: bool,
    pub rebuild_base: bool,
    pub refresh_playlists: bool,
    pub policy: OriginalPolicy,
}

impl Default for CurateSettings {
    fn default() -> Self {
        Self {
            user: None,
            artist_id: None,
            artist_name: None,
            dry: false,
            read_only: false,
            rebuild_multiple: true,
            rebuild_singles: false,
            rebuild_base: false,
            refresh_playlists: false,
            policy: OriginalPolicy::default(),
        }
    }
}

impl CurateSettings {
    /// Named sets published by this run, in publishing order.
    pub fn enabled_sets(&self) -> Vec<NamedSet> {
        let mut sets = Vec::new();
        if self.rebuild_base {
            sets.extend(NamedSet::BASE);
        }
        if self.rebuild_multiple {
            sets.extend(NamedSet::MULTIPLE);
        }
        if self.rebuild_singles {
            sets.push(NamedSet::Singles);
        }
        sets
    }
}

/// Everything the classification needs, loaded through the cache.
struct RunInputs {
    artist_name: String,
    tracks: Vec<TrackInfo>,
    exclusions: ExclusionInputs,
    playlists: Vec<Playlist>,
    roles: PlaylistRoles,
}

/// Curates the artist's catalog: loads the discography and exclusion inputs,
/// classifies every track, writes the reports and publishes the enabled
/// named sets as playlists.
///
/// # Errors
///
/// Any failed remote fetch, corrupt cache entry or unwritable report aborts
/// the run.
pub async fn curate(settings: CurateSettings) -> Res<()> {
    let user = match &settings.user {
        Some(user) => user.clone(),
        None => config::spotify_user()?,
    };
    let artist_id = match &settings.artist_id {
        Some(id) => config::clean_spotify_id(id),
        None => config::artist_id()?,
    };

    let client = SpotifyClient::connect().await?;
    let cache = ResponseCache::new(config::cache_dir());
    let mut source = CatalogSource::new(client, cache, user);

    let pb = spinner("Loading catalog...");
    let inputs = load_inputs(&mut source, &artist_id, &settings, &pb).await;
    pb.finish_and_clear();
    let inputs = inputs?;

    success!(
        "Loaded {} tracks of {} ({} excluded by playlists, {} on excluded albums)",
        inputs.tracks.len(),
        inputs.artist_name,
        inputs.exclusions.excluded_track_count(),
        inputs.exclusions.excluded_album_tracks.len()
    );

    let catalog = Classifier::default()
        .with_policy(settings.policy)
        .classify(inputs.tracks, &inputs.exclusions);
    let sets = NamedSets::build(&catalog);
    log_classification(&catalog);

    let out_dir = config::output_dir();
    for path in report::write_reports(&catalog, &out_dir).await? {
        verbose!("Wrote {}", path.display());
    }
    success!("Reports written to {}", out_dir.display());

    if settings.dry {
        info!("Dry run, playlists left untouched.");
        print_summary(&settings.enabled_sets(), &sets, &inputs.roles);
        return Ok(());
    }

    let mut playlists = inputs.playlists;
    for set in settings.enabled_sets() {
        publish_set(
            &mut source,
            &mut playlists,
            &inputs.roles,
            set,
            sets.get(set),
            settings.read_only,
        )
        .await?;
    }

    print_summary(&settings.enabled_sets(), &sets, &inputs.roles);
    Ok(())
}

async fn load_inputs(
    source: &mut CatalogSource,
    artist_id: &str,
    settings: &CurateSettings,
    pb: &ProgressBar,
) -> Res<RunInputs> {
    pb.set_message("Loading artist...");
    let artist = source.artist(artist_id).await?;
    let artist_name = match &settings.artist_name {
        Some(name) => name.clone(),
        None => config::artist_name().unwrap_or_else(|_| artist.name.clone()),
    };

    let albums = source.artist_albums(&artist.id).await?;
    let mut tracks = Vec::new();
    for (n, album) in albums.iter().enumerate() {
        pb.set_message(format!(
            "Loading album {}/{}: {}",
            n + 1,
            albums.len(),
            album.name
        ));
        tracks.extend(source.album_track_infos(album).await?);
    }

    let mut exclusions = ExclusionInputs::default();
    for album_id in config::excluded_album_ids() {
        pb.set_message(format!("Loading excluded album {album_id}..."));
        let album = source.album(&album_id).await?;
        let album_tracks = source.album_tracks(&album.id).await?;
        exclusions.add_excluded_album(&album.name, album_tracks.into_iter().map(|t| t.id));
    }

    pb.set_message("Loading playlists...");
    let playlists = source.playlists(settings.refresh_playlists).await?;
    let roles = PlaylistRoles::configured(artist_name.clone(), &config::role_config()?);

    pb.set_message("Loading exclusion playlists...");
    exclusions
        .playlists
        .extend(source.exclusion_playlists(&playlists, &roles).await?);

    Ok(RunInputs {
        artist_name,
        tracks,
        exclusions,
        playlists,
        roles,
    })
}

fn log_classification(catalog: &Catalog) {
    let tracks = catalog.tracks();
    let short = tracks.iter().filter(|t| t.is_short()).count();
    let excluded = tracks.iter().filter(|t| t.is_excluded()).count();
    let originals = tracks.iter().filter(|t| t.is_original).count();
    info!(
        "Classified {} tracks into {} songs: {} short, {} excluded, {} originals, {} audit entries",
        tracks.len(),
        catalog.groups().len(),
        short,
        excluded,
        originals,
        catalog.audit().len()
    );
}

async fn publish_set(
    source: &mut CatalogSource,
    playlists: &mut Vec<Playlist>,
    roles: &PlaylistRoles,
    set: NamedSet,
    desired: &[String],
    read_only: bool,
) -> Res<()> {
    let name = roles.target_name(set);

    let existing = find_by_name(playlists, &name).cloned();
    let playlist = match existing {
        Some(existing) => existing,
        None if read_only => {
            info!(
                "Would create playlist {} with {} tracks",
                name,
                desired.len()
            );
            return Ok(());
        }
        None => {
            let created = source.create_playlist(&name, set.description()).await?;
            success!("Created playlist {}", created.name);
            playlists.push(created.clone());
            created
        }
    };

    let current = source.live_playlist_track_ids(&playlist.id).await?;
    let plan = PlaylistPlan::new(&current, desired);

    if plan.is_noop() {
        info!("{} is up to date ({} tracks)", name, desired.len());
        return Ok(());
    }

    info!(
        "{}: {} to add, {} to remove, {} calls",
        name,
        plan.additions.len(),
        plan.removals.len(),
        plan.batches.len()
    );
    if read_only {
        return Ok(());
    }

    for batch in &plan.batches {
        if let PlaylistBatch::Append(ids) = batch {
            verbose!("Appending {} tracks to {}", ids.len(), name);
        }
        source.client_mut().apply_batch(&playlist.id, batch).await?;
    }
    if roles.is_exclusion_source(&name) {
        warning!(
            "{} is also an exclusion playlist; its tracks will be excluded on the next run",
            name
        );
    }
    success!("Updated {}", name);
    Ok(())
}

fn print_summary(enabled: &[NamedSet], sets: &NamedSets, roles: &PlaylistRoles) {
    let rows: Vec<SetSummaryRow> = NamedSet::ALL
        .into_iter()
        .map(|set| SetSummaryRow {
            set: set.key().to_string(),
            playlist: if enabled.contains(&set) {
                roles.target_name(set)
            } else {
                String::new()
            },
            tracks: sets.get(set).len(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::modern());
    println!("{table}");
}
