use std::path::{Path, PathBuf};

use tabled::{Table, settings::Style};

use crate::{
    Res,
    catalog::{Catalog, ClassifiedTrack},
    types::TrackTableRow,
    utils,
};

pub const TRACKS_REPORT: &str = "tracks.org";
pub const WORKING_REPORT: &str = "working.org";
pub const AUDIT_REPORT: &str = "audit.org";

pub fn track_row(t: &ClassifiedTrack) -> TrackTableRow {
    TrackTableRow {
        name: t.name().to_string(),
        version: t.identity.version(),
        album: t.track.album.clone(),
        album_date: t.track.album_release_date.to_string(),
        song_date: t.release_date_for_sorting.to_string(),
        recordings: match t.recording_group_size {
            Some(size) => size.to_string(),
            None => "short".to_string(),
        },
        popularity: t.track.popularity,
        duration: utils::format_duration(t.track.duration_ms),
        original: if t.is_original { "yes" } else { "" }.to_string(),
        excluded: t.outcome.joined(),
    }
}

/// Renders tracks as an org/markdown pipe table.
pub fn render_tracks<'a>(tracks: impl IntoIterator<Item = &'a ClassifiedTrack>) -> String {
    let rows: Vec<TrackTableRow> = tracks.into_iter().map(track_row).collect();
    let mut table = Table::new(rows);
    table.with(Style::markdown());
    format!("{table}\n")
}

/// Writes `tracks.org`, `working.org` and `audit.org` into `dir`, replacing
/// previous versions. Returns the written paths.
pub async fn write_reports(catalog: &Catalog, dir: &Path) -> Res<Vec<PathBuf>> {
    async_fs::create_dir_all(dir).await?;

    let tracks_path = dir.join(TRACKS_REPORT);
    async_fs::write(&tracks_path, render_tracks(catalog.tracks())).await?;

    let working_path = dir.join(WORKING_REPORT);
    async_fs::write(&working_path, render_tracks(catalog.by_popularity())).await?;

    let audit_path = dir.join(AUDIT_REPORT);
    catalog.audit().write(&audit_path).await?;

    Ok(vec![tracks_path, working_path, audit_path])
}
