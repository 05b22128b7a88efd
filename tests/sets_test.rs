use chrono::NaiveDate;
use sporcat::catalog::{
    Catalog, Classifier, ExclusionInputs, ExclusionPlaylist, NamedSet, NamedSets, TrackInfo,
};
use sporcat::cli::CurateSettings;

// Helper function to create a test track
fn track(id: &str, name: &str, album: &str, release_date: &str, duration_ms: u64) -> TrackInfo {
    TrackInfo {
        id: id.to_string(),
        name: name.to_string(),
        uri: format!("spotify:track:{id}"),
        album_id: format!("{album}_id"),
        album: album.to_string(),
        album_release_date: NaiveDate::parse_from_str(release_date, "%Y-%m-%d").unwrap(),
        duration_ms,
        popularity: 50,
    }
}

fn classified() -> Catalog {
    let tracks = vec![
        track("help65", "Help!", "Help!", "1965-08-06", 138_000),
        track("help70", "Help!", "Let It Be Naked", "1970-05-08", 140_000),
        track("help62", "Help!", "Early Takes", "1962-01-01", 139_000),
        track("her1", "Her Majesty", "Abbey Road", "1969-09-26", 25_000),
        track("lib1", "Let It Be - Remastered 2009", "Let It Be", "1970-05-08", 243_000),
        track("lib2", "Let It Be - Live", "Live at the BBC", "1994-11-30", 250_000),
        track("lib3", "Let It Be", "Anthology 3", "1996-10-28", 240_000),
        track("some1", "Something", "Abbey Road", "1969-09-26", 182_000),
        track("some2", "Something - Demo", "Anthology 3", "1996-10-28", 170_000),
        track("taxman", "Taxman", "Revolver", "1966-08-05", 159_000),
        track("yest1", "Yesterday", "Help!", "1965-08-06", 125_000),
        track("yest2", "Yesterday - Live", "Live", "1966-06-30", 130_000),
        track("yest3", "Yesterday - Take 2", "Anthology 2", "1996-03-18", 128_000),
    ];

    let mut inputs = ExclusionInputs::default();
    inputs
        .playlists
        .push(ExclusionPlaylist::new("Beatles excluded", ["taxman", "lib2"]));
    inputs.add_excluded_album("Anthology 3", ["lib3"]);

    Classifier::default().classify(tracks, &inputs)
}

fn ids(sets: &NamedSets, set: NamedSet) -> Vec<&str> {
    sets.get(set).iter().map(String::as_str).collect()
}

#[test]
fn test_all_and_short() {
    let sets = NamedSets::build(&classified());

    assert_eq!(
        ids(&sets, NamedSet::All),
        vec!["help65", "lib3", "lib2", "lib1", "some1", "some2", "taxman", "yest1", "yest2", "yest3"]
    );
    assert_eq!(ids(&sets, NamedSet::Short), vec!["her1"]);
}

#[test]
fn test_candidates_skip_excluded_and_short() {
    let sets = NamedSets::build(&classified());
    assert_eq!(
        ids(&sets, NamedSet::Candidates),
        vec!["help65", "some1", "some2", "yest1", "yest2", "yest3"]
    );
}

#[test]
fn test_three_or_more_sets() {
    let sets = NamedSets::build(&classified());

    assert_eq!(
        ids(&sets, NamedSet::ThreeOrMore),
        vec!["help65", "yest1", "yest2", "yest3"]
    );
    // Tolerates the excluded album, not the exclusion playlist
    assert_eq!(
        ids(&sets, NamedSet::ThreeOrMoreUnfiltered),
        vec!["help65", "lib3", "lib1", "yest1", "yest2", "yest3"]
    );
    assert_eq!(
        ids(&sets, NamedSet::OnExcludedAlbum),
        vec!["lib3", "lib2", "lib1"]
    );
}

#[test]
fn test_release_date_sets_newest_song_first() {
    let sets = NamedSets::build(&classified());

    assert_eq!(
        ids(&sets, NamedSet::ThreeOrMoreByReleaseDate),
        vec!["yest1", "yest2", "yest3", "help65"]
    );
    assert_eq!(ids(&sets, NamedSet::Originals), vec!["yest1", "help62"]);
}

#[test]
fn test_repeated_title_listed_once() {
    let sets = NamedSets::build(&classified());

    for (set, list) in sets.iter() {
        let help = list.iter().filter(|id| id.starts_with("help")).count();
        assert!(help <= 1, "{set} lists Help! {help} times");
    }
}

#[test]
fn test_base_sets_decide_by_first_track_of_a_title() {
    let tracks = vec![
        track("intro_short", "Intro", "Demos", "1963-01-01", 30_000),
        track("intro_long", "Intro", "Sessions", "1964-01-01", 200_000),
        track("taxman_excl", "Taxman", "Revolver", "1966-08-05", 159_000),
        track("taxman_ok", "Taxman", "Anthology 2", "1996-03-18", 161_000),
    ];
    let mut inputs = ExclusionInputs::default();
    inputs
        .playlists
        .push(ExclusionPlaylist::new("Beatles excluded", ["taxman_excl"]));
    let sets = NamedSets::build(&Classifier::default().classify(tracks, &inputs));

    // A title that starts out short stays out of the full list
    assert_eq!(ids(&sets, NamedSet::Short), vec!["intro_short"]);
    assert_eq!(ids(&sets, NamedSet::All), vec!["taxman_excl"]);
    // An excluded track is not replaced by another track with its title
    assert!(ids(&sets, NamedSet::Candidates).is_empty());
}

#[test]
fn test_singles_and_pairs() {
    let sets = NamedSets::build(&classified());

    assert_eq!(ids(&sets, NamedSet::Singles), vec!["taxman"]);
    let multiple = ids(&sets, NamedSet::ThreeOrMoreUnfiltered);
    assert!(!multiple.contains(&"some1"));
    assert!(!multiple.contains(&"some2"));
}

#[test]
fn test_sets_are_reproducible() {
    let first = NamedSets::build(&classified());
    let second = NamedSets::build(&classified());
    assert_eq!(first, second);
}

#[test]
fn test_named_set_metadata() {
    assert_eq!(NamedSet::ThreeOrMore.playlist_suffix(), "(R >= 3)");
    assert_eq!(
        NamedSet::Singles.playlist_suffix(),
        "(excluded - single recordings)"
    );
    assert_eq!(NamedSet::Originals.to_string(), "originals");

    let keys: std::collections::HashSet<&str> = NamedSet::ALL.iter().map(|s| s.key()).collect();
    assert_eq!(keys.len(), NamedSet::ALL.len());
    assert!(NamedSet::ALL.iter().all(|s| !s.description().is_empty()));
}

#[test]
fn test_enabled_sets_follow_rebuild_switches() {
    let defaults = CurateSettings::default();
    assert_eq!(defaults.enabled_sets(), NamedSet::MULTIPLE.to_vec());

    let everything = CurateSettings {
        rebuild_singles: true,
        rebuild_base: true,
        ..CurateSettings::default()
    };
    assert_eq!(everything.enabled_sets().len(), NamedSet::ALL.len());

    let nothing = CurateSettings {
        rebuild_multiple: false,
        ..CurateSettings::default()
    };
    assert!(nothing.enabled_sets().is_empty());
}
