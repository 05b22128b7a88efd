use sporcat::catalog::{
    ExclusionMatcher, NamedSet, NamingConvention, PlaylistRole, PlaylistRoles, RoleConfig,
    parse_target,
};

// Matcher treating every playlist listed by name as an exclusion source
struct Listed(Vec<&'static str>);

impl ExclusionMatcher for Listed {
    fn is_exclusion_source(&self, playlist_name: &str) -> bool {
        self.0.iter().any(|name| *name == playlist_name)
    }
}

#[test]
fn test_naming_convention() {
    let convention = NamingConvention::new("The Beatles");

    assert!(convention.is_exclusion_source("The Beatles excluded"));
    assert!(convention.is_exclusion_source("The Beatles - excluded live takes"));
    assert!(!convention.is_exclusion_source("the beatles excluded"));
    assert!(!convention.is_exclusion_source("Excluded The Beatles"));
    assert!(!convention.is_exclusion_source("The Beatles (R >= 3)"));

    let custom = NamingConvention::new("The Beatles").with_marker("skip");
    assert!(custom.is_exclusion_source("The Beatles skip"));
    assert!(!custom.is_exclusion_source("The Beatles excluded"));

    assert!(!NamingConvention::new("").is_exclusion_source("excluded"));
}

#[test]
fn test_default_target_names() {
    let roles = PlaylistRoles::for_artist("The Beatles");

    assert_eq!(roles.target_name(NamedSet::ThreeOrMore), "The Beatles (R >= 3)");
    assert_eq!(roles.target_name(NamedSet::All), "The Beatles (all)");
    assert_eq!(
        roles.role_of("The Beatles (R >= 3 originals)"),
        PlaylistRole::OutputTarget(NamedSet::Originals)
    );
    assert_eq!(roles.role_of("Road trip"), PlaylistRole::Ignored);
}

#[test]
fn test_role_precedence() {
    let mut roles = PlaylistRoles::for_artist("The Beatles");

    // The single recordings playlist matches the exclusion convention
    assert_eq!(
        roles.role_of("The Beatles (excluded - single recordings)"),
        PlaylistRole::ExclusionSource
    );

    roles.set_role(
        "The Beatles (excluded - single recordings)",
        PlaylistRole::OutputTarget(NamedSet::Singles),
    );
    roles.set_role("Road trip", PlaylistRole::ExclusionSource);

    assert_eq!(
        roles.role_of("The Beatles (excluded - single recordings)"),
        PlaylistRole::OutputTarget(NamedSet::Singles)
    );
    assert!(roles.is_exclusion_source("Road trip"));
}

#[test]
fn test_explicit_target() {
    let mut roles = PlaylistRoles::for_artist("The Beatles");
    roles.set_target(NamedSet::Originals, "Fab Four originals");

    assert_eq!(roles.target_name(NamedSet::Originals), "Fab Four originals");
    assert_eq!(
        roles.role_of("Fab Four originals"),
        PlaylistRole::OutputTarget(NamedSet::Originals)
    );
    assert_eq!(roles.role_of("The Beatles (R >= 3 originals)"), PlaylistRole::Ignored);
}

#[test]
fn test_injected_matcher() {
    let roles = PlaylistRoles::with_matcher("The Beatles", Listed(vec!["Not these"]));

    assert!(roles.is_exclusion_source("Not these"));
    assert!(!roles.is_exclusion_source("The Beatles excluded"));
    assert_eq!(
        roles.role_of("The Beatles (R >= 3)"),
        PlaylistRole::OutputTarget(NamedSet::ThreeOrMore)
    );
}

#[test]
fn test_configured_roles() {
    let config = RoleConfig {
        exclusion_playlists: vec!["Road trip".to_string()],
        ignored_playlists: vec!["The Beatles (excluded - single recordings)".to_string()],
        targets: vec![(NamedSet::Originals, "Fab Four originals".to_string())],
        marker: None,
    };
    let roles = PlaylistRoles::configured("The Beatles", &config);

    // Listed playlists add to the naming convention
    assert!(roles.is_exclusion_source("Road trip"));
    assert!(roles.is_exclusion_source("The Beatles excluded"));
    // The single recordings playlist no longer feeds back
    assert!(!roles.is_exclusion_source("The Beatles (excluded - single recordings)"));
    assert_eq!(roles.target_name(NamedSet::Originals), "Fab Four originals");
    assert_eq!(
        roles.role_of("Fab Four originals"),
        PlaylistRole::OutputTarget(NamedSet::Originals)
    );
}

#[test]
fn test_configured_marker() {
    let config = RoleConfig {
        marker: Some("skip".to_string()),
        ..RoleConfig::default()
    };
    let roles = PlaylistRoles::configured("The Beatles", &config);

    assert!(roles.is_exclusion_source("The Beatles skip"));
    assert!(!roles.is_exclusion_source("The Beatles excluded"));
    assert!(!roles.is_exclusion_source("The Beatles (excluded - single recordings)"));
}

#[test]
fn test_parse_target() {
    assert_eq!(
        parse_target("originals=Fab Four originals").unwrap(),
        (NamedSet::Originals, "Fab Four originals".to_string())
    );
    assert_eq!(
        parse_target(" 3-or-more = R3 ").unwrap(),
        (NamedSet::ThreeOrMore, "R3".to_string())
    );
    assert!(parse_target("originals").is_err());
    assert!(parse_target("originals=").is_err());
    assert!(parse_target("favourites=Mine").is_err());
}
