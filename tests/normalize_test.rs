use sporcat::catalog::{DEFAULT_REPLACEMENTS, Normalizer, TITLE_DELIMITER};

#[test]
fn test_variants_share_short_name() {
    let normalizer = Normalizer::default();

    let remaster = normalizer.normalize("Let It Be - Remastered 2009");
    let live = normalizer.normalize("Let It Be - Live");
    let plain = normalizer.normalize("Let It Be");

    assert_eq!(remaster.short_name, "Let It Be");
    assert_eq!(live.short_name, "Let It Be");
    assert_eq!(plain.short_name, "Let It Be");
    assert_eq!(remaster.parts, vec!["Let It Be", "Remastered 2009"]);
}

#[test]
fn test_title_without_delimiter_is_its_own_short_name() {
    let identity = Normalizer::default().normalize("Help!");
    assert_eq!(identity.short_name, "Help!");
    assert_eq!(identity.parts, vec!["Help!"]);
    assert_eq!(identity.cleaned, "Help!");
}

#[test]
fn test_hyphen_inside_word_is_not_a_delimiter() {
    let identity = Normalizer::default().normalize("Ob-La-Di, Ob-La-Da - Remastered");
    assert_eq!(identity.short_name, "Ob-La-Di, Ob-La-Da");
}

#[test]
fn test_abbreviation_period_is_removed() {
    let identity =
        Normalizer::default().normalize("Sgt. Pepper's Lonely Hearts Club Band - Reprise");
    assert_eq!(identity.cleaned, "Sgt Pepper's Lonely Hearts Club Band - Reprise");
    assert_eq!(identity.short_name, "Sgt Pepper's Lonely Hearts Club Band");
}

#[test]
fn test_unusual_dashes_act_as_delimiter() {
    let normalizer = Normalizer::default();
    assert_eq!(normalizer.normalize("Yesterday – Take 2").short_name, "Yesterday");
    assert_eq!(normalizer.normalize("Yesterday — Mono").short_name, "Yesterday");
    assert_eq!(normalizer.normalize("Yesterday -- Demo").short_name, "Yesterday");
}

#[test]
fn test_empty_first_part_falls_back_to_title() {
    let normalizer = Normalizer::default();

    let leading = normalizer.normalize(" - Intro");
    assert_eq!(leading.short_name, "- Intro");

    let blank = normalizer.normalize("   ");
    assert_eq!(blank.short_name, "   ");

    let empty = normalizer.normalize("");
    assert_eq!(empty.short_name, "");
}

#[test]
fn test_short_name_is_trimmed() {
    let identity = Normalizer::default().normalize("  Something  - Live at the BBC");
    assert_eq!(identity.short_name, "Something");
}

#[test]
fn test_replacement_table_is_configurable() {
    let empty = Normalizer::empty();
    assert!(empty.replacements().is_empty());
    assert_eq!(
        empty.normalize("Sgt. Pepper").short_name,
        "Sgt. Pepper",
        "no replacement without a table"
    );

    let custom = Normalizer::empty().with_replacement(" / ", TITLE_DELIMITER);
    assert_eq!(custom.normalize("Taxman / 2022 Mix").short_name, "Taxman");
    assert_eq!(custom.replacements().len(), 1);

    // Empty patterns would match everywhere
    let ignored = Normalizer::empty().with_replacement("", "x");
    assert!(ignored.replacements().is_empty());
}

#[test]
fn test_default_table_is_used_by_default() {
    assert_eq!(
        Normalizer::default().replacements().len(),
        DEFAULT_REPLACEMENTS.len()
    );
}

#[test]
fn test_version_is_everything_after_the_short_name() {
    let normalizer = Normalizer::default();

    assert_eq!(
        normalizer.normalize("Let It Be - Remastered 2009").version(),
        "Remastered 2009"
    );
    assert_eq!(
        normalizer
            .normalize("Revolution 1 - Take 18 - Anthology")
            .version(),
        format!("Take 18{TITLE_DELIMITER}Anthology")
    );
    assert_eq!(normalizer.normalize("Help!").version(), "");
}
