use regex::Regex;

use eureka_client::slug::slugify;

#[test]
fn lowercases_and_hyphenates() {
    assert_eq!(slugify("Microbiome & Neuroinflammation"), "microbiome-neuroinflammation");
    assert_eq!(slugify("CRISPR/Cas9 in T-cells"), "crispr-cas9-in-t-cells");
}

#[test]
fn strips_leading_and_trailing_hyphens() {
    assert_eq!(slugify("--Hello, World!--"), "hello-world");
    assert_eq!(slugify("(draft) title"), "draft-title");
}

#[test]
fn all_symbol_input_is_empty() {
    assert_eq!(slugify("!!! ??? ..."), "");
    assert_eq!(slugify(""), "");
}

#[test]
fn non_ascii_letters_become_separators() {
    assert_eq!(slugify("Gut–Brain Axis"), "gut-brain-axis");
    assert_eq!(slugify("Café au lait"), "caf-au-lait");
}

#[test]
fn idempotent_and_well_formed() {
    let pattern = Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").unwrap();
    let inputs = [
        "Spatial transcriptomics adoption",
        "  12% growth in LLM-based biology  ",
        "A__B__C",
        "ÅÄÖ only",
        "x",
        "-",
    ];
    for input in inputs {
        let once = slugify(input);
        assert_eq!(slugify(&once), once, "not idempotent for {input:?}");
        assert!(
            once.is_empty() || pattern.is_match(&once),
            "malformed slug {once:?} for {input:?}"
        );
    }
}

#[test]
fn distinct_titles_may_collide() {
    assert_eq!(slugify("Gut brain"), slugify("gut-brain"));
}
