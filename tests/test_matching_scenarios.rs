use food_image_match::{Catalog, CategoryTable, DescriptionMatcher, ScoringWeights};
use std::sync::Arc;

fn ingredients(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn matcher(json: &str) -> DescriptionMatcher {
    DescriptionMatcher::new(
        Arc::new(Catalog::from_json_str(json).unwrap()),
        ScoringWeights::default(),
    )
}

#[test]
fn single_entry_catalog_matches_ice_cream() {
    let matcher = matcher(r#"{"dessert/d1.jpg": {"en": "ice cream with vanilla, chocolate chips"}}"#);
    let result = matcher
        .find_best_match(
            "Vanilla Ice Cream Delight",
            &ingredients(&["vanilla", "cream"]),
            "en",
        )
        .expect("the single entry should match");

    assert_eq!(result.image_path, "dessert/d1.jpg");
    assert!(result.score > 0.2, "score was {}", result.score);
}

#[test]
fn empty_catalog_never_matches() {
    let matcher = DescriptionMatcher::new(Arc::new(Catalog::empty()), ScoringWeights::default());
    assert!(matcher.find_best_match("anything at all", &[], "en").is_none());

    let table = CategoryTable::embedded();
    assert_eq!(table.classify("chicken soup", &[]), None);
}

#[test]
fn kimchi_fried_rice_classifies_via_phrase() {
    let table = CategoryTable::embedded();
    assert_eq!(table.classify("Kimchi Fried Rice", &[]), Some("rice"));

    let index = table.select_index("rice", "Kimchi Fried Rice", &[]);
    assert!((1..=15).contains(&index), "index {} outside kimchi sub-range", index);
}

#[test]
fn scores_stay_within_unit_interval() {
    let matcher = matcher(
        r#"{
            "rice/rice1.jpg": {"en": "kimchi fried rice with kimchi, rice, egg, scallions"},
            "rice/rice2.jpg": {"en": "egg fried rice with rice, eggs, peas, carrots"},
            "dessert/d1.jpg": {"en": "ice cream with vanilla, chocolate chips"}
        }"#,
    );

    let queries: &[(&str, &[&str])] = &[
        ("Kimchi Fried Rice", &["kimchi", "rice", "egg", "scallions"]),
        ("egg fried rice with rice eggs peas carrots fried rice", &["rice", "eggs"]),
        ("Something Completely Different", &[]),
        ("", &[]),
    ];

    for (title, ings) in queries {
        if let Some(result) = matcher.find_best_match(title, &ingredients(ings), "en") {
            assert!(result.score > 0.0, "{}: score {}", title, result.score);
            assert!(result.score <= 1.0, "{}: score {}", title, result.score);
        }
    }
}

#[test]
fn select_index_is_stable_across_calls() {
    let table = CategoryTable::embedded();
    for category in ["rice", "dessert", "pasta", "pizza", "burger", "biryani"] {
        let first = table.select_index(category, "Some Recipe Title", &ingredients(&["salt"]));
        let second = table.select_index(category, "Some Recipe Title", &ingredients(&["salt"]));
        assert_eq!(first, second, "unstable index for {}", category);
        assert!(first >= 1);
        assert!(first <= table.bound(category).unwrap());
    }
}

#[test]
fn rice_query_never_lands_in_dessert() {
    // Word-boundary regression guard: "ice" must not fire inside "rice"
    let table = CategoryTable::embedded();
    for title in ["Steamed Rice", "Rice Pilaf", "Brown Rice Bowl", "rice"] {
        assert_eq!(table.classify(title, &[]), Some("rice"), "title: {}", title);
    }
}

#[test]
fn phrase_priority_beats_single_keywords() {
    // "kimchi fried rice" carries the whole-word "rice" keyword too, but the
    // phrase table must decide first; likewise "ice cream" carries "cream"
    let table = CategoryTable::embedded();
    assert_eq!(table.classify("Kimchi Fried Rice", &[]), Some("rice"));
    assert_eq!(table.classify("Ice Cream Sundae", &[]), Some("dessert"));
}

#[test]
fn multilingual_queries_classify() {
    let table = CategoryTable::embedded();
    // Japanese, Korean, Spanish, German
    assert_eq!(table.classify("キムチチャーハン", &[]), Some("rice"));
    assert_eq!(table.classify("아이스크림", &[]), Some("dessert"));
    assert_eq!(table.classify("Arroz frito especial", &[]), Some("rice"));
    assert_eq!(table.classify("Eiscreme mit Schokolade", &[]), Some("dessert"));
}

#[test]
fn unknown_language_falls_back_to_english_descriptions() {
    let matcher = matcher(r#"{"pizza/pizza1.jpg": {"en": "margherita pizza with tomato sauce, mozzarella, basil"}}"#);
    let result = matcher
        .find_best_match("Margherita Pizza", &ingredients(&["mozzarella"]), "xx")
        .expect("should score against the en description");
    assert_eq!(result.image_path, "pizza/pizza1.jpg");
    assert!(result.score > 0.0);
}

#[test]
fn embedded_catalog_matches_its_own_domain() {
    let matcher = DescriptionMatcher::new(Arc::new(Catalog::embedded()), ScoringWeights::default());

    let result = matcher
        .find_best_match(
            "Spaghetti Carbonara",
            &ingredients(&["spaghetti", "eggs", "pancetta", "parmesan"]),
            "en",
        )
        .expect("embedded catalog should cover carbonara");
    assert_eq!(result.image_path, "pasta/pasta1.jpg");
    assert!(result.score > 0.2);
}
