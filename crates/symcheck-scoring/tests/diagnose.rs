use symcheck_catalog::{CatalogConfig, ConditionCatalog, DEFAULT_SPECIALIST};
use symcheck_scoring::{SymptomInput, diagnose};

#[test]
fn parse_splits_trims_lowercases_and_drops_empties() {
    let input = SymptomInput::parse("Fever,  Sore Throat ,, ,HEADACHE");
    assert_eq!(input.as_slice(), ["fever", "sore throat", "headache"]);
}

#[test]
fn parse_of_blank_text_is_empty() {
    assert!(SymptomInput::parse("  , ,").is_empty());
    assert!(SymptomInput::parse("").is_empty());
}

#[test]
fn selections_are_normalized_and_extendable() {
    let mut input = SymptomInput::from_selections(["  Chills", ""]);
    input.extend(SymptomInput::parse("sweating"));
    assert_eq!(input.len(), 2);
    assert_eq!(input.as_slice(), ["chills", "sweating"]);
}

#[test]
fn diagnose_attaches_specialist_and_severity() {
    let input = SymptomInput::parse("headache, nausea, sensitivity to light");
    let result = diagnose(&input, ConditionCatalog::builtin()).unwrap();
    assert_eq!(result.best_condition, "Migraine");
    assert_eq!(result.specialist, "Neurologist");
    assert!(result.is_minor);
    assert_eq!(result.best_score(), 75.0);
}

#[test]
fn diagnose_for_serious_condition_is_not_minor() {
    let input = SymptomInput::parse("chest pain, dizziness");
    let result = diagnose(&input, ConditionCatalog::builtin()).unwrap();
    assert_eq!(result.best_condition, "Hypertension");
    assert_eq!(result.specialist, "Cardiologist");
    assert!(!result.is_minor);
}

#[test]
fn specialist_is_never_empty() {
    let catalog = CatalogConfig::from_json_str(
        r#"{ "Gout": { "symptoms": ["joint pain"] }, "Lupus": { "symptoms": ["rash"], "specialist": "Rheumatologist" } }"#,
    )
    .unwrap()
    .into_catalog()
    .unwrap();

    for text in ["joint pain", "rash", "", "unicorn"] {
        let result = diagnose(&SymptomInput::parse(text), &catalog).unwrap();
        assert!(!result.specialist.is_empty());
    }
    let gout = diagnose(&SymptomInput::parse("joint pain"), &catalog).unwrap();
    assert_eq!(gout.specialist, DEFAULT_SPECIALIST);
}

#[test]
fn prediction_serializes_scores_in_catalog_order() {
    let result = diagnose(&SymptomInput::parse("fever"), ConditionCatalog::builtin()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["best_condition"], "Flu");
    assert_eq!(json["is_minor"], true);
    let scores = json["scores"].as_array().unwrap();
    assert_eq!(scores.len(), 7);
    assert_eq!(scores[0]["condition"], "Flu");
    assert_eq!(scores[0]["score"], 20.0);
    assert_eq!(scores[6]["condition"], "Migraine");
}
