use super::*;

#[test]
fn validate_disease_input_builds_trimmed_record() {
    let disease =
        validate_disease_input(" rust ", " wheat ", " fungicide ", " common ").unwrap();
    assert_eq!(disease.disease_name, "rust");
    assert_eq!(disease.crop_name, "wheat");
    assert_eq!(disease.cure, "fungicide");
    assert_eq!(disease.commonness, "common");
}

#[test]
fn validate_disease_input_rejects_any_empty_field() {
    assert!(validate_disease_input("", "wheat", "cure", "common").is_err());
    assert!(validate_disease_input("rust", " ", "cure", "common").is_err());
    assert!(validate_disease_input("rust", "wheat", "", "common").is_err());
    assert!(validate_disease_input("rust", "wheat", "cure", "").is_err());
}
