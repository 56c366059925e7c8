use super::*;

#[test]
fn validate_tip_input_trims_both_fields() {
    let tip = validate_tip_input("  wheat  ", "  water daily  ").unwrap();
    assert_eq!(tip.crop_name, "wheat");
    assert_eq!(tip.crop_tips, "water daily");
}

#[test]
fn validate_tip_input_requires_crop_name() {
    assert_eq!(validate_tip_input("  ", "water daily"), Err("Enter both crop name and tips."));
}

#[test]
fn validate_tip_input_requires_tips() {
    assert_eq!(validate_tip_input("wheat", ""), Err("Enter both crop name and tips."));
}
