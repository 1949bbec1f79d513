use super::*;

#[test]
fn tiers_summary_lists_each_band() {
    let tiers = vec![
        RateTier { category: "Undergraduate".to_owned(), min_rate: 1500, max_rate: 2500 },
        RateTier { category: "Graduate".to_owned(), min_rate: 2500, max_rate: 4000 },
    ];
    assert_eq!(tiers_summary(&tiers), "Undergraduate: 1500-2500; Graduate: 2500-4000");
}

#[test]
fn tiers_summary_empty_is_blank() {
    assert_eq!(tiers_summary(&[]), "");
}
