use super::*;
use crate::state::plans::by_slug;

#[test]
fn price_label_formats_monthly_dollars() {
    let starter = by_slug("starter").expect("starter plan");
    assert_eq!(price_label(starter), "$7/mo");
}

#[test]
fn limit_label_names_the_monthly_cap() {
    let elite = by_slug("elite").expect("elite plan");
    assert_eq!(limit_label(elite), "Up to 2000 emails per month");
}
