use super::*;

#[test]
fn usage_label_reports_scraped_over_limit() {
    assert_eq!(usage_label(40, 100), "40 of 100 emails scraped this month");
    assert_eq!(usage_label(0, 500), "0 of 500 emails scraped this month");
}

#[test]
fn scrape_flash_text_matches_the_background_kickoff() {
    assert_eq!(
        SCRAPE_STARTED,
        "Scraping started in the background. Results will be available shortly."
    );
}
