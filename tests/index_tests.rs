use chrono::NaiveDate;
use publish_daily::constants::{ENTRY_END, ENTRY_START};
use publish_daily::{Entries, IndexDocument, merge_entry};
use spectral::assert_that;
use spectral::prelude::*;

const PREFIX: &str = "<!DOCTYPE html>\n<html><body>\n<h2>Daily Updates</h2>\n  ";
const SUFFIX: &str = "\n</body>\n<script>var x = '<!-- not a marker -->';</script>\n</html>\n";

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

fn empty_index() -> String {
    format!("{PREFIX}{ENTRY_START}\n  {ENTRY_END}{SUFFIX}")
}

fn recovered(html: &str) -> Vec<(NaiveDate, String)> {
    IndexDocument::parse(html)
        .expect("markers present")
        .entries()
        .iter()
        .map(|(date, desc)| (date, desc.to_owned()))
        .collect()
}

#[test]
fn merges_into_empty_region() {
    let (html, count) = merge_entry(&empty_index(), date(2026, 2, 18), "First").expect("merge");

    assert_that(&count).is_equal_to(1);
    assert_that(&recovered(&html)).is_equal_to(vec![(date(2026, 2, 18), "First".to_owned())]);
    assert_that(&html.as_str()).contains(r#"<a href="2026-02-18.html">"#);
    assert_that(&html.as_str())
        .contains("<div class=\"update-date\">February 18, 2026 &middot; Wednesday</div>");
}

#[test]
fn same_date_twice_keeps_one_entry_with_second_description() {
    let (html, _) = merge_entry(&empty_index(), date(2026, 2, 18), "First").expect("merge");
    let (html, count) = merge_entry(&html, date(2026, 2, 18), "Second").expect("merge");

    assert_that(&count).is_equal_to(1);
    assert_that(&recovered(&html)).is_equal_to(vec![(date(2026, 2, 18), "Second".to_owned())]);
    assert_that(&html.matches("update-card").count()).is_equal_to(1);
}

#[test]
fn two_months_render_two_headers_in_descending_order() {
    let mut entries = Entries::default();
    entries.upsert(date(2026, 1, 30), "jan 30");
    entries.upsert(date(2026, 2, 2), "feb 2");
    entries.upsert(date(2026, 1, 5), "jan 5");
    entries.upsert(date(2026, 2, 18), "feb 18");

    let region = entries.render();

    let expected = [
        "February 2026</h4>",
        "2026-02-18.html",
        "2026-02-02.html",
        "January 2026</h4>",
        "2026-01-30.html",
        "2026-01-05.html",
    ];
    let positions: Vec<usize> = expected
        .iter()
        .map(|needle| region.find(needle).expect("needle rendered"))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort_unstable();

    assert_that(&region.matches("<h4").count()).is_equal_to(2);
    assert_that(&positions).is_equal_to(sorted);
}

#[test]
fn same_month_in_different_years_gets_separate_headers() {
    let mut entries = Entries::default();
    entries.upsert(date(2025, 3, 1), "a");
    entries.upsert(date(2026, 3, 1), "b");

    let region = entries.render();

    assert_that(&region.matches("<h4").count()).is_equal_to(2);
    let newer = region.find("March 2026").expect("2026 header rendered");
    let older = region.find("March 2025").expect("2025 header rendered");
    assert_that(&newer).is_less_than(older);
}

#[test]
fn render_matches_published_layout() {
    let mut entries = Entries::default();
    entries.upsert(date(2026, 2, 18), "630 tickers analyzed");

    let expected = concat!(
        "\n  <h4 style=\"margin-top: 30px;\">February 2026</h4>\n",
        "\n",
        "  <div class=\"update-card\">\n",
        "    <a href=\"2026-02-18.html\">\n",
        "      <div class=\"update-date\">February 18, 2026 &middot; Wednesday</div>\n",
        "      <div class=\"update-title\">Daily Market Update</div>\n",
        "      <p class=\"update-desc\">630 tickers analyzed</p>\n",
        "    </a>\n",
        "  </div>",
    );

    assert_that(&entries.render()).is_equal_to(expected.to_owned());
}

#[test]
fn splice_preserves_surrounding_text() {
    let html = empty_index();
    let (first, _) = merge_entry(&html, date(2026, 2, 18), "a").expect("merge");
    let (second, _) = merge_entry(&first, date(2026, 3, 1), "b").expect("merge");

    for updated in [&first, &second] {
        let document = IndexDocument::parse(updated).expect("markers present");
        assert_that(&document.prefix).is_equal_to(PREFIX);
        assert_that(&document.suffix).is_equal_to(SUFFIX);
        assert_that(&updated.starts_with(&format!("{PREFIX}{ENTRY_START}"))).is_true();
        assert_that(&updated.ends_with(&format!("\n  {ENTRY_END}{SUFFIX}"))).is_true();
    }
}

#[test]
fn regenerating_is_stable() {
    let (once, _) = merge_entry(&empty_index(), date(2026, 2, 18), "x").expect("merge");
    let (twice, _) = merge_entry(&once, date(2026, 2, 18), "x").expect("merge");

    assert_that(&twice).is_equal_to(once);
}

#[test]
fn missing_end_marker_is_fatal() {
    let html = format!("{PREFIX}{ENTRY_START}\n  <p>half an index");

    assert_that(&merge_entry(&html, date(2026, 2, 18), "x").is_err()).is_true();
}

#[test]
fn missing_start_marker_is_fatal() {
    let html = format!("{PREFIX}{ENTRY_END}{SUFFIX}");

    assert_that(&merge_entry(&html, date(2026, 2, 18), "x").is_err()).is_true();
}

#[test]
fn end_marker_before_start_marker_is_fatal() {
    let html = format!("{ENTRY_END}{PREFIX}{ENTRY_START}{SUFFIX}");

    assert_that(&IndexDocument::parse(&html).is_err()).is_true();
}

#[test]
fn malformed_cards_are_dropped() {
    let region = concat!(
        "\n  <div class=\"update-card\">\n",
        "    <a href=\"2026-02-18.html\">\n",
        "      <div class=\"update-date\">February 18, 2026</div>\n",
        "      <div class=\"update-title\">Daily Market Update</div>\n",
        "      <p class=\"update-desc\">  kept  </p>\n",
        "    </a>\n",
        "  </div>\n",
        "  <div class=\"update-card\"><a href=\"2026-02-17.html\"><p>no date div</p></a></div>\n",
        "  <div class=\"update-card\"><a href=\"2026-13-40.html\">",
        "<div class=\"update-date\">?</div><div class=\"update-title\">?</div>",
        "<p class=\"update-desc\">bad date</p></a></div>\n",
    );

    let entries = Entries::parse(region);

    assert_that(&entries.len()).is_equal_to(1);
    assert_that(&entries.get(date(2026, 2, 18))).is_equal_to(Some("kept"));
}

#[test]
fn existing_entries_survive_a_merge() {
    let mut html = empty_index();
    let dates = [
        date(2025, 12, 31),
        date(2026, 1, 2),
        date(2026, 1, 1),
        date(2026, 2, 28),
    ];
    for (i, day) in dates.iter().enumerate() {
        html = merge_entry(&html, *day, &format!("entry {i}")).expect("merge").0;
    }

    let (html, count) = merge_entry(&html, date(2026, 1, 15), "new").expect("merge");

    assert_that(&count).is_equal_to(5);
    assert_that(&recovered(&html)).is_equal_to(vec![
        (date(2026, 2, 28), "entry 3".to_owned()),
        (date(2026, 1, 15), "new".to_owned()),
        (date(2026, 1, 2), "entry 1".to_owned()),
        (date(2026, 1, 1), "entry 2".to_owned()),
        (date(2025, 12, 31), "entry 0".to_owned()),
    ]);
}
