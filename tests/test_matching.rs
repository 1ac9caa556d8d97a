//! Integration tests for record matching.

mod common;

use common::FixtureRomanizer;
use memo_search::{initials_index, segment, Record, RecordMatcher};

fn corpus() -> Vec<Record> {
    let text = "北京市朝阳区幸福路1号\n张三 收件人\n备注：周末在家\n\n上海市浦东新区\n李四";
    segment(text, &FixtureRomanizer)
}

#[test]
fn test_empty_query_passes_records_through() {
    let records = corpus();
    let matcher = RecordMatcher::new(&FixtureRomanizer);

    assert_eq!(matcher.search(&records, ""), records);
}

#[test]
fn test_case_insensitive_address_substring_always_matches() {
    // Property: any case-insensitive substring of an address finds its
    // record.
    let records = corpus();
    let matcher = RecordMatcher::new(&FixtureRomanizer);

    for record in &records {
        let chars: Vec<char> = record.address.chars().collect();
        for window in chars.windows(2) {
            let query: String = window.iter().collect();
            let hits = matcher.search(&records, &query);
            assert!(
                hits.iter().any(|r| r.address == record.address),
                "query {:?} missed {:?}",
                query,
                record.address
            );
        }
    }
}

#[test]
fn test_initials_index_query_matches() {
    let records = corpus();
    let matcher = RecordMatcher::new(&FixtureRomanizer);

    // bjs = 北京市, via the precomputed whole-record index.
    let hits = matcher.search(&records, "bjs");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].address, "北京市朝阳区幸福路1号");
}

#[test]
fn test_token_initials_query_matches() {
    let records = corpus();
    let matcher = RecordMatcher::new(&FixtureRomanizer);

    // cy = 朝阳, an interior token of the first address.
    let hits = matcher.search(&records, "cy");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].address, "北京市朝阳区幸福路1号");
}

#[test]
fn test_uppercase_query_is_normalized() {
    let records = corpus();
    let matcher = RecordMatcher::new(&FixtureRomanizer);

    assert_eq!(matcher.search(&records, "BJS").len(), 1);
}

#[test]
fn test_unmatched_query_yields_no_hits() {
    let records = corpus();
    let matcher = RecordMatcher::new(&FixtureRomanizer);

    assert!(matcher.search(&records, "深圳").is_empty());
    assert!(matcher.search(&records, "qqq").is_empty());
}

#[test]
fn test_same_address_different_tags_share_decision() {
    let address = "北京市朝阳区幸福路1号";
    let mut records: Vec<Record> = (0..3)
        .map(|i| {
            let mut r = Record::new(
                address.to_string(),
                format!("备注{}", i),
                initials_index(address, &FixtureRomanizer),
            );
            r.source_tag = Some(format!("memo{}", i));
            r
        })
        .collect();
    records.push(Record::new(
        "上海市浦东新区".to_string(),
        "李四".to_string(),
        initials_index("上海市浦东新区", &FixtureRomanizer),
    ));

    let matcher = RecordMatcher::new(&FixtureRomanizer);
    let hits = matcher.search(&records, "cy");

    // All three copies of the matching address come back, tags intact.
    assert_eq!(hits.len(), 3);
    let tags: Vec<_> = hits.iter().map(|r| r.source_tag.clone().unwrap()).collect();
    assert_eq!(tags, vec!["memo0", "memo1", "memo2"]);
}
