use std::collections::HashSet;

use proptest::prelude::*;
use seltab_engine::{
    FilterFields, Record, RecordId, SelectionMode, SelectionTable, SharedRecord, TableConfig,
    filter,
};

fn candidates(names: &[String]) -> Vec<SharedRecord> {
    names
        .iter()
        .enumerate()
        .map(|(idx, name)| Record::new(idx.to_string()).with_field("Name", name).shared())
        .collect()
}

fn fields() -> Vec<String> {
    vec!["Name".to_string()]
}

fn is_subsequence(sub: &[SharedRecord], full: &[SharedRecord]) -> bool {
    let mut rest = full.iter();
    sub.iter()
        .all(|needle| rest.any(|record| record.id == needle.id))
}

proptest! {
    #[test]
    fn blank_filter_is_identity(names in prop::collection::vec("[a-zA-Z ]{0,8}", 0..40)) {
        let records = candidates(&names);
        let filtered = filter::apply(&records, &fields(), "");
        let expected: Vec<_> = records.iter().map(|r| r.id.clone()).collect();
        let actual: Vec<_> = filtered.iter().map(|r| r.id.clone()).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn filter_output_is_ordered_subsequence(
        names in prop::collection::vec("[a-dA-D]{0,6}", 0..40),
        query in "[a-dA-D]{1,2}",
    ) {
        let records = candidates(&names);
        let filtered = filter::apply(&records, &fields(), &query);
        prop_assert!(is_subsequence(&filtered, &records));

        let needle = query.to_lowercase();
        for record in &filtered {
            let name = record.get("Name").unwrap_or_default().to_lowercase();
            prop_assert!(name.contains(&needle));
        }
    }

    #[test]
    fn shown_view_never_repeats_ids(
        names in prop::collection::vec("[a-c]{1,4}", 1..60),
        picks in prop::collection::vec(0usize..60, 0..10),
        query in "[a-c]{0,2}",
        page in 1usize..15,
        loads in 0usize..5,
    ) {
        let records = candidates(&names);
        let config = TableConfig::new(page)
            .unwrap()
            .with_filter_fields(FilterFields::from_fields(fields()));
        let mut table = SelectionTable::builder(config).candidates(records.clone()).build();

        let chosen: Vec<RecordId> = picks
            .iter()
            .filter(|idx| **idx < records.len())
            .map(|idx| RecordId::new(idx.to_string()))
            .collect();
        table.select(table.resolve(&chosen));
        table.apply_filter(query);
        for _ in 0..loads {
            table.load_more();
        }

        let mut seen = HashSet::new();
        for record in table.shown() {
            prop_assert!(seen.insert(record.id.clone()));
        }
        for record in table.selection() {
            prop_assert!(seen.contains(&record.id));
        }
        let prefix: Vec<_> = table.shown()[..table.selection().len()]
            .iter()
            .map(|r| r.id.clone())
            .collect();
        let selected: Vec<_> = table.selection().iter().map(|r| r.id.clone()).collect();
        prop_assert_eq!(prefix, selected);
    }

    #[test]
    fn load_more_grows_cursor_until_exhausted(total in 0usize..120, page in 1usize..30) {
        let names: Vec<String> = (0..total).map(|idx| format!("n{idx}")).collect();
        let config = TableConfig::new(page).unwrap();
        let mut table = SelectionTable::builder(config).candidates(candidates(&names)).build();

        let mut previous = table.state().pagination().cursor();
        while table.more_available() {
            table.load_more();
            let cursor = table.state().pagination().cursor();
            prop_assert!(cursor > previous);
            previous = cursor;
        }
        prop_assert_eq!(previous, total);

        table.load_more();
        prop_assert_eq!(table.state().pagination().cursor(), total);
    }
}

#[test]
fn selection_persists_when_filter_excludes_it() {
    let names: Vec<String> = ["alpha", "beta", "gamma", "delta"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let config = TableConfig::new(20)
        .unwrap()
        .with_selection(SelectionMode::Multiple, 0)
        .with_filter_fields(FilterFields::from_fields(fields()));
    let mut table = SelectionTable::builder(config)
        .candidates(candidates(&names))
        .build();

    table.select(table.resolve(&[RecordId::from("1"), RecordId::from("0")]));
    table.apply_filter("gam");

    let shown: Vec<_> = table.shown().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(shown, vec!["1", "0", "2"]);
}
