mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use common::{Household, Recorder, full_config, households, names, table};
use datatable_lib::action::BulkAction;
use datatable_lib::filter::ColumnFilter;
use datatable_lib::model::Value;
use datatable_lib::table::{CheckState, SelectionMode, SortRequest};

#[test]
fn test_selection_disabled_by_default() {
    let mut table = table(Default::default());
    assert_eq!(table.selection().mode, SelectionMode::None);
    table.toggle_row_selected(&1);
    assert!(table.selection().is_empty());
}

#[test]
fn test_selection_survives_refilter_and_resort() {
    let mut table = table(full_config().with_pagination(false));
    table.toggle_row_selected(&3);
    table.toggle_row_selected(&6);

    table.set_column_filter("tier", Some(ColumnFilter::Equals(Value::from("Gold"))));
    assert!(table.selected_rows().is_empty());
    assert_eq!(table.selection().len(), 2);

    table.set_column_filter("tier", None);
    table.set_sort("name", SortRequest::Descending);
    assert_eq!(names(&table.selected_rows()), ["Foster", "Chen"]);
    assert!(table.is_selected(&3));
}

#[test]
fn test_unknown_key_is_ignored() {
    let mut table = table(full_config());
    table.toggle_row_selected(&42);
    assert!(table.selection().is_empty());
}

#[test]
fn test_single_selection_replaces() {
    let mut table = table(full_config().with_multi_row_selection(false));
    assert_eq!(table.selection().mode, SelectionMode::Single);

    table.toggle_row_selected(&1);
    table.toggle_row_selected(&2);
    assert_eq!(names(&table.selected_rows()), ["Baker"]);

    table.toggle_all_selected();
    assert_eq!(table.selection().len(), 1);
}

#[test]
fn test_toggle_all_works_on_current_page() {
    let mut table = table(full_config().with_page_size(3));
    assert_eq!(table.page_selection_state(), CheckState::Unchecked);

    table.toggle_row_selected(&2);
    assert_eq!(table.page_selection_state(), CheckState::Indeterminate);

    table.toggle_all_selected();
    assert_eq!(table.page_selection_state(), CheckState::Checked);
    assert_eq!(names(&table.selected_rows()), ["Adams", "Baker", "Chen"]);

    table.next_page();
    table.toggle_all_selected();
    assert_eq!(table.selection().len(), 6);

    table.toggle_all_selected();
    assert_eq!(names(&table.selected_rows()), ["Adams", "Baker", "Chen"]);
}

#[test]
fn test_bulk_action_receives_selection_across_pages() {
    let received = Recorder::<Vec<u32>>::new();
    let sink = received.clone();
    let export = BulkAction::new("export", "Export Selected", move |rows: &[Household]| {
        sink.push(rows.iter().map(|h| h.id).collect());
    });
    let mut table = table(full_config().with_page_size(2).with_bulk_actions(vec![export]));

    table.toggle_row_selected(&1);
    table.next_page();
    table.next_page();
    table.toggle_row_selected(&6);

    assert_eq!(table.visible_rows().len(), 2);
    assert!(table.invoke_bulk_action("export"));
    assert_eq!(received.events(), [vec![1, 6]]);
}

#[test]
fn test_bulk_action_requires_selection() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let delete = BulkAction::new("delete", "Delete Selected", move |_: &[Household]| {
        counter.fetch_add(1, Ordering::SeqCst);
    })
    .destructive();
    let table = table(full_config().with_bulk_actions(vec![delete]));

    assert!(!table.invoke_bulk_action("delete"));
    assert!(!table.invoke_bulk_action("missing"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_bulk_action_skips_filtered_out_rows() {
    let received = Recorder::<usize>::new();
    let sink = received.clone();
    let export = BulkAction::new("export", "Export", move |rows: &[Household]| {
        sink.push(rows.len());
    });
    let mut table = table(full_config().with_bulk_actions(vec![export]));
    table.toggle_row_selected(&1);
    table.toggle_row_selected(&2);
    table.set_global_filter("adams");

    table.invoke_bulk_action("export");
    assert_eq!(received.events(), [1]);
}

#[test]
fn test_selection_callback() {
    let changes = Recorder::<Vec<u32>>::new();
    let sink = changes.clone();
    let mut table = table(
        full_config().on_selection_change(move |rows| sink.push(rows.iter().map(|h| h.id).collect())),
    );

    table.toggle_row_selected(&4);
    table.toggle_row_selected(&1);
    table.clear_selection();
    table.clear_selection();

    assert_eq!(changes.events(), [vec![4], vec![1, 4], vec![]]);
}

#[test]
fn test_set_data_prunes_missing_keys() {
    let mut table = table(full_config());
    table.toggle_row_selected(&1);
    table.toggle_row_selected(&8);

    let remaining: Vec<Household> = households().into_iter().filter(|h| h.id != 8).collect();
    table.set_data(remaining).unwrap();

    assert_eq!(table.selection().len(), 1);
    assert!(table.is_selected(&1));
    assert_eq!(table.footer_counts().total, 7);
}
