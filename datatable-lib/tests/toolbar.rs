mod common;

use common::{Household, Recorder, full_config, names, table};
use datatable_lib::action::{BulkAction, NewItemAction};
use datatable_lib::filter::{ColumnFilter, Condition, FilterChip, Operator, Tab};
use datatable_lib::model::Value;
use datatable_lib::table::{DataTable, SortDirection};
use datatable_lib::toolbar::{DraftRow, HeaderKind, Toolbar, header_kind, header_menu};

fn toolbar_table() -> DataTable<Household> {
    let tabs = vec![
        Tab::new("all", "Client Households"),
        Tab::new("large", "AUM > 100M").filter(|h: &Household| h.aum.is_some_and(|a| a > 100_000_000)),
    ];
    let chips = vec![
        FilterChip::new("managed", "Managed Only").active(),
        FilterChip::new("million", "AUM > $1M").filter(|h: &Household| h.aum.is_some_and(|a| a > 1_000_000)),
        FilterChip::new("cash", "High Cash").filter(|h: &Household| h.cash > 10.0),
        FilterChip::new("review", "Review Due").column_equals("status", "Review Needed"),
    ];
    table(
        full_config()
            .with_tabs(tabs)
            .with_filter_chips(chips)
            .with_search_placeholder("Search households..."),
    )
}

// =============================================================================
// Tabs, chips, search
// =============================================================================

#[test]
fn test_tab_views() {
    let mut table = toolbar_table();
    let mut toolbar = Toolbar::new();
    toolbar.click_tab(&mut table, "large");

    let tabs = toolbar.tab_views(&table);
    assert_eq!(tabs.len(), 2);
    assert_eq!((tabs[0].label.as_str(), tabs[0].count, tabs[0].active), ("Client Households", 8, false));
    assert_eq!((tabs[1].label.as_str(), tabs[1].count, tabs[1].active), ("AUM > 100M", 2, true));
}

#[test]
fn test_chip_labels_carry_counts() {
    let mut table = toolbar_table();
    let mut toolbar = Toolbar::new();
    toolbar.toggle_chip(&mut table, "cash");

    let chips = toolbar.chip_views(&table);
    let labels: Vec<_> = chips.iter().map(|c| c.label.as_str()).collect();
    assert_eq!(
        labels,
        ["Managed Only", "AUM > $1M (5)", "High Cash (4)", "Review Due (1)"]
    );
    let active: Vec<_> = chips.iter().map(|c| c.active).collect();
    assert_eq!(active, [true, false, true, false]);
}

#[test]
fn test_search_and_clear() {
    let mut table = toolbar_table();
    let mut toolbar = Toolbar::new();
    assert_eq!(toolbar.search_placeholder(&table), "Search households...");

    toolbar.search(&mut table, "evans");
    assert_eq!(names(&table.visible_rows()), ["Evans"]);

    toolbar.clear_search(&mut table);
    assert_eq!(table.visible_rows().len(), 8);
}

// =============================================================================
// Advanced filter panel
// =============================================================================

#[test]
fn test_advanced_panel_apply() {
    let mut table = toolbar_table();
    let mut toolbar = Toolbar::new();

    toolbar.open_advanced(&table);
    assert!(toolbar.is_advanced_open());
    assert_eq!(toolbar.draft().unwrap().rows(), &[DraftRow::default()]);

    toolbar.update_draft_row(0, DraftRow::new("risk", Operator::Gt, "5"));
    toolbar.add_draft_row();
    toolbar.update_draft_row(1, DraftRow::new("", Operator::Equals, "ignored"));
    toolbar.apply_advanced(&mut table);

    assert!(!toolbar.is_advanced_open());
    assert_eq!(toolbar.advanced_badge(&table), Some(1));
    assert_eq!(names(&table.visible_rows()), ["Baker", "Diaz", "Garcia"]);

    toolbar.open_advanced(&table);
    let rows = toolbar.draft().unwrap().rows();
    assert_eq!(rows, &[DraftRow::new("risk", Operator::Gt, "5")]);
}

#[test]
fn test_advanced_panel_cancel_keeps_committed() {
    let mut table = toolbar_table();
    let mut toolbar = Toolbar::new();

    toolbar.open_advanced(&table);
    toolbar.update_draft_row(0, DraftRow::new("tier", Operator::In, "Gold, Silver"));
    toolbar.apply_advanced(&mut table);
    assert_eq!(table.filtered_rows().len(), 5);

    toolbar.open_advanced(&table);
    toolbar.remove_draft_row(0);
    toolbar.cancel_advanced();

    assert!(!toolbar.is_advanced_open());
    assert_eq!(table.filter_state().advanced_filters.len(), 1);
    assert_eq!(table.filtered_rows().len(), 5);
}

#[test]
fn test_advanced_panel_clear() {
    let mut table = toolbar_table();
    let mut toolbar = Toolbar::new();

    toolbar.open_advanced(&table);
    toolbar.update_draft_row(0, DraftRow::new("riskScore", Operator::Gt, "5"));
    toolbar.add_draft_row();
    toolbar.update_draft_row(1, DraftRow::new("risk", Operator::Between, "2").with_value2("4"));
    toolbar.apply_advanced(&mut table);
    assert_eq!(table.filter_state().advanced_filters.len(), 1);
    assert_eq!(names(&table.filtered_rows()), ["Adams", "Chen", "Foster"]);

    toolbar.open_advanced(&table);
    toolbar.clear_advanced(&mut table);
    assert_eq!(toolbar.draft().unwrap().rows(), &[DraftRow::default()]);
    assert!(table.filter_state().advanced_filters.is_empty());
    assert_eq!(toolbar.advanced_badge(&table), None);
}

// =============================================================================
// Column headers
// =============================================================================

#[test]
fn test_header_kinds() {
    let table = toolbar_table();
    assert_eq!(header_kind(&table, "name"), Some(HeaderKind::Menu));
    assert_eq!(header_kind(&table, "advisor"), Some(HeaderKind::Menu));
    assert_eq!(header_kind(&table, "risk"), Some(HeaderKind::SortButton));
    assert_eq!(header_kind(&table, "missing"), None);
    assert!(header_menu(&table, "risk").is_none());

    let unsorted = common::table(full_config().with_sorting(false));
    assert_eq!(header_kind(&unsorted, "risk"), Some(HeaderKind::Plain));
}

#[test]
fn test_sort_button_cycles() {
    let mut table = toolbar_table();
    let mut toolbar = Toolbar::new();
    toolbar.click_sort_button(&mut table, "risk");
    assert_eq!(table.sort_direction("risk"), Some(SortDirection::Asc));
    toolbar.click_sort_button(&mut table, "risk");
    assert_eq!(table.sort_direction("risk"), Some(SortDirection::Desc));
    toolbar.click_sort_button(&mut table, "risk");
    assert_eq!(table.sort_direction("risk"), None);
}

#[test]
fn test_header_menu_contents() {
    let mut table = toolbar_table();
    let mut toolbar = Toolbar::new();
    toolbar.sort_descending(&mut table, "tier");

    let menu = header_menu(&table, "tier").unwrap();
    let sort_labels: Vec<_> = menu.sort_items.iter().map(|i| (i.label, i.active)).collect();
    assert_eq!(
        sort_labels,
        [("Sort Ascending", false), ("Sort Descending", true), ("Clear Sort", false)]
    );
    assert_eq!(menu.options.len(), 4);
    assert!(!menu.multi_select);
    assert!(menu.search.is_none());
    assert!(menu.condition);
    assert!(!menu.can_clear);

    let advisor = header_menu(&table, "advisor").unwrap();
    assert!(advisor.sort_items.is_empty());
    assert_eq!(advisor.search.as_deref(), Some(""));
    assert!(advisor.options.is_empty());

    toolbar.clear_sort(&mut table, "tier");
    assert!(table.sorting().is_empty());
}

#[test]
fn test_single_select_option_replaces() {
    let mut table = toolbar_table();
    let mut toolbar = Toolbar::new();

    toolbar.pick_option(&mut table, "tier", &Value::from("Gold"));
    toolbar.pick_option(&mut table, "tier", &Value::from("Silver"));
    assert_eq!(
        table.column_filter("tier"),
        Some(&ColumnFilter::Equals(Value::from("Silver")))
    );
    assert_eq!(names(&table.filtered_rows()), ["Baker", "Garcia"]);

    let menu = header_menu(&table, "tier").unwrap();
    let checked: Vec<_> = menu.options.iter().filter(|o| o.checked).map(|o| o.label.as_str()).collect();
    assert_eq!(checked, ["Silver"]);
    assert!(menu.can_clear);
}

#[test]
fn test_multi_select_option_toggles() {
    let mut table = toolbar_table();
    let mut toolbar = Toolbar::new();
    let active = Value::from("Active");
    let at_risk = Value::from("At Risk");

    toolbar.pick_option(&mut table, "status", &active);
    toolbar.pick_option(&mut table, "status", &at_risk);
    assert_eq!(
        names(&table.filtered_rows()),
        ["Adams", "Chen", "Diaz", "Foster", "Garcia"]
    );

    toolbar.pick_option(&mut table, "status", &active);
    assert_eq!(names(&table.filtered_rows()), ["Diaz"]);

    toolbar.pick_option(&mut table, "status", &at_risk);
    assert!(table.column_filter("status").is_none());
}

#[test]
fn test_unknown_option_is_ignored() {
    let mut table = toolbar_table();
    let mut toolbar = Toolbar::new();
    toolbar.pick_option(&mut table, "tier", &Value::from("Diamond"));
    toolbar.pick_option(&mut table, "risk", &Value::from(3));
    assert!(table.filter_state().column_filters.is_empty());
}

#[test]
fn test_header_search() {
    let mut table = toolbar_table();
    let mut toolbar = Toolbar::new();

    toolbar.apply_search(&mut table, "name", "ADA");
    assert_eq!(names(&table.filtered_rows()), ["Adams"]);
    assert_eq!(
        header_menu(&table, "name").unwrap().search.as_deref(),
        Some("ADA")
    );

    toolbar.apply_search(&mut table, "name", " ");
    assert!(table.column_filter("name").is_none());

    toolbar.apply_search(&mut table, "risk", "3");
    assert!(table.column_filter("risk").is_none());
}

#[test]
fn test_condition_popover() {
    let mut table = toolbar_table();
    let mut toolbar = Toolbar::new();

    toolbar.open_condition(&table, "aum");
    assert_eq!(toolbar.condition_draft().unwrap().operator, Operator::Between);

    toolbar.update_condition(Operator::Between, "1000000", "50000000");
    toolbar.apply_condition(&mut table);
    assert!(toolbar.condition_draft().is_none());
    assert_eq!(
        names(&table.filtered_rows()),
        ["Baker", "Diaz", "Evans", "Hughes"]
    );

    toolbar.open_condition(&table, "aum");
    let draft = toolbar.condition_draft().unwrap();
    assert_eq!((draft.value.as_str(), draft.value2.as_str()), ("1000000", "50000000"));
    toolbar.cancel_condition();

    toolbar.clear_options(&mut table, "aum");
    assert_eq!(table.filtered_rows().len(), 8);
}

#[test]
fn test_condition_on_non_filterable_column() {
    let table = toolbar_table();
    let mut toolbar = Toolbar::new();
    toolbar.open_condition(&table, "name");
    assert!(toolbar.condition_draft().is_none());
}

#[test]
fn test_blank_condition_clears_filter() {
    let mut table = toolbar_table();
    let mut toolbar = Toolbar::new();
    table.set_column_filter(
        "aum",
        Some(ColumnFilter::Condition(Condition::new(Operator::Gt, 1))),
    );

    toolbar.open_condition(&table, "aum");
    toolbar.update_condition(Operator::Gt, "", "");
    toolbar.apply_condition(&mut table);
    assert!(table.column_filter("aum").is_none());
}

// =============================================================================
// Column visibility, bulk and new-item menus
// =============================================================================

#[test]
fn test_column_toggles() {
    let mut table = toolbar_table();
    let mut toolbar = Toolbar::new();

    let ids: Vec<_> = toolbar.column_toggles(&table).into_iter().map(|t| t.id).collect();
    assert!(!ids.contains(&"name".to_string()));
    assert_eq!(ids.len(), 6);

    toolbar.toggle_column(&mut table, "aum");
    assert!(!table.is_visible("aum"));
    toolbar.toggle_column(&mut table, "name");
    assert!(table.is_visible("name"));
    toolbar.toggle_column(&mut table, "aum");
    assert!(table.is_visible("aum"));
}

#[test]
fn test_bulk_menu_appears_with_selection() {
    let exported = Recorder::<usize>::new();
    let sink = exported.clone();
    let mut table = table(full_config().with_bulk_actions(vec![
        BulkAction::new("export", "Export Selected", move |rows: &[Household]| sink.push(rows.len())),
        BulkAction::new("delete", "Delete Selected", |_: &[Household]| {}).destructive(),
    ]));
    let mut toolbar = Toolbar::new();
    assert!(toolbar.bulk_menu(&table).is_none());

    table.toggle_row_selected(&1);
    table.toggle_row_selected(&3);
    let menu = toolbar.bulk_menu(&table).unwrap();
    assert_eq!(menu.label, "Actions (2)");
    assert_eq!(menu.items.len(), 2);
    assert!(menu.items[1].destructive);

    toolbar.toggle_bulk_menu();
    assert!(toolbar.invoke_bulk(&table, "export"));
    assert!(!toolbar.bulk_menu_open);
    assert_eq!(exported.events(), [2]);
}

#[test]
fn test_bulk_menu_needs_actions() {
    let mut table = table(full_config());
    table.toggle_row_selected(&1);
    assert!(Toolbar::new().bulk_menu(&table).is_none());
}

#[test]
fn test_new_item_menu() {
    let created = Recorder::<&'static str>::new();
    let client = created.clone();
    let household = created.clone();
    let table = table(full_config().with_new_item_actions(vec![
        NewItemAction::new("client", "New Client", move || client.push("client")),
        NewItemAction::new("household", "New Household", move || household.push("household")),
    ]));
    let mut toolbar = Toolbar::new();

    let labels: Vec<_> = toolbar.new_item_menu(&table).into_iter().map(|i| i.label).collect();
    assert_eq!(labels, ["New Client", "New Household"]);

    toolbar.toggle_new_item_menu();
    assert!(toolbar.invoke_new_item(&table, "household"));
    assert!(!toolbar.invoke_new_item(&table, "account"));
    assert!(!toolbar.new_item_menu_open);
    assert_eq!(created.events(), ["household"]);
}
