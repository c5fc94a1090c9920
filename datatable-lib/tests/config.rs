mod common;

use common::{Household, columns, households};
use datatable_lib::action::{ActionItem, BulkAction, RowAction};
use datatable_lib::column::{ColumnSpec, FilterType};
use datatable_lib::filter::{FilterChip, Tab};
use datatable_lib::table::{DataTable, TableConfig};
use datatable_lib::{ConfigError, ParseError};

fn build(
    columns: Vec<ColumnSpec>,
    config: TableConfig<Household>,
) -> Result<DataTable<Household>, ConfigError> {
    DataTable::new(columns, households(), config)
}

#[test]
fn test_defaults() {
    let config = TableConfig::<Household>::default();
    assert!(!config.enable_row_selection);
    assert!(config.enable_multi_row_selection);
    assert!(config.enable_sorting);
    assert!(!config.enable_global_search);
    assert_eq!(config.search_placeholder, "Search...");
    assert_eq!(config.default_page_size, 10);
    assert_eq!(config.row_actions_position, 1);
    assert_eq!(config.empty_state, "No results.");
    assert_eq!(config.loading_text, "Loading...");
}

#[test]
fn test_duplicate_column() {
    let mut cols = columns();
    cols.push(ColumnSpec::new("aum", "AUM again"));
    let err = build(cols, TableConfig::default()).unwrap_err();
    assert_eq!(err, ConfigError::DuplicateColumn("aum".into()));
}

#[test]
fn test_select_filter_needs_options() {
    let cols = vec![ColumnSpec::new("status", "Status").filter(FilterType::MultiSelect)];
    let err = build(cols, TableConfig::default()).unwrap_err();
    assert_eq!(
        err,
        ConfigError::MissingFilterOptions {
            column: "status".into(),
            filter_type: FilterType::MultiSelect,
        }
    );
    assert_eq!(
        err.to_string(),
        "Column 'status' is filterable as multi-select but has no filter options"
    );
}

#[test]
fn test_range_filter_needs_no_options() {
    let cols = vec![ColumnSpec::new("aum", "AUM").filter(FilterType::Range)];
    assert!(build(cols, TableConfig::default()).is_ok());
}

#[test]
fn test_duplicate_tab_and_chip_ids() {
    let config = TableConfig::default().with_tabs(vec![Tab::new("all", "All"), Tab::new("all", "All again")]);
    assert_eq!(
        build(columns(), config).unwrap_err(),
        ConfigError::duplicate("tab", "all")
    );

    let config = TableConfig::default()
        .with_filter_chips(vec![FilterChip::new("cash", "High Cash"), FilterChip::new("cash", "Cash")]);
    assert_eq!(
        build(columns(), config).unwrap_err(),
        ConfigError::duplicate("chip", "cash")
    );
}

#[test]
fn test_duplicate_action_ids_include_submenus() {
    let config = TableConfig::default().with_row_actions(vec![
        RowAction::submenu(
            "contact",
            "Contact",
            [ActionItem::new("email", "Send Email", |_: &Household| {})],
        ),
        ActionItem::new("email", "Email", |_: &Household| {}).into(),
    ]);
    assert_eq!(
        build(columns(), config).unwrap_err(),
        ConfigError::duplicate("row action", "email")
    );

    let config = TableConfig::default().with_bulk_actions(vec![
        BulkAction::new("export", "Export", |_: &[Household]| {}),
        BulkAction::new("export", "Export again", |_: &[Household]| {}),
    ]);
    assert_eq!(
        build(columns(), config).unwrap_err().to_string(),
        "Duplicate bulk action id: export"
    );
}

#[test]
fn test_zero_page_size() {
    let config = TableConfig::default().with_page_size(0);
    assert_eq!(
        build(columns(), config).unwrap_err(),
        ConfigError::InvalidPageSize
    );

    let config = TableConfig::default().with_page_size_options(vec![0, 10]);
    assert_eq!(
        build(columns(), config).unwrap_err(),
        ConfigError::InvalidPageSize
    );
}

#[test]
fn test_chip_on_unknown_column() {
    let config = TableConfig::default()
        .with_filter_chips(vec![FilterChip::new("plan", "Review Due").column_equals("finPlan", "Needs Update")]);
    assert_eq!(
        build(columns(), config).unwrap_err(),
        ConfigError::unknown_column("chip 'plan'", "finPlan")
    );
}

#[test]
fn test_set_config_resets_derived_state() {
    let tabs = || {
        vec![
            Tab::new("all", "All"),
            Tab::new("large", "Large").filter(|h: &Household| h.aum.is_some_and(|a| a > 100_000_000)),
        ]
    };
    let config = common::full_config().with_tabs(tabs()).with_page_size(3);
    let mut table = build(columns(), config).unwrap();
    table.set_active_tab("large");
    table.set_global_filter("a");
    table.toggle_row_selected(&1);

    let replacement = common::full_config()
        .with_tabs(tabs())
        .with_page_size(5)
        .with_filter_chips(vec![FilterChip::new("cash", "High Cash").active()]);
    table.set_config(replacement).unwrap();

    assert_eq!(table.filter_state().active_tab, "all");
    assert!(table.filter_state().active_chips.contains("cash"));
    assert_eq!(table.pagination().page_size, 5);
    assert_eq!(table.filter_state().global_filter, "a");
    assert!(table.is_selected(&1));
}

#[test]
fn test_set_config_rejects_invalid() {
    let mut table = build(columns(), TableConfig::default()).unwrap();
    let result = table.set_config(TableConfig::default().with_page_size(0));
    assert_eq!(result, Err(ConfigError::InvalidPageSize));
    assert_eq!(table.config().default_page_size, 10);
}

#[test]
fn test_duplicate_row_keys_rejected() {
    let mut rows = households();
    let mut twin = rows[0].clone();
    twin.name = "Adams Twin";
    rows.push(twin);

    let err = DataTable::new(columns(), rows.clone(), TableConfig::default()).unwrap_err();
    assert_eq!(err, ConfigError::DuplicateRowKey("1".into()));
    assert_eq!(err.to_string(), "Duplicate row key: 1");

    let mut table = build(columns(), TableConfig::default().with_row_selection(true)).unwrap();
    table.toggle_row_selected(&1);
    assert_eq!(table.set_data(rows), Err(ConfigError::DuplicateRowKey("1".into())));
    assert_eq!(table.data().len(), 8);
    assert_eq!(table.selected_rows().len(), 1);
}

#[test]
fn test_parse_errors_display() {
    let err = "like".parse::<datatable_lib::filter::Operator>().unwrap_err();
    assert_eq!(err, ParseError::UnknownOperator("like".into()));
    assert_eq!(err.to_string(), "Unknown filter operator: like");
}
