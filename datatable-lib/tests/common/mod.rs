#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use datatable_lib::column::{Alignment, ColumnSpec, FilterOption, FilterType};
use datatable_lib::model::{TableRow, Value};
use datatable_lib::table::{DataTable, TableConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct Household {
    pub id: u32,
    pub name: &'static str,
    pub aum: Option<i64>,
    pub status: &'static str,
    pub tier: &'static str,
    pub advisor: &'static str,
    pub risk: i64,
    pub cash: f64,
}

impl TableRow for Household {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }

    fn value(&self, column_id: &str) -> Value {
        match column_id {
            "name" => Value::from(self.name),
            "aum" => Value::from(self.aum),
            "status" => Value::from(self.status),
            "tier" => Value::from(self.tier),
            "advisor" => Value::from(self.advisor),
            "risk" => Value::from(self.risk),
            "cash" => Value::from(self.cash),
            _ => Value::Null,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn household(
    id: u32,
    name: &'static str,
    aum: Option<i64>,
    status: &'static str,
    tier: &'static str,
    advisor: &'static str,
    risk: i64,
    cash: f64,
) -> Household {
    Household {
        id,
        name,
        aum,
        status,
        tier,
        advisor,
        risk,
        cash,
    }
}

/// Eight households; Garcia has no AUM on record.
pub fn households() -> Vec<Household> {
    vec![
        household(1, "Adams", Some(150_000_000), "Active", "Gold", "Sarah Chen", 3, 5.0),
        household(2, "Baker", Some(2_500_000), "Onboarding", "Silver", "Mark Ruiz", 6, 12.0),
        household(3, "Chen", Some(800_000), "Active", "Platinum", "Sarah Chen", 2, 15.5),
        household(4, "Diaz", Some(50_000_000), "At Risk", "Gold", "Mark Ruiz", 8, 2.0),
        household(5, "Evans", Some(1_000_000), "Review Needed", "Bronze", "Ann Lee", 5, 11.0),
        household(6, "Foster", Some(300_000_000), "Active", "Platinum", "Ann Lee", 4, 8.0),
        household(7, "Garcia", None, "Active", "Silver", "Mark Ruiz", 7, 20.0),
        household(8, "Hughes", Some(12_000_000), "Onboarding", "Gold", "Sarah Chen", 1, 9.0),
    ]
}

pub fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("name", "Household").searchable().always_visible(),
        ColumnSpec::new("aum", "AUM")
            .filter(FilterType::Range)
            .align(Alignment::Right),
        ColumnSpec::new("status", "Status")
            .filter(FilterType::MultiSelect)
            .options(["Active", "Onboarding", "At Risk", "Review Needed"].map(FilterOption::labeled)),
        ColumnSpec::new("tier", "Service Tier")
            .filter(FilterType::Select)
            .options(["Platinum", "Gold", "Silver", "Bronze"].map(FilterOption::labeled)),
        ColumnSpec::new("advisor", "Primary Advisor")
            .searchable()
            .sortable(false),
        ColumnSpec::new("risk", "Risk Score"),
        ColumnSpec::new("cash", "Cash %")
            .align(Alignment::Right)
            .cell(|v| format!("{}%", v)),
    ]
}

/// A config with every feature switched on.
pub fn full_config() -> TableConfig<Household> {
    TableConfig::default()
        .with_row_selection(true)
        .with_global_search(true)
        .with_column_visibility(true)
        .with_pagination(true)
        .with_advanced_filters(true)
}

pub fn table(config: TableConfig<Household>) -> DataTable<Household> {
    DataTable::new(columns(), households(), config).expect("valid config")
}

pub fn names(rows: &[&Household]) -> Vec<&'static str> {
    rows.iter().map(|row| row.name).collect()
}

/// Collects callback payloads for assertions.
#[derive(Clone, Default)]
pub struct Recorder<E> {
    events: Arc<Mutex<Vec<E>>>,
}

impl<E: Clone + Send + 'static> Recorder<E> {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push(&self, event: E) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<E> {
        self.events.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}
