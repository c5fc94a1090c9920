//! Sample household data and the household table configuration.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use datatable_lib::action::{ActionItem, BulkAction, NewItemAction, RowAction};
use datatable_lib::column::{Alignment, ColumnSpec, FilterOption, FilterType};
use datatable_lib::filter::{FilterChip, Tab};
use datatable_lib::model::{TableRow, Value};
use datatable_lib::table::TableConfig;

/// A client household.
#[derive(Debug, Clone)]
pub struct Household {
    pub id: String,
    pub name: String,
    pub aum: Decimal,
    pub status: &'static str,
    pub risk_score: u32,
    pub investment_model: &'static str,
    pub custodian: &'static str,
    pub fin_plan: &'static str,
    pub primary_advisor: &'static str,
    pub next_review: Option<NaiveDate>,
    pub service_tier: &'static str,
    pub ytd_perf: f64,
    pub unrealized_gl: Decimal,
    pub cash_percent: f64,
}

impl TableRow for Household {
    type Key = String;

    fn key(&self) -> String {
        self.id.clone()
    }

    fn value(&self, column_id: &str) -> Value {
        match column_id {
            "name" => Value::from(self.name.as_str()),
            "aum" => Value::from(self.aum),
            "status" => Value::from(self.status),
            "riskScore" => Value::from(self.risk_score),
            "investmentModel" => Value::from(self.investment_model),
            "custodian" => Value::from(self.custodian),
            "finPlan" => Value::from(self.fin_plan),
            "primaryAdvisor" => Value::from(self.primary_advisor),
            "nextReview" => Value::from(self.next_review),
            "serviceTier" => Value::from(self.service_tier),
            "ytdPerf" => Value::from(self.ytd_perf),
            "unrealizedGL" => Value::from(self.unrealized_gl),
            "cashPercent" => Value::from(self.cash_percent),
            _ => Value::Null,
        }
    }
}

const MODELS: [&str; 4] = ["Growth", "Balanced", "Income", "Conservative"];
const CUSTODIANS: [&str; 3] = ["Schwab", "Fidelity", "Pershing"];
const ADVISORS: [&str; 3] = ["Sarah Chen", "Marcus Webb", "Priya Patel"];

struct Seed {
    name: &'static str,
    aum: i64,
    status: &'static str,
    risk: u32,
    plan: &'static str,
    review: (i32, u32, u32),
    tier: &'static str,
    ytd: f64,
    gl: i64,
    cash: f64,
}

const SEEDS: [Seed; 12] = [
    Seed { name: "Anderson Family Trust", aum: 245_000_000, status: "Active", risk: 4, plan: "Current", review: (2026, 11, 3), tier: "Platinum", ytd: 8.4, gl: 12_400_000, cash: 3.2 },
    Seed { name: "Brooks Household", aum: 4_800_000, status: "Active", risk: 6, plan: "Needs Update", review: (2026, 10, 28), tier: "Gold", ytd: 11.2, gl: 310_000, cash: 12.5 },
    Seed { name: "Castillo Partners", aum: 87_500_000, status: "Review Needed", risk: 5, plan: "Expired", review: (2026, 10, 20), tier: "Platinum", ytd: -2.1, gl: -1_250_000, cash: 6.8 },
    Seed { name: "Dawson Retirement", aum: 950_000, status: "Onboarding", risk: 2, plan: "In Progress", review: (2027, 1, 15), tier: "Bronze", ytd: 3.9, gl: 18_500, cash: 22.0 },
    Seed { name: "Ellis & Moreno", aum: 12_300_000, status: "At Risk", risk: 8, plan: "None", review: (2026, 12, 1), tier: "Gold", ytd: -6.5, gl: -540_000, cash: 1.4 },
    Seed { name: "Fujimoto Household", aum: 132_000_000, status: "Active", risk: 3, plan: "Current", review: (2027, 2, 9), tier: "Platinum", ytd: 6.7, gl: 8_900_000, cash: 4.1 },
    Seed { name: "Grant Legacy Fund", aum: 1_000_000, status: "Active", risk: 5, plan: "Needs Update", review: (2026, 11, 18), tier: "Silver", ytd: 9.8, gl: 72_000, cash: 15.3 },
    Seed { name: "Hartley Household", aum: 560_000, status: "Onboarding", risk: 7, plan: "In Progress", review: (2027, 3, 2), tier: "Bronze", ytd: 14.6, gl: 41_000, cash: 30.5 },
    Seed { name: "Iverson Foundation", aum: 310_000_000, status: "Active", risk: 2, plan: "Current", review: (2026, 12, 12), tier: "Platinum", ytd: 5.2, gl: 21_700_000, cash: 2.6 },
    Seed { name: "Jensen Household", aum: 2_750_000, status: "Review Needed", risk: 6, plan: "Needs Update", review: (2026, 10, 22), tier: "Silver", ytd: 7.1, gl: 150_000, cash: 9.9 },
    Seed { name: "Kowalski Family", aum: 68_000_000, status: "Active", risk: 4, plan: "Current", review: (2027, 1, 28), tier: "Gold", ytd: 10.3, gl: 4_100_000, cash: 5.5 },
    Seed { name: "Lindqvist Household", aum: 7_400_000, status: "At Risk", risk: 9, plan: "Expired", review: (2026, 11, 7), tier: "Silver", ytd: -11.8, gl: -880_000, cash: 18.2 },
];

/// The sample dataset.
pub fn sample() -> Vec<Household> {
    SEEDS
        .iter()
        .enumerate()
        .map(|(i, seed)| Household {
            id: format!("hh-{:03}", i + 1),
            name: seed.name.to_string(),
            aum: Decimal::from(seed.aum),
            status: seed.status,
            risk_score: seed.risk,
            investment_model: MODELS[i % MODELS.len()],
            custodian: CUSTODIANS[i % CUSTODIANS.len()],
            fin_plan: seed.plan,
            primary_advisor: ADVISORS[i % ADVISORS.len()],
            next_review: NaiveDate::from_ymd_opt(seed.review.0, seed.review.1, seed.review.2),
            service_tier: seed.tier,
            ytd_perf: seed.ytd,
            unrealized_gl: Decimal::from(seed.gl),
            cash_percent: seed.cash,
        })
        .collect()
}

/// Compact dollar amount: `$245.0M`, `$950.0K`.
fn short_currency(value: &Value) -> String {
    let Some(amount) = value.as_f64() else {
        return String::new();
    };
    let sign = if amount < 0.0 { "-" } else { "" };
    let amount = amount.abs();
    if amount >= 1_000_000.0 {
        format!("{}${:.1}M", sign, amount / 1_000_000.0)
    } else if amount >= 1_000.0 {
        format!("{}${:.1}K", sign, amount / 1_000.0)
    } else {
        format!("{}${:.0}", sign, amount)
    }
}

fn signed_percent(value: &Value) -> String {
    match value.as_f64() {
        Some(pct) => format!("{:+.1}%", pct),
        None => String::new(),
    }
}

fn percent(value: &Value) -> String {
    match value.as_f64() {
        Some(pct) => format!("{:.1}%", pct),
        None => String::new(),
    }
}

fn options(values: &[&str]) -> Vec<FilterOption> {
    values.iter().map(|v| FilterOption::labeled(*v)).collect()
}

pub fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("name", "Household")
            .searchable()
            .always_visible(),
        ColumnSpec::new("aum", "AUM")
            .filter(FilterType::Range)
            .align(Alignment::Right)
            .cell(short_currency),
        ColumnSpec::new("status", "Status")
            .filter(FilterType::MultiSelect)
            .options(options(&["Active", "Onboarding", "At Risk", "Review Needed"])),
        ColumnSpec::new("riskScore", "Risk")
            .filter(FilterType::Range)
            .align(Alignment::Center),
        ColumnSpec::new("investmentModel", "Model")
            .label("Investment Model")
            .searchable()
            .filter(FilterType::MultiSelect)
            .options(options(&MODELS))
            .group("Portfolio"),
        ColumnSpec::new("custodian", "Custodian")
            .filter(FilterType::MultiSelect)
            .options(options(&CUSTODIANS))
            .group("Portfolio")
            .hidden_by_default(),
        ColumnSpec::new("finPlan", "Fin. Plan")
            .label("Financial Plan")
            .filter(FilterType::Select)
            .options(options(&["Current", "Needs Update", "None", "Expired", "In Progress"])),
        ColumnSpec::new("primaryAdvisor", "Advisor")
            .label("Primary Advisor")
            .sortable(false)
            .searchable()
            .filter(FilterType::MultiSelect)
            .options(options(&ADVISORS)),
        ColumnSpec::new("nextReview", "Next Review").filter(FilterType::DateRange),
        ColumnSpec::new("serviceTier", "Tier")
            .label("Service Tier")
            .filter(FilterType::MultiSelect)
            .options(options(&["Platinum", "Gold", "Silver", "Bronze"])),
        ColumnSpec::new("ytdPerf", "YTD")
            .align(Alignment::Right)
            .cell(signed_percent)
            .group("Performance"),
        ColumnSpec::new("unrealizedGL", "Unrealized G/L")
            .align(Alignment::Right)
            .cell(short_currency)
            .group("Performance")
            .hidden_by_default(),
        ColumnSpec::new("cashPercent", "Cash %")
            .align(Alignment::Right)
            .cell(percent),
    ]
}

fn hundred_million() -> Decimal {
    Decimal::from(100_000_000)
}

pub fn config() -> TableConfig<Household> {
    TableConfig::default()
        .with_row_selection(true)
        .with_global_search(true)
        .with_column_visibility(true)
        .with_pagination(true)
        .with_advanced_filters(true)
        .with_search_placeholder("Search households...")
        .with_sticky_header(true)
        .with_tabs(vec![
            Tab::new("households", "Client Households").icon("users"),
            Tab::new("aum-100m", "AUM > 100M").filter(|h: &Household| h.aum > hundred_million()),
            Tab::new("aum-lt-100m", "AUM < 100M").filter(|h: &Household| h.aum < hundred_million()),
        ])
        .with_filter_chips(vec![
            FilterChip::new("managed", "Managed Only").active(),
            FilterChip::new("aum-1m", "AUM > $1M")
                .filter(|h: &Household| h.aum > Decimal::from(1_000_000)),
            FilterChip::new("review", "Review Due").column_equals("finPlan", "Needs Update"),
            FilterChip::new("cash", "High Cash").filter(|h: &Household| h.cash_percent > 10.0),
        ])
        .with_row_actions(vec![
            ActionItem::new("view", "View Details", |h: &Household| {
                log::info!("View details for {}", h.name)
            })
            .icon("eye")
            .into(),
            ActionItem::new("edit", "Edit", |h: &Household| log::info!("Edit {}", h.name))
                .icon("pencil")
                .into(),
            RowAction::submenu(
                "contact",
                "Contact",
                [
                    ActionItem::new("email", "Send Email", |h: &Household| {
                        log::info!("Email {}", h.name)
                    }),
                    ActionItem::new("call", "Schedule Call", |h: &Household| {
                        log::info!("Schedule call with {}", h.name)
                    }),
                ],
            ),
            ActionItem::new("documents", "Documents", |h: &Household| {
                log::info!("Open documents for {}", h.name)
            })
            .into(),
            ActionItem::new("schedule", "Schedule Review", |h: &Household| {
                log::info!("Schedule review for {}", h.name)
            })
            .disabled_when(|h: &Household| h.status == "Onboarding")
            .into(),
            ActionItem::new("delete", "Delete", |h: &Household| {
                log::info!("Delete {}", h.name)
            })
            .destructive()
            .into(),
        ])
        .with_bulk_actions(vec![
            BulkAction::new("export", "Export Selected", |rows: &[Household]| {
                log::info!("Export {} households", rows.len())
            }),
            BulkAction::new("assign", "Assign Advisor", |rows: &[Household]| {
                log::info!("Assign advisor to {} households", rows.len())
            }),
            BulkAction::new("delete", "Delete Selected", |rows: &[Household]| {
                log::info!("Delete {} households", rows.len())
            })
            .destructive(),
        ])
        .with_new_item_actions(vec![
            NewItemAction::new("client", "New Client", || log::info!("New client")),
            NewItemAction::new("household", "New Household", || log::info!("New household")),
            NewItemAction::new("account", "New Account", || log::info!("New account")),
        ])
        .on_row_click(|h: &Household| log::info!("Clicked {}", h.name))
        .on_selection_change(|rows: &[Household]| log::debug!("{} households selected", rows.len()))
        .on_sort_change(|sorting| log::debug!("Sorting: {:?}", sorting))
        .on_filter_change(|filters| {
            log::debug!(
                "Filters: tab '{}', {} chips, {} column, {} advanced",
                filters.active_tab,
                filters.active_chips.len(),
                filters.column_filters.len(),
                filters.advanced_filters.len()
            )
        })
        .on_predicate_error(|failure| log::warn!("{}", failure))
        .with_footer(|counts| {
            format!(
                "Total: {} | Selected: {} | Data Updated: {}",
                counts.total,
                counts.selected,
                chrono::Local::now().format("%b %d, %Y")
            )
        })
}
