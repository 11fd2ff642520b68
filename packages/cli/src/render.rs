// ABOUTME: Table and text rendering for CLI output
// ABOUTME: Builds comfy-table tables from projections and quotes; coloring stays in the binary

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use labtrack_core::{format_date, truncate};
use labtrack_quotes::ProductQuote;
use labtrack_requests::{Assignment, AssignmentStatus, DashboardRow, StepState, StepView};

pub fn styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

pub fn requests_table(rows: &[DashboardRow]) -> Table {
    let mut table = styled_table();
    table.set_header(vec!["ID", "Customer", "Item", "Priority", "Status", "Step", "Date"]);

    for row in rows {
        table.add_row(vec![
            row.id.clone(),
            truncate(&row.customer, 25),
            truncate(&row.item, 30),
            row.priority.to_string(),
            row.status.to_string(),
            row.current_step.label().to_string(),
            row.date.clone(),
        ]);
    }
    table
}

pub fn assignment_status_label(status: AssignmentStatus) -> &'static str {
    match status {
        AssignmentStatus::Pending => "pending",
        AssignmentStatus::InProgress => "in progress",
    }
}

pub fn assignments_table(rows: &[Assignment]) -> Table {
    let mut table = styled_table();
    table.set_header(vec![
        "Item", "Barcode", "Request", "Name", "Customer", "Priority", "Status", "Tester", "Due",
    ]);

    for row in rows {
        table.add_row(vec![
            row.id.clone(),
            row.barcode.clone(),
            row.request_id.clone(),
            truncate(&row.name, 30),
            truncate(&row.customer_name, 25),
            row.priority.to_string(),
            assignment_status_label(row.status).to_string(),
            row.assigned_tester_id.clone(),
            row.due_date.format("%Y-%m-%d").to_string(),
        ]);
    }
    table
}

pub fn quotes_table(quotes: &[&ProductQuote]) -> Table {
    let mut table = styled_table();
    table.set_header(vec!["ID", "Customer", "Items", "Total", "Status", "Valid Until"]);

    for quote in quotes {
        table.add_row(vec![
            quote.id.clone(),
            truncate(&quote.customer_name, 25),
            quote.items.len().to_string(),
            format_money(quote.total),
            quote.status.to_string(),
            format_date(&quote.valid_until),
        ]);
    }
    table
}

pub fn quote_items_table(quote: &ProductQuote) -> Table {
    let mut table = styled_table();
    table.set_header(vec!["Item", "Unit Price", "Qty", "Discount", "Total"]);

    for item in &quote.items {
        table.add_row(vec![
            truncate(&item.name, 35),
            format_money(item.unit_price),
            item.quantity.to_string(),
            item.discount
                .map(|d| format!("{}%", d))
                .unwrap_or_else(|| "-".to_string()),
            format_money(item.total),
        ]);
    }
    table
}

fn flow_step_line(position: usize, view: &StepView) -> String {
    let marker = match view.state {
        StepState::Completed => "[x]",
        StepState::Current => "[>]",
        StepState::Pending => "[ ]",
    };
    format!("{} {}. {}", marker, position, view.label)
}

fn flow_connector_line(completed: bool) -> &'static str {
    if completed {
        " |"
    } else {
        " :"
    }
}

/// Flow lines tagged with the state the binary colors them by.
/// Connectors carry `Completed` or `Pending`.
pub fn flow_entries(flow: &[StepView]) -> Vec<(StepState, String)> {
    let mut entries = Vec::with_capacity(flow.len() * 2);
    for (index, view) in flow.iter().enumerate() {
        entries.push((view.state, flow_step_line(index + 1, view)));
        if let Some(completed) = view.connector_completed {
            let state = if completed {
                StepState::Completed
            } else {
                StepState::Pending
            };
            entries.push((state, flow_connector_line(completed).to_string()));
        }
    }
    entries
}

/// One line per step, with a connector line between consecutive steps
pub fn flow_lines(flow: &[StepView]) -> Vec<String> {
    flow_entries(flow).into_iter().map(|(_, line)| line).collect()
}

/// `$` amount with thousands separators and two decimals
pub fn format_money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}
