use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{CommandContext, print_json};
use crate::error::Result;
use crate::types::{StatusCounts, TicketStatus};

/// A row in the dashboard table
#[derive(Tabled)]
struct CountRow {
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Tickets")]
    count: usize,
}

fn rows(counts: &StatusCounts) -> Vec<CountRow> {
    let mut rows: Vec<CountRow> = TicketStatus::all()
        .iter()
        .map(|&status| CountRow {
            status: status.label().to_string(),
            count: match status {
                TicketStatus::Open => counts.open,
                TicketStatus::InProgress => counts.in_progress,
                TicketStatus::Closed => counts.closed,
            },
        })
        .collect();
    rows.push(CountRow {
        status: "total".to_string(),
        count: counts.total(),
    });
    rows
}

/// Ticket counts per status plus total
pub async fn cmd_dashboard(output_json: bool) -> Result<()> {
    let ctx = CommandContext::load()?;
    ctx.require_session()?;

    let tickets = ctx.service().fetch_all().await;
    let counts = StatusCounts::from_tickets(&tickets);

    if output_json {
        return print_json(&serde_json::json!({
            "open": counts.open,
            "in_progress": counts.in_progress,
            "closed": counts.closed,
            "total": counts.total(),
        }));
    }

    let mut table = Table::new(rows(&counts));
    table.with(Style::rounded());
    println!("{table}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_end_with_total() {
        let counts = StatusCounts {
            open: 2,
            in_progress: 1,
            closed: 0,
        };
        let rows = rows(&counts);
        let summary: Vec<(&str, usize)> = rows.iter().map(|r| (r.status.as_str(), r.count)).collect();
        assert_eq!(
            summary,
            vec![("open", 2), ("in progress", 1), ("closed", 0), ("total", 3)]
        );
    }
}
