use colored::*;
use labtrack_cli::render::assignments_table;
use labtrack_core::Clock;
use labtrack_requests::{assignments, RequestRepository, ASSIGNMENT_WINDOW_DAYS};

pub async fn show_assignments(repo: &RequestRepository) -> Result<(), Box<dyn std::error::Error>> {
    let requests = repo.list_all().await?;
    let rows = assignments(&requests, repo.clock().now());

    if rows.is_empty() {
        println!("{}", "No items are waiting for testing".yellow());
        return Ok(());
    }

    println!("{}", "Tester Assignments".blue().bold());
    println!();
    println!("{}", assignments_table(&rows));
    println!(
        "Total: {} items, due within {} days",
        rows.len().to_string().cyan(),
        ASSIGNMENT_WINDOW_DAYS
    );

    Ok(())
}
