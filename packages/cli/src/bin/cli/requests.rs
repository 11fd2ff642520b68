use clap::Subcommand;
use colored::*;
use labtrack_cli::changes::RequestChanges;
use labtrack_cli::render::{flow_entries, requests_table};
use labtrack_requests::{
    dashboard_rows, render_flow, NewTestRequest, Priority, ProcessStep, RequestRepository,
    RequestStatus, Role, StepState, TestRequest,
};

#[derive(Subcommand)]
pub enum RequestsCommands {
    /// List requests visible to a role
    List {
        /// Role to view as (sales, reception, tester, manager, customer)
        #[arg(short, long, default_value = "manager")]
        role: Role,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show request details and its process flow
    Show {
        /// Request ID to show
        id: String,
    },
    /// Submit a new test request
    Submit {
        #[arg(long)]
        customer_id: String,
        #[arg(long)]
        customer_name: String,
        /// Item name
        #[arg(long)]
        item: String,
        /// Item description
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "1")]
        quantity: u32,
        #[arg(long, default_value = "medium")]
        priority: Priority,
    },
    /// Edit an existing request
    Update {
        /// Request ID to edit
        id: String,
        #[arg(long)]
        status: Option<RequestStatus>,
        #[arg(long)]
        priority: Option<Priority>,
        #[arg(long)]
        quantity: Option<u32>,
        /// Process step; also sets the matching status unless --status is given
        #[arg(long)]
        step: Option<ProcessStep>,
        /// Item name
        #[arg(long)]
        item: Option<String>,
        /// Item description
        #[arg(long)]
        description: Option<String>,
    },
    /// Move a request to the next process step
    Advance {
        /// Request ID to advance
        id: String,
    },
}

pub async fn handle_requests_command(
    repo: &RequestRepository,
    command: RequestsCommands,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        RequestsCommands::List { role, json } => list_requests(repo, role, json).await,
        RequestsCommands::Show { id } => show_request(repo, &id).await,
        RequestsCommands::Submit {
            customer_id,
            customer_name,
            item,
            description,
            quantity,
            priority,
        } => {
            let data = NewTestRequest {
                customer_id,
                customer_name,
                item_name: item,
                item_description: description,
                quantity,
                priority,
            };
            submit_request(repo, data).await
        }
        RequestsCommands::Update {
            id,
            status,
            priority,
            quantity,
            step,
            item,
            description,
        } => {
            let changes = RequestChanges {
                status,
                priority,
                quantity,
                step,
                item,
                description,
            };
            update_request(repo, &id, changes).await
        }
        RequestsCommands::Advance { id } => advance_request(repo, &id).await,
    }
}

async fn list_requests(
    repo: &RequestRepository,
    role: Role,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let requests = repo.list_all().await?;
    let rows = dashboard_rows(role, &requests);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("{}", format!("No requests visible to {}", role).yellow());
        println!("{}", "Use 'labtrack requests submit' to create one".dimmed());
        return Ok(());
    }

    println!("{}", format!("Test Requests ({} view)", role).blue().bold());
    println!();
    println!("{}", requests_table(&rows));
    println!("Total: {} requests", rows.len().to_string().cyan());

    Ok(())
}

async fn show_request(repo: &RequestRepository, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    match repo.get_by_id(id).await? {
        Some(request) => {
            println!("{}", format!("Test Request - {}", request.id).blue().bold());
            println!();
            print_request_details(&request);
            println!();
            print_flow(request.current_step);
            Ok(())
        }
        None => {
            eprintln!("{}", format!("Test request '{}' not found", id).red());
            Err("Test request not found".into())
        }
    }
}

async fn submit_request(
    repo: &RequestRepository,
    data: NewTestRequest,
) -> Result<(), Box<dyn std::error::Error>> {
    let created = repo.insert(data).await?;
    println!(
        "{}",
        format!("Test request '{}' submitted", created.item_name).green()
    );
    println!("ID: {}", created.id.cyan());
    Ok(())
}

async fn update_request(
    repo: &RequestRepository,
    id: &str,
    changes: RequestChanges,
) -> Result<(), Box<dyn std::error::Error>> {
    if changes.is_empty() {
        println!("{}", "Nothing to update".yellow());
        return Ok(());
    }

    let Some(mut request) = repo.get_by_id(id).await? else {
        eprintln!("{}", format!("Test request '{}' not found", id).red());
        return Err("Test request not found".into());
    };

    changes.apply(&mut request);
    let updated = repo.update(request).await?.into_result()?;

    println!("{}", format!("Test request '{}' updated", updated.id).green());
    print_request_details(&updated);
    Ok(())
}

async fn advance_request(
    repo: &RequestRepository,
    id: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(request) = repo.advance(id).await? else {
        eprintln!("{}", format!("Test request '{}' not found", id).red());
        return Err("Test request not found".into());
    };

    println!(
        "{}",
        format!("{} is now at {}", request.id, request.current_step.label()).green()
    );
    print_flow(request.current_step);
    Ok(())
}

fn print_request_details(request: &TestRequest) {
    println!("{:<15} {}", "ID:".cyan(), request.id);
    println!(
        "{:<15} {} ({})",
        "Customer:".cyan(),
        request.customer_name,
        request.customer_id
    );
    println!("{:<15} {}", "Item:".cyan(), request.item_name);
    if !request.item_description.is_empty() {
        println!("{:<15} {}", "Description:".cyan(), request.item_description);
    }
    println!("{:<15} {}", "Quantity:".cyan(), request.quantity);

    let priority_colored = match request.priority {
        Priority::High => "high".red(),
        Priority::Medium => "medium".yellow(),
        Priority::Low => "low".green(),
    };
    println!("{:<15} {}", "Priority:".cyan(), priority_colored);
    println!("{:<15} {}", "Status:".cyan(), request.status);
    println!("{:<15} {}", "Step:".cyan(), request.current_step.label());
    println!(
        "{:<15} {}",
        "Created:".cyan(),
        request.created_at.format("%Y-%m-%d %H:%M")
    );
    println!(
        "{:<15} {}",
        "Updated:".cyan(),
        request.updated_at.format("%Y-%m-%d %H:%M")
    );
}

fn print_flow(current: ProcessStep) {
    println!("{}", "Process Flow".blue().bold());

    for (state, line) in flow_entries(&render_flow(current)) {
        let styled = match state {
            StepState::Completed => line.green(),
            StepState::Current => line.cyan().bold(),
            StepState::Pending => line.dimmed(),
        };
        println!("{}", styled);
    }
}
