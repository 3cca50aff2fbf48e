use anyhow::Result;
use clap::{Parser, Subcommand};
use shared::domain::StoredContactMessage;
use storage::Storage;

/// Reads the contact messages stored by the server.
#[derive(Parser, Debug)]
struct Cli {
    #[arg(long, default_value = "sqlite://./data/portfolio.db")]
    database_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Newest messages first.
    List {
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    Count,
}

fn print_message(row: &StoredContactMessage) {
    println!(
        "#{} {} <{}> {}",
        row.id.0,
        row.name,
        row.email,
        row.created_at.to_rfc3339()
    );
    for line in row.message.lines() {
        println!("    {line}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let storage = Storage::new(&cli.database_url).await?;

    match cli.command {
        Command::List { limit } => {
            let rows = storage.list_contact_messages(limit).await?;
            if rows.is_empty() {
                println!("no messages");
            }
            for row in &rows {
                print_message(row);
            }
        }
        Command::Count => {
            let count = storage.count_contact_messages().await?;
            println!("messages={count}");
        }
    }

    storage.close().await;
    Ok(())
}
