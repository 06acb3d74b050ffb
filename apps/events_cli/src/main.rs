use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use client_core::{EventsApi, RemoteEventsClient, DEFAULT_EVENTS_URL};
use serde::Serialize;
use shared::domain::{EventDraft, EventId};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "events", about = "Manage events on a REST events resource")]
struct Args {
    /// Base URL of the events resource.
    #[arg(long, global = true, env = "EVENTS_BASE_URL", default_value = DEFAULT_EVENTS_URL)]
    base_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// List all events in server order.
    List,
    /// Create an event; the server assigns its id.
    Create(DraftArgs),
    /// Replace the fields of an existing event.
    Update {
        id: String,
        #[command(flatten)]
        draft: DraftArgs,
    },
    /// Delete an event by id.
    Delete { id: String },
}

#[derive(ClapArgs, Debug, PartialEq, Eq)]
struct DraftArgs {
    #[arg(long)]
    name: String,
    /// Start date, `YYYY-MM-DD`.
    #[arg(long)]
    start: String,
    /// End date, `YYYY-MM-DD`.
    #[arg(long)]
    end: String,
}

impl DraftArgs {
    fn into_draft(self) -> Result<EventDraft> {
        let draft = EventDraft::new(self.name, self.start, self.end);
        draft.validate()?;
        Ok(draft)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let client = RemoteEventsClient::new(&args.base_url).context("invalid --base-url")?;
    tracing::debug!(base_url = %client.base_url(), command = ?args.command, "running command");
    run(&client, args.command).await
}

async fn run(api: &dyn EventsApi, command: Command) -> Result<()> {
    match command {
        Command::List => print_json(&api.list_events().await.context("failed to list events")?),
        Command::Create(draft) => {
            let draft = draft.into_draft()?;
            print_json(&api.create_event(&draft).await.context("failed to create event")?)
        }
        Command::Update { id, draft } => {
            let draft = draft.into_draft()?;
            let event = api
                .update_event(&EventId(id), &draft)
                .await
                .context("failed to update event")?;
            print_json(&event)
        }
        Command::Delete { id } => {
            let body = api
                .delete_event(&EventId(id))
                .await
                .context("failed to delete event")?;
            print_json(&body)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
