//! Simple CLI demo for the task list.
//!
//! Exercises the full public surface the way a rendering layer would:
//! stage and commit input, toggle, delete, switch filters, and re-read
//! the derived view after every mutation.

use tasklist::{Filter, Snapshot, TaskAction, TaskEnvironment, TaskListReducer, TaskListState};
use tasklist_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn render(snapshot: &Snapshot) {
    if let Some(message) = snapshot.empty_message() {
        println!("  ({message})");
    } else {
        for task in &snapshot.visible {
            let status = if task.completed { "✓" } else { " " };
            println!("  [{}] {} ({})", status, task.text, task.created_at_display());
        }
    }
    if let Some(footer) = snapshot.summary.footer() {
        println!("  -- {footer}");
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasklist=debug,tasklist_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Task List Demo ===\n");

    // Create environment and store
    let env = TaskEnvironment::production();
    let store = Store::new(TaskListState::new(), TaskListReducer::new(), env);

    // Stage and commit a task the way the input box does
    println!("Typing and committing 'Buy milk'...");
    store
        .send(TaskAction::SetPending {
            text: "  Buy milk  ".to_string(),
        })
        .await;
    store.send(TaskAction::Commit).await;

    // Add two more directly
    store
        .send(TaskAction::Add {
            text: "Walk dog".to_string(),
        })
        .await;
    store
        .send(TaskAction::Add {
            text: "Write documentation".to_string(),
        })
        .await;

    let snapshot = store.state(Snapshot::of).await;
    println!("\nTasks created: {}", snapshot.summary.total);
    render(&snapshot);

    // Complete the first task
    println!("\nCompleting 'Buy milk'...");
    if let Some(id) = store.state(|s| s.tasks.first().map(|t| t.id.clone())).await {
        store.send(TaskAction::Toggle { id }).await;
    }

    // Walk through each filter
    for filter in Filter::VARIANTS {
        store.send(TaskAction::SetFilter { filter }).await;
        let snapshot = store.state(Snapshot::of).await;
        println!("\nFilter '{filter}':");
        render(&snapshot);
    }

    // Delete the last task
    println!("\nDeleting 'Write documentation'...");
    if let Some(id) = store.state(|s| s.tasks.last().map(|t| t.id.clone())).await {
        store.send(TaskAction::Delete { id }).await;
    }
    store
        .send(TaskAction::SetFilter {
            filter: Filter::All,
        })
        .await;

    let snapshot = store.state(Snapshot::of).await;
    println!("\nFinal tasks: {}", snapshot.summary.total);
    render(&snapshot);

    println!("\n=== Demo Complete ===");
}
