//! Main entry point for the deskpad terminal front-end.
//! Wires the widget core to real storage, real time, and stdin prompts.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use deskpad::app::{Action, App, ConfirmDialog, ContactAction, TodoAction};
use deskpad::domain::ContactField;
use deskpad::infra::app_config::{AppConfig, load_config, save_config};
use deskpad::infra::storage::{KeyValueStorage, MemoryStorage, SqliteStorage};
use deskpad::render::{ContactView, ListView, TodoView, ViewModel};

#[derive(Parser, Debug)]
#[command(name = "deskpad")]
#[command(version)]
#[command(about = "A contact-message inbox and a todo list for your desk", long_about = None)]
struct Args {
    /// Path to the sqlite store (defaults to the platform data dir)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Keep records in memory only; nothing is persisted
    #[arg(long)]
    memory: bool,

    /// Remember the --db path in the config file for future runs
    #[arg(long, requires = "db")]
    save_config: bool,
}

/// Blocking yes/no prompt on the controlling terminal.
struct TerminalDialog;

impl ConfirmDialog for TerminalDialog {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{prompt} [y/N] ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        if io::stdin().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim(), "y" | "Y" | "yes" | "Yes")
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.save_config {
        if let Some(path) = &args.db {
            save_config(&AppConfig {
                db_path: Some(path.display().to_string()),
            })
            .context("Failed to save the config file")?;
        }
    }

    let storage: Arc<dyn KeyValueStorage> = if args.memory {
        Arc::new(MemoryStorage::new())
    } else {
        let config = load_config();
        let storage = match args.db.or(config.db_path.map(PathBuf::from)) {
            Some(path) => SqliteStorage::open_at(path),
            None => SqliteStorage::open(),
        }
        .context("Failed to open the deskpad store")?;
        Arc::new(storage)
    };

    let mut app = App::new(storage, Box::new(TerminalDialog));
    run_loop(&mut app)
}

fn run_loop(app: &mut App) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("deskpad (type 'help' for commands, 'quit' to leave)");

    loop {
        app.tick(Instant::now());
        let view = app.view();

        if let Some(alert) = &view.storage_alert {
            println!();
            println!("!! {alert}");
            println!("Press Enter to continue.");
            let _ = lines.next();
            app.dispatch(
                Action::Contact(ContactAction::DismissStorageAlert),
                Instant::now(),
            );
            continue;
        }

        print_view(&view);
        print!("deskpad> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let input = line.trim();

        match input {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                print_help();
                continue;
            }
            "wait" => {
                settle_timers(app);
                continue;
            }
            _ => {}
        }

        match parse_command(input) {
            Ok(actions) => {
                let now = Instant::now();
                for action in actions {
                    app.dispatch(action, now);
                }
            }
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}

/// Sleep through every pending timer so debounced work settles. Useful for
/// watching a validation or search land without typing anything else.
fn settle_timers(app: &mut App) {
    while let Some(deadline) = app.next_deadline() {
        let now = Instant::now();
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        app.tick(Instant::now());
    }
}

fn parse_command(input: &str) -> Result<Vec<Action>, String> {
    let (head, rest) = split_word(input);
    match head {
        "msg" => parse_contact(rest),
        "todo" => parse_todo(rest),
        _ => Err(format!("Unknown command: {head}. Type 'help' for the list.")),
    }
}

fn parse_contact(input: &str) -> Result<Vec<Action>, String> {
    let (verb, rest) = split_word(input);
    let actions = match verb {
        "name" => vec![field_changed(ContactField::Name, rest)],
        "email" => vec![field_changed(ContactField::Email, rest)],
        "body" => vec![field_changed(ContactField::Message, rest)],
        "send" => vec![Action::Contact(ContactAction::Submit)],
        "rm" => vec![Action::Contact(ContactAction::DeleteRequested(parse_id(
            rest,
        )?))],
        _ => return Err(format!("Unknown msg command: {verb}")),
    };
    Ok(actions)
}

fn parse_todo(input: &str) -> Result<Vec<Action>, String> {
    let (verb, rest) = split_word(input);
    let actions = match verb {
        "add" => vec![
            Action::Todo(TodoAction::InputChanged(rest.to_string())),
            Action::Todo(TodoAction::Add),
        ],
        "toggle" => vec![Action::Todo(TodoAction::Toggle(parse_id(rest)?))],
        "rm" => vec![Action::Todo(TodoAction::DeleteRequested(parse_id(rest)?))],
        "search" => vec![Action::Todo(TodoAction::SearchChanged(rest.to_string()))],
        "filter" => {
            let filter = rest.parse()?;
            vec![Action::Todo(TodoAction::SetFilter(filter))]
        }
        _ => return Err(format!("Unknown todo command: {verb}")),
    };
    Ok(actions)
}

fn field_changed(field: ContactField, value: &str) -> Action {
    Action::Contact(ContactAction::FieldChanged {
        field,
        value: value.to_string(),
    })
}

fn parse_id(input: &str) -> Result<i64, String> {
    input
        .trim()
        .parse()
        .map_err(|_| format!("Not a record id: {input}"))
}

fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim_start()),
        None => (input, ""),
    }
}

fn print_view(view: &ViewModel) {
    println!();
    print_contact(&view.contact);
    println!();
    print_todos(&view.todos);
    println!();
}

fn print_contact(contact: &ContactView) {
    println!("=== Contact ===");
    if let Some(notice) = &contact.success_notice {
        println!("* {notice}");
    }
    print_field("Name:", &contact.name_draft, contact.name_error.as_deref());
    print_field("Email:", &contact.email_draft, contact.email_error.as_deref());
    print_field(
        "Message:",
        &contact.message_draft,
        contact.message_error.as_deref(),
    );

    println!("Inbox ({})", contact.message_count);
    match &contact.list {
        ListView::Empty { placeholder } | ListView::NoMatches { placeholder } => {
            println!("  {placeholder}");
        }
        ListView::Items(items) => {
            for item in items {
                println!("  [{}] From: {} ({})", item.id, item.from, item.email);
                println!("      {}", item.body);
                println!("      Sent: {}", item.sent_at);
            }
        }
    }
}

fn print_field(label: &str, draft: &str, error: Option<&str>) {
    match error {
        Some(err) => println!("{label:<8} {draft}  !! {err}"),
        None => println!("{label:<8} {draft}"),
    }
}

fn print_todos(todos: &TodoView) {
    println!(
        "=== Todos ({} total, {} completed) ===",
        todos.stats.total, todos.stats.completed
    );
    println!(
        "Filter: {}   Search: {}",
        todos.filter, todos.search_draft
    );
    match &todos.list {
        ListView::Empty { placeholder } | ListView::NoMatches { placeholder } => {
            println!("  {placeholder}");
        }
        ListView::Items(items) => {
            for item in items {
                let mark = if item.completed { "x" } else { " " };
                let flash = if item.completing { " ~" } else { "" };
                println!(
                    "  [{}] [{mark}] {}  ({}){flash}",
                    item.id, item.text, item.created_at
                );
            }
        }
    }
}

fn print_help() {
    println!("Contact form:");
    println!("  msg name <text>      edit the name field");
    println!("  msg email <text>     edit the email field");
    println!("  msg body <text>      edit the message field");
    println!("  msg send             submit the form");
    println!("  msg rm <id>          delete a message (asks first)");
    println!("Todos:");
    println!("  todo add <text>      add a todo");
    println!("  todo toggle <id>     complete / reopen a todo");
    println!("  todo rm <id>         delete a todo (asks first)");
    println!("  todo search <text>   filter by substring (debounced)");
    println!("  todo filter <all|active|completed>");
    println!("Other:");
    println!("  wait                 let pending timers settle");
    println!("  help, quit");
}
