use std::path::Path;

use crate::cli::commands::{Cli, Commands, PushArgs};
use crate::cli::output::{ClearedJson, StackJson, TaskJson, TopJson};
use crate::io::store;
use crate::model::Stack;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let store_path = cli.store.unwrap_or_else(store::store_path);

    match cli.command {
        None => {
            // No subcommand is handled in main.rs (launches the TUI)
            Ok(())
        }
        Some(cmd) => match cmd {
            Commands::Push(args) => cmd_push(&store_path, args, json),
            Commands::Pop => cmd_pop(&store_path, json),
            Commands::Peek => cmd_peek(&store_path, json),
            Commands::List => cmd_list(&store_path, json),
            Commands::Clear => cmd_clear(&store_path, json),
        },
    }
}

fn load_stack(store_path: &Path) -> Stack {
    Stack::new(store::load_tasks_from(store_path))
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_push(
    store_path: &Path,
    args: PushArgs,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = args.text.join(" ");
    let mut stack = load_stack(store_path);
    if !stack.push_text(&text) {
        // Whitespace-only input: nothing to do, nothing to write
        return Ok(());
    }
    store::save_tasks_to(store_path, stack.tasks())?;

    if let Some(top) = stack.peek() {
        if json {
            let out = TopJson {
                task: Some(TaskJson::from(top)),
                size: stack.len(),
            };
            println!("{}", serde_json::to_string_pretty(&out)?);
        } else {
            println!("pushed: {} (stack size {})", top.text, stack.len());
        }
    }
    Ok(())
}

fn cmd_pop(store_path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut stack = load_stack(store_path);
    match stack.pop() {
        Some(task) => {
            store::save_tasks_to(store_path, stack.tasks())?;
            if json {
                let out = TopJson {
                    task: Some(TaskJson::from(&task)),
                    size: stack.len(),
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("popped: {} (stack size {})", task.text, stack.len());
            }
        }
        None => print_empty(json)?,
    }
    Ok(())
}

fn cmd_peek(store_path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let stack = load_stack(store_path);
    match stack.peek() {
        Some(task) => {
            if json {
                let out = TopJson {
                    task: Some(TaskJson::from(task)),
                    size: stack.len(),
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}  (added {})", task.text, task.timestamp);
            }
        }
        None => print_empty(json)?,
    }
    Ok(())
}

fn cmd_list(store_path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let stack = load_stack(store_path);
    if json {
        let out = StackJson {
            size: stack.len(),
            tasks: stack.tasks().iter().map(TaskJson::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    if stack.is_empty() {
        println!("stack is empty");
        return Ok(());
    }
    println!("stack size {}", stack.len());
    for (i, task) in stack.tasks().iter().enumerate() {
        let marker = if i == 0 { ">" } else { " " };
        println!(
            "{} {:>3}  {}  (added {})",
            marker, i, task.text, task.timestamp
        );
    }
    Ok(())
}

fn cmd_clear(store_path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut stack = load_stack(store_path);
    let cleared = stack.len();
    stack.clear();
    store::save_tasks_to(store_path, stack.tasks())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ClearedJson { cleared })?);
    } else {
        println!("cleared {} tasks", cleared);
    }
    Ok(())
}

fn print_empty(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let out = TopJson {
            task: None,
            size: 0,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("stack is empty");
    }
    Ok(())
}
