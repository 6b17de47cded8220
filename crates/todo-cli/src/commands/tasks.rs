use anyhow::Result;
use chrono::{Duration, Utc};
use owo_colors::OwoColorize;
use todo_core::dto::ToDoTaskDto;
use todo_core::service::CrudService;
use todo_core::validation::Validate;

use crate::cli::{AddTaskCommand, EditTaskCommand, TaskCommand, TaskSubcommand, Toggle};
use crate::commands::App;
use crate::parser::parse_date;
use crate::util::confirm_deletion;
use crate::views::table::{display_task_details, display_tasks};

pub async fn task_command(app: &App, command: TaskCommand) -> Result<()> {
    match command.command {
        TaskSubcommand::Add(add) => add_task(app, add).await,
        TaskSubcommand::Ls { list } => {
            let tasks = match list {
                Some(list_id) => app.tasks.get_all_for_list(list_id).await?,
                None => app.tasks.get_all().await?,
            };
            display_tasks(&tasks);
            Ok(())
        }
        TaskSubcommand::Show(show) => {
            let task = app.tasks.get_by_id(show.id).await?;
            if show.json {
                println!("{}", serde_json::to_string_pretty(&task)?);
            } else {
                display_task_details(&task);
            }
            Ok(())
        }
        TaskSubcommand::Edit(edit) => edit_task(app, edit).await,
        TaskSubcommand::Done(arg) => set_completed(app, arg.id, true).await,
        TaskSubcommand::Undo(arg) => set_completed(app, arg.id, false).await,
        TaskSubcommand::Delete(delete) => {
            let task = app.tasks.get_by_id(delete.id).await?;
            if confirm_deletion(delete.force, &format!("task '{}'", task.name)) {
                app.tasks.delete(delete.id).await?;
                println!("Task deleted successfully.");
            }
            Ok(())
        }
        TaskSubcommand::Remind { id, state } => {
            let on = state == Toggle::On;
            app.tasks.turn_on_off_reminder(id, on).await?;
            println!(
                "Reminder for task {} turned {}.",
                id,
                if on { "on" } else { "off" }
            );
            Ok(())
        }
        TaskSubcommand::RemindAt { id, when } => {
            let when = parse_date(&when, Utc::now(), app.timezone)?;
            app.tasks.set_reminder_time(id, when).await?;
            println!("Reminder for task {} set to {}.", id, when.to_rfc2822());
            Ok(())
        }
    }
}

async fn add_task(app: &App, command: AddTaskCommand) -> Result<()> {
    let now = Utc::now();
    let due_date = match command.due.as_deref() {
        Some(due) => parse_date(due, now, app.timezone)?,
        None => now + Duration::days(1),
    };
    let reminder_date = command
        .remind_at
        .as_deref()
        .map(|at| parse_date(at, now, app.timezone))
        .transpose()?;

    let category_id = match command.category.as_deref() {
        Some(name) => Some(app.categories.get_by_name(name).await?.id),
        None => None,
    };
    let priority_id = match command.priority.as_deref() {
        Some(name) => Some(app.priorities.get_by_name(name).await?.id),
        None => None,
    };
    let status_id = match command.status.as_deref() {
        Some(name) => Some(app.statuses.get_by_name(name).await?.id),
        None => None,
    };

    // The list must exist before a task can reference it
    app.lists.get_by_id(command.list).await?;

    let dto = ToDoTaskDto {
        name: command.name,
        description: command.description,
        creation_date: now,
        due_date,
        reminder: reminder_date.is_some(),
        reminder_date: reminder_date.unwrap_or(due_date),
        daily: command.daily,
        important: command.important,
        list_id: command.list,
        category_id,
        priority_id,
        status_id,
        ..Default::default()
    };
    dto.validate()?;

    let id = app.tasks.add(Some(dto.clone())).await?;
    println!(
        "{} Added task '{}' (id {}) due {}",
        "✓".green(),
        dto.name.bold(),
        id,
        dto.due_date.format("%Y-%m-%d %H:%M")
    );
    Ok(())
}

async fn edit_task(app: &App, command: EditTaskCommand) -> Result<()> {
    let mut task = app.tasks.get_by_id(command.id).await?;

    if let Some(name) = command.name {
        task.name = name;
    }
    if let Some(description) = command.description {
        task.description = description;
    }
    if let Some(due) = command.due.as_deref() {
        task.due_date = parse_date(due, Utc::now(), app.timezone)?;
    }
    if let Some(daily) = command.daily {
        task.daily = daily;
    }
    if let Some(important) = command.important {
        task.important = important;
    }
    task.validate()?;

    app.tasks.update(command.id, Some(task)).await?;
    println!("Task {} updated.", command.id);
    Ok(())
}

async fn set_completed(app: &App, id: i64, completed: bool) -> Result<()> {
    let mut task = app.tasks.get_by_id(id).await?;
    task.is_completed = completed;
    app.tasks.update(id, Some(task.clone())).await?;

    if completed {
        println!("Completed task: '{}'", task.name);
    } else {
        println!("Reopened task: '{}'", task.name);
    }
    Ok(())
}
