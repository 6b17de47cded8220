use anyhow::Result;
use chrono::Utc;
use owo_colors::OwoColorize;
use todo_core::dto::ToDoListDto;
use todo_core::service::CrudService;
use todo_core::validation::Validate;

use crate::cli::{AddListCommand, EditListCommand, ListCommand, ListSubcommand, LsListCommand};
use crate::commands::App;
use crate::util::{confirm_deletion, resolve_user};
use crate::views::table::{display_lists, display_smart_counts, display_tasks};

pub async fn list_command(app: &App, command: ListCommand) -> Result<()> {
    match command.command {
        ListSubcommand::Add(add) => add_list(app, add).await,
        ListSubcommand::Ls(ls) => list_lists(app, ls).await,
        ListSubcommand::Show(show) => {
            let list = app.lists.get_by_id(show.id).await?;
            if show.json {
                println!("{}", serde_json::to_string_pretty(&list)?);
            } else {
                display_lists(std::slice::from_ref(&list));
                display_tasks(&list.tasks);
            }
            Ok(())
        }
        ListSubcommand::Edit(edit) => edit_list(app, edit).await,
        ListSubcommand::Delete(delete) => {
            let list = app.lists.get_by_id(delete.id).await?;
            if confirm_deletion(
                delete.force,
                &format!("list '{}' and its {} tasks", list.name, list.number_of_tasks),
            ) {
                app.lists.delete(delete.id).await?;
                println!("List deleted successfully.");
            }
            Ok(())
        }
        ListSubcommand::Copy(arg) => {
            let new_id = app.lists.copy(arg.id).await?;
            let copy = app.lists.get_by_id(new_id).await?;
            println!(
                "{} Copied list into '{}' (id {}) with {} tasks",
                "✓".green(),
                copy.name.bold(),
                copy.id,
                copy.number_of_tasks
            );
            Ok(())
        }
        ListSubcommand::Hide(arg) => {
            app.lists.change_visibility(arg.id, false).await?;
            println!("List {} is now hidden.", arg.id);
            Ok(())
        }
        ListSubcommand::Unhide(arg) => {
            app.lists.change_visibility(arg.id, true).await?;
            println!("List {} is now visible.", arg.id);
            Ok(())
        }
    }
}

async fn add_list(app: &App, command: AddListCommand) -> Result<()> {
    let user = resolve_user(app, command.user.as_deref()).await?;

    let dto = ToDoListDto {
        name: command.name,
        description: command.description,
        creation_date: Utc::now(),
        user_id: user.map(|u| u.id),
        ..Default::default()
    };
    dto.validate()?;

    let id = app.lists.add(Some(dto.clone())).await?;
    println!("{} Added list '{}' (id {})", "✓".green(), dto.name.bold(), id);
    Ok(())
}

async fn list_lists(app: &App, command: LsListCommand) -> Result<()> {
    let user = resolve_user(app, command.user.as_deref()).await?;

    let lists = match &user {
        Some(user) => app.lists.get_all_for_user(user.id).await?,
        None => app.lists.get_all().await?,
    };
    let lists: Vec<ToDoListDto> = lists
        .into_iter()
        .filter(|list| command.all || !list.is_hidden)
        .collect();

    if let Some(user) = user {
        display_smart_counts(&app.lists.smart_list_counts(user.id).await?);
    }
    display_lists(&lists);
    Ok(())
}

async fn edit_list(app: &App, command: EditListCommand) -> Result<()> {
    let mut list = app.lists.get_by_id(command.id).await?;
    if let Some(name) = command.name {
        list.name = name;
    }
    if let Some(description) = command.description {
        list.description = description;
    }
    list.validate()?;

    app.lists.update(command.id, Some(list)).await?;
    println!("List {} updated.", command.id);
    Ok(())
}
