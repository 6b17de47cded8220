use anyhow::Result;
use owo_colors::OwoColorize;
use todo_core::dto::ToDoTaskDto;

use crate::cli::{ViewCommand, ViewSubcommand};
use crate::commands::App;
use crate::util::{require_user, resolve_user};
use crate::views::table::display_tasks;

pub async fn view_command(app: &App, command: ViewCommand) -> Result<()> {
    let (title, tasks) = match command.command {
        ViewSubcommand::Today(scope) => {
            let tasks = match resolve_user(app, scope.user.as_deref()).await? {
                Some(user) => app.lists.get_all_user_todays_tasks(user.id).await?,
                None => app.tasks.get_tasks_for_today().await?,
            };
            ("Today", tasks)
        }
        ViewSubcommand::Daily(scope) => {
            let tasks = match resolve_user(app, scope.user.as_deref()).await? {
                Some(user) => app.lists.get_all_user_daily_tasks(user.id).await?,
                None => app.tasks.get_daily_tasks().await?,
            };
            ("Daily", tasks)
        }
        ViewSubcommand::Important(scope) => {
            let tasks = match resolve_user(app, scope.user.as_deref()).await? {
                Some(user) => app.lists.get_all_user_important_tasks(user.id).await?,
                None => app.tasks.get_important_tasks().await?,
            };
            ("Important", tasks)
        }
        ViewSubcommand::Completed => ("Completed", app.tasks.get_completed_tasks().await?),
        ViewSubcommand::Uncompleted => ("Uncompleted", app.tasks.get_uncompleted_tasks().await?),
        ViewSubcommand::Reminders(scope) => {
            let user = require_user(app, scope.user.as_deref()).await?;
            (
                "Reminders",
                app.lists.get_all_user_reminder_tasks(user.id).await?,
            )
        }
    };

    print_view(title, &tasks);
    Ok(())
}

fn print_view(title: &str, tasks: &[ToDoTaskDto]) {
    println!("{}", format!("{} ({})", title, tasks.len()).bold());
    display_tasks(tasks);
}
