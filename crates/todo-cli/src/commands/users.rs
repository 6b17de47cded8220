use anyhow::Result;
use owo_colors::OwoColorize;

use crate::cli::{UserCommand, UserSubcommand};
use crate::commands::App;
use crate::views::table::display_users;

pub async fn user_command(app: &App, command: UserCommand) -> Result<()> {
    match command.command {
        UserSubcommand::Add { name } => {
            let user = app.users.register(&name).await?;
            println!("{} Added user '{}' ({})", "✓".green(), user.name.bold(), user.id);
        }
        UserSubcommand::Ls => {
            let users = app.users.get_all().await?;
            display_users(&users);
        }
    }
    Ok(())
}
