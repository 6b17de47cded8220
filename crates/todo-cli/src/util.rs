use anyhow::Result;
use dialoguer::Confirm;
use todo_core::dto::UserDto;

use crate::commands::App;

/// The user named by `--user`, else the configured default user, else none.
pub async fn resolve_user(app: &App, explicit: Option<&str>) -> Result<Option<UserDto>> {
    match explicit.or(app.default_user.as_deref()) {
        Some(name) => Ok(Some(app.users.get_by_name(name).await?)),
        None => Ok(None),
    }
}

/// Like [`resolve_user`] for commands that cannot run without one.
pub async fn require_user(app: &App, explicit: Option<&str>) -> Result<UserDto> {
    resolve_user(app, explicit)
        .await?
        .ok_or_else(|| anyhow::anyhow!("A user is required: pass --user or set default_user"))
}

/// Asks before a destructive action unless `force` is set.
pub fn confirm_deletion(force: bool, what: &str) -> bool {
    if force {
        return true;
    }

    let confirmed = Confirm::new()
        .with_prompt(format!("Are you sure you want to delete {}?", what))
        .default(false)
        .interact()
        .unwrap_or(false);

    if !confirmed {
        println!("Deletion cancelled.");
    }
    confirmed
}
