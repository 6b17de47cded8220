use anyhow::Result;
use todo_core::dto::TaskNoteDto;
use todo_core::service::CrudService;
use todo_core::validation::Validate;

use crate::cli::{NoteCommand, NoteSubcommand};
use crate::commands::App;
use crate::util::confirm_deletion;
use crate::views::table::display_notes;

pub async fn note_command(app: &App, command: NoteCommand) -> Result<()> {
    match command.command {
        NoteSubcommand::Add { task, text } => {
            app.tasks.get_by_id(task).await?;

            let dto = TaskNoteDto {
                id: 0,
                name: text,
                task_id: task,
            };
            dto.validate()?;

            let id = app.notes.add(Some(dto)).await?;
            println!("Added note {} to task {}.", id, task);
        }
        NoteSubcommand::Ls { task } => {
            let notes = match task {
                Some(task_id) => app.notes.get_all_for_task(task_id).await?,
                None => app.notes.get_all().await?,
            };
            display_notes(&notes);
        }
        NoteSubcommand::Edit { id, text } => {
            let mut note = app.notes.get_by_id(id).await?;
            note.name = text;
            note.validate()?;

            app.notes.update(id, Some(note)).await?;
            println!("Note {} updated.", id);
        }
        NoteSubcommand::Delete(delete) => {
            if confirm_deletion(delete.force, &format!("note {}", delete.id)) {
                app.notes.delete(delete.id).await?;
                println!("Note deleted.");
            }
        }
    }
    Ok(())
}
