use chrono::Utc;
use chrono_humanize::Humanize;
use comfy_table::{Attribute, Cell, Color, Row, Table};
use todo_core::dto::{TaskNoteDto, ToDoListDto, ToDoTaskDto, UserDto};
use todo_core::models::SmartListCounts;

/// Category, priority or status flattened for display.
#[derive(Debug, Clone)]
pub struct ViewLookup {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

pub fn display_tasks(tasks: &[ToDoTaskDto]) {
    if tasks.is_empty() {
        println!("No tasks found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "List", "Due", "Flags", "Notes"]);

    let now = Utc::now();
    for task in tasks {
        let mut row = Row::new();
        row.add_cell(Cell::new(task.id));

        let mut name_cell = Cell::new(&task.name);
        name_cell = if task.is_completed {
            name_cell
                .add_attribute(Attribute::CrossedOut)
                .fg(Color::DarkGrey)
        } else if task.important {
            name_cell.fg(Color::Red).add_attribute(Attribute::Bold)
        } else {
            name_cell
        };
        row.add_cell(name_cell);
        row.add_cell(Cell::new(task.list_id));

        let due_cell = Cell::new(task.due_date.humanize());
        let due_cell = if task.is_completed {
            due_cell
        } else if task.due_date < now {
            due_cell.fg(Color::Red)
        } else if task.due_date.date_naive() == now.date_naive() {
            due_cell.fg(Color::Yellow)
        } else {
            due_cell
        };
        row.add_cell(due_cell);

        row.add_cell(Cell::new(task_flags(task)));
        row.add_cell(Cell::new(task.number_of_notes));
        table.add_row(row);
    }

    println!("{table}");
}

fn task_flags(task: &ToDoTaskDto) -> String {
    let mut flags = Vec::new();
    if task.is_completed {
        flags.push("done");
    }
    if task.important {
        flags.push("important");
    }
    if task.daily {
        flags.push("daily");
    }
    if task.reminder {
        flags.push("reminder");
    }
    flags.join(", ")
}

pub fn display_task_details(task: &ToDoTaskDto) {
    let mut table = Table::new();
    table.add_row(vec![Cell::new("ID"), Cell::new(task.id)]);
    table.add_row(vec![Cell::new("Name"), Cell::new(&task.name)]);
    table.add_row(vec![Cell::new("Description"), Cell::new(&task.description)]);
    table.add_row(vec![Cell::new("List"), Cell::new(task.list_id)]);
    table.add_row(vec![
        Cell::new("Created"),
        Cell::new(task.creation_date.to_rfc2822()),
    ]);
    table.add_row(vec![
        Cell::new("Due"),
        Cell::new(format!("{} ({})", task.due_date.to_rfc2822(), task.due_date.humanize())),
    ]);
    table.add_row(vec![
        Cell::new("Reminder"),
        Cell::new(if task.reminder {
            task.reminder_date.to_rfc2822()
        } else {
            "off".to_string()
        }),
    ]);
    table.add_row(vec![Cell::new("Flags"), Cell::new(task_flags(task))]);
    table.add_row(vec![
        Cell::new("Category / Priority / Status"),
        Cell::new(format!(
            "{} / {} / {}",
            optional_id(task.category_id),
            optional_id(task.priority_id),
            optional_id(task.status_id)
        )),
    ]);
    println!("{table}");

    display_notes(&task.notes);
}

fn optional_id(id: Option<i64>) -> String {
    id.map_or_else(|| "None".to_string(), |id| id.to_string())
}

pub fn display_lists(lists: &[ToDoListDto]) {
    if lists.is_empty() {
        println!("No lists found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Description", "Tasks", "Created"]);

    for list in lists {
        let mut row = Row::new();
        row.add_cell(Cell::new(list.id));
        let name_cell = if list.is_hidden {
            Cell::new(format!("{} (hidden)", list.name)).fg(Color::DarkGrey)
        } else {
            Cell::new(&list.name)
        };
        row.add_cell(name_cell);
        row.add_cell(Cell::new(&list.description));
        row.add_cell(Cell::new(list.number_of_tasks));
        row.add_cell(Cell::new(list.creation_date.humanize()));
        table.add_row(row);
    }

    println!("{table}");
}

pub fn display_smart_counts(counts: &SmartListCounts) {
    let mut table = Table::new();
    table.set_header(vec!["Smart list", "Tasks"]);
    table.add_row(vec![Cell::new("Important"), Cell::new(counts.important)]);
    table.add_row(vec![Cell::new("Daily"), Cell::new(counts.daily)]);
    table.add_row(vec![Cell::new("Today"), Cell::new(counts.today)]);
    println!("{table}");
}

pub fn display_notes(notes: &[TaskNoteDto]) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Task", "Note"]);
    for note in notes {
        table.add_row(vec![
            Cell::new(note.id),
            Cell::new(note.task_id),
            Cell::new(&note.name),
        ]);
    }
    println!("{table}");
}

pub fn display_users(users: &[UserDto]) {
    if users.is_empty() {
        println!("No users found.");
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Lists"]);
    for user in users {
        table.add_row(vec![
            Cell::new(user.id),
            Cell::new(&user.name),
            Cell::new(user.number_of_lists),
        ]);
    }
    println!("{table}");
}

pub fn display_lookups(label: &str, entries: &[ViewLookup]) {
    if entries.is_empty() {
        println!("No {} found.", label);
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Description"]);
    for entry in entries {
        table.add_row(vec![
            Cell::new(entry.id),
            Cell::new(&entry.name),
            Cell::new(entry.description.as_deref().unwrap_or("")),
        ]);
    }
    println!("{table}");
}
