use clap::{Parser, Subcommand, ValueEnum};

/// Multi-user to-do lists with reminders and smart views
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Manage users
    User(UserCommand),
    /// Manage lists
    List(ListCommand),
    /// Manage tasks
    Task(TaskCommand),
    /// Manage task notes
    Note(NoteCommand),
    /// Manage task categories
    Category(LookupCommand),
    /// Manage task priorities
    Priority(LookupCommand),
    /// Manage task statuses
    Status(LookupCommand),
    /// Filtered views over tasks
    View(ViewCommand),
}

// Users

#[derive(Parser, Debug, Clone)]
pub struct UserCommand {
    #[command(subcommand)]
    pub command: UserSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum UserSubcommand {
    /// Register a new user
    Add {
        /// Unique user name
        name: String,
    },
    /// List users
    Ls,
}

// Lists

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    #[command(subcommand)]
    pub command: ListSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ListSubcommand {
    /// Create a list
    Add(AddListCommand),
    /// Show lists
    Ls(LsListCommand),
    /// Show one list with its tasks
    Show(ShowCommand),
    /// Rename or re-describe a list
    Edit(EditListCommand),
    /// Delete a list and its tasks
    Delete(DeleteCommand),
    /// Duplicate a list and its tasks
    Copy(IdArg),
    /// Hide a list from the default listing
    Hide(IdArg),
    /// Make a hidden list visible again
    Unhide(IdArg),
}

#[derive(Parser, Debug, Clone)]
pub struct AddListCommand {
    /// Unique list title
    pub name: String,
    #[clap(short, long)]
    pub description: String,
    /// Owner of the list
    #[clap(short, long)]
    pub user: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct LsListCommand {
    /// Include hidden lists
    #[clap(short, long)]
    pub all: bool,
    /// Only lists owned by this user
    #[clap(short, long)]
    pub user: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct EditListCommand {
    pub id: i64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
}

// Tasks

#[derive(Parser, Debug, Clone)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub command: TaskSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TaskSubcommand {
    /// Add a task to a list
    Add(AddTaskCommand),
    /// Show tasks
    Ls {
        /// Only tasks of this list
        #[clap(short, long)]
        list: Option<i64>,
    },
    /// Show one task with its notes
    Show(ShowCommand),
    /// Change a task
    Edit(EditTaskCommand),
    /// Mark a task as completed
    Done(IdArg),
    /// Mark a completed task as open again
    Undo(IdArg),
    /// Delete a task and its notes
    Delete(DeleteCommand),
    /// Arm or disarm the reminder
    Remind {
        id: i64,
        #[arg(value_enum)]
        state: Toggle,
    },
    /// Move the reminder to a new time
    RemindAt {
        id: i64,
        /// When to remind, e.g. "tomorrow" or "2024-03-15 08:00"
        when: String,
    },
}

#[derive(Parser, Debug, Clone)]
pub struct AddTaskCommand {
    /// Task title
    pub name: String,
    /// List the task belongs to
    #[clap(short, long)]
    pub list: i64,
    #[clap(short, long)]
    pub description: String,
    /// Due date, defaults to tomorrow
    #[clap(long)]
    pub due: Option<String>,
    /// Arms the reminder at this time
    #[clap(long)]
    pub remind_at: Option<String>,
    #[clap(long)]
    pub daily: bool,
    #[clap(long)]
    pub important: bool,
    /// Category name
    #[clap(long)]
    pub category: Option<String>,
    /// Priority name
    #[clap(long)]
    pub priority: Option<String>,
    /// Status name
    #[clap(long)]
    pub status: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct EditTaskCommand {
    pub id: i64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub description: Option<String>,
    #[arg(long)]
    pub due: Option<String>,
    #[arg(long)]
    pub daily: Option<bool>,
    #[arg(long)]
    pub important: Option<bool>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    On,
    Off,
}

// Notes

#[derive(Parser, Debug, Clone)]
pub struct NoteCommand {
    #[command(subcommand)]
    pub command: NoteSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum NoteSubcommand {
    /// Attach a note to a task
    Add { task: i64, text: String },
    /// Show notes
    Ls {
        /// Only notes of this task
        #[clap(short, long)]
        task: Option<i64>,
    },
    /// Replace the text of a note
    Edit { id: i64, text: String },
    /// Delete a note
    Delete(DeleteCommand),
}

// Categories, priorities and statuses

#[derive(Parser, Debug, Clone)]
pub struct LookupCommand {
    #[command(subcommand)]
    pub command: LookupSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum LookupSubcommand {
    /// Create an entry
    Add {
        name: String,
        #[clap(short, long)]
        description: Option<String>,
    },
    /// Show entries
    Ls,
    /// Change an entry
    Edit {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete an entry; tasks using it keep existing
    Delete(DeleteCommand),
}

// Views

#[derive(Parser, Debug, Clone)]
pub struct ViewCommand {
    #[command(subcommand)]
    pub command: ViewSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ViewSubcommand {
    /// Tasks due today
    Today(UserScope),
    /// Tasks flagged daily
    Daily(UserScope),
    /// Tasks flagged important
    Important(UserScope),
    /// Completed tasks
    Completed,
    /// Open tasks
    Uncompleted,
    /// Tasks whose reminder time has come
    Reminders(UserScope),
}

#[derive(Parser, Debug, Clone)]
pub struct UserScope {
    /// Restrict to this user's lists
    #[clap(short, long)]
    pub user: Option<String>,
}

// Shared arguments

#[derive(Parser, Debug, Clone)]
pub struct IdArg {
    pub id: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct ShowCommand {
    pub id: i64,
    /// Print as JSON
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    pub id: i64,
    /// Force deletion without confirmation
    #[clap(short, long)]
    pub force: bool,
}
