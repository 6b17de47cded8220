//! Entity ↔ DTO conversions.
//!
//! Purely structural: nothing here validates. Computed counts flow only from
//! entity to DTO and are dropped on the way back.

use crate::dto::{
    TaskCategoryDto, TaskNoteDto, TaskPriorityDto, TaskStatusDto, ToDoListDto, ToDoTaskDto,
    UserDto,
};
use crate::models::{
    ApplicationUser, TaskCategory, TaskNote, TaskPriority, TaskStatus, ToDoList, ToDoTask,
};

fn map_all<A, B: From<A>>(items: Vec<A>) -> Vec<B> {
    items.into_iter().map(B::from).collect()
}

impl From<TaskCategory> for TaskCategoryDto {
    fn from(category: TaskCategory) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            tasks: map_all(category.tasks),
        }
    }
}

impl From<TaskCategoryDto> for TaskCategory {
    fn from(dto: TaskCategoryDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            tasks: map_all(dto.tasks),
        }
    }
}

impl From<TaskPriority> for TaskPriorityDto {
    fn from(priority: TaskPriority) -> Self {
        Self {
            id: priority.id,
            name: priority.name,
            tasks: map_all(priority.tasks),
        }
    }
}

impl From<TaskPriorityDto> for TaskPriority {
    fn from(dto: TaskPriorityDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            tasks: map_all(dto.tasks),
        }
    }
}

impl From<TaskStatus> for TaskStatusDto {
    fn from(status: TaskStatus) -> Self {
        Self {
            id: status.id,
            name: status.name,
            description: status.description,
            tasks: map_all(status.tasks),
        }
    }
}

impl From<TaskStatusDto> for TaskStatus {
    fn from(dto: TaskStatusDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            description: dto.description,
            tasks: map_all(dto.tasks),
        }
    }
}

impl From<TaskNote> for TaskNoteDto {
    fn from(note: TaskNote) -> Self {
        Self {
            id: note.id,
            name: note.description,
            task_id: note.task_id,
        }
    }
}

impl From<TaskNoteDto> for TaskNote {
    fn from(dto: TaskNoteDto) -> Self {
        Self {
            id: dto.id,
            description: dto.name,
            task_id: dto.task_id,
        }
    }
}

impl From<ToDoList> for ToDoListDto {
    fn from(list: ToDoList) -> Self {
        Self {
            id: list.id,
            name: list.title,
            description: list.description,
            is_hidden: list.is_hidden,
            creation_date: list.creation_date,
            user_id: list.user_id,
            number_of_tasks: list.tasks.len(),
            tasks: map_all(list.tasks),
        }
    }
}

impl From<ToDoListDto> for ToDoList {
    fn from(dto: ToDoListDto) -> Self {
        Self {
            id: dto.id,
            title: dto.name,
            description: dto.description,
            is_hidden: dto.is_hidden,
            creation_date: dto.creation_date,
            user_id: dto.user_id,
            tasks: map_all(dto.tasks),
        }
    }
}

impl From<ToDoTask> for ToDoTaskDto {
    fn from(task: ToDoTask) -> Self {
        Self {
            id: task.id,
            name: task.title,
            description: task.description,
            creation_date: task.creation_date,
            due_date: task.due_date,
            reminder: task.reminder,
            reminder_date: task.reminder_date,
            daily: task.daily,
            important: task.important,
            is_completed: task.is_completed,
            list_id: task.list_id,
            status_id: task.status_id,
            category_id: task.category_id,
            priority_id: task.priority_id,
            number_of_notes: task.notes.len(),
            notes: map_all(task.notes),
        }
    }
}

impl From<ToDoTaskDto> for ToDoTask {
    fn from(dto: ToDoTaskDto) -> Self {
        Self {
            id: dto.id,
            title: dto.name,
            description: dto.description,
            creation_date: dto.creation_date,
            due_date: dto.due_date,
            reminder: dto.reminder,
            reminder_date: dto.reminder_date,
            daily: dto.daily,
            important: dto.important,
            is_completed: dto.is_completed,
            list_id: dto.list_id,
            status_id: dto.status_id,
            category_id: dto.category_id,
            priority_id: dto.priority_id,
            notes: map_all(dto.notes),
        }
    }
}

impl From<ApplicationUser> for UserDto {
    fn from(user: ApplicationUser) -> Self {
        Self {
            id: user.id,
            name: user.user_name,
            number_of_lists: user.lists.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_task(id: i64, notes: usize) -> ToDoTask {
        ToDoTask {
            id,
            title: format!("Task {}", id),
            description: "Something to do".to_string(),
            creation_date: Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(),
            due_date: Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap(),
            list_id: 7,
            category_id: Some(2),
            notes: (0..notes as i64)
                .map(|n| TaskNote {
                    id: n + 1,
                    description: format!("note {}", n),
                    task_id: id,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn list_title_becomes_name_and_tasks_are_counted() {
        let list = ToDoList {
            id: 7,
            title: "Groceries".to_string(),
            description: "Weekly shopping".to_string(),
            tasks: vec![sample_task(1, 0), sample_task(2, 0)],
            ..Default::default()
        };

        let dto = ToDoListDto::from(list);

        assert_eq!(dto.name, "Groceries");
        assert_eq!(dto.number_of_tasks, 2);
        assert_eq!(dto.tasks[1].name, "Task 2");
    }

    #[test]
    fn task_notes_are_counted_and_note_text_is_the_name() {
        let dto = ToDoTaskDto::from(sample_task(3, 2));

        assert_eq!(dto.number_of_notes, 2);
        assert_eq!(dto.notes[0].name, "note 0");
        assert_eq!(dto.category_id, Some(2));
    }

    #[test]
    fn dto_back_to_entity_ignores_counts() {
        let dto = ToDoListDto {
            name: "Chores".to_string(),
            number_of_tasks: 42,
            ..Default::default()
        };

        let list = ToDoList::from(dto);

        assert_eq!(list.title, "Chores");
        assert!(list.tasks.is_empty());
    }

    #[test]
    fn note_name_maps_to_description() {
        let note = TaskNote::from(TaskNoteDto {
            id: 0,
            name: "Call back".to_string(),
            task_id: 4,
        });

        assert_eq!(note.description, "Call back");
        assert_eq!(note.task_id, 4);
    }

    #[test]
    fn task_dto_serializes_with_renamed_fields() {
        let json = serde_json::to_value(ToDoTaskDto::from(sample_task(5, 1))).unwrap();

        assert_eq!(json["name"], "Task 5");
        assert_eq!(json["number_of_notes"], 1);
        assert_eq!(json["notes"][0]["name"], "note 0");
        assert!(json.get("title").is_none());
    }
}
