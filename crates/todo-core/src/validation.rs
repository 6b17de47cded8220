//! Field-level rules applied at the presentation boundary before a DTO reaches
//! a service. Every violated rule is reported, not just the first.

use crate::dto::{
    TaskCategoryDto, TaskNoteDto, TaskPriorityDto, TaskStatusDto, ToDoListDto, ToDoTaskDto,
};
use crate::error::CoreError;
use regex::Regex;

lazy_static::lazy_static! {
    static ref LETTERS_ONLY: Regex = Regex::new(r"^[a-zA-Z]*$").unwrap();
    static ref LETTERS_AND_SPACES: Regex = Regex::new(r"^[a-zA-Z\s]*$").unwrap();
}

const NAME_MAX: usize = 100;
const TEXT_MAX: usize = 250;

pub trait Validate {
    fn validate(&self) -> Result<(), CoreError>;
}

#[derive(Default)]
struct Violations(Vec<String>);

impl Violations {
    fn required(&mut self, field: &str, value: &str, max: usize) -> &mut Self {
        if value.trim().is_empty() {
            self.0.push(format!("{} must not be empty", field));
        } else if value.chars().count() > max {
            self.0.push(format!("{} must be at most {} characters", field, max));
        }
        self
    }

    fn matches(&mut self, field: &str, value: &str, pattern: &Regex, message: &str) -> &mut Self {
        if !pattern.is_match(value) {
            self.0.push(format!("{} {}", field, message));
        }
        self
    }

    fn check(&mut self, ok: bool, message: &str) -> &mut Self {
        if !ok {
            self.0.push(message.to_string());
        }
        self
    }

    fn finish(&mut self) -> Result<(), CoreError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidArgument(self.0.join("; ")))
        }
    }
}

impl Validate for TaskCategoryDto {
    fn validate(&self) -> Result<(), CoreError> {
        Violations::default()
            .required("Name", &self.name, NAME_MAX)
            .matches("Name", &self.name, &LETTERS_ONLY, "can contain only letters")
            .required("Description", &self.description, TEXT_MAX)
            .finish()
    }
}

impl Validate for TaskPriorityDto {
    fn validate(&self) -> Result<(), CoreError> {
        Violations::default()
            .required("Name", &self.name, NAME_MAX)
            .matches("Name", &self.name, &LETTERS_AND_SPACES, "can contain only letters and spaces")
            .finish()
    }
}

impl Validate for TaskStatusDto {
    fn validate(&self) -> Result<(), CoreError> {
        Violations::default()
            .required("Name", &self.name, NAME_MAX)
            .matches("Name", &self.name, &LETTERS_AND_SPACES, "can contain only letters and spaces")
            .required("Description", &self.description, TEXT_MAX)
            .finish()
    }
}

impl Validate for ToDoListDto {
    fn validate(&self) -> Result<(), CoreError> {
        Violations::default()
            .required("Name", &self.name, NAME_MAX)
            .required("Description", &self.description, TEXT_MAX)
            .finish()
    }
}

impl Validate for ToDoTaskDto {
    fn validate(&self) -> Result<(), CoreError> {
        Violations::default()
            .required("Name", &self.name, TEXT_MAX)
            .required("Description", &self.description, TEXT_MAX)
            .check(
                self.due_date > self.creation_date,
                "Due date must be after the creation date",
            )
            .check(
                self.reminder_date > self.creation_date,
                "Reminder date must be after the creation date",
            )
            .finish()
    }
}

impl Validate for TaskNoteDto {
    fn validate(&self) -> Result<(), CoreError> {
        Violations::default()
            .required("Note", &self.name, TEXT_MAX)
            .finish()
    }
}
