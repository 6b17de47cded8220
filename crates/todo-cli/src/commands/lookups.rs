use anyhow::Result;
use owo_colors::OwoColorize;
use todo_core::dto::{TaskCategoryDto, TaskPriorityDto, TaskStatusDto};
use todo_core::service::CrudService;
use todo_core::validation::Validate;

use crate::cli::{LookupCommand, LookupSubcommand};
use crate::util::confirm_deletion;
use crate::views::table::{display_lookups, ViewLookup};

/// The shared shape of categories, priorities and statuses as the CLI edits them.
pub trait LookupEntry: Validate + Send + 'static {
    const LABEL: &'static str;
    const PLURAL: &'static str;

    fn create(name: String, description: Option<String>) -> Self;
    fn apply(&mut self, name: Option<String>, description: Option<String>);
    fn view(&self) -> ViewLookup;
}

impl LookupEntry for TaskCategoryDto {
    const LABEL: &'static str = "category";
    const PLURAL: &'static str = "categories";

    fn create(name: String, description: Option<String>) -> Self {
        Self {
            name,
            description: description.unwrap_or_default(),
            ..Default::default()
        }
    }

    fn apply(&mut self, name: Option<String>, description: Option<String>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
    }

    fn view(&self) -> ViewLookup {
        ViewLookup {
            id: self.id,
            name: self.name.clone(),
            description: Some(self.description.clone()),
        }
    }
}

impl LookupEntry for TaskPriorityDto {
    const LABEL: &'static str = "priority";
    const PLURAL: &'static str = "priorities";

    fn create(name: String, _description: Option<String>) -> Self {
        Self {
            name,
            ..Default::default()
        }
    }

    fn apply(&mut self, name: Option<String>, _description: Option<String>) {
        if let Some(name) = name {
            self.name = name;
        }
    }

    fn view(&self) -> ViewLookup {
        ViewLookup {
            id: self.id,
            name: self.name.clone(),
            description: None,
        }
    }
}

impl LookupEntry for TaskStatusDto {
    const LABEL: &'static str = "status";
    const PLURAL: &'static str = "statuses";

    fn create(name: String, description: Option<String>) -> Self {
        Self {
            name,
            description: description.unwrap_or_default(),
            ..Default::default()
        }
    }

    fn apply(&mut self, name: Option<String>, description: Option<String>) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
    }

    fn view(&self) -> ViewLookup {
        ViewLookup {
            id: self.id,
            name: self.name.clone(),
            description: Some(self.description.clone()),
        }
    }
}

pub async fn lookup_command<S>(service: &S, command: LookupCommand) -> Result<()>
where
    S: CrudService,
    S::Dto: LookupEntry,
{
    let label = <S::Dto as LookupEntry>::LABEL;

    match command.command {
        LookupSubcommand::Add { name, description } => {
            let entry = <S::Dto as LookupEntry>::create(name.clone(), description);
            entry.validate()?;

            let id = service.add(Some(entry)).await?;
            println!(
                "{} Added {} '{}' (id {})",
                "✓".green(),
                label,
                name.bold(),
                id
            );
        }
        LookupSubcommand::Ls => {
            let entries: Vec<ViewLookup> = service
                .get_all()
                .await?
                .iter()
                .map(LookupEntry::view)
                .collect();
            display_lookups(<S::Dto as LookupEntry>::PLURAL, &entries);
        }
        LookupSubcommand::Edit {
            id,
            name,
            description,
        } => {
            let mut entry = service.get_by_id(id).await?;
            entry.apply(name, description);
            entry.validate()?;

            service.update(id, Some(entry)).await?;
            println!("Updated {} {}.", label, id);
        }
        LookupSubcommand::Delete(delete) => {
            if confirm_deletion(delete.force, &format!("{} {}", label, delete.id)) {
                service.delete(delete.id).await?;
                println!("Deleted {} {}.", label, delete.id);
            }
        }
    }
    Ok(())
}
