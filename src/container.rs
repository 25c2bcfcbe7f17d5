//! Application wiring.
//!
//! [`TaskListApp`] is built once at startup. It owns the shared identifier
//! generator, repository and renderer, and hands out services wired to
//! those same instances.

use std::sync::Arc;

use crate::config::{AppConfig, RendererKind};
use crate::task::{
    adapters::{
        memory::InMemoryTaskRepository,
        render::{CsvRenderer, JsonRenderer, PlainRenderer},
        sequence::SequentialIdGenerator,
    },
    ports::{TaskRenderer, TaskRepository},
    services::{TaskFactory, TaskListService, TaskPrinter},
};

/// Typed registry of the task list components.
pub struct TaskListApp<R = InMemoryTaskRepository>
where
    R: TaskRepository,
{
    id_generator: Arc<SequentialIdGenerator>,
    repository: Arc<R>,
    renderer: Arc<dyn TaskRenderer>,
}

impl TaskListApp {
    /// Builds the application with an empty in-memory repository.
    #[must_use]
    pub fn build(config: &AppConfig) -> Self {
        Self::with_repository(config, Arc::new(InMemoryTaskRepository::new()))
    }
}

impl<R> TaskListApp<R>
where
    R: TaskRepository,
{
    /// Builds the application around a caller-supplied repository.
    #[must_use]
    pub fn with_repository(config: &AppConfig, repository: Arc<R>) -> Self {
        Self {
            id_generator: Arc::new(SequentialIdGenerator::new()),
            repository,
            renderer: renderer_for(config.renderer()),
        }
    }

    /// Returns the shared identifier generator.
    #[must_use]
    pub fn id_generator(&self) -> Arc<SequentialIdGenerator> {
        Arc::clone(&self.id_generator)
    }

    /// Returns the shared repository.
    #[must_use]
    pub fn repository(&self) -> Arc<R> {
        Arc::clone(&self.repository)
    }

    /// Returns a factory drawing identifiers from the shared generator.
    #[must_use]
    pub fn task_factory(&self) -> TaskFactory<SequentialIdGenerator> {
        TaskFactory::new(self.id_generator())
    }

    /// Returns a task list service over the shared repository and factory.
    #[must_use]
    pub fn task_list_service(&self) -> TaskListService<R, SequentialIdGenerator> {
        TaskListService::new(self.repository(), self.task_factory())
    }

    /// Returns a printer over the shared repository and configured renderer.
    #[must_use]
    pub fn task_printer(&self) -> TaskPrinter<R, dyn TaskRenderer> {
        TaskPrinter::new(self.repository(), Arc::clone(&self.renderer))
    }
}

fn renderer_for(kind: RendererKind) -> Arc<dyn TaskRenderer> {
    match kind {
        RendererKind::Plain => Arc::new(PlainRenderer),
        RendererKind::Csv => Arc::new(CsvRenderer),
        RendererKind::Json => Arc::new(JsonRenderer),
    }
}
