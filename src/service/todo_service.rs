use chrono::Local;

use crate::error::TodoError;
use crate::models::todo::{NewTodo, Todo, TodoRequest};
use crate::repository::database::{TodoRepository, TodoSort};

/// Use-case layer between the HTTP handlers and the repository. Owns the
/// not-found mapping and the timestamps; knows nothing about HTTP.
pub struct TodoService<R: TodoRepository> {
    repository: R,
}

impl<R: TodoRepository> TodoService<R> {
    pub fn new(repository: R) -> Self {
        TodoService { repository }
    }

    /// All todos, newest first (ids are monotonically increasing).
    pub fn find_all(&self) -> Result<Vec<Todo>, TodoError> {
        self.repository.find_all(TodoSort::IdDesc)
    }

    pub fn find_by_id(&self, todo_id: i32) -> Result<Todo, TodoError> {
        self.repository
            .find_by_id(todo_id)?
            .ok_or(TodoError::NotFound(todo_id))
    }

    pub fn create(&self, request: TodoRequest) -> Result<Todo, TodoError> {
        let new_todo = NewTodo {
            title: request.title,
            description: request.description,
            done: request.done,
            created_at: Local::now().naive_local(),
        };
        self.repository.insert(new_todo)
    }

    /// Fetches the row (propagating not-found), rewrites the mutable
    /// columns and stamps `updated_at`.
    pub fn update(&self, todo_id: i32, request: TodoRequest) -> Result<Todo, TodoError> {
        let mut todo = self.find_by_id(todo_id)?;
        todo.title = request.title;
        todo.description = request.description;
        todo.done = request.done;
        todo.updated_at = Some(Local::now().naive_local());
        self.repository.update(&todo)
    }

    /// Idempotent: deleting an id that does not exist is not an error.
    pub fn delete(&self, todo_id: i32) -> Result<(), TodoError> {
        self.repository.delete_by_id(todo_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::database::SqliteTodoRepository;
    use tempfile::NamedTempFile;

    fn service() -> (NamedTempFile, TodoService<SqliteTodoRepository>) {
        let file = NamedTempFile::new().expect("temp database file");
        let url = file.path().to_str().expect("utf-8 path").to_string();
        let repository = SqliteTodoRepository::new(&url).expect("repository");
        (file, TodoService::new(repository))
    }

    fn request(title: &str) -> TodoRequest {
        TodoRequest {
            title: title.to_string(),
            description: format!("description of {title}"),
            done: false,
        }
    }

    #[test]
    fn create_assigns_id_and_created_at() {
        let (_file, service) = service();
        let before = Local::now().naive_local();
        let todo = service.create(request("first")).unwrap();

        assert!(todo.id > 0);
        assert_eq!(todo.title, "first");
        assert!(!todo.done);
        assert!(todo.updated_at.is_none());
        assert!(todo.created_at >= before);
        assert!(todo.created_at <= Local::now().naive_local());
    }

    #[test]
    fn create_then_find_by_id_round_trips() {
        let (_file, service) = service();
        let created = service.create(request("round trip")).unwrap();
        let fetched = service.find_by_id(created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn find_all_is_ordered_newest_first() {
        let (_file, service) = service();
        let first = service.create(request("a")).unwrap();
        let second = service.create(request("b")).unwrap();
        let third = service.create(request("c")).unwrap();

        let all = service.find_all().unwrap();
        let ids: Vec<i32> = all.iter().map(|todo| todo.id).collect();
        assert_eq!(ids, vec![third.id, second.id, first.id]);
    }

    #[test]
    fn find_by_id_missing_is_not_found() {
        let (_file, service) = service();
        let err = service.find_by_id(99_999).unwrap_err();
        assert!(matches!(err, TodoError::NotFound(99_999)));
    }

    #[test]
    fn update_rewrites_mutable_columns_only() {
        let (_file, service) = service();
        let created = service.create(request("before")).unwrap();

        let updated = service
            .update(
                created.id,
                TodoRequest {
                    title: "after".to_string(),
                    description: "changed".to_string(),
                    done: true,
                },
            )
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.title, "after");
        assert_eq!(updated.description, "changed");
        assert!(updated.done);
        assert!(updated.updated_at.is_some());
    }

    #[test]
    fn update_missing_is_not_found() {
        let (_file, service) = service();
        let err = service.update(42, request("nope")).unwrap_err();
        assert!(matches!(err, TodoError::NotFound(42)));
    }

    #[test]
    fn delete_removes_row_and_is_idempotent() {
        let (_file, service) = service();
        let created = service.create(request("doomed")).unwrap();

        service.delete(created.id).unwrap();
        assert!(service.find_all().unwrap().is_empty());

        // Second delete of the same id is still Ok.
        service.delete(created.id).unwrap();
    }
}
