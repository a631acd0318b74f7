use chrono::NaiveDateTime;
use diesel::{AsChangeset, Identifiable, Insertable, Queryable};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Queryable, Identifiable, AsChangeset)]
#[diesel(table_name = crate::repository::schema::todos)]
#[diesel(treat_none_as_null = true)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub done: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// Insert row for a todo that has not been assigned an id yet.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::repository::schema::todos)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub done: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TodoRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub done: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub done: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TodoListResponse {
    pub items: Vec<TodoResponse>,
}

impl From<&Todo> for TodoResponse {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title.clone(),
            description: todo.description.clone(),
            done: todo.done,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self::from(&todo)
    }
}

impl From<Vec<Todo>> for TodoListResponse {
    fn from(todos: Vec<Todo>) -> Self {
        Self {
            items: todos.iter().map(TodoResponse::from).collect(),
        }
    }
}

impl TodoListResponse {
    /// Item count; a method rather than a field so it never serializes.
    pub fn size(&self) -> usize {
        self.items.len()
    }
}
