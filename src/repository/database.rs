use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use crate::error::TodoError;
use crate::models::todo::{NewTodo, Todo};
use crate::repository::schema::todos::dsl::*;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Sort order for full-table scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoSort {
    IdAsc,
    IdDesc,
}

/// Data-access contract for the `todos` table.
///
/// `insert` takes a [`NewTodo`] because a row without an assigned id is a
/// different shape from a persisted [`Todo`]; together with `update` this
/// covers insert-or-update. Deleting an absent id is not an error.
pub trait TodoRepository {
    fn find_all(&self, sort: TodoSort) -> Result<Vec<Todo>, TodoError>;
    fn find_by_id(&self, todo_id: i32) -> Result<Option<Todo>, TodoError>;
    fn insert(&self, new_todo: NewTodo) -> Result<Todo, TodoError>;
    fn update(&self, todo: &Todo) -> Result<Todo, TodoError>;
    fn delete_by_id(&self, todo_id: i32) -> Result<(), TodoError>;
}

#[derive(Clone)]
pub struct SqliteTodoRepository {
    pool: DbPool,
}

impl SqliteTodoRepository {
    /// Builds the connection pool and brings the schema up to date.
    pub fn new(database_url: &str) -> Result<Self, TodoError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        let pool: DbPool = Pool::builder()
            .build(manager)
            .map_err(|err| TodoError::Pool(err.to_string()))?;

        let mut conn = pool
            .get()
            .map_err(|err| TodoError::Pool(err.to_string()))?;
        conn.run_pending_migrations(MIGRATIONS)
            .map_err(|err| TodoError::Migration(err.to_string()))?;

        Ok(SqliteTodoRepository { pool })
    }

    fn conn(&self) -> Result<DbConnection, TodoError> {
        self.pool
            .get()
            .map_err(|err| TodoError::Pool(err.to_string()))
    }
}

impl TodoRepository for SqliteTodoRepository {
    fn find_all(&self, sort: TodoSort) -> Result<Vec<Todo>, TodoError> {
        let mut conn = self.conn()?;
        let rows = match sort {
            TodoSort::IdAsc => todos.order(id.asc()).load::<Todo>(&mut conn)?,
            TodoSort::IdDesc => todos.order(id.desc()).load::<Todo>(&mut conn)?,
        };
        Ok(rows)
    }

    fn find_by_id(&self, todo_id: i32) -> Result<Option<Todo>, TodoError> {
        let mut conn = self.conn()?;
        let todo = todos
            .find(todo_id)
            .first::<Todo>(&mut conn)
            .optional()?;
        Ok(todo)
    }

    fn insert(&self, new_todo: NewTodo) -> Result<Todo, TodoError> {
        let mut conn = self.conn()?;
        let todo = diesel::insert_into(todos)
            .values(&new_todo)
            .get_result::<Todo>(&mut conn)?;
        Ok(todo)
    }

    fn update(&self, todo: &Todo) -> Result<Todo, TodoError> {
        let mut conn = self.conn()?;
        let updated = diesel::update(todos.find(todo.id))
            .set(todo)
            .get_result::<Todo>(&mut conn)?;
        Ok(updated)
    }

    fn delete_by_id(&self, todo_id: i32) -> Result<(), TodoError> {
        let mut conn = self.conn()?;
        // Affected-row count deliberately ignored: delete is idempotent.
        diesel::delete(todos.find(todo_id)).execute(&mut conn)?;
        Ok(())
    }
}
