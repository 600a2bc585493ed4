use crate::db::models::{BookCreate, DbBook};
use crate::db::schema::SQLITE_INIT;
use crate::error::ShelfError;
use chrono::Utc;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::{debug, info};

#[derive(Debug)]
pub enum DbActorMessage {
    /// Insert a book row and return its id.
    Insert(BookCreate, RpcReplyPort<Result<i64, ShelfError>>),

    /// Delete the book with the given id; an absent id is a no-op.
    Delete(i64, RpcReplyPort<Result<(), ShelfError>>),

    /// Reset `pages_read` to 0 for the given id; an absent id is a no-op.
    ResetPagesRead(i64, RpcReplyPort<Result<(), ShelfError>>),

    /// List every book row, in storage order.
    List(RpcReplyPort<Result<Vec<DbBook>, ShelfError>>),

    /// Get a book by id.
    GetById(i64, RpcReplyPort<Result<Option<DbBook>, ShelfError>>),
}

#[derive(Clone)]
pub struct DbActorHandle {
    actor: ActorRef<DbActorMessage>,
}

impl DbActorHandle {
    pub async fn insert(&self, create: BookCreate) -> Result<i64, ShelfError> {
        ractor::call!(self.actor, DbActorMessage::Insert, create)
            .map_err(|e| ShelfError::RactorError(format!("DbActor Insert RPC failed: {e}")))?
    }

    pub async fn delete(&self, id: i64) -> Result<(), ShelfError> {
        ractor::call!(self.actor, DbActorMessage::Delete, id)
            .map_err(|e| ShelfError::RactorError(format!("DbActor Delete RPC failed: {e}")))?
    }

    pub async fn reset_pages_read(&self, id: i64) -> Result<(), ShelfError> {
        ractor::call!(self.actor, DbActorMessage::ResetPagesRead, id).map_err(|e| {
            ShelfError::RactorError(format!("DbActor ResetPagesRead RPC failed: {e}"))
        })?
    }

    pub async fn list(&self) -> Result<Vec<DbBook>, ShelfError> {
        ractor::call!(self.actor, DbActorMessage::List)
            .map_err(|e| ShelfError::RactorError(format!("DbActor List RPC failed: {e}")))?
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<DbBook>, ShelfError> {
        ractor::call!(self.actor, DbActorMessage::GetById, id)
            .map_err(|e| ShelfError::RactorError(format!("DbActor GetById RPC failed: {e}")))?
    }
}

struct DbActorState {
    pool: SqlitePool,
}

struct DbActor;

#[ractor::async_trait]
impl Actor for DbActor {
    type Msg = DbActorMessage;
    type State = DbActorState;
    type Arguments = String;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        database_url: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let connect_opts = SqliteConnectOptions::from_str(database_url.as_str())
            .map_err(|e| ActorProcessingErr::from(format!("invalid database url: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db connect failed: {e}")))?;

        apply_schema(&pool)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db schema init failed: {e}")))?;

        info!("DbActor initialized");
        Ok(DbActorState { pool })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            DbActorMessage::Insert(create, reply) => {
                let res = self.insert_book(&state.pool, create).await;
                let _ = reply.send(res);
            }
            DbActorMessage::Delete(id, reply) => {
                let res = self.delete_book(&state.pool, id).await;
                let _ = reply.send(res);
            }
            DbActorMessage::ResetPagesRead(id, reply) => {
                let res = self.reset_pages_read(&state.pool, id).await;
                let _ = reply.send(res);
            }
            DbActorMessage::List(reply) => {
                let res = self.list_books(&state.pool).await;
                let _ = reply.send(res);
            }
            DbActorMessage::GetById(id, reply) => {
                let res = self.get_book_by_id(&state.pool, id).await;
                let _ = reply.send(res);
            }
        }
        Ok(())
    }
}

impl DbActor {
    async fn insert_book(&self, pool: &SqlitePool, create: BookCreate) -> Result<i64, ShelfError> {
        let now = Utc::now();
        let id: i64 = sqlx::query_scalar(
            r#"
        INSERT INTO books (title, author, pages_read, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id
        "#,
        )
        .bind(create.title)
        .bind(create.author)
        .bind(create.pages_read)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    async fn list_books(&self, pool: &SqlitePool) -> Result<Vec<DbBook>, ShelfError> {
        // No ORDER BY: the listing reflects storage order and callers must
        // not depend on it.
        let rows = sqlx::query_as::<_, DbBook>(
            r#"
        SELECT id, title, author, pages_read, created_at, updated_at
        FROM books
        "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn get_book_by_id(
        &self,
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<DbBook>, ShelfError> {
        let row = sqlx::query_as::<_, DbBook>(
            r#"
        SELECT id, title, author, pages_read, created_at, updated_at
        FROM books
        WHERE id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    async fn delete_book(&self, pool: &SqlitePool, id: i64) -> Result<(), ShelfError> {
        let res = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        // Zero rows affected is success: deleting an absent id is a no-op.
        debug!(id, affected = res.rows_affected(), "db delete applied");
        Ok(())
    }

    async fn reset_pages_read(&self, pool: &SqlitePool, id: i64) -> Result<(), ShelfError> {
        let updated_at = Utc::now();
        let res = sqlx::query(
            r#"
        UPDATE books
        SET pages_read = 0, updated_at = ?
        WHERE id = ?
        "#,
        )
        .bind(updated_at)
        .bind(id)
        .execute(pool)
        .await?;

        // Zero rows affected is success: resetting an absent id is a no-op.
        debug!(
            id,
            affected = res.rows_affected(),
            updated_at = %updated_at,
            "db progress reset applied"
        );
        Ok(())
    }
}

/// Spawn the database actor and return a cloneable handle.
///
/// Spawned unnamed so tests can run several actors in one process.
pub async fn spawn(database_url: &str) -> DbActorHandle {
    let (actor, _jh) = ractor::Actor::spawn(None, DbActor, database_url.to_string())
        .await
        .expect("failed to spawn DbActor");

    DbActorHandle { actor }
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), ShelfError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
