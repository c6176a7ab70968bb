use crate::db::models::DbUser;
use crate::db::schema::{INSERT_USER, SELECT_USER_BY_NAME, SQLITE_INIT};
use crate::db::statement::{BoundStatement, UserStore};
use crate::error::XteamError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::debug;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct UserStorage {
    pool: SqlitePool,
}

impl UserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the pool, creating the database file when absent.
    /// Any failure here is a connection failure.
    pub async fn connect(database_url: &str) -> Result<Self, XteamError> {
        Self::open(database_url, true).await
    }

    /// Open the pool over a database that must already exist.
    pub async fn connect_existing(database_url: &str) -> Result<Self, XteamError> {
        Self::open(database_url, false).await
    }

    async fn open(database_url: &str, create_if_missing: bool) -> Result<Self, XteamError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)
            .map_err(XteamError::StoreConnection)?
            .create_if_missing(create_if_missing);
        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await
            .map_err(XteamError::StoreConnection)?;
        Ok(Self { pool })
    }

    /// Single-connection pool over a private in-memory database.
    pub async fn in_memory() -> Result<Self, XteamError> {
        let connect_opts =
            SqliteConnectOptions::from_str("sqlite::memory:").map_err(XteamError::StoreConnection)?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(connect_opts)
            .await
            .map_err(XteamError::StoreConnection)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), XteamError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert a user row. Returns the row id.
    pub async fn create_user(&self, username: &str, password_hash: &str) -> Result<i64, XteamError> {
        let res = sqlx::query(INSERT_USER)
            .bind(username)
            .bind(password_hash)
            .execute(&self.pool)
            .await?;
        Ok(res.last_insert_rowid())
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<DbUser>, XteamError> {
        let user = sqlx::query_as::<_, DbUser>(SELECT_USER_BY_NAME)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl UserStore for UserStorage {
    async fn execute(&self, statement: &BoundStatement) -> Result<u64, XteamError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(XteamError::StoreConnection)?;

        let mut query = sqlx::query(statement.sql());
        for value in statement.params() {
            query = query.bind(value.as_str());
        }

        // `conn` goes back to the pool on every path out of this scope.
        let res = query
            .execute(&mut *conn)
            .await
            .map_err(|e| XteamError::StoreWrite(XteamError::store_diagnostic(&e)))?;
        debug!(rows = res.rows_affected(), "statement executed");
        Ok(res.rows_affected())
    }
}
