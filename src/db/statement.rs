use crate::error::XteamError;
use std::future::Future;

/// SQL text with positional `?` placeholders and the values bound to them.
///
/// The text is `&'static str`, so values computed at runtime can only travel
/// as parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundStatement {
    sql: &'static str,
    params: Vec<String>,
}

impl BoundStatement {
    pub fn new(sql: &'static str) -> Self {
        Self {
            sql,
            params: Vec::new(),
        }
    }

    pub fn bind(mut self, value: impl Into<String>) -> Self {
        self.params.push(value.into());
        self
    }

    pub fn sql(&self) -> &'static str {
        self.sql
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }
}

/// A store that executes single write statements.
pub trait UserStore: Send + Sync {
    /// Run `statement` on a connection held only for this call.
    /// Returns the number of affected rows.
    fn execute(
        &self,
        statement: &BoundStatement,
    ) -> impl Future<Output = Result<u64, XteamError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::UPDATE_PASSWORD_HASH;

    #[test]
    fn binds_in_order() {
        let stmt = BoundStatement::new(UPDATE_PASSWORD_HASH)
            .bind("$argon2id$v=19$...")
            .bind("admin");
        assert_eq!(stmt.placeholder_count(), 2);
        assert_eq!(stmt.params(), ["$argon2id$v=19$...", "admin"]);
        assert!(!stmt.sql().contains("admin"));
    }
}
