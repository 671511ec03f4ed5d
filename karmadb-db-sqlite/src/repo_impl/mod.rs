use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use karmadb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod review;
mod student;
mod user;
mod vote;

type Result<T> = std::result::Result<T, repo::Error>;

define_sql_function!(fn lower(x: diesel::sql_types::Text) -> diesel::sql_types::Text);

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            log::debug!("Unique constraint violated: {}", info.message());
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

// Deleting a single object that does not exist is an error
fn expect_single_deletion(count: usize) -> Result<()> {
    debug_assert!(count <= 1);
    if count == 0 {
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn resolve_user_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::users::dsl;
    schema::users::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve user id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_student_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::students::dsl;
    schema::students::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve student id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_review_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::reviews::dsl;
    schema::reviews::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve review id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}
