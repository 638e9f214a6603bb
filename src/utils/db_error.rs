//! Classification helpers for `sqlx` errors.

/// Name of the unique constraint guarding `redirects.slug`.
pub const SLUG_UNIQUE_CONSTRAINT: &str = "redirects_slug_key";

/// Returns true if the error is a unique violation on the slug constraint.
pub fn is_unique_violation_on_slug(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SLUG_UNIQUE_CONSTRAINT))
}

/// Returns true if the error means the database could not be reached at all,
/// as opposed to a query that reached it and failed.
pub fn is_connectivity_error(e: &sqlx::Error) -> bool {
    matches!(
        e,
        sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::WorkerCrashed
    )
}
