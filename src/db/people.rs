use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::Result;
use crate::model::{NewPerson, Person, PersonId};

/// Returns the id of the person with the same `(name, email)`, inserting
/// `person` first if there is none.
///
/// An existing row is returned untouched: affiliation and country from the
/// first insert win. Lookups see rows inserted earlier on the same
/// connection or transaction. There is no protection against a concurrent
/// writer inserting the same pair between the lookup and the insert; the
/// `UNIQUE (name, email)` constraint turns that race into an error.
pub async fn resolve(conn: &mut SqliteConnection, person: &NewPerson) -> Result<PersonId> {
    if let Some(id) = find_id(conn, &person.name, &person.email).await? {
        return Ok(id);
    }

    let id = sqlx::query(
        "INSERT INTO people (name, email, affiliation, country) VALUES (?, ?, ?, ?)",
    )
    .bind(&person.name)
    .bind(&person.email)
    .bind(&person.affiliation)
    .bind(&person.country)
    .execute(&mut *conn)
    .await?
    .last_insert_rowid();

    debug!(id, name = %person.name, email = %person.email, "inserted person");
    Ok(PersonId(id))
}

pub async fn find_id(
    conn: &mut SqliteConnection,
    name: &str,
    email: &str,
) -> Result<Option<PersonId>> {
    let id: Option<i64> =
        sqlx::query_scalar("SELECT id FROM people WHERE name = ? AND email = ? LIMIT 1")
            .bind(name)
            .bind(email)
            .fetch_optional(&mut *conn)
            .await?;
    Ok(id.map(PersonId))
}

pub async fn get(conn: &mut SqliteConnection, id: PersonId) -> Result<Option<Person>> {
    let person = sqlx::query_as::<_, Person>(
        "SELECT id, name, email, affiliation, country FROM people WHERE id = ?",
    )
    .bind(id.0)
    .fetch_optional(&mut *conn)
    .await?;
    Ok(person)
}

pub async fn count(conn: &mut SqliteConnection) -> Result<i64> {
    Ok(sqlx::query_scalar("SELECT COUNT(*) FROM people")
        .fetch_one(&mut *conn)
        .await?)
}
