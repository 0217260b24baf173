//! Named blob access over the `kv_store` table.
//!
//! The employee collection and the cached i18n tables are both stored as
//! whole values under fixed names; every write replaces the full entry.

use super::DbResult;
use rusqlite::{params, Connection, OptionalExtension};

/// Reads one named blob, `None` when the entry does not exist.
pub fn read_blob(conn: &Connection, name: &str) -> DbResult<Option<String>> {
    let value = conn
        .query_row(
            "SELECT value FROM kv_store WHERE name = ?1;",
            [name],
            |row| row.get::<_, String>(0),
        )
        .optional()?;
    Ok(value)
}

/// Writes one named blob, replacing any previous value wholesale.
pub fn write_blob(conn: &Connection, name: &str, value: &str) -> DbResult<()> {
    conn.execute(
        "INSERT INTO kv_store (name, value, updated_at)
         VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
         ON CONFLICT(name) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at;",
        params![name, value],
    )?;
    Ok(())
}

/// Removes one named blob if present.
pub fn delete_blob(conn: &Connection, name: &str) -> DbResult<()> {
    conn.execute("DELETE FROM kv_store WHERE name = ?1;", [name])?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{delete_blob, read_blob, write_blob};
    use crate::db::open_db_in_memory;

    #[test]
    fn write_then_read_roundtrips() {
        let conn = open_db_in_memory().unwrap();
        write_blob(&conn, "sample", "[1,2,3]").unwrap();
        assert_eq!(read_blob(&conn, "sample").unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn write_replaces_previous_value() {
        let conn = open_db_in_memory().unwrap();
        write_blob(&conn, "sample", "old").unwrap();
        write_blob(&conn, "sample", "new").unwrap();
        assert_eq!(read_blob(&conn, "sample").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn missing_entry_reads_none_and_delete_is_idempotent() {
        let conn = open_db_in_memory().unwrap();
        assert_eq!(read_blob(&conn, "absent").unwrap(), None);
        delete_blob(&conn, "absent").unwrap();
        write_blob(&conn, "absent", "x").unwrap();
        delete_blob(&conn, "absent").unwrap();
        assert_eq!(read_blob(&conn, "absent").unwrap(), None);
    }
}
