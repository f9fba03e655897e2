use super::Database;
use crate::error::StoreError;
use common::model::app::App;
use rusqlite::{params, Connection, OptionalExtension};

fn load_documents(
    conn: &Connection,
    sql: &str,
    args: impl rusqlite::Params,
) -> Result<Vec<App>, StoreError> {
    let mut stmt = conn.prepare(sql)?;
    let documents = stmt
        .query_map(args, |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    documents
        .iter()
        .map(|doc| serde_json::from_str(doc).map_err(StoreError::from))
        .collect()
}

fn find(conn: &Connection, id: &str) -> Result<Option<App>, StoreError> {
    let document: Option<String> = conn
        .query_row(
            "SELECT document FROM apps WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )
        .optional()?;

    match document {
        Some(doc) => Ok(Some(serde_json::from_str(&doc)?)),
        None => Ok(None),
    }
}

impl Database {
    /// All apps, ascending by `order`. Equal keys keep insertion order.
    pub fn list_apps(&self) -> Result<Vec<App>, StoreError> {
        let conn = self.lock();
        load_documents(
            &conn,
            "SELECT document FROM apps ORDER BY sort_order ASC, rowid ASC",
            [],
        )
    }

    pub fn list_trending_apps(&self) -> Result<Vec<App>, StoreError> {
        let conn = self.lock();
        load_documents(
            &conn,
            "SELECT document FROM apps WHERE is_trending = 1 ORDER BY sort_order ASC, rowid ASC",
            [],
        )
    }

    /// Apps whose name, category or short description contains `query`,
    /// ignoring case, in list order.
    pub fn search_apps(&self, query: &str) -> Result<Vec<App>, StoreError> {
        let mut apps = self.list_apps()?;
        apps.retain(|app| app.matches(query));
        Ok(apps)
    }

    pub fn get_app(&self, id: &str) -> Result<Option<App>, StoreError> {
        let conn = self.lock();
        find(&conn, id)
    }

    pub fn insert_app(&self, app: &App) -> Result<(), StoreError> {
        let document = serde_json::to_string(app)?;
        let conn = self.lock();
        conn.execute(
            "INSERT INTO apps (id, name, sort_order, is_trending, created_at, document)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                app.id,
                app.name,
                app.order,
                app.is_trending,
                app.created_at.timestamp_millis(),
                document
            ],
        )?;
        Ok(())
    }

    /// Loads the app, applies `change` and writes it back. Returns `None`
    /// when no app has this id.
    pub fn modify_app<F>(&self, id: &str, change: F) -> Result<Option<App>, StoreError>
    where
        F: FnOnce(&mut App),
    {
        let conn = self.lock();
        let Some(mut app) = find(&conn, id)? else {
            return Ok(None);
        };
        change(&mut app);

        let document = serde_json::to_string(&app)?;
        conn.execute(
            "UPDATE apps SET name = ?1, sort_order = ?2, is_trending = ?3, document = ?4
             WHERE id = ?5",
            params![app.name, app.order, app.is_trending, document, app.id],
        )?;
        Ok(Some(app))
    }

    /// Removes the app. Its reviews are left in place.
    pub fn delete_app(&self, id: &str) -> Result<bool, StoreError> {
        let conn = self.lock();
        let removed = conn.execute("DELETE FROM apps WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }
}
