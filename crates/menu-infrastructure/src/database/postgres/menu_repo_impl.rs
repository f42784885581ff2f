// ============================================================================
// Menu Infrastructure - PostgreSQL Menu Repository
// File: crates/menu-infrastructure/src/database/postgres/menu_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::error;
use uuid::Uuid;

use menu_core::domain::Menu;
use menu_core::error::MenuError;
use menu_core::repositories::MenuRepository;

pub struct PgMenuRepository {
    pool: PgPool,
}

impl PgMenuRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuRow {
    pub id: Uuid,
    pub name: String,
    pub title: Option<String>,
}

impl From<MenuRow> for Menu {
    fn from(row: MenuRow) -> Self {
        Menu {
            id: row.id,
            name: row.name,
            title: row.title,
        }
    }
}

#[async_trait]
impl MenuRepository for PgMenuRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Menu>, MenuError> {
        let row: Option<MenuRow> = sqlx::query_as(
            r#"
            SELECT id, name, title
            FROM menus
            WHERE name = $1
            "#
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding menu by name: {}", e);
            MenuError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn list(&self) -> Result<Vec<Menu>, MenuError> {
        let rows: Vec<MenuRow> = sqlx::query_as(
            r#"
            SELECT id, name, title
            FROM menus
            ORDER BY name
            "#
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing menus: {}", e);
            MenuError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Menu::from).collect())
    }
}
