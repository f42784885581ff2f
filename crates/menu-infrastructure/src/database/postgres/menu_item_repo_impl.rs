// ============================================================================
// Menu Infrastructure - PostgreSQL Menu Item Repository
// File: crates/menu-infrastructure/src/database/postgres/menu_item_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{debug, error};
use uuid::Uuid;

use menu_core::domain::{MenuItem, UrlTarget};
use menu_core::error::MenuError;
use menu_core::repositories::MenuItemRepository;

pub struct PgMenuItemRepository {
    pool: PgPool,
}

impl PgMenuItemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct MenuItemRow {
    pub id: Uuid,
    pub menu_id: Uuid,
    pub parent_id: Option<Uuid>,
    pub title: String,
    pub url: Option<String>,
    pub named_url: Option<String>,
    pub sort_order: i32,
}

impl TryFrom<MenuItemRow> for MenuItem {
    type Error = MenuError;

    fn try_from(row: MenuItemRow) -> Result<Self, Self::Error> {
        let target = UrlTarget::from_columns(row.id, row.url, row.named_url)?;
        Ok(MenuItem {
            id: row.id,
            menu_id: row.menu_id,
            parent_id: row.parent_id,
            title: row.title,
            order: row.sort_order,
            target,
        })
    }
}

#[async_trait]
impl MenuItemRepository for PgMenuItemRepository {
    async fn fetch_items(&self, menu_name: &str) -> Result<Vec<MenuItem>, MenuError> {
        let rows: Vec<MenuItemRow> = sqlx::query_as(
            r#"
            SELECT 
                i.id, i.menu_id, i.parent_id, i.title,
                i.url, i.named_url, i.sort_order
            FROM menu_items i
            INNER JOIN menus m ON m.id = i.menu_id
            WHERE m.name = $1
            ORDER BY i.sort_order ASC, i.seq ASC
            "#
        )
        .bind(menu_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error fetching items for menu {}: {}", menu_name, e);
            MenuError::DatabaseError(e.to_string())
        })?;

        debug!("Fetched {} items for menu {}", rows.len(), menu_name);
        rows.into_iter().map(MenuItem::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(url: Option<&str>, named_url: Option<&str>) -> MenuItemRow {
        MenuItemRow {
            id: Uuid::new_v4(),
            menu_id: Uuid::new_v4(),
            parent_id: None,
            title: "Web".to_string(),
            url: url.map(str::to_string),
            named_url: named_url.map(str::to_string),
            sort_order: 3,
        }
    }

    #[test]
    fn test_literal_row_maps_to_item() {
        let row = row(Some("/services/mobile/"), None);
        let id = row.id;
        let item = MenuItem::try_from(row).unwrap();

        assert_eq!(item.id, id);
        assert_eq!(item.order, 3);
        assert_eq!(item.target, UrlTarget::Literal("/services/mobile/".to_string()));
    }

    #[test]
    fn test_named_row_maps_to_named_target() {
        let item = MenuItem::try_from(row(None, Some("foo-bar"))).unwrap();
        assert_eq!(item.target, UrlTarget::Named("foo-bar".to_string()));
    }

    #[test]
    fn test_row_without_link_is_rejected() {
        let result = MenuItem::try_from(row(Some(""), None));
        assert!(matches!(result, Err(MenuError::InvalidItem { .. })));
    }
}
