//! Category CRUD operations.

use blogstore_common::{CategoryId, Result};
use rusqlite::Connection;

use super::store;
use crate::models::{Category, NewCategory};

/// Create a new category.
pub fn add_category(conn: &Connection, name: &str) -> Result<Category> {
    store::add(conn, NewCategory::new(name))
}

/// Get a category by ID.
pub fn get_category(conn: &Connection, id: CategoryId) -> Result<Option<Category>> {
    store::get_by_id(conn, id)
}

/// Delete a category. Returns `false` if it did not exist.
pub fn remove_category(conn: &Connection, id: CategoryId) -> Result<bool> {
    store::remove_by_id::<Category>(conn, id)
}

/// List all categories.
pub fn list_categories(conn: &Connection) -> Result<Vec<Category>> {
    store::list_all(conn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::init_memory_pool;

    #[test]
    fn crud() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let category = add_category(&conn, "Tech").unwrap();
        assert_eq!(category.name, "Tech");

        let found = get_category(&conn, category.id).unwrap().unwrap();
        assert_eq!(found, category);

        assert_eq!(list_categories(&conn).unwrap(), vec![category.clone()]);

        assert!(remove_category(&conn, category.id).unwrap());
        assert!(get_category(&conn, category.id).unwrap().is_none());
    }

    #[test]
    fn remove_twice() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        let category = add_category(&conn, "Tech").unwrap();
        assert_eq!(category.id, CategoryId::new(1));

        assert!(remove_category(&conn, category.id).unwrap());
        assert!(!remove_category(&conn, category.id).unwrap());
        assert!(list_categories(&conn).unwrap().is_empty());
    }

    #[test]
    fn names_are_not_unique() {
        let pool = init_memory_pool().unwrap();
        let conn = pool.get().unwrap();

        add_category(&conn, "Tech").unwrap();
        add_category(&conn, "Tech").unwrap();
        add_category(&conn, "").unwrap();

        assert_eq!(list_categories(&conn).unwrap().len(), 3);
    }
}
