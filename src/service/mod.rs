//! ListService: validation plus the five list item operations.

mod crud;
mod validation;
pub use crud::ListService;
pub use validation::{validate_list_field, MAX_LIST_LEN};
