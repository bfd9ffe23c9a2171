pub mod budget;
pub mod category;
pub mod expense;
pub mod window;

pub use budget::{Budget, DEFAULT_BUDGET};
pub use category::{capitalized, normalize_name, Category};
pub use expense::{Created, Expense, MONTHLY_SENTINEL};
pub use window::{DateSpan, Window};
