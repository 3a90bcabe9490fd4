//! Pure derivations over a transaction collection: the summary cards, the
//! spending-by-category chart and the filtered table.

mod categories;
mod filter;
mod summary;

pub use categories::{categorize, CategoryTotal};
pub use filter::{filter, TransactionFilter, TypeFilter};
pub use summary::{summarize, Summary};
