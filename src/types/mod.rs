mod category;
mod errors;
mod transaction_id;

pub use category::Category;
pub use errors::ParseError;
pub use transaction_id::TransactionId;
