pub mod assignments;
pub mod quotes;
pub mod requests;
