pub mod ask;
pub mod info;
pub mod query;
