pub mod list;

pub use list::CategoryList;
