mod schema_json;
mod schema_model;
mod sorted_categories;

pub use schema_model::SchemaModel;
pub(crate) use sorted_categories::SortedCategories;
