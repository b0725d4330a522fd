// Shared layout values
pub mod base_template;
pub use base_template::TemplateGlobals;

// Individual template files
pub mod home_template;
pub mod products_page_template;
pub mod product_detail_template;
pub mod categories_template;
pub mod not_found_template;

// Re-export all templates
pub use home_template::HomeTemplate;
pub use products_page_template::ProductsPageTemplate;
pub use product_detail_template::ProductDetailTemplate;
pub use categories_template::CategoriesTemplate;
pub use not_found_template::NotFoundTemplate;
