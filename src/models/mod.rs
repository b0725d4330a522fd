pub mod app_state;
pub mod category;
pub mod category_link;
pub mod filter_chip;
pub mod product;
pub mod product_card;
pub mod product_detail;

pub use app_state::AppState;
pub use category::Category;
pub use category_link::CategoryLink;
pub use filter_chip::FilterChip;
pub use product::Product;
pub use product_card::ProductCard;
pub use product_detail::ProductDetail;
