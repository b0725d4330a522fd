//! Pure transforms from fetched data to what pages display.

mod carousel;
mod derive;
mod page_status;
mod text;

pub use carousel::ImageCarousel;
pub use derive::{category_names, derive_view, SortKey};
pub use page_status::PageStatus;
pub use text::excerpt;
