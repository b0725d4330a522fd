pub mod helpers;
pub mod home;
pub mod products;
pub mod categories;
pub mod system;
