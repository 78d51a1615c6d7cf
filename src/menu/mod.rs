pub mod menu;

pub use menu::{format_rating, Menu, MenuChoice};
