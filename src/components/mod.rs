pub mod about;
pub mod back_to_top;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod partners;
pub mod services;
pub mod stats;
