mod not_found_page;

pub use not_found_page::not_found_page;
