pub mod bookmarks;
pub mod books;
pub mod readings;
