pub mod app;
pub mod create_post;
pub mod feed_view;
pub mod navbar;
pub mod post_card;
pub mod reveal_progress;
pub mod toast;
