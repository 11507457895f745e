pub mod auth_modal;
pub mod cart_drawer;
pub mod filter_panel;
pub mod footer;
pub mod header;
pub mod modal;
pub mod product_card;
pub mod quick_view;
pub mod recently_viewed;
pub mod zoom_overlay;
