pub mod config_modal;
pub mod conversation_detail;
pub mod conversation_list;
pub mod header;
pub mod stats_cards;
pub mod theme_toggle;
