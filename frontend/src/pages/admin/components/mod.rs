pub mod badges;
pub mod cards;
pub mod detail_modal;
pub mod filter;
pub mod summary;
pub mod tabs;
