pub mod catalog;
pub mod icon;
pub mod resource;
pub mod resource_tag;
pub mod stats;
pub mod tag;
pub mod view_state;
