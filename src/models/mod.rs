pub mod resource;
pub mod resource_tag;
pub mod tag;
