mod create_tag;
mod delete_tag;
mod list_tags;

pub use create_tag::{create_tag_handler, CreateTagRequest};
pub use delete_tag::delete_tag_handler;
pub use list_tags::list_tags_handler;

pub use create_tag::__path_create_tag_handler;
pub use delete_tag::__path_delete_tag_handler;
pub use list_tags::__path_list_tags_handler;
