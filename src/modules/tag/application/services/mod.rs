mod create_tag_service;
mod delete_tag_service;
mod list_tags_service;

pub use create_tag_service::CreateTagService;
pub use delete_tag_service::DeleteTagService;
pub use list_tags_service::ListTagsService;
