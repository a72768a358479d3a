use std::sync::Arc;

use crate::tag::application::ports::incoming::use_cases::{
    CreateTagUseCase, DeleteTagUseCase, ListTagsUseCase,
};

#[derive(Clone)]
pub struct TagUseCases {
    pub create: Arc<dyn CreateTagUseCase + Send + Sync>,
    pub list: Arc<dyn ListTagsUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTagUseCase + Send + Sync>,
}
