use std::collections::BTreeSet;
use std::sync::Arc;

use crate::shared::validation::FieldErrors;
use crate::tag::application::domain::entities::TagId;
use crate::tag::application::ports::outgoing::{TagQuery, TagQueryError};

/// Checks tag ids submitted with group and event forms.
#[derive(Clone)]
pub struct TagResolver {
    tag_query: Arc<dyn TagQuery + Send + Sync>,
}

impl TagResolver {
    pub fn new(tag_query: Arc<dyn TagQuery + Send + Sync>) -> Self {
        Self { tag_query }
    }

    /// Deduplicates `ids` and records `"Unknown tag id <n>."` under `tags`
    /// for every id that is missing or soft-deleted.
    pub async fn resolve_active(
        &self,
        ids: &[i32],
        errors: &mut FieldErrors,
    ) -> Result<Vec<TagId>, TagQueryError> {
        let wanted: Vec<TagId> = ids
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(TagId::from)
            .collect();

        if wanted.is_empty() {
            return Ok(wanted);
        }

        let active: BTreeSet<TagId> = self
            .tag_query
            .find_by_ids(&wanted)
            .await?
            .into_iter()
            .filter(|tag| !tag.is_deleted)
            .map(|tag| tag.id)
            .collect();

        for id in wanted.iter().filter(|id| !active.contains(id)) {
            errors.add("tags", format!("Unknown tag id {id}."));
        }

        Ok(wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::tag::application::domain::entities::Tag;
    use crate::tests::support::fixtures::sample_tag;

    struct FixedTags(Vec<Tag>);

    #[async_trait]
    impl TagQuery for FixedTags {
        async fn find_by_id(&self, _tag_id: TagId) -> Result<Option<Tag>, TagQueryError> {
            unimplemented!()
        }

        async fn find_by_name(&self, _name: &str) -> Result<Option<Tag>, TagQueryError> {
            unimplemented!()
        }

        async fn find_by_ids(&self, ids: &[TagId]) -> Result<Vec<Tag>, TagQueryError> {
            Ok(self
                .0
                .iter()
                .filter(|tag| ids.contains(&tag.id))
                .cloned()
                .collect())
        }

        async fn list_active_tags(&self) -> Result<Vec<Tag>, TagQueryError> {
            unimplemented!()
        }
    }

    fn resolver() -> TagResolver {
        let mut deleted = sample_tag(3, "retired");
        deleted.is_deleted = true;
        TagResolver::new(Arc::new(FixedTags(vec![
            sample_tag(1, "outdoors"),
            sample_tag(2, "running"),
            deleted,
        ])))
    }

    #[tokio::test]
    async fn known_ids_pass_and_are_deduplicated() {
        let mut errors = FieldErrors::new();
        let ids = resolver()
            .resolve_active(&[2, 1, 2], &mut errors)
            .await
            .unwrap();

        assert!(errors.is_empty());
        assert_eq!(ids, vec![TagId::from(1), TagId::from(2)]);
    }

    #[tokio::test]
    async fn unknown_and_deleted_ids_are_reported() {
        let mut errors = FieldErrors::new();
        resolver()
            .resolve_active(&[1, 3, 42], &mut errors)
            .await
            .unwrap();

        assert_eq!(
            errors.get("tags"),
            Some(
                &[
                    "Unknown tag id 3.".to_string(),
                    "Unknown tag id 42.".to_string()
                ][..]
            )
        );
    }

    #[tokio::test]
    async fn empty_input_skips_the_query() {
        let mut errors = FieldErrors::new();
        let ids = TagResolver::new(Arc::new(FixedTags(vec![])))
            .resolve_active(&[], &mut errors)
            .await
            .unwrap();

        assert!(ids.is_empty());
        assert!(errors.is_empty());
    }
}
