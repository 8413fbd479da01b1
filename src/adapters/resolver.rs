use crate::domain::model::{TargetRef, TargetSelector};
use crate::domain::ports::TargetResolver;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashSet;

/// The only entity domain this integration ramps.
pub const SUPPORTED_DOMAIN: &str = "media_player";

/// Resolves explicit entity ids: deduplicates and keeps media players only.
///
/// Device, area and label selectors are expanded by the registry that
/// produced the call; ids arriving from them pass through the same filter.
pub struct ExplicitResolver;

#[async_trait]
impl TargetResolver for ExplicitResolver {
    async fn resolve(&self, selector: &TargetSelector) -> Result<Vec<TargetRef>> {
        let mut seen = HashSet::new();
        let mut targets = Vec::new();

        for id in &selector.entity_ids {
            let target = TargetRef::from(id.as_str());
            if target.domain() != Some(SUPPORTED_DOMAIN) {
                tracing::debug!(entity = %target, "skipping non media player entity");
                continue;
            }
            if seen.insert(target.clone()) {
                targets.push(target);
            }
        }

        Ok(targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_deduplicates_and_filters() {
        let selector = TargetSelector {
            entity_ids: vec![
                "media_player.kitchen".to_string(),
                "light.kitchen".to_string(),
                "media_player.kitchen".to_string(),
                "media_player.office".to_string(),
            ],
            ..TargetSelector::default()
        };

        let targets = ExplicitResolver.resolve(&selector).await.unwrap();

        assert_eq!(
            targets,
            vec![
                TargetRef::from("media_player.kitchen"),
                TargetRef::from("media_player.office"),
            ]
        );
    }

    #[tokio::test]
    async fn test_resolve_empty_selector() {
        let targets = ExplicitResolver
            .resolve(&TargetSelector::default())
            .await
            .unwrap();
        assert!(targets.is_empty());
    }
}
