//! # Fridge Registry
//!
//! Creates, renames, deactivates and lists the fridges of a site.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::availability::ServiceMode;
use crate::compliance::ComplianceBand;
use crate::demo;
use crate::error::LogbookError;
use crate::models::fridge;
use crate::repositories::{FridgeStore, NewFridge};

/// Site-scoped management of fridge records.
#[derive(Clone)]
pub struct FridgeRegistry {
    store: Option<Arc<dyn FridgeStore>>,
    default_band: ComplianceBand,
}

impl FridgeRegistry {
    /// Registry backed by a live store; new fridges get `default_band`.
    pub fn live(store: Arc<dyn FridgeStore>, default_band: ComplianceBand) -> Self {
        Self {
            store: Some(store),
            default_band,
        }
    }

    /// Registry without a backend.
    pub fn demo() -> Self {
        Self {
            store: None,
            default_band: ComplianceBand::default(),
        }
    }

    pub fn mode(&self) -> ServiceMode {
        if self.store.is_some() {
            ServiceMode::Live
        } else {
            ServiceMode::Demo
        }
    }

    /// Active fridges of `site_id` ordered by sort rank.
    ///
    /// In demo mode this is a single placeholder fridge.
    pub async fn list_fridges(&self, site_id: Uuid) -> Result<Vec<fridge::Model>, LogbookError> {
        let Some(store) = &self.store else {
            tracing::debug!(%site_id, "No backend configured, listing demo fridge");
            return Ok(vec![demo::demo_fridge(site_id, Utc::now())]);
        };

        let fridges = store.list_active(site_id).await.inspect_err(|error| {
            tracing::error!(%site_id, %error, "Failed to list fridges");
        })?;

        Ok(fridges)
    }

    /// Registers a fridge at the end of the site's display order.
    pub async fn create_fridge(
        &self,
        site_id: Uuid,
        name: &str,
    ) -> Result<fridge::Model, LogbookError> {
        let store = self.require_store("create_fridge")?;

        let created = store
            .insert_ranked(NewFridge {
                site_id,
                name: name.to_string(),
                band: self.default_band,
            })
            .await?;

        tracing::info!(
            %site_id,
            fridge_id = %created.id,
            sort_order = created.sort_order,
            "Fridge created"
        );

        Ok(created)
    }

    /// Changes the display name of a fridge.
    pub async fn rename_fridge(
        &self,
        fridge_id: Uuid,
        new_name: &str,
    ) -> Result<fridge::Model, LogbookError> {
        let store = self.require_store("rename_fridge")?;

        let renamed = store.rename(fridge_id, new_name.to_string()).await?;
        tracing::info!(%fridge_id, "Fridge renamed");

        Ok(renamed)
    }

    /// Soft-deletes a fridge; its temperature logs are untouched.
    pub async fn deactivate_fridge(&self, fridge_id: Uuid) -> Result<(), LogbookError> {
        let store = self.require_store("deactivate_fridge")?;

        store.deactivate(fridge_id).await?;
        tracing::info!(%fridge_id, "Fridge deactivated");

        Ok(())
    }

    fn require_store(&self, operation: &'static str) -> Result<&Arc<dyn FridgeStore>, LogbookError> {
        self.store.as_ref().ok_or_else(|| {
            tracing::warn!(operation, "Rejected fridge change, no backend configured");
            LogbookError::configuration(operation)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_registry_lists_placeholder() {
        let registry = FridgeRegistry::demo();
        let site_id = Uuid::new_v4();

        let fridges = registry.list_fridges(site_id).await.unwrap();

        assert_eq!(fridges.len(), 1);
        assert_eq!(fridges[0].id, demo::DEMO_FRIDGE_ID);
        assert_eq!(fridges[0].site_id, site_id);
        assert_eq!(registry.mode(), ServiceMode::Demo);
    }

    #[tokio::test]
    async fn test_demo_registry_rejects_changes() {
        let registry = FridgeRegistry::demo();

        let created = registry.create_fridge(Uuid::new_v4(), "Walk-in").await;
        assert!(matches!(
            created,
            Err(LogbookError::Configuration {
                operation: "create_fridge"
            })
        ));

        let renamed = registry
            .rename_fridge(demo::DEMO_FRIDGE_ID, "Prep Fridge")
            .await;
        assert!(matches!(renamed, Err(LogbookError::Configuration { .. })));

        let deactivated = registry.deactivate_fridge(demo::DEMO_FRIDGE_ID).await;
        assert!(matches!(
            deactivated,
            Err(LogbookError::Configuration { .. })
        ));
    }
}
