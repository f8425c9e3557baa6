use crate::config::Settings;
use crate::error::{ImsError, Result};
use crate::inventory::{AssignRequest, ComponentType, InventoryApi, ServerConfiguration, TemplateComponent};
use crate::template::pool::WorkingPool;
use crate::template::report::{ImportResult, SkipReason};
use std::time::Instant;
use tracing::{debug, info, warn};

/// `configuration_status` value of active server builds.
const ACTIVE_STATUS: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOptions {
    /// Page size when listing configurations to find templates.
    pub template_page_limit: u32,
    /// Available items fetched per component type.
    pub inventory_limit: u32,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            template_page_limit: 100,
            inventory_limit: 100,
        }
    }
}

impl From<&Settings> for ImportOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            template_page_limit: settings.page_limit,
            inventory_limit: settings.page_limit,
        }
    }
}

/// Copies a template configuration's component selections onto a target
/// configuration using whatever matching inventory is currently available.
pub struct TemplateImporter<'a, A: InventoryApi + ?Sized> {
    api: &'a A,
    options: ImportOptions,
}

impl<'a, A: InventoryApi + ?Sized> TemplateImporter<'a, A> {
    pub fn new(api: &'a A, options: ImportOptions) -> Self {
        Self { api, options }
    }

    /// Active configurations flagged as virtual. API failures propagate.
    pub fn list_templates(&self) -> Result<Vec<ServerConfiguration>> {
        let response = self
            .api
            .list_configurations(self.options.template_page_limit, 0, Some(ACTIVE_STATUS))?;

        if !response.success {
            debug!(message = ?response.message, "configuration listing unsuccessful");
            return Ok(Vec::new());
        }

        let configurations = response
            .data
            .and_then(|data| data.configurations)
            .unwrap_or_default();

        Ok(configurations
            .into_iter()
            .filter(ServerConfiguration::is_template)
            .collect())
    }

    /// Never fails: per-entry problems land in `skipped`, run-level problems
    /// clear `success` and set `error`.
    pub fn import_template(&self, target_uuid: &str, template_uuid: &str) -> ImportResult {
        let started = Instant::now();
        let mut result = ImportResult::new(target_uuid, template_uuid);

        match self.run_import(target_uuid, template_uuid, &mut result) {
            Ok(()) => result.success = true,
            Err(e) => {
                warn!(target_config = target_uuid, template_config = template_uuid, error = %e, "template import failed");
                result.success = false;
                result.error = Some(e.to_string());
            }
        }

        result.duration_ms = started.elapsed().as_millis() as u64;
        info!(
            target_config = target_uuid,
            template_config = template_uuid,
            success = result.success,
            "template import finished: {}",
            result.summary()
        );
        result
    }

    fn run_import(&self, target_uuid: &str, template_uuid: &str, result: &mut ImportResult) -> Result<()> {
        let template = self.load_template(template_uuid)?;

        if !template.has_components() {
            debug!(template_config = template_uuid, "template has no components");
            return Ok(());
        }

        for component_type in ComponentType::IMPORT_ORDER {
            let entries = match template.component_entries(component_type) {
                Some(entries) if !entries.is_empty() => entries,
                _ => continue,
            };

            let pool = self.fetch_pool(component_type)?;
            self.process_component_type(target_uuid, &entries, pool, result);
        }

        Ok(())
    }

    fn load_template(&self, template_uuid: &str) -> Result<ServerConfiguration> {
        let response = self.api.get_configuration(template_uuid)?;
        if !response.success {
            return Err(ImsError::TemplateUnavailable);
        }
        response
            .data
            .map(|detail| detail.into_configuration())
            .ok_or(ImsError::TemplateUnavailable)
    }

    fn fetch_pool(&self, component_type: ComponentType) -> Result<WorkingPool> {
        let response = self
            .api
            .list_available_components(component_type, false, self.options.inventory_limit)?;

        let items = if response.success {
            response
                .data
                .and_then(|data| data.components)
                .unwrap_or_default()
        } else {
            debug!(%component_type, message = ?response.message, "inventory listing unsuccessful");
            Vec::new()
        };

        Ok(WorkingPool::new(component_type, items))
    }

    fn process_component_type(
        &self,
        target_uuid: &str,
        entries: &[TemplateComponent],
        mut pool: WorkingPool,
        result: &mut ImportResult,
    ) {
        let component_type = pool.component_type();
        debug!(
            %component_type,
            entries = entries.len(),
            available = pool.len(),
            "processing component type"
        );

        if pool.is_empty() {
            debug!(%component_type, "no available inventory for type");
        }

        for entry in entries {
            self.import_entry(target_uuid, entry, &mut pool, result);
        }
    }

    fn import_entry(
        &self,
        target_uuid: &str,
        entry: &TemplateComponent,
        pool: &mut WorkingPool,
        result: &mut ImportResult,
    ) {
        let component_type = pool.component_type();

        let Some(model) = entry.model_name() else {
            warn!(%component_type, "template entry has no model info");
            result.record_skipped(component_type, None, SkipReason::MissingModelInfo);
            return;
        };

        let Some((index, matched)) = pool.find(model) else {
            warn!(%component_type, model, "no available inventory matches");
            result.record_skipped(component_type, Some(model), SkipReason::OutOfStock);
            return;
        };

        let request = AssignRequest {
            config_uuid: target_uuid.to_string(),
            component_type,
            component_uuid: matched.uuid.clone(),
            quantity: 1,
            slot_position: entry.slot_position.clone().unwrap_or_default(),
            override_compatibility: false,
        };

        match self.api.assign_component(&request) {
            Ok(response) if response.success => {
                let claimed = pool.claim(index);
                debug!(%component_type, model, uuid = %claimed.uuid, "component assigned");
                result.record_added(component_type, model, &claimed.uuid);
            }
            Ok(response) => {
                warn!(%component_type, model, message = ?response.message, "assignment rejected");
                result.record_skipped(component_type, Some(model), SkipReason::Rejected(response.message));
            }
            Err(e) => {
                warn!(%component_type, model, error = %e, "assignment request failed");
                result.record_skipped(component_type, Some(model), SkipReason::NetworkError);
            }
        }
    }
}

#[cfg(test)]
#[path = "importer_test.rs"]
mod importer_test;
