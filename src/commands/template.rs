use crate::cli::TemplateCommands;
use crate::config::Settings;
use crate::error::{ImsError, Result};
use crate::inventory::InventoryApi;
use crate::output::{output_data, output_import_result, print_info};
use crate::template::{ImportOptions, TemplateImporter};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct TemplateSummary {
    config_uuid: Option<String>,
    server_name: Option<String>,
    component_types: Vec<String>,
}

pub fn handle_template_command(
    cmd: &TemplateCommands,
    api: &dyn InventoryApi,
    settings: &Settings,
) -> Result<()> {
    let importer = TemplateImporter::new(api, ImportOptions::from(settings));

    match cmd {
        TemplateCommands::List { format } => {
            let templates = importer.list_templates()?;
            if templates.is_empty() && format == "pretty" {
                print_info("No templates found");
                return Ok(());
            }

            let summaries: Vec<TemplateSummary> = templates
                .into_iter()
                .map(|template| TemplateSummary {
                    component_types: template
                        .components
                        .as_ref()
                        .and_then(|components| components.as_object())
                        .map(|components| components.keys().cloned().collect())
                        .unwrap_or_default(),
                    config_uuid: template.config_uuid,
                    server_name: template.server_name,
                })
                .collect();
            output_data(&summaries, format)?;
        }
        TemplateCommands::Import { target, template, format } => {
            if format == "pretty" {
                println!("Importing template {} into {}...", template, target);
            }

            let result = importer.import_template(target, template);
            output_import_result(&result, format)?;

            if !result.success {
                return Err(ImsError::ImportFailed(
                    result.error.unwrap_or_else(|| "unknown error".to_string()),
                ));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "template_test.rs"]
mod template_test;
