use crate::cli::ComponentCommands;
use crate::commands::server::api_failure;
use crate::error::Result;
use crate::inventory::{AssignRequest, InventoryApi};
use crate::output::{output_data, print_success};

pub fn handle_component_command(cmd: &ComponentCommands, api: &dyn InventoryApi) -> Result<()> {
    match cmd {
        ComponentCommands::Available {
            component_type,
            include_unavailable,
            limit,
            format,
        } => {
            let response = api.list_available_components(*component_type, *include_unavailable, *limit)?;
            if !response.success {
                return Err(api_failure("list components", response.message));
            }

            let components = response
                .data
                .and_then(|data| data.components)
                .unwrap_or_default();
            output_data(&components, format)?;
        }
        ComponentCommands::Add {
            server,
            component_type,
            component,
            quantity,
            slot,
            force,
        } => {
            let request = AssignRequest {
                config_uuid: server.clone(),
                component_type: *component_type,
                component_uuid: component.clone(),
                quantity: *quantity,
                slot_position: slot.clone(),
                override_compatibility: *force,
            };

            let response = api.assign_component(&request)?;
            if !response.success {
                return Err(api_failure("add component", response.message));
            }
            print_success(&format!("{} {} added to {}", component_type, component, server));
        }
    }
    Ok(())
}
