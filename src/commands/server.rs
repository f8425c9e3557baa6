use crate::cli::ServerCommands;
use crate::error::{ImsError, Result};
use crate::inventory::InventoryApi;
use crate::output::output_data;

pub fn handle_server_command(cmd: &ServerCommands, api: &dyn InventoryApi) -> Result<()> {
    match cmd {
        ServerCommands::List { limit, offset, status, format } => {
            let response = api.list_configurations(*limit, *offset, *status)?;
            if !response.success {
                return Err(api_failure("list configurations", response.message));
            }

            let configurations = response
                .data
                .and_then(|data| data.configurations)
                .unwrap_or_default();
            output_data(&configurations, format)?;
        }
        ServerCommands::Show { uuid, format } => {
            let response = api.get_configuration(uuid)?;
            if !response.success {
                return Err(api_failure("load configuration", response.message));
            }

            match response.data {
                Some(detail) => output_data(&detail.into_configuration(), format)?,
                None => return Err(api_failure("load configuration", None)),
            }
        }
    }
    Ok(())
}

pub(crate) fn api_failure(what: &str, message: Option<String>) -> ImsError {
    ImsError::Api(format!(
        "Failed to {}: {}",
        what,
        message.unwrap_or_else(|| "Unknown".to_string())
    ))
}
