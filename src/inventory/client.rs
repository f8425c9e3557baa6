use crate::config::Settings;
use crate::error::{ImsError, Result};
use crate::inventory::types::{
    ApiResponse, AssignRequest, ComponentList, ComponentType, ConfigurationDetail,
    ConfigurationList,
};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Operations the importer and the CLI need from the inventory service.
pub trait InventoryApi {
    fn list_configurations(
        &self,
        limit: u32,
        offset: u32,
        status: Option<u8>,
    ) -> Result<ApiResponse<ConfigurationList>>;

    fn get_configuration(&self, config_uuid: &str) -> Result<ApiResponse<ConfigurationDetail>>;

    fn list_available_components(
        &self,
        component_type: ComponentType,
        include_unavailable: bool,
        limit: u32,
    ) -> Result<ApiResponse<ComponentList>>;

    fn assign_component(&self, request: &AssignRequest) -> Result<ApiResponse<serde_json::Value>>;
}

/// Blocking client for the IMS `api.php` endpoint. Every action is a form
/// POST carrying an `action` field.
pub struct HttpInventoryClient {
    client: reqwest::blocking::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpInventoryClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.api_base_url.clone(),
            token: settings.token.clone(),
        })
    }

    fn post<T: DeserializeOwned>(&self, action: &str, params: Vec<(&str, String)>) -> Result<ApiResponse<T>> {
        let mut form = vec![("action", action.to_string())];
        form.extend(params);

        debug!(action, url = %self.base_url, "sending API request");

        let mut request = self.client.post(&self.base_url).form(&form);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        debug!(action, status, "received API response");
        parse_envelope(status, &body)
    }
}

/// The service reports most failures inside a well-formed envelope, even on
/// non-2xx statuses. Only bodies that are not envelopes become errors.
pub fn parse_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<ApiResponse<T>> {
    match serde_json::from_str::<ApiResponse<T>>(body) {
        Ok(envelope) => Ok(envelope),
        Err(_) if !(200..300).contains(&status) => Err(ImsError::Http {
            status,
            body: body.to_string(),
        }),
        Err(e) => Err(ImsError::Json(e)),
    }
}

impl InventoryApi for HttpInventoryClient {
    fn list_configurations(
        &self,
        limit: u32,
        offset: u32,
        status: Option<u8>,
    ) -> Result<ApiResponse<ConfigurationList>> {
        let mut params = vec![("limit", limit.to_string()), ("offset", offset.to_string())];
        if let Some(status) = status {
            params.push(("status", status.to_string()));
        }
        self.post("server-list-configs", params)
    }

    fn get_configuration(&self, config_uuid: &str) -> Result<ApiResponse<ConfigurationDetail>> {
        self.post("server-get-config", vec![("config_uuid", config_uuid.to_string())])
    }

    fn list_available_components(
        &self,
        component_type: ComponentType,
        include_unavailable: bool,
        limit: u32,
    ) -> Result<ApiResponse<ComponentList>> {
        let action = format!("{}-list", component_type.as_str());
        self.post(
            &action,
            vec![
                ("available_only", (!include_unavailable).to_string()),
                ("limit", limit.to_string()),
            ],
        )
    }

    fn assign_component(&self, request: &AssignRequest) -> Result<ApiResponse<serde_json::Value>> {
        self.post(
            "server-add-component",
            vec![
                ("config_uuid", request.config_uuid.clone()),
                ("component_type", request.component_type.as_str().to_string()),
                ("component_uuid", request.component_uuid.clone()),
                ("quantity", request.quantity.to_string()),
                ("slot_position", request.slot_position.clone()),
                ("override", request.override_compatibility.to_string()),
            ],
        )
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;
