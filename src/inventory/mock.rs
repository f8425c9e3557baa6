//! In-memory inventory service for tests.

use super::client::InventoryApi;
use super::types::{
    ApiResponse, AssignRequest, ComponentList, ComponentType, ConfigurationDetail,
    ConfigurationList, InventoryItem, ServerConfiguration,
};
use crate::error::{ImsError, Result};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    ListConfigurations { limit: u32, offset: u32, status: Option<u8> },
    GetConfiguration(String),
    ListAvailable(ComponentType),
    Assign(AssignRequest),
}

pub fn ok<T>(data: T) -> ApiResponse<T> {
    ApiResponse {
        success: true,
        message: None,
        data: Some(data),
    }
}

pub fn failure<T>(message: Option<&str>) -> ApiResponse<T> {
    ApiResponse {
        success: false,
        message: message.map(str::to_string),
        data: None,
    }
}

fn transport_error() -> ImsError {
    ImsError::Http {
        status: 503,
        body: "service unavailable".to_string(),
    }
}

pub fn item(uuid: &str, product_name: &str) -> InventoryItem {
    InventoryItem {
        uuid: uuid.to_string(),
        product_name: Some(product_name.to_string()),
        ..Default::default()
    }
}

#[derive(Default)]
pub struct MockInventoryApi {
    configurations: Vec<ServerConfiguration>,
    list_fails: bool,
    template: Option<ApiResponse<ConfigurationDetail>>,
    inventory: HashMap<ComponentType, Vec<InventoryItem>>,
    inventory_rejected: HashSet<ComponentType>,
    inventory_fails: HashSet<ComponentType>,
    assign_rejections: HashMap<String, Option<String>>,
    assign_fails: HashSet<String>,
    calls: RefCell<Vec<MockCall>>,
}

impl MockInventoryApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_configurations(mut self, configurations: Vec<ServerConfiguration>) -> Self {
        self.configurations = configurations;
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.list_fails = true;
        self
    }

    /// Serves `configuration` as a successful `server-get-config` answer.
    pub fn with_template(self, configuration: serde_json::Value) -> Self {
        let configuration: ServerConfiguration = serde_json::from_value(configuration).unwrap();
        self.with_template_response(ok(ConfigurationDetail::Wrapped { configuration }))
    }

    pub fn with_template_response(mut self, response: ApiResponse<ConfigurationDetail>) -> Self {
        self.template = Some(response);
        self
    }

    pub fn with_inventory(mut self, component_type: ComponentType, items: Vec<InventoryItem>) -> Self {
        self.inventory.insert(component_type, items);
        self
    }

    pub fn rejecting_inventory(mut self, component_type: ComponentType) -> Self {
        self.inventory_rejected.insert(component_type);
        self
    }

    pub fn failing_inventory(mut self, component_type: ComponentType) -> Self {
        self.inventory_fails.insert(component_type);
        self
    }

    pub fn rejecting_assignment(mut self, component_uuid: &str, message: Option<&str>) -> Self {
        self.assign_rejections
            .insert(component_uuid.to_string(), message.map(str::to_string));
        self
    }

    pub fn failing_assignment(mut self, component_uuid: &str) -> Self {
        self.assign_fails.insert(component_uuid.to_string());
        self
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.borrow().clone()
    }

    pub fn assignments(&self) -> Vec<AssignRequest> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                MockCall::Assign(request) => Some(request),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: MockCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl InventoryApi for MockInventoryApi {
    fn list_configurations(
        &self,
        limit: u32,
        offset: u32,
        status: Option<u8>,
    ) -> Result<ApiResponse<ConfigurationList>> {
        self.record(MockCall::ListConfigurations { limit, offset, status });
        if self.list_fails {
            return Err(transport_error());
        }
        Ok(ok(ConfigurationList {
            configurations: Some(self.configurations.clone()),
        }))
    }

    fn get_configuration(&self, config_uuid: &str) -> Result<ApiResponse<ConfigurationDetail>> {
        self.record(MockCall::GetConfiguration(config_uuid.to_string()));
        self.template.clone().ok_or_else(transport_error)
    }

    fn list_available_components(
        &self,
        component_type: ComponentType,
        _include_unavailable: bool,
        _limit: u32,
    ) -> Result<ApiResponse<ComponentList>> {
        self.record(MockCall::ListAvailable(component_type));
        if self.inventory_fails.contains(&component_type) {
            return Err(transport_error());
        }
        if self.inventory_rejected.contains(&component_type) {
            return Ok(failure(Some("inventory unavailable")));
        }
        Ok(ok(ComponentList {
            components: Some(self.inventory.get(&component_type).cloned().unwrap_or_default()),
        }))
    }

    fn assign_component(&self, request: &AssignRequest) -> Result<ApiResponse<serde_json::Value>> {
        self.record(MockCall::Assign(request.clone()));
        if self.assign_fails.contains(&request.component_uuid) {
            return Err(transport_error());
        }
        if let Some(message) = self.assign_rejections.get(&request.component_uuid) {
            return Ok(failure(message.as_deref()));
        }
        Ok(ok(serde_json::json!({"component_uuid": request.component_uuid})))
    }
}
