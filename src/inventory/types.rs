use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Component categories known to the inventory API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ComponentType {
    Motherboard,
    Chassis,
    Cpu,
    Ram,
    Storage,
    Nic,
    Psu,
    #[value(name = "hbacard")]
    HbaCard,
    Caddy,
    #[value(name = "pciecard")]
    PcieCard,
}

impl ComponentType {
    /// Host components first, so later types can be validated against them.
    pub const IMPORT_ORDER: [ComponentType; 10] = [
        ComponentType::Motherboard,
        ComponentType::Chassis,
        ComponentType::Cpu,
        ComponentType::Ram,
        ComponentType::Storage,
        ComponentType::Nic,
        ComponentType::Psu,
        ComponentType::HbaCard,
        ComponentType::Caddy,
        ComponentType::PcieCard,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::Motherboard => "motherboard",
            ComponentType::Chassis => "chassis",
            ComponentType::Cpu => "cpu",
            ComponentType::Ram => "ram",
            ComponentType::Storage => "storage",
            ComponentType::Nic => "nic",
            ComponentType::Psu => "psu",
            ComponentType::HbaCard => "hbacard",
            ComponentType::Caddy => "caddy",
            ComponentType::PcieCard => "pciecard",
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returns the first non-empty candidate.
///
/// Upstream records carry their model under `product_name`, `model` or `name`
/// depending on the component table they came from, in that precedence.
pub fn resolve_model_name<'a>(
    product_name: Option<&'a str>,
    model: Option<&'a str>,
    name: Option<&'a str>,
) -> Option<&'a str> {
    [product_name, model, name]
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.is_empty())
}

/// Accepts strings and numbers, anything else reads as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Truthiness as the PHP backend's clients read it: `1`, `"1"` and
/// non-empty strings count as true, `0`, `""` and `null` as false.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => flag,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

/// One component selection stored on a template configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateComponent {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub slot_position: Option<String>,
}

impl TemplateComponent {
    /// Non-object entries carry no model info and come back empty.
    pub fn from_value(value: &Value) -> Self {
        if value.is_object() {
            serde_json::from_value(value.clone()).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    pub fn model_name(&self) -> Option<&str> {
        resolve_model_name(
            self.product_name.as_deref(),
            self.model.as_deref(),
            self.name.as_deref(),
        )
    }
}

/// A physical component currently held in inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    #[serde(default, deserialize_with = "lenient_id")]
    pub uuid: String,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl InventoryItem {
    pub fn model_name(&self) -> Option<&str> {
        resolve_model_name(
            self.product_name.as_deref(),
            self.model.as_deref(),
            self.name.as_deref(),
        )
    }
}

/// A saved server build, either real or a virtual template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerConfiguration {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub config_uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_virtual: Option<Value>,
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub configuration_status: Option<String>,
    /// Type key -> list of selections. Kept raw, upstream shapes vary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Value>,
}

impl ServerConfiguration {
    /// Boolean `true`, or anything that compares loosely equal to `1`
    /// (the number, or a numeric string such as `"1"`). `"true"` does not.
    pub fn is_template(&self) -> bool {
        match &self.is_virtual {
            Some(Value::Bool(flag)) => *flag,
            Some(Value::Number(n)) => n.as_f64() == Some(1.0),
            Some(Value::String(s)) => s.trim().parse::<f64>().ok() == Some(1.0),
            _ => false,
        }
    }

    pub fn has_components(&self) -> bool {
        self.components.is_some()
    }

    /// Entries stored under `component_type`, or `None` when the key is
    /// missing or does not hold a list.
    pub fn component_entries(&self, component_type: ComponentType) -> Option<Vec<TemplateComponent>> {
        let entries = self
            .components
            .as_ref()?
            .get(component_type.as_str())?
            .as_array()?;
        Some(entries.iter().map(TemplateComponent::from_value).collect())
    }
}

/// `server-get-config` answers either `{configuration: {...}}` or the bare
/// configuration object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ConfigurationDetail {
    Wrapped { configuration: ServerConfiguration },
    Bare(ServerConfiguration),
}

impl ConfigurationDetail {
    pub fn into_configuration(self) -> ServerConfiguration {
        match self {
            ConfigurationDetail::Wrapped { configuration } => configuration,
            ConfigurationDetail::Bare(configuration) => configuration,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigurationList {
    #[serde(default)]
    pub configurations: Option<Vec<ServerConfiguration>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ComponentList {
    #[serde(default)]
    pub components: Option<Vec<InventoryItem>>,
}

/// Standard envelope returned by every API action.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default, deserialize_with = "lenient_bool")]
    pub success: bool,
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

/// Parameters for attaching one inventory item to a configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssignRequest {
    pub config_uuid: String,
    pub component_type: ComponentType,
    pub component_uuid: String,
    pub quantity: u32,
    pub slot_position: String,
    #[serde(rename = "override")]
    pub override_compatibility: bool,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
