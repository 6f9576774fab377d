use serde::{Deserialize, Serialize};

/// Rendering type of a merchant setting field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Boolean on/off switch
    Checkbox,
    /// Secret string, masked in the admin UI
    Password,
    /// Plain single-line string
    Text,
    /// Free multi-line text
    Textarea,
}

/// One merchant setting field: key, label, type, default and a human
/// description. The host renders and persists these; the gateway only
/// declares them and reads the resolved values at construction time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigField {
    pub key: String,
    pub title: String,
    pub field_type: FieldType,
    pub description: String,
    pub default: String,
}

/// The declarative settings schema exposed to the host admin UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigSchema {
    pub gateway_id: String,
    pub fields: Vec<ConfigField>,
}

impl ConfigSchema {
    pub fn field(&self, key: &str) -> Option<&ConfigField> {
        self.fields.iter().find(|f| f.key == key)
    }
}

/// The merchant settings of the MobileCoin Payments gateway
pub fn mobilecoin_config_schema() -> ConfigSchema {
    ConfigSchema {
        gateway_id: "mobilecoin_payments".to_string(),
        fields: vec![
            ConfigField {
                key: "enabled".to_string(),
                title: "Enable/Disable".to_string(),
                field_type: FieldType::Checkbox,
                description: "Enable or Disable MobileCoin Payments".to_string(),
                default: "no".to_string(),
            },
            ConfigField {
                key: "public_api_key".to_string(),
                title: "Public Store API key".to_string(),
                field_type: FieldType::Password,
                description: "Associated with a specific Store, this API key can be used to \
                              perform non-sensitive operations such as creating new Payment \
                              Intents"
                    .to_string(),
                default: String::new(),
            },
            ConfigField {
                key: "secret_api_key".to_string(),
                title: "Secret Store API key".to_string(),
                field_type: FieldType::Password,
                description: "Associated with a specific Store and limited to a list of \
                              specific scopes, this API key can be used to perform sensitive \
                              operations such as listing payment intents."
                    .to_string(),
                default: String::new(),
            },
            ConfigField {
                key: "endpoint_url".to_string(),
                title: "Endpoint URL".to_string(),
                field_type: FieldType::Text,
                description: "Insert here the endpoint URL where the API will make calls"
                    .to_string(),
                default: "https://payments.mobilecoin.com/api/hosted-payments-page/".to_string(),
            },
            ConfigField {
                key: "title".to_string(),
                title: "MobileCoin Payments Gateway".to_string(),
                field_type: FieldType::Text,
                description: "Add a new title for the Mobile Coin Payments Gateway that \
                              customers will see in the checkout"
                    .to_string(),
                default: "MobileCoin Payments Gateway".to_string(),
            },
            ConfigField {
                key: "description".to_string(),
                title: "MobileCoin Payments Gateway Description".to_string(),
                field_type: FieldType::Textarea,
                description: "Add a new description for the Mobile Coin Payments Gateway that \
                              customers will see in the checkout"
                    .to_string(),
                default: "Please remit your payment to the shop to allow for the delivery to \
                          be made"
                    .to_string(),
            },
            ConfigField {
                key: "instructions".to_string(),
                title: "Instructions".to_string(),
                field_type: FieldType::Textarea,
                description: "Instructions that will be added to the thank you page and order \
                              email"
                    .to_string(),
                default: String::new(),
            },
        ],
    }
}
