use serde::{Deserialize, Serialize};

/// A device as presented by the host: identity fields plus its ordered
/// parameter list.
///
/// `parameters[0]` is the device's reserved enable switch. It is excluded
/// from name matching and from the unmapped report everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DeviceDescriptor {
    pub class_name: String,
    #[serde(default)]
    pub class_display_name: Option<String>,
    pub name: String,
    pub parameters: Vec<ParameterInfo>,
}

/// One host parameter. The original name is host-assigned and immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterInfo {
    pub original_name: String,
}

impl DeviceDescriptor {
    /// The parameters eligible for matching: everything past the enable
    /// switch, in device order.
    pub fn matchable_parameters(&self) -> &[ParameterInfo] {
        self.parameters.get(1..).unwrap_or(&[])
    }
}

impl ParameterInfo {
    pub fn new(original_name: impl Into<String>) -> Self {
        ParameterInfo {
            original_name: original_name.into(),
        }
    }
}

/// The resolved overrides for one matched device parameter.
///
/// `index` is the parameter's position in the device's full parameter
/// list (so index 0 never appears here).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedParameter {
    pub index: usize,
    pub original_name: String,
    pub display_name: String,
    pub value_list: Option<Vec<String>>,
    pub start_points: Option<Vec<f64>>,
}

/// A named bank of resolved parameters, in configuration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedBank {
    pub name: String,
    pub parameters: Vec<ResolvedParameter>,
}
