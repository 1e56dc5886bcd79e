use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{PANEL_LOGIN, PANEL_REGISTER};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum Panel {
    #[default]
    Login,
    Register,
}

impl Panel {
    pub const ALL: [Panel; 2] = [Panel::Login, Panel::Register];

    pub fn other(self) -> Panel {
        match self {
            Panel::Login => Panel::Register,
            Panel::Register => Panel::Login,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Panel::Login => PANEL_LOGIN,
            Panel::Register => PANEL_REGISTER,
        }
    }
}

impl fmt::Display for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Panel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('#').to_ascii_lowercase().as_str() {
            "login" => Ok(Panel::Login),
            "register" => Ok(Panel::Register),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RequiredField {
    Country,
    Region,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::Country => f.write_str("country"),
            RequiredField::Region => f.write_str("region"),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RegistrationFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
    pub region: String,
    pub password: String,
    pub confirm_password: String,
}

// === countriesnow.space payloads

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CountriesResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Vec<CountryItem>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CountryItem {
    pub name: String,
    #[serde(rename = "Iso2", default, skip_serializing_if = "Option::is_none")]
    pub iso2: Option<String>,
    #[serde(rename = "Iso3", default, skip_serializing_if = "Option::is_none")]
    pub iso3: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StatesRequest {
    pub country: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StatesResponse {
    #[serde(default)]
    pub error: bool,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<StatesData>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StatesData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub iso3: Option<String>,
    #[serde(default)]
    pub states: Vec<StateItem>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StateItem {
    pub name: String,
    #[serde(default)]
    pub state_code: Option<String>,
}
