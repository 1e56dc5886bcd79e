use crate::constants::{LOOKUP_COUNTRIES, LOOKUP_ROOT, LOOKUP_STATES, PLACEHOLDER_LOADING, PLACEHOLDER_REGION, REGION_NONE_TEXT, REGION_NONE_VALUE};
use crate::types::{CountriesResponse, StatesRequest, StatesResponse};
use crate::utils::{is_blank, sorted_names};

pub fn countries_url() -> String {
    format!("{LOOKUP_ROOT}/{LOOKUP_COUNTRIES}")
}

pub fn states_url() -> String {
    format!("{LOOKUP_ROOT}/{LOOKUP_STATES}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub text: String,
}

impl SelectOption {
    pub fn named(name: &str) -> Self {
        Self { value: name.to_string(), text: name.to_string() }
    }
}

/// `None` when the service reports an error; the caller keeps what it has.
pub fn country_options(resp: &CountriesResponse) -> Option<Vec<SelectOption>> {
    if resp.error {
        return None;
    }
    Some(sorted_names(resp.data.iter().map(|c| c.name.as_str()))
        .iter()
        .map(|name| SelectOption::named(name))
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionSelect {
    Disabled {
        placeholder: String,
    },
    Ready {
        options: Vec<SelectOption>,
        selected: Option<String>,
    },
}

impl Default for RegionSelect {
    fn default() -> Self {
        RegionSelect::Disabled { placeholder: PLACEHOLDER_REGION.to_string() }
    }
}

impl RegionSelect {
    pub fn loading() -> Self {
        RegionSelect::Disabled { placeholder: PLACEHOLDER_LOADING.to_string() }
    }

    pub fn from_response(resp: &StatesResponse) -> Self {
        let names = match (&resp.data, resp.error) {
            (Some(data), false) => sorted_names(data.states.iter().map(|s| s.name.as_str())),
            _ => vec![],
        };
        if names.is_empty() {
            RegionSelect::Ready {
                options: vec![SelectOption {
                    value: REGION_NONE_VALUE.to_string(),
                    text: REGION_NONE_TEXT.to_string(),
                }],
                selected: Some(REGION_NONE_VALUE.to_string()),
            }
        } else {
            RegionSelect::Ready {
                options: names.iter().map(|name| SelectOption::named(name)).collect(),
                selected: None,
            }
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, RegionSelect::Ready { .. })
    }

    pub fn placeholder(&self) -> &str {
        match self {
            RegionSelect::Disabled { placeholder } => placeholder.as_str(),
            RegionSelect::Ready { .. } => PLACEHOLDER_REGION,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        match self {
            RegionSelect::Disabled { .. } => &[],
            RegionSelect::Ready { options, .. } => options.as_slice(),
        }
    }

    pub fn selected(&self) -> Option<&str> {
        match self {
            RegionSelect::Disabled { .. } => None,
            RegionSelect::Ready { selected, .. } => selected.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegionLookup {
    current: Option<String>,
}

impl RegionLookup {
    pub fn select(&mut self, country: &str) -> Option<StatesRequest> {
        if is_blank(country) {
            self.current = None;
            return None;
        }
        let country = country.trim().to_string();
        self.current = Some(country.clone());
        Some(StatesRequest { country })
    }

    pub fn is_current(&self, country: &str) -> bool {
        self.current.as_deref() == Some(country)
    }

    pub fn accept(&self, country: &str, resp: &StatesResponse) -> Option<RegionSelect> {
        if !self.is_current(country) {
            log::debug!("regions for {country} arrived after selection changed");
            return None;
        }
        Some(RegionSelect::from_response(resp))
    }
}
