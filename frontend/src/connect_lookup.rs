use wasm_bindgen_futures::spawn_local;

use shared::lookup::{countries_url, country_options, states_url, RegionSelect};
use shared::types::{CountriesResponse, StatesResponse};

use crate::connect_fetch::{get_json, post_json};
use crate::state::{COUNTRIES, REGION, REGION_LOOKUP};

pub fn load_countries() {
    spawn_local(async {
        match get_json::<CountriesResponse>(&countries_url()).await {
            Ok(resp) => match country_options(&resp) {
                Some(list) => {
                    log::info!("countries loaded: {}", list.len());
                    COUNTRIES.lock_mut().replace_cloned(list);
                }
                None => log::error!("Error loading countries: {}", resp.msg),
            },
            Err(err) => log::error!("Error loading countries: {:?}", err),
        }
    });
}

pub fn load_regions(country: &str) {
    let request = REGION_LOOKUP.lock_mut().select(country);
    let Some(request) = request else {
        REGION.set(RegionSelect::default());
        return;
    };
    REGION.set(RegionSelect::loading());

    spawn_local(async move {
        match post_json::<StatesResponse, _>(&states_url(), &request).await {
            Ok(resp) => {
                let select = REGION_LOOKUP.lock_ref().accept(&request.country, &resp);
                if let Some(select) = select {
                    REGION.set(select);
                }
            }
            Err(err) => {
                log::error!("Error loading states: {:?}", err);
                if REGION_LOOKUP.lock_ref().is_current(&request.country) {
                    REGION.set(RegionSelect::default());
                }
            }
        }
    });
}
