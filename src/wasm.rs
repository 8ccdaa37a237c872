//! JavaScript bindings.
//!
//! Cities cross the boundary as `[[x, y], ...]`; configs and results use
//! their serde forms.
//!
//! ```javascript
//! import init, { solveTour } from 'u-tsp';
//!
//! await init();
//! const result = solveTour([[0, 0], [1, 0], [1, 1], [0, 1]], {
//!   strategy: { kind: 'genetic', population_size: 20, generations: 10, seed: 7 },
//! });
//! console.log(result.tour, result.length);
//! ```

use wasm_bindgen::prelude::*;

use crate::error::TspError;
use crate::geometry::City;
use crate::solver::{solve, SolverConfig};
use crate::tour::tour_length;

fn to_js(err: TspError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_cities(cities: JsValue) -> Result<Vec<City>, JsValue> {
    let coords: Vec<[f64; 2]> = serde_wasm_bindgen::from_value(cities)
        .map_err(|e| JsValue::from_str(&format!("invalid cities: {e}")))?;
    Ok(coords.into_iter().map(|[x, y]| City::new(x, y)).collect())
}

/// Runs the configured strategy and returns the serialized `TourResult`.
///
/// A missing config (`undefined` or `null`) runs the default strategy.
#[wasm_bindgen(js_name = solveTour)]
pub fn solve_tour(cities: JsValue, config: JsValue) -> Result<JsValue, JsValue> {
    let cities = parse_cities(cities)?;
    let config: SolverConfig = if config.is_undefined() || config.is_null() {
        SolverConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("invalid config: {e}")))?
    };

    let result = solve(&cities, &config).map_err(to_js)?;
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Closed length of `tour` over `cities`.
#[wasm_bindgen(js_name = tourLength)]
pub fn tour_length_js(cities: JsValue, tour: Vec<u32>) -> Result<f64, JsValue> {
    let cities = parse_cities(cities)?;
    let tour: Vec<usize> = tour.into_iter().map(|c| c as usize).collect();
    if let Some(&bad) = tour.iter().find(|&&c| c >= cities.len()) {
        return Err(JsValue::from_str(&format!(
            "city index {bad} out of range for {} cities",
            cities.len()
        )));
    }
    Ok(tour_length(&tour, &cities))
}
