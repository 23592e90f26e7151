//! Browser bindings for the `ising-sim` engine.
//!
//! The page constructs `new IsingModel(L)`, calls one update per animation
//! frame and redraws from `to_js()`, which returns the lattice column by column
//! with 1 for a filled (spin up) cell.

use ising_sim::{Beta, IsingError, UpdateRule};
use js_sys::{Array, Uint8Array};
use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the module
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&format!("ising-web {} initialized", version()).into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// β = 1/T for the page's temperature slider. Throws unless T > 0.
#[wasm_bindgen(js_name = betaFromTemperature)]
pub fn beta_from_temperature(temperature: f64) -> Result<f64, JsValue> {
    Beta::from_temperature(temperature)
        .map(Beta::value)
        .map_err(to_js_error)
}

fn to_js_error(e: IsingError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

/// Seed drawn from the host clock and `Math.random`.
fn host_seed() -> u64 {
    let random = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
    let now = js_sys::Date::now() as u64;
    random ^ now.rotate_left(32)
}

#[wasm_bindgen]
pub struct IsingModel {
    core: ising_sim::IsingModel,
}

#[wasm_bindgen]
impl IsingModel {
    /// Random L×L lattice. Throws for L = 0.
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize) -> Result<IsingModel, JsValue> {
        Self::with_seed(size, host_seed())
    }

    /// Reproducible lattice for a given seed.
    #[wasm_bindgen(js_name = withSeed)]
    pub fn with_seed(size: usize, seed: u64) -> Result<IsingModel, JsValue> {
        let core = ising_sim::IsingModel::new(size, seed).map_err(to_js_error)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.core.size()
    }

    /// Total energy, one term per bond.
    #[wasm_bindgen(getter)]
    pub fn energy(&self) -> f64 {
        self.core.energy() as f64
    }

    /// Sum of all spins.
    #[wasm_bindgen(getter)]
    pub fn magnetization(&self) -> f64 {
        self.core.magnetization() as f64
    }

    pub fn glauber_update(&mut self, beta: f64) -> Result<(), JsValue> {
        self.core.glauber_update(beta).map_err(to_js_error)
    }

    /// Heat-bath update of one checkerboard class; `true` is the class of (0, 0).
    pub fn gibbs_update(&mut self, beta: f64, sublattice: bool) -> Result<(), JsValue> {
        self.core.gibbs_update(beta, sublattice).map_err(to_js_error)
    }

    /// Returns the number of flipped sites.
    pub fn wolff_update(&mut self, beta: f64) -> Result<usize, JsValue> {
        self.core.wolff_update(beta).map_err(to_js_error)
    }

    pub fn metropolis_update(&mut self, beta: f64) -> Result<(), JsValue> {
        self.core
            .metropolis_update(beta, Default::default())
            .map(|_| ())
            .map_err(to_js_error)
    }

    /// Returns the number of clusters.
    pub fn swendsen_wang_update(&mut self, beta: f64) -> Result<usize, JsValue> {
        self.core.swendsen_wang_update(beta).map_err(to_js_error)
    }

    /// One frame of the rule named by the page's selector ("Glauber",
    /// "Block Gibbs", "Wolff", ...). Block Gibbs alternates classes per call.
    pub fn update(&mut self, rule: &str, beta: f64) -> Result<(), JsValue> {
        let rule = UpdateRule::try_from(rule).map_err(to_js_error)?;
        self.core.step(rule, beta).map_err(to_js_error)
    }

    /// Redraw a random configuration from `seed`.
    pub fn reset(&mut self, seed: u64) {
        self.core.reset(seed);
    }

    /// `L` columns, each a `Uint8Array` of `L` cells (0 or 1).
    pub fn to_js(&self) -> Array {
        let columns = Array::new();
        for column in self.core.snapshot().columns() {
            let cells: Vec<u8> = column.iter().map(|&up| u8::from(up)).collect();
            columns.push(&Uint8Array::from(cells.as_slice()).into());
        }
        columns
    }
}
