use serde::{Deserialize, Serialize};

/// Per-session user preferences consulted by the ranking engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Hard budget: deals over this score zero on the price factor.
    pub max_price: Option<f64>,
}
