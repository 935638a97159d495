// Customer type value object

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// New vs. existing customer. The distinction only changes which minimum
/// monthly fee floor a quote can bottom out at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerType {
    New,
    Existing,
}

impl CustomerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerType::New => "new",
            CustomerType::Existing => "existing",
        }
    }

    /// Lowest total a quote of this customer type can produce.
    pub fn minimum_fee(&self) -> f64 {
        match self {
            CustomerType::New => 250.0,
            CustomerType::Existing => 200.0,
        }
    }
}

impl FromStr for CustomerType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" => Ok(CustomerType::New),
            "existing" => Ok(CustomerType::Existing),
            _ => Err(()),
        }
    }
}
