use serde::Serialize;

use crate::Error;

#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub prefix: String,
    pub suffixes: Vec<String>,
    pub length: usize,
    pub product: ProductRange,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductRange {
    pub min: i64,
    pub max: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prefix: "outfile".to_string(),
            suffixes: vec!["0".to_string(), "1".to_string(), "2".to_string()],
            length: 10,
            product: ProductRange { min: 1, max: 42 },
        }
    }
}

impl Config {
    pub fn to_yaml(&self) -> Result<String, Error> {
        serde_yaml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }
}
