use crate::core::config::data::Config;
use crate::core::constants::DEFAULT_ENDPOINT;

impl Config {
    pub fn print_all(&self) {
        println!("Current configuration:");
        match &self.endpoint {
            Some(endpoint) => println!("  endpoint: {endpoint}"),
            None => println!("  endpoint: (unset, using {DEFAULT_ENDPOINT})"),
        }
    }
}
