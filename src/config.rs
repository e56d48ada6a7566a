// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Configuration management for the fitness tracker

pub mod fitness_config;

use crate::constants::env_config;

pub use fitness_config::FitnessConfig;

/// Pick the configuration file: an explicit path wins over `FITNESS_CONFIG`
pub fn resolve_config_path(explicit: Option<String>) -> Option<String> {
    explicit.or_else(env_config::config_path)
}
