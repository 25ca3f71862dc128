// Copyright (c) 2020-present, UMD Database Group.
//
// This program is free software: you can use, redistribute, and/or modify
// it under the terms of the GNU Affero General Public License, version 3
// or later ("AGPL"), as published by the Free Software Foundation.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or
// FITNESS FOR A PARTICULAR PURPOSE.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.


//! Configuration of the image details function.
//!
//! Built-in defaults live in `config.toml` and are loaded once. The values a
//! deployment controls (table name, region, endpoint) come from the
//! environment and are resolved into an explicit [`Config`] that is handed to
//! the record store at construction.

use crate::error::{ImageDetailsError, Result};
use ini::Ini;
use lazy_static::lazy_static;
use rusoto_core::Region;
use std::str::FromStr;

lazy_static! {
    /// Global settings.
    pub static ref IMAGE_DETAILS_CONF: Ini = Ini::load_from_str(include_str!("./config.toml")).unwrap();
    /// Name of the environment variable holding the DynamoDB table name.
    pub static ref TABLE_NAME_ENV: String = IMAGE_DETAILS_CONF["lambda"]["table_name_env"].to_string();
    /// Name of the environment variable overriding the DynamoDB endpoint.
    pub static ref ENDPOINT_ENV: String = IMAGE_DETAILS_CONF["lambda"]["endpoint_env"].to_string();
}

/// Settings needed to reach the image table.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// The DynamoDB table that stores image records.
    pub table_name: String,
    /// The AWS region, or a custom endpoint such as DynamoDB Local.
    pub region:     Region,
}

impl Config {
    /// Returns a new configuration.
    pub fn new(table_name: impl Into<String>, region: Region) -> Self {
        Self {
            table_name: table_name.into(),
            region,
        }
    }

    /// Resolves the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration from the given variable lookup.
    ///
    /// # Arguments
    /// * `var` - Returns the value of the named variable, if it is set.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name = var(TABLE_NAME_ENV.as_str())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                ImageDetailsError::Config(format!(
                    "{} is not set in the environment",
                    *TABLE_NAME_ENV
                ))
            })?;

        let region_name = var("AWS_REGION")
            .or_else(|| var("AWS_DEFAULT_REGION"))
            .unwrap_or_else(|| IMAGE_DETAILS_CONF["dynamodb"]["region"].to_string());

        let endpoint = var(ENDPOINT_ENV.as_str())
            .unwrap_or_else(|| IMAGE_DETAILS_CONF["dynamodb"]["endpoint"].to_string());

        let region = if endpoint.is_empty() {
            Region::from_str(&region_name).map_err(|e| {
                ImageDetailsError::Config(format!("{}: {}", region_name, e))
            })?
        } else {
            Region::Custom {
                name: region_name,
                endpoint,
            }
        };

        Ok(Self { table_name, region })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn setting_shows() -> Result<()> {
        let conf = Ini::load_from_str(include_str!("./config.toml")).unwrap();

        for (sec, prop) in &conf {
            println!("Section: {:?}", sec);
            for (key, value) in prop.iter() {
                println!("{:?}:{:?}", key, value);
            }
        }

        assert_eq!("TABLE_NAME", &conf["lambda"]["table_name_env"]);
        assert_eq!("DYNAMODB_ENDPOINT", &conf["lambda"]["endpoint_env"]);
        assert_eq!("us-east-1", &conf["dynamodb"]["region"]);
        assert_eq!("", &conf["dynamodb"]["endpoint"]);

        Ok(())
    }

    #[test]
    fn table_name_from_environment() -> Result<()> {
        let config = Config::from_vars(lookup(&[("TABLE_NAME", "Test")]))?;
        assert_eq!(config, Config::new("Test", Region::UsEast1));
        Ok(())
    }

    #[test]
    fn missing_table_name() {
        let err = Config::from_vars(lookup(&[])).unwrap_err();
        assert!(matches!(err, ImageDetailsError::Config(_)));

        let err = Config::from_vars(lookup(&[("TABLE_NAME", "")])).unwrap_err();
        assert!(matches!(err, ImageDetailsError::Config(_)));
    }

    #[test]
    fn region_from_environment() -> Result<()> {
        let config = Config::from_vars(lookup(&[
            ("TABLE_NAME", "Images"),
            ("AWS_DEFAULT_REGION", "us-west-2"),
        ]))?;
        assert_eq!(config.region, Region::UsWest2);

        let config = Config::from_vars(lookup(&[
            ("TABLE_NAME", "Images"),
            ("AWS_REGION", "eu-west-1"),
            ("AWS_DEFAULT_REGION", "us-west-2"),
        ]))?;
        assert_eq!(config.region, Region::EuWest1);

        let err = Config::from_vars(lookup(&[
            ("TABLE_NAME", "Images"),
            ("AWS_REGION", "moon-base-1"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ImageDetailsError::Config(_)));
        Ok(())
    }

    #[test]
    fn local_endpoint() -> Result<()> {
        let config = Config::from_vars(lookup(&[
            ("TABLE_NAME", "Test"),
            ("DYNAMODB_ENDPOINT", "http://0.0.0.0:8000"),
        ]))?;
        assert_eq!(
            config.region,
            Region::Custom {
                name:     "us-east-1".to_string(),
                endpoint: "http://0.0.0.0:8000".to_string(),
            }
        );
        Ok(())
    }
}
