//! Parser for the line-oriented OSPF description file.
//!
//! ```text
//! OSPF Router ID: 10.255.0.1
//! Areas: 0.0.0.0, 0.0.0.1
//! Name: LAN
//! Interface: port1
//! Cost: 10
//! Authentication: MD5
//! Passive: Enabled
//! 10.0.0.0/24
//! ```

use crate::error::GeneratorError;
use crate::models::{OspfConfig, OspfInterface, Prefix};
use lazy_static::lazy_static;
use regex::Regex;
use std::error::Error;
use std::path::Path;

lazy_static! {
    static ref KEY_VALUE_RE: Regex = Regex::new(
        r"^(?P<key>OSPF Router ID|Areas|Name|Interface|Cost|Authentication|Passive|Priority):(?P<value>.*)$"
    )
    .expect("Invalid Regex?");
}

/// Parse the contents of a description file.
///
/// Network lines that do not parse as IPv4 CIDR are skipped. A non-numeric
/// cost or priority is an error.
pub fn parse_description(content: &str) -> Result<OspfConfig, GeneratorError> {
    let mut config = OspfConfig::default();
    let mut current: Option<OspfInterface> = None;

    for (i, raw) in content.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(caps) = KEY_VALUE_RE.captures(line) {
            let key = &caps["key"];
            let value = caps["value"].trim();
            match key {
                "OSPF Router ID" => config.router_id = value.to_string(),
                "Areas" => {
                    config.areas = value.split(',').map(|a| a.trim().to_string()).collect()
                }
                "Name" => {
                    if let Some(done) = current.replace(OspfInterface::new(value)) {
                        config.interfaces.push(done);
                    }
                }
                _ => match current.as_mut() {
                    Some(intf) => apply_interface_key(intf, key, value, i + 1)?,
                    None => log::debug!("line {}: {} outside of an interface", i + 1, key),
                },
            }
            continue;
        }

        if line.contains('/') && line.contains('.') {
            match Prefix::parse(line) {
                Ok(_) => config.networks.push(line.to_string()),
                Err(e) => log::warn!("line {}: skipping {:?}: {}", i + 1, line, e),
            }
        } else {
            log::trace!("line {}: ignored {:?}", i + 1, line);
        }
    }

    if let Some(done) = current {
        config.interfaces.push(done);
    }

    log::debug!(
        "parsed router-id={} areas={:?} networks={} interfaces={}",
        config.router_id,
        config.areas,
        config.networks.len(),
        config.interfaces.len()
    );
    Ok(config)
}

fn apply_interface_key(
    intf: &mut OspfInterface,
    key: &str,
    value: &str,
    line: usize,
) -> Result<(), GeneratorError> {
    match key {
        "Interface" => intf.interface = value.to_string(),
        "Cost" => intf.cost = parse_number(key, value, line)?,
        "Priority" => intf.priority = parse_number(key, value, line)?,
        "Authentication" => intf.authentication = value.to_lowercase(),
        "Passive" => intf.passive = value.eq_ignore_ascii_case("enabled"),
        _ => {}
    }
    Ok(())
}

fn parse_number<T: std::str::FromStr>(
    key: &str,
    value: &str,
    line: usize,
) -> Result<T, GeneratorError> {
    value.parse().map_err(|_| GeneratorError::InvalidValue {
        key: key.to_lowercase(),
        value: value.to_string(),
        line,
    })
}

/// Fail when the description lacks a router ID or networks.
pub fn validate(config: &OspfConfig, source: &str) -> Result<(), GeneratorError> {
    if config.router_id.is_empty() {
        return Err(GeneratorError::MissingRouterId(source.to_string()));
    }
    if config.networks.is_empty() {
        return Err(GeneratorError::NoNetworks(source.to_string()));
    }
    Ok(())
}

/// Read and parse a description file.
pub fn read_description_file(path: &Path) -> Result<OspfConfig, Box<dyn Error>> {
    let display = path.display().to_string();
    if !path.exists() {
        return Err(GeneratorError::FileNotFound { path: display }.into());
    }
    log::info!("Reading description file: {display}");
    let content = std::fs::read_to_string(path).map_err(|source| GeneratorError::Io {
        path: display.clone(),
        source,
    })?;
    Ok(parse_description(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
OSPF Router ID: 10.255.0.1
Areas: 0.0.0.0, 0.0.0.1

Name: LAN
Interface: port1
Cost: 10
Authentication: MD5
Passive: Enabled
Name: WAN
Interface: wan1
Priority: 5
Passive: disabled

10.0.0.0/24
  10.0.1.0/24
10.0.2.0/33
Some note about v1.2/v1.3
";

    #[test]
    fn test_parse_description() {
        let config = parse_description(SAMPLE).unwrap();
        assert_eq!(config.router_id, "10.255.0.1");
        assert_eq!(config.areas, vec!["0.0.0.0", "0.0.0.1"]);
        assert_eq!(config.networks, vec!["10.0.0.0/24", "10.0.1.0/24"]);
        assert_eq!(config.interfaces.len(), 2);

        let lan = &config.interfaces[0];
        assert_eq!(lan.name, "LAN");
        assert_eq!(lan.interface, "port1");
        assert_eq!(lan.cost, 10);
        assert_eq!(lan.authentication, "md5");
        assert!(lan.passive);
        assert_eq!(lan.priority, 1);

        let wan = &config.interfaces[1];
        assert_eq!(wan.interface, "wan1");
        assert_eq!(wan.cost, 1);
        assert_eq!(wan.priority, 5);
        assert_eq!(wan.authentication, "none");
        assert!(!wan.passive);
    }

    #[test]
    fn test_interface_keys_before_name_are_ignored() {
        let config =
            parse_description("Interface: port9\nCost: 3\nOSPF Router ID: 1.1.1.1\n").unwrap();
        assert!(config.interfaces.is_empty());
        assert_eq!(config.router_id, "1.1.1.1");
    }

    #[test]
    fn test_invalid_cost() {
        let err = parse_description("Name: LAN\nCost: cheap\n").unwrap_err();
        assert_eq!(err.to_string(), "Invalid cost value \"cheap\" on line 2");
    }

    #[test]
    fn test_validate() {
        let mut config = parse_description("10.0.0.0/24\n").unwrap();
        assert!(matches!(
            validate(&config, "x.txt"),
            Err(GeneratorError::MissingRouterId(_))
        ));
        config.router_id = "1.1.1.1".to_string();
        assert!(validate(&config, "x.txt").is_ok());
        config.networks.clear();
        assert_eq!(
            validate(&config, "x.txt").unwrap_err().to_string(),
            "No networks found in x.txt"
        );
    }

    #[test]
    fn test_read_description_file_missing() {
        let err = read_description_file(Path::new("does/not/exist.txt")).unwrap_err();
        assert_eq!(err.to_string(), "File does/not/exist.txt not found");
    }

    #[test]
    fn test_read_description_file() {
        let config =
            read_description_file(Path::new("src/tests/test_data/ospf_networks_01.txt")).unwrap();
        assert_eq!(config.router_id, "10.255.0.1");
        assert!(!config.networks.is_empty());
    }
}
