//! Fortigate `config router ospf` rendering.

use crate::error::GeneratorError;
use crate::models::{OspfConfig, Prefix};
use crate::processing::OptimizedNetworks;
use std::path::Path;

/// Network address and dotted netmask, the form `set prefix` takes.
pub fn ip_to_netmask(prefix: &Prefix) -> (String, String) {
    (prefix.network().to_string(), prefix.netmask().to_string())
}

/// Render the OSPF configuration, lines joined by `\n` without a trailing newline.
pub fn render_fortigate(config: &OspfConfig, optimized: &OptimizedNetworks) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push("config router ospf".to_string());
    lines.push(format!("    set router-id {}", config.router_id));

    lines.push("    config area".to_string());
    for area in &config.areas {
        lines.push(format!("        edit \"{area}\""));
        lines.push("            set type regular".to_string());
        lines.push("        next".to_string());
    }
    lines.push("    end".to_string());

    lines.push("    config network".to_string());
    for (i, network) in optimized.networks.iter().enumerate() {
        let (ip, mask) = ip_to_netmask(network);
        lines.push(format!("        edit {}", i + 1));
        lines.push(format!("            set prefix {ip} {mask}"));
        lines.push(format!("            set area {}", config.network_area()));
        lines.push("        next".to_string());
    }
    lines.push("    end".to_string());

    if !config.interfaces.is_empty() {
        lines.push("    config ospf-interface".to_string());
        for intf in &config.interfaces {
            lines.push(format!("        edit \"{}\"", intf.interface));
            lines.push(format!("            set interface \"{}\"", intf.interface));
            lines.push(format!("            set cost {}", intf.cost));
            lines.push(format!("            set priority {}", intf.priority));
            lines.push(format!("            set authentication {}", intf.authentication));
            let passive = if intf.passive { "enable" } else { "disable" };
            lines.push(format!("            set passive-interface {passive}"));
            lines.push("        next".to_string());
        }
        lines.push("    end".to_string());
    }

    if !optimized.summaries.is_empty() {
        lines.push("    config summary-address".to_string());
        for (i, summary) in optimized.summaries.summaries().enumerate() {
            let (ip, mask) = ip_to_netmask(&summary);
            lines.push(format!("        edit {}", i + 1));
            lines.push(format!("            set prefix {ip} {mask}"));
            lines.push("            set advertise enable".to_string());
            lines.push("        next".to_string());
        }
        lines.push("    end".to_string());
    }

    lines.push("end".to_string());
    lines.join("\n")
}

/// Write rendered configuration to `path`.
pub fn write_config(path: &Path, content: &str) -> Result<(), GeneratorError> {
    std::fs::write(path, content).map_err(|source| GeneratorError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OspfInterface;
    use crate::processing::get_optimized_networks;

    #[test]
    fn test_ip_to_netmask() {
        let prefix = Prefix::parse("192.168.0.0/19").unwrap();
        assert_eq!(
            ip_to_netmask(&prefix),
            ("192.168.0.0".to_string(), "255.255.224.0".to_string())
        );
    }

    #[test]
    fn test_render_full() {
        let config = OspfConfig {
            router_id: "10.255.0.1".to_string(),
            areas: vec!["0.0.0.0".to_string()],
            networks: vec![],
            interfaces: vec![OspfInterface {
                name: "LAN".to_string(),
                interface: "port1".to_string(),
                cost: 10,
                authentication: "md5".to_string(),
                passive: true,
                priority: 1,
            }],
        };
        let optimized = get_optimized_networks(&["10.0.0.0/24", "10.0.1.0/24", "8.8.8.0/24"]);

        let expected = r#"config router ospf
    set router-id 10.255.0.1
    config area
        edit "0.0.0.0"
            set type regular
        next
    end
    config network
        edit 1
            set prefix 10.0.0.0 255.255.254.0
            set area 0.0.0.0
        next
        edit 2
            set prefix 8.8.8.0 255.255.255.0
            set area 0.0.0.0
        next
    end
    config ospf-interface
        edit "port1"
            set interface "port1"
            set cost 10
            set priority 1
            set authentication md5
            set passive-interface enable
        next
    end
    config summary-address
        edit 1
            set prefix 10.0.0.0 255.255.254.0
            set advertise enable
        next
    end
end"#;
        assert_eq!(render_fortigate(&config, &optimized), expected);
    }

    #[test]
    fn test_render_without_areas_interfaces_or_summaries() {
        let config = OspfConfig {
            router_id: "1.1.1.1".to_string(),
            ..Default::default()
        };
        let optimized = get_optimized_networks(&["172.16.5.0/24"]);

        let expected = "config router ospf
    set router-id 1.1.1.1
    config area
    end
    config network
        edit 1
            set prefix 172.16.5.0 255.255.255.0
            set area 0.0.0.0
        next
    end
end";
        assert_eq!(render_fortigate(&config, &optimized), expected);
    }
}
