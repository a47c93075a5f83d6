// Prints everything ifprobe can tell about one interface.
// Usage: cargo run --example probe_interface [IFNAME]
// Set RUST_LOG=debug to see the probe diagnostics.
#[cfg(target_os = "linux")]
fn main() {
    use ifprobe::prelude::*;
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let if_name = match std::env::args().nth(1) {
        Some(name) => name,
        None => match get_wifi_interface_name().or_else(|_| get_eth_interface_name()) {
            Ok(name) => name,
            Err(e) => {
                println!("No WiFi or Ethernet interface found: {}", e);
                return;
            }
        },
    };

    let if_type = get_interface_type(&if_name);
    println!("Interface {}", if_name);
    println!("\tType: {}", if_type);
    match get_mac_addr(&if_name) {
        Ok(mac) => println!("\tMAC: {}", mac),
        Err(e) => println!("\tMAC: ({})", e),
    }

    let mut record = NetworkInterfaceRecord::new();
    match get_ipv4_addrs(&if_name, &mut record) {
        Ok(_) => println!("\tIPv4: {:?}", record.ipv4_addrs().collect::<Vec<_>>()),
        Err(e) => println!("\tIPv4: ({})", e),
    }
    match get_ipv6_addrs(&if_name, &mut record) {
        Ok(_) => println!("\tIPv6: {:?}", record.ipv6_addrs().collect::<Vec<_>>()),
        Err(e) => println!("\tIPv6: ({})", e),
    }

    match if_type {
        InterfaceType::WiFi => {
            println!("WiFi");
            println!("\tChannel: {:?}", get_channel_number(&if_name));
            println!("\tRSSI (dBm): {:?}", get_rssi(&if_name));
            println!("\tBeacons lost: {:?}", get_beacon_lost_count(&if_name));
            println!("\tBit rate (b/s): {:?}", get_current_max_rate(&if_name));
        }
        InterfaceType::Ethernet => match get_eth_link_settings(&if_name) {
            Ok(settings) => {
                println!("Ethernet");
                match settings.phy_rate() {
                    Ok(rate) => println!("\tPHY rate: {}", rate),
                    Err(e) => println!("\tPHY rate: ({})", e),
                }
                println!("\tFull duplex: {}", settings.is_full_duplex());
            }
            Err(e) => println!("Ethernet: ({})", e),
        },
        InterfaceType::Unspecified => {}
    }
}

#[cfg(not(target_os = "linux"))]
fn main() {
    println!("Interface queries are only available on Linux");
}
