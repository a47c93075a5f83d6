// This example shows how to use serde feature to serialize interface data to JSON.
#[cfg(target_os = "linux")]
fn main() {
    use ifprobe::prelude::*;

    let if_name = std::env::args().nth(1).unwrap_or_else(|| String::from("lo"));
    let mut record = NetworkInterfaceRecord::new();
    if let Err(e) = get_ipv4_addrs(&if_name, &mut record) {
        eprintln!("IPv4: ({})", e);
    }
    if let Err(e) = get_ipv6_addrs(&if_name, &mut record) {
        eprintln!("IPv6: ({})", e);
    }
    let report = serde_json::json!({
        "name": if_name,
        "type": get_interface_type(&if_name),
        "mac": get_mac_addr(&if_name).ok(),
        "addresses": record,
    });
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => println!("{}", e),
    }
}

#[cfg(not(target_os = "linux"))]
fn main() {
    println!("Interface queries are only available on Linux");
}
