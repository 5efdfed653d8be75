//! Loopback and LAN URLs printed at startup.
//!
//! The LAN address is found by asking the OS which local address it would use
//! to reach a public host: a UDP socket is "connected" (no packet is sent) and
//! its local address read back.  Hosts with no route fall back to loopback.

use std::net::{IpAddr, Ipv4Addr, SocketAddr, UdpSocket};

use tracing::debug;

/// Any routable address works; nothing is ever sent to it.
const ROUTE_PROBE_ADDR: &str = "8.8.8.8:80";

/// URL of the control page on this machine.
pub fn local_url(port: u16) -> String {
    format!("http://127.0.0.1:{port}")
}

/// URL of the control page as seen from another device on the LAN.
pub fn network_url(ip: IpAddr, port: u16) -> String {
    format!("http://{}", SocketAddr::new(ip, port))
}

/// Best guess at this machine's LAN address.
pub fn detect_lan_ip() -> IpAddr {
    match probe_route() {
        Ok(ip) if !ip.is_unspecified() => ip,
        Ok(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
        Err(e) => {
            debug!("LAN address probe failed ({e}); using loopback");
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        }
    }
}

fn probe_route() -> std::io::Result<IpAddr> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0))?;
    socket.connect(ROUTE_PROBE_ADDR)?;
    Ok(socket.local_addr()?.ip())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv6Addr;

    #[test]
    fn test_local_url_uses_loopback() {
        assert_eq!(local_url(8080), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_network_url_for_ipv4() {
        let ip: IpAddr = "192.168.1.20".parse().unwrap();
        assert_eq!(network_url(ip, 9000), "http://192.168.1.20:9000");
    }

    #[test]
    fn test_network_url_brackets_ipv6() {
        let ip = IpAddr::V6(Ipv6Addr::LOCALHOST);
        assert_eq!(network_url(ip, 8080), "http://[::1]:8080");
    }

    #[test]
    fn test_detected_address_is_ipv4_and_specified() {
        // Works with or without a network: falls back to loopback.
        let ip = detect_lan_ip();
        assert!(ip.is_ipv4());
        assert!(!ip.is_unspecified());
    }
}
