//! Five-tuple flow identifiers.
//!
//! A [`FlowKey`] is the unit the cache tracks. Its byte encoding is fixed
//! and independent of the in-memory layout of the struct, so every build
//! of the simulator routes the same flow to the same set:
//!
//! ```text
//! offset  width  field
//!      0      4  src_addr  (big-endian)
//!      4      4  dst_addr  (big-endian)
//!      8      2  src_port  (big-endian)
//!     10      2  dst_port  (big-endian)
//!     12      1  protocol
//! ```

use std::fmt;
use std::net::Ipv4Addr;

/// Length in bytes of the encoded five-tuple.
pub const FLOW_KEY_LEN: usize = 13;

/// IPv4 five-tuple identifying a network flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlowKey {
    src_addr: u32,
    dst_addr: u32,
    src_port: u16,
    dst_port: u16,
    protocol: u8,
}

impl FlowKey {
    /// Create a flow key from raw field values.
    pub const fn new(
        src_addr: u32,
        dst_addr: u32,
        src_port: u16,
        dst_port: u16,
        protocol: u8,
    ) -> Self {
        Self {
            src_addr,
            dst_addr,
            src_port,
            dst_port,
            protocol,
        }
    }

    /// Create a flow key from IPv4 addresses.
    pub fn from_addrs(
        src_addr: Ipv4Addr,
        dst_addr: Ipv4Addr,
        src_port: u16,
        dst_port: u16,
        protocol: u8,
    ) -> Self {
        Self::new(
            u32::from(src_addr),
            u32::from(dst_addr),
            src_port,
            dst_port,
            protocol,
        )
    }

    /// Source address.
    #[inline]
    pub fn src_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.src_addr)
    }

    /// Destination address.
    #[inline]
    pub fn dst_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.dst_addr)
    }

    /// Source port.
    #[inline]
    pub fn src_port(&self) -> u16 {
        self.src_port
    }

    /// Destination port.
    #[inline]
    pub fn dst_port(&self) -> u16 {
        self.dst_port
    }

    /// IP protocol number.
    #[inline]
    pub fn protocol(&self) -> u8 {
        self.protocol
    }

    /// Encode the key in its canonical network-order layout.
    ///
    /// This encoding is what the set indexer hashes. It must never change,
    /// otherwise recorded simulation results stop being reproducible.
    pub fn to_bytes(&self) -> [u8; FLOW_KEY_LEN] {
        let mut buf = [0u8; FLOW_KEY_LEN];
        buf[0..4].copy_from_slice(&self.src_addr.to_be_bytes());
        buf[4..8].copy_from_slice(&self.dst_addr.to_be_bytes());
        buf[8..10].copy_from_slice(&self.src_port.to_be_bytes());
        buf[10..12].copy_from_slice(&self.dst_port.to_be_bytes());
        buf[12] = self.protocol;
        buf
    }
}

impl fmt::Display for FlowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} -> {}:{} proto {}",
            self.src_addr(),
            self.src_port,
            self.dst_addr(),
            self.dst_port,
            self.protocol
        )
    }
}

/// Anything a trace replay can feed to the cache.
///
/// Implementors only need to produce the flow key; parsing happens
/// elsewhere.
pub trait Packet {
    /// The flow this packet belongs to.
    fn flow_key(&self) -> FlowKey;
}

impl Packet for FlowKey {
    #[inline]
    fn flow_key(&self) -> FlowKey {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bytes_layout() {
        let key = FlowKey::new(0x0a00_0001, 0xc0a8_0102, 0x1234, 443, 6);
        assert_eq!(
            key.to_bytes(),
            [
                0x0a, 0x00, 0x00, 0x01, // src
                0xc0, 0xa8, 0x01, 0x02, // dst
                0x12, 0x34, // src port
                0x01, 0xbb, // dst port
                0x06, // protocol
            ]
        );
    }

    #[test]
    fn test_from_addrs_matches_raw() {
        let a = FlowKey::from_addrs(
            Ipv4Addr::new(10, 0, 0, 1),
            Ipv4Addr::new(192, 168, 1, 2),
            4660,
            443,
            6,
        );
        let b = FlowKey::new(0x0a00_0001, 0xc0a8_0102, 4660, 443, 6);
        assert_eq!(a, b);
        assert_eq!(a.to_bytes(), b.to_bytes());
    }

    #[test]
    fn test_accessors() {
        let key = FlowKey::from_addrs(
            Ipv4Addr::new(1, 2, 3, 4),
            Ipv4Addr::new(5, 6, 7, 8),
            1000,
            80,
            17,
        );
        assert_eq!(key.src_addr(), Ipv4Addr::new(1, 2, 3, 4));
        assert_eq!(key.dst_addr(), Ipv4Addr::new(5, 6, 7, 8));
        assert_eq!(key.src_port(), 1000);
        assert_eq!(key.dst_port(), 80);
        assert_eq!(key.protocol(), 17);
    }

    #[test]
    fn test_structural_equality() {
        let a = FlowKey::new(1, 2, 3, 4, 6);
        assert_eq!(a, FlowKey::new(1, 2, 3, 4, 6));
        assert_ne!(a, FlowKey::new(1, 2, 3, 4, 17));
        assert_ne!(a, FlowKey::new(2, 1, 4, 3, 6));
    }

    #[test]
    fn test_display() {
        let key = FlowKey::from_addrs(
            Ipv4Addr::new(10, 0, 0, 1),
            Ipv4Addr::new(10, 0, 0, 2),
            5555,
            80,
            6,
        );
        assert_eq!(key.to_string(), "10.0.0.1:5555 -> 10.0.0.2:80 proto 6");
    }

    #[test]
    fn test_flow_key_is_packet() {
        let key = FlowKey::new(9, 8, 7, 6, 5);
        assert_eq!(key.flow_key(), key);
    }
}
