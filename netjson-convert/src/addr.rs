use std::net::{AddrParseError, IpAddr, Ipv4Addr, Ipv6Addr};

use thiserror::Error;

/// Errors produced while parsing `address/prefix` strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("{0}")]
    Addr(#[from] AddrParseError),
    #[error("prefix length {prefix} exceeds {max}")]
    PrefixTooLong { prefix: u8, max: u8 },
    #[error("prefix length '{0}' is not a number")]
    PrefixNotNumeric(String),
}

/// An IP address together with its prefix length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IpInterface {
    pub addr: IpAddr,
    pub prefix: u8,
}

impl IpInterface {
    /// Parse `addr` or `addr/prefix`. A bare address is a host route (/32 or
    /// /128).
    pub fn parse(value: &str) -> Result<Self, AddressError> {
        let (addr, prefix) = match value.split_once('/') {
            Some((addr, prefix)) => (
                addr,
                Some(
                    prefix
                        .trim()
                        .parse::<u8>()
                        .map_err(|_| AddressError::PrefixNotNumeric(prefix.to_string()))?,
                ),
            ),
            None => (value, None),
        };
        let addr: IpAddr = addr.trim().parse()?;
        let prefix = prefix.unwrap_or(max_prefix(addr));
        Self::new(addr, prefix)
    }

    /// Parse an address and a separately stored prefix length.
    pub fn from_parts(addr: &str, prefix: u8) -> Result<Self, AddressError> {
        Self::new(addr.trim().parse()?, prefix)
    }

    fn new(addr: IpAddr, prefix: u8) -> Result<Self, AddressError> {
        let max = max_prefix(addr);
        if prefix > max {
            return Err(AddressError::PrefixTooLong { prefix, max });
        }
        Ok(Self { addr, prefix })
    }

    /// 4 or 6.
    pub fn version(&self) -> u8 {
        match self.addr {
            IpAddr::V4(_) => 4,
            IpAddr::V6(_) => 6,
        }
    }

    /// Dotted netmask; IPv4 only.
    pub fn netmask(&self) -> Option<Ipv4Addr> {
        match self.addr {
            IpAddr::V4(_) => Some(ipv4_netmask(self.prefix)),
            IpAddr::V6(_) => None,
        }
    }

    /// Network address in CIDR form, host bits cleared.
    pub fn network(&self) -> String {
        let net = match self.addr {
            IpAddr::V4(v4) => IpAddr::V4(Ipv4Addr::from(
                u32::from(v4) & u32::from(ipv4_netmask(self.prefix)),
            )),
            IpAddr::V6(v6) => IpAddr::V6(Ipv6Addr::from(
                u128::from(v6) & ipv6_mask_bits(self.prefix),
            )),
        };
        format!("{net}/{}", self.prefix)
    }
}

/// Convert a prefix length (0-32) into a dotted IPv4 netmask.
pub fn ipv4_netmask(prefix: u8) -> Ipv4Addr {
    let bits = match prefix {
        0 => 0,
        p if p >= 32 => u32::MAX,
        p => u32::MAX << (32 - u32::from(p)),
    };
    Ipv4Addr::from(bits)
}

fn ipv6_mask_bits(prefix: u8) -> u128 {
    match prefix {
        0 => 0,
        p if p >= 128 => u128::MAX,
        p => u128::MAX << (128 - u32::from(p)),
    }
}

fn max_prefix(addr: IpAddr) -> u8 {
    match addr {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    }
}
