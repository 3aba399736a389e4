//! # Display Formatting
//!
//! Formatting helpers for rendering addresses in a UI.

/// Format an account address by showing the first `prefix_len` and last
/// `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned
/// as-is.
///
/// # Examples
///
/// ```rust
/// use lib_utils::format::format_address;
///
/// let addr = "0x8ba1f109551bd432803012645ac136ddd64dba72";
/// assert_eq!(format_address(addr, 6, 4), "0x8ba1...ba72");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Guard against lengths exceeding the address to prevent slice panics.
    if address_len <= prefix_len + suffix_len
        || prefix_len >= address_len
        || suffix_len >= address_len
    {
        return address.to_string();
    }

    // Hex addresses are ASCII, so byte slicing is safe here.
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an address with the default 6-character prefix and 4-character
/// suffix (keeps the `0x` visible).
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_address() {
        let addr = "0x8ba1f109551bd432803012645ac136ddd64dba72";
        assert_eq!(format_address(addr, 6, 4), "0x8ba1...ba72");
        assert_eq!(format_address(addr, 4, 4), "0x8b...ba72");
        assert_eq!(format_address(addr, 2, 2), "0x...72");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("abc", 4, 4), "abc");
    }

    #[test]
    fn test_truncate_address() {
        let addr = "0x8ba1f109551bd432803012645ac136ddd64dba72";
        assert_eq!(truncate_address(addr), "0x8ba1...ba72");
    }
}
