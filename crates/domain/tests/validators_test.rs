use dnstrace_domain::validators::{is_private_address, is_valid_hostname};
use dnstrace_domain::{validate_lookup_target, DomainError};
use std::net::IpAddr;

#[test]
fn test_accepts_ordinary_hostnames() {
    assert!(validate_lookup_target("example.com").is_ok());
    assert!(validate_lookup_target("www.example.com.").is_ok());
    assert!(validate_lookup_target("_dmarc.example.org").is_ok());
    assert!(validate_lookup_target("xn--bcher-kva.example").is_ok());
}

#[test]
fn test_rejects_malformed_hostnames() {
    for host in ["", ".", "exa mple.com", "-bad.com", "bad-.com", "a..b", "ex!ample.com"] {
        assert!(
            matches!(
                validate_lookup_target(host),
                Err(DomainError::InvalidDomainName(_))
            ),
            "expected {host:?} to be rejected"
        );
    }
}

#[test]
fn test_rejects_overlong_labels_and_names() {
    let label = "a".repeat(64);
    assert!(!is_valid_hostname(&format!("{label}.com")));

    let name = vec!["abcdefghij"; 26].join(".");
    assert!(name.len() > 253);
    assert!(!is_valid_hostname(&name));
}

#[test]
fn test_public_ip_literals_are_allowed() {
    assert!(validate_lookup_target("8.8.8.8").is_ok());
    assert!(validate_lookup_target("2001:4860:4860::8888").is_ok());
    assert!(validate_lookup_target("[2606:4700::1111]").is_ok());
}

#[test]
fn test_private_ip_literals_are_refused() {
    for host in ["10.1.2.3", "192.168.0.1", "127.0.0.1", "169.254.1.1", "100.64.0.1", "::1", "fd00::1", "fe80::1"] {
        assert!(
            matches!(
                validate_lookup_target(host),
                Err(DomainError::PrivateAddressNotAllowed(_))
            ),
            "expected {host:?} to be refused"
        );
    }
}

#[test]
fn test_ipv4_mapped_private_address() {
    let ip: IpAddr = "::ffff:192.168.1.1".parse().unwrap();
    assert!(is_private_address(&ip));

    let public: IpAddr = "::ffff:8.8.8.8".parse().unwrap();
    assert!(!is_private_address(&public));
}
