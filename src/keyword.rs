/// Returns the canonical mixed-case spelling of a configuration keyword.
///
/// Keys usually arrive in `snake_case` (`identity_file`), while the config
/// schema expects `IdentityFile`. Each underscore-separated segment has its
/// first character uppercased and the rest kept as-is, so spellings that are
/// already canonical (`MACs`, `RhostsRSAAuthentication`) survive untouched.
///
/// The function is total: it never fails, and unknown keys come back in
/// best-effort canonical form rather than being rejected.
pub fn sanitize(keyword: &str) -> String {
    let mut canonical = String::with_capacity(keyword.len());

    for segment in keyword.split('_') {
        // Empty segments (leading/trailing/doubled underscores) are dropped.
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            canonical.push(first.to_ascii_uppercase());
            canonical.extend(chars);
        }
    }

    canonical
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snake_case_keys_become_canonical() {
        let entries = [
            ("identity_file", "IdentityFile"),
            ("port", "Port"),
            ("hash_known_hosts", "HashKnownHosts"),
            ("MACs", "MACs"),
            ("RhostsRSAAuthentication", "RhostsRSAAuthentication"),
        ];

        for (input, expected) in entries {
            assert_eq!(sanitize(input), expected);
        }
    }

    #[test]
    fn test_already_canonical_keys_pass_through() {
        for key in ["Port", "IdentityFile", "MACs", "RhostsRSAAuthentication"] {
            assert_eq!(sanitize(key), key);
        }
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_underscore_only_input_collapses_to_empty() {
        assert_eq!(sanitize("_"), "");
        assert_eq!(sanitize("___"), "");
    }

    #[test]
    fn test_stray_underscores_are_dropped() {
        assert_eq!(sanitize("_identity_file_"), "IdentityFile");
        assert_eq!(sanitize("hash__known__hosts"), "HashKnownHosts");
    }

    #[test]
    fn test_short_and_numeric_segments() {
        assert_eq!(sanitize("p_ort"), "Port");
        assert_eq!(sanitize("port_2"), "Port2");
        assert_eq!(sanitize("ssh_mac"), "SshMac");
    }

    #[test]
    fn test_interior_case_is_preserved() {
        // Only the first character of a segment is touched.
        assert_eq!(sanitize("proxy_useFeature"), "ProxyUseFeature");
        assert_eq!(sanitize("macs_SHA2"), "MacsSHA2");
    }

    #[test]
    fn test_output_never_contains_underscores() {
        for input in ["identity_file", "_a_b_", "a__b", "hash_known_hosts"] {
            assert!(!sanitize(input).contains('_'));
        }
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for input in ["identity_file", "port", "MACs", "", "_x_y_"] {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once);
        }
    }
}
