#![cfg(test)]
mod tests {
    use crate::tools::clean::*;

    #[test]
    fn test_zero_width_and_control_characters() {
        assert_eq!(normalize("Acme\u{200B} Heating\x00"), "Acme Heating");
        assert_eq!(normalize("\u{FEFF}Contoso"), "Contoso");
    }

    #[test]
    fn test_whitespace_collapses() {
        assert_eq!(normalize("  Mon-Fri:\n\t8:00 AM  "), "Mon-Fri: 8:00 AM");
        assert_eq!(normalize("First\r\nSecond\rThird"), "First Second Third");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_unicode_nfc() {
        assert_eq!(normalize("Cafe\u{0301} Roma"), "Caf\u{00E9} Roma");
        assert_eq!(normalize("Caf\u{00E9} Roma"), normalize("Cafe\u{0301} Roma"));
    }

    #[test]
    fn test_leading_markers_stripped() {
        assert_eq!(normalize("•  Furnace Repair"), "Furnace Repair");
        assert_eq!(normalize("1. Duct Cleaning"), "Duct Cleaning");
        assert_eq!(normalize("— Heat Pumps"), "Heat Pumps");
        assert_eq!(normalize("1200 Main Street, Bellevue, WA"), "1200 Main Street, Bellevue, WA");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "  • 1. Water\u{200B} Heater   Repair\n",
            "\"Great service!\"   - Jane D.",
            "Caf\u{0065}\u{0301}  \t Bar",
            "- - - ",
            "(425) 555-0100",
            "12) 3. Item",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input {s:?}");
        }
    }

    #[test]
    fn test_clean_service() {
        assert_eq!(clean_service("Service 2: Furnace Repair"), "Furnace Repair");
        assert_eq!(clean_service("• 3. Duct Cleaning"), "Duct Cleaning");
        assert_eq!(
            clean_service("Emergency Repair Mon-Fri 8:00 AM"),
            "Emergency Repair"
        );
        assert_eq!(clean_service("Open till 6:30 PM daily"), "Open till daily");
    }

    #[test]
    fn test_clean_title() {
        assert_eq!(clean_title("Northwind Plumbing | Seattle's Best"), "Northwind Plumbing");
        assert_eq!(clean_title("Contoso - Home"), "Contoso");
        assert_eq!(clean_title("Contoso Home"), "Contoso");
        assert_eq!(clean_title("Fabrikam"), "Fabrikam");
    }

    #[test]
    fn test_strip_logo_token() {
        assert_eq!(strip_logo_token("Acme Heating Logo"), "Acme Heating");
        assert_eq!(strip_logo_token("logo Acme"), "Acme");
        assert_eq!(strip_logo_token("Logotype Studio"), "Logotype Studio");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("bluesky-roofing"), "Bluesky-Roofing");
        assert_eq!(title_case("acmeheating"), "Acmeheating");
        assert_eq!(title_case("HVAC2go"), "Hvac2Go");
    }

    #[test]
    fn test_canonical_phone() {
        assert_eq!(canonical_phone("425.555.0100").as_deref(), Some("(425) 555-0100"));
        assert_eq!(canonical_phone("(425) 555-0100").as_deref(), Some("(425) 555-0100"));
        assert_eq!(canonical_phone("425 555 0100").as_deref(), Some("(425) 555-0100"));
        assert_eq!(canonical_phone("555-0100"), None);
    }

    #[test]
    fn test_force_https() {
        assert_eq!(force_https("facebook.com/acme"), "https://facebook.com/acme");
        assert_eq!(force_https("http://twitter.com/acme"), "https://twitter.com/acme");
        assert_eq!(force_https("https://x.com/acme"), "https://x.com/acme");
    }
}
