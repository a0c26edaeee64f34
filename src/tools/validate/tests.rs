#![cfg(test)]
mod tests {
    use crate::tools::patterns::{PatternLibrary, RuleId};
    use crate::tools::validate::*;

    fn ok(id: RuleId, text: &str) -> bool {
        accepts(PatternLibrary::standard(), id, text).unwrap()
    }

    #[test]
    fn test_empty_text_is_rejected_everywhere() {
        for id in [RuleId::Email, RuleId::Phone, RuleId::Hours, RuleId::Service] {
            assert!(!ok(id, ""), "{id:?}");
        }
    }

    #[test]
    fn test_company_bounds() {
        assert!(ok(RuleId::CompanyLogoAlt, "Acme"));
        assert!(!ok(RuleId::CompanyLogoAlt, "AB"));
        assert!(!ok(RuleId::CompanyLogoAlt, "Acme Logotype"));
        assert!(ok(RuleId::CompanyTitle, "Contoso"));
        assert!(!ok(RuleId::CompanyTitle, "Abc"));
        assert!(!ok(RuleId::CompanyTitle, &"x".repeat(50)));
    }

    #[test]
    fn test_address_tiers() {
        assert!(ok(RuleId::AddressContact, "1200 Main Street, Bellevue, WA"));
        assert!(!ok(RuleId::AddressContact, "1 Main St, Kent, WA"));
        assert!(ok(RuleId::AddressMicrodata, "500 Pine Avenue Suite 2"));
        assert!(!ok(RuleId::AddressMicrodata, "Pine Avenue, Suite Two"));
        assert!(!ok(
            RuleId::AddressPage,
            "100 Quick Links Blog Street, Kent, WA 98032"
        ));
    }

    #[test]
    fn test_hours_junk_and_bounds() {
        assert!(ok(RuleId::Hours, "Mon-Fri: 8:00 AM - 5:00 PM"));
        assert!(!ok(RuleId::Hours, "Book Now Mon-Fri: 8:00 AM - 5:00 PM"));
        assert!(!ok(RuleId::Hours, "Mon-Fri"));
    }

    #[test]
    fn test_service_shapes() {
        assert!(ok(RuleId::Service, "Furnace Installation"));
        assert!(!ok(RuleId::Service, "Call (425) 555-0100"));
        assert!(!ok(RuleId::Service, "service@acme.com"));
        assert!(!ok(RuleId::Service, "https://acme.com/services"));
        assert!(!ok(RuleId::Service, "HVAC"));
        assert!(!is_valid_service("425 - 555 (01)"));
        assert!(is_valid_service("24/7 Repair"));
    }

    #[test]
    fn test_testimonial_rules() {
        let good = "Great team, they installed our furnace in a day.";
        assert!(ok(RuleId::TestimonialQuote, good));
        assert!(ok(RuleId::TestimonialMarkup, good));
        assert!(!ok(
            RuleId::TestimonialQuote,
            "We credit our success to great service and teamwork."
        ));
        assert!(!ok(RuleId::TestimonialText, "A lovely afternoon at the park with family."));
        assert!(!ok(RuleId::TestimonialText, "Great team work"));
    }

    #[test]
    fn test_review_vocabulary_threshold() {
        let lib = PatternLibrary::standard();
        assert!(has_review_vocabulary(lib, "excellent and reliable"));
        assert!(!has_review_vocabulary(lib, "excellent afternoon"));
    }
}
