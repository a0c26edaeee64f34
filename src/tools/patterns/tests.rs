#![cfg(test)]
mod tests {
    use crate::document::Document;
    use crate::tools::patterns::*;
    use crate::types::{Domain, Platform};

    #[test]
    fn test_every_rule_is_registered() {
        let lib = PatternLibrary::standard();
        let ids = [
            RuleId::CompanyOverride,
            RuleId::CompanyLogoAlt,
            RuleId::CompanyTitle,
            RuleId::CompanyDomain,
            RuleId::Email,
            RuleId::Phone,
            RuleId::AddressContact,
            RuleId::AddressMicrodata,
            RuleId::AddressPage,
            RuleId::Hours,
            RuleId::Service,
            RuleId::TestimonialMarkup,
            RuleId::TestimonialQuote,
            RuleId::TestimonialText,
        ];
        for id in ids.into_iter().chain(Platform::ALL.map(RuleId::Social)) {
            let rule = lib.rule(id).unwrap();
            assert_eq!(rule.id, id);
        }
    }

    #[test]
    fn test_rule_kinds() {
        assert_eq!(RuleId::AddressMicrodata.kind(), FactKind::Address);
        assert_eq!(RuleId::TestimonialQuote.kind(), FactKind::Testimonial);
        assert_eq!(RuleId::Social(Platform::Twitter).kind(), FactKind::SocialLink);
        assert_eq!(RuleId::Social(Platform::LinkedIn).name(), "social.linkedin");
    }

    #[test]
    fn test_length_bounds() {
        let open = LengthBounds::exclusive(5, 60);
        assert!(!open.contains("12345"));
        assert!(open.contains("123456"));

        let closed = LengthBounds::inclusive(3, 5);
        assert!(closed.contains("abc"));
        assert!(closed.contains("abcde"));
        assert!(!closed.contains("abcdef"));

        // characters, not bytes
        assert!(closed.contains("ééé"));
    }

    #[test]
    fn test_bad_regex_is_a_pattern_error() {
        let config = PatternConfig {
            testimonial_denylist: vec!["(unclosed".into()],
            ..PatternConfig::default()
        };
        let err = PatternLibrary::new(&config).unwrap_err();
        assert!(err.to_string().contains("testimonial_denylist"));
    }

    #[test]
    fn test_bad_selector_is_a_pattern_error() {
        let config = PatternConfig {
            brand_selectors: vec!["img[".into()],
            ..PatternConfig::default()
        };
        assert!(PatternLibrary::new(&config).is_err());
    }

    #[test]
    fn test_junk_phrases_are_literal() {
        let config = PatternConfig {
            junk_phrases: vec!["a.b (c)".into()],
            ..PatternConfig::default()
        };
        let lib = PatternLibrary::new(&config).unwrap();
        let hours = lib.rule(RuleId::Hours).unwrap();
        assert!(hours.is_excluded("see A.B (C) today"));
        assert!(!hours.is_excluded("see axb c today"));
    }

    #[test]
    fn test_company_override_exact_then_fragment() {
        let lib = PatternLibrary::standard();
        assert_eq!(
            lib.company_override(&Domain::from_raw("www.fissionlabs.com")),
            Some("Fission Labs")
        );
        assert_eq!(
            lib.company_override(&Domain::from_raw("belredheating.net")),
            Some("Belred")
        );
        assert_eq!(lib.company_override(&Domain::from_raw("contoso.com")), None);
    }

    #[test]
    fn test_service_fallback_by_host_keyword() {
        let lib = PatternLibrary::standard();
        assert_eq!(lib.service_fallback("besthvacpros.com")[0], "HVAC Services");
        assert_eq!(lib.service_fallback("acmetech.io")[0], "Software Development");
        assert_eq!(
            lib.service_fallback("contoso.com"),
            ["Professional Services", "Business Solutions", "Customer Support"]
        );
    }

    #[test]
    fn test_review_terms_and_service_keywords() {
        let lib = PatternLibrary::standard();
        assert_eq!(lib.review_terms("Great team, very PROFESSIONAL"), 3);
        assert!(lib.is_service_like("Furnace Installation"));
        assert!(!lib.is_service_like("Meet Our People"));
    }

    #[test]
    fn test_rule_elements_follow_scope() {
        let doc = Document::parse(
            r#"<div class="footer-contact">A</div>
               <span itemprop="streetAddress">B</span>
               <h3>C</h3>"#,
        );
        let lib = PatternLibrary::standard();
        assert_eq!(lib.rule(RuleId::AddressContact).unwrap().elements(&doc).len(), 1);
        assert_eq!(lib.rule(RuleId::AddressMicrodata).unwrap().elements(&doc).len(), 1);
        assert!(lib.rule(RuleId::Email).unwrap().elements(&doc).is_empty());
    }

    #[test]
    fn test_config_deserializes_partial_json() {
        let config: PatternConfig =
            serde_json::from_str(r#"{ "serviceCap": 4, "defaultServices": ["Repairs"] }"#).unwrap();
        assert_eq!(config.service_cap, 4);
        assert_eq!(config.default_services, vec!["Repairs"]);
        assert_eq!(config.testimonial_cap, 5);
        assert!(!config.junk_phrases.is_empty());
    }
}
