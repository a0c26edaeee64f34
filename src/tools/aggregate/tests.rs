#![cfg(test)]
mod tests {
    use crate::tools::aggregate::*;
    use crate::types::{FactRecord, Platform, ServiceOrigin};

    fn named(name: &str) -> FactRecord {
        FactRecord {
            company_name: Some(name.to_string()),
            ..FactRecord::default()
        }
    }

    fn with_services(origin: ServiceOrigin, services: &[&str]) -> FactRecord {
        FactRecord {
            services: services.iter().map(|s| s.to_string()).collect(),
            service_origin: origin,
            ..FactRecord::default()
        }
    }

    #[test]
    fn test_company_name_first_non_empty_wins() {
        let site = aggregate(&[FactRecord::default(), named("Acme Corp")], DEFAULT_PAGE_CAP);
        assert_eq!(site.company_name.as_deref(), Some("Acme Corp"));

        let site = aggregate(&[named("Home Co"), named("Acme Corp")], DEFAULT_PAGE_CAP);
        assert_eq!(site.company_name.as_deref(), Some("Home Co"));
    }

    #[test]
    fn test_page_cap_limits_input() {
        let records = [FactRecord::default(), FactRecord::default(), named("Late Co")];
        assert_eq!(aggregate(&records, 2).company_name, None);
        assert_eq!(aggregate(&records, 3).company_name.as_deref(), Some("Late Co"));
        assert_eq!(aggregate(&records, 0), FactRecord::default());
    }

    #[test]
    fn test_contacts_union() {
        let mut a = FactRecord::default();
        a.emails.insert("info@acme.com".into());
        a.phones.insert("(425) 555-0100".into());
        let mut b = FactRecord::default();
        b.emails.insert("info@acme.com".into());
        b.emails.insert("jobs@acme.com".into());
        b.phones.insert("(425) 555-0100".into());

        let site = aggregate(&[a, b], DEFAULT_PAGE_CAP);
        assert_eq!(site.emails.len(), 2);
        assert_eq!(site.phones.len(), 1);
    }

    #[test]
    fn test_address_and_hours_stay_singular() {
        let a = FactRecord {
            hours: Some("Mon-Fri: 8:00 AM - 5:00 PM".into()),
            ..FactRecord::default()
        };
        let b = FactRecord {
            address: Some("1200 Main Street, Bellevue, WA".into()),
            hours: Some("Mon-Fri: 9:00 AM - 4:00 PM".into()),
            ..FactRecord::default()
        };
        let site = aggregate(&[a, b], DEFAULT_PAGE_CAP);
        assert_eq!(site.address.as_deref(), Some("1200 Main Street, Bellevue, WA"));
        assert_eq!(site.hours.as_deref(), Some("Mon-Fri: 8:00 AM - 5:00 PM"));
    }

    #[test]
    fn test_services_merge_with_containment_and_cap() {
        let a = with_services(
            ServiceOrigin::Extracted,
            &["Furnace Repair", "Heat Pump Installation", "Duct Cleaning Service"],
        );
        let b = with_services(
            ServiceOrigin::Extracted,
            &[
                "furnace repair",
                "Boiler Maintenance",
                "Water Heater Service",
                "Thermostat Installation",
                "Mini Split Repair",
            ],
        );
        let site = aggregate(&[a, b], DEFAULT_PAGE_CAP);
        assert_eq!(
            site.services,
            vec![
                "Furnace Repair",
                "Heat Pump Installation",
                "Duct Cleaning Service",
                "Boiler Maintenance",
                "Water Heater Service",
                "Thermostat Installation",
            ]
        );
        assert_eq!(site.service_origin, ServiceOrigin::Extracted);
    }

    #[test]
    fn test_fallback_services_never_mix_with_extracted() {
        let home = with_services(ServiceOrigin::Fallback, &["HVAC Services", "Heating & Cooling"]);
        let about = with_services(ServiceOrigin::Extracted, &["Furnace Repair"]);
        let site = aggregate(&[home.clone(), about], DEFAULT_PAGE_CAP);
        assert_eq!(site.services, vec!["Furnace Repair"]);
        assert_eq!(site.service_origin, ServiceOrigin::Extracted);

        let site = aggregate(&[home, FactRecord::default()], DEFAULT_PAGE_CAP);
        assert_eq!(site.services, vec!["HVAC Services", "Heating & Cooling"]);
        assert_eq!(site.service_origin, ServiceOrigin::Fallback);
    }

    #[test]
    fn test_testimonials_dedupe_and_cap() {
        let a = FactRecord {
            testimonials: vec![
                "Great service, very professional team!".into(),
                "Quick install and a friendly technician.".into(),
            ],
            ..FactRecord::default()
        };
        let b = FactRecord {
            testimonials: vec![
                "Great service! Very professional team.".into(),
                "They fixed our furnace the same day, I recommend them.".into(),
                "Reliable staff and fair quotes every single time.".into(),
            ],
            ..FactRecord::default()
        };
        let site = aggregate(&[a, b], DEFAULT_PAGE_CAP);
        assert_eq!(
            site.testimonials,
            vec![
                "Great service, very professional team!",
                "Quick install and a friendly technician.",
                "They fixed our furnace the same day, I recommend them.",
            ]
        );
    }

    #[test]
    fn test_social_links_never_overwritten() {
        let mut a = FactRecord::default();
        a.social_media
            .insert(Platform::Facebook, "https://facebook.com/first".into());
        let mut b = FactRecord::default();
        b.social_media
            .insert(Platform::Facebook, "https://facebook.com/second".into());
        b.social_media
            .insert(Platform::Instagram, "https://instagram.com/acme".into());

        let site = aggregate(&[a, b], DEFAULT_PAGE_CAP);
        assert_eq!(site.social_media[&Platform::Facebook], "https://facebook.com/first");
        assert_eq!(site.social_media[&Platform::Instagram], "https://instagram.com/acme");
    }

    #[test]
    fn test_failed_page_contributes_nothing() {
        let site = aggregate(&[FactRecord::default(), named("Acme Corp")], DEFAULT_PAGE_CAP);
        assert_eq!(site, named("Acme Corp"));
    }
}
