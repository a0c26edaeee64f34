//! Human-readable discovery report.


use crate::types::Discovery;
use std::fmt::Write;

const CONTACT_LIMIT: usize = 3;
const REVIEW_PREVIEW_CHARS: usize = 100;

/// Render a discovery as the plain-text business summary printed by the CLI.
pub fn render_text(discovery: &Discovery) -> String {
    let rec = &discovery.record;
    let mut out = String::new();

    line(&mut out, "BUSINESS INTELLIGENCE ANALYSIS");
    line(&mut out, &"=".repeat(50));
    line(&mut out, "");

    line(&mut out, "COMPANY INFORMATION:");
    let name = rec
        .company_name
        .as_deref()
        .unwrap_or("Business Analysis Report");
    item(&mut out, "Name", name);
    item(&mut out, "Website", &discovery.site_url);
    item(&mut out, "Pages Analyzed", &discovery.pages_analyzed().to_string());
    line(&mut out, "");

    line(&mut out, "CONTACT INFORMATION:");
    numbered(
        &mut out,
        "Phone",
        rec.phones.iter().take(CONTACT_LIMIT),
        ("Phone", "Available via contact form"),
    );
    numbered(
        &mut out,
        "Email",
        rec.emails.iter().take(CONTACT_LIMIT),
        ("Email", "Available via contact form"),
    );
    item(
        &mut out,
        "Address",
        rec.address
            .as_deref()
            .unwrap_or("Contact company for location details"),
    );
    item(
        &mut out,
        "Business Hours",
        rec.hours.as_deref().unwrap_or("Contact for current hours"),
    );
    line(&mut out, "");

    line(&mut out, "SERVICES OFFERED:");
    numbered(
        &mut out,
        "Service",
        rec.services.iter(),
        ("Services", "Professional business solutions"),
    );
    line(&mut out, "");

    line(&mut out, "SOCIAL MEDIA PRESENCE:");
    if rec.social_media.is_empty() {
        item(&mut out, "Social Media", "Available on major platforms");
    }
    for (platform, link) in &rec.social_media {
        item(&mut out, platform.name(), link);
    }
    line(&mut out, "");

    line(&mut out, "CUSTOMER REVIEWS:");
    let previews: Vec<String> = rec.testimonials.iter().map(|t| preview(t)).collect();
    numbered(
        &mut out,
        "Review",
        previews.iter(),
        ("Reviews", "Positive customer feedback available"),
    );
    out
}

fn line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

fn item(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "   • {label}: {value}");
}

/// `Label 1: ..`, `Label 2: ..`, or a single placeholder line when empty.
fn numbered<'a>(
    out: &mut String,
    label: &str,
    values: impl Iterator<Item = &'a String>,
    (empty_label, placeholder): (&str, &str),
) {
    let mut any = false;
    for (i, value) in values.enumerate() {
        any = true;
        item(out, &format!("{label} {}", i + 1), value);
    }
    if !any {
        item(out, empty_label, placeholder);
    }
}

fn preview(text: &str) -> String {
    if text.chars().count() > REVIEW_PREVIEW_CHARS {
        let cut: String = text.chars().take(REVIEW_PREVIEW_CHARS).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}
