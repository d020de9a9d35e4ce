//! HTML bodies for the booking emails
//!
//! Every user-supplied value passes through [`escape_html`] before it is
//! interpolated.

use super::traits::BookingConfirmation;

const ACCENT: &str = "#8B7355";

/// Subject line of the customer confirmation
pub const CUSTOMER_SUBJECT: &str = "Your Consultation Booking is Confirmed! ✨";

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Subject line of the operator notification
///
/// Subjects are plain text, so nothing is escaped here.
pub fn operator_subject(booking: &BookingConfirmation) -> String {
    format!(
        "New Booking: {} - {} at {}",
        booking.name, booking.date, booking.time
    )
}

fn detail_row(label: &str, value: &str) -> String {
    format!(
        r#"<tr><td style="padding: 10px 0; color: #888888; font-size: 14px; vertical-align: top;">{label}</td><td style="padding: 10px 0; color: #333333; font-size: 14px; text-align: right; font-weight: 500;">{}</td></tr>"#,
        escape_html(value)
    )
}

fn operator_row(label: &str, value: &str) -> String {
    format!(
        r#"<tr><td style="padding: 12px; border-bottom: 1px solid #eee; font-weight: bold; color: #666; vertical-align: top;">{label}</td><td style="padding: 12px; border-bottom: 1px solid #eee;">{}</td></tr>"#,
        escape_html(value)
    )
}

/// Customer-facing confirmation body
pub fn customer_html(booking: &BookingConfirmation, operator_address: &str) -> String {
    let mut rows = vec![
        detail_row("Date", &booking.date),
        detail_row("Time", &booking.time),
        detail_row("Membership", &booking.membership),
        detail_row("Contact", &booking.contact_number),
    ];
    if let Some(message) = booking.message() {
        rows.push(detail_row("Message", message));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1.0"></head>
<body style="font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 0; padding: 0; background-color: #f8f5f2;">
<div style="max-width: 600px; margin: 0 auto; background-color: #ffffff;">
<div style="background-color: {ACCENT}; padding: 40px 30px; text-align: center;">
<h1 style="color: #ffffff; margin: 0; font-size: 28px; font-weight: 300; letter-spacing: 2px;">HILOMÈ</h1>
<p style="color: #ffffff; margin: 10px 0 0; font-size: 12px; letter-spacing: 1px;">SKIN CLINIC</p>
</div>
<div style="padding: 40px 30px;">
<h2 style="color: {ACCENT}; margin: 0 0 20px; font-size: 24px; font-weight: 400;">Thank You, {name}!</h2>
<p style="color: #666666; line-height: 1.8; margin: 0 0 25px;">Your consultation has been successfully booked. We're excited to help you achieve your skincare goals!</p>
<div style="background-color: #f8f5f2; border-radius: 12px; padding: 25px; margin: 25px 0;">
<h3 style="color: {ACCENT}; margin: 0 0 20px; font-size: 18px; font-weight: 500;">Booking Details</h3>
<table style="width: 100%; border-collapse: collapse;">{rows}</table>
</div>
<div style="margin: 30px 0;">
<h3 style="color: {ACCENT}; margin: 0 0 15px; font-size: 16px;">What to Expect:</h3>
<ul style="color: #666666; line-height: 2; padding-left: 20px; margin: 0;">
<li>Our team will confirm your appointment within 24 hours</li>
<li>Please arrive 10 minutes before your scheduled time</li>
<li>Bring any relevant skincare products you currently use</li>
</ul>
</div>
<div style="background-color: {ACCENT}; border-radius: 12px; padding: 25px; margin-top: 30px; text-align: center;">
<p style="color: #ffffff; margin: 0 0 10px; font-size: 14px;">Questions? Contact us:</p>
<p style="color: #ffffff; margin: 0; font-size: 16px; font-weight: 500;">0977 334 4200</p>
<p style="color: #ffffff; margin: 10px 0 0; font-size: 14px;">{operator}</p>
</div>
</div>
<div style="background-color: #f8f5f2; padding: 25px 30px; text-align: center;">
<p style="color: #888888; margin: 0; font-size: 12px;">Hilomè Skin Clinic. All rights reserved.</p>
<p style="color: #888888; margin: 10px 0 0; font-size: 12px;">6014 Mandaue City, Philippines</p>
</div>
</div>
</body>
</html>"#,
        name = escape_html(&booking.name),
        rows = rows.concat(),
        operator = escape_html(operator_address),
    )
}

/// Operator notification body
pub fn operator_html(booking: &BookingConfirmation) -> String {
    let mut rows = vec![
        operator_row("Name", &booking.name),
        operator_row("Email", &booking.email),
        operator_row("Phone", &booking.contact_number),
        operator_row("Membership", &booking.membership),
        operator_row("Date", &booking.date),
        operator_row("Time", &booking.time),
    ];
    if let Some(message) = booking.message() {
        rows.push(operator_row("Message", message));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<body style="font-family: Arial, sans-serif; padding: 20px; background-color: #f5f5f5;">
<div style="max-width: 500px; margin: 0 auto; background: white; padding: 30px; border-radius: 10px;">
<h2 style="color: {ACCENT}; margin-top: 0;">New Consultation Booking</h2>
<table style="width: 100%; border-collapse: collapse;">{rows}</table>
</div>
</body>
</html>"#,
        rows = rows.concat(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(message: Option<&str>) -> BookingConfirmation {
        BookingConfirmation {
            name: "Ana <b>Cruz</b>".to_string(),
            email: "ana@example.com".to_string(),
            contact_number: "0917 000 0000".to_string(),
            membership: "Gold".to_string(),
            date: "2025-03-01".to_string(),
            time: "10:00 AM".to_string(),
            message: message.map(str::to_string),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#39;y&#39;&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_customer_html_escapes_name() {
        let html = customer_html(&booking(None), "clinic@example.com");
        assert!(html.contains("Thank You, Ana &lt;b&gt;Cruz&lt;/b&gt;!"));
        assert!(!html.contains("<b>Cruz</b>"));
        assert!(html.contains("clinic@example.com"));
    }

    #[test]
    fn test_message_row_only_when_present() {
        assert!(!operator_html(&booking(None)).contains(">Message<"));
        let html = operator_html(&booking(Some("First visit")));
        assert!(html.contains(">Message<"));
        assert!(html.contains("First visit"));
    }

    #[test]
    fn test_operator_subject() {
        let mut b = booking(None);
        b.name = "Ana Cruz".to_string();
        assert_eq!(
            operator_subject(&b),
            "New Booking: Ana Cruz - 2025-03-01 at 10:00 AM"
        );
    }
}
