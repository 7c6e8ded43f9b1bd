//! Outbound URI construction for the contact affordances. These are plain
//! string builders; nothing here performs a request.

/// Bare `mailto:` link.
pub fn mailto(email: &str) -> String {
    format!("mailto:{email}")
}

/// `mailto:` link with a prefilled subject and body.
pub fn mailto_with_template(email: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{email}?subject={}&body={}",
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// Phone numbers go into the href as-is; dialers tolerate spaces.
pub fn tel(phone: &str) -> String {
    format!("tel:{phone}")
}

/// Map search for a free-form location string.
pub fn map_search(location: &str) -> String {
    format!("https://maps.google.com/?q={}", urlencoding::encode(location))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailto_is_verbatim() {
        assert_eq!(mailto("a@b.dev"), "mailto:a@b.dev");
    }

    #[test]
    fn template_encodes_subject_and_body() {
        let uri = mailto_with_template("a@b.dev", "Let's talk", "Hi Ada,\r\n\r\nHello.");
        assert_eq!(
            uri,
            "mailto:a@b.dev?subject=Let%27s%20talk&body=Hi%20Ada%2C%0D%0A%0D%0AHello."
        );
    }

    #[test]
    fn tel_keeps_the_number_as_given() {
        assert_eq!(tel("+91 98765 43210"), "tel:+91 98765 43210");
    }

    #[test]
    fn map_search_encodes_the_query() {
        assert_eq!(
            map_search("Bengaluru, India"),
            "https://maps.google.com/?q=Bengaluru%2C%20India"
        );
    }
}
