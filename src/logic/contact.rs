//! One-way WhatsApp handoff for contacting a poster.

use anyhow::{Context, Result};
use url::Url;

/// Build the wa.me link with the prefilled interest message for `title`.
///
/// The query encoding is left to [`Url`]; no phone number is attached, so
/// WhatsApp prompts the user to pick a recipient.
pub fn whatsapp_url(title: &str) -> Result<Url> {
    let message = format!("Hi, I'm interested in the \"{title}\" position posted on Freelance Jo.");
    Url::parse_with_params("https://wa.me/", [("text", message.as_str())])
        .context("Failed to build WhatsApp contact URL")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_targets_wa_me_with_encoded_message() {
        let url = whatsapp_url("Dentist").unwrap();

        assert_eq!(url.host_str(), Some("wa.me"));
        let text: String = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert!(text.contains("\"Dentist\" position"));
    }

    #[test]
    fn titles_with_reserved_characters_survive_encoding() {
        let url = whatsapp_url("C++ & Rust dev?").unwrap();

        let text: String = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert!(text.contains("C++ & Rust dev?"));
    }
}
