// SPDX-License-Identifier: MPL-2.0
//! WhatsApp order deep links.
//!
//! The storefront sells through WhatsApp: a product page carries a
//! `https://wa.me/<number>?text=<message>` link whose message quotes the
//! product name and code. The message text is percent-encoded with the
//! same character set browsers use for `encodeURIComponent`, so links built
//! here match the ones the storefront has always sent.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )`.
const ORDER_MESSAGE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds the deep link for a pre-filled order message to the given contact
/// number (digits only, country code included).
#[must_use]
pub fn order_link(number: &str, message: &str) -> String {
    let encoded = utf8_percent_encode(message, ORDER_MESSAGE_SET).to_string();
    format!("https://wa.me/{number}?text={encoded}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_the_storefront_order_message() {
        let message = "¡Hola! Me interesa la máscara Calavera (Código: M01). ¿Está disponible?";
        let link = order_link("573246052525", message);

        assert_eq!(
            link,
            "https://wa.me/573246052525?text=%C2%A1Hola!%20Me%20interesa%20la%20m%C3%A1scara%20Calavera%20(C%C3%B3digo%3A%20M01).%20%C2%BFEst%C3%A1%20disponible%3F"
        );
    }

    #[test]
    fn spaces_become_percent_twenty() {
        let link = order_link("1", "a b");
        assert!(link.ends_with("?text=a%20b"));
    }

    #[test]
    fn unreserved_marks_pass_through() {
        let link = order_link("1", "a-b_c.d!e~f*g'h(i)j");
        assert!(link.ends_with("?text=a-b_c.d!e~f*g'h(i)j"));
    }

    #[test]
    fn reserved_url_characters_are_escaped() {
        let link = order_link("1", "a&b=c?d/e");
        assert!(link.ends_with("?text=a%26b%3Dc%3Fd%2Fe"));
    }
}
