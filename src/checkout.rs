// Checkout is a hand-off: render the order as a WhatsApp message and hand
// the caller a wa.me deep link. No state, no delivery guarantee.
use crate::model::CatalogItem;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// Same escape set as JavaScript's encodeURIComponent: alphanumerics and
// `-_.!~*'()` pass through, everything else (UTF-8 bytes included) is %XX.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Chilean-style thousands grouping: 15000 -> "15.000".
pub fn format_clp(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().rev().enumerate() {
        if index > 0 && index % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped.chars().rev().collect()
}

/// The pre-filled order text, pack and unit variants.
pub fn order_message(item: &CatalogItem, store_name: &str) -> String {
    let price = format_clp(item.price);

    if item.is_pack {
        let included = item
            .included_titles
            .as_ref()
            .map(|titles| {
                titles
                    .iter()
                    .map(|title| format!("🔹 {title}"))
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .unwrap_or_else(|| "Consultar juegos".to_string());

        format!(
            "Hola {store_name}! 👋\n\nMe interesa este Pack que vi en la web:\n\n\
             🎁 *{}*\n\n📋 *Incluye:*\n{included}\n\n💰 Precio: ${price}\n\n\
             ¿Lo tienes disponible ?",
            item.title
        )
    } else {
        format!(
            "Hola {store_name}! 🎮\n\nVengo de la web y quiero llevarme este juego:\n\n\
             🔹 *{}*\n💰 Precio: ${price}\n\n¿Que métodos de pago tienes disponible?",
            item.title
        )
    }
}

pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!(
        "https://wa.me/{number}?text={}",
        utf8_percent_encode(message, URI_COMPONENT)
    )
}

/// One item straight to a pre-filled chat link.
pub fn checkout_link(item: &CatalogItem, store_name: &str, number: &str) -> String {
    whatsapp_link(number, &order_message(item, store_name))
}
