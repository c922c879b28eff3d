//! Text and JSON output for command results.

use bookcart_app::domain::carts::records::{Cart, CartItemRecord, CartOwner};
use serde::Serialize;

/// Output format for commands that print records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value)
        .map_err(|error| format!("failed to serialize output: {error}"))
}

pub(crate) fn cart(cart: &Cart, format: OutputFormat) -> Result<String, String> {
    if format == OutputFormat::Json {
        return json(cart);
    }

    let owner = match cart.owner {
        CartOwner::Anonymous => "anonymous".to_string(),
        CartOwner::User(user) => user.to_string(),
    };

    let mut lines = vec![
        format!("cart_uuid: {}", cart.uuid),
        format!("owner: {owner}"),
        format!("created_at: {}", cart.created_at),
    ];

    if cart.items.is_empty() {
        lines.push("items: none".to_string());
    }

    lines.extend(cart.items.iter().map(|details| {
        format!(
            "- {} x {} by {} @ {} = {} (item {})",
            details.item.quantity,
            details.book.title,
            details.book.author,
            details.item.price,
            details.item.total_price,
            details.item.uuid,
        )
    }));

    lines.push(format!("total: {}", cart.total));

    Ok(lines.join("\n"))
}

pub(crate) fn item(item: &CartItemRecord, format: OutputFormat) -> Result<String, String> {
    if format == OutputFormat::Json {
        return json(item);
    }

    Ok(format!(
        "item_uuid: {}\ncart_uuid: {}\nbook_uuid: {}\nquantity: {}\nprice: {}\ntotal_price: {}",
        item.uuid, item.cart_uuid, item.book_uuid, item.quantity, item.price, item.total_price,
    ))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use bookcart_app::domain::{
        books::records::{BookSummary, BookUuid},
        carts::records::{Cart, CartItemDetails, CartItemRecord, CartItemUuid, CartOwner, CartUuid},
    };
    use jiff::Timestamp;

    pub(crate) fn item(cart: CartUuid, quantity: u32, price: u64) -> CartItemRecord {
        let now = Timestamp::now();

        CartItemRecord {
            uuid: CartItemUuid::new(),
            cart_uuid: cart,
            book_uuid: BookUuid::new(),
            quantity,
            price,
            total_price: price * u64::from(quantity),
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn cart(owner: CartOwner, items: Vec<CartItemRecord>) -> Cart {
        let now = Timestamp::now();
        let total = items.iter().map(|item| item.total_price).sum();

        Cart {
            uuid: items.first().map_or_else(CartUuid::new, |item| item.cart_uuid),
            owner,
            is_anonymous: owner.is_anonymous(),
            items: items
                .into_iter()
                .map(|item| CartItemDetails {
                    item,
                    book: BookSummary {
                        title: "The Dispossessed".to_string(),
                        author: "Ursula K. Le Guin".to_string(),
                        publisher: "Harper & Row".to_string(),
                        cover_img: None,
                    },
                })
                .collect(),
            total,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use bookcart_app::domain::carts::records::CartUuid;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn text_cart_lists_lines_and_total() -> TestResult {
        let cart_uuid = CartUuid::new();
        let view = fixtures::cart(
            CartOwner::Anonymous,
            vec![fixtures::item(cart_uuid, 3, 15)],
        );

        let text = cart(&view, OutputFormat::Text)?;

        assert!(text.contains("owner: anonymous"));
        assert!(text.contains("3 x The Dispossessed by Ursula K. Le Guin @ 15 = 45"));
        assert!(text.ends_with("total: 45"));

        Ok(())
    }

    #[test]
    fn empty_cart_says_so() -> TestResult {
        let view = fixtures::cart(CartOwner::Anonymous, Vec::new());

        let text = cart(&view, OutputFormat::Text)?;

        assert!(text.contains("items: none"));
        assert!(text.ends_with("total: 0"));

        Ok(())
    }

    #[test]
    fn json_cart_flattens_item_fields() -> TestResult {
        let cart_uuid = CartUuid::new();
        let view = fixtures::cart(
            CartOwner::Anonymous,
            vec![fixtures::item(cart_uuid, 2, 20)],
        );

        let value: serde_json::Value = serde_json::from_str(&cart(&view, OutputFormat::Json)?)?;

        assert_eq!(value["total"], 40);
        assert_eq!(value["is_anonymous"], true);
        assert_eq!(value["owner"]["kind"], "anonymous");
        assert_eq!(value["items"][0]["quantity"], 2);
        assert_eq!(value["items"][0]["book"]["title"], "The Dispossessed");

        Ok(())
    }
}
