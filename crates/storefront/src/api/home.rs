//! Product listing page served at `/`.

use super::{ApiResult, AppState};
use crate::model::Product;
use actor_framework::ActorClient;
use axum::{extract::State, response::Html};

/// GET / - HTML table of every product
pub async fn listing(State(state): State<AppState>) -> ApiResult<Html<String>> {
    let products = state.products.list().await?;
    Ok(Html(render_listing(&products)))
}

pub fn render_listing(products: &[Product]) -> String {
    let mut page = String::from(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Products</title></head>\n<body>\n<h1>Products</h1>\n",
    );

    if products.is_empty() {
        page.push_str("<p>No products yet.</p>\n");
    } else {
        page.push_str("<table>\n<tr><th>Name</th><th>Price</th><th>Quantity</th></tr>\n");
        for product in products {
            page.push_str(&format!(
                "<tr><td>{}</td><td>{:.2}</td><td>{}</td></tr>\n",
                escape(product.name.as_str()),
                product.price,
                product.quantity
            ));
        }
        page.push_str("</table>\n");
    }

    page.push_str("</body>\n</html>\n");
    page
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
