use axum::response::Html;

// Static shells; the browser fills them in from /api.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}

pub async fn inventory() -> Html<&'static str> {
    Html(include_str!("../../templates/inventory.html"))
}

pub async fn orders() -> Html<&'static str> {
    Html(include_str!("../../templates/orders.html"))
}

pub async fn production() -> Html<&'static str> {
    Html(include_str!("../../templates/production.html"))
}

pub async fn sales() -> Html<&'static str> {
    Html(include_str!("../../templates/sales.html"))
}
