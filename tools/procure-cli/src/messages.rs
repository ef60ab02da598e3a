//! User-facing notification texts.

pub const SELECT_SHIP_TO: &str = "配送先を選択してください";
pub const SELECT_FARMER: &str = "農家を選択してください";
pub const CART_HAS_NO_ITEMS: &str = "カートに商品がありません";
pub const CART_EMPTY: &str = "カートが空です";
pub const ORDER_CREATED: &str = "注文を作成しました";
pub const ORDER_FAILED: &str = "注文の作成に失敗しました";
pub const NO_PRODUCTS: &str = "商品がありません";
pub const NO_ORDERS: &str = "注文がありません";
pub const NO_SHIP_TOS: &str = "配送先が登録されていません";
pub const LOADING: &str = "読み込み中...";
pub const PROCESSING: &str = "処理中...";
pub const SPECIAL_PRICE: &str = "特別価格";
pub const LOAD_FAILED: &str = "読み込みに失敗しました";

/// Notification after adding a product.
pub fn added_to_cart(product_name: &str) -> String {
    format!("{} をカートに追加しました", product_name)
}
