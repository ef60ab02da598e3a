//! Interactive shopping session.
//!
//! One [`CartStore`] lives for the whole session. Every menu action either
//! mutates it or reads a snapshot for rendering; remote failures are reported
//! in place and leave the cart as it was.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};
use procure_commerce::{
    Cart, CartStore, CommerceError, Currency, Farmer, FarmerId, Money, Product, ShipTo,
};
use procure_data::{submit_cart, CheckoutError, ProcurementApi};
use tokio::sync::watch;

use super::catalog::load_farmers;
use super::ShopArgs;
use crate::context::Context;
use crate::messages;
use crate::views;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    SelectFarmer,
    Browse,
    ViewCart,
    ChangeQuantity,
    RemoveLine,
    SetDiscount,
    ChooseShipTo,
    Checkout,
    Clear,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 10] = [
        MenuAction::SelectFarmer,
        MenuAction::Browse,
        MenuAction::ViewCart,
        MenuAction::ChangeQuantity,
        MenuAction::RemoveLine,
        MenuAction::SetDiscount,
        MenuAction::ChooseShipTo,
        MenuAction::Checkout,
        MenuAction::Clear,
        MenuAction::Quit,
    ];

    fn label(&self, cart: &Cart) -> String {
        match self {
            MenuAction::SelectFarmer => "農家を選ぶ".to_string(),
            MenuAction::Browse => "商品を見る".to_string(),
            MenuAction::ViewCart => format!("カートを見る ({})", cart.line_count()),
            MenuAction::ChangeQuantity => "数量を変更".to_string(),
            MenuAction::RemoveLine => "商品を削除".to_string(),
            MenuAction::SetDiscount => "値引きを設定".to_string(),
            MenuAction::ChooseShipTo => "配送先を選ぶ".to_string(),
            MenuAction::Checkout => "注文する".to_string(),
            MenuAction::Clear => "カートを空にする".to_string(),
            MenuAction::Quit => "終了".to_string(),
        }
    }
}

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("`procure shop` is interactive and cannot be used with --json");
    }

    let mut session = Session::new(ctx)?;
    if let Some(farmer) = args.farmer {
        session.choose_farmer(FarmerId::new(farmer)).await;
    }
    session.run().await
}

struct Session<'a> {
    ctx: &'a Context,
    api: ProcurementApi,
    store: CartStore,
    cart: watch::Receiver<Cart>,
    currency: Currency,
    farmers: Vec<Farmer>,
    products: Vec<Product>,
    ship_tos: Vec<ShipTo>,
}

impl<'a> Session<'a> {
    fn new(ctx: &'a Context) -> Result<Self> {
        let store = CartStore::new();
        let cart = store.subscribe();
        Ok(Self {
            ctx,
            api: ctx.api()?,
            store,
            cart,
            currency: ctx.currency(),
            farmers: Vec::new(),
            products: Vec::new(),
            ship_tos: Vec::new(),
        })
    }

    async fn run(&mut self) -> Result<()> {
        self.ctx.output.header("発注");

        loop {
            let labels: Vec<String> = {
                let cart = self.cart.borrow_and_update();
                MenuAction::ALL.iter().map(|a| a.label(&cart)).collect()
            };

            let Some(choice) = Select::new()
                .with_prompt("メニュー")
                .items(&labels)
                .default(0)
                .interact_opt()?
            else {
                break;
            };

            match MenuAction::ALL[choice] {
                MenuAction::SelectFarmer => self.select_farmer().await?,
                MenuAction::Browse => self.browse().await?,
                MenuAction::ViewCart => {
                    views::render_cart(&self.ctx.output, &self.store.snapshot(), self.currency)
                }
                MenuAction::ChangeQuantity => self.change_quantity()?,
                MenuAction::RemoveLine => self.remove_line()?,
                MenuAction::SetDiscount => self.set_discount()?,
                MenuAction::ChooseShipTo => self.choose_ship_to().await?,
                MenuAction::Checkout => self.checkout().await?,
                MenuAction::Clear => self.clear()?,
                MenuAction::Quit => break,
            }
        }

        if !self.store.is_empty() {
            self.ctx.output.warn(&format!(
                "カートの {} 件は破棄されました",
                self.store.line_count()
            ));
        }
        Ok(())
    }

    async fn select_farmer(&mut self) -> Result<()> {
        if self.farmers.is_empty() {
            match load_farmers(self.ctx, false).await {
                Ok(farmers) => self.farmers = farmers,
                Err(e) => {
                    tracing::error!(error = ?e, "failed to load farmers");
                    self.ctx.output.notify(messages::LOAD_FAILED);
                    return Ok(());
                }
            }
        }
        if self.farmers.is_empty() {
            self.ctx.output.notify("農家が登録されていません");
            return Ok(());
        }

        let items: Vec<String> = self
            .farmers
            .iter()
            .map(|f| format!("{} ({})", f.name, f.id))
            .collect();
        let Some(index) = Select::new()
            .with_prompt(messages::SELECT_FARMER)
            .items(&items)
            .default(0)
            .interact_opt()?
        else {
            return Ok(());
        };

        let farmer_id = self.farmers[index].id.clone();
        self.choose_farmer(farmer_id).await;
        Ok(())
    }

    /// Load `farmer_id`'s catalog and point the cart at that supplier.
    ///
    /// On failure the cart and the current product list are left as they were.
    async fn choose_farmer(&mut self, farmer_id: FarmerId) {
        let spinner = self.ctx.output.spinner(messages::LOADING);
        let result = self.api.products(&farmer_id).await;
        spinner.finish_and_clear();

        match result {
            Ok(products) => {
                self.ctx
                    .output
                    .success(&format!("{}: {} 件の商品", farmer_id, products.len()));
                self.store.set_farmer(farmer_id);
                self.products = products;
            }
            Err(e) => {
                tracing::error!(farmer = %farmer_id, error = %e, "failed to load products");
                self.ctx.output.notify(messages::LOAD_FAILED);
            }
        }
    }

    async fn browse(&mut self) -> Result<()> {
        let Some(farmer_id) = self.store.snapshot().farmer_company_id().cloned() else {
            self.ctx.output.notify(messages::SELECT_FARMER);
            return Ok(());
        };
        if self.products.is_empty() {
            self.choose_farmer(farmer_id).await;
        }

        views::render_products(&self.ctx.output, &self.products, self.currency);
        if self.products.is_empty() {
            return Ok(());
        }

        let items: Vec<String> = self
            .products
            .iter()
            .map(|p| views::product_label(p, self.currency))
            .collect();

        while let Some(index) = Select::new()
            .with_prompt("カートに追加 (Esc で戻る)")
            .items(&items)
            .default(0)
            .interact_opt()?
        {
            let product = &self.products[index];
            self.store.add_item(product.to_cart_item(self.currency));
            self.ctx
                .output
                .notify(&messages::added_to_cart(&product.name));
        }
        Ok(())
    }

    /// Pick a cart line; `None` when the cart is empty or the user backs out.
    fn pick_line(&self, prompt: &str) -> Result<Option<procure_commerce::CartItem>> {
        let cart = self.store.snapshot();
        if cart.is_empty() {
            self.ctx.output.info(messages::CART_EMPTY);
            return Ok(None);
        }

        let items: Vec<String> = cart
            .items()
            .iter()
            .map(|item| views::cart_line_label(item, self.currency))
            .collect();
        let index = Select::new()
            .with_prompt(prompt)
            .items(&items)
            .default(0)
            .interact_opt()?;
        Ok(index.map(|i| cart.items()[i].clone()))
    }

    fn change_quantity(&self) -> Result<()> {
        let Some(item) = self.pick_line("数量を変更する商品")? else {
            return Ok(());
        };

        let quantity: i64 = Input::new()
            .with_prompt(format!("{} の数量", item.product_name()))
            .default(item.quantity())
            .interact_text()?;
        self.store.update_quantity(item.product_id(), quantity);
        Ok(())
    }

    fn remove_line(&self) -> Result<()> {
        if let Some(item) = self.pick_line("削除する商品")? {
            self.store.remove_item(item.product_id());
            self.ctx
                .output
                .info(&format!("{} を削除しました", item.product_name()));
        }
        Ok(())
    }

    fn set_discount(&self) -> Result<()> {
        let current = self.store.snapshot().discount_amount();
        let amount: f64 = Input::new()
            .with_prompt(format!("値引き額 ({})", self.currency.code()))
            .default(current.to_decimal(self.currency))
            .interact_text()?;
        self.store
            .set_discount(Money::from_decimal(amount, self.currency));
        self.ctx.output.kv(
            "合計",
            &self.store.total().display(self.currency),
        );
        Ok(())
    }

    async fn choose_ship_to(&mut self) -> Result<()> {
        let spinner = self.ctx.output.spinner(messages::LOADING);
        let result = self.api.ship_tos().await;
        spinner.finish_and_clear();

        match result {
            Ok(ship_tos) => self.ship_tos = ship_tos,
            Err(e) => {
                tracing::error!(error = %e, "failed to load ship-tos");
                self.ctx.output.notify(messages::LOAD_FAILED);
                return Ok(());
            }
        }
        if self.ship_tos.is_empty() {
            self.ctx.output.notify(messages::NO_SHIP_TOS);
            return Ok(());
        }

        let items: Vec<String> = self.ship_tos.iter().map(ShipTo::one_line).collect();
        let current = self.store.snapshot().ship_to_id().cloned();
        let default = current
            .and_then(|id| self.ship_tos.iter().position(|s| s.id == id))
            .unwrap_or(0);

        if let Some(index) = Select::new()
            .with_prompt(messages::SELECT_SHIP_TO)
            .items(&items)
            .default(default)
            .interact_opt()?
        {
            let ship_to = &self.ship_tos[index];
            self.store.set_ship_to(ship_to.id.clone());
            self.ctx
                .output
                .success(&format!("配送先: {}", ship_to.one_line()));
        }
        Ok(())
    }

    async fn checkout(&self) -> Result<()> {
        // Check locally first so nothing is confirmed that cannot be sent.
        if let Err(e) = self.store.order_request(self.currency) {
            self.ctx.output.notify(incomplete_message(&e));
            return Ok(());
        }

        views::render_cart(&self.ctx.output, &self.store.snapshot(), self.currency);
        let confirmed = Confirm::new()
            .with_prompt("この内容で注文しますか?")
            .default(true)
            .interact()?;
        if !confirmed {
            return Ok(());
        }

        let spinner = self.ctx.output.spinner(messages::PROCESSING);
        let result = submit_cart(&self.api, &self.store, self.currency).await;
        spinner.finish_and_clear();

        match result {
            Ok(confirmation) => {
                self.ctx.output.notify(messages::ORDER_CREATED);
                if let Some(id) = confirmation.id {
                    self.ctx.output.kv("注文ID", id.as_str());
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "checkout failed");
                self.ctx.output.notify(checkout_message(&e));
            }
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.store.is_empty() {
            self.ctx.output.info(messages::CART_EMPTY);
            return Ok(());
        }
        let confirmed = Confirm::new()
            .with_prompt("カートを空にしますか?")
            .default(false)
            .interact()?;
        if confirmed {
            self.store.clear();
            self.ctx.output.info(messages::CART_EMPTY);
        }
        Ok(())
    }
}

/// Message shown when the cart cannot be turned into an order.
fn incomplete_message(error: &CommerceError) -> &'static str {
    match error {
        CommerceError::MissingShipTo | CommerceError::MissingFarmer => messages::SELECT_SHIP_TO,
        CommerceError::EmptyCart => messages::CART_HAS_NO_ITEMS,
        _ => messages::ORDER_FAILED,
    }
}

/// Message shown for a failed checkout.
fn checkout_message(error: &CheckoutError) -> &'static str {
    match error {
        CheckoutError::Incomplete(e) => incomplete_message(e),
        CheckoutError::Remote(_) => messages::ORDER_FAILED,
    }
}
