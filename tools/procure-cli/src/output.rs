//! Output formatting for the CLI.

use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use procure_commerce::{Currency, Money, OrderStatus};

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
    term: Term,
}

impl Output {
    /// Create a new output handler.
    pub fn new(verbose: bool, json: bool) -> Self {
        Self {
            verbose,
            json,
            term: Term::stdout(),
        }
    }

    /// Print an info message.
    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("ℹ").blue(), msg);
    }

    /// Print a success message.
    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("{} {}", style("✓").green(), msg);
    }

    /// Print a warning message.
    pub fn warn(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("⚠").yellow(), msg);
    }

    /// Print an error message.
    pub fn error(&self, msg: &str) {
        if self.json {
            self.json_line(&serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Print a debug message (only in verbose mode).
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    /// Print a header/title.
    pub fn header(&self, msg: &str) {
        if self.json {
            return;
        }
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a blocking notification the user has to see before continuing.
    pub fn notify(&self, msg: &str) {
        if self.json {
            return;
        }
        let width = console::measure_text_width(msg) + 4;
        println!("{}", style("─".repeat(width)).dim());
        println!("  {}", style(msg).bold());
        println!("{}", style("─".repeat(width)).dim());
    }

    /// Print JSON output.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    fn json_line<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string(value) {
            eprintln!("{}", json);
        }
    }

    /// Print a key-value pair.
    pub fn kv(&self, key: &str, value: &str) {
        if self.json {
            return;
        }
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print a table row. Widths are display columns, so CJK text lines up.
    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        if self.json {
            return;
        }
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| console::pad_str(col, *width, console::Alignment::Left, None).into_owned())
            .collect();
        println!("  {}", formatted.join("  ").trim_end());
    }

    /// Print a table rule matching `widths`.
    pub fn table_rule(&self, widths: &[usize]) {
        if self.json {
            return;
        }
        let total = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        println!("  {}", style("-".repeat(total)).dim());
    }

    /// Create a spinner for a network call.
    pub fn spinner(&self, msg: &str) -> ProgressBar {
        if self.json || !self.term.is_term() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            pb.set_style(spinner_style);
        }
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }

    /// Check if JSON mode is enabled.
    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Styled status label for an order status string.
pub fn status_badge(status: &str) -> String {
    let label = OrderStatus::label_for(status);
    match status.parse::<OrderStatus>() {
        Ok(OrderStatus::New) => style(label).cyan().to_string(),
        Ok(OrderStatus::Processing) => style(label).yellow().to_string(),
        Ok(OrderStatus::Shipped) => style(label).blue().to_string(),
        Ok(OrderStatus::Completed) => style(label).green().to_string(),
        Ok(OrderStatus::Canceled) => style(label).dim().to_string(),
        Err(_) => label.to_string(),
    }
}

/// Price as shown to the user (e.g., "¥1200").
pub fn price(amount: Money, currency: Currency) -> String {
    amount.display(currency)
}

/// Wire decimal price as shown to the user.
pub fn decimal_price(amount: f64, currency: Currency) -> String {
    price(Money::from_decimal(amount, currency), currency)
}
