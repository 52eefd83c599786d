use std::fmt;

/// Fixed conversion rate from the nightly price into
/// Central African CFA francs (display only).
pub const XAF_PER_USD: u64 = 600;

/// Rendered when a price does not contain any digits.
pub const XAF_UNKNOWN: &str = "XAF --";

// fr-FR grouping uses a narrow no-break space,
// the currency symbol is separated by a no-break space.
const GROUP_SEPARATOR: char = '\u{202f}';
const SYMBOL_SEPARATOR: char = '\u{a0}';
const XAF_SYMBOL: &str = "FCFA";

/// A nightly price as it is displayed, e.g. `$300`.
///
/// The string is kept as is, the numeric amount is
/// reinterpreted on demand by stripping all non-digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Price(String);

impl Price {
    pub fn from_dollars(amount: u64) -> Self {
        Self(format!("${amount}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn amount(&self) -> Option<u64> {
        let digits: String = self.0.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        digits.parse().ok()
    }

    pub fn to_xaf(&self) -> Option<u64> {
        self.amount()?.checked_mul(XAF_PER_USD)
    }

    /// The secondary currency display, e.g. `180 000 FCFA`.
    pub fn xaf_display(&self) -> String {
        self.to_xaf()
            .map(format_xaf)
            .unwrap_or_else(|| XAF_UNKNOWN.to_string())
    }
}

impl From<String> for Price {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<&str> for Price {
    fn from(from: &str) -> Self {
        Self(from.to_owned())
    }
}

impl From<Price> for String {
    fn from(from: Price) -> Self {
        from.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Format an amount of CFA francs like `fr-FR` does
/// (no fractional digits).
pub fn format_xaf(amount: u64) -> String {
    let digits = amount.to_string();
    let len = digits.len();
    let mut formatted = String::with_capacity(len + len / 3 * 3 + XAF_SYMBOL.len() + 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            formatted.push(GROUP_SEPARATOR);
        }
        formatted.push(c);
    }
    formatted.push(SYMBOL_SEPARATOR);
    formatted.push_str(XAF_SYMBOL);
    formatted
}

/// Average of all prices converted into XAF.
///
/// Prices without digits count as zero.
/// Returns `None` if there are no prices at all.
pub fn average_xaf<'a, I>(prices: I) -> Option<u64>
where
    I: IntoIterator<Item = &'a Price>,
{
    let (count, total) = prices.into_iter().fold((0u64, 0u128), |(count, total), price| {
        let xaf = price.to_xaf().unwrap_or_default();
        (count + 1, total + u128::from(xaf))
    });
    if count == 0 {
        return None;
    }
    let count = u128::from(count);
    let avg = (total + count / 2) / count;
    u64::try_from(avg).ok()
}
