/// Currency used to render expense amounts.
///
/// Expenses are stored as plain `f64` major units; the currency only decides
/// how an amount is shown to the client.
///
/// ## Minor units
///
/// `minor_units()` returns how many decimal digits are printed. USD has 2,
/// so `12` renders as `$12.00` and `15.5` as `$15.50`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Currency {
    #[default]
    Usd,
}

impl Currency {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
        }
    }

    /// Number of fraction digits used when formatting amounts.
    #[must_use]
    pub const fn minor_units(self) -> u8 {
        match self {
            Currency::Usd => 2,
        }
    }

    /// Render `amount` as a currency string, e.g. `15.5` → `"$15.50"`.
    ///
    /// Pure formatting: no validation happens here.
    #[must_use]
    pub fn format(self, amount: f64) -> String {
        format!(
            "{}{:.*}",
            self.symbol(),
            usize::from(self.minor_units()),
            amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_two_decimals() {
        assert_eq!(Currency::Usd.format(12.0), "$12.00");
        assert_eq!(Currency::Usd.format(15.5), "$15.50");
        assert_eq!(Currency::Usd.format(0.01), "$0.01");
        assert_eq!(Currency::Usd.format(1234.567), "$1234.57");
    }
}
