//! Payment details panel.
//!
//! A fixed set of payment methods, each mapping to static deposit instructions. The
//! panel keeps no state between selections.

/// The accepted payment methods. Fixed at compile time, not extensible at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    CashApp,
    Venmo,
    PayPal,
    Zelle,
}

/// Every method, in the order the storefront offers them.
pub const ALL_METHODS: [PaymentMethod; 5] = [
    PaymentMethod::Cash,
    PaymentMethod::CashApp,
    PaymentMethod::Venmo,
    PaymentMethod::PayPal,
    PaymentMethod::Zelle,
];

impl PaymentMethod {
    /// Parses a method from its display name. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "Cash" => Some(Self::Cash),
            "Cash App" => Some(Self::CashApp),
            "Venmo" => Some(Self::Venmo),
            "PayPal" => Some(Self::PayPal),
            "Zelle" => Some(Self::Zelle),
            _ => None,
        }
    }

    /// The method's display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::CashApp => "Cash App",
            Self::Venmo => "Venmo",
            Self::PayPal => "PayPal",
            Self::Zelle => "Zelle",
        }
    }

    /// Deposit instructions shown when the method is selected.
    pub fn instructions(self) -> &'static str {
        match self {
            Self::Cash => {
                "Pay 50% deposit now to secure your order. Bring the remaining 50% at pickup."
            }
            Self::CashApp => "Send 50% deposit to $BlueMoonHaven to secure your order.",
            Self::Venmo => "Send 50% deposit to @BlueMoonHaven to secure your order.",
            Self::PayPal => "Send 50% deposit to paypal.me/BlueMoonHaven to secure your order.",
            Self::Zelle => {
                "Use Zelle to send 50% deposit to the number on your invoice to secure your order."
            }
        }
    }
}

/// Resolves the panel content for a selection: instructions for a known method,
/// `None` (panel hidden) for anything else.
pub fn panel_for(selection: &str) -> Option<&'static str> {
    PaymentMethod::parse(selection).map(PaymentMethod::instructions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_method_shows_its_instructions() {
        let panel = panel_for("Venmo");
        assert_eq!(panel, Some(PaymentMethod::Venmo.instructions()));
        assert!(panel.unwrap().contains("50% deposit"));
    }

    #[test]
    fn unknown_method_hides_panel() {
        assert_eq!(panel_for("Bitcoin"), None);
        assert_eq!(panel_for(""), None);
    }

    #[test]
    fn every_method_round_trips_through_its_label() {
        for method in ALL_METHODS {
            assert_eq!(PaymentMethod::parse(method.label()), Some(method));
        }
    }
}
