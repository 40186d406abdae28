use serde::{Deserialize, Serialize};

pub mod expense {
    use super::*;

    /// Request body for creating or replacing an expense.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub description: String,
        /// Amount in USD, must be greater than zero.
        pub amount: f64,
    }

    /// An expense as returned by the API.
    ///
    /// `amount` is already rendered as a currency string, e.g. `"$15.50"`.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: i32,
        pub description: String,
        pub amount: String,
    }
}

pub mod error {
    use super::*;

    /// A single rejected field of a request body.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct FieldErrorView {
        pub field: String,
        pub reason: String,
    }

    /// Body of every non-2xx response.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ErrorBody {
        pub error: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        pub details: Vec<FieldErrorView>,
    }
}
