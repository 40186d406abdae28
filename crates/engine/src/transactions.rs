//! Transaction rows and the expense view over them.
//!
//! The `transactions` table stores both incomes and expenses, told apart by
//! the `type` column. Only expenses are reachable through the engine.

use sea_orm::entity::prelude::*;

use crate::{EngineError, ResultEngine};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(EngineError::Database(DbErr::Type(format!(
                "invalid transaction kind: {other}"
            )))),
        }
    }
}

/// A persisted expense.
#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    pub id: i32,
    pub description: String,
    pub amount: f64,
}

/// Row of the `transactions` table.
///
/// The table also carries nullable `user_id`, `category_id` and `date`
/// columns; nothing reads or writes them, so they are not mapped here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub amount: f64,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Expense {
    type Error = EngineError;

    fn try_from(model: Model) -> ResultEngine<Self> {
        match TransactionKind::try_from(model.kind.as_str())? {
            TransactionKind::Expense => Ok(Self {
                id: model.id,
                description: model.description,
                amount: model.amount,
            }),
            TransactionKind::Income => Err(EngineError::KeyNotFound(format!(
                "expense {}",
                model.id
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(kind: &str) -> Model {
        Model {
            id: 3,
            amount: 9.99,
            kind: kind.to_string(),
            description: "Coffee".to_string(),
        }
    }

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [TransactionKind::Income, TransactionKind::Expense] {
            assert_eq!(TransactionKind::try_from(kind.as_str()).unwrap(), kind);
        }
        assert!(TransactionKind::try_from("refund").is_err());
    }

    #[test]
    fn expense_row_maps_to_expense() {
        let expense = Expense::try_from(model("expense")).unwrap();
        assert_eq!(
            expense,
            Expense {
                id: 3,
                description: "Coffee".to_string(),
                amount: 9.99,
            }
        );
    }

    #[test]
    fn income_row_is_not_an_expense() {
        assert_eq!(
            Expense::try_from(model("income")),
            Err(EngineError::KeyNotFound("expense 3".to_string()))
        );
    }
}
