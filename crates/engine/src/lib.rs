//! Expense engine.
//!
//! `Engine` is the only entry point to the store. Every operation issues a
//! single statement through the pooled [`DatabaseConnection`], which checks a
//! connection out for that statement and returns it whatever the outcome.
//! The engine holds no other state, so it can be shared freely between
//! requests.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, sea_query::Expr,
};

pub use currency::Currency;
pub use error::{EngineError, FieldError, ValidationErrors};
pub use transactions::{Expense, TransactionKind};
pub use validation::ExpenseDraft;

mod currency;
mod error;
mod transactions;
mod validation;

type ResultEngine<T> = Result<T, EngineError>;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    fn not_found(id: i32) -> EngineError {
        EngineError::KeyNotFound(format!("expense {id}"))
    }

    /// Insert a new expense. The store assigns the id.
    pub async fn create_expense(&self, draft: &ExpenseDraft) -> ResultEngine<Expense> {
        let model = transactions::ActiveModel {
            id: ActiveValue::NotSet,
            amount: ActiveValue::Set(draft.amount()),
            kind: ActiveValue::Set(TransactionKind::Expense.as_str().to_string()),
            description: ActiveValue::Set(draft.description().to_string()),
        }
        .insert(&self.database)
        .await?;

        tracing::debug!("created expense {}", model.id);
        Expense::try_from(model)
    }

    /// Every expense, ordered by id.
    pub async fn list_expenses(&self) -> ResultEngine<Vec<Expense>> {
        transactions::Entity::find()
            .filter(transactions::Column::Kind.eq(TransactionKind::Expense.as_str()))
            .order_by_asc(transactions::Column::Id)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Expense::try_from)
            .collect()
    }

    /// The expense with `id`.
    ///
    /// # Errors
    ///
    /// [`EngineError::KeyNotFound`] if no expense has that id.
    pub async fn expense(&self, id: i32) -> ResultEngine<Expense> {
        let model = transactions::Entity::find_by_id(id)
            .filter(transactions::Column::Kind.eq(TransactionKind::Expense.as_str()))
            .one(&self.database)
            .await?
            .ok_or_else(|| Self::not_found(id))?;
        Expense::try_from(model)
    }

    /// Overwrite description and amount of the expense with `id`.
    ///
    /// Id and kind are left untouched.
    pub async fn update_expense(&self, id: i32, draft: &ExpenseDraft) -> ResultEngine<Expense> {
        let result = transactions::Entity::update_many()
            .col_expr(
                transactions::Column::Description,
                Expr::value(draft.description()),
            )
            .col_expr(transactions::Column::Amount, Expr::value(draft.amount()))
            .filter(transactions::Column::Id.eq(id))
            .filter(transactions::Column::Kind.eq(TransactionKind::Expense.as_str()))
            .exec(&self.database)
            .await?;

        if result.rows_affected == 0 {
            return Err(Self::not_found(id));
        }

        tracing::debug!("updated expense {id}");
        Ok(Expense {
            id,
            description: draft.description().to_string(),
            amount: draft.amount(),
        })
    }

    /// Permanently remove the expense with `id`.
    pub async fn delete_expense(&self, id: i32) -> ResultEngine<()> {
        let result = transactions::Entity::delete_many()
            .filter(transactions::Column::Id.eq(id))
            .filter(transactions::Column::Kind.eq(TransactionKind::Expense.as_str()))
            .exec(&self.database)
            .await?;

        if result.rows_affected == 0 {
            return Err(Self::not_found(id));
        }

        tracing::debug!("deleted expense {id}");
        Ok(())
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: Option<DatabaseConnection>,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = Some(db);
        self
    }

    /// Construct `Engine`, checking the store is reachable.
    pub async fn build(self) -> ResultEngine<Engine> {
        let database = self.database.ok_or_else(|| {
            EngineError::Database(sea_orm::DbErr::Custom("missing database".to_string()))
        })?;
        database.ping().await?;

        Ok(Engine { database })
    }
}
