//! Expenses API endpoints.

use api_types::expense::{ExpenseNew, ExpenseView};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::PathRejection},
    http::StatusCode,
};
use engine::{Currency, Expense, ExpenseDraft};

use crate::{ServerError, server::ServerState};

fn map_expense(expense: Expense) -> ExpenseView {
    ExpenseView {
        id: expense.id,
        description: expense.description,
        amount: Currency::default().format(expense.amount),
    }
}

/// Bodies are read as JSON whatever their `Content-Type`.
fn parse_draft(body: &[u8]) -> Result<ExpenseDraft, ServerError> {
    let payload: ExpenseNew = serde_json::from_slice(body)?;
    Ok(ExpenseDraft::new(payload.description, payload.amount)?)
}

pub async fn create(
    State(state): State<ServerState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ExpenseView>), ServerError> {
    let draft = parse_draft(&body)?;
    let expense = state.engine.create_expense(&draft).await?;
    tracing::info!("expense {} created", expense.id);

    Ok((StatusCode::CREATED, Json(map_expense(expense))))
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<ExpenseView>>, ServerError> {
    let expenses = state
        .engine
        .list_expenses()
        .await?
        .into_iter()
        .map(map_expense)
        .collect();

    Ok(Json(expenses))
}

pub async fn get(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<ExpenseView>, ServerError> {
    let Path(id) = id?;
    let expense = state.engine.expense(id).await?;
    Ok(Json(map_expense(expense)))
}

pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
    body: Bytes,
) -> Result<Json<ExpenseView>, ServerError> {
    let Path(id) = id?;
    let draft = parse_draft(&body)?;
    let expense = state.engine.update_expense(id, &draft).await?;
    tracing::debug!("expense {id} updated");

    Ok(Json(map_expense(expense)))
}

pub async fn delete(
    State(state): State<ServerState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ServerError> {
    let Path(id) = id?;
    state.engine.delete_expense(id).await?;
    tracing::info!("expense {id} deleted");

    Ok(StatusCode::NO_CONTENT)
}
