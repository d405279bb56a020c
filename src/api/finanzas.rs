//! Finance Endpoints
//!
//! Bindings for the `/finanzas/` resources the dashboard consumes.

use crate::models::{Pago, PagosResponse, ResumenIngresos};

use super::{get_json, post_action, ApiError};

/// Payments waiting for manual confirmation, oldest first.
pub async fn list_pagos_por_confirmar() -> Result<Vec<Pago>, ApiError> {
    let response: PagosResponse = get_json("/finanzas/pagos-recibidos/por-confirmar/").await?;
    Ok(response.into_pagos())
}

/// Confirm one pending payment.
pub async fn confirmar_pago(id: u32) -> Result<(), ApiError> {
    post_action(&format!("/finanzas/pagos-recibidos/{id}/confirmar_pago/")).await
}

/// Reject one pending payment.
pub async fn rechazar_pago(id: u32) -> Result<(), ApiError> {
    post_action(&format!("/finanzas/pagos-recibidos/{id}/rechazar_pago/")).await
}

/// Confirmed-income aggregate for the summary card; a null body maps to
/// `None`.
pub async fn get_resumen_ingresos() -> Result<Option<ResumenIngresos>, ApiError> {
    get_json("/finanzas/resumen-ingresos/").await
}
