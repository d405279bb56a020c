//! Wire Models
//!
//! Typed response shapes for the finance endpoints, validated with serde
//! before anything enters view state.

use serde::{Deserialize, Deserializer};

/// A received payment awaiting manual confirmation.
///
/// `cliente_nombre` and `pedido_id` come from nullable serializer methods
/// on the backend, so both are optional here even though they are present
/// in the common case.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Pago {
    pub id: u32,
    #[serde(default)]
    pub cliente_nombre: Option<String>,
    #[serde(deserialize_with = "monto_flexible")]
    pub monto: f64,
    pub fecha_pago: String,
    #[serde(default)]
    pub pedido_id: Option<u32>,
    #[serde(default)]
    pub comprobante_adjunto: Option<String>,
}

/// List-endpoint envelope. With pagination enabled the backend wraps the
/// collection in `results`; without it the bare array comes back. An
/// absent or null `results` counts as the empty collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PagosResponse {
    Wrapped {
        #[serde(default)]
        results: Option<Vec<Pago>>,
    },
    Bare(Vec<Pago>),
}

impl PagosResponse {
    pub fn into_pagos(self) -> Vec<Pago> {
        match self {
            PagosResponse::Wrapped { results } => results.unwrap_or_default(),
            PagosResponse::Bare(pagos) => pagos,
        }
    }
}

/// Aggregate returned by `/finanzas/resumen-ingresos/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResumenIngresos {
    #[serde(deserialize_with = "monto_flexible")]
    pub total_ingresos_confirmados_ultimo_mes: f64,
}

/// The backend serializes `DecimalField` amounts as strings unless
/// coercion is turned off, and as numbers when it is; accept both.
fn monto_flexible<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Numero(f64),
        Texto(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Numero(n) => Ok(n),
        Raw::Texto(s) => s.trim().parse::<f64>().map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pago_decodes_full_payload() {
        let json = r#"{
            "id": 1,
            "cliente_nombre": "Ana",
            "monto": 10000,
            "fecha_pago": "2024-01-05",
            "pedido_id": 500,
            "comprobante_adjunto": null
        }"#;
        let pago: Pago = serde_json::from_str(json).unwrap();
        assert_eq!(pago.id, 1);
        assert_eq!(pago.cliente_nombre.as_deref(), Some("Ana"));
        assert_eq!(pago.monto, 10000.0);
        assert_eq!(pago.fecha_pago, "2024-01-05");
        assert_eq!(pago.pedido_id, Some(500));
        assert_eq!(pago.comprobante_adjunto, None);
    }

    #[test]
    fn monto_accepts_decimal_strings() {
        let json = r#"{"id": 7, "monto": "45990.50", "fecha_pago": "2024-02-01T10:30:00Z"}"#;
        let pago: Pago = serde_json::from_str(json).unwrap();
        assert_eq!(pago.monto, 45990.5);
        assert_eq!(pago.cliente_nombre, None);
        assert_eq!(pago.pedido_id, None);
    }

    #[test]
    fn monto_rejects_non_numeric_strings() {
        let json = r#"{"id": 7, "monto": "mucho", "fecha_pago": "2024-02-01"}"#;
        assert!(serde_json::from_str::<Pago>(json).is_err());
    }

    #[test]
    fn wrapped_results_decode() {
        let json = r#"{"count": 1, "results": [{"id": 3, "monto": 5000, "fecha_pago": "2024-03-01"}]}"#;
        let pagos = serde_json::from_str::<PagosResponse>(json).unwrap().into_pagos();
        assert_eq!(pagos.len(), 1);
        assert_eq!(pagos[0].id, 3);
    }

    #[test]
    fn bare_array_decodes() {
        let json = r#"[{"id": 3, "monto": 5000, "fecha_pago": "2024-03-01"}]"#;
        let pagos = serde_json::from_str::<PagosResponse>(json).unwrap().into_pagos();
        assert_eq!(pagos.len(), 1);
    }

    #[test]
    fn missing_or_null_results_is_empty() {
        for json in [r#"{}"#, r#"{"count": 0}"#, r#"{"results": null}"#] {
            let pagos = serde_json::from_str::<PagosResponse>(json).unwrap().into_pagos();
            assert!(pagos.is_empty(), "expected empty collection for {json}");
        }
    }

    #[test]
    fn resumen_accepts_number_and_string_totals() {
        let resumen: ResumenIngresos =
            serde_json::from_str(r#"{"total_ingresos_confirmados_ultimo_mes": 1250000}"#).unwrap();
        assert_eq!(resumen.total_ingresos_confirmados_ultimo_mes, 1_250_000.0);

        let resumen: ResumenIngresos =
            serde_json::from_str(r#"{"total_ingresos_confirmados_ultimo_mes": "1250000.00"}"#)
                .unwrap();
        assert_eq!(resumen.total_ingresos_confirmados_ultimo_mes, 1_250_000.0);
    }
}
