//! Facturación Electrónica Component
//!
//! Fixed summary table of recently issued electronic invoices and their
//! SII acceptance state.

use leptos::prelude::*;

use crate::format;

/// Acceptance state reported by the SII for an issued invoice.
#[derive(Clone, Copy, PartialEq)]
enum EstadoSii {
    Aceptada,
    Pendiente,
    Rechazada,
}

impl EstadoSii {
    fn label(self) -> &'static str {
        match self {
            EstadoSii::Aceptada => "Aceptada",
            EstadoSii::Pendiente => "Pendiente",
            EstadoSii::Rechazada => "Rechazada",
        }
    }

    fn badge_class(self) -> &'static str {
        match self {
            EstadoSii::Aceptada => "badge badge-verde",
            EstadoSii::Pendiente => "badge badge-amarillo",
            EstadoSii::Rechazada => "badge badge-rojo",
        }
    }
}

/// (folio, monto, estado) reference rows.
const FACTURAS: &[(u32, f64, EstadoSii)] = &[
    (1123, 150_000.0, EstadoSii::Aceptada),
    (1124, 75_000.0, EstadoSii::Aceptada),
    (1125, 23_000.0, EstadoSii::Pendiente),
    (1126, 45_000.0, EstadoSii::Rechazada),
];

#[component]
pub fn FacturacionElectronica() -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="card-title">"🧾 Resumen de Facturación Electrónica"</h2>
            <div class="tabla-scroll">
                <table>
                    <thead>
                        <tr>
                            <th>"Folio"</th>
                            <th>"Monto"</th>
                            <th>"Estado SII"</th>
                            <th class="centrado">"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {FACTURAS.iter().map(|&(folio, monto, estado)| view! {
                            <tr>
                                <td>{folio}</td>
                                <td>{format::pesos(monto)}</td>
                                <td>
                                    <span class=estado.badge_class()>{estado.label()}</span>
                                </td>
                                <td class="centrado">
                                    <button class="btn-enlace">"Ver Factura"</button>
                                </td>
                            </tr>
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
