//! Alertas de Inconsistencias Component
//!
//! Fixed list of bookkeeping inconsistencies flagged for review.

use leptos::prelude::*;

const ALERTAS: &[&str] = &[
    "Transacción #10515 sin boleta asociada.",
    "Pago duplicado detectado para pedido #10499.",
    "Venta registrada fuera de horario: Pedido #10520 a las 23:45.",
];

#[component]
pub fn AlertasInconsistencias() -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="card-title titulo-alerta">"📌 Alertas de Inconsistencias"</h2>
            <ul class="lista-alertas">
                {ALERTAS.iter().map(|alerta| view! {
                    <li>{*alerta}</li>
                }).collect_view()}
            </ul>
        </div>
    }
}
