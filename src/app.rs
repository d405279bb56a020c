//! Contador Dashboard App
//!
//! Single page composing the finance cards into a two-column layout.
//! All fetch lifecycles live in the cards; the page itself has no state.

use leptos::prelude::*;

use crate::components::{
    AlertasInconsistencias, ConciliacionBancaria, FacturacionElectronica, PagosPorConfirmar,
    ReportesContables, ResumenIngresos,
};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="dashboard">
            <header class="dashboard-encabezado">
                <h1>"Dashboard del Contador"</h1>
                <p>"Bienvenido al panel de contabilidad. Aquí tienes un resumen de la actividad financiera."</p>
            </header>

            <div class="dashboard-columnas">
                // Wide main column
                <div class="columna-principal">
                    <ResumenIngresos/>
                    <PagosPorConfirmar/>
                    <FacturacionElectronica/>
                </div>

                // Narrow side column
                <div class="columna-lateral">
                    <ReportesContables/>
                    <ConciliacionBancaria/>
                    <AlertasInconsistencias/>
                </div>
            </div>
        </div>
    }
}
