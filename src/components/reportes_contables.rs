//! Reportes Contables Component
//!
//! Filter form for generating accounting reports. The inputs are
//! uncontrolled and the buttons are not wired to any handler yet.

use leptos::prelude::*;

const TIPOS_REPORTE: &[&str] = &[
    "Reporte de Ventas",
    "Registro de Boletas/Facturas",
    "Libro de Compras",
    "Libro de Ventas",
];

#[component]
pub fn ReportesContables() -> impl IntoView {
    view! {
        <div class="card">
            <h2 class="card-title">"🧮 Reportes Contables"</h2>
            <div class="formulario">
                <div class="campo">
                    <label for="tipo-reporte">"Tipo de Reporte"</label>
                    <select id="tipo-reporte">
                        {TIPOS_REPORTE.iter().map(|tipo| view! {
                            <option>{*tipo}</option>
                        }).collect_view()}
                    </select>
                </div>
                <div class="fila-fechas">
                    <div class="campo">
                        <label for="fecha-inicio">"Fecha Inicio"</label>
                        <input type="date" id="fecha-inicio"/>
                    </div>
                    <div class="campo">
                        <label for="fecha-fin">"Fecha Fin"</label>
                        <input type="date" id="fecha-fin"/>
                    </div>
                </div>
                <div class="fila-botones">
                    <button class="btn btn-pdf">"Generar PDF"</button>
                    <button class="btn btn-excel">"Exportar a Excel"</button>
                </div>
            </div>
        </div>
    }
}
