//! Conciliación Bancaria Component
//!
//! Upload surface for the bank-movements file. The drop area highlights
//! on drag-over; nothing is submitted anywhere yet.

use leptos::prelude::*;
use web_sys::DragEvent;

#[component]
pub fn ConciliacionBancaria() -> impl IntoView {
    let (is_over, set_is_over) = signal(false);

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_over.set(false);
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);
    };

    let zona_class = move || {
        if is_over.get() {
            "zona-arrastre activa"
        } else {
            "zona-arrastre"
        }
    };

    view! {
        <div class="card">
            <h2 class="card-title">"🔄 Conciliación Bancaria"</h2>
            <p class="descripcion">
                "Carga el archivo de movimientos de tu banco para cruzarlo con los registros del sistema."
            </p>
            <div
                class=zona_class
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <p>"Arrastra y suelta tu archivo CSV o Excel aquí"</p>
                <p class="separador">"o"</p>
                <button class="btn btn-archivo">"Seleccionar Archivo"</button>
            </div>
            <div class="resultados">
                <h3>"Resultados de la última conciliación:"</h3>
                <p class="mensaje-estado">"[Aquí se mostrarán las alertas de diferencias o faltantes]"</p>
            </div>
        </div>
    }
}
