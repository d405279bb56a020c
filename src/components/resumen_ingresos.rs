//! Resumen de Ingresos Component
//!
//! Aggregate card showing confirmed income over the last month.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::fetch::FetchState;
use crate::format;
use crate::models;

const LOAD_ERROR: &str = "Error al cargar el resumen de ingresos.";

#[component]
pub fn ResumenIngresos() -> impl IntoView {
    let (resumen, set_resumen) =
        signal(FetchState::<Option<models::ResumenIngresos>>::Loading);

    // One read per mount, replaced wholesale; there is no partial update.
    Effect::new(move |_| {
        spawn_local(async move {
            let result = api::get_resumen_ingresos().await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("[ResumenIngresos] Error loading resumen: {e}").into());
            }
            set_resumen.try_set(FetchState::resolved(result, LOAD_ERROR));
        });
    });

    view! {
        <div class="card">
            <h2 class="card-title">"📊 Resumen de Ingresos"</h2>

            {move || match resumen.get() {
                FetchState::Loading => view! {
                    <p class="mensaje-estado">"Cargando resumen de ingresos..."</p>
                }.into_any(),
                FetchState::Failed(mensaje) => view! {
                    <p class="mensaje-error">{mensaje}</p>
                }.into_any(),
                FetchState::Ready(Some(datos)) => view! {
                    <p class="resumen-total">
                        "Total de ingresos confirmados (último mes): "
                        <span class="total-destacado">
                            {format::pesos(datos.total_ingresos_confirmados_ultimo_mes)}
                        </span>
                    </p>
                }.into_any(),
                FetchState::Ready(None) => view! {
                    <p class="mensaje-estado">"No hay datos de resumen de ingresos disponibles."</p>
                }.into_any(),
            }}
        </div>
    }
}
