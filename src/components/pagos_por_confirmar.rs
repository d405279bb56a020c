//! Pagos por Confirmar Component
//!
//! Received payments awaiting manual confirmation, rendered as a table
//! with per-row confirm/reject actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use gloo_timers::future::TimeoutFuture;

use crate::api::{self, ApiError};
use crate::fetch::FetchState;
use crate::format;
use crate::models::Pago;

const LOAD_ERROR: &str = "Error al cargar los pagos pendientes.";
const UNKNOWN_ERROR: &str = "Error desconocido";
/// How long the action-failure alert stays on screen.
const ALERT_MS: u32 = 6_000;

/// Terminal action a row can fire; a success removes the row for good.
#[derive(Clone, Copy, PartialEq)]
enum Accion {
    Confirmar,
    Rechazar,
}

impl Accion {
    /// Verb used in failure messages, matching the endpoint names.
    fn verb(self) -> &'static str {
        match self {
            Accion::Confirmar => "confirmar",
            Accion::Rechazar => "rechazar",
        }
    }
}

/// Drop the acted-upon payment; every other row stays untouched.
fn remove_pago(pagos: &mut Vec<Pago>, id: u32) {
    pagos.retain(|pago| pago.id != id);
}

/// Alert text for a failed action: names the action and the reason.
fn alerta_text(accion: Accion, err: &ApiError) -> String {
    format!(
        "Error al {} el pago: {}",
        accion.verb(),
        err.user_message(UNKNOWN_ERROR)
    )
}

#[component]
pub fn PagosPorConfirmar() -> impl IntoView {
    let (pagos, set_pagos) = signal(FetchState::<Vec<Pago>>::Loading);
    // Rows with an outstanding request, to block duplicate clicks.
    let (in_flight, set_in_flight) = signal(Vec::<u32>::new());
    let (alerta, set_alerta) = signal::<Option<String>>(None);

    // One read per mount; a failed read needs a remount to retry.
    Effect::new(move |_| {
        spawn_local(async move {
            let result = api::list_pagos_por_confirmar().await;
            if let Err(e) = &result {
                web_sys::console::error_1(&format!("[PagosPorConfirmar] Error loading pagos: {e}").into());
            }
            set_pagos.try_set(FetchState::resolved(result, LOAD_ERROR));
        });
    });

    let handle_accion = move |id: u32, accion: Accion| {
        set_in_flight.update(|ids| ids.push(id));
        spawn_local(async move {
            let result = match accion {
                Accion::Confirmar => api::confirmar_pago(id).await,
                Accion::Rechazar => api::rechazar_pago(id).await,
            };
            match result {
                Ok(()) => {
                    // Optimistic removal; the list is never re-fetched.
                    set_pagos.try_update(|state| {
                        if let FetchState::Ready(lista) = state {
                            remove_pago(lista, id);
                        }
                    });
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[PagosPorConfirmar] Error on {} for pago {id}: {err}", accion.verb()).into(),
                    );
                    set_alerta.try_set(Some(alerta_text(accion, &err)));
                    spawn_local(async move {
                        TimeoutFuture::new(ALERT_MS).await;
                        set_alerta.try_set(None);
                    });
                }
            }
            set_in_flight.try_update(|ids| ids.retain(|&pendiente| pendiente != id));
        });
    };

    view! {
        <div class="card">
            <h2 class="card-title">"🧾 Pagos por Confirmar"</h2>

            {move || alerta.get().map(|mensaje| view! {
                <div class="alerta-accion">
                    <span>{mensaje}</span>
                    <button class="alerta-cerrar" on:click=move |_| set_alerta.set(None)>
                        "×"
                    </button>
                </div>
            })}

            {move || match pagos.get() {
                FetchState::Loading => view! {
                    <p class="mensaje-estado">"Cargando pagos..."</p>
                }.into_any(),
                FetchState::Failed(mensaje) => view! {
                    <p class="mensaje-error">{mensaje}</p>
                }.into_any(),
                FetchState::Ready(lista) if lista.is_empty() => view! {
                    <p class="mensaje-estado">"No hay pagos pendientes de confirmación."</p>
                }.into_any(),
                FetchState::Ready(_) => view! {
                    <div class="tabla-scroll">
                        <table>
                            <thead>
                                <tr>
                                    <th>"N° Pedido"</th>
                                    <th>"Cliente"</th>
                                    <th>"Monto"</th>
                                    <th>"Fecha"</th>
                                    <th class="centrado">"Acciones"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || match pagos.get() {
                                        FetchState::Ready(lista) => lista,
                                        _ => Vec::new(),
                                    }
                                    key=|pago| pago.id
                                    children=move |pago: Pago| {
                                        let id = pago.id;
                                        let busy = move || in_flight.get().contains(&id);
                                        let pedido = pago.pedido_id
                                            .map(|pedido| pedido.to_string())
                                            .unwrap_or_else(|| "—".to_string());
                                        let cliente = pago.cliente_nombre
                                            .clone()
                                            .unwrap_or_else(|| "—".to_string());

                                        view! {
                                            <tr>
                                                <td>{pedido}</td>
                                                <td>{cliente}</td>
                                                <td>{format::pesos(pago.monto)}</td>
                                                <td>{format::fecha(&pago.fecha_pago)}</td>
                                                <td class="celda-acciones">
                                                    {pago.comprobante_adjunto.clone().map(|url| view! {
                                                        <a
                                                            class="btn btn-comprobante"
                                                            href=url
                                                            target="_blank"
                                                            rel="noopener noreferrer"
                                                        >
                                                            "Ver Comprobante"
                                                        </a>
                                                    })}
                                                    <button
                                                        class="btn btn-confirmar"
                                                        prop:disabled=busy
                                                        on:click=move |_| handle_accion(id, Accion::Confirmar)
                                                    >
                                                        "Confirmar"
                                                    </button>
                                                    <button
                                                        class="btn btn-rechazar"
                                                        prop:disabled=busy
                                                        on:click=move |_| handle_accion(id, Accion::Rechazar)
                                                    >
                                                        "Rechazar"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
