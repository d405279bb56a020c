//! UI Components
//!
//! The accountant dashboard cards. Each card owns its fetch lifecycle and
//! local state; none of them coordinate with each other.

mod resumen_ingresos;
mod pagos_por_confirmar;
mod facturacion_electronica;
mod reportes_contables;
mod conciliacion_bancaria;
mod alertas_inconsistencias;

pub use resumen_ingresos::ResumenIngresos;
pub use pagos_por_confirmar::PagosPorConfirmar;
pub use facturacion_electronica::FacturacionElectronica;
pub use reportes_contables::ReportesContables;
pub use conciliacion_bancaria::ConciliacionBancaria;
pub use alertas_inconsistencias::AlertasInconsistencias;
