pub mod agenda;
pub mod detalle_remito;
pub mod lista_remitos;

pub use agenda::Agenda;
pub use detalle_remito::DetalleRemito;
pub use lista_remitos::ListaRemitos;
