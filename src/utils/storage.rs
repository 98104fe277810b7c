// Persistencia de sesión (filtros del listado de remitos).
// Scope: sessionStorage — los filtros sobreviven a la navegación interna
// pero no a cerrar la pestaña.

use gloo_storage::{SessionStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};

pub fn guardar_sesion<T: Serialize>(clave: &str, valor: &T) {
    if let Err(e) = SessionStorage::set(clave, valor) {
        log::warn!("⚠️ No se pudo guardar '{}' en sessionStorage: {}", clave, e);
    }
}

pub fn cargar_sesion<T: DeserializeOwned>(clave: &str) -> Option<T> {
    SessionStorage::get(clave).ok()
}

pub fn borrar_sesion(clave: &str) {
    SessionStorage::delete(clave);
}
