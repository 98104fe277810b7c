// ============================================================================
// KEEP-ALIVE DEL BACKEND
// ============================================================================
// La instancia gratuita de Render se duerme sin tráfico: un ping periódico a
// /api/health la mantiene despierta. Es un objeto construido y poseído por el
// componente raíz (iniciar en mount, detener en unmount), NO un singleton.
// ============================================================================

use gloo_net::http::Request;
use gloo_timers::callback::{Interval, Timeout};
use web_sys::AbortController;

use crate::utils::constants::{backend_url, KEEP_ALIVE_INTERVALO_MS, KEEP_ALIVE_TIMEOUT_MS};

pub struct KeepAliveService {
    url: String,
    intervalo: Option<Interval>,
}

impl KeepAliveService {
    pub fn new() -> Self {
        Self {
            url: format!("{}/api/health", backend_url()),
            intervalo: None,
        }
    }

    /// Registra el ping periódico. Llamadas repetidas se ignoran.
    pub fn iniciar(&mut self) {
        if self.intervalo.is_some() {
            log::warn!("⚠️ KeepAliveService: iniciar ya fue llamado, ignorando");
            return;
        }
        log::info!("💓 Keep-alive iniciado (cada {} min)", KEEP_ALIVE_INTERVALO_MS / 60_000);
        let url = self.url.clone();
        self.intervalo = Some(Interval::new(KEEP_ALIVE_INTERVALO_MS, move || {
            ping(url.clone());
        }));
    }

    pub fn detener(&mut self) {
        if self.intervalo.take().is_some() {
            log::info!("💤 Keep-alive detenido");
        }
    }

    pub fn activo(&self) -> bool {
        self.intervalo.is_some()
    }
}

impl Default for KeepAliveService {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for KeepAliveService {
    fn drop(&mut self) {
        self.detener();
    }
}

/// Ping con aborto explícito a los 10 segundos: si la instancia está fría no
/// queremos un request colgado hasta el timeout del transporte.
fn ping(url: String) {
    let controller = match AbortController::new() {
        Ok(c) => c,
        Err(_) => return,
    };
    let signal = controller.signal();

    let abortar = Timeout::new(KEEP_ALIVE_TIMEOUT_MS, move || {
        controller.abort();
    });

    wasm_bindgen_futures::spawn_local(async move {
        match Request::get(&url).abort_signal(Some(&signal)).send().await {
            Ok(respuesta) if respuesta.ok() => {
                log::debug!("💓 Keep-alive OK");
            }
            Ok(respuesta) => {
                log::warn!("⚠️ Keep-alive respondió HTTP {}", respuesta.status());
            }
            Err(e) => {
                log::warn!("⚠️ Keep-alive falló: {}", e);
            }
        }
        // el ping terminó antes del límite: cancelar el aborto pendiente
        drop(abortar);
    });
}
