/// URL base del backend
/// Configurada en tiempo de compilación via build.rs (.env):
/// - VITE_USE_RENDER_API=true  → VITE_RENDER_API_URL (instancia en Render)
/// - en caso contrario         → VITE_API_URL (por defecto http://localhost:3000)
pub fn backend_url() -> &'static str {
    let use_render = matches!(option_env!("VITE_USE_RENDER_API"), Some("true") | Some("1"));
    if use_render {
        if let Some(url) = option_env!("VITE_RENDER_API_URL") {
            return url;
        }
    }
    option_env!("VITE_API_URL").unwrap_or("http://localhost:3000")
}

/// Flag de contactos: habilita la sección de contactos y la validación
/// "al menos un contacto" en cliente/destino.
/// Se lee una vez al iniciar la app (ver app.rs) y se pasa por parámetro,
/// nunca se consulta desde los modelos.
pub fn contactos_habilitados() -> bool {
    matches!(option_env!("VITE_ENABLE_CONTACTOS"), Some("true") | Some("1") | None)
}

/// API externa de referencia geográfica (georef, datos.gob.ar)
pub const GEOREF_URL: &str = "https://apis.datos.gob.ar/georef/api";

/// Debounce del buscador en los selectores (ms)
pub const DEBOUNCE_BUSQUEDA_MS: u32 = 300;
/// Debounce del filtro por número en el listado de remitos (ms)
pub const DEBOUNCE_FILTRO_MS: u32 = 500;

/// Filas por página en los selectores de cliente/destino
pub const PAGINA_SELECTOR: u32 = 5;
/// Filas por página en el selector de remitos (agenda)
pub const PAGINA_SELECTOR_REMITO: u32 = 8;
/// Filas por página en el sub-formulario de mercaderías
pub const PAGINA_MERCADERIAS: u32 = 3;
/// Filas por página del listado de remitos
pub const PAGINA_LISTADO: u32 = 10;
/// Tope de filas pedido al backend cuando el filtrado por fechas es local
pub const LIMITE_FILTRO_FECHAS: u32 = 1000;

/// Intervalo del ping de keep-alive al backend (20 minutos)
pub const KEEP_ALIVE_INTERVALO_MS: u32 = 20 * 60 * 1000;
/// Timeout de aborto del ping de keep-alive (10 segundos)
pub const KEEP_ALIVE_TIMEOUT_MS: u32 = 10 * 1000;

/// Clave de sessionStorage para los filtros aplicados del listado de remitos
pub const STORAGE_KEY_FILTROS_REMITOS: &str = "remitos_filtros_aplicados";
