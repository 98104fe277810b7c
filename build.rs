use std::env;
use std::fs;
use std::path::Path;

// Claves que lee src/utils/constants.rs via option_env!. Cualquier otra
// entrada del .env se ignora.
const CLAVES: [&str; 4] = [
    "VITE_API_URL",
    "VITE_RENDER_API_URL",
    "VITE_USE_RENDER_API",
    "VITE_ENABLE_CONTACTOS",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    println!("cargo:rerun-if-changed=.env.example");

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!(
            "cargo:warning=Sin .env: se compilan los valores por defecto. \
             Copiar .env.example a .env para configurar {}.",
            CLAVES.join(", ")
        );
        return;
    }

    let Ok(contenido) = fs::read_to_string(env_file) else {
        println!("cargo:warning=No se pudo leer .env");
        return;
    };

    for linea in contenido.lines() {
        let linea = linea.trim();
        if linea.is_empty() || linea.starts_with('#') {
            continue;
        }
        let Some((clave, valor)) = linea.split_once('=') else {
            continue;
        };
        let clave = clave.trim();
        if !CLAVES.contains(&clave) {
            continue;
        }
        // el entorno del shell tiene prioridad sobre el .env
        if env::var(clave).is_err() {
            println!("cargo:rustc-env={}={}", clave, valor.trim());
        }
    }
}
