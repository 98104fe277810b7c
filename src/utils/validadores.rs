// ============================================================================
// VALIDADORES DE FORMULARIO
// ============================================================================
// Validaciones locales a nivel de campo: bloquean el submit y se muestran
// inline. El backend re-valida; acá solo evitamos round-trips inútiles.
// ============================================================================

use regex::Regex;
use std::sync::LazyLock;

static RE_CORREO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

static RE_TELEFONO: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?\d{10,15}$").unwrap());

/// Valida un CUIT/RUT argentino: exactamente 11 dígitos y dígito verificador
/// módulo 11 correcto.
pub fn validar_cuit(cuit: &str) -> bool {
    if cuit.len() != 11 || !cuit.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    const PESOS: [u32; 10] = [5, 4, 3, 2, 7, 6, 5, 4, 3, 2];
    let digitos: Vec<u32> = cuit.bytes().map(|b| (b - b'0') as u32).collect();
    let suma: u32 = digitos[..10].iter().zip(PESOS).map(|(d, p)| d * p).sum();
    let resto = suma % 11;
    let verificador = match resto {
        0 => 0,
        1 => return false, // CUIT con resto 1 no es asignable
        r => 11 - r,
    };
    digitos[10] == verificador
}

/// Correo electrónico con formato razonable (no RFC completo, igual que el backend)
pub fn validar_correo(correo: &str) -> bool {
    RE_CORREO.is_match(correo)
}

/// Teléfono: 10 a 15 dígitos, con `+` inicial opcional
pub fn validar_telefono(telefono: &str) -> bool {
    RE_TELEFONO.is_match(telefono)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuit_valido_pasa_el_checksum() {
        // 20-12345678-6: verificador calculado con los pesos estándar
        assert!(validar_cuit("20123456786"));
        // suma 10, resto 10, verificador 1
        assert!(validar_cuit("20000000001"));
    }

    #[test]
    fn cuit_con_verificador_incorrecto_es_rechazado() {
        assert!(!validar_cuit("20123456780"));
        assert!(!validar_cuit("20123456785"));
    }

    #[test]
    fn cuit_con_largo_o_caracteres_invalidos_es_rechazado() {
        assert!(!validar_cuit(""));
        assert!(!validar_cuit("2012345678"));
        assert!(!validar_cuit("201234567861"));
        assert!(!validar_cuit("20-12345678-6"));
        assert!(!validar_cuit("2012345678a"));
    }

    #[test]
    fn telefono_acepta_10_a_15_digitos_con_mas_opcional() {
        assert!(validar_telefono("1234567890"));
        assert!(validar_telefono("+541112345678"));
        assert!(validar_telefono("123456789012345"));
    }

    #[test]
    fn telefono_rechaza_cortos_largos_y_no_numericos() {
        assert!(!validar_telefono("123"));
        assert!(!validar_telefono("1234567890123456"));
        assert!(!validar_telefono("11-1234-5678"));
        assert!(!validar_telefono("+"));
        assert!(!validar_telefono("telefono"));
    }

    #[test]
    fn correo_basico() {
        assert!(validar_correo("deposito@acme.com.ar"));
        assert!(validar_correo("a.b+c@d.co"));
        assert!(!validar_correo("sin-arroba"));
        assert!(!validar_correo("a@b"));
        assert!(!validar_correo("@acme.com"));
    }
}
