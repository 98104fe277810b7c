use serde::{Deserialize, Serialize};

/// Forma normalizada de toda respuesta paginada del backend:
/// `{data, totalItems, totalPages, currentPage}`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RespuestaPaginada<T> {
    pub data: Vec<T>,
    pub total_items: u32,
    pub total_pages: u32,
    pub current_page: u32,
}

impl<T> RespuestaPaginada<T> {
    /// Forma vacía/por defecto usada como fallback cuando un fetch falla.
    /// Nunca propagamos el error al componente que renderiza la lista.
    pub fn vacia() -> Self {
        Self {
            data: Vec::new(),
            total_items: 0,
            total_pages: 1,
            current_page: 1,
        }
    }
}

impl<T> Default for RespuestaPaginada<T> {
    fn default() -> Self {
        Self::vacia()
    }
}

/// Clampea un número de página al rango válido `[1, max(1, total_pages)]`.
/// Pedir una página fuera de rango nunca es un error: se ajusta en silencio.
pub fn clamp_pagina(pagina: u32, total_pages: u32) -> u32 {
    pagina.clamp(1, total_pages.max(1))
}

/// Cantidad de páginas para `total` filas con `limite` filas por página
/// (mínimo 1, incluso sin resultados).
pub fn total_paginas(total: u32, limite: u32) -> u32 {
    if limite == 0 {
        return 1;
    }
    total.div_ceil(limite).max(1)
}

/// Pagina una colección ya filtrada en memoria. Se usa en los caminos donde el
/// filtrado es local (rango de fechas del listado, selector de remitos de la
/// agenda): el backend no ve estas páginas.
pub fn paginar_local<T: Clone>(filas: &[T], pagina: u32, limite: u32) -> RespuestaPaginada<T> {
    let total_items = filas.len() as u32;
    let total_pages = total_paginas(total_items, limite);
    let pagina = clamp_pagina(pagina, total_pages);
    let desde = ((pagina - 1) * limite) as usize;
    let hasta = (desde + limite as usize).min(filas.len());
    let data = if desde < filas.len() {
        filas[desde..hasta].to_vec()
    } else {
        Vec::new()
    };
    RespuestaPaginada {
        data,
        total_items,
        total_pages,
        current_page: pagina,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_siempre_dentro_de_rango() {
        assert_eq!(clamp_pagina(0, 10), 1);
        assert_eq!(clamp_pagina(5, 10), 5);
        assert_eq!(clamp_pagina(50, 10), 10);
        // sin resultados: total_pages 0 se trata como 1
        assert_eq!(clamp_pagina(3, 0), 1);
    }

    #[test]
    fn total_paginas_redondea_hacia_arriba() {
        assert_eq!(total_paginas(0, 5), 1);
        assert_eq!(total_paginas(5, 5), 1);
        assert_eq!(total_paginas(6, 5), 2);
        assert_eq!(total_paginas(1500, 8), 188);
    }

    #[test]
    fn paginar_local_corta_la_pagina_pedida() {
        let filas: Vec<u32> = (1..=13).collect();
        let r = paginar_local(&filas, 2, 5);
        assert_eq!(r.data, vec![6, 7, 8, 9, 10]);
        assert_eq!(r.total_items, 13);
        assert_eq!(r.total_pages, 3);
        assert_eq!(r.current_page, 2);
    }

    #[test]
    fn paginar_local_clampea_paginas_fuera_de_rango() {
        let filas: Vec<u32> = (1..=7).collect();
        let r = paginar_local(&filas, 9, 5);
        assert_eq!(r.current_page, 2);
        assert_eq!(r.data, vec![6, 7]);
    }

    #[test]
    fn paginar_local_vacio_mantiene_la_forma_por_defecto() {
        let filas: Vec<u32> = Vec::new();
        let r = paginar_local(&filas, 1, 5);
        assert!(r.data.is_empty());
        assert_eq!(r.total_items, 0);
        assert_eq!(r.total_pages, 1);
        assert_eq!(r.current_page, 1);
    }
}
