// API externa de referencia geográfica (datos.gob.ar). Solo lectura; si el
// servicio no responde, el formulario de destino degrada a texto libre.

use super::api_client::{ApiClient, ApiError};
use crate::models::{Localidad, Provincia, RespuestaLocalidades, RespuestaProvincias};
use crate::utils::constants::GEOREF_URL;

fn url_provincias() -> String {
    format!("{}/provincias?campos=id,nombre&max=100", GEOREF_URL)
}

fn url_localidades(provincia_id: &str) -> String {
    format!(
        "{}/localidades?provincia={}&campos=id,nombre&max=1000",
        GEOREF_URL, provincia_id
    )
}

pub async fn obtener_provincias(api: &ApiClient) -> Result<Vec<Provincia>, ApiError> {
    let respuesta: RespuestaProvincias = api.get_json_url(&url_provincias(), "Provincia").await?;
    let mut provincias = respuesta.provincias;
    provincias.sort_by(|a, b| a.nombre.cmp(&b.nombre));
    Ok(provincias)
}

pub async fn obtener_localidades(
    api: &ApiClient,
    provincia_id: &str,
) -> Result<Vec<Localidad>, ApiError> {
    let respuesta: RespuestaLocalidades = api
        .get_json_url(&url_localidades(provincia_id), "Localidad")
        .await?;
    let mut localidades = respuesta.localidades;
    localidades.sort_by(|a, b| a.nombre.cmp(&b.nombre));
    Ok(localidades)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn las_urls_de_georef_piden_solo_id_y_nombre() {
        assert_eq!(
            url_provincias(),
            "https://apis.datos.gob.ar/georef/api/provincias?campos=id,nombre&max=100"
        );
        assert_eq!(
            url_localidades("82"),
            "https://apis.datos.gob.ar/georef/api/localidades?provincia=82&campos=id,nombre&max=1000"
        );
    }

    #[test]
    fn la_respuesta_de_georef_se_deserializa_ignorando_el_resto() {
        let json = r#"{"provincias":[{"id":"82","nombre":"Santa Fe","centroide":{"lat":-30.7}}],"cantidad":1}"#;
        let r: RespuestaProvincias = serde_json::from_str(json).unwrap();
        assert_eq!(r.provincias.len(), 1);
        assert_eq!(r.provincias[0].nombre, "Santa Fe");
    }
}
