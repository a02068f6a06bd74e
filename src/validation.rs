use crate::models::palabra::PalabraPayload;
use serde_json::Value;

pub const CATEGORIAS_PERMITIDAS: &[&str] = &["general", "tecnica", "slang"];
pub const DIFICULTADES_PERMITIDAS: &[&str] = &["facil", "media", "dificil"];
pub const IDIOMAS_PERMITIDOS: &[&str] = &["es", "en"];

/// Reglas de texto en orden fijo: tipo, obligatorio, mínimo, máximo. Se
/// informa solo la primera violación aplicable.
fn validar_texto(texto: Option<&Value>) -> Option<String> {
    let Some(texto) = texto.and_then(Value::as_str) else {
        return Some("El texto debe ser una cadena".to_string());
    };
    let recortado = texto.trim();
    if recortado.is_empty() {
        return Some("El texto es obligatorio".to_string());
    }
    if recortado.chars().count() < 3 {
        return Some("El texto debe tener al menos 3 caracteres".to_string());
    }
    if recortado.chars().count() > 100 {
        return Some("El texto no puede superar los 100 caracteres".to_string());
    }
    None
}

/// Campos de enumeración: ausentes, nulos o vacíos no violan nada; cualquier
/// otro valor debe pertenecer al conjunto permitido.
fn validar_opcion(valor: Option<&Value>, permitidos: &[&str], invalido: &str) -> Option<String> {
    let valor = valor?;
    if valor.is_null() {
        return None;
    }
    if let Some(texto) = valor.as_str() {
        if texto.is_empty() || permitidos.contains(&texto) {
            return None;
        }
    }
    Some(format!("{invalido}. Debe ser una de: {}", permitidos.join(", ")))
}

fn validar_favorita(valor: Option<&Value>) -> Option<String> {
    match valor {
        Some(v) if !v.is_boolean() => Some("esFavorita debe ser boolean".to_string()),
        _ => None,
    }
}

/// Valida un alta completa: el texto es obligatorio, el resto es opcional.
/// Devuelve las violaciones en orden de campo; nunca falla.
pub fn validar_nueva_palabra(datos: &PalabraPayload) -> Vec<String> {
    let mut errores = Vec::new();

    errores.extend(validar_texto(datos.texto.as_ref()));
    errores.extend(validar_opcion(
        datos.categoria.as_ref(),
        CATEGORIAS_PERMITIDAS,
        "Categoría inválida",
    ));
    errores.extend(validar_opcion(
        datos.dificultad.as_ref(),
        DIFICULTADES_PERMITIDAS,
        "Dificultad inválida",
    ));
    errores.extend(validar_opcion(
        datos.idioma.as_ref(),
        IDIOMAS_PERMITIDOS,
        "Idioma inválido",
    ));
    errores.extend(validar_favorita(datos.es_favorita.as_ref()));

    errores
}

/// Valida una actualización parcial: cada campo se revisa solo si viene en el
/// payload; un payload vacío es válido.
pub fn validar_actualizacion_palabra(datos: &PalabraPayload) -> Vec<String> {
    let mut errores = Vec::new();

    if datos.texto.is_some() {
        errores.extend(validar_texto(datos.texto.as_ref()));
    }
    errores.extend(validar_opcion(
        datos.categoria.as_ref(),
        CATEGORIAS_PERMITIDAS,
        "Categoría inválida",
    ));
    errores.extend(validar_opcion(
        datos.dificultad.as_ref(),
        DIFICULTADES_PERMITIDAS,
        "Dificultad inválida",
    ));
    errores.extend(validar_opcion(
        datos.idioma.as_ref(),
        IDIOMAS_PERMITIDOS,
        "Idioma inválido",
    ));
    errores.extend(validar_favorita(datos.es_favorita.as_ref()));

    errores
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(valor: serde_json::Value) -> PalabraPayload {
        serde_json::from_value(valor).unwrap()
    }

    #[test]
    fn alta_sin_texto_devuelve_error_de_tipo() {
        let errores = validar_nueva_palabra(&payload(json!({
            "categoria": "general",
            "dificultad": "facil",
            "idioma": "es",
        })));
        assert!(errores.contains(&"El texto debe ser una cadena".to_string()));
    }

    #[test]
    fn alta_con_texto_no_textual_devuelve_error_de_tipo() {
        let errores = validar_nueva_palabra(&payload(json!({ "texto": 42 })));
        assert_eq!(errores, vec!["El texto debe ser una cadena".to_string()]);
    }

    #[test]
    fn alta_con_texto_en_blanco_es_obligatorio() {
        let errores = validar_nueva_palabra(&payload(json!({ "texto": "   " })));
        assert_eq!(errores, vec!["El texto es obligatorio".to_string()]);
    }

    #[test]
    fn alta_con_texto_corto_devuelve_error_de_minimo() {
        let errores = validar_nueva_palabra(&payload(json!({ "texto": "ho" })));
        assert!(errores.contains(&"El texto debe tener al menos 3 caracteres".to_string()));
    }

    #[test]
    fn alta_con_texto_largo_devuelve_error_de_maximo() {
        let errores = validar_nueva_palabra(&payload(json!({ "texto": "x".repeat(101) })));
        assert!(errores.contains(&"El texto no puede superar los 100 caracteres".to_string()));
    }

    #[test]
    fn alta_con_categoria_invalida() {
        let errores = validar_nueva_palabra(&payload(json!({
            "texto": "hola mundo",
            "categoria": "otra",
        })));
        assert!(errores.iter().any(|e| e.contains("Categoría inválida")));
    }

    #[test]
    fn alta_valida_minima_no_devuelve_errores() {
        let errores = validar_nueva_palabra(&payload(json!({ "texto": "hola mundo" })));
        assert!(errores.is_empty());
    }

    #[test]
    fn alta_valida_completa_no_devuelve_errores() {
        let errores = validar_nueva_palabra(&payload(json!({
            "texto": "hola mundo",
            "categoria": "general",
            "dificultad": "facil",
            "idioma": "es",
            "esFavorita": true,
        })));
        assert!(errores.is_empty());
    }

    #[test]
    fn alta_devuelve_violaciones_en_orden_de_campo() {
        let errores = validar_nueva_palabra(&payload(json!({
            "texto": "ho",
            "categoria": "otra",
            "idioma": "fr",
            "esFavorita": "si",
        })));
        assert_eq!(
            errores,
            vec![
                "El texto debe tener al menos 3 caracteres".to_string(),
                "Categoría inválida. Debe ser una de: general, tecnica, slang".to_string(),
                "Idioma inválido. Debe ser una de: es, en".to_string(),
                "esFavorita debe ser boolean".to_string(),
            ]
        );
    }

    #[test]
    fn alta_rechaza_favorita_nula() {
        let errores = validar_nueva_palabra(&payload(json!({
            "texto": "hola mundo",
            "esFavorita": null,
        })));
        assert_eq!(errores, vec!["esFavorita debe ser boolean".to_string()]);
    }

    #[test]
    fn alta_acepta_enums_nulos() {
        let errores = validar_nueva_palabra(&payload(json!({
            "texto": "hola mundo",
            "categoria": null,
            "dificultad": null,
            "idioma": null,
        })));
        assert!(errores.is_empty());
    }

    #[test]
    fn actualizacion_vacia_es_valida() {
        let errores = validar_actualizacion_palabra(&PalabraPayload::default());
        assert!(errores.is_empty());
    }

    #[test]
    fn actualizacion_no_obliga_a_enviar_todos_los_campos() {
        let errores = validar_actualizacion_palabra(&payload(json!({ "texto": "nuevo texto" })));
        assert!(errores.is_empty());
    }

    #[test]
    fn actualizacion_valida_el_texto_si_viene() {
        let errores = validar_actualizacion_palabra(&payload(json!({ "texto": "a" })));
        assert!(errores.contains(&"El texto debe tener al menos 3 caracteres".to_string()));
    }

    #[test]
    fn actualizacion_valida_dificultad_invalida() {
        let errores = validar_actualizacion_palabra(&payload(json!({
            "dificultad": "super dificil",
        })));
        assert!(errores.iter().any(|e| e.contains("Dificultad inválida")));
    }

    #[test]
    fn actualizacion_rechaza_texto_nulo() {
        let errores = validar_actualizacion_palabra(&payload(json!({ "texto": null })));
        assert_eq!(errores, vec!["El texto debe ser una cadena".to_string()]);
    }

    #[test]
    fn actualizacion_rechaza_favorita_no_booleana() {
        let errores = validar_actualizacion_palabra(&payload(json!({ "esFavorita": "si" })));
        assert!(errores.contains(&"esFavorita debe ser boolean".to_string()));
    }
}
