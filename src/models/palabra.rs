use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Registro persistido. Los nombres JSON (camelCase, en español) son el
/// contrato con los clientes existentes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palabra {
    pub id: i64,
    pub texto: String,
    pub categoria: String,
    pub dificultad: String,
    pub idioma: String,
    pub es_favorita: bool,
    pub veces_usada: i64,
    pub activa: bool,
    pub creada_en: String,
    pub actualizada_en: String,
}

/// Registro listo para insertar, todavía sin id asignado.
#[derive(Debug, Clone)]
pub struct NuevaPalabra {
    pub texto: String,
    pub categoria: String,
    pub dificultad: String,
    pub idioma: String,
    pub es_favorita: bool,
    pub veces_usada: i64,
    pub activa: bool,
    pub creada_en: String,
    pub actualizada_en: String,
}

/// Cuerpo crudo de creación/actualización. Los campos quedan como JSON sin
/// tipar para que sea el validador, y no el deserializador, quien informe los
/// errores de tipo con los mensajes exactos del contrato.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PalabraPayload {
    #[serde(default, deserialize_with = "algun_valor")]
    pub texto: Option<Value>,
    #[serde(default, deserialize_with = "algun_valor")]
    pub categoria: Option<Value>,
    #[serde(default, deserialize_with = "algun_valor")]
    pub dificultad: Option<Value>,
    #[serde(default, deserialize_with = "algun_valor")]
    pub idioma: Option<Value>,
    #[serde(default, deserialize_with = "algun_valor")]
    pub es_favorita: Option<Value>,
}

/// Un campo enviado como `null` explícito cuenta como presente: queda como
/// `Some(Value::Null)` para que el validador lo vea, en vez de perderse en
/// `None` como haría `Option<Value>` a secas.
fn algun_valor<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Filtros opcionales del listado; los valores vacíos se ignoran.
#[derive(Debug, Clone, Default)]
pub struct FiltrosPalabra {
    pub texto: Option<String>,
    pub categoria: Option<String>,
    pub dificultad: Option<String>,
    pub idioma: Option<String>,
    pub solo_favoritas: bool,
}

/// Agregados sobre las palabras activas.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Estadisticas {
    pub total_palabras_activas: usize,
    pub total_por_categoria: BTreeMap<String, usize>,
    pub total_por_dificultad: BTreeMap<String, usize>,
    pub top_mas_usadas: Vec<Palabra>,
}
