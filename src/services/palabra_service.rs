use crate::db::PalabraStore;
use crate::error::ServiceError;
use crate::models::palabra::{Estadisticas, FiltrosPalabra, NuevaPalabra, Palabra, PalabraPayload};
use crate::validation::{validar_actualizacion_palabra, validar_nueva_palabra};
use chrono::Utc;
use serde_json::Value;
use std::collections::BTreeMap;

fn ahora() -> String {
    Utc::now().to_rfc3339()
}

fn texto_de(valor: &Option<Value>) -> Option<&str> {
    valor.as_ref().and_then(Value::as_str)
}

fn opcion_no_vacia(valor: &Option<Value>) -> Option<&str> {
    texto_de(valor).filter(|v| !v.is_empty())
}

/// Orquesta validador y almacenamiento. El store se inyecta al construir, de
/// modo que los tests corren contra una implementación en memoria.
pub struct PalabraService<S> {
    store: S,
}

impl<S: PalabraStore> PalabraService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lista palabras según filtros (GET /words); solo registros activos.
    pub async fn listar(&self, filtros: &FiltrosPalabra) -> Result<Vec<Palabra>, ServiceError> {
        Ok(self.store.buscar(filtros).await?)
    }

    /// Única puerta de acceso a registros existentes: una palabra ausente o
    /// con borrado lógico se trata igual, como no encontrada.
    pub async fn obtener(&self, id: i64) -> Result<Palabra, ServiceError> {
        match self.store.buscar_por_id(id).await? {
            Some(palabra) if palabra.activa => Ok(palabra),
            _ => Err(ServiceError::NoEncontrada),
        }
    }

    /// Crea una palabra nueva (POST /words): valida, completa los valores
    /// por defecto y persiste.
    pub async fn crear(&self, datos: &PalabraPayload) -> Result<Palabra, ServiceError> {
        let errores = validar_nueva_palabra(datos);
        if !errores.is_empty() {
            return Err(ServiceError::DatosInvalidos { detalles: errores });
        }

        let momento = ahora();
        let nueva = NuevaPalabra {
            texto: texto_de(&datos.texto).unwrap_or_default().trim().to_string(),
            categoria: opcion_no_vacia(&datos.categoria).unwrap_or("general").to_string(),
            dificultad: opcion_no_vacia(&datos.dificultad).unwrap_or("facil").to_string(),
            idioma: opcion_no_vacia(&datos.idioma).unwrap_or("es").to_string(),
            es_favorita: datos.es_favorita.as_ref().and_then(Value::as_bool).unwrap_or(false),
            veces_usada: 0,
            activa: true,
            creada_en: momento.clone(),
            actualizada_en: momento,
        };

        Ok(self.store.insertar(&nueva).await?)
    }

    /// Actualiza una palabra (PUT /words/{id}). Mezcla solo los campos
    /// editables sobre el registro existente; id, vecesUsada, activa y
    /// creadaEn no se pueden pisar desde el payload.
    pub async fn actualizar(
        &self,
        id: i64,
        datos: &PalabraPayload,
    ) -> Result<Palabra, ServiceError> {
        let mut palabra = self.obtener(id).await?;

        let errores = validar_actualizacion_palabra(datos);
        if !errores.is_empty() {
            return Err(ServiceError::DatosInvalidos { detalles: errores });
        }

        if let Some(texto) = texto_de(&datos.texto) {
            palabra.texto = texto.trim().to_string();
        }
        if let Some(categoria) = opcion_no_vacia(&datos.categoria) {
            palabra.categoria = categoria.to_string();
        }
        if let Some(dificultad) = opcion_no_vacia(&datos.dificultad) {
            palabra.dificultad = dificultad.to_string();
        }
        if let Some(idioma) = opcion_no_vacia(&datos.idioma) {
            palabra.idioma = idioma.to_string();
        }
        if let Some(favorita) = datos.es_favorita.as_ref().and_then(Value::as_bool) {
            palabra.es_favorita = favorita;
        }
        palabra.actualizada_en = ahora();

        Ok(self.store.actualizar(id, &palabra).await?)
    }

    /// Borrado lógico (DELETE /words/{id}), idempotente: si ya estaba
    /// inactiva se devuelve tal cual, sin escribir.
    pub async fn eliminar(&self, id: i64) -> Result<Palabra, ServiceError> {
        let Some(mut palabra) = self.store.buscar_por_id(id).await? else {
            return Err(ServiceError::NoEncontrada);
        };
        if !palabra.activa {
            return Ok(palabra);
        }

        palabra.activa = false;
        palabra.actualizada_en = ahora();
        Ok(self.store.actualizar(id, &palabra).await?)
    }

    /// Marca o desmarca favorita (POST /words/{id}/favorite).
    pub async fn marcar_favorita(
        &self,
        id: i64,
        es_favorita: bool,
    ) -> Result<Palabra, ServiceError> {
        let mut palabra = self.obtener(id).await?;
        palabra.es_favorita = es_favorita;
        palabra.actualizada_en = ahora();
        Ok(self.store.actualizar(id, &palabra).await?)
    }

    /// Incrementa el contador de uso (POST /words/{id}/use).
    pub async fn registrar_uso(&self, id: i64) -> Result<Palabra, ServiceError> {
        let mut palabra = self.obtener(id).await?;
        palabra.veces_usada += 1;
        palabra.actualizada_en = ahora();
        Ok(self.store.actualizar(id, &palabra).await?)
    }

    /// Estadísticas (GET /words/stats): agregados sobre los registros
    /// activos. El top 5 es estable: los empates conservan el orden de
    /// recuperación.
    pub async fn stats(&self) -> Result<Estadisticas, ServiceError> {
        let todas = self.store.buscar_todas(false).await?;

        let mut total_por_categoria = BTreeMap::new();
        let mut total_por_dificultad = BTreeMap::new();
        for palabra in &todas {
            *total_por_categoria.entry(palabra.categoria.clone()).or_insert(0) += 1;
            *total_por_dificultad.entry(palabra.dificultad.clone()).or_insert(0) += 1;
        }

        let total_palabras_activas = todas.len();
        let mut top_mas_usadas = todas;
        top_mas_usadas.sort_by(|a, b| b.veces_usada.cmp(&a.veces_usada));
        top_mas_usadas.truncate(5);

        Ok(Estadisticas {
            total_palabras_activas,
            total_por_categoria,
            total_por_dificultad,
            top_mas_usadas,
        })
    }
}
