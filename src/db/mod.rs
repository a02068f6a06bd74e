mod sqlite_store;

pub use sqlite_store::SqliteStore;

use crate::models::palabra::{FiltrosPalabra, NuevaPalabra, Palabra};
use sqlx::SqlitePool;

/// Contrato de persistencia del servicio. Sin lógica de negocio: la
/// visibilidad de los registros inactivos la decide el servicio, salvo en
/// `buscar`, que por contrato solo devuelve activos.
#[allow(async_fn_in_trait)]
pub trait PalabraStore {
    async fn buscar(&self, filtros: &FiltrosPalabra) -> Result<Vec<Palabra>, sqlx::Error>;
    async fn buscar_por_id(&self, id: i64) -> Result<Option<Palabra>, sqlx::Error>;
    async fn insertar(&self, palabra: &NuevaPalabra) -> Result<Palabra, sqlx::Error>;
    async fn actualizar(&self, id: i64, palabra: &Palabra) -> Result<Palabra, sqlx::Error>;
    async fn buscar_todas(&self, incluir_inactivas: bool) -> Result<Vec<Palabra>, sqlx::Error>;
}

/// Crea la tabla si no existe. Los booleanos se guardan como 0/1.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS palabras (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            texto TEXT NOT NULL,
            categoria TEXT DEFAULT 'general',
            dificultad TEXT DEFAULT 'facil',
            idioma TEXT DEFAULT 'es',
            esFavorita INTEGER DEFAULT 0,
            vecesUsada INTEGER DEFAULT 0,
            activa INTEGER DEFAULT 1,
            creadaEn TEXT,
            actualizadaEn TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}
