use super::PalabraStore;
use crate::models::palabra::{FiltrosPalabra, NuevaPalabra, Palabra};
use sqlx::{FromRow, SqlitePool};

/// Fila tal como vive en SQLite: los booleanos llegan como enteros 0/1 y se
/// convierten acá, en el borde; el dominio solo ve `bool`.
#[derive(FromRow)]
#[sqlx(rename_all = "camelCase")]
struct PalabraRow {
    id: i64,
    texto: String,
    categoria: String,
    dificultad: String,
    idioma: String,
    es_favorita: i64,
    veces_usada: i64,
    activa: i64,
    creada_en: String,
    actualizada_en: String,
}

impl From<PalabraRow> for Palabra {
    fn from(fila: PalabraRow) -> Self {
        Palabra {
            id: fila.id,
            texto: fila.texto,
            categoria: fila.categoria,
            dificultad: fila.dificultad,
            idioma: fila.idioma,
            es_favorita: fila.es_favorita != 0,
            veces_usada: fila.veces_usada,
            activa: fila.activa != 0,
            creada_en: fila.creada_en,
            actualizada_en: fila.actualizada_en,
        }
    }
}

fn filtro_presente(valor: &Option<String>) -> Option<&str> {
    valor.as_deref().filter(|v| !v.is_empty())
}

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl PalabraStore for SqliteStore {
    async fn buscar(&self, filtros: &FiltrosPalabra) -> Result<Vec<Palabra>, sqlx::Error> {
        let categoria = filtro_presente(&filtros.categoria);
        let dificultad = filtro_presente(&filtros.dificultad);
        let idioma = filtro_presente(&filtros.idioma);
        let texto = filtro_presente(&filtros.texto);

        let mut sql = String::from("SELECT * FROM palabras WHERE activa = 1");
        if categoria.is_some() {
            sql.push_str(" AND categoria = ?");
        }
        if dificultad.is_some() {
            sql.push_str(" AND dificultad = ?");
        }
        if idioma.is_some() {
            sql.push_str(" AND idioma = ?");
        }
        if filtros.solo_favoritas {
            sql.push_str(" AND esFavorita = 1");
        }
        if texto.is_some() {
            sql.push_str(" AND texto LIKE ?");
        }

        let mut query = sqlx::query_as::<_, PalabraRow>(&sql);
        if let Some(c) = categoria {
            query = query.bind(c);
        }
        if let Some(d) = dificultad {
            query = query.bind(d);
        }
        if let Some(i) = idioma {
            query = query.bind(i);
        }
        if let Some(t) = texto {
            query = query.bind(format!("%{t}%"));
        }

        let filas = query.fetch_all(&self.pool).await?;
        Ok(filas.into_iter().map(Palabra::from).collect())
    }

    async fn buscar_por_id(&self, id: i64) -> Result<Option<Palabra>, sqlx::Error> {
        let fila = sqlx::query_as::<_, PalabraRow>("SELECT * FROM palabras WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(fila.map(Palabra::from))
    }

    async fn insertar(&self, palabra: &NuevaPalabra) -> Result<Palabra, sqlx::Error> {
        let resultado = sqlx::query(
            r#"
            INSERT INTO palabras (
                texto, categoria, dificultad, idioma,
                esFavorita, vecesUsada, activa, creadaEn, actualizadaEn
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&palabra.texto)
        .bind(&palabra.categoria)
        .bind(&palabra.dificultad)
        .bind(&palabra.idioma)
        .bind(i64::from(palabra.es_favorita))
        .bind(palabra.veces_usada)
        .bind(i64::from(palabra.activa))
        .bind(&palabra.creada_en)
        .bind(&palabra.actualizada_en)
        .execute(&self.pool)
        .await?;

        self.buscar_por_id(resultado.last_insert_rowid())
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    async fn actualizar(&self, id: i64, palabra: &Palabra) -> Result<Palabra, sqlx::Error> {
        // id y creadaEn son inmutables: nunca forman parte del SET.
        sqlx::query(
            r#"
            UPDATE palabras
            SET texto = ?, categoria = ?, dificultad = ?, idioma = ?,
                esFavorita = ?, vecesUsada = ?, activa = ?, actualizadaEn = ?
            WHERE id = ?
            "#,
        )
        .bind(&palabra.texto)
        .bind(&palabra.categoria)
        .bind(&palabra.dificultad)
        .bind(&palabra.idioma)
        .bind(i64::from(palabra.es_favorita))
        .bind(palabra.veces_usada)
        .bind(i64::from(palabra.activa))
        .bind(&palabra.actualizada_en)
        .bind(id)
        .execute(&self.pool)
        .await?;

        self.buscar_por_id(id).await?.ok_or(sqlx::Error::RowNotFound)
    }

    async fn buscar_todas(&self, incluir_inactivas: bool) -> Result<Vec<Palabra>, sqlx::Error> {
        let sql = if incluir_inactivas {
            "SELECT * FROM palabras"
        } else {
            "SELECT * FROM palabras WHERE activa = 1"
        };
        let filas = sqlx::query_as::<_, PalabraRow>(sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(filas.into_iter().map(Palabra::from).collect())
    }
}
