use crate::domain::apartment::Coordinates;
use crate::errors::DataError;
use rusqlite::{params, Connection};

pub fn load_all(conn: &Connection) -> Result<Vec<(String, Coordinates)>, DataError> {
    let mut stmt = conn
        .prepare("SELECT address, latitude, longitude FROM geocode_cache")
        .map_err(|e| DataError::Db(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                Coordinates {
                    latitude: row.get(1)?,
                    longitude: row.get(2)?,
                },
            ))
        })
        .map_err(|e| DataError::Db(e.to_string()))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| DataError::Db(e.to_string()))?);
    }
    Ok(out)
}

pub fn upsert(
    conn: &Connection,
    address: &str,
    coords: Coordinates,
    now: i64,
) -> Result<(), DataError> {
    conn.execute(
        "INSERT INTO geocode_cache (address, latitude, longitude, resolved_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(address) DO UPDATE SET
             latitude = excluded.latitude,
             longitude = excluded.longitude,
             resolved_at = excluded.resolved_at",
        params![address, coords.latitude, coords.longitude, now],
    )
    .map_err(|e| DataError::Db(e.to_string()))?;
    Ok(())
}
