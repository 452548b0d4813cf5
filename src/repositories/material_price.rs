use chrono::NaiveDate;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};

use crate::models::{MaterialPrice, NewMaterialPrice};
use crate::schema::material_prices::dsl::*;

pub type PgPoolConn = PooledConnection<ConnectionManager<PgConnection>>;

pub fn create(
    conn: &mut PgPoolConn,
    new_rec: &NewMaterialPrice,
) -> Result<MaterialPrice, diesel::result::Error> {
    diesel::insert_into(material_prices)
        .values(new_rec)
        .get_result(conn)
}

pub fn find_by_pk(
    conn: &mut PgPoolConn,
    name: &str,
    day: NaiveDate,
) -> Result<MaterialPrice, diesel::result::Error> {
    material_prices
        .filter(material.eq(name))
        .filter(record_date.eq(day))
        .first(conn)
}

pub fn delete_by_pk(
    conn: &mut PgPoolConn,
    name: &str,
    day: NaiveDate,
) -> Result<usize, diesel::result::Error> {
    diesel::delete(
        material_prices
            .filter(material.eq(name))
            .filter(record_date.eq(day)),
    )
    .execute(conn)
}
