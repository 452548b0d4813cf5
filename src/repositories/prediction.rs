use chrono::NaiveDate;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, PooledConnection};

use crate::models::{NewPrediction, Prediction};
use crate::schema::predictions::dsl::*;

pub type PgPoolConn = PooledConnection<ConnectionManager<PgConnection>>;

pub fn create(
    conn: &mut PgPoolConn,
    new_rec: &NewPrediction,
) -> Result<Prediction, diesel::result::Error> {
    diesel::insert_into(predictions)
        .values(new_rec)
        .get_result(conn)
}

pub fn find_by_pk(
    conn: &mut PgPoolConn,
    material_name: &str,
    model_name: &str,
    day: NaiveDate,
) -> Result<Prediction, diesel::result::Error> {
    predictions
        .filter(metal.eq(material_name))
        .filter(model.eq(model_name))
        .filter(prediction_date.eq(day))
        .first(conn)
}

pub fn delete_by_pk(
    conn: &mut PgPoolConn,
    material_name: &str,
    model_name: &str,
    day: NaiveDate,
) -> Result<usize, diesel::result::Error> {
    diesel::delete(
        predictions
            .filter(metal.eq(material_name))
            .filter(model.eq(model_name))
            .filter(prediction_date.eq(day)),
    )
    .execute(conn)
}
