use std::collections::{HashMap, HashSet};

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use thiserror::Error;

use crate::utils::percent::rounded_percentage;

#[derive(Debug, Error)]
pub enum PriceCompareError {
    #[error("end date {end} must be on or after start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("at least one model must be selected")]
    NoModelsSelected,
}

#[derive(Debug, Clone)]
pub struct FilterCriteria {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub material: String,
    pub models: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ActualPrice {
    pub material: String,
    pub date: NaiveDate,
    pub price_actual: BigDecimal,
}

#[derive(Debug, Clone)]
pub struct PredictedPrice {
    pub material: String,
    pub model: String,
    pub date: NaiveDate,
    pub price_predicted: BigDecimal,
}

/// One joined (actual, prediction) pairing with the derived metrics.
/// `price_difference_percentage` is `None` when the actual price is zero.
#[derive(Debug, Clone)]
pub struct PriceComparison {
    pub date: NaiveDate,
    pub material: String,
    pub model: String,
    pub price_actual: BigDecimal,
    pub price_predicted: BigDecimal,
    pub price_difference: BigDecimal,
    pub price_difference_percentage: Option<i64>,
}

#[derive(Debug, Clone)]
pub struct PriceComparisonResult {
    pub actual: Vec<ActualPrice>,
    pub predicted: Vec<PredictedPrice>,
    pub differences: Vec<PriceComparison>,
}

/// Filter both datasets down to the selected material, date window and
/// model set. Date bounds are inclusive on both ends.
pub fn filter_prices(
    actuals: Vec<ActualPrice>,
    predictions: Vec<PredictedPrice>,
    criteria: &FilterCriteria,
) -> Result<(Vec<ActualPrice>, Vec<PredictedPrice>), PriceCompareError> {
    if criteria.start_date > criteria.end_date {
        return Err(PriceCompareError::InvalidDateRange {
            start: criteria.start_date,
            end: criteria.end_date,
        });
    }
    if criteria.models.is_empty() {
        return Err(PriceCompareError::NoModelsSelected);
    }

    let in_range = |date: NaiveDate| date >= criteria.start_date && date <= criteria.end_date;
    let selected_models: HashSet<&str> = criteria.models.iter().map(String::as_str).collect();

    let actual: Vec<ActualPrice> = actuals
        .into_iter()
        .filter(|row| in_range(row.date) && row.material == criteria.material)
        .collect();

    let predicted: Vec<PredictedPrice> = predictions
        .into_iter()
        .filter(|row| {
            in_range(row.date)
                && row.material == criteria.material
                && selected_models.contains(row.model.as_str())
        })
        .collect();

    Ok((actual, predicted))
}

/// Inner join on (date, material). Every matching prediction produces its
/// own output row, so one actual row paired with N model predictions yields
/// N comparisons. Unmatched rows on either side are dropped.
pub fn join_price_differences(
    actual: &[ActualPrice],
    predicted: &[PredictedPrice],
) -> Vec<PriceComparison> {
    // index predictions by join key, preserving input order per key
    let mut by_key: HashMap<(NaiveDate, &str), Vec<&PredictedPrice>> = HashMap::new();
    for row in predicted {
        by_key
            .entry((row.date, row.material.as_str()))
            .or_default()
            .push(row);
    }

    let mut out = Vec::new();
    for left in actual {
        let Some(matches) = by_key.get(&(left.date, left.material.as_str())) else {
            continue;
        };
        for right in matches {
            let difference = &left.price_actual - &right.price_predicted;
            let percentage = rounded_percentage(&difference, &left.price_actual);
            out.push(PriceComparison {
                date: left.date,
                material: left.material.clone(),
                model: right.model.clone(),
                price_actual: left.price_actual.clone(),
                price_predicted: right.price_predicted.clone(),
                price_difference: difference,
                price_difference_percentage: percentage,
            });
        }
    }
    out
}

/// Run the whole pipeline: filter both sides, then join and derive metrics.
/// Empty outputs are valid results, not errors.
pub fn compare_prices(
    actuals: Vec<ActualPrice>,
    predictions: Vec<PredictedPrice>,
    criteria: &FilterCriteria,
) -> Result<PriceComparisonResult, PriceCompareError> {
    let (actual, predicted) = filter_prices(actuals, predictions, criteria)?;
    let differences = join_price_differences(&actual, &predicted);
    Ok(PriceComparisonResult {
        actual,
        predicted,
        differences,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    fn actual(material: &str, day: &str, price: &str) -> ActualPrice {
        ActualPrice {
            material: material.to_string(),
            date: date(day),
            price_actual: dec(price),
        }
    }

    fn predicted(material: &str, model: &str, day: &str, price: &str) -> PredictedPrice {
        PredictedPrice {
            material: material.to_string(),
            model: model.to_string(),
            date: date(day),
            price_predicted: dec(price),
        }
    }

    fn criteria(start: &str, end: &str, material: &str, models: &[&str]) -> FilterCriteria {
        FilterCriteria {
            start_date: date(start),
            end_date: date(end),
            material: material.to_string(),
            models: models.iter().map(|m| m.to_string()).collect(),
        }
    }

    #[test]
    fn filter_keeps_rows_inside_inclusive_date_window_for_selected_material() {
        let actuals = vec![
            actual("copper", "2023-12-31", "1"),
            actual("copper", "2024-01-01", "2"),
            actual("copper", "2024-01-15", "3"),
            actual("copper", "2024-01-31", "4"),
            actual("copper", "2024-02-01", "5"),
            actual("zinc", "2024-01-15", "6"),
        ];
        let crit = criteria("2024-01-01", "2024-01-31", "copper", &["A"]);

        let (filtered, _) = filter_prices(actuals, vec![], &crit).unwrap();

        let days: Vec<NaiveDate> = filtered.iter().map(|r| r.date).collect();
        assert_eq!(
            days,
            vec![date("2024-01-01"), date("2024-01-15"), date("2024-01-31")]
        );
        assert!(filtered.iter().all(|r| r.material == "copper"));
    }

    #[test]
    fn filter_drops_predictions_for_unselected_models() {
        let predictions = vec![
            predicted("copper", "A", "2024-01-01", "10"),
            predicted("copper", "B", "2024-01-01", "11"),
            predicted("copper", "C", "2024-01-01", "12"),
        ];
        let crit = criteria("2024-01-01", "2024-01-31", "copper", &["A", "C"]);

        let (_, filtered) = filter_prices(vec![], predictions, &crit).unwrap();

        let models: Vec<&str> = filtered.iter().map(|r| r.model.as_str()).collect();
        assert_eq!(models, vec!["A", "C"]);
    }

    #[test]
    fn filter_rejects_inverted_date_range() {
        let actuals = vec![actual("copper", "2024-03-01", "100")];
        let crit = criteria("2024-06-01", "2024-01-01", "copper", &["A"]);

        let err = filter_prices(actuals, vec![], &crit).unwrap_err();
        assert!(matches!(err, PriceCompareError::InvalidDateRange { .. }));
    }

    #[test]
    fn filter_rejects_empty_model_selection() {
        let crit = criteria("2024-01-01", "2024-01-31", "copper", &[]);
        let err = filter_prices(vec![], vec![], &crit).unwrap_err();
        assert!(matches!(err, PriceCompareError::NoModelsSelected));
    }

    #[test]
    fn join_produces_one_row_per_matching_prediction() {
        let actual_rows = vec![
            actual("copper", "2024-01-01", "100"),
            actual("copper", "2024-01-02", "100"),
        ];
        let predicted_rows = vec![
            predicted("copper", "A", "2024-01-01", "90"),
            predicted("copper", "B", "2024-01-01", "80"),
            predicted("copper", "A", "2024-01-03", "70"),
        ];

        let joined = join_price_differences(&actual_rows, &predicted_rows);

        // 2024-01-01 matches twice, 2024-01-02 not at all, 2024-01-03 has
        // no actual side
        assert_eq!(joined.len(), 2);
        assert!(joined.iter().all(|r| r.date == date("2024-01-01")));
    }

    #[test]
    fn join_computes_difference_and_rounded_percentage() {
        let actual_rows = vec![actual("copper", "2024-01-01", "102.50")];
        let predicted_rows = vec![predicted("copper", "A", "2024-01-01", "99.10")];

        let joined = join_price_differences(&actual_rows, &predicted_rows);

        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].price_difference, dec("3.40"));
        // 3.40 / 102.50 * 100 = 3.317... -> 3
        assert_eq!(joined[0].price_difference_percentage, Some(3));
    }

    #[test]
    fn join_emits_null_percentage_for_zero_actual_price() {
        let actual_rows = vec![actual("copper", "2024-01-01", "0")];
        let predicted_rows = vec![predicted("copper", "A", "2024-01-01", "5")];

        let joined = join_price_differences(&actual_rows, &predicted_rows);

        assert_eq!(joined.len(), 1);
        assert_eq!(joined[0].price_difference, dec("-5"));
        assert_eq!(joined[0].price_difference_percentage, None);
    }

    #[test]
    fn join_key_requires_material_match() {
        let actual_rows = vec![actual("copper", "2024-01-01", "100")];
        let predicted_rows = vec![predicted("zinc", "A", "2024-01-01", "90")];

        let joined = join_price_differences(&actual_rows, &predicted_rows);
        assert!(joined.is_empty());
    }

    #[test]
    fn two_models_on_one_date_produce_two_comparisons() {
        let actuals = vec![actual("copper", "2024-01-01", "100")];
        let predictions = vec![
            predicted("copper", "A", "2024-01-01", "90"),
            predicted("copper", "B", "2024-01-01", "80"),
        ];
        let crit = criteria("2024-01-01", "2024-01-01", "copper", &["A", "B"]);

        let result = compare_prices(actuals, predictions, &crit).unwrap();

        assert_eq!(result.differences.len(), 2);

        let a = &result.differences[0];
        assert_eq!(a.model, "A");
        assert_eq!(a.price_difference, dec("10"));
        assert_eq!(a.price_difference_percentage, Some(10));

        let b = &result.differences[1];
        assert_eq!(b.model, "B");
        assert_eq!(b.price_difference, dec("20"));
        assert_eq!(b.price_difference_percentage, Some(20));
    }

    #[test]
    fn unmatched_material_yields_empty_collections_not_errors() {
        let actuals = vec![actual("copper", "2024-01-01", "100")];
        let predictions = vec![predicted("copper", "A", "2024-01-01", "90")];
        let crit = criteria("2024-01-01", "2024-01-31", "gold", &["A"]);

        let result = compare_prices(actuals, predictions, &crit).unwrap();

        assert!(result.actual.is_empty());
        assert!(result.predicted.is_empty());
        assert!(result.differences.is_empty());
    }

    #[test]
    fn prediction_outside_date_window_is_excluded_before_join() {
        let actuals = vec![
            actual("copper", "2024-01-01", "100"),
            actual("copper", "2024-02-01", "110"),
        ];
        let predictions = vec![
            predicted("copper", "A", "2024-01-01", "90"),
            predicted("copper", "A", "2024-02-01", "95"),
        ];
        let crit = criteria("2024-01-01", "2024-01-31", "copper", &["A"]);

        let result = compare_prices(actuals, predictions, &crit).unwrap();

        assert_eq!(result.differences.len(), 1);
        assert_eq!(result.differences[0].date, date("2024-01-01"));
    }
}
