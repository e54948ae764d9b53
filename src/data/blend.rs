use crate::data::model::{BlendResult, FlavorProfile, SpiceTable};
use crate::data::selection::SelectionSet;

// ---------------------------------------------------------------------------
// Blend calculation – average the picked rows into one profile
// ---------------------------------------------------------------------------

/// Average the selected spices into a single blend profile.
///
/// Every pick contributes one full share, so picking the same spice twice
/// doubles its weight. Each dimension is the arithmetic mean over all picks,
/// rounded to one decimal with ties to even. An empty selection yields
/// `None`; it is not an error and never a zero profile.
///
/// # Panics
///
/// Panics if the selection holds an index outside the table. `SelectionSet`
/// refuses such picks, so hitting this means the selection was built against
/// a different table.
pub fn compute_blend(table: &SpiceTable, selection: &SelectionSet) -> Option<BlendResult> {
    let picks = selection.indices();
    if picks.is_empty() {
        return None;
    }

    let spices_used: Vec<String> = picks
        .iter()
        .map(|&i| table.records[i].name.clone())
        .collect();

    let count = picks.len() as f64;
    let profile = FlavorProfile::from_fn(|dim| {
        let sum: f64 = picks.iter().map(|&i| table.records[i].value(dim)).sum();
        round_tenth(sum / count)
    });

    Some(BlendResult {
        spices_used,
        profile,
    })
}

/// Round to one decimal place, ties to even (2.25 -> 2.2, 2.75 -> 2.8).
///
/// Works on the decimal rendering of the value: scaling by ten first can
/// land a value stored just below a midpoint (0.15 is 0.1499…) exactly on
/// the midpoint and round it the wrong way.
fn round_tenth(value: f64) -> f64 {
    format!("{value:.1}")
        .parse()
        .expect("a one-decimal rendering always parses back")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Dimension, SpiceRecord};

    fn record(name: &str, values: [f64; 6]) -> SpiceRecord {
        SpiceRecord {
            name: name.to_string(),
            sweetness: values[0],
            sourness: values[1],
            saltiness: values[2],
            spiciness: values[3],
            bitterness: values[4],
            umami: values[5],
        }
    }

    fn selection_of(picks: &[usize], table_len: usize) -> SelectionSet {
        let mut sel = SelectionSet::new();
        for &i in picks {
            assert!(sel.push(i, table_len));
        }
        sel
    }

    #[test]
    fn averages_two_spices() {
        let table = SpiceTable::new(vec![
            record("Cinnamon", [80.0, 10.0, 20.0, 50.0, 5.0, 30.0]),
            record("Sumac", [20.0, 70.0, 10.0, 30.0, 40.0, 10.0]),
        ]);
        let sel = selection_of(&[0, 1], table.len());

        let blend = compute_blend(&table, &sel).unwrap();
        assert_eq!(blend.spices_used, ["Cinnamon", "Sumac"]);

        let expected = [50.0, 40.0, 15.0, 40.0, 22.5, 20.0];
        for (i, &dim) in Dimension::ALL.iter().enumerate() {
            assert_eq!(blend.profile.get(dim), expected[i], "{dim}");
        }
    }

    #[test]
    fn empty_selection_yields_none() {
        let table = SpiceTable::new(vec![record("Cumin", [50.0; 6])]);
        let sel = SelectionSet::new();
        assert_eq!(compute_blend(&table, &sel), None);
    }

    #[test]
    fn duplicate_pick_doubles_weight() {
        let table = SpiceTable::new(vec![
            record("Cumin", [10.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
            record("Paprika", [40.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        ]);
        let sel = selection_of(&[0, 0, 1], table.len());

        let blend = compute_blend(&table, &sel).unwrap();
        // (10 + 10 + 40) / 3
        assert_eq!(blend.profile.get(Dimension::Sweetness), 20.0);
        assert_eq!(blend.spices_used, ["Cumin", "Cumin", "Paprika"]);
    }

    #[test]
    fn half_even_rounding_at_midpoints() {
        let table = SpiceTable::new(vec![
            record("A", [2.0, 2.5, 0.0, 0.0, 0.0, 0.0]),
            record("B", [2.5, 3.0, 0.0, 0.0, 0.0, 0.0]),
        ]);
        let sel = selection_of(&[0, 1], table.len());

        let blend = compute_blend(&table, &sel).unwrap();
        // means 2.25 and 2.75: both midpoints, rounded to the even tenth
        assert_eq!(blend.profile.get(Dimension::Sweetness), 2.2);
        assert_eq!(blend.profile.get(Dimension::Sourness), 2.8);
    }

    #[test]
    fn values_near_a_midpoint_round_on_their_exact_value() {
        let table = SpiceTable::new(vec![record(
            "Anise",
            [0.15, 0.35, 0.45, 0.0, 0.0, 0.0],
        )]);
        let sel = selection_of(&[0], table.len());

        let blend = compute_blend(&table, &sel).unwrap();
        // 0.15 and 0.35 are stored below their midpoints, 0.45 above.
        assert_eq!(blend.profile.get(Dimension::Sweetness), 0.1);
        assert_eq!(blend.profile.get(Dimension::Sourness), 0.3);
        assert_eq!(blend.profile.get(Dimension::Saltiness), 0.5);
    }

    #[test]
    #[should_panic]
    fn index_outside_the_table_panics() {
        let table = SpiceTable::new(vec![record("Cumin", [0.0; 6])]);
        let mut sel = SelectionSet::new();
        // Validated against a larger table than the one we blend with.
        assert!(sel.push(5, 10));

        let _ = compute_blend(&table, &sel);
    }

    #[test]
    fn spices_used_keeps_pick_order() {
        let table = SpiceTable::new(vec![
            record("Cumin", [0.0; 6]),
            record("Paprika", [0.0; 6]),
            record("Clove", [0.0; 6]),
        ]);
        let sel = selection_of(&[2, 0, 2], table.len());

        let blend = compute_blend(&table, &sel).unwrap();
        assert_eq!(blend.spices_used, ["Clove", "Cumin", "Clove"]);
    }

    #[test]
    fn same_selection_blends_identically() {
        let table = SpiceTable::new(vec![
            record("Cumin", [13.7, 21.1, 8.9, 55.3, 2.2, 31.4]),
            record("Paprika", [44.1, 9.8, 17.6, 23.5, 6.7, 12.3]),
            record("Clove", [5.5, 3.3, 1.1, 77.7, 66.6, 9.9]),
        ]);
        let sel = selection_of(&[1, 2, 1], table.len());

        let first = compute_blend(&table, &sel).unwrap();
        let second = compute_blend(&table, &sel).unwrap();
        assert_eq!(first, second);
    }
}
