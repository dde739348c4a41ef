use crate::cost::tests::test_utils::data_type_schema;
use crate::cost::tests::test_utils::estimate;
use crate::cost::tests::test_utils::schema_from_str;
use crate::schema::Schema;
use crate::CostError;
use crate::CostEstimate;
use indexmap::IndexMap;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// The scalar fields of `DataType` and their weights.
const SCALAR_FIELDS: [(&str, f64); 6] = [
    ("a", 1.0),
    ("b", 2.0),
    ("c", 3.0),
    ("d", 4.0),
    ("e", 5.0),
    ("f", 6.0),
];

fn run(schema: &Schema, query: &str) -> Result<CostEstimate, Vec<CostError>> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime")
        .block_on(estimate(schema, query, IndexMap::new()))
}

fn distinct_weight(field_indices: &[usize]) -> f64 {
    field_indices.iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|idx| SCALAR_FIELDS[*idx].1)
        .sum()
}

fn field_names(field_indices: &[usize]) -> Vec<&'static str> {
    field_indices.iter().map(|idx| SCALAR_FIELDS[*idx].0).collect()
}

proptest! {
    #[test]
    fn scalar_selection_costs_sum_of_distinct_fields(
        field_indices in prop::collection::vec(0usize..SCALAR_FIELDS.len(), 1..16),
    ) {
        let schema = data_type_schema();
        let query = format!("{{ {} }}", field_names(&field_indices).join(" "));

        let estimate = run(&schema, &query).expect("no fatal errors");
        prop_assert_eq!(estimate.cost(), distinct_weight(&field_indices));
    }

    #[test]
    fn selection_order_does_not_change_cost(
        field_indices in prop::collection::vec(0usize..SCALAR_FIELDS.len(), 1..16)
            .prop_flat_map(|indices| (Just(indices.clone()), Just(indices).prop_shuffle())),
    ) {
        let (original, shuffled) = field_indices;
        let schema = data_type_schema();

        let original_cost = run(&schema, &format!("{{ {} }}", field_names(&original).join(" ")))
            .expect("no fatal errors")
            .cost();
        let shuffled_cost = run(&schema, &format!("{{ {} }}", field_names(&shuffled).join(" ")))
            .expect("no fatal errors")
            .cost();
        prop_assert_eq!(original_cost, shuffled_cost);
    }

    #[test]
    fn fragment_position_does_not_change_cost(
        direct in prop::collection::vec(0usize..SCALAR_FIELDS.len(), 0..8),
        in_fragment in prop::collection::vec(0usize..SCALAR_FIELDS.len(), 1..8),
        spread_position in 0usize..8,
    ) {
        let schema = data_type_schema();
        let mut selections = field_names(&direct);
        selections.insert(spread_position.min(selections.len()), "...F");
        let query = format!(
            "{{ {} }} fragment F on DataType {{ {} }}",
            selections.join(" "),
            field_names(&in_fragment).join(" "),
        );

        let all_fields: Vec<usize> = direct.iter().chain(in_fragment.iter()).copied().collect();
        let estimate = run(&schema, &query).expect("no fatal errors");
        prop_assert_eq!(estimate.cost(), distinct_weight(&all_fields));
    }

    #[test]
    fn list_fields_multiply_and_singular_fields_add(
        own_weight in 0u32..100,
        x_weight in 0u32..100,
        y_weight in 0u32..100,
    ) {
        let schema = schema_from_str(&format!(
            "type Query {{\n\
              one: Child @cost(weight: {own_weight})\n\
              many: [Child] @cost(weight: {own_weight})\n\
            }}\n\
            type Child {{\n\
              x: Int @cost(weight: {x_weight})\n\
              y: Int @cost(weight: {y_weight})\n\
            }}\n",
        ));
        let (own, x, y) = (own_weight as f64, x_weight as f64, y_weight as f64);

        let one = run(&schema, "{ one { x y } }").expect("no fatal errors").cost();
        let many = run(&schema, "{ many { x y } }").expect("no fatal errors").cost();

        prop_assert_eq!(one, own + (x + y));
        prop_assert_eq!(many, own * (x + y));
    }

    #[test]
    fn fragment_cycles_always_fail(chain_length in 1usize..6) {
        let schema = data_type_schema();
        let fragments: Vec<String> = (0..chain_length)
            .map(|idx| format!(
                "fragment F{idx} on DataType {{ a ...F{} }}",
                (idx + 1) % chain_length,
            ))
            .collect();
        let query = format!("{{ ...F0 }}\n{}", fragments.join("\n"));

        let errors = run(&schema, &query).expect_err("cyclic fragments");
        prop_assert_eq!(errors.len(), 1);
        let is_cycle_of_expected_length = matches!(
            &errors[0],
            CostError::CyclicFragment { cycle, .. } if cycle.len() == chain_length + 1,
        );
        prop_assert!(is_cycle_of_expected_length);
    }
}
