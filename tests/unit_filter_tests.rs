use std::cell::RefCell;
use std::rc::Rc;

use unit_filter::api::{InMemoryQueryState, QueryState, UnitFilter, UnitFilterConfig};
use unit_filter::core::{OptionGroup, UnitOption, UnitTaxonomy};

fn time_and_data_taxonomy() -> UnitTaxonomy {
    UnitTaxonomy::builder()
        .category(
            "time",
            vec![
                UnitOption::new("s", "seconds"),
                UnitOption::new("ms", "milliseconds"),
            ],
        )
        .expect("time category")
        .category("data", vec![UnitOption::new("B", "bytes")])
        .expect("data category")
        .build()
}

fn support(categories: &[&str]) -> UnitFilterConfig {
    UnitFilterConfig::default()
        .with_categories(categories.iter().map(|name| (*name).to_owned()).collect())
}

#[test]
fn build_options_groups_supported_categories_in_declared_order() {
    let taxonomy = time_and_data_taxonomy();
    let filter = UnitFilter::new(&taxonomy, InMemoryQueryState::default())
        .with_config(support(&["time", "data"]));

    let groups = filter.build_options();
    assert_eq!(
        groups,
        vec![
            OptionGroup {
                label: "time".to_owned(),
                options: vec![
                    UnitOption::new("s", "seconds"),
                    UnitOption::new("ms", "milliseconds"),
                ],
            },
            OptionGroup {
                label: "data".to_owned(),
                options: vec![UnitOption::new("B", "bytes")],
            },
        ]
    );
}

#[test]
fn each_group_mirrors_select_options_exactly() {
    let taxonomy = time_and_data_taxonomy();
    let filter = UnitFilter::new(&taxonomy, InMemoryQueryState::default())
        .with_config(support(&["time", "data"]));

    for group in filter.build_options() {
        assert_eq!(group.options, taxonomy.select_options(&group.label));
    }
}

#[test]
fn omitted_categories_never_appear() {
    let taxonomy = time_and_data_taxonomy();
    let filter = UnitFilter::new(&taxonomy, InMemoryQueryState::default())
        .with_config(support(&["data"]));

    let groups = filter.build_options();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].label, "data");
}

#[test]
fn unsupported_category_renders_as_empty_group() {
    let taxonomy = time_and_data_taxonomy();
    let filter = UnitFilter::new(&taxonomy, InMemoryQueryState::default())
        .with_config(support(&["time", "currency"]));

    let groups = filter.build_options();
    assert_eq!(groups[1].label, "currency");
    assert!(groups[1].options.is_empty());
}

#[test]
fn default_config_uses_builtin_support_list() {
    let filter = UnitFilter::new(UnitTaxonomy::builtin(), InMemoryQueryState::default());
    let labels: Vec<String> = filter
        .build_options()
        .into_iter()
        .map(|group| group.label)
        .collect();
    assert_eq!(
        labels,
        ["Data", "Data Rate", "Miscellaneous", "Throughput", "Time"]
    );
}

#[test]
fn selection_change_is_read_after_write_consistent() {
    let taxonomy = time_and_data_taxonomy();
    let mut filter = UnitFilter::new(&taxonomy, InMemoryQueryState::default());

    assert_eq!(filter.current_selection(), None);
    filter.on_selection_change(Some("ms"));
    assert_eq!(filter.current_selection(), Some("ms".to_owned()));

    // Last write wins across successive changes.
    filter.on_selection_change(Some("s"));
    filter.on_selection_change(Some("B"));
    assert_eq!(filter.current_selection(), Some("B".to_owned()));
}

#[test]
fn clearing_selection_writes_the_cleared_sentinel() {
    let taxonomy = time_and_data_taxonomy();
    let mut filter = UnitFilter::new(&taxonomy, InMemoryQueryState::default());

    filter.on_selection_change(Some("ms"));
    filter.on_selection_change(None);
    assert_eq!(filter.current_selection(), None);
}

#[test]
fn empty_string_selection_is_distinct_from_cleared() {
    let taxonomy = time_and_data_taxonomy();
    let mut filter = UnitFilter::new(&taxonomy, InMemoryQueryState::default());

    filter.on_selection_change(Some(""));
    assert_eq!(filter.current_selection(), Some(String::new()));
}

#[test]
fn unknown_values_are_forwarded_unvalidated() {
    let taxonomy = time_and_data_taxonomy();
    let mut filter = UnitFilter::new(&taxonomy, InMemoryQueryState::default());

    filter.on_selection_change(Some("furlongs"));
    assert_eq!(filter.current_selection(), Some("furlongs".to_owned()));
}

#[test]
fn callback_is_invoked_exactly_once_per_change_with_the_new_value() {
    let taxonomy = time_and_data_taxonomy();
    let observed: Rc<RefCell<Vec<Option<String>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&observed);

    let mut filter = UnitFilter::new(&taxonomy, InMemoryQueryState::default()).with_on_change(
        Box::new(move |value| {
            sink.borrow_mut().push(value.map(str::to_owned));
        }),
    );

    filter.on_selection_change(Some("ms"));
    filter.on_selection_change(None);

    assert_eq!(
        *observed.borrow(),
        vec![Some("ms".to_owned()), None]
    );
}

#[test]
fn store_write_happens_even_without_a_callback() {
    let taxonomy = time_and_data_taxonomy();
    let store = Rc::new(RefCell::new(InMemoryQueryState::default()));
    let mut filter = UnitFilter::new(&taxonomy, Rc::clone(&store));

    filter.on_selection_change(Some("s"));
    assert_eq!(store.borrow().unit(), Some("s".to_owned()));
}

#[test]
fn shared_store_handle_reflects_external_writes() {
    let taxonomy = time_and_data_taxonomy();
    let store = Rc::new(RefCell::new(InMemoryQueryState::default()));
    let filter = UnitFilter::new(&taxonomy, Rc::clone(&store));

    store.borrow_mut().set_unit(Some("ms"));
    assert_eq!(filter.current_selection(), Some("ms".to_owned()));
}

#[test]
fn matcher_predicate_is_exposed_to_the_presentation_layer() {
    let taxonomy = time_and_data_taxonomy();
    let filter = UnitFilter::new(&taxonomy, InMemoryQueryState::default())
        .with_config(support(&["time"]));

    let groups = filter.build_options();
    let visible: Vec<&str> = groups[0]
        .options
        .iter()
        .filter(|option| filter.matches("mil", &option.label))
        .map(|option| option.label.as_str())
        .collect();
    assert_eq!(visible, ["milliseconds"]);
}
