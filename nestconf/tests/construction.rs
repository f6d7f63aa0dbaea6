//! Construction of configurable types from keyword arguments and records.

use anyhow::{Result, anyhow, ensure};
use nestconf::{Configurable, HasConfig, Kwargs, NestconfError, Record, RecordType};
use rstest::{fixture, rstest};
use serde_json::json;

#[derive(Debug, Configurable)]
struct Person {
    name: Option<String>,
    age: Option<u32>,
    #[nestconf(skip)]
    people_root_path: Option<String>,
}

fn default_tags() -> Vec<String> {
    vec!["baseline".to_owned()]
}

#[derive(Debug, Configurable)]
struct Experiment {
    #[nestconf(default = 0.001)]
    lr: Option<f64>,
    #[nestconf(default_factory = default_tags)]
    tags: Option<Vec<String>>,
    seed: Option<u64>,
}

fn person_record(age: Option<u32>) -> PersonConfig {
    Person {
        name: Some("John".to_owned()),
        age,
        people_root_path: None,
    }
    .config()
}

#[fixture]
fn john() -> PersonConfig {
    person_record(Some(30))
}

#[test]
fn unset_fields_without_default_are_null() -> Result<()> {
    let person = Person::from_kwargs(Kwargs::new().with("name", "John"))
        .map_err(|err| anyhow!("construction failed: {err}"))?;
    ensure!(person.name.as_deref() == Some("John"));
    ensure!(person.age.is_none(), "age should be null, got {:?}", person.age);
    ensure!(person.people_root_path.is_none());
    Ok(())
}

#[test]
fn declared_defaults_fill_unset_fields() -> Result<()> {
    let experiment = Experiment::from_kwargs(Kwargs::new().with("seed", 7))
        .map_err(|err| anyhow!("construction failed: {err}"))?;
    ensure!(experiment.lr == Some(0.001), "got {:?}", experiment.lr);
    ensure!(experiment.tags == Some(default_tags()), "got {:?}", experiment.tags);
    ensure!(experiment.seed == Some(7));
    Ok(())
}

#[test]
fn factory_defaults_are_not_shared() -> Result<()> {
    let mut first = Experiment::from_kwargs(Kwargs::new())
        .map_err(|err| anyhow!("construction failed: {err}"))?;
    let second = Experiment::from_kwargs(Kwargs::new())
        .map_err(|err| anyhow!("construction failed: {err}"))?;
    first
        .tags
        .as_mut()
        .ok_or_else(|| anyhow!("tags should be defaulted"))?
        .push("mutated".to_owned());
    ensure!(second.tags == Some(default_tags()), "got {:?}", second.tags);
    ensure!(first.tags.as_ref().map(Vec::len) == Some(2));
    Ok(())
}

#[rstest]
fn record_values_are_copied_into_the_instance(john: PersonConfig) -> Result<()> {
    let person = Person::construct(Some(john.clone()), Kwargs::new())
        .map_err(|err| anyhow!("construction failed: {err}"))?;
    ensure!(person.config() == john);
    Ok(())
}

#[rstest]
fn conflicting_values_are_rejected(john: PersonConfig) -> Result<()> {
    let Err(err) = Person::construct(Some(john), Kwargs::new().with("age", 31)) else {
        return Err(anyhow!("expected a conflict"));
    };
    let NestconfError::ConflictingValues {
        field,
        record,
        kwarg,
    } = &*err
    else {
        return Err(anyhow!("unexpected error: {err}"));
    };
    ensure!(field == "age" && *record == json!(30) && *kwarg == json!(31));
    Ok(())
}

#[rstest]
#[case::same_value(Some(30), json!(30), Some(30))]
#[case::record_unset(None, json!(31), Some(31))]
#[case::kwarg_null(Some(30), json!(null), Some(30))]
fn null_on_either_side_never_conflicts(
    #[case] held: Option<u32>,
    #[case] given: serde_json::Value,
    #[case] expected: Option<u32>,
) -> Result<()> {
    let record = person_record(held);
    let person = Person::construct(Some(record), Kwargs::new().with("age", given))
        .map_err(|err| anyhow!("construction failed: {err}"))?;
    ensure!(person.age == expected, "got {:?}", person.age);
    ensure!(person.name.as_deref() == Some("John"));
    Ok(())
}

#[test]
fn unknown_keyword_arguments_are_rejected() {
    let err = Person::from_kwargs(Kwargs::new().with("height", 180)).err();
    assert!(matches!(
        err.as_deref(),
        Some(NestconfError::UnknownField { record: "PersonConfig", field }) if field == "height"
    ));
}

#[test]
fn undecodable_keyword_values_are_rejected() {
    let err = Person::from_kwargs(Kwargs::new().with("age", "thirty")).err();
    assert!(matches!(
        err.as_deref(),
        Some(NestconfError::InvalidValue { field, .. }) if field == "age"
    ));
}

#[derive(Debug, Configurable)]
struct Project {
    title: Option<String>,
}

#[rstest]
fn foreign_records_are_a_type_mismatch(john: PersonConfig) -> Result<()> {
    let Err(err) = Project::construct_dyn(Some(&john), Kwargs::new()) else {
        return Err(anyhow!("expected a type mismatch"));
    };
    ensure!(
        matches!(
            &*err,
            NestconfError::TypeMismatch {
                expected: "ProjectConfig",
                found: "PersonConfig"
            }
        ),
        "unexpected error: {err}"
    );
    let person = Person::construct_dyn(Some(&john), Kwargs::new())
        .map_err(|err| anyhow!("matching record rejected: {err}"))?;
    ensure!(person.name.as_deref() == Some("John"));
    Ok(())
}

#[rstest]
fn skipped_extras_stay_out_of_the_record(john: PersonConfig) -> Result<()> {
    let mut person = Person::from_config(john);
    person.people_root_path = Some("/data/people".to_owned());
    let names: Vec<&str> = PersonConfig::fields().iter().map(|f| f.name()).collect();
    ensure!(names == ["name", "age"], "unexpected fields: {names:?}");
    let mapping = person.config().to_mapping();
    ensure!(!mapping.contains_key("people_root_path"));
    ensure!(
        Person::from_kwargs(Kwargs::new().with("people_root_path", "/tmp")).is_err(),
        "extras are not keyword arguments"
    );
    Ok(())
}

#[test]
fn snapshots_are_independent_of_the_instance() -> Result<()> {
    let mut person = Person::from_kwargs(Kwargs::new().with("name", "John"))
        .map_err(|err| anyhow!("construction failed: {err}"))?;
    let snapshot = person.config();
    person.name = Some("Jane".to_owned());
    ensure!(snapshot.name().map(String::as_str) == Some("John"));
    ensure!(person.config() != snapshot);
    Ok(())
}
