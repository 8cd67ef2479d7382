//! 从上下文构建容器并按类型查询


use common::*;
use registry_abstractions::{Container, ContainerExt, ContextFormat};
use registry_common::{QueryError, TypeKey};
use std::io::Cursor;

fn labels(readers: &[std::sync::Arc<dyn Readable>]) -> Vec<String> {
    readers.iter().map(|r| r.label().to_string()).collect()
}

#[test]
fn shared_capabilities_are_ambiguous_for_single_lookup() -> anyhow::Result<()> {
    let container = builder().build_from_reader(Cursor::new(SCENARIO_JSON))?;

    assert_eq!(labels(&container.get_all::<dyn Readable>()?), vec!["a", "b"]);

    let writers = container.get_all::<dyn Writable>()?;
    assert_eq!(writers.len(), 2);
    assert_eq!(writers[0].write("x"), "b:x");
    assert_eq!(writers[1].write("x"), "x");

    assert!(matches!(
        container.get_single_or_none::<dyn Readable>(),
        Err(QueryError::AmbiguousQuery { candidates: 2, .. })
    ));
    assert!(matches!(
        container.get_single_or_none::<dyn Writable>(),
        Err(QueryError::AmbiguousQuery { candidates: 2, .. })
    ));

    let gamma = container.get_single_or_none::<Gamma>()?;
    assert!(gamma.is_some());

    assert!(!container.contains::<dyn Unrelated>()?);
    assert!(container.get_all::<dyn Unrelated>()?.is_empty());
    assert!(container.get_single_or_none::<dyn Unrelated>()?.is_none());
    Ok(())
}

#[test]
fn toml_context_matches_json_context() -> anyhow::Result<()> {
    let builder = builder();
    let from_json = builder.build_from_reader(Cursor::new(SCENARIO_JSON))?;
    let from_toml = builder.build_from_reader_as(Cursor::new(SCENARIO_TOML), ContextFormat::Toml)?;

    assert_eq!(from_json.object_count(), from_toml.object_count());
    assert_eq!(from_json.known_types(), from_toml.known_types());
    assert_eq!(
        labels(&from_toml.get_all::<dyn Readable>()?),
        labels(&from_json.get_all::<dyn Readable>()?)
    );
    Ok(())
}

#[test]
fn references_do_not_duplicate_objects() -> anyhow::Result<()> {
    let context = r#"
        {"id": "b", "class": "Beta", "properties": {"label": "b"}}
        {"ref": "b"}
        [{"ref": "b"}, {"class": "Beta", "properties": {"label": "other"}}]
    "#;
    let container = builder().build_from_reader(Cursor::new(context))?;

    assert_eq!(container.object_count(), 2);
    let all = container.lookup_all(Some(&TypeKey::of::<Beta>()))?;
    assert_eq!(all.len(), 2);
    assert!(!all[0].is_same(&all[1]));
    assert_eq!(labels(&container.get_all::<dyn Readable>()?), vec!["b", "other"]);
    Ok(())
}

#[test]
fn nested_objects_are_reachable_through_their_parent() -> anyhow::Result<()> {
    let context = r#"{"class": "ParentBean", "properties": {"child": {"name": "child-1"}}}"#;
    let container = builder().build_from_reader(Cursor::new(context))?;

    let parent = container.get_required::<dyn Parent>()?;
    assert_eq!(parent.child().name, "child-1");

    // 只有根对象会被编目
    assert!(container.get_single_or_none::<ChildSettings>()?.is_none());
    assert_eq!(container.object_count(), 1);
    Ok(())
}

#[test]
fn queries_by_name_follow_typed_queries() -> anyhow::Result<()> {
    let container = builder().build_from_reader(Cursor::new(SCENARIO_JSON))?;
    let readable = TypeKey::of::<dyn Readable>();

    assert_eq!(
        container.type_key_by_name(readable.name()),
        Some(readable)
    );
    assert_eq!(container.lookup_all_by_name(readable.name())?.len(), 2);
    assert!(container.exists_by_name(TypeKey::of::<Alpha>().name())?);
    assert!(!container.exists_by_name("no::such::Type")?);
    assert!(matches!(
        container.lookup_all_by_name(" "),
        Err(QueryError::InvalidQuery { .. })
    ));
    assert!(matches!(
        container.exists(None),
        Err(QueryError::InvalidQuery { .. })
    ));
    Ok(())
}

#[test]
fn required_lookup_reports_missing_objects() -> anyhow::Result<()> {
    let container = builder().build_from_reader(Cursor::new(""))?;

    assert!(container.is_empty());
    assert!(matches!(
        container.get_required::<dyn Readable>(),
        Err(QueryError::NotFound { .. })
    ));
    Ok(())
}
