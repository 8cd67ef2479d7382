//! 通过资源定位符构建容器


use common::*;
use context_impl::{ClassPathResolver, ContextLoader, EmbeddedResources, LoaderOptions};
use registry_abstractions::{resource_path_for_module, Container, ContainerExt, ContextFormat};
use registry_common::ContextError;
use registry_impl::ContainerBuilder;
use std::fs;
use std::io::{self, Cursor, Read};
use tempfile::TempDir;

#[test]
fn builds_from_files_under_resource_roots() -> anyhow::Result<()> {
    let root = TempDir::new()?;
    fs::create_dir_all(root.path().join("contexts"))?;
    fs::write(root.path().join("contexts/scenario.json"), SCENARIO_JSON)?;
    fs::write(root.path().join("contexts/scenario.toml"), SCENARIO_TOML)?;

    let builder = builder().with_resolver(ClassPathResolver::new().with_root(root.path()));

    let from_json = builder.build_from_locator("classpath:/contexts/scenario.json")?;
    let from_toml = builder.build_from_locator("/contexts/scenario.toml")?;
    assert_eq!(from_json.object_count(), 3);
    assert_eq!(from_toml.object_count(), 3);
    assert!(from_toml.contains::<Gamma>()?);
    Ok(())
}

#[test]
fn embedded_resources_use_module_relative_locators() -> anyhow::Result<()> {
    let locator = resource_path_for_module(module_path!(), "scenario.json");
    let resources = EmbeddedResources::new().with_resource(&locator, SCENARIO_JSON.as_bytes());

    let container = builder()
        .with_resolver(resources)
        .build_from_locator(&locator)?;
    assert_eq!(container.get_all::<dyn Writable>()?.len(), 2);
    Ok(())
}

#[test]
fn options_drive_loader_and_resolver() -> anyhow::Result<()> {
    let root = TempDir::new()?;
    fs::write(root.path().join("scenario.ctx"), SCENARIO_TOML)?;
    let options_path = root.path().join("registry.toml");
    fs::write(
        &options_path,
        format!(
            "resource_roots = [{:?}]\ndefault_format = \"toml\"\nmax_records = 2\n",
            root.path().display().to_string()
        ),
    )?;

    let options = LoaderOptions::load(Some(options_path.as_path()), "LORN_REGISTRY_IT_OPTIONS")?;
    assert_eq!(options.default_format, ContextFormat::Toml);

    init_logging();
    let builder = ContainerBuilder::new(ContextLoader::with_options(catalog(), &options))
        .with_resolver(ClassPathResolver::from_options(&options))
        .with_default_format(options.default_format);

    // 扩展名无法识别时使用默认格式，三条记录超出上限
    assert!(matches!(
        builder.build_from_locator("scenario.ctx"),
        Err(ContextError::TooManyRecords { limit: 2 })
    ));
    Ok(())
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "reset"))
    }
}

#[test]
fn invalid_contexts_are_rejected() {
    let resources = EmbeddedResources::new()
        .with_resource("/broken.json", &b"{\"class\": \"Alpha\", "[..])
        .with_resource("/unknown.json", &b"{\"class\": \"Delta\"}"[..])
        .with_resource("/undecodable.json", &b"{\"class\": \"Alpha\", \"properties\": {}}"[..]);
    let builder = builder().with_resolver(resources);

    assert!(matches!(
        builder.build_from_locator(""),
        Err(ContextError::MissingInput { .. })
    ));
    assert!(matches!(
        builder.build_from_locator("/absent.json"),
        Err(ContextError::ResourceNotFound { .. })
    ));
    assert!(matches!(
        builder.build_from_locator("/broken.json"),
        Err(ContextError::Malformed { .. })
    ));
    assert!(matches!(
        builder.build_from_locator("/unknown.json"),
        Err(ContextError::UnknownClass { class }) if class == "Delta"
    ));
    assert!(matches!(
        builder.build_from_locator("/undecodable.json"),
        Err(ContextError::PropertyDecode { .. })
    ));
    assert!(matches!(
        builder.build_from_reader(FailingReader),
        Err(ContextError::ReadFailed { .. })
    ));
    assert!(matches!(
        builder.build_from_reader(Cursor::new("{\"ref\": \"nobody\"}")),
        Err(ContextError::UnresolvedReference { .. })
    ));
}

#[test]
fn locator_without_resolver_is_invalid() {
    let err = builder().build_from_locator("/scenario.json").unwrap_err();
    assert!(err.is_resource_error());
}
